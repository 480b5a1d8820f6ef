//! # Identifier Generation
//!
//! Container ids for the chat widget are generated when the host application
//! does not provide one. Generation sits behind [`IdGenerator`] so callers
//! (and tests) can substitute their own scheme.

use uuid::Uuid;

/// Prefix given to every generated container id.
pub const CONTAINER_PREFIX: &str = "planga-chat-";

/// Source of unique identifiers.
pub trait IdGenerator: Send + Sync {
    /// Return a new identifier. Identifiers should not repeat for the lifetime
    /// of the generator.
    fn generate(&self) -> String;
}

/// Generates 128-bit random identifiers (UUID v4), hex encoded without
/// hyphens.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Generate a container id using the given generator.
#[must_use]
pub fn container_id(generator: &impl IdGenerator) -> String {
    format!("{CONTAINER_PREFIX}{}", generator.generate())
}

/// Generate a container id using [`RandomIds`].
#[must_use]
pub fn random_container_id() -> String {
    container_id(&RandomIds)
}
