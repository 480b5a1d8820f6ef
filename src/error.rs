//! # Errors
//!
//! Errors returned when validating a widget configuration, building the
//! encrypted session options, or opening them again.

use thiserror::Error;

/// Errors raised by this crate.
///
/// Validation is advisory: only [`crate::validate::validate`] returns
/// [`Error::Validation`]. Encrypting never checks credential shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The public API id or private API key does not have the expected
    /// letters-only shape.
    #[error("validation error: {0}")]
    Validation(String),

    /// The private API key is not usable key material, or the session payload
    /// could not be serialized or encrypted.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The token is not a well-formed compact JWE for `A128GCMKW`/`A128GCM`.
    #[error("decoding error: {0}")]
    Decoding(String),

    /// The token failed authentication: it was altered or encrypted under a
    /// different key.
    #[error("authentication error: {0}")]
    Authentication(String),
}

/// Result type for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Encoding(format!("issue serializing: {e}"))
    }
}
