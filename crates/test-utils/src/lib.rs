//! # Test Utilities for Planga
//!
//! Fixtures and helpers shared by the integration tests: known keys, sample
//! configurations, a deterministic id generator and token inspection helpers.
//!
//! This crate is not intended to be used directly.

#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod sample;
pub mod token;

use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};

use planga::IdGenerator;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// initalise tracing once for all tests
static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// # Panics
///
/// Panics if the tracing subscriber cannot be set.
pub fn init_tracer() {
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder().with_max_level(Level::ERROR).finish();
        tracing::subscriber::set_global_default(subscriber).expect("subscriber set");
    });
}

/// Deterministic `IdGenerator` yielding `0`, `1`, `2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicUsize,
}

impl SequentialIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}
