//! # Core Utilities for Planga
//!

pub mod generate;
