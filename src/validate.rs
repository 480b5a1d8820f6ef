//! # Credential Validation
//!
//! Checks that the public API id and private API key have the expected shape:
//! one or more ASCII letters and nothing else.
//!
//! Validation is separate from encryption. Callers should check
//! [`is_valid`] (or [`validate`] for a descriptive error) before calling
//! [`crate::encrypt_options`]; the encoder does not check credential shape.

use crate::config::WidgetConfiguration;
use crate::{Error, Result};

/// Returns `true` when both `public_api_id` and `private_api_key` consist
/// solely of ASCII letters.
///
/// Conversation and user fields and the container id are not checked.
#[must_use]
pub fn is_valid(configuration: &WidgetConfiguration) -> bool {
    is_alpha(configuration.public_api_id()) && is_alpha(configuration.private_api_key())
}

/// Returns `true` when `s` is non-empty and every character is an ASCII
/// letter.
#[must_use]
pub fn is_alpha(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Validate credentials, naming the offending field on failure.
///
/// # Errors
///
/// Returns [`Error::Validation`] if either the public API id or private API
/// key is empty or contains a character that is not an ASCII letter.
pub fn validate(configuration: &WidgetConfiguration) -> Result<()> {
    check_field("public_api_id", configuration.public_api_id())?;
    check_field("private_api_key", configuration.private_api_key())
}

fn check_field(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Validation(format!("`{name}` is missing")));
    }
    if !is_alpha(value) {
        return Err(Error::Validation(format!("`{name}` must contain only ASCII letters")));
    }
    Ok(())
}
