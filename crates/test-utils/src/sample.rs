//! Sample credentials and configurations.

use planga::WidgetConfiguration;

pub const PUBLIC_API_ID: &str = "abcDEF";

/// Letters only, and base64url for exactly 16 bytes: passes validation and
/// is usable key material.
pub const PRIVATE_API_KEY: &str = "PlangaSecretKeyForTesw";

/// Another valid key, for wrong-key checks.
pub const OTHER_API_KEY: &str = "abcdefghijklmnopqrstuQ";

/// Base64url of `0123456789abcdef`: usable key material, but fails
/// letters-only validation.
pub const NUMERIC_API_KEY: &str = "MDEyMzQ1Njc4OWFiY2RlZg";

/// Decodes to 24 bytes, so cannot be used as a 128-bit key.
pub const WRONG_LENGTH_API_KEY: &str = "0123456789abcdef0123456789abcdef";

pub const CONVERSATION_ID: &str = "conv-1";
pub const CURRENT_USER_ID: &str = "u-42";
pub const CURRENT_USER_NAME: &str = "Ada";

/// A configuration with valid credentials and the sample session fields.
#[must_use]
pub fn configuration() -> WidgetConfiguration {
    configuration_with_key(PRIVATE_API_KEY)
}

/// The sample configuration using `private_api_key`.
#[must_use]
pub fn configuration_with_key(private_api_key: &str) -> WidgetConfiguration {
    WidgetConfiguration::builder()
        .public_api_id(PUBLIC_API_ID)
        .private_api_key(private_api_key)
        .conversation_id(CONVERSATION_ID)
        .current_user_id(CURRENT_USER_ID)
        .current_user_name(CURRENT_USER_NAME)
        .build()
}
