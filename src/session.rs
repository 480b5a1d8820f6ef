//! # Session Options
//!
//! The widget learns which conversation to join and who the current user is
//! from an encrypted token rather than from clear text in the page. The token
//! is a compact JWE (`A128GCMKW` + `A128GCM`) sealed with the application's
//! private API key, so only the Planga server can open it and any change to
//! it is detected.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::Result;
use crate::config::WidgetConfiguration;
use crate::jose::{Jwk, jwe};

/// The session fields sealed into the token.
///
/// Serializes as a JSON object with keys in declaration order:
/// `conversation_id`, `current_user_id`, `current_user_name`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SessionPayload {
    /// Conversation the widget joins.
    pub conversation_id: String,

    /// Host application's id for the current user.
    pub current_user_id: String,

    /// Display name of the current user.
    pub current_user_name: String,
}

impl From<&WidgetConfiguration> for SessionPayload {
    fn from(configuration: &WidgetConfiguration) -> Self {
        Self {
            conversation_id: configuration.conversation_id().to_string(),
            current_user_id: configuration.current_user_id().to_string(),
            current_user_name: configuration.current_user_name().to_string(),
        }
    }
}

/// Encrypt the session options of `configuration` into a compact JWE.
///
/// The private API key is used directly as the base64url encoded 128-bit key
/// (no key derivation). Credential shape is not checked here; call
/// [`crate::validate::is_valid`] first.
///
/// # Errors
///
/// Returns [`crate::Error::Encoding`] if the private API key is not valid
/// 128-bit key material or the payload cannot be encrypted.
#[instrument(level = "debug", skip_all, fields(public_api_id = configuration.public_api_id()))]
pub fn encrypt_options(configuration: &WidgetConfiguration) -> Result<String> {
    tracing::debug!("encrypt_options");

    let key = Jwk::oct(configuration.private_api_key());
    let payload = SessionPayload::from(configuration);
    jwe::encrypt(&payload, &key)
}

/// Open a token produced by [`encrypt_options`], as the Planga server does.
///
/// # Errors
///
/// Returns [`crate::Error::Encoding`] for unusable key material,
/// [`crate::Error::Decoding`] for a malformed token, and
/// [`crate::Error::Authentication`] if the token was altered or sealed with a
/// different key.
#[instrument(level = "debug", skip_all)]
pub fn decrypt_options(token: &str, private_api_key: &str) -> Result<SessionPayload> {
    tracing::debug!("decrypt_options");

    let key = Jwk::oct(private_api_key);
    jwe::decrypt(token, &key)
}
