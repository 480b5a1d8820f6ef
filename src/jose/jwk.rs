//! # JSON Web Key (JWK)
//!
//! A JWK ([RFC7517]) is a JSON representation of a cryptographic key. Only
//! symmetric octet keys (`"kty": "oct"`, [RFC7518] section 6.4) are used here.
//! The `k` member holds the base64url encoded key bytes; the private API key
//! of a Planga application is exactly this value.
//!
//! [RFC7517]: https://www.rfc-editor.org/rfc/rfc7517
//! [RFC7518]: https://www.rfc-editor.org/rfc/rfc7518

use aes_gcm::Aes128Gcm;
use aes_gcm::aead::KeyInit;
use base64ct::{Base64UrlUnpadded as Base64, Encoding};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Length in bytes of an AES-128 key.
pub const KEY_LENGTH: usize = 16;

/// Simplified symmetric JSON Web Key.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Jwk {
    /// Key type.
    pub kty: KeyType,

    /// Key value, base64url encoded.
    pub k: String,
}

/// Cryptographic key type.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
pub enum KeyType {
    /// Octet sequence (symmetric key)
    #[default]
    #[serde(rename = "oct")]
    Oct,
}

impl Jwk {
    /// Create an octet key from its base64url encoded value.
    #[must_use]
    pub fn oct(k: impl Into<String>) -> Self {
        Self {
            kty: KeyType::Oct,
            k: k.into(),
        }
    }

    /// Create an octet key from raw key bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::oct(Base64::encode_string(bytes))
    }

    /// Decode the raw key bytes. Trailing `=` padding is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if `k` is not valid base64url.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Base64::decode_vec(self.k.trim_end_matches('='))
            .map_err(|e| Error::Encoding(format!("issue decoding key: {e}")))
    }

    /// An AES-128-GCM cipher keyed with this JWK.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the key cannot be decoded or is not
    /// 128 bits long.
    pub(crate) fn cipher(&self) -> Result<Aes128Gcm> {
        let bytes = self.to_bytes()?;
        if bytes.len() != KEY_LENGTH {
            return Err(Error::Encoding(format!(
                "key must be {KEY_LENGTH} bytes, got {}",
                bytes.len()
            )));
        }
        Aes128Gcm::new_from_slice(&bytes).map_err(|e| Error::Encoding(format!("key issue: {e}")))
    }
}

impl std::fmt::Debug for Jwk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Jwk").field("kty", &self.kty).field("k", &"[redacted]").finish()
    }
}
