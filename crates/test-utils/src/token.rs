//! Helpers for inspecting and altering compact JWE tokens.

use aes_gcm::Aes128Gcm;
use aes_gcm::aead::{KeyInit, OsRng};
use anyhow::{anyhow, bail};
use base64ct::{Base64UrlUnpadded as Base64, Encoding};
use serde_json::Value;

/// Index of each compact JWE segment.
pub const HEADER: usize = 0;
pub const ENCRYPTED_KEY: usize = 1;
pub const IV: usize = 2;
pub const CIPHERTEXT: usize = 3;
pub const TAG: usize = 4;

/// Returns `true` if `s` is non-empty and uses only the unpadded base64url
/// alphabet.
#[must_use]
pub fn is_base64url(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Decode the protected header of a compact JWE.
pub fn header(token: &str) -> anyhow::Result<Value> {
    let segment = token.split('.').next().ok_or_else(|| anyhow!("empty token"))?;
    let bytes = Base64::decode_vec(segment).map_err(|e| anyhow!("issue decoding header: {e}"))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Decoded length in bytes of one segment.
pub fn segment_len(token: &str, segment: usize) -> anyhow::Result<usize> {
    let part = token.split('.').nth(segment).ok_or_else(|| anyhow!("no segment {segment}"))?;
    let bytes = Base64::decode_vec(part).map_err(|e| anyhow!("issue decoding: {e}"))?;
    Ok(bytes.len())
}

/// Flip every bit of one byte in the given segment, returning the altered
/// token. `index` wraps around the decoded segment length.
pub fn tamper(token: &str, segment: usize, index: usize) -> anyhow::Result<String> {
    let mut parts: Vec<String> = token.split('.').map(ToString::to_string).collect();
    let Some(part) = parts.get_mut(segment) else {
        bail!("no segment {segment}");
    };

    let mut bytes = Base64::decode_vec(part).map_err(|e| anyhow!("issue decoding: {e}"))?;
    if bytes.is_empty() {
        bail!("segment {segment} is empty");
    }
    let len = bytes.len();
    bytes[index % len] ^= 0xff;
    *part = Base64::encode_string(&bytes);

    Ok(parts.join("."))
}

/// A fresh random 128-bit key, base64url encoded.
#[must_use]
pub fn random_key() -> String {
    let key = Aes128Gcm::generate_key(&mut OsRng);
    Base64::encode_string(&key)
}
