//! # JSON Web Encryption (JWE)
//!
//! JWE ([RFC7516]) specifies how encrypted content can be represented using JSON.
//! See JWA ([RFC7518]) for more on the cyptographic algorithms and identifiers
//! used.
//!
//! Only one algorithm pair is supported:
//!
//! - `alg`: `A128GCMKW`, the content encryption key (CEK) is wrapped with
//!   AES-GCM under a shared 128-bit key ([RFC7518] section 4.7). The key wrap
//!   IV and tag travel in the protected header as `iv` and `tag`.
//! - `enc`: `A128GCM`, the payload is encrypted with AES-GCM under the CEK
//!   ([RFC7518] section 5.3).
//!
//! Tokens use Compact Serialization:
//!
//! ```text
//! BASE64URL(UTF8(JWE Protected Header)) + '.' +
//! BASE64URL(JWE Encrypted Key) + '.' +
//! BASE64URL(JWE Initialization Vector) + '.' +
//! BASE64URL(JWE Ciphertext) + '.' +
//! BASE64URL(JWE Authentication Tag)
//! ```
//!
//! [RFC7516]: https://www.rfc-editor.org/rfc/rfc7516
//! [RFC7518]: https://www.rfc-editor.org/rfc/rfc7518

use std::fmt::{self, Display};
use std::str::FromStr;

use aes_gcm::aead::{AeadCore, KeyInit, OsRng};
use aes_gcm::{AeadInPlace, Aes128Gcm, Key, Nonce, Tag};
use base64ct::{Base64UrlUnpadded as Base64, Encoding};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::jose::jwk::{Jwk, KEY_LENGTH};
use crate::{Error, Result};

const IV_LENGTH: usize = 12;
const TAG_LENGTH: usize = 16;

/// Encrypt the payload and return a compact JWE.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the key is not a 128-bit octet key or the
/// payload cannot be serialized or encrypted.
pub fn encrypt<T: Serialize + ?Sized>(payload: &T, key: &Jwk) -> Result<String> {
    let kek = key.cipher()?;

    // 1. Key Management Mode determines the Content Encryption Key (CEK)
    //     - alg: "A128GCMKW" (key wrapping with 128-bit AES-GCM)
    //     - enc: "A128GCM" (128-bit AES-GCM)

    // 2. Generate a random CEK to encrypt the payload.
    let cek = Aes128Gcm::generate_key(&mut OsRng);

    // 4. Wrap the CEK and set as the JWE Encrypted Key. Key wrapping uses its
    //    own IV and an empty AAD.
    let kw_iv = Aes128Gcm::generate_nonce(&mut OsRng);
    let mut encrypted_cek = cek.to_vec();
    let kw_tag = kek
        .encrypt_in_place_detached(&kw_iv, b"", &mut encrypted_cek)
        .map_err(|e| Error::Encoding(format!("issue wrapping CEK: {e}")))?;

    // 9. Generate a random JWE Initialization Vector (nonce) of the correct size
    //    for the content encryption algorithm (A128GCM).
    let iv = Aes128Gcm::generate_nonce(&mut OsRng);

    // 12. Create the JWE Protected Header, including the key wrap parameters.
    let header = Header {
        alg: KeyAlgorithm::A128GcmKw,
        enc: EncryptionAlgorithm::A128Gcm,
        iv: Base64::encode_string(&kw_iv),
        tag: Base64::encode_string(&kw_tag),
    };

    // 14. Set the Additional Authenticated Data (AAD) encryption parameter to
    //     the Encoded Protected Header (step 13).
    let protected = header.encode()?;

    // 15. Encrypt plaintext using the CEK, the JWE Initialization Vector, and the
    //     Additional Authenticated Data to create the JWE Ciphertext and the JWE
    //     Authentication Tag.
    let mut buffer = serde_json::to_vec(payload)?;
    let tag = Aes128Gcm::new(&cek)
        .encrypt_in_place_detached(&iv, protected.as_bytes(), &mut buffer)
        .map_err(|e| Error::Encoding(format!("issue encrypting: {e}")))?;

    let jwe = Jwe {
        protected,
        header,
        encrypted_key: Base64::encode_string(&encrypted_cek),
        iv: Base64::encode_string(&iv),
        ciphertext: Base64::encode_string(&buffer),
        tag: Base64::encode_string(&tag),
    };

    // 19. Return the Compact Serialization of the JWE.
    Ok(jwe.to_string())
}

/// Decrypt a compact JWE and deserialize the plaintext.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the key is not a 128-bit octet key,
/// [`Error::Decoding`] if the JWE is malformed or uses another algorithm, and
/// [`Error::Authentication`] if the CEK or content fail authentication.
pub fn decrypt<T: DeserializeOwned>(compact_jwe: &str, key: &Jwk) -> Result<T> {
    let kek = key.cipher()?;

    // 1. Parse the JWE to extract the serialized values of its components and
    //    verify the JWE Protected Header.
    let jwe = Jwe::from_str(compact_jwe)?;

    // 2. Base64url decode the JWE Encrypted Key, Initialization Vector,
    //    Ciphertext and Authentication Tag, and the key wrap parameters.
    let kw_iv = decode("header `iv`", &jwe.header.iv, Some(IV_LENGTH))?;
    let kw_tag = decode("header `tag`", &jwe.header.tag, Some(TAG_LENGTH))?;
    let encrypted_cek = decode("encrypted_key", &jwe.encrypted_key, Some(KEY_LENGTH))?;
    let iv = decode("iv", &jwe.iv, Some(IV_LENGTH))?;
    let ciphertext = decode("ciphertext", &jwe.ciphertext, None)?;
    let tag = decode("tag", &jwe.tag, Some(TAG_LENGTH))?;

    // 9. Unwrap the JWE Encrypted Key to produce the CEK.
    let mut cek = encrypted_cek;
    kek.decrypt_in_place_detached(
        Nonce::from_slice(&kw_iv),
        b"",
        &mut cek,
        Tag::from_slice(&kw_tag),
    )
    .map_err(|e| Error::Authentication(format!("issue unwrapping CEK: {e}")))?;

    // 16. Decrypt the JWE Ciphertext using the CEK, the JWE Initialization
    //     Vector, the Additional Authenticated Data value (the encoded protected
    //     header as received), and the JWE Authentication Tag.
    let mut buffer = ciphertext;
    Aes128Gcm::new(Key::<Aes128Gcm>::from_slice(&cek))
        .decrypt_in_place_detached(
            Nonce::from_slice(&iv),
            jwe.protected.as_bytes(),
            &mut buffer,
            Tag::from_slice(&tag),
        )
        .map_err(|e| Error::Authentication(format!("issue decrypting: {e}")))?;

    serde_json::from_slice(&buffer)
        .map_err(|e| Error::Decoding(format!("issue deserializing plaintext: {e}")))
}

fn decode(name: &str, value: &str, expected_len: Option<usize>) -> Result<Vec<u8>> {
    let bytes = Base64::decode_vec(value)
        .map_err(|e| Error::Decoding(format!("issue decoding `{name}`: {e}")))?;
    if let Some(len) = expected_len {
        if bytes.len() != len {
            return Err(Error::Decoding(format!(
                "`{name}` must be {len} bytes, got {}",
                bytes.len()
            )));
        }
    }
    Ok(bytes)
}

/// A JWE in its parsed compact form. Each component other than the header is
/// held as its base64url encoded string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jwe {
    /// Encoded protected header, kept as received for use as AAD.
    protected: String,

    /// Decoded protected header.
    header: Header,

    /// Encrypted key, as a base64Url encoded string.
    encrypted_key: String,

    /// Initialization vector (nonce), as a base64Url encoded string.
    iv: String,

    /// Ciphertext, as a base64Url encoded string.
    ciphertext: String,

    /// Authentication tag resulting from the encryption, as a base64Url encoded string.
    tag: String,
}

impl Jwe {
    /// The decoded protected header.
    #[must_use]
    pub const fn header(&self) -> &Header {
        &self.header
    }
}

/// Compact Serialization
impl Display for Jwe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let protected = &self.protected;
        let encrypted_key = &self.encrypted_key;
        let iv = &self.iv;
        let ciphertext = &self.ciphertext;
        let tag = &self.tag;

        write!(f, "{protected}.{encrypted_key}.{iv}.{ciphertext}.{tag}")
    }
}

impl FromStr for Jwe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 5 {
            return Err(Error::Decoding(format!(
                "compact JWE must have 5 segments, got {}",
                parts.len()
            )));
        }

        Ok(Self {
            protected: parts[0].to_string(),
            header: Header::from_str(parts[0])?,
            encrypted_key: parts[1].to_string(),
            iv: parts[2].to_string(),
            ciphertext: parts[3].to_string(),
            tag: parts[4].to_string(),
        })
    }
}

/// The JWE protected header.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Header {
    /// Identifies the algorithm used to encrypt the content encryption key
    /// (CEK).
    pub alg: KeyAlgorithm,

    /// The algorithm used to perform authenticated encryption on the plaintext
    /// to produce the ciphertext and the Authentication Tag. MUST be an AEAD
    /// algorithm.
    pub enc: EncryptionAlgorithm,

    /// Initialization vector used to wrap the CEK, base64url encoded.
    pub iv: String,

    /// Authentication tag from wrapping the CEK, base64url encoded.
    pub tag: String,
}

impl Header {
    /// Serialize the header to JSON and base64url encode it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the header cannot be serialized.
    pub fn encode(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(Base64::encode_string(&bytes))
    }
}

impl FromStr for Header {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = Base64::decode_vec(s)
            .map_err(|e| Error::Decoding(format!("issue decoding header: {e}")))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::Decoding(format!("issue deserializing header: {e}")))
    }
}

/// The algorithm used to encrypt the content encryption key (CEK).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum KeyAlgorithm {
    /// Key wrapping with AES GCM using a 128-bit key.
    #[default]
    #[serde(rename = "A128GCMKW")]
    A128GcmKw,
}

/// The algorithm used to perform authenticated encryption on the plaintext to
/// produce the ciphertext and the Authentication Tag. MUST be an AEAD algorithm.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum EncryptionAlgorithm {
    /// AES in Galois/Counter Mode (GCM) using a 128-bit key.
    #[default]
    #[serde(rename = "A128GCM")]
    A128Gcm,
}

#[cfg(test)]
mod test {
    use serde_json::{Value, json};

    use super::*;

    fn key() -> Jwk {
        Jwk::oct("PlangaSecretKeyForTesw")
    }

    #[test]
    fn round_trip() {
        let plaintext = "The true sign of intelligence is not knowledge but imagination.";

        let compact_jwe = encrypt(plaintext, &key()).expect("should encrypt");
        let decrypted: String = decrypt(&compact_jwe, &key()).expect("should decrypt");

        assert_eq!(plaintext, decrypted);
    }

    #[test]
    fn protected_header() {
        let compact_jwe = encrypt(&json!({"a": 1}), &key()).expect("should encrypt");
        let jwe = Jwe::from_str(&compact_jwe).expect("should parse");

        assert_eq!(jwe.header().alg, KeyAlgorithm::A128GcmKw);
        assert_eq!(jwe.header().enc, EncryptionAlgorithm::A128Gcm);

        let segment = compact_jwe.split('.').next().expect("header segment");
        let header: Value =
            serde_json::from_slice(&Base64::decode_vec(segment).expect("base64")).expect("json");
        let members: Vec<&String> = header.as_object().expect("object").keys().collect();
        assert_eq!(members, ["alg", "enc", "iv", "tag"]);
        assert_eq!(header["alg"], "A128GCMKW");
        assert_eq!(header["enc"], "A128GCM");
    }

    #[test]
    fn compact_display() {
        let compact_jwe = encrypt("hello", &key()).expect("should encrypt");
        let jwe = Jwe::from_str(&compact_jwe).expect("should parse");
        assert_eq!(jwe.to_string(), compact_jwe);
    }

    #[test]
    fn segment_count() {
        let Err(Error::Decoding(msg)) = Jwe::from_str("a.b.c") else {
            panic!("should fail to parse");
        };
        assert_eq!(msg, "compact JWE must have 5 segments, got 3");
    }

    #[test]
    fn unsupported_algorithm() {
        let header = Base64::encode_string(br#"{"alg":"dir","enc":"A128GCM","iv":"","tag":""}"#);
        let compact_jwe = format!("{header}....");
        assert!(matches!(decrypt::<String>(&compact_jwe, &key()), Err(Error::Decoding(_))));
    }

    #[test]
    fn bad_iv_length() {
        let compact_jwe = encrypt("hello", &key()).expect("should encrypt");
        let mut parts: Vec<&str> = compact_jwe.split('.').collect();
        parts[2] = "AAAA";

        let Err(Error::Decoding(msg)) = decrypt::<String>(&parts.join("."), &key()) else {
            panic!("should reject short iv");
        };
        assert_eq!(msg, "`iv` must be 12 bytes, got 3");
    }

    #[test]
    fn invalid_key() {
        let short = Jwk::from_bytes(b"too short");
        assert!(matches!(encrypt("hello", &short), Err(Error::Encoding(_))));
    }
}
