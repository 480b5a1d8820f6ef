//! # JOSE
//!
//! The subset of JSON Object Signing and Encryption needed to seal session
//! options for the widget: symmetric octet keys ([`jwk`]) and compact JSON Web
//! Encryption using AES-GCM key wrapping ([`jwe`]).

pub mod jwe;
pub mod jwk;

pub use self::jwe::{EncryptionAlgorithm, Header, Jwe, KeyAlgorithm};
pub use self::jwk::{Jwk, KeyType};
