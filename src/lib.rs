//! Embed the [Planga](https://planga.io) chat widget in server-rendered pages.
//!
//! The host application never sends its private API key to the browser.
//! Instead, the session options (conversation id, current user id and name)
//! are sealed into a compact JWE using the private key, and only that token
//! and the public API id appear in the generated markup.
//!
//! # Example
//!
//! ```rust
//! use planga::{WidgetConfiguration, validate};
//!
//! let config = WidgetConfiguration::builder()
//!     .public_api_id("foobar")
//!     .private_api_key("PlangaSecretKeyForTesw")
//!     .conversation_id("general")
//!     .current_user_id("1234")
//!     .current_user_name("Bob")
//!     .build();
//!
//! assert!(validate::is_valid(&config));
//!
//! let markup = planga::snippet(&config).expect("should render");
//! assert!(markup.contains("encrypted_options"));
//! ```

pub mod config;
pub mod core;
mod error;
pub mod jose;
pub mod session;
pub mod snippet;
pub mod validate;

pub use crate::config::{WidgetConfiguration, WidgetConfigurationBuilder};
pub use crate::core::generate::{IdGenerator, RandomIds};
pub use crate::error::{Error, Result};
pub use crate::session::{SessionPayload, decrypt_options, encrypt_options};
pub use crate::snippet::{Snippet, render, snippet};
pub use crate::validate::is_valid;
