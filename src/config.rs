//! # Widget Configuration
//!
//! The per-render configuration handed to the encoder and renderer. A
//! configuration is built once per page render, either with
//! [`WidgetConfiguration::builder`] or by deserializing host application
//! settings, and is read-only afterwards.
//!
//! # Example
//!
//! ```rust
//! use planga::WidgetConfiguration;
//!
//! let config = WidgetConfiguration::builder()
//!     .public_api_id("foobar")
//!     .private_api_key("PlangaSecretKeyForTesw")
//!     .conversation_id("general")
//!     .current_user_id("1234")
//!     .current_user_name("Bob")
//!     .build();
//!
//! assert!(config.container_id().starts_with("planga-chat-"));
//! assert_eq!(config.remote_host(), "//planga.def");
//! ```

use std::fmt;

use serde::Deserialize;

use crate::core::generate::{self, IdGenerator, RandomIds};

/// Host serving the widget script and socket when none is configured.
pub const DEFAULT_REMOTE_HOST: &str = "//planga.def";

/// Everything needed to render one chat widget.
///
/// Missing credentials are represented by empty strings and are caught by
/// [`crate::validate::is_valid`].
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct WidgetConfiguration {
    /// Public identifier of the application, sent to the browser in clear.
    #[serde(default)]
    public_api_id: String,

    /// Shared secret of the application. This is the base64url encoded
    /// (JWK `k`) 128-bit key used to wrap token content keys.
    #[serde(default)]
    private_api_key: String,

    #[serde(default)]
    conversation_id: String,

    #[serde(default)]
    current_user_id: String,

    #[serde(default)]
    current_user_name: String,

    /// Id of the element the widget is mounted in.
    #[serde(default = "generate::random_container_id")]
    container_id: String,

    /// Location (scheme optional) of the Planga server.
    #[serde(default = "default_remote_host")]
    remote_host: String,
}

fn default_remote_host() -> String {
    DEFAULT_REMOTE_HOST.to_string()
}

impl WidgetConfiguration {
    /// Create a new `WidgetConfigurationBuilder`.
    #[must_use]
    pub fn builder() -> WidgetConfigurationBuilder {
        WidgetConfigurationBuilder::new()
    }

    /// The public API id.
    #[must_use]
    pub fn public_api_id(&self) -> &str {
        &self.public_api_id
    }

    /// The private API key (secret key material).
    #[must_use]
    pub fn private_api_key(&self) -> &str {
        &self.private_api_key
    }

    /// The conversation the widget joins.
    #[must_use]
    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    /// The host application's id for the current user.
    #[must_use]
    pub fn current_user_id(&self) -> &str {
        &self.current_user_id
    }

    /// The name shown for the current user.
    #[must_use]
    pub fn current_user_name(&self) -> &str {
        &self.current_user_name
    }

    /// The container element id. Generated once when not configured.
    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// The Planga server location.
    #[must_use]
    pub fn remote_host(&self) -> &str {
        &self.remote_host
    }
}

impl fmt::Debug for WidgetConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetConfiguration")
            .field("public_api_id", &self.public_api_id)
            .field("private_api_key", &"[redacted]")
            .field("conversation_id", &self.conversation_id)
            .field("current_user_id", &self.current_user_id)
            .field("current_user_name", &self.current_user_name)
            .field("container_id", &self.container_id)
            .field("remote_host", &self.remote_host)
            .finish()
    }
}

/// Build a [`WidgetConfiguration`].
#[derive(Default)]
pub struct WidgetConfigurationBuilder {
    public_api_id: Option<String>,
    private_api_key: Option<String>,
    conversation_id: Option<String>,
    current_user_id: Option<String>,
    current_user_name: Option<String>,
    container_id: Option<String>,
    remote_host: Option<String>,
}

impl WidgetConfigurationBuilder {
    /// Create a new `WidgetConfigurationBuilder`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the public API id.
    #[must_use]
    pub fn public_api_id(mut self, public_api_id: impl Into<String>) -> Self {
        self.public_api_id = Some(public_api_id.into());
        self
    }

    /// Specify the private API key.
    #[must_use]
    pub fn private_api_key(mut self, private_api_key: impl Into<String>) -> Self {
        self.private_api_key = Some(private_api_key.into());
        self
    }

    /// Specify the conversation id.
    #[must_use]
    pub fn conversation_id(mut self, conversation_id: impl Into<String>) -> Self {
        self.conversation_id = Some(conversation_id.into());
        self
    }

    /// Specify the current user's id.
    #[must_use]
    pub fn current_user_id(mut self, current_user_id: impl Into<String>) -> Self {
        self.current_user_id = Some(current_user_id.into());
        self
    }

    /// Specify the current user's display name.
    #[must_use]
    pub fn current_user_name(mut self, current_user_name: impl Into<String>) -> Self {
        self.current_user_name = Some(current_user_name.into());
        self
    }

    /// Specify the container element id. When not set, one is generated at
    /// build time.
    #[must_use]
    pub fn container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = Some(container_id.into());
        self
    }

    /// Specify the Planga server location. Defaults to
    /// [`DEFAULT_REMOTE_HOST`].
    #[must_use]
    pub fn remote_host(mut self, remote_host: impl Into<String>) -> Self {
        self.remote_host = Some(remote_host.into());
        self
    }

    /// Build the configuration, generating a random container id if none was
    /// specified.
    #[must_use]
    pub fn build(self) -> WidgetConfiguration {
        self.build_with(&RandomIds)
    }

    /// Build the configuration, using `generator` for a missing container
    /// id.
    #[must_use]
    pub fn build_with(self, generator: &impl IdGenerator) -> WidgetConfiguration {
        WidgetConfiguration {
            public_api_id: self.public_api_id.unwrap_or_default(),
            private_api_key: self.private_api_key.unwrap_or_default(),
            conversation_id: self.conversation_id.unwrap_or_default(),
            current_user_id: self.current_user_id.unwrap_or_default(),
            current_user_name: self.current_user_name.unwrap_or_default(),
            container_id: self
                .container_id
                .unwrap_or_else(|| generate::container_id(generator)),
            remote_host: self.remote_host.unwrap_or_else(default_remote_host),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults() {
        let config = WidgetConfiguration::builder().build();

        assert_eq!(config.public_api_id(), "");
        assert_eq!(config.private_api_key(), "");
        assert_eq!(config.remote_host(), DEFAULT_REMOTE_HOST);
        assert!(config.container_id().starts_with(generate::CONTAINER_PREFIX));
    }

    #[test]
    fn container_id_is_stable() {
        let config = WidgetConfiguration::builder().public_api_id("foobar").build();

        let first = config.container_id().to_string();
        assert_eq!(config.container_id(), first);
        assert_eq!(config.clone().container_id(), first);
    }

    #[test]
    fn explicit_container_id() {
        let config = WidgetConfiguration::builder().container_id("chat").build();
        assert_eq!(config.container_id(), "chat");
    }

    #[test]
    fn deserialize() {
        let value = json!({
            "public_api_id": "foobar",
            "private_api_key": "PlangaSecretKeyForTesw",
            "conversation_id": "general",
            "current_user_id": "1234",
            "current_user_name": "Bob"
        });
        let config: WidgetConfiguration =
            serde_json::from_value(value).expect("should deserialize");

        assert_eq!(config.public_api_id(), "foobar");
        assert_eq!(config.current_user_name(), "Bob");
        assert_eq!(config.remote_host(), DEFAULT_REMOTE_HOST);
        assert!(config.container_id().starts_with(generate::CONTAINER_PREFIX));
    }

    #[test]
    fn debug_redacts_key() {
        let config = WidgetConfiguration::builder().private_api_key("SuperSecret").build();
        let debug = format!("{config:?}");

        assert!(!debug.contains("SuperSecret"));
        assert!(debug.contains("[redacted]"));
    }
}
