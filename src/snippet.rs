//! # Embed Snippet
//!
//! Renders the HTML fragment that loads the Planga widget script, creates the
//! container element and starts the widget with the public API id and the
//! encrypted session options.
//!
//! How the fragment reaches the browser is up to the host application: use
//! [`snippet`] for a `String`, or write the [`Snippet`] returned by [`render`]
//! directly to a response with `write!`.

use std::fmt::{self, Display, Write};

use tracing::instrument;

use crate::Result;
use crate::config::WidgetConfiguration;
use crate::session::encrypt_options;

/// Script served by the Planga host, relative to `remote_host`.
pub const SCRIPT_PATH: &str = "/js/js_snippet.js";

/// Socket endpoint on the Planga host, relative to `remote_host`.
pub const SOCKET_PATH: &str = "/socket";

/// A rendered widget embed. `Display` produces the HTML fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snippet {
    public_api_id: String,
    encrypted_options: String,
    container_id: String,
    remote_host: String,
}

impl Snippet {
    /// Create a snippet for `configuration` using already encrypted session
    /// options.
    #[must_use]
    pub fn new(configuration: &WidgetConfiguration, encrypted_options: impl Into<String>) -> Self {
        Self {
            public_api_id: configuration.public_api_id().to_string(),
            encrypted_options: encrypted_options.into(),
            container_id: configuration.container_id().to_string(),
            remote_host: configuration.remote_host().to_string(),
        }
    }

    /// The encrypted session options embedded in the snippet.
    #[must_use]
    pub fn encrypted_options(&self) -> &str {
        &self.encrypted_options
    }

    /// The id of the container element.
    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }
}

impl Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let host_attr = Attr(&self.remote_host);
        let container_attr = Attr(&self.container_id);
        let container_js = Js(&self.container_id);
        let public_api_id = Js(&self.public_api_id);
        let encrypted_options = Js(&self.encrypted_options);
        let host_js = Js(&self.remote_host);

        writeln!(
            f,
            r#"<script type="text/javascript" src="{host_attr}{SCRIPT_PATH}"></script>"#
        )?;
        writeln!(f, r#"<div id="{container_attr}"></div>"#)?;
        writeln!(f, r#"<script type="text/javascript">"#)?;
        writeln!(f, r#"    new Planga(document.getElementById("{container_js}"), {{"#)?;
        writeln!(f, r#"        public_api_id: "{public_api_id}","#)?;
        writeln!(f, r#"        encrypted_options: "{encrypted_options}","#)?;
        writeln!(f, r#"        socket_location: "{host_js}{SOCKET_PATH}","#)?;
        writeln!(f, "    }});")?;
        write!(f, "</script>")
    }
}

/// Encrypt the session options of `configuration` and build the embed
/// snippet.
///
/// # Errors
///
/// Returns [`crate::Error::Encoding`] if the session options cannot be
/// encrypted.
#[instrument(level = "debug", skip_all, fields(container_id = configuration.container_id()))]
pub fn render(configuration: &WidgetConfiguration) -> Result<Snippet> {
    tracing::debug!("render");

    let encrypted_options = encrypt_options(configuration)?;
    Ok(Snippet::new(configuration, encrypted_options))
}

/// Render the embed snippet to a string.
///
/// # Errors
///
/// Returns [`crate::Error::Encoding`] if the session options cannot be
/// encrypted.
pub fn snippet(configuration: &WidgetConfiguration) -> Result<String> {
    render(configuration).map(|s| s.to_string())
}

// Escapes a value for a double-quoted HTML attribute.
struct Attr<'a>(&'a str);

impl Display for Attr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#x27;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

// Escapes a value for a double-quoted JavaScript string inside a `<script>`
// element.
struct Js<'a>(&'a str);

impl Display for Js<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                '\'' => f.write_str("\\'")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '<' => f.write_str("\\u003C")?,
                '>' => f.write_str("\\u003E")?,
                '&' => f.write_str("\\u0026")?,
                '\u{2028}' => f.write_str("\\u2028")?,
                '\u{2029}' => f.write_str("\\u2029")?,
                c if c.is_control() => write!(f, "\\u{:04X}", u32::from(c))?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn attr_escape() {
        assert_eq!(Attr(r#"a"b<c>&'d"#).to_string(), "a&quot;b&lt;c&gt;&amp;&#x27;d");
        assert_eq!(Attr("planga-chat-1").to_string(), "planga-chat-1");
    }

    #[test]
    fn js_escape() {
        assert_eq!(Js(r#"a"b\c"#).to_string(), r#"a\"b\\c"#);
        assert_eq!(Js("</script>").to_string(), r"\u003C/script\u003E");
        assert_eq!(Js("line\nbreak\t").to_string(), r"line\nbreak\u0009");
    }

    #[test]
    fn references_host() {
        let config = WidgetConfiguration::builder()
            .public_api_id("foobar")
            .container_id("chat")
            .remote_host("https://chat.example.com")
            .build();
        let markup = Snippet::new(&config, "token").to_string();

        assert!(markup.contains(r#"src="https://chat.example.com/js/js_snippet.js""#));
        assert!(markup.contains(r#"socket_location: "https://chat.example.com/socket","#));
        assert!(markup.contains(r#"<div id="chat"></div>"#));
        assert!(markup.contains(r#"public_api_id: "foobar","#));
        assert!(markup.contains(r#"encrypted_options: "token","#));
    }

    #[test]
    fn hostile_container_id() {
        let config = WidgetConfiguration::builder()
            .public_api_id("foobar")
            .container_id(r#""></div><script>alert(1)</script>"#)
            .build();
        let markup = Snippet::new(&config, "token").to_string();

        assert_eq!(markup.matches("<script").count(), 2);
        assert_eq!(markup.matches("<div").count(), 1);
    }
}
