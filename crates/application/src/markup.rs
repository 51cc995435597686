//! Chat markup
//!
//! The chat client understands a small tag language: `<highlight>`,
//! `<black>`, `<header2>` and `<tab>`, each closed by `<end>` where
//! applicable, plus `chatcmd://` links that run a chat command when clicked.
//! Replies consist of a one-line summary and an optional expandable blob.

use std::fmt;

use serde::Serialize;

/// Closes any open markup tag
pub const END: &str = "<end>";

/// Indentation marker for blob lines
pub const TAB: &str = "<tab>";

/// Wrap text in highlight markup
#[must_use]
pub fn highlight(text: impl fmt::Display) -> String {
    format!("<highlight>{text}{END}")
}

/// Wrap text in black markup; used for invisible padding
///
/// Returns an empty string for empty input so callers never emit empty tags.
#[must_use]
pub fn black(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("<black>{text}{END}")
    }
}

/// Render a second-level header
#[must_use]
pub fn header2(text: impl fmt::Display) -> String {
    format!("<header2>{text}{END}")
}

/// Render a link that runs `command` in the chat client
///
/// Single quotes in `command` are escaped so they cannot end the attribute.
#[must_use]
pub fn make_chatcmd(label: &str, command: &str) -> String {
    let command = command.replace('\'', "&#39;");
    format!("<a href='chatcmd://{command}'>{label}</a>")
}

/// An expandable text block attached to a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blob {
    /// Link text shown in the chat line
    pub title: String,
    /// Full markup content
    pub body: String,
}

impl Blob {
    /// Create a new blob
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A reply to a chat command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandReply {
    /// Short one-line summary
    pub summary: String,
    /// Optional detail blob
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob: Option<Blob>,
}

impl CommandReply {
    /// A reply that is only a line of text
    #[must_use]
    pub fn text(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            blob: None,
        }
    }

    /// A reply with a summary and a detail blob
    #[must_use]
    pub fn with_blob(summary: impl Into<String>, blob: Blob) -> Self {
        Self {
            summary: summary.into(),
            blob: Some(blob),
        }
    }
}

impl fmt::Display for CommandReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)?;
        if let Some(blob) = &self.blob {
            write!(f, " [{}]\n\n{}", blob.title, blob.body)?;
        }
        Ok(())
    }
}
