//! Clipboard Port - where "copy to clipboard" sends the finished letter.

use thiserror::Error;

/// Destination for copied letter text.
///
/// Implementations receive the text exactly as displayed and must not
/// transform it.
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The clipboard could not be reached.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}
