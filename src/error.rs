//! Error type for theme parsing, configuration, and mounting.

/// Failures surfaced by this crate.
///
/// Storage failures are deliberately absent: a store that cannot be read
/// behaves as empty and a store that cannot be written drops the value.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A string that is neither `"light"` nor `"dark"`.
    #[error("unknown theme: {0:?}")]
    InvalidTheme(String),
    /// Config JSON could not be parsed.
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
    /// A required config field was empty.
    #[error("theme config field must not be empty: {field}")]
    InvalidConfig { field: &'static str },
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no body")]
    MissingBody,
    /// The toggle control was not found in the document.
    #[error("no element with id {id:?}")]
    MissingControl { id: String },
    /// `addEventListener` was rejected by the host.
    #[error("failed to register {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },
}
