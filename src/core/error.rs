//! Error types for XMP extraction
//!
//! A buffer without an XMP packet is not an error; it yields an empty record.

use thiserror::Error;

/// Error types for XMP extraction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmpError {
    /// The input was not a byte buffer
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The extracted XMP packet failed to tokenize
    #[error("Malformed markup: {0}")]
    MalformedMarkup(String),
}

/// Discriminant of an [`XmpError`], without its message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XmpErrorKind {
    /// See [`XmpError::InvalidInput`]
    InvalidInput,
    /// See [`XmpError::MalformedMarkup`]
    MalformedMarkup,
}

impl XmpError {
    /// The kind of this error
    pub fn kind(&self) -> XmpErrorKind {
        match self {
            XmpError::InvalidInput(_) => XmpErrorKind::InvalidInput,
            XmpError::MalformedMarkup(_) => XmpErrorKind::MalformedMarkup,
        }
    }

    /// The diagnostic message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            XmpError::InvalidInput(msg) | XmpError::MalformedMarkup(msg) => msg,
        }
    }

    /// Append the byte offset where tokenizing failed to a markup error
    pub(crate) fn at_position(self, position: u64) -> Self {
        match self {
            XmpError::MalformedMarkup(msg) => {
                XmpError::MalformedMarkup(format!("{} at position {}", msg, position))
            }
            other => other,
        }
    }
}

impl From<quick_xml::Error> for XmpError {
    fn from(err: quick_xml::Error) -> Self {
        XmpError::MalformedMarkup(format!("XML parsing error: {}", err))
    }
}

/// Result type alias for XMP operations
pub type XmpResult<T> = Result<T, XmpError>;
