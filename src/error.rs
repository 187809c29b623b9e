//! Error types for Huffman encoding and decoding operations.

use thiserror::Error;

/// Result type for all fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened
    #[error("source file not found: {0}")]
    SourceNotFound(String),

    /// `pop_min` was called on an empty ordered list. The tree builder
    /// never does this; hitting it indicates a logic error in the caller.
    #[error("pop_min called on an empty ordered list")]
    EmptyCollection,

    /// The frequency header of a compressed file could not be parsed
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The compressed bit stream ended before the expected symbol count
    #[error("truncated bit stream: {0}")]
    TruncatedStream(String),

    /// A caller passed input that violates an API contract, such as a
    /// code string containing characters other than `'0'` and `'1'`
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Any other I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a `SourceNotFound` error for the given path
    pub fn source_not_found(path: impl Into<String>) -> Self {
        Error::SourceNotFound(path.into())
    }

    /// Create a `MalformedHeader` error with a message
    pub fn malformed_header(msg: impl Into<String>) -> Self {
        Error::MalformedHeader(msg.into())
    }

    /// Create an `InvalidInput` error with a message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
