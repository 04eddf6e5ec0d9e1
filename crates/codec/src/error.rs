//! Codec error type.

use thiserror::Error;

/// Error type for decoding operations.
///
/// Every error is detected at the point of parsing or table lookup and
/// propagated immediately; a malformed input is a caller error, not a
/// transient condition, so there is no retry or recovery path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// A character other than `'0'` or `'1'` was fed to binary parsing.
    #[error("MALFORMED_BINARY: {0:?}")]
    MalformedBinary(char),
    /// A character outside `0-9a-fA-F` was fed to hex parsing, or the
    /// hex input had odd length (the dangling final digit is reported).
    #[error("INVALID_HEX_DIGIT: {0:?}")]
    InvalidHexDigit(char),
    /// A character absent from the base64 alphabet was fed to base64
    /// decoding.
    #[error("INVALID_BASE64_CHARACTER: {0:?}")]
    InvalidBase64Character(char),
}
