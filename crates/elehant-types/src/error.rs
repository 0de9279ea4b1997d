//! Error types for data parsing in elehant-types.

use thiserror::Error;

/// Errors that can occur when turning host-supplied text into meter types.
///
/// Decoding an advertisement never produces one of these; decode failures are
/// reported through the core crate's `Outcome`. These errors only cover the
/// textual boundary (addresses, hex payloads, family names).
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The text is not a 6-byte MAC address.
    #[error("Invalid MAC address '{input}': {reason}")]
    InvalidAddress {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// The text is not a valid hex byte string.
    #[error("Invalid hex data: {0}")]
    InvalidHex(String),

    /// The value does not name a meter family.
    #[error("Unknown meter type: {0}")]
    UnknownMeterType(String),
}

/// Result type alias using elehant-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
