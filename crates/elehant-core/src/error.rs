//! Error types for elehant-core.
//!
//! Decoding an advertisement never fails with an error: every rejection is an
//! [`Outcome`](crate::advertisement::Outcome) variant. The errors here cover
//! the edges around the decoder, such as parsing host-supplied text and
//! reading captured advertisements.

use thiserror::Error;

use elehant_types::ParseError;

/// Errors that can occur around the decoder.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Host-supplied text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A line of a capture file is not a valid advertisement record.
    #[error("Invalid capture record on line {line}: {source}")]
    InvalidRecord {
        /// 1-based line number.
        line: usize,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// A capture record is valid JSON but one of its fields is not.
    #[error("Invalid capture record on line {line}: {source}")]
    InvalidField {
        /// 1-based line number.
        line: usize,
        /// The field error, either [`Error::Parse`] or [`Error::InvalidManufacturerId`].
        source: Box<Error>,
    },

    /// A capture record names a manufacturer id that is not a 16-bit number.
    #[error("Invalid manufacturer id '{0}'")]
    InvalidManufacturerId(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Line of the capture record this error refers to.
    ///
    /// `None` for errors that are not about a single record, such as I/O
    /// failures.
    #[must_use]
    pub fn record_line(&self) -> Option<usize> {
        match self {
            Error::InvalidRecord { line, .. } | Error::InvalidField { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias using elehant-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
