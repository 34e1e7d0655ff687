//! # Error Types — Codec Failures
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Taxonomy
//!
//! - **Domain errors** reject an input value that lies outside what the
//!   column type can represent. They are raised on the encode side.
//! - **Malformed input errors** reject bytes that could not have been
//!   produced by the engine: wrong length, or an impossible time of day.
//!   They point at corruption or a serializer mismatch upstream.
//!
//! Neither class is retried. Both surface to the caller immediately.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Error raised by the binary codec and the serializers built on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The value lies outside `[min, max)` for the column type.
    #[error("value {value} is out of range for smalldatetime; expected {min} <= value < {max}")]
    OutOfRange {
        /// The rejected value.
        value: NaiveDateTime,
        /// Inclusive lower bound.
        min: NaiveDateTime,
        /// Exclusive upper bound.
        max: NaiveDateTime,
    },

    /// A present byte sequence has the wrong length.
    #[error("malformed input: expected exactly {expected} bytes, got {actual}")]
    MalformedInput {
        /// The fixed encoded width.
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },

    /// The minutes field does not name a minute within a day.
    #[error("malformed input: minutes since midnight must be below 1440, got {0}")]
    InvalidTimeOfDay(u16),

    /// No serializer is registered under the given identifier.
    #[error("unknown serializer identifier: {0:?}")]
    UnknownSerializer(String),

    /// A textual value could not be parsed as a date/time.
    #[error("cannot parse {input:?} as a smalldatetime: {reason}")]
    Parse {
        /// The rejected text.
        input: String,
        /// Why parsing failed.
        reason: String,
    },
}

impl CodecError {
    /// True for errors that reject the input value (range violations).
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// True for errors that reject the input bytes as corrupt.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput { .. } | Self::InvalidTimeOfDay(_))
    }
}
