//! # Binary Codec — smalldatetime Wire Layout
//!
//! Converts between nullable wall-clock values and the 4-byte layout
//! SQL Server uses on disk and on the wire:
//!
//! ```text
//! offset 0..2   u16 LE   whole days since 1900-01-01
//! offset 2..4   u16 LE   whole minutes since midnight
//! ```
//!
//! ## Absent Values
//!
//! Typed absence is `None` on both sides. An absent value encodes to no
//! bytes at all, and `decode(None)` yields `None`. A present slice of any
//! length other than 4, including the empty slice, is malformed.
//!
//! ## Security Invariant
//!
//! Deterministic encryption is only equality-preserving if equal values
//! always produce identical plaintext bytes. The encoding is therefore a
//! pure function of the minute-truncated value: no padding, no version
//! byte, no dependence on sub-minute components.

use chrono::NaiveDateTime;

use crate::error::CodecError;
use crate::temporal::{validate_optional, SmallDateTime};

/// Width of an encoded smalldatetime.
pub const SMALLDATETIME_ENCODED_LEN: usize = 4;

/// Encode a nullable value.
///
/// The range check runs here even if the caller has already validated, so
/// the codec never emits bytes for a value the engine would reject.
///
/// # Errors
///
/// Returns [`CodecError::OutOfRange`] for values outside the domain.
pub fn encode(
    value: Option<&NaiveDateTime>,
) -> Result<Option<[u8; SMALLDATETIME_ENCODED_LEN]>, CodecError> {
    validate_optional(value)?;
    value
        .map(|v| SmallDateTime::new(*v).map(|v| encode_value(&v)))
        .transpose()
}

/// Encode an already-validated value. Infallible.
pub fn encode_value(value: &SmallDateTime) -> [u8; SMALLDATETIME_ENCODED_LEN] {
    let days = value.days_since_epoch().to_le_bytes();
    let minutes = value.minutes_since_midnight().to_le_bytes();
    [days[0], days[1], minutes[0], minutes[1]]
}

/// Decode a nullable byte sequence.
///
/// # Errors
///
/// - [`CodecError::MalformedInput`] if a present slice is not exactly
///   4 bytes long.
/// - [`CodecError::InvalidTimeOfDay`] if the minutes field is 1440 or more.
pub fn decode(bytes: Option<&[u8]>) -> Result<Option<NaiveDateTime>, CodecError> {
    bytes
        .map(|b| decode_value(b).map(NaiveDateTime::from))
        .transpose()
}

/// Decode a present byte sequence into a [`SmallDateTime`].
pub fn decode_value(bytes: &[u8]) -> Result<SmallDateTime, CodecError> {
    let fixed: [u8; SMALLDATETIME_ENCODED_LEN] =
        bytes.try_into().map_err(|_| CodecError::MalformedInput {
            expected: SMALLDATETIME_ENCODED_LEN,
            actual: bytes.len(),
        })?;
    let days = u16::from_le_bytes([fixed[0], fixed[1]]);
    let minutes = u16::from_le_bytes([fixed[2], fixed[3]]);
    SmallDateTime::from_parts(days, minutes)
}
