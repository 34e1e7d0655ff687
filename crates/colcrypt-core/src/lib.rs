//! # colcrypt-core — Column Value Encoding
//!
//! This crate is the leaf of the colcrypt workspace. It turns typed column
//! values into the exact byte sequences SQL Server stores for them, so the
//! bytes handed to a deterministic cipher are the same bytes the engine
//! would encrypt itself.
//!
//! ## Key Design Principles
//!
//! 1. **The byte layout is an external contract.** `smalldatetime` is four
//!    bytes: little-endian `u16` days since 1900-01-01, then little-endian
//!    `u16` minutes since midnight. Nothing in this crate is free to change
//!    that.
//!
//! 2. **Validate before encoding.** Every encode path runs the range check,
//!    even when the caller already holds a [`SmallDateTime`].
//!
//! 3. **Absent is `None`, never an empty buffer.** A present-but-empty byte
//!    slice is malformed input.
//!
//! 4. **Two null contracts.** The [`codec`] handles typed absence
//!    (`Option<NaiveDateTime>`); the [`Serializer`] adapter short-circuits
//!    "no value at all" before the codec is consulted. They agree on the
//!    result and are tested separately.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `colcrypt-*` crates.
//! - No `unsafe` code.
//! - No `.unwrap()` or runtime `panic!()` outside tests.
//! - No process-wide mutable state; every operation is reentrant.

pub mod codec;
pub mod error;
pub mod serializer;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use codec::SMALLDATETIME_ENCODED_LEN;
pub use error::CodecError;
pub use serializer::{Serializer, SmallDateTimeSerializer, SqlSerializer, SqlValue};
pub use temporal::{
    validate_optional, validate_range, SmallDateTime, SMALLDATETIME_MAX, SMALLDATETIME_MIN,
    SMALLDATETIME_UPPER_EXCLUSIVE,
};
