//! # colcrypt-crypto — Deterministic Column Encryption
//!
//! Composes the typed serializers from `colcrypt-core` with a deterministic
//! cipher supplied by the caller:
//!
//! ```text
//! value ─▶ range check ─▶ codec ─▶ plaintext bytes ─▶ cipher ─▶ ciphertext
//! value ◀─ codec ◀─ plaintext bytes ◀─ cipher ◀─ ciphertext
//! ```
//!
//! - [`DeterministicCipher`] is the seam for the encryption primitive. Key
//!   management and algorithm selection live entirely behind it.
//! - [`EncryptedColumn`] owns one cipher and one serializer and runs the
//!   pipeline in both directions.
//!
//! ## Security Invariant
//!
//! Same plaintext and same key must yield byte-identical ciphertext. That
//! is what lets an encrypted column answer equality predicates without
//! decryption. This crate adds no randomness, padding or framing of its
//! own, so the property holds exactly when the injected cipher has it.
//!
//! ## Crate Policy
//!
//! - Depends only on `colcrypt-core` internally.
//! - Plaintext values, plaintext bytes and key material are never logged.
//! - Cipher failures are surfaced unchanged; no retries.

pub mod cipher;
pub mod column;
pub mod error;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use cipher::{Ciphertext, DeterministicCipher};
pub use column::EncryptedColumn;
pub use error::ColumnError;
