//! # Deterministic Cipher Seam
//!
//! The encryption primitive is injected, never owned. Implementations wrap
//! whatever actually holds the key (an in-process AEAD, a KMS client, an
//! HSM session) and promise one thing: for a fixed key and algorithm
//! configuration, `encrypt` is a pure function of its input.
//!
//! ## Security Invariant
//!
//! - `encrypt(p) == encrypt(p)` byte for byte, for every `p`.
//! - `decrypt(encrypt(p)) == p`.
//!
//! The wrapper relies on both; it does not check them at runtime.

use std::sync::Arc;

/// A deterministic encryption primitive.
///
/// Implementations must be `Send + Sync` so one cipher can serve many
/// columns across threads.
pub trait DeterministicCipher: Send + Sync {
    /// The primitive's own failure type, surfaced to callers unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Human-readable algorithm name (for diagnostics/logging).
    fn algorithm(&self) -> &str;

    /// Encrypt plaintext bytes. Must be deterministic for a fixed key.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, Self::Error>;

    /// Decrypt ciphertext produced by [`encrypt`](Self::encrypt).
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

impl<C: DeterministicCipher + ?Sized> DeterministicCipher for &C {
    type Error = C::Error;

    fn algorithm(&self) -> &str {
        (**self).algorithm()
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, Self::Error> {
        (**self).encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, Self::Error> {
        (**self).decrypt(ciphertext)
    }
}

impl<C: DeterministicCipher + ?Sized> DeterministicCipher for Arc<C> {
    type Error = C::Error;

    fn algorithm(&self) -> &str {
        (**self).algorithm()
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, Self::Error> {
        (**self).encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, Self::Error> {
        (**self).decrypt(ciphertext)
    }
}

/// Ciphertext bytes as returned by a [`DeterministicCipher`].
///
/// Length and structure belong to the cipher. Equal ciphertexts mean equal
/// plaintexts under the same key, so `Eq` and `Hash` are meaningful.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ciphertext(Vec<u8>);

impl Ciphertext {
    /// Wrap raw ciphertext bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of ciphertext bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the cipher produced no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl AsRef<[u8]> for Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Ciphertext> for Vec<u8> {
    fn from(value: Ciphertext) -> Self {
        value.0
    }
}

impl std::fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.iter().take(8).map(|b| format!("{b:02x}")).collect();
        write!(f, "Ciphertext({} bytes, {prefix}...)", self.0.len())
    }
}

impl std::fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
