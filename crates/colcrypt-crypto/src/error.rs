//! # Column Error Types
//!
//! A column operation fails either in the codec (domain or malformed
//! input) or in the cipher. Cipher errors keep their concrete type so the
//! caller sees exactly what the primitive reported.

use colcrypt_core::CodecError;
use thiserror::Error;

/// Errors from [`EncryptedColumn`](crate::EncryptedColumn) operations.
///
/// `E` is the injected cipher's own error type.
#[derive(Error, Debug)]
pub enum ColumnError<E>
where
    E: std::error::Error + 'static,
{
    /// Encoding or decoding the plaintext bytes failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The cipher rejected the operation.
    #[error(transparent)]
    Cipher(E),
}

impl<E> ColumnError<E>
where
    E: std::error::Error + 'static,
{
    /// True if the plaintext value was outside the column domain.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Codec(e) if e.is_domain())
    }

    /// True if decrypted bytes did not form a valid encoding.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Codec(e) if e.is_malformed())
    }

    /// The cipher's error, if that is where the failure came from.
    pub fn into_cipher_error(self) -> Option<E> {
        match self {
            Self::Cipher(e) => Some(e),
            Self::Codec(_) => None,
        }
    }
}
