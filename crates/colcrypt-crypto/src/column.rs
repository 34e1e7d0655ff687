//! # Encrypted Column
//!
//! [`EncryptedColumn`] binds one serializer to one deterministic cipher and
//! runs the write path (`value → plaintext bytes → ciphertext`) and the read
//! path (`ciphertext → plaintext bytes → value`).
//!
//! ## Absent Values
//!
//! An absent value has no plaintext bytes, so nothing is encrypted and no
//! ciphertext is produced. On the read path, absent ciphertext yields an
//! absent value without calling the cipher.
//!
//! ## Errors
//!
//! Codec failures arrive as [`ColumnError::Codec`]. Cipher failures arrive
//! as [`ColumnError::Cipher`] carrying the cipher's own error value.

use std::marker::PhantomData;

use colcrypt_core::Serializer;

use crate::cipher::{Ciphertext, DeterministicCipher};
use crate::error::ColumnError;

/// A typed column whose values are stored under deterministic encryption.
pub struct EncryptedColumn<T, C, S> {
    cipher: C,
    serializer: S,
    _value: PhantomData<fn() -> T>,
}

impl<T, C, S> EncryptedColumn<T, C, S>
where
    C: DeterministicCipher,
    S: Serializer<T>,
{
    /// Bind `serializer` to `cipher`.
    pub fn new(cipher: C, serializer: S) -> Self {
        Self {
            cipher,
            serializer,
            _value: PhantomData,
        }
    }

    /// The injected cipher.
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// The column serializer.
    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    /// Serialize `value` and encrypt the resulting bytes.
    ///
    /// # Errors
    ///
    /// - [`ColumnError::Codec`] if the value is out of range.
    /// - [`ColumnError::Cipher`] if the cipher fails.
    pub fn encrypt_and_encode(
        &self,
        value: Option<&T>,
    ) -> Result<Option<Ciphertext>, ColumnError<C::Error>> {
        let plaintext = self.serializer.serialize(value)?;
        self.encrypt(plaintext.as_deref())
    }

    /// Decrypt `ciphertext` and deserialize the recovered bytes.
    ///
    /// # Errors
    ///
    /// - [`ColumnError::Cipher`] if the cipher fails.
    /// - [`ColumnError::Codec`] if the recovered bytes are malformed.
    pub fn decrypt_and_decode(
        &self,
        ciphertext: Option<&[u8]>,
    ) -> Result<Option<T>, ColumnError<C::Error>> {
        let plaintext = self.decrypt(ciphertext)?;
        Ok(self.serializer.deserialize(plaintext.as_deref())?)
    }

    /// Encrypt already-encoded plaintext bytes.
    pub fn encrypt(
        &self,
        plaintext: Option<&[u8]>,
    ) -> Result<Option<Ciphertext>, ColumnError<C::Error>> {
        let Some(plaintext) = plaintext else {
            return Ok(None);
        };
        let ciphertext = self.cipher.encrypt(plaintext).map_err(|e| {
            tracing::warn!(
                algorithm = self.cipher.algorithm(),
                serializer = self.serializer.identifier(),
                error = %e,
                "column encryption failed"
            );
            ColumnError::Cipher(e)
        })?;
        tracing::debug!(
            algorithm = self.cipher.algorithm(),
            serializer = self.serializer.identifier(),
            ciphertext_len = ciphertext.len(),
            "encrypted column value"
        );
        Ok(Some(Ciphertext::from_bytes(ciphertext)))
    }

    /// Decrypt ciphertext back to encoded plaintext bytes.
    pub fn decrypt(
        &self,
        ciphertext: Option<&[u8]>,
    ) -> Result<Option<Vec<u8>>, ColumnError<C::Error>> {
        let Some(ciphertext) = ciphertext else {
            return Ok(None);
        };
        let plaintext = self.cipher.decrypt(ciphertext).map_err(|e| {
            tracing::warn!(
                algorithm = self.cipher.algorithm(),
                serializer = self.serializer.identifier(),
                ciphertext_len = ciphertext.len(),
                error = %e,
                "column decryption failed"
            );
            ColumnError::Cipher(e)
        })?;
        tracing::debug!(
            algorithm = self.cipher.algorithm(),
            serializer = self.serializer.identifier(),
            "decrypted column value"
        );
        Ok(Some(plaintext))
    }
}

impl<T, C, S> std::fmt::Debug for EncryptedColumn<T, C, S>
where
    C: DeterministicCipher,
    S: Serializer<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptedColumn")
            .field("algorithm", &self.cipher.algorithm())
            .field("serializer", &self.serializer.identifier())
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::testing::Sha256SivCipher;
    use chrono::{Duration, NaiveDateTime};
    use colcrypt_core::{SmallDateTimeSerializer, SMALLDATETIME_MIN};
    use proptest::prelude::*;

    fn minute_in_domain() -> impl Strategy<Value = NaiveDateTime> {
        (0i64..=65535, 0i64..1440).prop_map(|(days, minutes)| {
            SMALLDATETIME_MIN + Duration::days(days) + Duration::minutes(minutes)
        })
    }

    proptest! {
        /// Two independently built columns with the same key agree byte for
        /// byte and both read the value back.
        #[test]
        fn deterministic_and_reversible(value in minute_in_domain(), key in any::<[u8; 32]>()) {
            let first: EncryptedColumn<NaiveDateTime, _, _> =
                EncryptedColumn::new(Sha256SivCipher::new(key), SmallDateTimeSerializer);
            let second: EncryptedColumn<NaiveDateTime, _, _> =
                EncryptedColumn::new(Sha256SivCipher::new(key), SmallDateTimeSerializer);

            let a = first.encrypt_and_encode(Some(&value)).unwrap().unwrap();
            let b = second.encrypt_and_encode(Some(&value)).unwrap().unwrap();
            prop_assert_eq!(a.as_bytes(), b.as_bytes());
            prop_assert_eq!(second.decrypt_and_decode(Some(a.as_bytes())).unwrap(), Some(value));
        }
    }
}
