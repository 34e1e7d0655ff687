//! # Test Cipher
//!
//! [`Sha256SivCipher`] is a deterministic, authenticated stand-in for the
//! injected primitive, built from SHA-256 alone. It lets tests assert the
//! properties the real primitive must have (determinism, round trip,
//! tamper rejection, error pass-through) without a key vault.
//!
//! It is not a production algorithm. Available under `cfg(test)` and the
//! `test-util` feature only.
//!
//! ## Construction
//!
//! ```text
//! siv        = SHA-256(0x01 || key || plaintext)[..16]
//! block[i]   = SHA-256(0x02 || key || siv || i as u64 LE)
//! ciphertext = siv || plaintext XOR block[0] || block[1] || ...
//! ```

use sha2::{Digest, Sha256};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::cipher::DeterministicCipher;

/// Length of the synthetic IV prefix.
pub const SIV_LEN: usize = 16;

const SIV_DOMAIN: u8 = 0x01;
const STREAM_DOMAIN: u8 = 0x02;

/// Failures reported by [`Sha256SivCipher::decrypt`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TestCipherError {
    /// Ciphertext is shorter than the synthetic IV.
    #[error("ciphertext too short: expected at least 16 bytes, got {0}")]
    Truncated(usize),

    /// The recomputed IV does not match; wrong key or tampered bytes.
    #[error("ciphertext authentication failed")]
    Authentication,
}

/// Deterministic SIV-style test cipher over SHA-256.
///
/// Key material is zeroized on drop and never printed by `Debug`.
pub struct Sha256SivCipher {
    key: Zeroizing<[u8; 32]>,
}

impl Sha256SivCipher {
    /// Algorithm name reported by [`DeterministicCipher::algorithm`].
    pub const ALGORITHM: &'static str = "TEST_SHA256_SIV";

    /// Create a cipher from a 32-byte key.
    pub fn new(key: [u8; 32]) -> Self {
        Self {
            key: Zeroizing::new(key),
        }
    }

    fn siv(&self, plaintext: &[u8]) -> [u8; SIV_LEN] {
        let digest = Sha256::new()
            .chain_update([SIV_DOMAIN])
            .chain_update(self.key.as_slice())
            .chain_update(plaintext)
            .finalize();
        let mut siv = [0u8; SIV_LEN];
        siv.copy_from_slice(&digest[..SIV_LEN]);
        siv
    }

    fn apply_keystream(&self, siv: &[u8; SIV_LEN], data: &mut [u8]) {
        for (counter, chunk) in data.chunks_mut(32).enumerate() {
            let block = Sha256::new()
                .chain_update([STREAM_DOMAIN])
                .chain_update(self.key.as_slice())
                .chain_update(siv)
                .chain_update((counter as u64).to_le_bytes())
                .finalize();
            for (byte, k) in chunk.iter_mut().zip(block.iter()) {
                *byte ^= k;
            }
        }
    }
}

impl std::fmt::Debug for Sha256SivCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sha256SivCipher").finish_non_exhaustive()
    }
}

impl DeterministicCipher for Sha256SivCipher {
    type Error = TestCipherError;

    fn algorithm(&self) -> &str {
        Self::ALGORITHM
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, Self::Error> {
        let siv = self.siv(plaintext);
        let mut body = plaintext.to_vec();
        self.apply_keystream(&siv, &mut body);

        let mut out = Vec::with_capacity(SIV_LEN + body.len());
        out.extend_from_slice(&siv);
        out.extend_from_slice(&body);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, Self::Error> {
        if ciphertext.len() < SIV_LEN {
            return Err(TestCipherError::Truncated(ciphertext.len()));
        }
        let (siv_bytes, body) = ciphertext.split_at(SIV_LEN);
        let mut siv = [0u8; SIV_LEN];
        siv.copy_from_slice(siv_bytes);

        let mut plaintext = body.to_vec();
        self.apply_keystream(&siv, &mut plaintext);

        if self.siv(&plaintext) != siv {
            return Err(TestCipherError::Authentication);
        }
        Ok(plaintext)
    }
}
