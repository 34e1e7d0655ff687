//! # Deterministic Encryption Round Trips
//!
//! Drives the full write and read paths (value, serializer, cipher, and
//! back) and asserts bit-identical ciphertext across repeated calls, across
//! independently constructed columns, and across threads.

use std::sync::Arc;
use std::thread;

use chrono::NaiveDateTime;
use colcrypt_core::temporal::parse_naive;
use colcrypt_core::{SmallDateTimeSerializer, SqlSerializer, SqlValue};
use colcrypt_crypto::testing::{Sha256SivCipher, TestCipherError};
use colcrypt_crypto::{ColumnError, DeterministicCipher, EncryptedColumn};

const KEY: [u8; 32] = [0x3c; 32];

fn dt(s: &str) -> NaiveDateTime {
    parse_naive(s).expect("fixture parses")
}

fn column() -> EncryptedColumn<NaiveDateTime, Sha256SivCipher, SmallDateTimeSerializer> {
    EncryptedColumn::new(Sha256SivCipher::new(KEY), SmallDateTimeSerializer)
}

#[test]
fn representative_value_round_trips() {
    let col = column();
    let value = dt("2020-07-10 00:00:00");
    let ciphertext = col.encrypt_and_encode(Some(&value)).unwrap().unwrap();
    let back = col.decrypt_and_decode(Some(ciphertext.as_bytes())).unwrap();
    assert_eq!(back, Some(value));
}

#[test]
fn repeated_encryption_is_bit_identical() {
    let col = column();
    let value = dt("2079-06-06 23:59:29");
    let first = col.encrypt_and_encode(Some(&value)).unwrap().unwrap();
    for _ in 0..16 {
        let again = col.encrypt_and_encode(Some(&value)).unwrap().unwrap();
        assert_eq!(again.as_bytes(), first.as_bytes());
    }
}

#[test]
fn independent_columns_with_same_key_agree() {
    let value = dt("1900-01-01 12:12:12");
    let a = column().encrypt_and_encode(Some(&value)).unwrap();
    let b = column().encrypt_and_encode(Some(&value)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn equality_search_over_ciphertext() {
    let col = column();
    let stored: Vec<_> = ["2020-07-10 08:00", "2020-07-10 09:00", "2020-07-10 08:00:45"]
        .iter()
        .map(|s| col.encrypt_and_encode(Some(&dt(s))).unwrap().unwrap())
        .collect();

    let probe = col.encrypt_and_encode(Some(&dt("2020-07-10 08:00"))).unwrap().unwrap();
    let hits: Vec<usize> = stored
        .iter()
        .enumerate()
        .filter(|(_, ct)| **ct == probe)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(hits, vec![0, 2]);
}

#[test]
fn ciphertext_is_cipher_over_serializer_bytes() {
    let col = column();
    let ciphertext = col
        .encrypt_and_encode(Some(&dt("2020-07-10 12:12:12")))
        .unwrap()
        .unwrap();
    let expected = Sha256SivCipher::new(KEY)
        .encrypt(&[0xf4, 0xab, 0xdc, 0x02])
        .unwrap();
    assert_eq!(ciphertext.as_bytes(), expected.as_slice());
}

#[test]
fn absent_value_has_no_ciphertext() {
    let col = column();
    assert_eq!(col.encrypt_and_encode(None).unwrap(), None);
    assert_eq!(col.decrypt_and_decode(None).unwrap(), None);
}

#[test]
fn out_of_range_never_reaches_cipher() {
    let err = column()
        .encrypt_and_encode(Some(&dt("1899-12-31")))
        .unwrap_err();
    assert!(err.is_domain());
}

#[test]
fn wrong_key_surfaces_cipher_error_unchanged() {
    let written = column()
        .encrypt_and_encode(Some(&dt("2020-07-10")))
        .unwrap()
        .unwrap();
    let reader: EncryptedColumn<NaiveDateTime, _, _> =
        EncryptedColumn::new(Sha256SivCipher::new([0u8; 32]), SmallDateTimeSerializer);
    match reader.decrypt_and_decode(Some(written.as_bytes())) {
        Err(ColumnError::Cipher(e)) => assert_eq!(e, TestCipherError::Authentication),
        other => panic!("expected cipher error, got {other:?}"),
    }
}

#[test]
fn shared_cipher_across_threads() {
    let cipher = Arc::new(Sha256SivCipher::new(KEY));
    let value = dt("2020-07-10 12:12");
    let expected = column().encrypt_and_encode(Some(&value)).unwrap().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cipher = Arc::clone(&cipher);
            thread::spawn(move || {
                let col: EncryptedColumn<NaiveDateTime, _, _> =
                    EncryptedColumn::new(cipher, SmallDateTimeSerializer);
                col.encrypt_and_encode(Some(&value)).unwrap().unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn tagged_serializer_through_cipher() {
    let serializer = SqlSerializer::from_identifier("SQL_SmallDateTime").unwrap();
    let col: EncryptedColumn<SqlValue, _, _> =
        EncryptedColumn::new(Sha256SivCipher::new(KEY), serializer);
    let value = SqlValue::SmallDateTime(dt("2020-07-10 00:00"));
    let ciphertext = col.encrypt_and_encode(Some(&value)).unwrap().unwrap();

    assert_eq!(
        ciphertext,
        column()
            .encrypt_and_encode(Some(&dt("2020-07-10 00:00")))
            .unwrap()
            .unwrap()
    );
    assert_eq!(col.decrypt_and_decode(Some(ciphertext.as_bytes())).unwrap(), Some(value));
}
