//! # Codec Subcommands
//!
//! `encode`, `decode` and `check`. The literal `null` (any case) stands for
//! an absent value on input and is printed for one on output.

use anyhow::Context;
use clap::Args;
use colcrypt_core::codec;
use colcrypt_core::temporal::{parse_naive, validate_range};
use colcrypt_core::SmallDateTime;
use serde::Serialize;

use crate::output::{from_hex, to_hex, TextReport};

const NULL_LITERAL: &str = "null";

fn is_null(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(NULL_LITERAL)
}

fn or_null(value: Option<String>) -> String {
    value.unwrap_or_else(|| NULL_LITERAL.to_string())
}

/// Arguments for the encode subcommand.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Date/time to encode, e.g. `2020-07-10 12:12:12`, or `null`.
    pub value: String,
}

/// Arguments for the decode subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Hex-encoded plaintext bytes (exactly 4 bytes), or `null`.
    pub hex: String,
}

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Date/time to range-check.
    pub value: String,
}

/// Result of `encode`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EncodeReport {
    /// The value as typed.
    pub input: String,
    /// Lowercase hex of the 4 encoded bytes; `None` when absent.
    pub hex: Option<String>,
    /// Days since 1900-01-01.
    pub days: Option<u16>,
    /// Minutes since midnight.
    pub minutes: Option<u16>,
}

impl TextReport for EncodeReport {
    fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("input", self.input.clone()),
            ("hex", or_null(self.hex.clone())),
            ("days", or_null(self.days.map(|d| d.to_string()))),
            ("minutes", or_null(self.minutes.map(|m| m.to_string()))),
        ]
    }
}

/// Result of `decode`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DecodeReport {
    /// The hex as typed.
    pub input: String,
    /// Decoded value as `YYYY-MM-DD HH:MM:SS`; `None` when absent.
    pub value: Option<String>,
}

impl TextReport for DecodeReport {
    fn lines(&self) -> Vec<(&'static str, String)> {
        vec![("input", self.input.clone()), ("value", or_null(self.value.clone()))]
    }
}

/// Result of `check`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckReport {
    /// The value as typed.
    pub input: String,
    /// The minute-truncated value the column would hold.
    pub stored: String,
    /// Whether seconds or sub-seconds were dropped.
    pub truncated: bool,
}

impl TextReport for CheckReport {
    fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("input", self.input.clone()),
            ("stored", self.stored.clone()),
            ("truncated", self.truncated.to_string()),
        ]
    }
}

/// Encode a value to its 4-byte layout.
pub fn run_encode(args: &EncodeArgs) -> anyhow::Result<EncodeReport> {
    if is_null(&args.value) {
        tracing::debug!("encoding absent value");
        return Ok(EncodeReport {
            input: args.value.clone(),
            hex: None,
            days: None,
            minutes: None,
        });
    }

    let naive = parse_naive(&args.value)?;
    let bytes = codec::encode(Some(&naive))
        .with_context(|| format!("cannot encode {:?}", args.value))?
        .ok_or_else(|| anyhow::anyhow!("codec produced no bytes for {:?}", args.value))?;
    let report = EncodeReport {
        input: args.value.clone(),
        hex: Some(to_hex(&bytes)),
        days: Some(u16::from_le_bytes([bytes[0], bytes[1]])),
        minutes: Some(u16::from_le_bytes([bytes[2], bytes[3]])),
    };
    tracing::debug!(hex = ?report.hex, "encoded value");
    Ok(report)
}

/// Decode a 4-byte hex layout to a value.
pub fn run_decode(args: &DecodeArgs) -> anyhow::Result<DecodeReport> {
    if is_null(&args.hex) {
        return Ok(DecodeReport {
            input: args.hex.clone(),
            value: None,
        });
    }

    let bytes = from_hex(&args.hex)?;
    let value = codec::decode(Some(bytes.as_slice()))
        .with_context(|| format!("cannot decode {:?}", args.hex))?;
    Ok(DecodeReport {
        input: args.hex.clone(),
        value: value.map(|v| v.format("%Y-%m-%d %H:%M:%S").to_string()),
    })
}

/// Range-check a value and report what would be stored.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<CheckReport> {
    let naive = parse_naive(&args.value)?;
    validate_range(&naive)?;
    let stored = SmallDateTime::new(naive)?;
    Ok(CheckReport {
        input: args.value.clone(),
        stored: stored.to_string(),
        truncated: *stored.as_naive() != naive,
    })
}
