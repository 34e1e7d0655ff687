//! # Output Formatting
//!
//! Reports render either as aligned `key: value` text or as one JSON
//! object per invocation.

use clap::ValueEnum;
use serde::Serialize;

/// How reports are written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable `key: value` lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// A report that can be rendered as text.
pub trait TextReport {
    /// `(label, value)` pairs in display order.
    fn lines(&self) -> Vec<(&'static str, String)>;
}

/// Render `report` in the requested format.
pub fn render<R: Serialize + TextReport>(
    report: &R,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let lines = report.lines();
            let width = lines.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
            Ok(lines
                .into_iter()
                .map(|(k, v)| format!("{k:<width$}  {v}"))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

/// Render bytes as lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Parse a hex string, ignoring an optional `0x` prefix and whitespace.
pub fn from_hex(hex: &str) -> anyhow::Result<Vec<u8>> {
    let cleaned: String = hex
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if !cleaned.is_ascii() {
        anyhow::bail!("hex input contains non-ASCII characters");
    }
    if cleaned.len() % 2 != 0 {
        anyhow::bail!("hex input must have an even number of digits, got {}", cleaned.len());
    }
    (0..cleaned.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&cleaned[i..i + 2], 16)
                .map_err(|e| anyhow::anyhow!("invalid hex at offset {i}: {e}"))
        })
        .collect()
}
