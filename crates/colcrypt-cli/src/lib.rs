//! # colcrypt-cli — Column Encoding Command-Line Interface
//!
//! Shell access to the smalldatetime codec, for checking what bytes a value
//! becomes before it is handed to the column cipher and for reading back
//! plaintext bytes recovered elsewhere.
//!
//! ## Subcommands
//!
//! - `encode` — value to 4-byte hex encoding
//! - `decode` — 4-byte hex encoding to value
//! - `check` — range check and the minute-truncated value that would be stored
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers; handlers return
//!   serializable reports and never print.
//! - All codec logic lives in `colcrypt-core`.

pub mod codec;
pub mod output;
