//! # colcrypt CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;
use colcrypt_cli::output::{render, OutputFormat};

/// colcrypt — SQL Server column encoding toolkit.
///
/// Encodes, decodes and range-checks smalldatetime values in the exact
/// 4-byte layout that deterministic column encryption operates on.
#[derive(Parser, Debug)]
#[command(name = "colcrypt", version, about)]
struct Cli {
    /// Output format for reports.
    #[arg(
        long,
        value_enum,
        global = true,
        env = "COLCRYPT_OUTPUT",
        default_value_t = OutputFormat::Text
    )]
    output: OutputFormat,

    /// Emit logs as JSON lines (filter with RUST_LOG).
    #[arg(long, global = true, env = "COLCRYPT_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Encode a date/time to its 4-byte smalldatetime layout.
    Encode(colcrypt_cli::codec::EncodeArgs),
    /// Decode a 4-byte smalldatetime layout.
    Decode(colcrypt_cli::codec::DecodeArgs),
    /// Range-check a date/time and show the value that would be stored.
    Check(colcrypt_cli::codec::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    let rendered = match &cli.command {
        Commands::Encode(args) => render(&colcrypt_cli::codec::run_encode(args)?, cli.output)?,
        Commands::Decode(args) => render(&colcrypt_cli::codec::run_decode(args)?, cli.output)?,
        Commands::Check(args) => render(&colcrypt_cli::codec::run_check(args)?, cli.output)?,
    };
    println!("{rendered}");

    Ok(())
}
