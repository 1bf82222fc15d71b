use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode binary data as base85 text
    Encode(EncodeArgs),
    /// Decode base85 text back to binary data
    Decode(DecodeArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Do not print a newline after the encoded text
    #[arg(short = 'n', long)]
    pub no_newline: bool,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Print decoded bytes as hex instead of raw binary
    #[arg(long)]
    pub hex: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the configuration files that are consulted
    Path,
}
