//! CLI argument definitions for envset

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envset")]
#[command(about = "Environment settings asset converter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Verbose logging (repeat for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the header declaration for an asset
    #[command(visible_alias = "h")]
    Header {
        /// Entry name (default symbol)
        #[arg(short, long)]
        name: String,

        /// Output symbol (defaults to the entry name)
        #[arg(short, long)]
        symbol: Option<String>,

        /// Emit an OTR resource path placeholder instead of an extern
        #[arg(long, env = "ENVSET_OTR")]
        otr: bool,

        /// Resource path referenced by the OTR placeholder
        #[arg(short, long)]
        replacement: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a C source initializer for an asset
    #[command(visible_alias = "c")]
    Code {
        #[command(flatten)]
        source: SourceArgs,

        /// Enum registry YAML for symbolic sequence ids
        #[arg(short, long, env = "ENVSET_ENUMS")]
        enums: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a framed binary resource for an asset
    #[command(visible_alias = "b")]
    Binary {
        #[command(flatten)]
        source: SourceArgs,

        /// Write the resource big-endian
        #[arg(long)]
        big_endian: bool,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Decode an asset and print it as JSON
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Convert every entry of a metadata manifest
    Batch {
        /// Source data file
        input: PathBuf,

        /// Metadata manifest (YAML)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output representation
        #[arg(long, value_enum, default_value = "code")]
        mode: Mode,

        /// Enum registry YAML for symbolic sequence ids
        #[arg(short, long, env = "ENVSET_ENUMS")]
        enums: Option<PathBuf>,

        /// Emit OTR resource path placeholders in headers
        #[arg(long, env = "ENVSET_OTR")]
        otr: bool,

        /// Write binary resources big-endian
        #[arg(long)]
        big_endian: bool,

        /// Output directory
        #[arg(short, long, default_value = "out")]
        output: PathBuf,
    },
}

/// Where to find one asset
#[derive(Args)]
pub struct SourceArgs {
    /// Source data file
    pub input: PathBuf,

    /// Entry name (default symbol)
    #[arg(short, long, default_value = "gEnvSettings")]
    pub name: String,

    /// Byte offset of the asset (decimal or 0x-prefixed hex)
    #[arg(long, default_value = "0", value_parser = parse_offset)]
    pub offset: u32,

    /// Output symbol (defaults to the entry name)
    #[arg(short, long)]
    pub symbol: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Mode {
    Header,
    Code,
    Binary,
}

impl From<Mode> for envset::ExportMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Header => Self::Header,
            Mode::Code => Self::Code,
            Mode::Binary => Self::Binary,
        }
    }
}

/// Parse a hex or decimal offset string
pub fn parse_offset(offset: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = offset
        .strip_prefix("0x")
        .or_else(|| offset.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else {
        offset.parse::<u32>()
    };
    parsed.map_err(|e| format!("Invalid offset '{}': {}", offset, e))
}
