//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::defaults;

/// ip-selector: IP Selector Expander
///
/// Expands comma-separated addresses, CIDR blocks and address ranges
/// into a deduplicated list of global unicast addresses.
#[derive(Debug, Parser)]
#[command(name = "ip-selector")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Selector lists, e.g. "192.0.2.0/30,198.51.100.1-198.51.100.9" (joined with ',')
    #[arg(value_name = "SELECTORS")]
    pub selectors: Vec<String>,

    /// Maximum number of addresses a single CIDR or range token may expand to
    #[arg(long = "max-addresses", value_name = "N")]
    pub max_addresses: Option<u64>,

    /// Disable the per-token expansion limit
    #[arg(long)]
    pub unlimited: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Exit with a non-zero code if any selector fails to parse
    #[arg(long)]
    pub strict: bool,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for ip-selector
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// One address per line
    #[value(name = "text")]
    Text,
    /// JSON object with addresses, warnings and errors
    #[value(name = "json")]
    Json,
}

impl From<OutputFormatArg> for crate::report::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => Self::Text,
            OutputFormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
