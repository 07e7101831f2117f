//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::report::OutputFormat;
use crate::selector::SelectorParser;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Selector list to expand (all sources joined with ',')
    pub selectors: String,

    /// Per-token expansion limit; `None` means unlimited
    pub max_addresses: Option<u64>,

    /// Output format
    pub format: OutputFormat,

    /// Whether selector errors produce a non-zero exit code
    pub strict: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limit = self
            .max_addresses
            .map_or_else(|| "unlimited".to_string(), |n| n.to_string());

        write!(
            f,
            "Config {{ selectors: {}, max_addresses: {}, format: {}, strict: {} }}",
            self.selectors.split(',').count(),
            limit,
            self.format,
            self.strict,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No selectors are given by either source
    /// - The expansion limit is zero
    /// - The output format is unknown
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let selectors = Self::resolve_selectors(cli, toml)?;

        let max_addresses = Self::resolve_max_addresses(cli, toml)?;

        let format = Self::resolve_format(cli, toml)?;

        // Flags only enable, never disable
        let strict = cli.strict || toml.is_some_and(|t| t.output.strict);

        Ok(Self {
            selectors,
            max_addresses,
            format,
            strict,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Builds a selector parser honouring the configured limit.
    #[must_use]
    pub fn parser(&self) -> SelectorParser {
        SelectorParser::new().with_limit(self.max_addresses.map(u128::from))
    }

    fn resolve_selectors(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        // CLI selectors replace TOML selectors entirely
        let lists = if cli.selectors.is_empty() {
            toml.map(|t| t.input.selectors.as_slice()).unwrap_or_default()
        } else {
            cli.selectors.as_slice()
        };

        if lists.is_empty() {
            return Err(ConfigError::missing(
                field::SELECTORS,
                "Pass selectors as arguments or set input.selectors in config file",
            ));
        }

        Ok(lists.join(","))
    }

    fn resolve_max_addresses(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<u64>, ConfigError> {
        if cli.unlimited || toml.is_some_and(|t| t.expand.unlimited) {
            return Ok(None);
        }

        // Priority: CLI explicit > TOML > default
        let max = cli
            .max_addresses
            .or_else(|| toml.and_then(|t| t.expand.max_addresses))
            .unwrap_or(defaults::MAX_ADDRESSES);

        if max == 0 {
            return Err(ConfigError::InvalidLimit {
                reason: "must be greater than 0 (use --unlimited to disable)".to_string(),
            });
        }

        Ok(Some(max))
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        match toml.and_then(|t| t.output.format.as_deref()) {
            Some(value) => parse_format(value),
            None => Ok(OutputFormat::default()),
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "text" | "plain" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
