//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Selector input section
    #[serde(default)]
    pub input: InputSection,

    /// Expansion limits
    #[serde(default)]
    pub expand: ExpandSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Selector input section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputSection {
    /// Selector lists, joined with ','
    #[serde(default)]
    pub selectors: Vec<String>,
}

/// Expansion limit section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpandSection {
    /// Maximum addresses per CIDR or range token
    pub max_addresses: Option<u64>,

    /// Disable the per-token limit
    #[serde(default)]
    pub unlimited: bool,
}

/// Output section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "text" or "json"
    pub format: Option<String>,

    /// Exit non-zero when any selector fails to parse
    #[serde(default)]
    pub strict: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# ip-selector Configuration File

[input]
# Selector lists (joined with ','). Each entry may hold several
# comma-separated selectors: addresses, CIDR blocks or first-last ranges.
# Note: selectors given on the command line REPLACE these entirely
# selectors = ["192.0.2.0/30", "198.51.100.1-198.51.100.9", "2001:db8::1"]

[expand]
# Maximum number of addresses a single CIDR or range token may expand to
# (default: 1048576). Larger tokens are reported as errors.
# max_addresses = 1048576

# Disable the limit entirely (large blocks may take a long time)
# unlimited = false

[output]
# Output format: "text" (one address per line) or "json" (default: text)
# format = "text"

# Exit with code 2 when any selector fails to parse
# strict = false
"#
    .to_string()
}
