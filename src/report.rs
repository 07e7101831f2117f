//! Rendering of expansion results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::selector::Expansion;

/// Output format for an expansion report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Accepted addresses, one per line.
    #[default]
    Text,
    /// The full report as a JSON object.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Serialisable view of an [`Expansion`] with every value in string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Accepted addresses in canonical form.
    pub addresses: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl From<&Expansion> for Report {
    fn from(expansion: &Expansion) -> Self {
        Self {
            addresses: expansion.address_strings(),
            warnings: expansion.warning_messages(),
            errors: expansion.error_messages(),
        }
    }
}

impl Report {
    /// Renders the report in the given format.
    ///
    /// Text output lists only the addresses; warnings and errors are left to
    /// the caller's logging.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialisation fails.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.addresses.join("\n")),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}
