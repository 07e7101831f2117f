//! Application execution logic.
//!
//! Expands the configured selectors, logs warnings and errors, and writes
//! the rendered report.

use std::io::Write;

use thiserror::Error;

use ip_selector::config::ValidatedConfig;
use ip_selector::report::Report;
use ip_selector::selector::Expansion;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to serialise the report.
    #[error("Failed to render report: {0}")]
    Render(#[source] serde_json::Error),

    /// Failed to write the report.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Counts reported back to the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of accepted addresses
    pub addresses: usize,
    /// Number of skipped non-unicast addresses
    pub warnings: usize,
    /// Number of selector errors
    pub errors: usize,
}

impl Summary {
    /// Returns true if strict mode should fail this run.
    pub const fn fails_strict(&self, strict: bool) -> bool {
        strict && self.errors > 0
    }
}

impl From<&Expansion> for Summary {
    fn from(expansion: &Expansion) -> Self {
        Self {
            addresses: expansion.addresses.len(),
            warnings: expansion.warnings.len(),
            errors: expansion.errors.len(),
        }
    }
}

/// Expands the configured selectors and writes the report to `out`.
///
/// # Errors
///
/// Returns an error if the report cannot be rendered or written.
pub fn execute<W: Write>(config: &ValidatedConfig, out: &mut W) -> Result<Summary, RunError> {
    let expansion = config.parser().parse(&config.selectors);
    log_diagnostics(&expansion);

    let summary = Summary::from(&expansion);
    tracing::debug!(
        addresses = summary.addresses,
        warnings = summary.warnings,
        errors = summary.errors,
        "Expansion finished"
    );

    let rendered = Report::from(&expansion)
        .render(config.format)
        .map_err(RunError::Render)?;

    if !rendered.is_empty() {
        writeln!(out, "{rendered}").map_err(RunError::Output)?;
    }
    out.flush().map_err(RunError::Output)?;

    Ok(summary)
}

fn log_diagnostics(expansion: &Expansion) {
    for warning in &expansion.warnings {
        tracing::warn!("{warning}");
    }
    for error in &expansion.errors {
        tracing::error!("{error}");
    }
}
