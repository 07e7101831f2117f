//! Exit codes, logging setup and configuration hints for the binary.

use ip_selector::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Process exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Bad arguments, unreadable config file or missing selectors.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Selector errors under `--strict`, or the report could not be written.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Suggests how to supply selectors when none were found.
pub fn print_config_hint(error: &ConfigError) {
    let missing_selectors =
        matches!(error, ConfigError::MissingRequired { field: f, .. } if *f == field::SELECTORS);

    if missing_selectors {
        eprintln!("\nExample: ip-selector 192.0.2.0/30,198.51.100.1-198.51.100.9");
    }
    if missing_selectors || matches!(error, ConfigError::FileRead { .. }) {
        eprintln!("Run 'ip-selector init' to generate a configuration template.");
    }
}

/// Installs a stderr subscriber; stdout is reserved for the report.
///
/// `RUST_LOG` overrides the level chosen by `verbose`.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
