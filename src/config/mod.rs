//! Configuration layer for ip-selector.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! Selectors given on the command line **replace** `input.selectors` from the
//! config file; the two are never merged.
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--unlimited`, `--strict`) use OR semantics: if set in either
//! the CLI or TOML, the result is `true`.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, OutputFormatArg};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
