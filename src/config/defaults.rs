//! Default values for configuration options.

/// Default per-token expansion limit (a /12 IPv4 block is just over this).
pub const MAX_ADDRESSES: u64 = 1 << 20;

/// Default configuration file name written by `init`.
pub const CONFIG_FILE: &str = "ip-selector.toml";
