//! ip-selector: IP Selector Expander
//!
//! A library for expanding comma-separated IP selectors (single addresses,
//! CIDR blocks and inclusive ranges) into deduplicated lists of global
//! unicast addresses.
//!
//! ```
//! let expansion = ip_selector::selector::parse("192.0.2.0/30, 192.0.2.9-192.0.2.10");
//! assert_eq!(
//!     expansion.address_strings(),
//!     ["192.0.2.1", "192.0.2.2", "192.0.2.9", "192.0.2.10"]
//! );
//! ```

pub mod config;
pub mod report;
pub mod selector;
