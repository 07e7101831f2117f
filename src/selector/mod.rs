//! Selector expansion engine.
//!
//! Turns a comma-separated list of selectors into individual addresses:
//! - Single addresses ([`classify`])
//! - CIDR blocks without network and broadcast addresses ([`expand_cidr`])
//! - Inclusive ranges ([`expand_range`])
//! - Whole lists with dispatch and deduplication ([`parse`], [`SelectorParser`])
//!
//! Only global unicast addresses are accepted. Anything else that parses is
//! reported as a [`Warning`]; anything that does not parse becomes a
//! [`SelectorError`]. Neither stops the remaining tokens from being expanded.
//!
//! All functions are pure and synchronous. Large blocks enumerate fully unless
//! a limit is set with [`SelectorParser::with_max_addresses`].

mod address;
mod cidr;
mod error;
mod parser;
mod range;

#[cfg(test)]
mod cidr_tests;
#[cfg(test)]
mod range_tests;

pub use address::{
    Classification, Expanded, Warning, address_range, bit_width, classify, classify_addr,
    is_global_unicast, next_address, prev_address, span_len,
};
pub use cidr::{expand_cidr, expand_cidr_with_limit};
pub use error::SelectorError;
pub use parser::{Expansion, SelectorParser, TokenKind, parse};
pub use range::{expand_range, expand_range_with_limit};
