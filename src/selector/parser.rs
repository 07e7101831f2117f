//! Selector list parsing: dispatch, aggregation and deduplication.

use std::collections::HashSet;
use std::net::IpAddr;

use super::address::{Expanded, Warning, classify};
use super::cidr::expand_cidr_with_limit;
use super::error::SelectorError;
use super::range::expand_range_with_limit;

/// Syntactic shape of a selector token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A single address, e.g. `192.0.2.1`.
    Plain,
    /// A CIDR block, e.g. `192.0.2.0/24`.
    Cidr,
    /// An inclusive range, e.g. `192.0.2.10-192.0.2.20`.
    Range,
}

impl TokenKind {
    /// Determines the shape of a trimmed token.
    ///
    /// `/` wins over `-`, so `a-b/24` is treated as a (malformed) CIDR block.
    #[must_use]
    pub fn of(token: &str) -> Self {
        if token.contains('/') {
            Self::Cidr
        } else if token.contains('-') {
            Self::Range
        } else {
            Self::Plain
        }
    }
}

/// Result of expanding a whole selector list.
///
/// All three collections are always present; any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Accepted addresses, deduplicated, in first-occurrence order.
    pub addresses: Vec<IpAddr>,
    /// Addresses skipped because they are not global unicast.
    pub warnings: Vec<Warning>,
    /// Per-token parse errors.
    pub errors: Vec<SelectorError>,
}

impl Expansion {
    /// Accepted addresses in canonical string form.
    #[must_use]
    pub fn address_strings(&self) -> Vec<String> {
        self.addresses.iter().map(ToString::to_string).collect()
    }

    /// Warning messages.
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Error messages.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Returns true if any token failed to parse.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns true if there are neither warnings nor errors.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }
}

/// Selector list parser with an optional per-token expansion limit.
///
/// The parser holds no state between calls and can be shared freely.
///
/// # Examples
///
/// ```
/// use ip_selector::selector::SelectorParser;
///
/// let parser = SelectorParser::new().with_max_addresses(16);
/// let expansion = parser.parse("192.0.2.0/30, 10.0.0.0/8");
///
/// assert_eq!(expansion.address_strings(), ["192.0.2.1", "192.0.2.2"]);
/// assert_eq!(expansion.errors.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorParser {
    max_addresses: Option<u128>,
}

impl SelectorParser {
    /// Creates a parser without an expansion limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_addresses: None,
        }
    }

    /// Limits how many addresses a single CIDR or range token may enumerate.
    ///
    /// Tokens over the limit produce [`SelectorError::TooManyAddresses`] and
    /// contribute nothing else.
    #[must_use]
    pub const fn with_max_addresses(mut self, max: u128) -> Self {
        self.max_addresses = Some(max);
        self
    }

    /// Sets or clears the per-token limit.
    #[must_use]
    pub const fn with_limit(mut self, max: Option<u128>) -> Self {
        self.max_addresses = max;
        self
    }

    /// The configured per-token limit, if any.
    #[must_use]
    pub const fn max_addresses(&self) -> Option<u128> {
        self.max_addresses
    }

    /// Expands a comma-separated selector list.
    ///
    /// Never fails as a whole: malformed tokens end up in
    /// [`Expansion::errors`] and the remaining tokens are still expanded.
    #[must_use]
    pub fn parse(&self, selectors: &str) -> Expansion {
        let mut accepted = Vec::new();
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        for token in selectors.split(',').map(str::trim) {
            let kind = TokenKind::of(token);
            tracing::trace!(token, ?kind, "Dispatching selector token");

            match self.expand_token(token, kind) {
                Ok(expanded) => {
                    accepted.extend(expanded.addresses);
                    warnings.extend(expanded.warnings);
                }
                Err(e) => {
                    tracing::debug!("Selector token rejected: {e}");
                    errors.push(e);
                }
            }
        }

        let addresses = dedup_preserving_order(accepted);
        tracing::debug!(
            addresses = addresses.len(),
            warnings = warnings.len(),
            errors = errors.len(),
            "Selector list expanded"
        );

        Expansion {
            addresses,
            warnings,
            errors,
        }
    }

    fn expand_token(&self, token: &str, kind: TokenKind) -> Result<Expanded, SelectorError> {
        match kind {
            TokenKind::Cidr => expand_cidr_with_limit(token, self.max_addresses),
            TokenKind::Range => expand_range_with_limit(token, self.max_addresses),
            TokenKind::Plain => classify(token).map(Expanded::from),
        }
    }
}

/// Expands a comma-separated selector list without any size limit.
///
/// # Examples
///
/// ```
/// use ip_selector::selector::parse;
///
/// let expansion = parse("192.0.2.1, 192.0.2.1, 127.0.0.1, bogus");
///
/// assert_eq!(expansion.address_strings(), ["192.0.2.1"]);
/// assert_eq!(expansion.warning_messages(), ["127.0.0.1 is not global unicast IP address"]);
/// assert_eq!(expansion.error_messages(), ["bogus is not IP address"]);
/// ```
#[must_use]
pub fn parse(selectors: &str) -> Expansion {
    SelectorParser::new().parse(selectors)
}

fn dedup_preserving_order(addresses: Vec<IpAddr>) -> Vec<IpAddr> {
    let mut seen = HashSet::with_capacity(addresses.len());
    addresses
        .into_iter()
        .filter(|address| seen.insert(*address))
        .collect()
}
