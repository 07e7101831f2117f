//! Error types for selector parsing and expansion.

use thiserror::Error;

/// Error produced for a single selector token.
///
/// Errors are collected per token by the parser; one failing token never
/// aborts the expansion of the others.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The token (or one side of a range) is not a parseable IP address.
    #[error("{token} is not IP address")]
    NotAddress {
        /// The offending text
        token: String,
    },

    /// The token contains `-` but is not a well-formed `first-last` range.
    #[error("{token} is not range")]
    NotRange {
        /// The offending token
        token: String,
    },

    /// The token contains `/` but is not a valid CIDR block.
    #[error("invalid CIDR address: {token}")]
    InvalidCidr {
        /// The offending token
        token: String,
        /// Underlying parser error
        #[source]
        source: ipnet::AddrParseError,
    },

    /// The token would enumerate more addresses than the configured limit.
    #[error("{token} expands to {count} addresses, exceeding the limit of {limit}")]
    TooManyAddresses {
        /// The offending token
        token: String,
        /// Number of addresses the token would enumerate
        count: u128,
        /// Configured per-token limit
        limit: u128,
    },
}

impl SelectorError {
    /// Creates a `NotAddress` error for the given text.
    #[must_use]
    pub fn not_address(token: impl Into<String>) -> Self {
        Self::NotAddress {
            token: token.into(),
        }
    }

    /// Creates a `NotRange` error for the given token.
    #[must_use]
    pub fn not_range(token: impl Into<String>) -> Self {
        Self::NotRange {
            token: token.into(),
        }
    }

    /// Returns the token (or token part) this error refers to.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::NotAddress { token }
            | Self::NotRange { token }
            | Self::InvalidCidr { token, .. }
            | Self::TooManyAddresses { token, .. } => token,
        }
    }
}

/// Checks a token's enumeration size against an optional limit.
pub(crate) fn check_limit(
    token: &str,
    count: u128,
    limit: Option<u128>,
) -> Result<(), SelectorError> {
    match limit {
        Some(limit) if count > limit => Err(SelectorError::TooManyAddresses {
            token: token.to_string(),
            count,
            limit,
        }),
        _ => Ok(()),
    }
}
