//! Inclusive address range expansion.

use super::address::{
    Expanded, address_range, bit_width, classify_addr, parse_address, span_len,
};
use super::error::{SelectorError, check_limit};

/// Expands a `first-last` token into every address between the two, inclusive.
///
/// There is no network/broadcast exclusion. A reversed range (`first > last`)
/// yields `first` alone.
///
/// # Errors
///
/// - [`SelectorError::NotRange`] unless the token has exactly two non-empty
///   parts of the same address family
/// - [`SelectorError::NotAddress`] naming whichever part does not parse
///
/// # Examples
///
/// ```
/// use ip_selector::selector::expand_range;
///
/// let range = expand_range("192.0.2.1-192.0.2.3").unwrap();
/// assert_eq!(range.addresses.len(), 3);
/// ```
pub fn expand_range(token: &str) -> Result<Expanded, SelectorError> {
    expand_range_with_limit(token, None)
}

/// Like [`expand_range`], rejecting ranges with more than `limit` addresses.
///
/// # Errors
///
/// In addition to the [`expand_range`] errors, returns
/// [`SelectorError::TooManyAddresses`] when the range exceeds `limit`.
pub fn expand_range_with_limit(
    token: &str,
    limit: Option<u128>,
) -> Result<Expanded, SelectorError> {
    let mut parts = token.split('-');
    let (Some(first), Some(last), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(SelectorError::not_range(token));
    };
    if first.is_empty() || last.is_empty() {
        return Err(SelectorError::not_range(token));
    }

    let first = parse_address(first)?;
    let last = parse_address(last)?;
    if bit_width(first) != bit_width(last) {
        return Err(SelectorError::not_range(token));
    }

    if first > last {
        tracing::debug!(%first, %last, "Reversed range, keeping first address only");
        return Ok(Expanded::from(classify_addr(first)));
    }

    check_limit(token, span_len(first, last), limit)?;

    Ok(address_range(first, last)
        .into_iter()
        .flatten()
        .map(classify_addr)
        .collect())
}
