//! CIDR block expansion.

use ipnet::IpNet;

use super::address::{
    Expanded, address_range, bit_width, classify, classify_addr, next_address, prev_address,
    span_len,
};
use super::error::{SelectorError, check_limit};

/// Expands a CIDR token into its host addresses.
///
/// The network and broadcast addresses of the block are never part of the
/// output and produce no warnings. A token without a prefix, or whose prefix
/// equals the family bit width (`/32`, `/128`), is classified as a single
/// address instead.
///
/// # Errors
///
/// Returns [`SelectorError::NotAddress`] when the single-address path fails to
/// parse, and [`SelectorError::InvalidCidr`] when the block does not parse.
///
/// # Examples
///
/// ```
/// use ip_selector::selector::expand_cidr;
///
/// let hosts = expand_cidr("192.0.2.0/30").unwrap();
/// let hosts: Vec<String> = hosts.addresses.iter().map(ToString::to_string).collect();
/// assert_eq!(hosts, ["192.0.2.1", "192.0.2.2"]);
/// ```
pub fn expand_cidr(token: &str) -> Result<Expanded, SelectorError> {
    expand_cidr_with_limit(token, None)
}

/// Like [`expand_cidr`], rejecting blocks with more than `limit` host addresses.
///
/// # Errors
///
/// In addition to the [`expand_cidr`] errors, returns
/// [`SelectorError::TooManyAddresses`] when the block exceeds `limit`.
pub fn expand_cidr_with_limit(
    token: &str,
    limit: Option<u128>,
) -> Result<Expanded, SelectorError> {
    let (address_part, prefix) = match token.split_once('/') {
        Some((address_part, prefix)) => (address_part, Some(prefix)),
        None => (token, None),
    };

    if prefix.is_none_or(|prefix| is_host_route(address_part, prefix)) {
        return classify(address_part).map(Expanded::from);
    }

    let net: IpNet = token.parse().map_err(|source| SelectorError::InvalidCidr {
        token: token.to_string(),
        source,
    })?;

    let network = net.network();
    let broadcast = net.broadcast();
    let (Some(first), Some(last)) = (next_address(network), prev_address(broadcast)) else {
        return Ok(Expanded::new());
    };

    check_limit(token, span_len(first, last), limit)?;
    tracing::trace!(%net, "Enumerating CIDR block");

    Ok(address_range(first, last)
        .into_iter()
        .flatten()
        .map(classify_addr)
        .collect())
}

/// Returns true if `prefix` is exactly `32` for IPv4 or `128` for IPv6.
///
/// Anything else, including `+32` or `032`, is left to the CIDR parser.
fn is_host_route(address_part: &str, prefix: &str) -> bool {
    address_part
        .parse()
        .is_ok_and(|address| prefix == bit_width(address).to_string())
}
