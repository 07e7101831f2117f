//! Single-address parsing, unicast classification and address stepping.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use ipnet::{IpAddrRange, Ipv4AddrRange, Ipv6AddrRange};

use super::SelectorError;

/// Outcome of classifying a syntactically valid address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The address is global unicast and belongs in the output.
    Accepted(IpAddr),
    /// The address parsed but is skipped as non-unicast.
    NonUnicast(Warning),
}

/// An address skipped because it is not global unicast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Warning {
    address: IpAddr,
}

impl Warning {
    /// Creates a warning for the given address.
    #[must_use]
    pub const fn new(address: IpAddr) -> Self {
        Self { address }
    }

    /// The skipped address.
    #[must_use]
    pub const fn address(&self) -> IpAddr {
        self.address
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not global unicast IP address", self.address)
    }
}

/// Addresses and warnings produced by expanding one selector token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expanded {
    /// Accepted addresses in enumeration order.
    pub addresses: Vec<IpAddr>,
    /// Skipped non-unicast addresses in enumeration order.
    pub warnings: Vec<Warning>,
}

impl Expanded {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a classification into the accepted or warning list.
    pub fn push(&mut self, classification: Classification) {
        match classification {
            Classification::Accepted(address) => self.addresses.push(address),
            Classification::NonUnicast(warning) => self.warnings.push(warning),
        }
    }
}

impl From<Classification> for Expanded {
    fn from(classification: Classification) -> Self {
        let mut expanded = Self::new();
        expanded.push(classification);
        expanded
    }
}

impl FromIterator<Classification> for Expanded {
    fn from_iter<I: IntoIterator<Item = Classification>>(iter: I) -> Self {
        let mut expanded = Self::new();
        for classification in iter {
            expanded.push(classification);
        }
        expanded
    }
}

/// Parses and classifies a single textual address.
///
/// IPv4-mapped IPv6 addresses are normalised to their IPv4 form.
///
/// # Errors
///
/// Returns [`SelectorError::NotAddress`] if `token` is not an IP address.
///
/// # Examples
///
/// ```
/// use ip_selector::selector::{Classification, classify};
///
/// assert!(matches!(classify("192.0.2.1"), Ok(Classification::Accepted(_))));
/// assert!(matches!(classify("127.0.0.1"), Ok(Classification::NonUnicast(_))));
/// assert!(classify("not-an-ip").is_err());
/// ```
pub fn classify(token: &str) -> Result<Classification, SelectorError> {
    let address = parse_address(token)?;
    Ok(classify_addr(address))
}

/// Classifies an already parsed address.
#[must_use]
pub fn classify_addr(address: IpAddr) -> Classification {
    let address = address.to_canonical();
    if is_global_unicast(address) {
        Classification::Accepted(address)
    } else {
        Classification::NonUnicast(Warning::new(address))
    }
}

/// Returns true if the address is global unicast.
///
/// Excluded: unspecified, loopback, multicast, link-local unicast and the
/// IPv4 limited broadcast address. Private and documentation ranges count as
/// global unicast.
#[must_use]
pub fn is_global_unicast(address: IpAddr) -> bool {
    match address.to_canonical() {
        IpAddr::V4(v4) => is_global_unicast_v4(v4),
        IpAddr::V6(v6) => is_global_unicast_v6(v6),
    }
}

fn is_global_unicast_v4(address: Ipv4Addr) -> bool {
    !(address.is_unspecified()
        || address.is_loopback()
        || address.is_multicast()
        || address.is_link_local()
        || address.is_broadcast())
}

fn is_global_unicast_v6(address: Ipv6Addr) -> bool {
    // fe80::/10
    let link_local = (address.segments()[0] & 0xffc0) == 0xfe80;
    !(address.is_unspecified() || address.is_loopback() || address.is_multicast() || link_local)
}

/// Parses an address, mapping failure to [`SelectorError::NotAddress`].
pub(crate) fn parse_address(text: &str) -> Result<IpAddr, SelectorError> {
    text.parse::<IpAddr>()
        .map(|address| address.to_canonical())
        .map_err(|_| SelectorError::not_address(text))
}

/// Number of bits in the address family of `address` (32 or 128).
#[must_use]
pub const fn bit_width(address: IpAddr) -> u8 {
    match address {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

/// Returns the address immediately after `address`.
///
/// Returns `None` at the family maximum (`255.255.255.255` or
/// `ffff:...:ffff`); the step never wraps to the zero address.
#[must_use]
pub fn next_address(address: IpAddr) -> Option<IpAddr> {
    match address {
        IpAddr::V4(v4) => u32::from(v4)
            .checked_add(1)
            .map(|n| IpAddr::V4(Ipv4Addr::from(n))),
        IpAddr::V6(v6) => u128::from(v6)
            .checked_add(1)
            .map(|n| IpAddr::V6(Ipv6Addr::from(n))),
    }
}

/// Returns the address immediately before `address`, or `None` at zero.
#[must_use]
pub fn prev_address(address: IpAddr) -> Option<IpAddr> {
    match address {
        IpAddr::V4(v4) => u32::from(v4)
            .checked_sub(1)
            .map(|n| IpAddr::V4(Ipv4Addr::from(n))),
        IpAddr::V6(v6) => u128::from(v6)
            .checked_sub(1)
            .map(|n| IpAddr::V6(Ipv6Addr::from(n))),
    }
}

/// Number of addresses in `first..=last`, zero if reversed or mixed-family.
///
/// Saturates at `u128::MAX` for the full IPv6 space.
#[must_use]
pub fn span_len(first: IpAddr, last: IpAddr) -> u128 {
    match (first, last) {
        (IpAddr::V4(a), IpAddr::V4(b)) => {
            let (a, b) = (u32::from(a), u32::from(b));
            if a > b { 0 } else { u128::from(b - a) + 1 }
        }
        (IpAddr::V6(a), IpAddr::V6(b)) => {
            let (a, b) = (u128::from(a), u128::from(b));
            if a > b { 0 } else { (b - a).saturating_add(1) }
        }
        _ => 0,
    }
}

/// Inclusive ascending range over `first..=last`, or `None` for mixed families.
///
/// The range is empty when `first > last` and stops at the family maximum.
#[must_use]
pub fn address_range(first: IpAddr, last: IpAddr) -> Option<IpAddrRange> {
    match (first, last) {
        (IpAddr::V4(a), IpAddr::V4(b)) => Some(Ipv4AddrRange::new(a, b).into()),
        (IpAddr::V6(a), IpAddr::V6(b)) => Some(Ipv6AddrRange::new(a, b).into()),
        _ => None,
    }
}
