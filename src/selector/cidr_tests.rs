//! Tests for CIDR block expansion.

use std::net::IpAddr;

use super::cidr::*;
use super::{SelectorError, Warning};

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

fn strings(addresses: &[IpAddr]) -> Vec<String> {
    addresses.iter().map(ToString::to_string).collect()
}

mod blocks {
    use super::*;

    #[test]
    fn excludes_network_and_broadcast() {
        let expanded = expand_cidr("192.0.2.0/30").unwrap();
        assert_eq!(strings(&expanded.addresses), ["192.0.2.1", "192.0.2.2"]);
        assert!(expanded.warnings.is_empty());
    }

    #[test]
    fn full_slash_24() {
        let expanded = expand_cidr("192.0.2.0/24").unwrap();
        assert_eq!(expanded.addresses.len(), 254);
        assert_eq!(expanded.addresses.first(), Some(&ip("192.0.2.1")));
        assert_eq!(expanded.addresses.last(), Some(&ip("192.0.2.254")));
    }

    #[test]
    fn host_bits_are_masked() {
        let expanded = expand_cidr("192.0.2.77/30").unwrap();
        assert_eq!(strings(&expanded.addresses), ["192.0.2.77", "192.0.2.78"]);
    }

    #[test]
    fn ascending_across_octet_boundary() {
        let expanded = expand_cidr("192.0.2.0/23").unwrap();
        assert_eq!(expanded.addresses.len(), 510);
        assert!(expanded.addresses.windows(2).all(|w| w[0] < w[1]));
        assert!(expanded.addresses.contains(&ip("192.0.2.255")));
        assert!(expanded.addresses.contains(&ip("192.0.3.0")));
    }

    #[test]
    fn ipv6_block() {
        let expanded = expand_cidr("2001:db8::/126").unwrap();
        assert_eq!(strings(&expanded.addresses), ["2001:db8::1", "2001:db8::2"]);
    }

    #[test]
    fn slash_31_is_empty() {
        let expanded = expand_cidr("192.0.2.0/31").unwrap();
        assert!(expanded.addresses.is_empty());
        assert!(expanded.warnings.is_empty());
    }

    #[test]
    fn slash_127_is_empty() {
        assert!(expand_cidr("2001:db8::/127").unwrap().addresses.is_empty());
    }

    #[test]
    fn non_unicast_hosts_become_warnings() {
        let expanded = expand_cidr("127.0.0.0/30").unwrap();
        assert!(expanded.addresses.is_empty());
        assert_eq!(
            expanded.warnings,
            vec![Warning::new(ip("127.0.0.1")), Warning::new(ip("127.0.0.2"))]
        );
    }

    #[test]
    fn unicast_interior_kept_when_network_is_unspecified() {
        // 0.0.0.0 is the network address: skipped silently, .1 and .2 kept
        let expanded = expand_cidr("0.0.0.0/30").unwrap();
        assert_eq!(strings(&expanded.addresses), ["0.0.0.1", "0.0.0.2"]);
        assert!(expanded.warnings.is_empty());
    }
}

mod host_routes {
    use super::*;

    #[test]
    fn slash_32_is_single_address() {
        let expanded = expand_cidr("192.0.2.5/32").unwrap();
        assert_eq!(strings(&expanded.addresses), ["192.0.2.5"]);
    }

    #[test]
    fn slash_128_is_single_address() {
        let expanded = expand_cidr("2001:db8::5/128").unwrap();
        assert_eq!(strings(&expanded.addresses), ["2001:db8::5"]);
    }

    #[test]
    fn no_prefix_is_single_address() {
        let expanded = expand_cidr("192.0.2.5").unwrap();
        assert_eq!(strings(&expanded.addresses), ["192.0.2.5"]);
    }

    #[test]
    fn non_unicast_host_route_warns() {
        let expanded = expand_cidr("127.0.0.1/32").unwrap();
        assert!(expanded.addresses.is_empty());
        assert_eq!(expanded.warnings, vec![Warning::new(ip("127.0.0.1"))]);
    }

    #[test]
    fn ipv6_slash_32_is_a_block() {
        let err = expand_cidr_with_limit("2001:db8::/32", Some(1000)).unwrap_err();
        assert!(matches!(err, SelectorError::TooManyAddresses { .. }));
    }
}

mod errors {
    use super::*;

    #[test]
    fn invalid_address_part() {
        let err = expand_cidr("300.0.2.0/24").unwrap_err();
        assert!(matches!(err, SelectorError::InvalidCidr { .. }));
        assert_eq!(err.to_string(), "invalid CIDR address: 300.0.2.0/24");
    }

    #[test]
    fn prefix_out_of_range() {
        assert!(matches!(
            expand_cidr("192.0.2.0/33"),
            Err(SelectorError::InvalidCidr { .. })
        ));
    }

    #[test]
    fn signed_or_padded_host_route_is_rejected() {
        for token in ["192.0.2.5/+32", "192.0.2.5/032", "2001:db8::5/+128"] {
            assert!(
                matches!(expand_cidr(token), Err(SelectorError::InvalidCidr { .. })),
                "{token} should be rejected"
            );
        }
    }

    #[test]
    fn empty_prefix() {
        assert!(expand_cidr("192.0.2.0/").is_err());
    }

    #[test]
    fn embedded_range_fails() {
        assert!(expand_cidr("192.0.2.1-192.0.2.5/24").is_err());
    }

    #[test]
    fn limit_rejects_large_block() {
        let err = expand_cidr_with_limit("10.0.0.0/8", Some(1024)).unwrap_err();
        assert_eq!(
            err,
            SelectorError::TooManyAddresses {
                token: "10.0.0.0/8".to_string(),
                count: 16_777_214,
                limit: 1024,
            }
        );
    }

    #[test]
    fn limit_counts_hosts_only() {
        let expanded = expand_cidr_with_limit("192.0.2.0/30", Some(2)).unwrap();
        assert_eq!(expanded.addresses.len(), 2);
    }
}
