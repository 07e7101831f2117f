//! Tests for address range expansion.

use std::net::IpAddr;

use super::range::*;
use super::{SelectorError, Warning};

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

fn strings(addresses: &[IpAddr]) -> Vec<String> {
    addresses.iter().map(ToString::to_string).collect()
}

mod enumeration {
    use super::*;

    #[test]
    fn inclusive_in_order() {
        let expanded = expand_range("192.0.2.1-192.0.2.3").unwrap();
        assert_eq!(
            strings(&expanded.addresses),
            ["192.0.2.1", "192.0.2.2", "192.0.2.3"]
        );
    }

    #[test]
    fn single_address_range() {
        let expanded = expand_range("192.0.2.9-192.0.2.9").unwrap();
        assert_eq!(strings(&expanded.addresses), ["192.0.2.9"]);
    }

    #[test]
    fn keeps_boundary_addresses() {
        let expanded = expand_range("192.0.2.0-192.0.2.255").unwrap();
        assert_eq!(expanded.addresses.len(), 256);
        assert_eq!(expanded.addresses.first(), Some(&ip("192.0.2.0")));
        assert_eq!(expanded.addresses.last(), Some(&ip("192.0.2.255")));
    }

    #[test]
    fn crosses_octet_boundary() {
        let expanded = expand_range("192.0.2.254-192.0.3.1").unwrap();
        assert_eq!(
            strings(&expanded.addresses),
            ["192.0.2.254", "192.0.2.255", "192.0.3.0", "192.0.3.1"]
        );
    }

    #[test]
    fn ipv6_range() {
        let expanded = expand_range("2001:db8::fffe-2001:db8::1:1").unwrap();
        assert_eq!(
            strings(&expanded.addresses),
            ["2001:db8::fffe", "2001:db8::ffff", "2001:db8::1:0", "2001:db8::1:1"]
        );
    }

    #[test]
    fn non_unicast_members_become_warnings() {
        let expanded = expand_range("126.255.255.255-127.0.0.1").unwrap();
        assert_eq!(strings(&expanded.addresses), ["126.255.255.255"]);
        assert_eq!(
            expanded.warnings,
            vec![Warning::new(ip("127.0.0.0")), Warning::new(ip("127.0.0.1"))]
        );
    }

    #[test]
    fn ends_at_family_maximum() {
        let expanded = expand_range("255.255.255.253-255.255.255.255").unwrap();
        assert_eq!(strings(&expanded.addresses), ["255.255.255.253", "255.255.255.254"]);
        assert_eq!(expanded.warnings, vec![Warning::new(ip("255.255.255.255"))]);
    }
}

mod reversed {
    use super::*;

    #[test]
    fn yields_first_only() {
        let expanded = expand_range("192.0.2.9-192.0.2.1").unwrap();
        assert_eq!(strings(&expanded.addresses), ["192.0.2.9"]);
    }

    #[test]
    fn non_unicast_first_warns() {
        let expanded = expand_range("127.0.0.9-127.0.0.1").unwrap();
        assert!(expanded.addresses.is_empty());
        assert_eq!(expanded.warnings, vec![Warning::new(ip("127.0.0.9"))]);
    }

    #[test]
    fn ignores_limit() {
        let expanded = expand_range_with_limit("192.0.2.9-192.0.2.1", Some(0)).unwrap();
        assert_eq!(expanded.addresses.len(), 1);
    }
}

mod errors {
    use super::*;

    #[test]
    fn three_parts_is_not_range() {
        assert_eq!(
            expand_range("1.1.1.1-1.1.1.2-1.1.1.3").unwrap_err(),
            SelectorError::not_range("1.1.1.1-1.1.1.2-1.1.1.3")
        );
    }

    #[test]
    fn empty_part_is_not_range() {
        assert_eq!(
            expand_range("1.1.1.1-").unwrap_err().to_string(),
            "1.1.1.1- is not range"
        );
        assert!(matches!(
            expand_range("-1.1.1.1"),
            Err(SelectorError::NotRange { .. })
        ));
    }

    #[test]
    fn invalid_first_part_is_named() {
        assert_eq!(
            expand_range("bogus-192.0.2.1").unwrap_err(),
            SelectorError::not_address("bogus")
        );
    }

    #[test]
    fn invalid_last_part_is_named() {
        assert_eq!(
            expand_range("192.0.2.1-192.0.2.300").unwrap_err().to_string(),
            "192.0.2.300 is not IP address"
        );
    }

    #[test]
    fn parts_are_not_trimmed() {
        assert!(matches!(
            expand_range("192.0.2.1 - 192.0.2.3"),
            Err(SelectorError::NotAddress { .. })
        ));
    }

    #[test]
    fn mixed_families_is_not_range() {
        assert!(matches!(
            expand_range("192.0.2.1-2001:db8::1"),
            Err(SelectorError::NotRange { .. })
        ));
    }

    #[test]
    fn limit_rejects_large_range() {
        let err = expand_range_with_limit("10.0.0.0-10.0.255.255", Some(100)).unwrap_err();
        assert!(matches!(
            err,
            SelectorError::TooManyAddresses {
                count: 65_536,
                limit: 100,
                ..
            }
        ));
    }
}
