//! Property-based tests for the IP validator
//!
//! Uses proptest to generate random inputs and verify properties

use ipgeo::egui_app::{classify_ip, is_valid_ip, IpKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_in_range_dotted_quads_are_v4(a in 0u32..=255, b in 0u32..=255, c in 0u32..=255, d in 0u32..=255) {
        let ip = format!("{}.{}.{}.{}", a, b, c, d);
        prop_assert_eq!(classify_ip(&ip), IpKind::V4);
    }

    #[test]
    fn test_octets_above_255_are_invalid(a in 256u32..=999, b in 0u32..=255, c in 0u32..=255, d in 0u32..=255) {
        let ip = format!("{}.{}.{}.{}", a, b, c, d);
        prop_assert!(!is_valid_ip(&ip));
    }

    #[test]
    fn test_eight_hex_groups_are_v6(groups in proptest::collection::vec("[0-9a-fA-F]{1,4}", 8)) {
        let ip = groups.join(":");
        prop_assert_eq!(classify_ip(&ip), IpKind::V6);
    }

    #[test]
    fn test_seven_hex_groups_are_invalid(groups in proptest::collection::vec("[0-9a-fA-F]{1,4}", 7)) {
        let ip = groups.join(":");
        prop_assert_eq!(classify_ip(&ip), IpKind::Invalid);
    }

    #[test]
    fn test_classification_never_panics(s in ".*") {
        let _ = classify_ip(&s);
    }
}
