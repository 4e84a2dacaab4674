//! Subnet CIDR generation.
//!
//! Derives an ordered list of `/24` blocks from a base address, one per
//! usable availability zone.

use crate::error::PlanError;
use crate::models::{Ipv4, SubnetBase};

/// Generate the ordered `/24` blocks for one address pool.
///
/// The count is clamped to `min(requested, zone_count)`; the clamp is
/// logged so the operator is not surprised by fewer segments than asked
/// for. Block `i` carries the base's third octet incremented by `i`, so
/// callers can pair block `i` with zone `i` of an index-aligned zone list.
///
/// # Arguments
/// * `base` - base address, third octet is the counter
/// * `zone_count` - zones actually available in the target region
/// * `requested` - operator-desired subnet count
pub fn generate_subnet_cidrs(
    base: &SubnetBase,
    zone_count: usize,
    requested: usize,
) -> Result<Vec<Ipv4>, PlanError> {
    if requested == 0 {
        return Err(PlanError::invalid_config(
            "requested subnet count must be at least 1",
        ));
    }
    if zone_count == 0 {
        return Err(PlanError::invalid_config(
            "region offers no usable availability zones",
        ));
    }

    let effective = requested.min(zone_count);
    if effective < requested {
        log::warn!(
            "capacity clamped: requested {requested} subnets but region offers {zone_count} zones, planning {effective}"
        );
    }

    (0..effective).map(|i| base.nth(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> SubnetBase {
        s.parse().expect("Error parsing base address")
    }

    #[test]
    fn test_three_zones_three_requested() {
        let cidrs = generate_subnet_cidrs(&base("10.0.0.0"), 3, 3).unwrap();
        let expected: Vec<String> = vec!["10.0.0.0/24", "10.0.1.0/24", "10.0.2.0/24"]
            .into_iter()
            .map(String::from)
            .collect();
        let got: Vec<String> = cidrs.iter().map(|c| c.to_string()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_clamped_to_zone_count() {
        let cidrs = generate_subnet_cidrs(&base("10.0.0.0"), 2, 5).unwrap();
        let got: Vec<String> = cidrs.iter().map(|c| c.to_string()).collect();
        assert_eq!(got, vec!["10.0.0.0/24", "10.0.1.0/24"]);
    }

    #[test]
    fn test_single_zone_single_requested() {
        let cidrs = generate_subnet_cidrs(&base("192.168.10.0"), 1, 1).unwrap();
        let got: Vec<String> = cidrs.iter().map(|c| c.to_string()).collect();
        assert_eq!(got, vec!["192.168.10.0/24"]);
    }

    #[test]
    fn test_requested_below_zone_count() {
        let cidrs = generate_subnet_cidrs(&base("10.0.0.0"), 6, 2).unwrap();
        assert_eq!(cidrs.len(), 2);
    }

    #[test]
    fn test_output_length_is_min() {
        for zones in 1..6 {
            for requested in 1..6 {
                let cidrs = generate_subnet_cidrs(&base("10.0.0.0"), zones, requested).unwrap();
                assert_eq!(cidrs.len(), zones.min(requested));
            }
        }
    }

    #[test]
    fn test_outputs_distinct_and_increasing() {
        let cidrs = generate_subnet_cidrs(&base("10.20.100.0"), 5, 5).unwrap();
        for (i, cidr) in cidrs.iter().enumerate() {
            assert_eq!(cidr.addr.octets()[2], 100 + i as u8);
            assert_eq!(cidr.addr.octets()[3], 0);
            assert_eq!(cidr.mask, 24);
        }
        for pair in cidrs.windows(2) {
            assert!(pair[0] < pair[1], "expected strictly increasing blocks");
        }
    }

    #[test]
    fn test_idempotent() {
        let b = base("172.16.0.0");
        let first = generate_subnet_cidrs(&b, 3, 3).unwrap();
        let second = generate_subnet_cidrs(&b, 3, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_requested_rejected() {
        let err = generate_subnet_cidrs(&base("10.0.0.0"), 3, 0).unwrap_err();
        assert!(err.to_string().contains("at least 1"), "{err}");
    }

    #[test]
    fn test_zero_zones_rejected() {
        let err = generate_subnet_cidrs(&base("10.0.0.0"), 0, 3).unwrap_err();
        assert!(err.to_string().contains("no usable"), "{err}");
    }

    #[test]
    fn test_third_octet_overflow_rejected() {
        // 254 + 2 would pass 255
        let err = generate_subnet_cidrs(&base("10.0.254.0"), 3, 3).unwrap_err();
        assert!(err.to_string().contains("third octet overflow"), "{err}");
        // clamping can bring the plan back under the limit
        assert!(generate_subnet_cidrs(&base("10.0.254.0"), 2, 5).is_ok());
    }
}
