//! Zone binding.
//!
//! Pairs generated CIDR blocks with availability-zone names. Block `i` is
//! bound to zone `i`; the two lists are ordered independently and must stay
//! index-aligned all the way into the provisioning engine.

use crate::models::{Ipv4, PlannedSubnet, Tier};

/// Bind each block to the zone at the same index.
///
/// `cidrs` is never longer than `zones` because generation clamps to the
/// zone count first; extra zones are simply left unused.
pub fn bind_zones(
    tier: Tier,
    stack: &str,
    cidrs: &[Ipv4],
    zones: &[String],
) -> Vec<PlannedSubnet> {
    cidrs
        .iter()
        .zip(zones.iter())
        .enumerate()
        .map(|(index, (cidr, zone))| {
            let subnet = PlannedSubnet {
                name: format!("{stack}-{tier}-subnet-{index}"),
                subnet_cidr: *cidr,
                zone: zone.clone(),
                tier,
                map_public_ip: tier.maps_public_ip(),
                index,
            };
            log::debug!("bound {subnet}");
            subnet
        })
        .collect()
}
