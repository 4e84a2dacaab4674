//! Address-pool conflict detection.
//!
//! The public and private pools come from independently configured base
//! addresses; nothing in the generation arithmetic keeps them apart. Both
//! checks here run before any plan output is produced.

use crate::error::PlanError;
use crate::models::{Ipv4, SubnetPlan};
use itertools::Itertools;

/// Reject plans whose public and private pools share any address space.
pub fn check_pool_overlap(public: &SubnetPlan, private: &SubnetPlan) -> Result<(), PlanError> {
    let mut conflicts: Vec<(Ipv4, Ipv4)> = public
        .cidrs()
        .into_iter()
        .cartesian_product(private.cidrs())
        .filter(|(a, b)| a.overlaps(b))
        .collect();

    // Sort for deterministic reporting
    conflicts.sort();

    if conflicts.is_empty() {
        log::info!("No overlap between public and private pools.");
        return Ok(());
    }

    for (a, b) in &conflicts {
        log::error!("public block {a} overlaps private block {b}");
    }
    let (a, b) = &conflicts[0];
    Err(PlanError::invalid_config(format!(
        "public and private pools overlap: {} conflict(s), first is {a} vs {b}",
        conflicts.len()
    )))
}

/// Reject plans with blocks outside the VPC address space.
pub fn check_vpc_containment(plan: &SubnetPlan, vpc_cidr: &Ipv4) -> Result<(), PlanError> {
    for subnet in &plan.subnets {
        let block = &subnet.subnet_cidr;
        if !vpc_cidr.contains(block.lo()) || !vpc_cidr.contains(block.hi()) {
            return Err(PlanError::invalid_config(format!(
                "{} block {} is outside the VPC address space {}",
                subnet.name, block, vpc_cidr
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlannedSubnet, SubnetBase, Tier};

    fn plan(tier: Tier, base: &str, count: usize) -> SubnetPlan {
        let base: SubnetBase = base.parse().unwrap();
        let subnets = (0..count)
            .map(|i| PlannedSubnet {
                name: format!("dev-{tier}-subnet-{i}"),
                subnet_cidr: base.nth(i).unwrap(),
                zone: format!("us-west-2{}", (b'a' + i as u8) as char),
                tier,
                map_public_ip: tier.maps_public_ip(),
                index: i,
            })
            .collect();
        SubnetPlan {
            tier,
            requested: count,
            effective: count,
            clamped: false,
            subnets,
        }
    }

    #[test]
    fn test_disjoint_pools_pass() {
        let public = plan(Tier::Public, "10.0.0.0", 3);
        let private = plan(Tier::Private, "10.0.10.0", 3);
        assert!(check_pool_overlap(&public, &private).is_ok());
    }

    #[test]
    fn test_adjacent_pools_pass() {
        // private starts in the block right after the last public one
        let public = plan(Tier::Public, "10.0.0.0", 3);
        let private = plan(Tier::Private, "10.0.3.0", 3);
        assert!(check_pool_overlap(&public, &private).is_ok());
    }

    #[test]
    fn test_identical_bases_fail() {
        let public = plan(Tier::Public, "10.0.0.0", 3);
        let private = plan(Tier::Private, "10.0.0.0", 3);
        let err = check_pool_overlap(&public, &private).unwrap_err();
        assert!(err.to_string().contains("pools overlap"), "{err}");
    }

    #[test]
    fn test_partially_overlapping_pools_fail() {
        // public covers .0-.2, private starts at .2
        let public = plan(Tier::Public, "10.0.0.0", 3);
        let private = plan(Tier::Private, "10.0.2.0", 3);
        let err = check_pool_overlap(&public, &private).unwrap_err();
        assert!(err.to_string().contains("1 conflict(s)"), "{err}");
    }

    #[test]
    fn test_vpc_containment_passes_inside() {
        let public = plan(Tier::Public, "10.0.0.0", 3);
        let vpc = Ipv4::new("10.0.0.0/16").unwrap();
        assert!(check_vpc_containment(&public, &vpc).is_ok());
    }

    #[test]
    fn test_vpc_containment_fails_outside() {
        let public = plan(Tier::Public, "192.168.0.0", 2);
        let vpc = Ipv4::new("10.0.0.0/16").unwrap();
        let err = check_vpc_containment(&public, &vpc).unwrap_err();
        assert!(err.to_string().contains("outside the VPC"), "{err}");
    }
}
