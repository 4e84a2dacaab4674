//! Planned subnet data model.

use super::Ipv4;
use serde::{Deserialize, Serialize};

/// Address pool a subnet belongs to.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Internet-facing pool, instances get public IPs on launch.
    Public,
    /// Internal pool.
    Private,
}

impl Tier {
    /// Whether instances launched in this tier map a public IP.
    pub fn maps_public_ip(&self) -> bool {
        matches!(self, Tier::Public)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Tier::Public => write!(f, "public"),
            Tier::Private => write!(f, "private"),
        }
    }
}

/// A single zone-bound subnet in the plan.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlannedSubnet {
    /// Resource name, `{stack}-{tier}-subnet-{index}`.
    pub name: String,
    /// The `/24` block allocated to this subnet.
    pub subnet_cidr: Ipv4,
    /// Availability zone the block is bound to (same index in the zone list).
    pub zone: String,
    /// Pool this subnet belongs to.
    pub tier: Tier,
    /// Whether instances launched here get a public IP.
    pub map_public_ip: bool,
    /// Position in the pool (for tracking/debugging).
    #[serde(default)]
    pub index: usize,
}

impl std::fmt::Display for PlannedSubnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} -> {} ({})",
            self.name, self.subnet_cidr, self.zone, self.tier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Public).unwrap(), "\"public\"");
        assert_eq!(serde_json::to_string(&Tier::Private).unwrap(), "\"private\"");
    }

    #[test]
    fn test_tier_maps_public_ip() {
        assert!(Tier::Public.maps_public_ip());
        assert!(!Tier::Private.maps_public_ip());
    }

    #[test]
    fn test_display() {
        let s = PlannedSubnet {
            name: "dev-public-subnet-0".to_string(),
            subnet_cidr: Ipv4::new("10.0.0.0/24").unwrap(),
            zone: "us-west-2a".to_string(),
            tier: Tier::Public,
            map_public_ip: true,
            index: 0,
        };
        assert_eq!(
            s.to_string(),
            "dev-public-subnet-0 10.0.0.0/24 -> us-west-2a (public)"
        );
    }
}
