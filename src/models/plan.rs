//! Subnet plan data model.

use super::{Ipv4, PlannedSubnet, Tier};
use serde::{Deserialize, Serialize};

/// One address pool of the plan: the ordered subnets for a tier.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubnetPlan {
    /// Pool this plan covers.
    pub tier: Tier,
    /// Subnet count the operator asked for.
    pub requested: usize,
    /// Count actually planned, `min(requested, zone count)`.
    pub effective: usize,
    /// True when `effective < requested` (region offered fewer zones).
    pub clamped: bool,
    /// Ordered subnets; element `i` is bound to zone `i`.
    pub subnets: Vec<PlannedSubnet>,
}

impl SubnetPlan {
    /// The CIDR blocks of this pool, in plan order.
    pub fn cidrs(&self) -> Vec<Ipv4> {
        self.subnets.iter().map(|s| s.subnet_cidr).collect()
    }
}

impl std::fmt::Display for SubnetPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{} pool: {}/{} subnets{}",
            self.tier,
            self.effective,
            self.requested,
            if self.clamped { " (clamped)" } else { "" }
        )?;
        for subnet in &self.subnets {
            writeln!(f, "  - {subnet}")?;
        }
        Ok(())
    }
}

/// The complete plan handed to the provisioning engine.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProvisionPlan {
    /// Target region.
    pub region: String,
    /// Stack name used in resource naming.
    pub stack: String,
    /// VPC resource name, `vpc-{stack}`.
    pub vpc_name: String,
    /// Address space of the VPC containing both pools.
    pub vpc_cidr: Ipv4,
    /// Zone names discovered for the region, in binding order.
    pub zones: Vec<String>,
    /// Internet-facing pool.
    pub public: SubnetPlan,
    /// Internal pool.
    pub private: SubnetPlan,
}

impl ProvisionPlan {
    /// All subnets of both pools, public first, in plan order.
    pub fn subnets(&self) -> impl Iterator<Item = &PlannedSubnet> {
        self.public.subnets.iter().chain(self.private.subnets.iter())
    }
}
