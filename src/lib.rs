// cargo watch -x 'fmt' -x 'run'

pub mod aws;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use aws::ZoneData;
use config::PlannerConfig;
use error::PlanError;
use models::{ProvisionPlan, SubnetPlan, Tier};
use processing::{bind_zones, check_pool_overlap, check_vpc_containment, generate_subnet_cidrs};

/// Build the plan for one address pool from fully resolved inputs.
pub fn build_subnet_plan(
    tier: Tier,
    config: &PlannerConfig,
    zone_names: &[String],
) -> Result<SubnetPlan, PlanError> {
    let base = match tier {
        Tier::Public => &config.public_subnet_base,
        Tier::Private => &config.private_subnet_base,
    };

    let cidrs = generate_subnet_cidrs(base, zone_names.len(), config.subnet_count)?;
    let effective = cidrs.len();
    let subnets = bind_zones(tier, &config.stack_name, &cidrs, zone_names);

    Ok(SubnetPlan {
        tier,
        requested: config.subnet_count,
        effective,
        clamped: effective < config.subnet_count,
        subnets,
    })
}

/// Build the complete plan: both pools, validated, zone-bound.
///
/// The zone listing must be fully resolved before this runs; the plan
/// computation itself is pure.
pub fn build_provision_plan(
    config: &PlannerConfig,
    zones: &ZoneData,
) -> Result<ProvisionPlan, PlanError> {
    let zone_names = zones.available_zone_names();
    log::info!(
        "Region {} offers {} usable zones: {:?}",
        config.region,
        zone_names.len(),
        zone_names
    );

    let public = build_subnet_plan(Tier::Public, config, &zone_names)?;
    let private = build_subnet_plan(Tier::Private, config, &zone_names)?;

    check_vpc_containment(&public, &config.vpc_cidr)?;
    check_vpc_containment(&private, &config.vpc_cidr)?;
    check_pool_overlap(&public, &private)?;

    Ok(ProvisionPlan {
        region: config.region.clone(),
        stack: config.stack_name.clone(),
        vpc_name: config.vpc_name(),
        vpc_cidr: config.vpc_cidr,
        zones: zone_names,
        public,
        private,
    })
}
