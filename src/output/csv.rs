//! CSV output formatting for subnet plans.

use crate::error::PlanError;
use crate::models::ProvisionPlan;
use colored::Colorize;

use super::terminal::format_field;

/// A row of plan data for output.
#[derive(Debug)]
pub struct PlanPrintRow {
    /// Row index across both pools, 1-based.
    pub j: usize,
    /// Pool of the subnet.
    pub tier: String,
    /// Subnet resource name.
    pub name: String,
    /// Subnet CIDR notation.
    pub subnet_cidr: String,
    /// Broadcast address of the block.
    pub broadcast: String,
    /// Bound availability zone.
    pub zone: String,
    /// Whether instances get a public IP.
    pub public_ip: bool,
}

/// Flatten a plan into printable rows, public pool first.
pub fn plan_rows(plan: &ProvisionPlan) -> Vec<PlanPrintRow> {
    plan.subnets()
        .enumerate()
        .map(|(i, s)| PlanPrintRow {
            j: i + 1,
            tier: s.tier.to_string(),
            name: s.name.clone(),
            subnet_cidr: s.subnet_cidr.to_string(),
            broadcast: s.subnet_cidr.hi().to_string(),
            zone: s.zone.clone(),
            public_ip: s.map_public_ip,
        })
        .collect()
}

/// Print the plan as CSV to stdout.
pub fn plan_print(plan: &ProvisionPlan) -> Result<(), PlanError> {
    log::info!("#Start plan_print()");
    log::info!(
        "# Got subnet count = {} public + {} private",
        plan.public.subnets.len(),
        plan.private.subnets.len()
    );

    println!(
        r#" "cnt",    "tier",                    "name",     "subnet_cidr",       "broadcast",           "zone", "public_ip""#
    );

    for row in plan_rows(plan) {
        print_csv_row(&row);
    }

    for pool in [&plan.public, &plan.private] {
        if pool.clamped {
            println!(
                "#{}# {} pool clamped: requested {} subnets, region {} offers {} usable zones",
                "NOTE".on_red(),
                pool.tier,
                pool.requested,
                plan.region,
                plan.zones.len()
            );
        }
    }
    println!(
        "# {} {} in {} for stack '{}'",
        plan.vpc_name, plan.vpc_cidr, plan.region, plan.stack
    );

    Ok(())
}

/// Print a single CSV row.
fn print_csv_row(row: &PlanPrintRow) {
    println!(
        r#"{j},{tier},{name},{subnet_cidr},{broadcast},{zone},{public_ip}"#,
        j = format_field(row.j, 6),
        tier = format_field(&row.tier, 9),
        name = format_field(&row.name, 25),
        subnet_cidr = format_field(&row.subnet_cidr, 17),
        broadcast = format_field(format!("{}_br", row.broadcast), 17),
        zone = format_field(&row.zone, 16),
        public_ip = format_field(row.public_ip, 12),
    );
}
