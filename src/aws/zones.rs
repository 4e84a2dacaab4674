//! Availability-zone discovery.
//!
//! Queries EC2 for the zones a region offers. The planner must observe a
//! fully resolved zone list before any CIDR generation runs.

use super::cli;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Query arguments for fetching availability zones.
const ZONE_FILTER: &str = "Name=state,Values=available";

/// Response from `aws ec2 describe-availability-zones`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ZoneData {
    /// List of zones returned.
    #[serde(rename = "AvailabilityZones", default)]
    pub availability_zones: Vec<Zone>,
}

/// One availability zone as reported by EC2.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Zone {
    /// Zone name, e.g. `us-west-2a`.
    pub zone_name: String,
    /// Stable zone id, e.g. `usw2-az1`.
    pub zone_id: String,
    /// Zone state, `available` when usable.
    pub state: String,
    /// Region the zone belongs to.
    pub region_name: String,
    /// Opt-in status of the zone.
    #[serde(default)]
    pub opt_in_status: Option<String>,
}

impl ZoneData {
    /// Names of usable zones, sorted for a deterministic binding order.
    pub fn available_zone_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .availability_zones
            .iter()
            .filter(|z| z.state == "available")
            .map(|z| z.zone_name.clone())
            .collect();
        names.sort();
        names
    }
}

/// Fetch the availability zones of a region via the AWS CLI.
///
/// # Returns
/// * `Ok(ZoneData)` - The zone listing for the region
/// * `Err` - If the CLI call or response parsing fails
pub fn describe_availability_zones(region: &str) -> Result<ZoneData, Box<dyn Error>> {
    let cmd = format!(
        "aws ec2 describe-availability-zones --region {region} --filters '{ZONE_FILTER}' --output json"
    );
    let output = cli::run(&cmd)?;

    let mut deserializer = serde_json::Deserializer::from_str(&output);
    let data: ZoneData = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", output);
        format!(
            "Error parsing zone listing for {region}: path={} error={}",
            e.path(),
            e
        )
    })?;

    log::info!(
        "Got {} zones for region {region}",
        data.availability_zones.len()
    );

    Ok(data)
}
