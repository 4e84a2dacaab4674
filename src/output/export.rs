//! Plan file export.
//!
//! Writes the finished plan as JSON for the downstream provisioning engine.
//! Serialized list order preserves the zone binding, so consumers can keep
//! pairing element `i` with zone `i`.

use crate::error::PlanError;
use crate::models::ProvisionPlan;

/// Write the plan to a JSON file and return the path.
///
/// # Arguments
/// * `plan` - The finished plan
/// * `path` - Optional explicit path; defaults to `subnet_plan_{region}.json`
pub fn write_plan_file(plan: &ProvisionPlan, path: Option<&str>) -> Result<String, PlanError> {
    let path = match path {
        Some(p) => p.to_string(),
        None => format!("subnet_plan_{}.json", plan.region),
    };

    let json = serde_json::to_string_pretty(plan)?;
    std::fs::write(&path, json)?;
    log::info!("Wrote plan file: {path}");

    Ok(path)
}
