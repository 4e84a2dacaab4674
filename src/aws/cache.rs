//! Cache management for zone listings.
//!
//! Caches the EC2 zone response per region and day, so repeated plan runs
//! do not re-query the region.

use super::zones::{describe_availability_zones, ZoneData};
use chrono;
use std::error::Error;
use std::path::Path;

/// Read the zone listing from a cache file, or fetch from EC2 if the cache
/// doesn't exist.
///
/// # Arguments
/// * `cache_file` - Optional path to a specific cache file. If None, uses
///   default day-stamped naming.
/// * `region` - Target region for the lookup
///
/// # Returns
/// * `Ok(ZoneData)` - The zone listing from cache or EC2
/// * `Err` - If a cache file was specified but doesn't exist, or the query fails
pub fn read_zone_cache(cache_file: Option<&str>, region: &str) -> Result<ZoneData, Box<dyn Error>> {
    let now = chrono::Utc::now().with_timezone(&chrono_tz::Pacific::Auckland);

    let cache_file = match cache_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Cache file does not exist: {file}").into());
            }
            log::info!("Using provided cache file: {file}");
            file.to_string()
        }
        None => format!("zone_cache_{region}_{}.json", now.format("%Y-%m-%d")),
    };

    let data = match std::fs::read_to_string(&cache_file) {
        Ok(json) => {
            log::info!("Reading from cache file: {cache_file}");
            serde_json::from_str(&json).map_err(|e| format!("Error parsing cache JSON: {e}"))?
        }
        Err(_) => {
            log::warn!("Cache file not found: {cache_file}");
            let data = describe_availability_zones(region)?;
            log::info!("Parsed zone listing received from AWS CLI");

            let json =
                serde_json::to_string(&data).map_err(|e| format!("Error serializing JSON: {e}"))?;
            log::warn!("Writing data to cache file: {cache_file}");
            std::fs::write(&cache_file, json)
                .map_err(|e| format!("Error writing cache file {cache_file}: {e}"))?;
            data
        }
    };

    Ok(data)
}
