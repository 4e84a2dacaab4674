//! AWS CLI interaction.
//!
//! This module handles all AWS-facing operations:
//! - [`cli`] - Command execution for the AWS CLI
//! - [`zones`] - Availability-zone discovery
//! - [`cache`] - Caching of zone listings

mod cache;
mod cli;
mod zones;

// Re-export public types and functions
pub use cache::read_zone_cache;
pub use cli::run;
pub use zones::{describe_availability_zones, Zone, ZoneData};
