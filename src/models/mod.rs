//! Domain models for the subnet planner.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - [`Ipv4`] - IPv4 address block with CIDR notation support
//! - [`SubnetBase`] - dotted-quad base address for `/24` allocation
//! - [`PlannedSubnet`] and [`Tier`] - zone-bound subnet records
//! - [`SubnetPlan`] and [`ProvisionPlan`] - plan output structures

mod base;
mod ipv4;
mod plan;
mod subnet;

// Re-export public types
pub use base::SubnetBase;
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, Ipv4, MAX_LENGTH};
pub use plan::{ProvisionPlan, SubnetPlan};
pub use subnet::{PlannedSubnet, Tier};
