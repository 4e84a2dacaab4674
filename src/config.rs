//! Planner configuration.
//!
//! All inputs are read once, up front, into an immutable [`PlannerConfig`];
//! plan computation never touches the environment afterwards. Values come
//! from `PLANNER_*` environment variables (a `.env` file is loaded by main
//! before this runs).

use crate::error::PlanError;
use crate::models::{Ipv4, SubnetBase};
use std::collections::HashMap;

/// Subnet count used when `PLANNER_SUBNET_COUNT` is unset.
pub const DEFAULT_SUBNET_COUNT: usize = 3;

/// Stack name used when `PLANNER_STACK_NAME` is unset.
pub const DEFAULT_STACK_NAME: &str = "dev";

/// Immutable configuration for one planning run.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Target region, e.g. `us-west-2`.
    pub region: String,
    /// Address space of the VPC that will contain both pools.
    pub vpc_cidr: Ipv4,
    /// Operator-desired subnets per pool; clamped to zone capacity later.
    pub subnet_count: usize,
    /// Base address of the public pool.
    pub public_subnet_base: SubnetBase,
    /// Base address of the private pool.
    pub private_subnet_base: SubnetBase,
    /// Stack name used in resource names.
    pub stack_name: String,
}

impl PlannerConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, PlanError> {
        Self::from_vars(std::env::vars())
    }

    /// Build the configuration from an explicit key-value set.
    pub fn from_vars<I>(vars: I) -> Result<Self, PlanError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars.into_iter().collect();

        let region = require(&vars, "PLANNER_REGION")?;
        let vpc_cidr = Ipv4::new(&require(&vars, "PLANNER_VPC_CIDR")?)?;
        let public_subnet_base = require(&vars, "PLANNER_PUBLIC_SUBNET_BASE")?.parse()?;
        let private_subnet_base = require(&vars, "PLANNER_PRIVATE_SUBNET_BASE")?.parse()?;

        let subnet_count = match vars.get("PLANNER_SUBNET_COUNT") {
            Some(raw) => raw.parse::<usize>().map_err(|_| {
                PlanError::invalid_config(format!(
                    "PLANNER_SUBNET_COUNT '{raw}' is not a positive integer"
                ))
            })?,
            None => DEFAULT_SUBNET_COUNT,
        };
        if subnet_count == 0 {
            return Err(PlanError::invalid_config(
                "PLANNER_SUBNET_COUNT must be at least 1",
            ));
        }

        let stack_name = vars
            .get("PLANNER_STACK_NAME")
            .cloned()
            .unwrap_or_else(|| DEFAULT_STACK_NAME.to_string());

        Ok(PlannerConfig {
            region,
            vpc_cidr,
            subnet_count,
            public_subnet_base,
            private_subnet_base,
            stack_name,
        })
    }

    /// VPC resource name derived from the stack name.
    pub fn vpc_name(&self) -> String {
        format!("vpc-{}", self.stack_name)
    }
}

fn require(vars: &HashMap<String, String>, key: &str) -> Result<String, PlanError> {
    vars.get(key)
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .ok_or_else(|| PlanError::invalid_config(format!("missing required config key {key}")))
}
