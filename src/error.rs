//! Error types for subnet planning.

use thiserror::Error;

/// Main error type for plan computation.
///
/// Any of these aborts the run before a plan file is written; a partial or
/// malformed plan must never reach the provisioning engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlanError {
    /// Operator-supplied configuration cannot produce a valid plan.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Availability-zone lookup failed (CLI error or unparseable response).
    #[error("zone discovery error: {0}")]
    ZoneDiscovery(String),

    /// Cache or plan file IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PlanError {
    /// Create an invalid-configuration error with the given message.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create a zone-discovery error with the given message.
    pub fn zone_discovery(msg: impl Into<String>) -> Self {
        Self::ZoneDiscovery(msg.into())
    }
}
