//! Base address for sequential `/24` allocation.
//!
//! A [`SubnetBase`] keeps the first three octets of a dotted-quad address;
//! the third octet is the allocatable counter. The fourth octet is discarded
//! (a warning is logged when it is nonzero).

use super::Ipv4;
use crate::error::PlanError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex?");
}

/// Dotted-quad base address for a `/24` allocation pool.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct SubnetBase {
    octets: [u8; 3],
}

impl SubnetBase {
    /// The third octet, the allocatable counter.
    pub fn third_octet(&self) -> u8 {
        self.octets[2]
    }

    /// The `/24` block at the base itself, equivalent to `nth(0)`.
    pub fn block(&self) -> Ipv4 {
        Ipv4 {
            addr: Ipv4Addr::new(self.octets[0], self.octets[1], self.octets[2], 0),
            mask: 24,
        }
    }

    /// The `/24` block with the third octet incremented by `index`.
    ///
    /// Fails when the increment passes 255; wraparound would silently hand
    /// out an address block belonging to a different network.
    pub fn nth(&self, index: usize) -> Result<Ipv4, PlanError> {
        let third = usize::from(self.octets[2])
            .checked_add(index)
            .filter(|v| *v <= usize::from(u8::MAX))
            .ok_or_else(|| {
                PlanError::invalid_config(format!(
                    "third octet overflow: base {} + index {} exceeds 255",
                    self, index
                ))
            })?;
        Ok(Ipv4 {
            addr: Ipv4Addr::new(self.octets[0], self.octets[1], third as u8, 0),
            mask: 24,
        })
    }
}

impl FromStr for SubnetBase {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let caps = DOTTED_QUAD.captures(s).ok_or_else(|| {
            PlanError::invalid_config(format!(
                "invalid base address '{s}', expected dotted-quad A.B.C.0"
            ))
        })?;

        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            *octet = caps[i + 1].parse().map_err(|_| {
                PlanError::invalid_config(format!(
                    "invalid base address '{s}': octet '{}' out of range",
                    &caps[i + 1]
                ))
            })?;
        }

        if octets[3] != 0 {
            log::warn!("base address '{s}' has nonzero fourth octet, ignoring it");
        }

        Ok(SubnetBase {
            octets: [octets[0], octets[1], octets[2]],
        })
    }
}

impl<'de> Deserialize<'de> for SubnetBase {
    fn deserialize<D>(deserializer: D) -> Result<SubnetBase, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for SubnetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}.{}.0", self.octets[0], self.octets[1], self.octets[2])
    }
}
