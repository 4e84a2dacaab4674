//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] struct for representing an address block as a
//! network address plus prefix length, with the range operations the
//! planner needs (network/broadcast address, containment, overlap).

use crate::error::PlanError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
pub fn get_cidr_mask(len: u8) -> Result<u32, PlanError> {
    if len > MAX_LENGTH {
        Err(PlanError::invalid_config(format!(
            "prefix length /{len} is longer than /{MAX_LENGTH}"
        )))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, PlanError> {
    if len > MAX_LENGTH {
        Err(PlanError::invalid_config(format!(
            "prefix length /{len} is longer than /{MAX_LENGTH}"
        )))
    } else {
        let right_len = MAX_LENGTH - len;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, PlanError> {
    let mask = get_cidr_mask(len)?;
    let addr_bits = u32::from(addr);
    let network_bits = addr_bits & mask;
    let broadcast_bits = network_bits | (!mask);
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// IPv4 address block in CIDR notation.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(de::Error::custom(format!("invalid CIDR format: {}", s)));
        }

        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| de::Error::custom(format!("invalid IP address: {}", parts[0])))?;
        let mask = u8::from_str(parts[1])
            .map_err(|_| de::Error::custom(format!("invalid prefix length: {}", parts[1])))?;

        Ok(Ipv4 { addr, mask })
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, PlanError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(PlanError::invalid_config(format!(
                "invalid CIDR block '{addr_cidr}', expected address/prefix"
            )));
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| PlanError::invalid_config(format!("invalid IP address '{}'", parts[0])))?;
        let mask: u8 = parts[1]
            .parse()
            .map_err(|_| PlanError::invalid_config(format!("invalid prefix length '{}'", parts[1])))?;
        if mask > MAX_LENGTH {
            return Err(PlanError::invalid_config(format!(
                "prefix length /{mask} is longer than /{MAX_LENGTH}"
            )));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address: {}", e))
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating minimum address for {}: {}", self, e))
    }

    /// Check if an IP address is contained within this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    /// Check if another block shares any address with this block.
    pub fn overlaps(&self, other: &Ipv4) -> bool {
        self.lo() <= other.hi() && other.lo() <= self.hi()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert!(broadcast_addr(Ipv4Addr::new(255, 255, 255, 255), 24).is_ok());
    }

    #[test]
    fn test_new_rejects_malformed() {
        assert!(Ipv4::new("10.0.0.0").is_err());
        assert!(Ipv4::new("10.0.0/24").is_err());
        assert!(Ipv4::new("10.0.0.0/33").is_err());
        assert!(Ipv4::new("10.0.0.0/24").is_ok());
    }

    #[test]
    fn test_contains() {
        let block = Ipv4::new("10.0.5.0/24").unwrap();
        assert!(block.contains(Ipv4Addr::new(10, 0, 5, 0)));
        assert!(block.contains(Ipv4Addr::new(10, 0, 5, 255)));
        assert!(!block.contains(Ipv4Addr::new(10, 0, 6, 0)));
        assert!(!block.contains(Ipv4Addr::new(10, 0, 4, 255)));
    }

    #[test]
    fn test_overlaps() {
        let a = Ipv4::new("10.0.0.0/24").unwrap();
        let b = Ipv4::new("10.0.1.0/24").unwrap();
        let c = Ipv4::new("10.0.0.0/16").unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_ip4_cmp() {
        let ip1 = Ipv4::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4::new("10.0.0.2/24").unwrap();
        let ip3 = Ipv4::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 > ip1);
        assert!(ip2 >= ip3);
    }

    #[test]
    fn test_serde_round_trip() {
        let block = Ipv4::new("172.16.3.0/24").unwrap();
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, "\"172.16.3.0/24\"");
        let back: Ipv4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
