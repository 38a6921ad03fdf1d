//! Subnet data model.

use super::CidrBlock;
use serde::{Deserialize, Serialize};

/// A persisted subnet entry, exactly as the user entered it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetEntry {
    /// Name of the subnet, unique within the configuration.
    pub name: String,
    /// CIDR text of the subnet (may be invalid).
    pub cidr: String,
}

impl SubnetEntry {
    pub fn new(name: &str, cidr: &str) -> SubnetEntry {
        SubnetEntry {
            name: name.to_string(),
            cidr: cidr.to_string(),
        }
    }
}

/// A subnet entry resolved against its VNet for one layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSubnet {
    pub name: String,
    pub block: CidrBlock,
    /// Position in the configuration list before sorting.
    pub index: usize,
    pub color: &'static str,
}

impl NamedSubnet {
    pub fn cidr(&self) -> &str {
        &self.block.cidr
    }
}
