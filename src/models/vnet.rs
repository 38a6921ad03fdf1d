//! VNet configuration: the container CIDR and its ordered subnet list.

use super::{is_valid_cidr, resolve_cidr, SubnetEntry};
use crate::config::{DEFAULT_SUBNET_CIDR, DEFAULT_SUBNET_NAME, DEFAULT_VNET_CIDR};
use crate::error::{ConfigError, SubnetIssue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The only persisted state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// CIDR of the VNet (may be invalid).
    pub vnet_cidr: String,
    /// Subnets in insertion order.
    #[serde(default)]
    pub subnets: Vec<SubnetEntry>,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            vnet_cidr: DEFAULT_VNET_CIDR.to_string(),
            subnets: vec![SubnetEntry::new(DEFAULT_SUBNET_NAME, DEFAULT_SUBNET_CIDR)],
        }
    }
}

impl Configuration {
    pub fn new(vnet_cidr: &str, subnets: Vec<SubnetEntry>) -> Configuration {
        Configuration {
            vnet_cidr: vnet_cidr.to_string(),
            subnets,
        }
    }

    /// Replace the VNet CIDR. The new value must be valid CIDR syntax.
    pub fn set_vnet_cidr(&mut self, cidr: &str) -> Result<(), ConfigError> {
        if !is_valid_cidr(cidr) {
            return Err(ConfigError::InvalidVnetCidr(cidr.to_string()));
        }
        log::info!("VNet CIDR {} -> {}", self.vnet_cidr, cidr);
        self.vnet_cidr = cidr.to_string();
        Ok(())
    }

    /// Every reason the entry `name`/`cidr` could not be added, after trimming.
    ///
    /// The VNet range check only runs when both the VNet and the new CIDR are
    /// valid.
    pub fn check_new_subnet(&self, name: &str, cidr: &str) -> Vec<SubnetIssue> {
        let name = name.trim();
        let cidr = cidr.trim();
        let mut issues = Vec::new();

        if name.is_empty() || cidr.is_empty() {
            issues.push(SubnetIssue::MissingField);
        }
        if !cidr.is_empty() && !is_valid_cidr(cidr) {
            issues.push(SubnetIssue::InvalidCidr);
        }
        if !name.is_empty() && self.subnets.iter().any(|s| s.name == name) {
            issues.push(SubnetIssue::DuplicateName(name.to_string()));
        }
        if !cidr.is_empty() && self.subnets.iter().any(|s| s.cidr == cidr) {
            issues.push(SubnetIssue::DuplicateCidr(cidr.to_string()));
        }

        if is_valid_cidr(cidr) && is_valid_cidr(&self.vnet_cidr) {
            if let (Ok(vnet), Ok(block)) = (resolve_cidr(&self.vnet_cidr), resolve_cidr(cidr)) {
                if !vnet.contains(&block) {
                    issues.push(SubnetIssue::OutsideVnet {
                        name: name.to_string(),
                        cidr: cidr.to_string(),
                    });
                }
            }
        }

        issues
    }

    /// Append a subnet if it passes [`Configuration::check_new_subnet`].
    pub fn add_subnet(&mut self, name: &str, cidr: &str) -> Result<(), ConfigError> {
        let issues = self.check_new_subnet(name, cidr);
        if !issues.is_empty() {
            log::warn!("Rejected subnet {name} ({cidr}): {} issue(s)", issues.len());
            return Err(ConfigError::SubnetRejected(issues));
        }
        self.subnets.push(SubnetEntry::new(name.trim(), cidr.trim()));
        log::info!("Added subnet {} ({})", name.trim(), cidr.trim());
        Ok(())
    }

    /// Remove the first entry matching both `name` and `cidr`.
    pub fn remove_subnet(&mut self, name: &str, cidr: &str) -> Result<SubnetEntry, ConfigError> {
        let index = self
            .subnets
            .iter()
            .position(|s| s.name == name && s.cidr == cidr)
            .ok_or_else(|| ConfigError::SubnetNotFound {
                name: name.to_string(),
                cidr: cidr.to_string(),
            })?;
        log::info!("Removed subnet {name} ({cidr})");
        Ok(self.subnets.remove(index))
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VNet {} ({} subnets):", self.vnet_cidr, self.subnets.len())?;
        for subnet in &self.subnets {
            writeln!(f, "  - {} {}", subnet.name, subnet.cidr)?;
        }
        Ok(())
    }
}
