//! Per-subnet validation against the VNet.

use super::Diagnostic;
use crate::config::subnet_color;
use crate::models::{is_valid_cidr, resolve_cidr, CidrBlock, NamedSubnet, SubnetEntry};

/// Resolve each entry and keep those that lie inside `vnet`.
///
/// Entries are checked independently; a rejected entry adds one diagnostic
/// and never affects its siblings. Survivors keep their original index and
/// the color derived from it.
pub fn resolve_subnets(
    vnet: &CidrBlock,
    entries: &[SubnetEntry],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<NamedSubnet> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let block = match resolve_entry(entry) {
                Some(block) => block,
                None => {
                    log::debug!("Subnet {} has invalid CIDR {}", entry.name, entry.cidr);
                    diagnostics.push(Diagnostic::InvalidCidr {
                        name: entry.name.clone(),
                        cidr: entry.cidr.clone(),
                    });
                    return None;
                }
            };

            if !vnet.contains(&block) {
                log::debug!("Subnet {} ({}) outside {}", entry.name, entry.cidr, vnet);
                diagnostics.push(Diagnostic::OutOfRange {
                    name: entry.name.clone(),
                    cidr: entry.cidr.clone(),
                });
                return None;
            }

            Some(NamedSubnet {
                name: entry.name.clone(),
                block,
                index,
                color: subnet_color(index),
            })
        })
        .collect()
}

fn resolve_entry(entry: &SubnetEntry) -> Option<CidrBlock> {
    if !is_valid_cidr(&entry.cidr) {
        return None;
    }
    resolve_cidr(&entry.cidr).ok()
}
