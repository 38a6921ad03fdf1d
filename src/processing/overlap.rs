//! Overlapping subnet detection.
//!
//! Overlaps are reported, never resolved: both subnets stay in the layout.

use super::Diagnostic;
use crate::models::NamedSubnet;
use itertools::Itertools;

/// Report every adjacent pair in `sorted` whose ranges touch.
///
/// `sorted` must be ordered by network address.
pub fn find_overlapping_subnets(sorted: &[NamedSubnet]) -> Vec<Diagnostic> {
    sorted
        .iter()
        .tuple_windows()
        .filter(|(prev, next)| prev.block.broadcast_address >= next.block.network_address)
        .map(|(prev, next)| Diagnostic::Overlap {
            first_name: prev.name.clone(),
            first_cidr: prev.cidr().to_string(),
            second_name: next.name.clone(),
            second_cidr: next.cidr().to_string(),
        })
        .collect()
}
