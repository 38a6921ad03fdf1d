//! Subnet layout of a VNet.
//!
//! The VNet and the subnets fail differently: an invalid VNet aborts the pass
//! ([`resolve_vnet`] returns an error), while subnet problems are collected as
//! [`Diagnostic`]s and the pass carries on.

use super::gap_finder::fill_gaps;
use super::overlap::find_overlapping_subnets;
use super::validate::resolve_subnets;
use super::Diagnostic;
use crate::config::{GAP_COLOR, GAP_NAME};
use crate::error::LayoutError;
use crate::models::{
    is_valid_cidr, resolve_cidr, CidrBlock, Configuration, DisplaySegment, NamedSubnet,
    SegmentKind, SubnetEntry,
};

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// The resolved VNet, `None` when its CIDR was invalid.
    pub vnet: Option<CidrBlock>,
    /// Segments in address order, covering the VNet.
    pub segments: Vec<DisplaySegment>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve the VNet CIDR.
pub fn resolve_vnet(cidr: &str) -> Result<CidrBlock, LayoutError> {
    if !is_valid_cidr(cidr) {
        return Err(LayoutError::ContainerInvalid(cidr.to_string()));
    }
    resolve_cidr(cidr).map_err(|_| LayoutError::ContainerInvalid(cidr.to_string()))
}

/// Validate, sort and gap-fill `entries` inside `vnet`.
///
/// Returns the segments and the diagnostics in the order they were found:
/// per-entry problems in configuration order, then overlaps in address order.
pub fn layout_subnets(
    vnet: &CidrBlock,
    entries: &[SubnetEntry],
) -> (Vec<DisplaySegment>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let mut subnets = resolve_subnets(vnet, entries, &mut diagnostics);

    // Stable, so equal network addresses keep configuration order
    subnets.sort_by_key(|s| s.block.network_address);

    diagnostics.extend(find_overlapping_subnets(&subnets));

    let segments = fill_gaps(vnet, subnets);
    (segments, diagnostics)
}

/// Lay out a whole configuration. Never fails.
///
/// With an invalid VNet the layout has no VNet, no segments and a single
/// [`Diagnostic::ContainerInvalid`].
pub fn build_layout(config: &Configuration) -> Layout {
    log::info!(
        "#Start build_layout() vnet={} subnets={}",
        config.vnet_cidr,
        config.subnets.len()
    );

    let vnet = match resolve_vnet(&config.vnet_cidr) {
        Ok(vnet) => vnet,
        Err(e) => {
            log::warn!("{e}");
            return Layout {
                vnet: None,
                segments: Vec::new(),
                diagnostics: vec![Diagnostic::ContainerInvalid {
                    cidr: config.vnet_cidr.clone(),
                }],
            };
        }
    };

    let (segments, diagnostics) = layout_subnets(&vnet, &config.subnets);
    for diagnostic in &diagnostics {
        log::warn!("{diagnostic}");
    }
    log::info!(
        "Layout of {vnet}: {} segments, {} diagnostics",
        segments.len(),
        diagnostics.len()
    );

    Layout {
        vnet: Some(vnet),
        segments,
        diagnostics,
    }
}

impl Layout {
    /// Subnets that made it into the layout, in address order.
    pub fn subnets(&self) -> impl Iterator<Item = &NamedSubnet> {
        self.segments.iter().filter_map(|s| match &s.kind {
            SegmentKind::Subnet(subnet) => Some(subnet),
            SegmentKind::Gap => None,
        })
    }

    pub fn has_gaps(&self) -> bool {
        self.segments.iter().any(|s| s.is_gap() && s.num_addresses > 0)
    }

    /// Legend entries: first color seen per subnet name, then `Unallocated`
    /// when the layout has any gap.
    pub fn legend(&self) -> Vec<(&str, &'static str)> {
        let mut items: Vec<(&str, &'static str)> = Vec::new();
        for subnet in self.subnets() {
            if !items.iter().any(|(name, _)| *name == subnet.name) {
                items.push((subnet.name.as_str(), subnet.color));
            }
        }
        if self.has_gaps() {
            items.push((GAP_NAME, GAP_COLOR));
        }
        items
    }

    /// Percentage of the VNet taken by `num_addresses`, `None` without a VNet.
    pub fn share_of_vnet(&self, num_addresses: u64) -> Option<f64> {
        self.vnet
            .as_ref()
            .map(|vnet| num_addresses as f64 / vnet.num_addresses as f64 * 100.0)
    }
}
