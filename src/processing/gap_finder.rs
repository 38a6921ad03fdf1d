//! Gap finding between subnets.
//!
//! Walks the sorted subnets across the VNet and fills every unused stretch
//! with an `Unallocated` segment.

use crate::models::{Address, CidrBlock, DisplaySegment, NamedSubnet};

/// Interleave `sorted` subnets with gap segments spanning the whole `vnet`.
///
/// `sorted` must be ordered by network address and lie inside `vnet`.
///
/// Unlike a plain walk that resets the cursor to `broadcast + 1` after every
/// subnet, the cursor here only moves forward. The two agree unless a subnet
/// is nested inside an earlier one; then the plain walk would step back and
/// emit a gap over addresses the outer subnet already covers, while this walk
/// emits none.
pub fn fill_gaps(vnet: &CidrBlock, sorted: Vec<NamedSubnet>) -> Vec<DisplaySegment> {
    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    // u64 so the cursor can step past 255.255.255.255
    let mut next_ip = u64::from(vnet.network_address);

    for subnet in sorted {
        let start = u64::from(subnet.block.network_address);
        if start > next_ip {
            segments.push(DisplaySegment::gap(
                next_ip as Address,
                subnet.block.network_address - 1,
            ));
        }
        next_ip = next_ip.max(u64::from(subnet.block.broadcast_address) + 1);
        segments.push(DisplaySegment::subnet(subnet));
    }

    if next_ip <= u64::from(vnet.broadcast_address) {
        segments.push(DisplaySegment::gap(next_ip as Address, vnet.broadcast_address));
    }

    segments.retain(|s| s.num_addresses > 0);
    log::debug!("fill_gaps({vnet}) => {} segments", segments.len());
    segments
}
