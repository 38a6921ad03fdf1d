//! Display segments produced by the layout engine.

use super::ipv4::{format_address, Address};
use super::NamedSubnet;
use crate::config::{GAP_COLOR, GAP_NAME};

/// What a segment stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    Subnet(NamedSubnet),
    Gap,
}

/// One contiguous stretch of the VNet address space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySegment {
    pub kind: SegmentKind,
    pub start_address: Address,
    pub end_address: Address,
    pub num_addresses: u64,
    pub color: &'static str,
}

impl DisplaySegment {
    pub fn subnet(subnet: NamedSubnet) -> DisplaySegment {
        DisplaySegment {
            start_address: subnet.block.network_address,
            end_address: subnet.block.broadcast_address,
            num_addresses: subnet.block.num_addresses,
            color: subnet.color,
            kind: SegmentKind::Subnet(subnet),
        }
    }

    /// Unallocated range `start..=end`. Caller guarantees `start <= end`.
    pub fn gap(start: Address, end: Address) -> DisplaySegment {
        DisplaySegment {
            kind: SegmentKind::Gap,
            start_address: start,
            end_address: end,
            num_addresses: u64::from(end - start) + 1,
            color: GAP_COLOR,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self.kind, SegmentKind::Gap)
    }

    pub fn name(&self) -> &str {
        match &self.kind {
            SegmentKind::Subnet(s) => &s.name,
            SegmentKind::Gap => GAP_NAME,
        }
    }

    /// CIDR for subnets, `first - last` for gaps.
    pub fn label(&self) -> String {
        match &self.kind {
            SegmentKind::Subnet(s) => s.cidr().to_string(),
            SegmentKind::Gap => self.range(),
        }
    }

    pub fn range(&self) -> String {
        format!(
            "{} - {}",
            format_address(self.start_address),
            format_address(self.end_address)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resolve_cidr;

    #[test]
    fn test_gap_segment() {
        let gap = DisplaySegment::gap(167772224, 167772287);
        assert!(gap.is_gap());
        assert_eq!(gap.name(), "Unallocated");
        assert_eq!(gap.num_addresses, 64);
        assert_eq!(gap.color, "#ecf0f1");
        assert_eq!(gap.label(), "10.0.0.64 - 10.0.0.127");
    }

    #[test]
    fn test_full_range_gap_does_not_overflow() {
        let gap = DisplaySegment::gap(0, u32::MAX);
        assert_eq!(gap.num_addresses, 4294967296);
    }

    #[test]
    fn test_subnet_segment() {
        let seg = DisplaySegment::subnet(NamedSubnet {
            name: "web".to_string(),
            block: resolve_cidr("10.0.0.0/26").unwrap(),
            index: 2,
            color: "#e74c3c",
        });
        assert!(!seg.is_gap());
        assert_eq!(seg.name(), "web");
        assert_eq!(seg.label(), "10.0.0.0/26");
        assert_eq!(seg.range(), "10.0.0.0 - 10.0.0.63");
        assert_eq!(seg.num_addresses, 64);
    }
}
