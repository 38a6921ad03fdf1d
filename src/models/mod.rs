//! Domain models for the VNet subnet layout.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`ipv4`] address codec and CIDR syntax checks
//! - [`CidrBlock`] resolved CIDR bounds
//! - [`SubnetEntry`] and [`NamedSubnet`] subnet representations
//! - [`DisplaySegment`] layout output
//! - [`Configuration`] persisted VNet configuration

mod cidr;
mod ipv4;
mod segment;
mod subnet;
mod vnet;

// Re-export public types
pub use cidr::{resolve_cidr, CidrBlock};
pub use ipv4::{
    block_size, format_address, get_cidr_mask, is_valid_cidr, parse_address, Address, MAX_LENGTH,
};
pub use segment::{DisplaySegment, SegmentKind};
pub use subnet::{NamedSubnet, SubnetEntry};
pub use vnet::Configuration;
