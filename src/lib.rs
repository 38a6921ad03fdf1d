//! Subnet layout of an IPv4 VNet.
//!
//! Resolves a VNet CIDR and its named subnets into an ordered, gap-filled
//! sequence of display segments plus diagnostics for invalid, out-of-range
//! and overlapping subnets.
//!
//! ```
//! use vnet_subnet_layout::{build_layout, Configuration, SubnetEntry};
//!
//! let config = Configuration::new(
//!     "10.0.0.0/24",
//!     vec![SubnetEntry::new("web", "10.0.0.0/26")],
//! );
//! let layout = build_layout(&config);
//! assert_eq!(layout.segments.len(), 2);
//! assert!(layout.diagnostics.is_empty());
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod storage;

pub use error::{CidrError, ConfigError, LayoutError, StoreError, SubnetIssue};
pub use models::{
    format_address, is_valid_cidr, parse_address, resolve_cidr, Address, CidrBlock,
    Configuration, DisplaySegment, NamedSubnet, SegmentKind, SubnetEntry,
};
pub use processing::{build_layout, layout_subnets, resolve_vnet, Diagnostic, Layout};
