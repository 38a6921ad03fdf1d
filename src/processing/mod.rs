//! Subnet layout processing.
//!
//! This module contains the layout engine:
//! - [`validate`] - Resolving subnets and checking them against the VNet
//! - [`overlap`] - Detecting overlapping subnets
//! - [`gap_finder`] - Filling unallocated ranges between subnets
//! - [`layout`] - Running a full layout pass

mod diagnostic;
mod gap_finder;
mod layout;
mod overlap;
mod validate;

// Re-export public functions
pub use diagnostic::Diagnostic;
pub use gap_finder::fill_gaps;
pub use layout::{build_layout, layout_subnets, resolve_vnet, Layout};
pub use overlap::find_overlapping_subnets;
pub use validate::resolve_subnets;
