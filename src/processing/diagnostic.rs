//! User-facing problems found during a layout pass.

use thiserror::Error;

/// A problem with one subnet entry or a pair of entries.
///
/// Diagnostics never stop a layout pass; the offending entry is dropped
/// (invalid, out of range) or kept and reported (overlap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The VNet CIDR itself is invalid; no subnets were processed.
    #[error("Invalid VNet CIDR format: {cidr}")]
    ContainerInvalid { cidr: String },

    #[error("Subnet {name} has invalid CIDR format: {cidr}")]
    InvalidCidr { name: String, cidr: String },

    #[error("Subnet {name} ({cidr}) is outside the VNet range")]
    OutOfRange { name: String, cidr: String },

    #[error("Subnet {first_name} ({first_cidr}) overlaps with {second_name} ({second_cidr})")]
    Overlap {
        first_name: String,
        first_cidr: String,
        second_name: String,
        second_cidr: String,
    },
}
