//! Error types for address parsing, layout and configuration handling.

use itertools::Itertools;
use thiserror::Error;

/// Errors raised while parsing addresses or resolving CIDR blocks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    /// Malformed dotted-decimal address or CIDR text.
    #[error("Invalid CIDR format: {0}")]
    InvalidFormat(String),

    /// Prefix missing, non-numeric or outside 0..=32.
    #[error("Invalid CIDR prefix: {0}")]
    InvalidPrefix(String),
}

/// Fatal error for a single layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Invalid VNet CIDR format: {0}")]
    ContainerInvalid(String),
}

/// Reasons a new subnet entry is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetIssue {
    #[error("Name and CIDR are required.")]
    MissingField,

    #[error("Invalid CIDR format for new subnet.")]
    InvalidCidr,

    #[error("Subnet with name \"{0}\" already exists.")]
    DuplicateName(String),

    #[error("Subnet with CIDR \"{0}\" already exists.")]
    DuplicateCidr(String),

    #[error("New subnet {name} ({cidr}) is outside the VNet range.")]
    OutsideVnet { name: String, cidr: String },
}

/// Errors from configuration mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid CIDR format for VNet: {0}")]
    InvalidVnetCidr(String),

    #[error("{}", .0.iter().join("; "))]
    SubnetRejected(Vec<SubnetIssue>),

    #[error("Could not find subnet {name} ({cidr}) to delete")]
    SubnetNotFound { name: String, cidr: String },
}

/// Errors from the JSON configuration store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Error accessing config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing config file {path}: path={json_path} error={message}")]
    Parse {
        path: String,
        json_path: String,
        message: String,
    },

    #[error("Error serializing config: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_error_embeds_input() {
        let e = CidrError::InvalidPrefix("10.0.0.1/33".to_string());
        assert_eq!(e.to_string(), "Invalid CIDR prefix: 10.0.0.1/33");
    }

    #[test]
    fn test_rejected_joins_issues() {
        let e = ConfigError::SubnetRejected(vec![
            SubnetIssue::MissingField,
            SubnetIssue::DuplicateName("web".to_string()),
        ]);
        assert_eq!(
            e.to_string(),
            "Name and CIDR are required.; Subnet with name \"web\" already exists."
        );
    }
}
