//! Resolved CIDR blocks.

use super::ipv4::{block_size, format_address, get_cidr_mask, parse_address, Address, MAX_LENGTH};
use crate::error::CidrError;
use std::fmt;

/// A CIDR block with its integer bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CidrBlock {
    /// The CIDR text as supplied.
    pub cidr: String,
    /// Prefix length (0-32).
    pub prefix: u8,
    /// First address of the block.
    pub network_address: Address,
    /// Last address of the block.
    pub broadcast_address: Address,
    /// Address count, up to 2^32 for `/0`.
    pub num_addresses: u64,
}

/// Resolve CIDR text into its network and broadcast bounds.
///
/// An address with host bits set is accepted and the bits are cleared, so
/// `10.0.0.50/24` resolves to `10.0.0.0 - 10.0.0.255`.
pub fn resolve_cidr(text: &str) -> Result<CidrBlock, CidrError> {
    let (addr_part, prefix_part) = text
        .split_once('/')
        .ok_or_else(|| CidrError::InvalidPrefix(text.to_string()))?;

    let prefix = prefix_part
        .parse::<i32>()
        .ok()
        .filter(|p| (0..=MAX_LENGTH as i32).contains(p))
        .ok_or_else(|| CidrError::InvalidPrefix(text.to_string()))? as u8;

    let addr =
        parse_address(addr_part).map_err(|_| CidrError::InvalidFormat(text.to_string()))?;

    let mask = get_cidr_mask(prefix)?;
    let network_address = addr & mask;
    let broadcast_address = network_address | !mask;

    log::trace!(
        "resolve_cidr({text}) => {} - {}",
        format_address(network_address),
        format_address(broadcast_address)
    );

    Ok(CidrBlock {
        cidr: text.to_string(),
        prefix,
        network_address,
        broadcast_address,
        num_addresses: block_size(prefix)?,
    })
}

impl CidrBlock {
    /// Dotted-decimal network address.
    pub fn network(&self) -> String {
        format_address(self.network_address)
    }

    /// Dotted-decimal broadcast address.
    pub fn broadcast(&self) -> String {
        format_address(self.broadcast_address)
    }

    /// True when `other` lies entirely inside this block.
    pub fn contains(&self, other: &CidrBlock) -> bool {
        other.network_address >= self.network_address
            && other.broadcast_address <= self.broadcast_address
    }

    /// True when the two blocks share at least one address.
    pub fn overlaps(&self, other: &CidrBlock) -> bool {
        self.network_address <= other.broadcast_address
            && other.network_address <= self.broadcast_address
    }

    /// Address range as `first - last`.
    pub fn range(&self) -> String {
        format!("{} - {}", self.network(), self.broadcast())
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cidr)
    }
}
