//! IPv4 address codec and CIDR syntax utilities.
//!
//! Addresses are handled as plain `u32` values; dotted decimal is only the
//! presentation format.

use crate::error::CidrError;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// One IPv4 address.
pub type Address = u32;

static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_address_regex() -> &'static Regex {
    ADDRESS_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex")
    })
}

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}/([0-9]{1,2})$").expect("Invalid Regex")
    })
}

/// Parse a dotted-decimal address into its integer value.
///
/// Accepts exactly four groups of one to three ASCII digits, each at most 255.
///
/// # Examples
/// ```
/// use vnet_subnet_layout::models::parse_address;
/// assert_eq!(parse_address("10.0.0.1").unwrap(), 167772161);
/// assert!(parse_address(" 10.0.0.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Address, CidrError> {
    let caps = get_address_regex()
        .captures(text)
        .ok_or_else(|| CidrError::InvalidFormat(text.to_string()))?;

    let mut addr: Address = 0;
    for group in caps.iter().skip(1).flatten() {
        let octet: u8 = group
            .as_str()
            .parse()
            .map_err(|_| CidrError::InvalidFormat(text.to_string()))?;
        addr = (addr << 8) | Address::from(octet);
    }
    Ok(addr)
}

/// Render an address as four dot-separated octets, most significant first.
pub fn format_address(addr: Address) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Check `<address>/<prefix>` syntax with octets in 0..=255 and prefix in 0..=32.
///
/// Host bits set relative to the prefix are allowed: `10.0.0.50/24` is valid.
pub fn is_valid_cidr(text: &str) -> bool {
    let Some(caps) = get_cidr_regex().captures(text) else {
        return false;
    };
    let prefix_ok = caps[1].parse::<u8>().is_ok_and(|p| p <= MAX_LENGTH);
    let addr_ok = text
        .split_once('/')
        .is_some_and(|(addr, _)| parse_address(addr).is_ok());
    prefix_ok && addr_ok
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vnet_subnet_layout::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::InvalidPrefix(format!("/{len}")))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Number of addresses in a block of the given prefix length, `/0` included.
pub fn block_size(len: u8) -> Result<u64, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::InvalidPrefix(format!("/{len}")))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}
