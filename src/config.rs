//! Fixed settings shared across the crate.

/// Palette cycled through by subnet position in the configuration.
pub const SUBNET_COLORS: [&str; 15] = [
    "#3498db", "#2ecc71", "#e74c3c", "#f1c40f", "#9b59b6", "#1abc9c", "#e67e22", "#34495e",
    "#27ae60", "#c0392b", "#2980b9", "#8e44ad", "#16a085", "#d35400", "#7f8c8d",
];

/// Color of unallocated ranges.
pub const GAP_COLOR: &str = "#ecf0f1";

/// Display name of unallocated ranges.
pub const GAP_NAME: &str = "Unallocated";

pub const DEFAULT_VNET_CIDR: &str = "10.0.0.0/8";
pub const DEFAULT_SUBNET_NAME: &str = "default";
pub const DEFAULT_SUBNET_CIDR: &str = "10.0.0.1/24";

/// Environment variable naming the JSON config file.
pub const CONFIG_FILE_ENV: &str = "VNET_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "vnet_config.json";

/// Width of the rendered address bar in terminal cells.
pub const BAR_WIDTH: usize = 80;

/// Color for the subnet at `index` in the configuration list.
///
/// Depends only on the original position, so sorting by address never
/// changes a subnet's color.
pub fn subnet_color(index: usize) -> &'static str {
    SUBNET_COLORS[index % SUBNET_COLORS.len()]
}
