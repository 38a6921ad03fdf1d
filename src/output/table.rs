//! Tabular output of a layout: VNet summary, subnet table, diagnostics.

use super::terminal::{group_thousands, paint};
use crate::processing::Layout;
use colored::Colorize;

/// VNet CIDR, address range and total address count.
pub fn render_vnet_info(layout: &Layout) -> String {
    match &layout.vnet {
        Some(vnet) => format!(
            "VNet CIDR: {}\nIP Range: {}\nTotal IPs: {}",
            vnet.cidr,
            vnet.range(),
            group_thousands(vnet.num_addresses)
        ),
        None => "VNet CIDR: -".to_string(),
    }
}

/// One row per subnet in address order.
///
/// Columns: name, CIDR, range, address count, share of the VNet.
pub fn render_table(layout: &Layout) -> String {
    let mut lines = vec![format!(
        "{:<20} {:<18} {:<33} {:>15} {:>9}",
        "Name", "CIDR", "IP Range", "IPs", "% of VNet"
    )];

    for subnet in layout.subnets() {
        let (range, count, share) = match layout.share_of_vnet(subnet.block.num_addresses) {
            Some(share) => (
                subnet.block.range(),
                group_thousands(subnet.block.num_addresses),
                format!("{share:.2}%"),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };
        lines.push(format!(
            "{} {:<18} {:<33} {:>15} {:>9}",
            paint(&format!("{:<20}", subnet.name), subnet.color),
            subnet.cidr(),
            range,
            count,
            share
        ));
    }

    lines.join("\n")
}

/// Diagnostics, one per line, or an empty string when there are none.
pub fn render_diagnostics(layout: &Layout) -> String {
    layout
        .diagnostics
        .iter()
        .map(|d| format!("{} {d}", "Error:".red()))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Print the full report for `layout` to stdout.
pub fn print_layout(layout: &Layout, bar_width: usize) {
    log::debug!("print_layout() {} segments", layout.segments.len());
    println!("{}", render_vnet_info(layout));
    println!();
    println!("{}", super::render_bar(layout, bar_width));
    println!("{}", super::render_legend(layout));
    println!();
    println!("{}", render_table(layout));

    let diagnostics = render_diagnostics(layout);
    if !diagnostics.is_empty() {
        println!();
        println!("{diagnostics}");
    }
}
