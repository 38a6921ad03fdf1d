//! Proportional address bar and legend.

use super::terminal::paint;
use crate::models::DisplaySegment;
use crate::processing::Layout;

/// Number of terminal cells each segment gets in a bar of `width` cells.
///
/// Cells follow cumulative address counts, so rounding never drifts and the
/// cells add up to `width` when the segments cover the VNet exactly. Small
/// segments may get zero cells. Empty without a VNet.
pub fn bar_cells(layout: &Layout, width: usize) -> Vec<(&DisplaySegment, usize)> {
    let Some(vnet) = &layout.vnet else {
        return Vec::new();
    };
    let total = u128::from(vnet.num_addresses);

    let mut covered: u128 = 0;
    let mut drawn = 0usize;
    layout
        .segments
        .iter()
        .map(|segment| {
            covered += u128::from(segment.num_addresses);
            let boundary = ((covered * width as u128) / total).min(width as u128) as usize;
            let cells = boundary.saturating_sub(drawn);
            drawn = drawn.max(boundary);
            (segment, cells)
        })
        .collect()
}

/// Render the bar as colored block characters.
pub fn render_bar(layout: &Layout, width: usize) -> String {
    bar_cells(layout, width)
        .into_iter()
        .filter(|(_, cells)| *cells > 0)
        .map(|(segment, cells)| {
            let fill = if segment.is_gap() { "░" } else { "█" };
            paint(&fill.repeat(cells), segment.color).to_string()
        })
        .collect()
}

/// Render one legend line: a colored box and the name per entry.
pub fn render_legend(layout: &Layout) -> String {
    layout
        .legend()
        .into_iter()
        .map(|(name, color)| format!("{} {name}", paint("■", color)))
        .collect::<Vec<String>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Configuration, SubnetEntry};
    use crate::processing::build_layout;

    fn layout(vnet: &str, subnets: &[(&str, &str)]) -> Layout {
        build_layout(&Configuration::new(
            vnet,
            subnets.iter().map(|(n, c)| SubnetEntry::new(n, c)).collect(),
        ))
    }

    #[test]
    fn test_bar_cells_proportional() {
        let layout = layout("10.0.0.0/24", &[("A", "10.0.0.0/26"), ("B", "10.0.0.128/26")]);
        let cells: Vec<usize> = bar_cells(&layout, 40).into_iter().map(|(_, c)| c).collect();
        assert_eq!(cells, vec![10, 10, 10, 10]);
    }

    #[test]
    fn test_bar_cells_sum_to_width() {
        let layout = layout(
            "10.0.0.0/8",
            &[("tiny", "10.0.0.0/30"), ("mid", "10.64.0.0/12"), ("x", "10.200.0.0/24")],
        );
        let cells = bar_cells(&layout, 80);
        assert_eq!(cells.iter().map(|(_, c)| c).sum::<usize>(), 80);
        assert_eq!(cells[0].1, 0, "a /30 in a /8 is below one cell");
    }

    #[test]
    fn test_bar_without_vnet() {
        let layout = layout("bogus", &[("A", "10.0.0.0/26")]);
        assert!(bar_cells(&layout, 80).is_empty());
        assert_eq!(render_bar(&layout, 80), "");
    }

    #[test]
    fn test_render_bar_and_legend_plain() {
        colored::control::set_override(false);
        let layout = layout("10.0.0.0/24", &[("A", "10.0.0.0/25")]);
        assert_eq!(render_bar(&layout, 8), "████░░░░");
        assert_eq!(render_legend(&layout), "■ A  ■ Unallocated");
    }
}
