//! Output formatting for subnet layouts.
//!
//! This module renders a [`crate::processing::Layout`] for the terminal:
//! - [`bar`] - Proportional address bar and legend
//! - [`table`] - VNet summary, subnet table and diagnostics
//! - [`terminal`] - Number and color helpers

mod bar;
mod table;
mod terminal;

pub use bar::{bar_cells, render_bar, render_legend};
pub use table::{print_layout, render_diagnostics, render_table, render_vnet_info};
pub use terminal::{group_thousands, hex_to_rgb, paint};
