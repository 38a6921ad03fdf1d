//! Persistence of the VNet configuration.
//!
//! A single JSON file stands in for browser local storage:
//! - [`cache`] - Load-or-default, save and reset of the configuration blob

mod cache;

pub use cache::{load_config, reset_config, save_config};
