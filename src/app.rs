//! Actions of the command-line front end.
//!
//! Every successful mutation is saved before the layout is rendered again.

use crate::config::{CONFIG_FILE_ENV, DEFAULT_CONFIG_FILE};
use crate::models::Configuration;
use crate::processing::{build_layout, Layout};
use crate::storage::{load_config, reset_config, save_config};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "vnet-subnet-layout")]
#[command(about = "Show how a VNet is split into subnets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub action: Option<Action>,

    /// JSON file holding the VNet configuration
    #[arg(long, global = true, env = CONFIG_FILE_ENV, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,
}

impl Cli {
    /// The requested action, `show` when none was given.
    pub fn action(&self) -> Action {
        self.action.clone().unwrap_or(Action::Show)
    }
}

/// What the user asked for.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the current layout
    Show,

    /// Add a subnet
    Add {
        /// Subnet name, unique in the VNet
        #[arg(short, long)]
        name: String,

        /// Subnet CIDR, e.g. 10.0.1.0/24
        #[arg(short, long)]
        cidr: String,
    },

    /// Delete the subnet matching both name and CIDR
    Delete {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        cidr: String,
    },

    /// Replace the VNet CIDR
    SetVnet {
        /// VNet CIDR, e.g. 10.0.0.0/16
        #[arg(short, long)]
        cidr: String,
    },

    /// Drop the stored configuration and go back to the default
    Reset,
}

/// Apply `action` to the configuration stored at `path` and lay it out.
pub fn run(action: &Action, path: &str) -> Result<Layout, Box<dyn Error>> {
    log::info!("#Start run({action:?}) config={path}");

    let config = match action {
        Action::Show => load_config(path)?,
        Action::Reset => reset_config(path)?,
        Action::Add { name, cidr } => {
            let mut config = load_config(path)?;
            config.add_subnet(name, cidr)?;
            save(path, config)?
        }
        Action::Delete { name, cidr } => {
            let mut config = load_config(path)?;
            config.remove_subnet(name, cidr)?;
            save(path, config)?
        }
        Action::SetVnet { cidr } => {
            let mut config = load_config(path)?;
            config.set_vnet_cidr(cidr)?;
            save(path, config)?
        }
    };

    Ok(build_layout(&config))
}

fn save(path: &str, config: Configuration) -> Result<Configuration, Box<dyn Error>> {
    save_config(path, &config)?;
    Ok(config)
}
