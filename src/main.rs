use clap::Parser;
use std::error::Error;
use vnet_subnet_layout::app::{run, Cli};
use vnet_subnet_layout::config::BAR_WIDTH;
use vnet_subnet_layout::output::print_layout;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default())
        .map_err(|e| format!("Error initializing log4rs: {e}"))?;
    // before parsing so VNET_CONFIG_FILE can come from .env
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let cli = Cli::parse();
    let layout = run(&cli.action(), &cli.config_file)?;

    print_layout(&layout, BAR_WIDTH);

    Ok(())
}
