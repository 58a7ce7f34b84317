//! Main entry point for coffee-env

use clap::Parser;
use coffee_shop_cli::cli::Args;
use coffee_shop_env::logging;
use color_eyre::eyre::{eyre, Result};

fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    // Initialize logging here in the binary context where CARGO_BIN_NAME is available
    let binary_name = env!("CARGO_BIN_NAME").replace('-', "_");
    let default_filter = format!("{binary_name}=warn,coffee_shop_env=warn");
    logging::init_cli_logging(&args.verbosity, &default_filter, args.log_format())
        .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

    let mut stdout = std::io::stdout().lock();
    Ok(args.run(&mut stdout)?)
}
