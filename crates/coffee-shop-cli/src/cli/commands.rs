use clap::Subcommand;
use coffee_shop_env::loader::ConfigFormat;
use coffee_shop_env::Environment;
use std::path::PathBuf;

/// Main CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print an environment
    Show {
        /// Variant to print instead of the bundled one
        #[arg(short, long, conflicts_with = "file")]
        env: Option<Environment>,

        /// Deployment file to print instead of a bundled variant
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format (toml or json)
        #[arg(long, default_value = "toml")]
        format: ConfigFormat,
    },

    /// Print the Auth0 authorize URL of an environment
    AuthorizeUrl {
        /// Variant to use instead of the bundled one
        #[arg(short, long)]
        env: Option<Environment>,

        /// State parameter; a random one is generated when omitted
        #[arg(long)]
        state: Option<String>,
    },

    /// Check a deployment file against the field invariants
    Check {
        /// Path to a .toml or .json deployment file
        path: PathBuf,
    },
}
