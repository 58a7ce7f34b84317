use crate::cli::{commands::Commands, handlers};
use crate::error::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use coffee_shop_env::logging::LogFormat;
use std::io::Write;

/// coffee-env - Coffee Shop deployment environments
#[derive(Parser, Debug)]
#[command(
    name = "coffee-env",
    version,
    about = "Inspect and check Coffee Shop deployment environments",
    long_about = "Inspect and check Coffee Shop deployment environments.

EXAMPLES:
  coffee-env show                       # Bundled environment as TOML
  coffee-env show --env production --format json
  coffee-env authorize-url              # Auth0 login redirect
  coffee-env check deploy/prod.toml     # Validate a deployment file"
)]
pub struct Args {
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Layout selected for log lines
    pub fn log_format(&self) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }

    /// Execute the CLI command, writing results to `out`
    pub fn run(self, out: &mut impl Write) -> Result<()> {
        match self.command {
            Commands::Show { env, file, format } => {
                handlers::environment::handle_show(env, file.as_deref(), format, out)
            }
            Commands::AuthorizeUrl { env, state } => {
                handlers::auth::handle_authorize_url(env, state.as_deref(), out)
            }
            Commands::Check { path } => handlers::environment::handle_check(&path, out),
        }
    }
}
