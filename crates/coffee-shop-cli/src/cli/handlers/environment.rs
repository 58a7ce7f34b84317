//! Environment display and deployment file checks

use super::select;
use crate::error::Result;
use coffee_shop_env::loader::{self, ConfigFormat};
use coffee_shop_env::{validation, Environment};
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Print an environment in the requested format
pub fn handle_show(
    env: Option<Environment>,
    file: Option<&Path>,
    format: ConfigFormat,
    out: &mut impl Write,
) -> Result<()> {
    let config = match file {
        Some(path) => Cow::Owned(loader::load_from_file(path)?),
        None => select(env),
    };
    debug!("Showing {} environment as {}", config.environment(), format);

    let rendered = loader::to_string(&config, format)?;
    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}

/// Load a deployment file and apply every field check
pub fn handle_check(path: &Path, out: &mut impl Write) -> Result<()> {
    let config = loader::load_from_file(path)?;
    validation::check(&config)?;

    info!("{} passed all checks", path.display());
    writeln!(
        out,
        "{}: ok ({} environment)",
        path.display(),
        config.environment()
    )?;
    Ok(())
}
