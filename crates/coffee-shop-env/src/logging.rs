//! Logging initialization for Coffee Shop tools
//!
//! Filter priority:
//! 1. CLI flags (`-v/-q`)
//! 2. `RUST_LOG`
//! 3. The caller's default filter

use anyhow::Result;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output layout of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Whether `-v/-q` moved the level away from the binary's default
fn flags_given<L: LogLevel>(verbosity: &Verbosity<L>) -> bool {
    verbosity.log_level() != <L as LogLevel>::default()
}

/// Resolve the filter from verbosity flags, `RUST_LOG` and `default_filter`
pub fn build_filter<L: LogLevel>(
    verbosity: &Verbosity<L>,
    default_filter: &str,
) -> Result<EnvFilter> {
    let filter = match (flags_given(verbosity), verbosity.log_level()) {
        (true, Some(level)) => EnvFilter::try_new(level.as_str().to_ascii_lowercase())?,
        (true, None) => EnvFilter::try_new("off")?,
        (false, _) => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))?,
    };
    Ok(filter)
}

/// Install the global subscriber
///
/// ```no_run
/// use clap_verbosity_flag::{Verbosity, WarnLevel};
/// use coffee_shop_env::logging::{self, LogFormat};
///
/// let verbosity = Verbosity::<WarnLevel>::default();
/// logging::init_logging(&verbosity, "coffee_env=warn", LogFormat::Compact).unwrap();
/// ```
pub fn init_logging<L: LogLevel>(
    verbosity: &Verbosity<L>,
    default_filter: &str,
    format: LogFormat,
) -> Result<()> {
    let filter = build_filter(verbosity, default_filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .compact(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()?,
    }

    Ok(())
}

/// Install the subscriber only when flags or `RUST_LOG` ask for it
///
/// Returns whether logging was initialized.
pub fn init_cli_logging<L: LogLevel>(
    verbosity: &Verbosity<L>,
    default_filter: &str,
    format: LogFormat,
) -> Result<bool> {
    if flags_given(verbosity) || std::env::var("RUST_LOG").is_ok() {
        init_logging(verbosity, default_filter, format)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_verbosity_flag::WarnLevel;

    #[test]
    fn test_flags_override_default() {
        let verbosity = Verbosity::<WarnLevel>::new(2, 0);
        let filter = build_filter(&verbosity, "coffee_env=error").unwrap();
        assert!(filter.to_string().eq_ignore_ascii_case("debug"));
    }

    #[test]
    fn test_quiet_disables_output() {
        let verbosity = Verbosity::<WarnLevel>::new(0, 5);
        let filter = build_filter(&verbosity, "coffee_env=error").unwrap();
        assert!(filter.to_string().eq_ignore_ascii_case("off"));
    }
}
