//! Command handlers

pub mod auth;
pub mod environment;

use coffee_shop_env::{environment as bundled, Environment, EnvironmentConfig};
use std::borrow::Cow;

/// Selected variant, or the one bundled into this build
pub(crate) fn select(env: Option<Environment>) -> Cow<'static, EnvironmentConfig> {
    match env {
        Some(env) => Cow::Owned(EnvironmentConfig::for_environment(env)),
        None => Cow::Borrowed(bundled()),
    }
}
