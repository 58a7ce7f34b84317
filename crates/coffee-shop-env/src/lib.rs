//! # Coffee Shop environment
//!
//! Deployment-specific endpoints and Auth0 identifiers for the Coffee Shop
//! client, as an immutable process-wide value.
//!
//! - [`environment`] holds the development and production variants and the
//!   build-time selected instance
//! - [`validation`], [`api`] and [`auth0`] are the consumers that check and
//!   interpret the fields at their own boundary
//! - [`loader`] reads and writes deployment files

pub mod api;
pub mod auth0;
pub mod environment;
pub mod error;
pub mod loader;
pub mod logging;
pub mod validation;

pub use environment::{
    environment, Auth0Settings, Environment, EnvironmentConfig, ACTIVE_ENVIRONMENT,
};
pub use error::{ConfigurationError, Result};
