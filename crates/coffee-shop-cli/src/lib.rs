//! # coffee-env
//!
//! Command-line access to the Coffee Shop deployment environments: print a
//! variant, print its Auth0 authorize URL, or check a deployment file before
//! it is bundled.

pub mod cli;
pub mod error;

pub use cli::*;
pub use error::*;
