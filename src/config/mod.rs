//! Application configuration module
//!
//! Handles environment variables and application-wide defaults.

mod constants;
mod settings;

pub use constants::*;
pub use settings::{Config, GraphStoreConfig};
