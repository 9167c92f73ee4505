//! Configuration for the Insight Journey session-analysis backend.
//!
//! Loads settings from environment variables (optionally seeded from a
//! local `.env` file), applies defaults for missing keys, and exposes the
//! result as an immutable [`Config`] value.
//!
//! # Modules
//!
//! - **config**: Settings and application-wide defaults
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! Construct the configuration once at process entry and pass it down:
//!
//! ```no_run
//! use insight_journey_config::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let graph = config.graph_store_config();
//! println!("connecting to {}", graph.uri);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{Config, GraphStoreConfig};
pub use errors::{ConfigError, ConfigResult};
