//! Application settings loaded from environment variables.

use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_ALLOWED_FILE_TYPES, DEFAULT_ANALYSIS_ELEMENTS, DEFAULT_GRAPH_STORE_PASSWORD,
    DEFAULT_GRAPH_STORE_URI, DEFAULT_GRAPH_STORE_USERNAME, DEFAULT_MAX_DURATION_SECONDS,
    DEFAULT_MAX_SESSIONS,
};
use crate::errors::{ConfigError, ConfigResult};

/// Application configuration.
///
/// Constructed once at process entry and passed by reference (or cloned)
/// to every consumer. Fields never change after construction.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bolt URI of the graph store
    pub graph_store_uri: String,
    /// Graph store username
    pub graph_store_username: String,
    /// Graph store password
    #[serde(skip_serializing)]
    pub graph_store_password: String,
    /// API key for the LLM provider (empty disables analysis calls)
    #[serde(skip_serializing)]
    pub llm_api_key: String,
    /// Maximum number of recorded sessions per user
    pub max_sessions: u32,
    /// Maximum recording duration in seconds
    pub max_duration_seconds: u64,
    /// Audio formats accepted for upload
    pub allowed_file_types: Vec<String>,
    /// Analysis elements extracted from every session transcript
    pub default_analysis_elements: Vec<String>,
}

// Don't expose credentials in debug output (security)
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("graph_store_uri", &self.graph_store_uri)
            .field("graph_store_username", &self.graph_store_username)
            .field("graph_store_password", &"[REDACTED]")
            .field("llm_api_key", &"[REDACTED]")
            .field("max_sessions", &self.max_sessions)
            .field("max_duration_seconds", &self.max_duration_seconds)
            .field("allowed_file_types", &self.allowed_file_types)
            .field("default_analysis_elements", &self.default_analysis_elements)
            .finish()
    }
}

/// Graph store connection parameters, grouped for the database client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStoreConfig {
    pub uri: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl std::fmt::Debug for GraphStoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphStoreConfig")
            .field("uri", &self.uri)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory (or an ancestor) is merged
    /// into the process environment first; variables already set in the
    /// environment are not overridden. A missing file is not an error.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if `MAX_SESSIONS` or
    /// `MAX_DURATION` is set to a string that does not parse as an integer.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Load configuration with an explicit env file path instead of the
    /// conventional `.env` lookup. Same merge semantics as [`Config::from_env`].
    pub fn from_env_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        dotenvy::from_path(path.as_ref()).ok();
        Self::load()
    }

    fn load() -> ConfigResult<Self> {
        let config = Self {
            graph_store_uri: env::var("NEO4J_URI")
                .unwrap_or_else(|_| DEFAULT_GRAPH_STORE_URI.to_string()),
            graph_store_username: env::var("NEO4J_USERNAME")
                .unwrap_or_else(|_| DEFAULT_GRAPH_STORE_USERNAME.to_string()),
            graph_store_password: env::var("NEO4J_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_GRAPH_STORE_PASSWORD.to_string()),
            llm_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            max_sessions: parse_var("MAX_SESSIONS", DEFAULT_MAX_SESSIONS)?,
            max_duration_seconds: parse_var("MAX_DURATION", DEFAULT_MAX_DURATION_SECONDS)?,
            allowed_file_types: match env::var("ALLOWED_FILE_TYPES") {
                Ok(raw) => split_list(&raw),
                Err(_) => DEFAULT_ALLOWED_FILE_TYPES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            default_analysis_elements: DEFAULT_ANALYSIS_ELEMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        if config.llm_api_key.is_empty() {
            tracing::warn!("OPENAI_API_KEY not set, session analysis will be unavailable");
        }
        tracing::debug!("Configuration loaded");

        Ok(config)
    }

    /// Get the graph store connection parameters as a grouped value.
    pub fn graph_store_config(&self) -> GraphStoreConfig {
        GraphStoreConfig {
            uri: self.graph_store_uri.clone(),
            username: self.graph_store_username.clone(),
            password: self.graph_store_password.clone(),
        }
    }

    /// Check whether an audio format is accepted for upload.
    ///
    /// Matches case-insensitively; a leading dot is ignored so both
    /// `"mp3"` and `".MP3"` pass.
    pub fn is_allowed_file_type(&self, file_type: &str) -> bool {
        let file_type = file_type.trim_start_matches('.');
        self.allowed_file_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(file_type))
    }

    /// Get the maximum recording duration.
    pub fn max_session_duration(&self) -> Duration {
        Duration::from_secs(self.max_duration_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph_store_uri: DEFAULT_GRAPH_STORE_URI.to_string(),
            graph_store_username: DEFAULT_GRAPH_STORE_USERNAME.to_string(),
            graph_store_password: DEFAULT_GRAPH_STORE_PASSWORD.to_string(),
            llm_api_key: String::new(),
            max_sessions: DEFAULT_MAX_SESSIONS,
            max_duration_seconds: DEFAULT_MAX_DURATION_SECONDS,
            allowed_file_types: DEFAULT_ALLOWED_FILE_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_analysis_elements: DEFAULT_ANALYSIS_ELEMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Read an integer-typed variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(key: &str, default: T) -> ConfigResult<T> {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(ConfigError::invalid_value(key, raw)),
        },
        Err(_) => Ok(default),
    }
}

/// Split a comma-delimited list. An empty value yields an empty list;
/// otherwise segments are kept verbatim.
fn split_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|s| s.to_string()).collect()
}
