//! Application-wide default values
//!
//! Centralized location for configuration defaults to improve maintainability.

// =============================================================================
// Graph Store (Neo4j)
// =============================================================================

/// Default Bolt URI for the graph store (for development)
pub const DEFAULT_GRAPH_STORE_URI: &str = "bolt://localhost:7687";

/// Default graph store username
pub const DEFAULT_GRAPH_STORE_USERNAME: &str = "neo4j";

/// Default graph store password (for development)
pub const DEFAULT_GRAPH_STORE_PASSWORD: &str = "password";

// =============================================================================
// Session Analysis
// =============================================================================

/// Default maximum number of recorded sessions per user
pub const DEFAULT_MAX_SESSIONS: u32 = 50;

/// Default maximum recording duration in seconds (1 hour)
pub const DEFAULT_MAX_DURATION_SECONDS: u64 = 3600;

/// Audio formats accepted for upload when ALLOWED_FILE_TYPES is not set
pub const DEFAULT_ALLOWED_FILE_TYPES: &[&str] = &["mp3", "wav", "m4a"];

/// Analysis elements extracted from every session transcript.
/// Not environment-sourced; the analysis pipeline depends on this exact set.
pub const DEFAULT_ANALYSIS_ELEMENTS: &[&str] = &[
    "emotions",
    "topics",
    "insights",
    "action_items",
    "beliefs",
    "challenges",
];
