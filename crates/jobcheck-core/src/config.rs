//! Configuration file loading for jobcheck.
//!
//! Reads `.jobcheck/jobcheck.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level jobcheck configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobcheckConfig {
    #[serde(default = "default_version")]
    pub version: String,
    /// Property of the default-exported object that holds the entry handler.
    #[serde(default = "default_handler_name")]
    pub handler_name: String,
    /// Suffix appended to a script's stem to find its contract (`deploy.js` -> `deploy.json`).
    #[serde(default = "default_contract_suffix")]
    pub contract_suffix: String,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub schema: SchemaConfig,
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// Analysis toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Attribute return statements inside nested function literals to the handler.
    #[serde(default = "default_true")]
    pub include_nested_returns: bool,
    /// Treat warnings as failures when computing the exit code.
    #[serde(default)]
    pub strict: bool,
}

/// Where the contract schema comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// A file path or an `http(s)://` URL. `None` uses the embedded schema.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default = "default_cache_ttl_seconds")]
    pub cache_ttl_seconds: u64,
}

fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_handler_name() -> String {
    "invoke".to_string()
}
fn default_contract_suffix() -> String {
    ".json".to_string()
}
fn default_true() -> bool {
    true
}
fn default_cache_ttl_seconds() -> u64 {
    86_400
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include_nested_returns: true,
            strict: false,
        }
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            source: None,
            cache_ttl_seconds: default_cache_ttl_seconds(),
        }
    }
}

impl Default for JobcheckConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            handler_name: default_handler_name(),
            contract_suffix: default_contract_suffix(),
            analysis: AnalysisConfig::default(),
            schema: SchemaConfig::default(),
            ignore_patterns: vec![],
        }
    }
}

impl JobcheckConfig {
    /// Load configuration from `jobcheck.json` inside the given `.jobcheck` directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(jobcheck_dir: &Path) -> Self {
        let config_path = jobcheck_dir.join("jobcheck.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "jobcheck: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
