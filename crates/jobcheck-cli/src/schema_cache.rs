//! Resolves the contract schema document for a run.
//!
//! `schema.source` in the config may be unset (embedded schema), a file path,
//! or an `http(s)://` URL. Downloaded schemas are cached in
//! `.jobcheck/cache/contract-schema.json` and reused until the configured TTL
//! expires. If a refresh fails, a stale cached copy is used with a warning.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use jobcheck_core::config::SchemaConfig;
use jobcheck_core::contract::{embedded_schema, parse_schema, ContractError};
use serde_json::Value;

const CACHE_FILE: &str = "contract-schema.json";
const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, thiserror::Error)]
pub enum SchemaSourceError {
    #[error("failed to read schema {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to fetch schema from {url}: {message}")]
    Fetch { url: String, message: String },
    #[error("schema from {origin} is unusable: {source}")]
    Invalid {
        origin: String,
        source: ContractError,
    },
}

/// Cached download, persisted as JSON.
#[derive(serde::Serialize, serde::Deserialize)]
struct CachedSchema {
    url: String,
    fetched_at: u64,
    schema: Value,
}

pub struct SchemaResolver<'a> {
    jobcheck_dir: &'a Path,
    config: &'a SchemaConfig,
    no_cache: bool,
    verbose: bool,
}

impl<'a> SchemaResolver<'a> {
    pub fn new(jobcheck_dir: &'a Path, config: &'a SchemaConfig) -> Self {
        Self {
            jobcheck_dir,
            config,
            no_cache: false,
            verbose: false,
        }
    }

    pub fn no_cache(mut self, no_cache: bool) -> Self {
        self.no_cache = no_cache;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn resolve(&self) -> Result<Value, SchemaSourceError> {
        self.resolve_with(fetch_url, now_secs())
    }

    /// `fetch` and `now` are injected so the cache policy can be tested
    /// without a network.
    pub(crate) fn resolve_with<F>(&self, fetch: F, now: u64) -> Result<Value, SchemaSourceError>
    where
        F: Fn(&str) -> Result<String, String>,
    {
        let source = match self.config.source.as_deref() {
            None | Some("") => return Ok(embedded_schema()),
            Some(s) => s,
        };

        if !is_url(source) {
            let path = Path::new(source);
            let text = fs::read_to_string(path).map_err(|e| SchemaSourceError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
            if self.verbose {
                eprintln!("jobcheck: using schema from {}", path.display());
            }
            return parse_schema(&text).map_err(|e| SchemaSourceError::Invalid {
                origin: source.to_string(),
                source: e,
            });
        }

        let cached = self.read_cache().filter(|c| c.url == source);
        if let Some(c) = &cached {
            let fresh = now.saturating_sub(c.fetched_at) < self.config.cache_ttl_seconds;
            if fresh && !self.no_cache {
                if self.verbose {
                    eprintln!("jobcheck: using cached schema for {source}");
                }
                return Ok(c.schema.clone());
            }
        }

        if self.verbose {
            eprintln!("jobcheck: fetching schema from {source}");
        }
        let fetched = fetch(source).and_then(|text| parse_schema(&text).map_err(|e| e.to_string()));
        match fetched {
            Ok(schema) => {
                self.write_cache(&CachedSchema {
                    url: source.to_string(),
                    fetched_at: now,
                    schema: schema.clone(),
                });
                Ok(schema)
            }
            Err(message) => match cached {
                Some(c) => {
                    eprintln!(
                        "jobcheck: warning: {message}; using cached schema for {source}"
                    );
                    Ok(c.schema)
                }
                None => Err(SchemaSourceError::Fetch {
                    url: source.to_string(),
                    message,
                }),
            },
        }
    }

    fn cache_path(&self) -> PathBuf {
        self.jobcheck_dir.join("cache").join(CACHE_FILE)
    }

    fn read_cache(&self) -> Option<CachedSchema> {
        let data = fs::read_to_string(self.cache_path()).ok()?;
        serde_json::from_str(&data).ok()
    }

    fn write_cache(&self, record: &CachedSchema) {
        let path = self.cache_path();
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(e) = fs::write(&path, serde_json::to_string(record).unwrap_or_default()) {
            if self.verbose {
                eprintln!("jobcheck: failed to write {}: {e}", path.display());
            }
        }
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn fetch_url(url: &str) -> Result<String, String> {
    use std::io::Read;
    let mut body = String::new();
    ureq::get(url)
        .header("User-Agent", &format!("jobcheck/{CURRENT_VERSION}"))
        .header("Accept", "application/schema+json, application/json")
        .call()
        .map_err(|e| format!("request failed: {e}"))?
        .into_body()
        .into_reader()
        .read_to_string(&mut body)
        .map_err(|e| format!("failed to read response: {e}"))?;
    Ok(body)
}

#[cfg(test)]
#[path = "schema_cache_tests.rs"]
mod tests;
