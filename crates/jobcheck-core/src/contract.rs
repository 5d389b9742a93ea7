//! Contract loading and JSON Schema validation.
//!
//! A contract file is validated against the contract schema before it is
//! deserialized, so the analysis engine can rely on `inputs` and `outputs`
//! being present and well-typed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Contract;

/// The contract schema shipped with jobcheck.
pub const EMBEDDED_SCHEMA: &str = include_str!("../schemas/contract.schema.json");

/// One schema violation, located by JSON pointer into the contract document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaViolation {
    /// JSON pointer of the offending value (empty for the document root).
    pub instance_path: String,
    pub message: String,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} (at {})", self.message, self.instance_path)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid contract schema: {0}")]
    InvalidSchema(String),
    #[error("contract does not match schema ({} violation(s))", .0.len())]
    Schema(Vec<SchemaViolation>),
}

/// Parse a schema document from text.
pub fn parse_schema(text: &str) -> Result<Value, ContractError> {
    let schema: Value = serde_json::from_str(text)?;
    // Compile once up front so a broken schema is reported as such, not as
    // a violation of every contract.
    jsonschema::validator_for(&schema).map_err(|e| ContractError::InvalidSchema(e.to_string()))?;
    Ok(schema)
}

/// The embedded contract schema as a JSON value.
pub fn embedded_schema() -> Value {
    // The embedded schema is a compile-time constant covered by tests.
    serde_json::from_str(EMBEDDED_SCHEMA).unwrap_or(Value::Null)
}

/// Validate a raw contract document, collecting every violation.
pub fn validate(document: &Value, schema: &Value) -> Result<(), ContractError> {
    let validator = jsonschema::validator_for(schema)
        .map_err(|e| ContractError::InvalidSchema(e.to_string()))?;
    let violations: Vec<SchemaViolation> = validator
        .iter_errors(document)
        .map(|e| SchemaViolation {
            instance_path: e.instance_path.to_string(),
            message: e.to_string(),
        })
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ContractError::Schema(violations))
    }
}

/// Validate and deserialize a contract from its JSON text.
pub fn parse_contract(text: &str, schema: &Value) -> Result<Contract, ContractError> {
    let document: Value = serde_json::from_str(text)?;
    validate(&document, schema)?;
    Ok(serde_json::from_value(document)?)
}

/// Read, validate, and deserialize the contract at `path`.
pub fn load_contract(path: &Path, schema: &Value) -> Result<Contract, ContractError> {
    let text = std::fs::read_to_string(path).map_err(|source| ContractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_contract(&text, schema)
}
