mod explain;
mod scan;

pub use explain::*;
pub use scan::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub code: String,
    pub severity: Severity,
    pub category: String,
    pub message: String,
    /// Contract field the finding is about, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fix_hint: Option<String>,
}

/// Outcome of comparing one script against its contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceResult {
    pub passed: bool,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl ConformanceResult {
    /// `passed` is derived: true iff there are no errors.
    pub fn new(errors: Vec<Finding>, warnings: Vec<Finding>) -> Self {
        Self {
            passed: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|f| f.message.as_str()).collect()
    }

    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|f| f.message.as_str()).collect()
    }

    /// "ok" | "warning" | "error"
    pub fn status(&self) -> &'static str {
        if !self.errors.is_empty() {
            "error"
        } else if !self.warnings.is_empty() {
            "warning"
        } else {
            "ok"
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub version: String,
    pub command: String,
    pub script: String,
    pub contract: String,
    pub status: String, // "ok" | "warning" | "error"
    pub passed: bool,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub info: CheckInfo,
}

/// What the analysis saw, independent of the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInfo {
    pub handler_line: Option<u32>,
    pub inputs_used: Vec<String>,
    pub outputs_produced: Vec<String>,
    pub dynamic_return: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResult {
    pub version: String,
    pub command: String,
    pub contract: String,
    pub valid: bool,
    pub violations: Vec<jobcheck_core::contract::SchemaViolation>,
}
