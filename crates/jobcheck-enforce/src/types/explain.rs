use serde::{Deserialize, Serialize};

use super::Severity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResult {
    pub version: String,
    pub command: String,
    pub code: String,
    pub severity: Severity,
    pub category: String,
    pub summary: String,
    pub explanation: String,
    pub fix: String,
    pub example: String,
}
