use serde::{Deserialize, Serialize};

use super::CheckResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub version: String,
    pub command: String,
    pub root: String,
    pub jobs: Vec<CheckResult>,
    /// Jobs that could not be analysed at all (unreadable, syntax errors, bad contract).
    pub failures: Vec<ScanFailure>,
    pub summary: ScanSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanFailure {
    pub script: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub checked: u32,
    pub passed: u32,
    pub failed: u32,
    pub errors: u32,
    pub warnings: u32,
}

impl ScanResult {
    /// True when every job was analysed and none has errors.
    pub fn passed(&self) -> bool {
        self.failures.is_empty() && self.summary.failed == 0
    }
}
