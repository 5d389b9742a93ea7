//! Output formatters for jobcheck command results.
//!
//! Provides two output modes:
//! - **JSON** (`--json`): Machine-readable structured output
//! - **Human** (default): Compiler-style diagnostics for terminal users

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use jobcheck_enforce::types::{CheckResult, ExplainResult, ScanResult, ValidateResult};

pub trait OutputFormatter {
    fn format_check(&self, result: &CheckResult) -> String;
    fn format_scan(&self, result: &ScanResult) -> String;
    fn format_validate(&self, result: &ValidateResult) -> String;
    fn format_explain(&self, result: &ExplainResult) -> String;
}
