use std::path::PathBuf;

use jobcheck_core::contract::{validate, ContractError};
use jobcheck_enforce::types::ValidateResult;
use jobcheck_output::OutputFormatter;
use serde_json::Value;

use super::{emit, load_workspace, GlobalOpts};

/// Run `jobcheck validate <contract>` — check a contract file against the schema.
pub fn run(formatter: &dyn OutputFormatter, global: GlobalOpts, contract: PathBuf) -> i32 {
    let ws = match load_workspace("validate", global) {
        Ok(ws) => ws,
        Err(code) => return code,
    };

    let text = match std::fs::read_to_string(&contract) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("jobcheck validate: failed to read {}: {e}", contract.display());
            return 2;
        }
    };
    let document: Value = match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("jobcheck validate: {}: invalid JSON: {e}", contract.display());
            return 2;
        }
    };

    let violations = match validate(&document, &ws.schema) {
        Ok(()) => vec![],
        Err(ContractError::Schema(violations)) => violations,
        Err(e) => {
            eprintln!("jobcheck validate: {e}");
            return 2;
        }
    };

    let result = ValidateResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "validate".to_string(),
        contract: contract.display().to_string(),
        valid: violations.is_empty(),
        violations,
    };
    emit(&formatter.format_validate(&result));
    if result.valid {
        0
    } else {
        1
    }
}
