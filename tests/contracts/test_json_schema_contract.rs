/// Contract tests for JSON output compliance.
///
/// These tests verify that the serialized output of `check`, `scan`,
/// `validate` and `explain` matches the JSON schemas published in
/// tests/schemas/.
use std::fs;

use jobcheck_core::contract::{embedded_schema, validate, ContractError};
use jobcheck_enforce::codes::{explain_code, FindingCode};
use jobcheck_enforce::engine::{check_job, AnalysisOptions};
use jobcheck_enforce::scan::scan_jobs;
use jobcheck_enforce::types::{CheckResult, ValidateResult};
use jobcheck_parsers::treesitter::TreeSitterParser;
use jobcheck_parsers::walker::JobWalker;

const CHECK_SCHEMA: &str = include_str!("../schemas/check_output.schema.json");
const SCAN_SCHEMA: &str = include_str!("../schemas/scan_output.schema.json");
const VALIDATE_SCHEMA: &str = include_str!("../schemas/validate_output.schema.json");
const EXPLAIN_SCHEMA: &str = include_str!("../schemas/explain_output.schema.json");

const CONTRACT: &str = r#"{
    "name": "deploy",
    "description": "",
    "inputs": {
        "service": { "type": "string", "description": "" },
        "replicas": { "type": "integer", "description": "" }
    },
    "outputs": {
        "status": { "type": "string", "description": "" },
        "url": { "type": "string", "description": "" }
    }
}"#;

fn validate_against_schema(json_value: &serde_json::Value, schema_str: &str) {
    let schema: serde_json::Value = serde_json::from_str(schema_str).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("Failed to compile JSON schema");
    let errors: Vec<_> = validator.iter_errors(json_value).collect();
    if !errors.is_empty() {
        let msgs: Vec<String> = errors
            .iter()
            .map(|e| format!("  - {} (at {})", e, e.instance_path))
            .collect();
        panic!("JSON schema validation failed:\n{}", msgs.join("\n"));
    }
}

fn check_script(script: &str) -> CheckResult {
    let dir = tempfile::tempdir().unwrap();
    let script_path = dir.path().join("deploy.js");
    let contract_path = dir.path().join("deploy.json");
    fs::write(&script_path, script).unwrap();
    fs::write(&contract_path, CONTRACT).unwrap();
    check_job(
        &mut TreeSitterParser::new(),
        &script_path,
        &contract_path,
        &embedded_schema(),
        &AnalysisOptions::default(),
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Check output schema
// ---------------------------------------------------------------------------

#[test]
fn check_output_clean_matches_schema() {
    let result = check_script(
        "export default { invoke({ service, replicas }) { return { status: 'ok', url: service + replicas }; } };",
    );
    assert_eq!(result.status, "ok");
    validate_against_schema(&serde_json::to_value(&result).unwrap(), CHECK_SCHEMA);
}

#[test]
fn check_output_with_every_finding_kind_matches_schema() {
    let result = check_script(
        r#"export default {
  invoke(p) {
    if (p.dryRun) return { ...p.previous };
    if (p.mirror) return { [p.key]: 1 };
    if (p.fast) return buildResult();
    return { status: 'ok', debug: true };
  },
};
"#,
    );
    let codes: Vec<&str> = result
        .errors
        .iter()
        .chain(&result.warnings)
        .map(|f| f.code.as_str())
        .collect();
    for code in ["E002", "E003", "E004", "E005", "E006", "W001"] {
        assert!(codes.contains(&code), "missing {code} in {codes:?}");
    }
    validate_against_schema(&serde_json::to_value(&result).unwrap(), CHECK_SCHEMA);
}

#[test]
fn check_output_missing_handler_matches_schema() {
    let result = check_script("export default {};");
    assert_eq!(result.errors[0].code, "E001");
    assert!(result.info.handler_line.is_none());
    validate_against_schema(&serde_json::to_value(&result).unwrap(), CHECK_SCHEMA);
}

// ---------------------------------------------------------------------------
// Scan output schema
// ---------------------------------------------------------------------------

#[test]
fn scan_output_matches_schema() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(
        root.join("a.js"),
        "export default { invoke(p) { return fetchAll(p.service, p.replicas); } };",
    )
    .unwrap();
    fs::write(root.join("a.json"), CONTRACT).unwrap();
    fs::write(root.join("b.ts"), "export default { invoke( {").unwrap();
    fs::write(root.join("b.json"), CONTRACT).unwrap();

    let jobs = JobWalker::new(root, ".json").walk();
    let result = scan_jobs(root, &jobs, &embedded_schema(), &AnalysisOptions::default());
    assert_eq!(result.jobs.len(), 1);
    assert_eq!(result.failures.len(), 1);
    validate_against_schema(&serde_json::to_value(&result).unwrap(), SCAN_SCHEMA);
}

// ---------------------------------------------------------------------------
// Validate output schema
// ---------------------------------------------------------------------------

#[test]
fn validate_output_matches_schema() {
    let document = serde_json::json!({
        "name": "",
        "description": "",
        "inputs": { "x": { "type": "string" } },
        "outputs": {},
        "extra": 1
    });
    let violations = match validate(&document, &embedded_schema()) {
        Err(ContractError::Schema(v)) => v,
        other => panic!("expected schema violations, got {other:?}"),
    };
    assert!(violations.len() >= 3);
    let result = ValidateResult {
        version: "0.1.0".to_string(),
        command: "validate".to_string(),
        contract: "bad.json".to_string(),
        valid: false,
        violations,
    };
    validate_against_schema(&serde_json::to_value(&result).unwrap(), VALIDATE_SCHEMA);
}

// ---------------------------------------------------------------------------
// Explain output schema
// ---------------------------------------------------------------------------

#[test]
fn explain_output_matches_schema_for_every_code() {
    for code in FindingCode::ALL {
        let result = explain_code(code.code()).unwrap();
        validate_against_schema(&serde_json::to_value(&result).unwrap(), EXPLAIN_SCHEMA);
    }
}
