/// Tests for the embedded contract schema: which contract documents are
/// accepted, and where violations are reported.
use jobcheck_core::contract::{embedded_schema, parse_contract, ContractError};
use jobcheck_core::types::FieldType;

fn violation_paths(text: &str) -> Vec<String> {
    match parse_contract(text, &embedded_schema()) {
        Err(ContractError::Schema(violations)) => {
            violations.into_iter().map(|v| v.instance_path).collect()
        }
        other => panic!("expected schema violations, got {other:?}"),
    }
}

#[test]
fn full_contract_is_accepted() {
    let contract = parse_contract(
        r#"{
            "$schema": "https://example.invalid/contract.schema.json",
            "name": "backup",
            "description": "Snapshot a database",
            "inputs": {
                "database": { "type": "string", "description": "", "required": true },
                "retain_days": { "type": "integer", "description": "" },
                "tags": { "type": "array", "description": "" }
            },
            "outputs": {
                "snapshot_id": { "type": "string", "description": "" },
                "size_bytes": { "type": "number", "description": "" }
            },
            "secrets": ["DB_PASSWORD", "S3_KEY"]
        }"#,
        &embedded_schema(),
    )
    .unwrap();
    assert_eq!(contract.name, "backup");
    assert_eq!(contract.inputs["retain_days"].field_type, FieldType::Integer);
    assert!(contract.inputs["database"].required);
    assert!(!contract.inputs["tags"].required);
    assert_eq!(contract.secrets.as_deref().map(|s| s.len()), Some(2));
}

#[test]
fn empty_inputs_and_outputs_are_accepted() {
    let contract = parse_contract(
        r#"{ "name": "noop", "description": "", "inputs": {}, "outputs": {} }"#,
        &embedded_schema(),
    )
    .unwrap();
    assert!(contract.inputs.is_empty());
    assert!(contract.outputs.is_empty());
}

#[test]
fn unknown_field_type_is_located() {
    let paths = violation_paths(
        r#"{ "name": "x", "description": "",
             "inputs": { "when": { "type": "date", "description": "" } }, "outputs": {} }"#,
    );
    assert_eq!(paths, vec!["/inputs/when/type"]);
}

#[test]
fn output_cannot_be_required() {
    let paths = violation_paths(
        r#"{ "name": "x", "description": "", "inputs": {},
             "outputs": { "id": { "type": "string", "description": "", "required": true } } }"#,
    );
    assert_eq!(paths, vec!["/outputs/id"]);
}

#[test]
fn duplicate_or_malformed_secrets_are_rejected() {
    let paths = violation_paths(
        r#"{ "name": "x", "description": "", "inputs": {}, "outputs": {},
             "secrets": ["TOKEN", "TOKEN"] }"#,
    );
    assert_eq!(paths, vec!["/secrets"]);

    let paths = violation_paths(
        r#"{ "name": "x", "description": "", "inputs": {}, "outputs": {},
             "secrets": ["not a name"] }"#,
    );
    assert_eq!(paths, vec!["/secrets/0"]);
}

#[test]
fn missing_top_level_fields_are_all_reported() {
    let err = parse_contract(r#"{ "name": "x" }"#, &embedded_schema()).unwrap_err();
    match err {
        ContractError::Schema(violations) => assert_eq!(violations.len(), 3),
        other => panic!("expected schema violations, got {other:?}"),
    }
}
