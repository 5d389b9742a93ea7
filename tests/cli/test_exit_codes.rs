// Tests for CLI exit code behavior: 0 pass, 1 conformance failure, 2 run-level failure.

use super::common::{project, run_in, stdout, DEPLOY_CONTRACT, DEPLOY_SCRIPT};

/// Reads only `service`, so `replicas` is declared but unused (W001).
const WARNING_ONLY: &str =
    "export default { invoke({ service }) { return { status: 'ok', url: service }; } };";

#[test]
fn test_exit_code_0_on_pass() {
    let dir = project(&[("deploy.js", DEPLOY_SCRIPT), ("deploy.json", DEPLOY_CONTRACT)]);
    assert_eq!(run_in(dir.path(), &["check", "deploy.js"]).status.code(), Some(0));
}

#[test]
fn test_exit_code_0_with_warnings() {
    let dir = project(&[("deploy.js", WARNING_ONLY), ("deploy.json", DEPLOY_CONTRACT)]);
    let out = run_in(dir.path(), &["check", "deploy.js"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("warning[W001]"));
}

#[test]
fn test_exit_code_1_with_warnings_under_strict() {
    let dir = project(&[("deploy.js", WARNING_ONLY), ("deploy.json", DEPLOY_CONTRACT)]);
    let out = run_in(dir.path(), &["check", "deploy.js", "--strict"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_exit_code_1_with_strict_from_config() {
    let dir = project(&[
        (".jobcheck/jobcheck.json", r#"{ "analysis": { "strict": true } }"#),
        ("deploy.js", WARNING_ONLY),
        ("deploy.json", DEPLOY_CONTRACT),
    ]);
    assert_eq!(run_in(dir.path(), &["check", "deploy.js"]).status.code(), Some(1));
}

#[test]
fn test_exit_code_2_on_syntax_error() {
    let dir = project(&[
        ("deploy.js", "export default { invoke(p) { return { status: } } "),
        ("deploy.json", DEPLOY_CONTRACT),
    ]);
    let out = run_in(dir.path(), &["check", "deploy.js"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
}

#[test]
fn test_exit_code_2_on_missing_contract() {
    let dir = project(&[("deploy.js", DEPLOY_SCRIPT)]);
    assert_eq!(run_in(dir.path(), &["check", "deploy.js"]).status.code(), Some(2));
}

#[test]
fn test_exit_code_2_on_invalid_contract() {
    let dir = project(&[
        ("deploy.js", DEPLOY_SCRIPT),
        ("deploy.json", r#"{ "name": "deploy" }"#),
    ]);
    assert_eq!(run_in(dir.path(), &["check", "deploy.js"]).status.code(), Some(2));
}

#[test]
fn test_exit_code_2_on_unsupported_extension() {
    let dir = project(&[("deploy.py", "def invoke(p): pass"), ("deploy.json", DEPLOY_CONTRACT)]);
    assert_eq!(run_in(dir.path(), &["check", "deploy.py"]).status.code(), Some(2));
}

#[test]
fn test_exit_code_2_on_bad_arguments() {
    let dir = project(&[]);
    assert_eq!(run_in(dir.path(), &["check"]).status.code(), Some(2));
}

#[test]
fn test_exit_code_2_on_unreachable_schema_url() {
    let dir = project(&[
        (
            ".jobcheck/jobcheck.json",
            r#"{ "schema": { "source": "http://127.0.0.1:9/contract.schema.json" } }"#,
        ),
        ("deploy.js", DEPLOY_SCRIPT),
        ("deploy.json", DEPLOY_CONTRACT),
    ]);
    let out = run_in(dir.path(), &["check", "deploy.js"]);
    assert_eq!(out.status.code(), Some(2));
}
