// Locating the entry handler.

use jobcheck_core::contract::{embedded_schema, parse_contract};
use jobcheck_enforce::engine::{analyze_source, AnalysisOptions};

use super::helpers::{check_js, contract};

fn assert_no_handler(source: &str) {
    let c = contract(&["x"], &["y"]);
    let a = check_js(source, &c);
    assert!(!a.result.passed, "{source}");
    assert_eq!(a.result.error_messages(), vec!["no entry handler found"], "{source}");
    assert!(a.result.warnings.is_empty(), "{source}");
}

#[test]
fn no_handler_is_a_single_fatal_error() {
    assert_no_handler("export const invoke = () => ({ y: 1 });");
    assert_no_handler("export default { run(p) { return { y: p.x }; } };");
    assert_no_handler("const job = { invoke() {} }; export default job;");
    assert_no_handler("export default { invoke: 42 };");
    assert_no_handler("export default function invoke(p) { return { y: p.x }; }");
}

#[test]
fn handler_forms_are_accepted() {
    let c = contract(&["x"], &["y"]);
    for src in [
        "export default { invoke(p) { return { y: p.x }; } };",
        "export default { async invoke(p) { return { y: p.x }; } };",
        "export default { invoke: function (p) { return { y: p.x }; } };",
        "export default { invoke: async (p) => { return { y: p.x }; } };",
        "export default { invoke: p => ({ y: p.x }) };",
        "export default { 'invoke': (p) => ({ y: p.x }) };",
    ] {
        let a = check_js(src, &c);
        assert!(a.result.passed, "{src}: {:?}", a.result.errors);
        assert!(a.result.warnings.is_empty(), "{src}: {:?}", a.result.warnings);
    }
}

#[test]
fn typescript_handler_with_annotations() {
    let c = parse_contract(
        r#"{ "name": "t", "description": "",
             "inputs": { "count": { "type": "integer", "description": "" } },
             "outputs": { "total": { "type": "number", "description": "" } } }"#,
        &embedded_schema(),
    )
    .unwrap();
    let src = r#"
interface Params { count: number }

export default {
  async invoke(params: Params): Promise<{ total: number }> {
    const total: number = params.count * 2;
    return { total };
  },
};
"#;
    let a = analyze_source("typescript", src, &c, &AnalysisOptions::default()).unwrap();
    assert!(a.result.passed, "{:?}", a.result.errors);
    assert_eq!(a.info.inputs_used, vec!["count"]);
    assert_eq!(a.info.handler_line, Some(5));
}

#[test]
fn syntax_errors_are_run_level_failures() {
    let c = contract(&[], &[]);
    let err = analyze_source(
        "javascript",
        "export default { invoke( { return",
        &c,
        &AnalysisOptions::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("syntax error"), "{err}");
}
