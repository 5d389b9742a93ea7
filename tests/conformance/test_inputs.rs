// Parameter usage against declared inputs.

use super::helpers::{check_js, contract};

#[test]
fn destructure_order_does_not_matter() {
    let c = contract(&["a", "b"], &["ok"]);
    let forward = check_js("export default { invoke({ a, b }) { return { ok: 1 }; } };", &c);
    let reversed = check_js("export default { invoke({ b, a }) { return { ok: 1 }; } };", &c);
    assert_eq!(forward.info.inputs_used, vec!["a", "b"]);
    assert_eq!(forward.info.inputs_used, reversed.info.inputs_used);
    assert_eq!(forward.result, reversed.result);
}

#[test]
fn unused_input_is_advisory() {
    let c = contract(&["x", "y"], &["status"]);
    let a = check_js(
        "export default { invoke(params) { return { status: params.x }; } };",
        &c,
    );
    assert!(a.result.passed);
    assert!(a.result.errors.is_empty());
    assert_eq!(a.result.warning_messages(), vec!["y declared but unused"]);
}

#[test]
fn computed_access_is_not_tracked() {
    let c = contract(&["foo"], &["status"]);
    let dotted = check_js(
        "export default { invoke(alias) { return { status: alias.foo }; } };",
        &c,
    );
    assert_eq!(dotted.info.inputs_used, vec!["foo"]);
    assert!(dotted.result.warnings.is_empty());

    let bracketed = check_js(
        "export default { invoke(alias) { return { status: alias['foo'] }; } };",
        &c,
    );
    assert!(bracketed.info.inputs_used.is_empty());
    assert_eq!(bracketed.result.warning_messages(), vec!["foo declared but unused"]);
}

#[test]
fn undeclared_read_inside_callback_is_caught() {
    let c = contract(&["items"], &["count"]);
    let a = check_js(
        r#"
export default {
  async invoke(params) {
    const picked = params.items.filter((i) => i.kind === params.kind);
    return { count: picked.length };
  },
};
"#,
        &c,
    );
    assert_eq!(a.result.error_messages(), vec!["kind used but undeclared"]);
    assert_eq!(a.result.errors[0].line, Some(4));
}

#[test]
fn destructured_defaults_rest_and_renames() {
    let c = contract(&["region", "retries", "token"], &["ok"]);
    let a = check_js(
        "export default { invoke({ region = 'eu', retries: n, token, ...rest }) { return { ok: n }; } };",
        &c,
    );
    assert_eq!(a.info.inputs_used, vec!["region", "retries", "token"]);
    assert!(a.result.passed);
    assert!(a.result.warnings.is_empty());
}

#[test]
fn handler_without_parameter_reads_nothing() {
    let c = contract(&["x"], &["ok"]);
    let a = check_js("export default { invoke() { return { ok: true }; } };", &c);
    assert!(a.info.inputs_used.is_empty());
    assert_eq!(a.result.warning_messages(), vec!["x declared but unused"]);
}

#[test]
fn analysis_is_deterministic() {
    let c = contract(&["a", "b"], &["out"]);
    let src = "export default { invoke(p) { return p.c ? { out: p.a } : { out: p.d, x: 1 }; } };";
    let first = check_js(src, &c);
    for _ in 0..5 {
        assert_eq!(check_js(src, &c), first);
    }
}
