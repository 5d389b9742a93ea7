//! Diff the declared contract against what the handler reads and returns.
//!
//! Mismatches never short-circuit: every discrepancy across the whole script
//! is collected in one pass.

use jobcheck_core::types::Contract;
use jobcheck_parsers::collector::{DefectKind, ReturnShape, UsageSet};
use jobcheck_parsers::handler::LocateError;

use crate::codes::FindingCode;
use crate::types::{ConformanceResult, Finding};

/// Compare inferred usage and return shape against `contract`.
pub fn compare(contract: &Contract, usage: &UsageSet, shape: &ReturnShape) -> ConformanceResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Inputs: reading something undeclared is drift that breaks callers;
    // declaring something unread is cosmetic.
    for name in usage.names() {
        if !contract.declares_input(name) {
            errors.push(field_finding(
                FindingCode::UndeclaredInput,
                format!("{name} used but undeclared"),
                name,
                usage.line_of(name),
            ));
        }
    }
    for name in contract.inputs.keys() {
        if !usage.contains(name) {
            warnings.push(field_finding(
                FindingCode::UnusedInput,
                format!("{name} declared but unused"),
                name,
                None,
            ));
        }
    }

    // Outputs
    if shape.is_unverifiable() {
        let mut finding = FindingCode::UnverifiableOutputs
            .finding("outputs unverifiable due to non-literal return");
        finding.line = shape.dynamic_return;
        finding.fix_hint = Some(FindingCode::UnverifiableOutputs.fix_hint().to_string());
        warnings.push(finding);
    } else {
        for name in contract.outputs.keys() {
            if !shape.produced.contains(name) {
                errors.push(field_finding(
                    FindingCode::MissingOutput,
                    format!("{name} declared but not produced"),
                    name,
                    None,
                ));
            }
        }
        for name in shape.produced.names() {
            if !contract.declares_output(name) {
                errors.push(field_finding(
                    FindingCode::UndeclaredOutput,
                    format!("{name} produced but undeclared"),
                    name,
                    shape.produced.line_of(name),
                ));
            }
        }
    }

    for defect in &shape.defects {
        let (code, message) = match defect.kind {
            DefectKind::SpreadInReturn => (
                FindingCode::SpreadInReturn,
                "return statement must use explicit keys, not spread",
            ),
            DefectKind::ComputedKeyInReturn => (
                FindingCode::ComputedKeyInReturn,
                "return statement must use explicit keys, not computed keys",
            ),
        };
        let mut finding = code.finding(message);
        finding.line = Some(defect.line);
        finding.fix_hint = Some(code.fix_hint().to_string());
        errors.push(finding);
    }

    ConformanceResult::new(errors, warnings)
}

/// The single fatal result when no handler could be located.
pub fn handler_not_found(error: &LocateError, handler_name: &str) -> ConformanceResult {
    let mut finding = FindingCode::MissingHandler.finding("no entry handler found");
    finding.line = match error {
        LocateError::NoDefaultExport | LocateError::MissingHandler { .. } => None,
        LocateError::NotRecordLiteral { line, .. } | LocateError::NotAFunction { line, .. } => {
            Some(*line)
        }
    };
    finding.fix_hint = Some(format!(
        "{error}; export default an object literal with an `{handler_name}` function"
    ));
    ConformanceResult::new(vec![finding], vec![])
}

fn field_finding(code: FindingCode, message: String, field: &str, line: Option<u32>) -> Finding {
    let mut finding = code.finding(message);
    finding.field = Some(field.to_string());
    finding.line = line;
    if code == FindingCode::UndeclaredInput || code == FindingCode::UndeclaredOutput {
        finding.fix_hint = Some(code.fix_hint().to_string());
    }
    finding
}
