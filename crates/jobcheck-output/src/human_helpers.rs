use jobcheck_enforce::types::{Finding, Severity};

pub(crate) fn format_finding_human(f: &Finding, script: &str) -> String {
    let severity_label = match f.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };

    let mut out = format!("{}[{}]: {}\n", severity_label, f.code, f.message);
    match f.line {
        Some(line) => out.push_str(&format!("  --> {}:{}\n", script, line)),
        None => out.push_str(&format!("  --> {}\n", script)),
    }

    if let Some(fix) = &f.fix_hint {
        out.push_str(&format!("   = fix: {}\n", fix));
    }

    out
}
