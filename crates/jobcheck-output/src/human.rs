use crate::human_helpers::format_finding_human;
use crate::OutputFormatter;
use jobcheck_enforce::types::{CheckResult, ExplainResult, ScanResult, ValidateResult};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        if result.errors.is_empty() && result.warnings.is_empty() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();
        for f in result.errors.iter().chain(&result.warnings) {
            out.push_str(&format_finding_human(f, &result.script));
        }
        out.push_str(&format!(
            "\n{} error(s), {} warning(s) in {}\n",
            result.errors.len(),
            result.warnings.len(),
            result.script,
        ));
        out
    }

    fn format_scan(&self, result: &ScanResult) -> String {
        let mut out = String::new();

        for job in &result.jobs {
            for f in job.errors.iter().chain(&job.warnings) {
                out.push_str(&format_finding_human(f, &job.script));
            }
        }
        for failure in &result.failures {
            out.push_str(&format!("error: {}\n  --> {}\n", failure.reason, failure.script));
        }

        let s = &result.summary;
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} job(s) checked: {} passed, {} failed; {} error(s), {} warning(s)\n",
            s.checked, s.passed, s.failed, s.errors, s.warnings,
        ));
        if !result.failures.is_empty() {
            out.push_str(&format!(
                "{} job(s) could not be analysed\n",
                result.failures.len()
            ));
        }
        out
    }

    fn format_validate(&self, result: &ValidateResult) -> String {
        if result.valid {
            return format!("{}: valid\n", result.contract);
        }

        let mut out = String::new();
        for v in &result.violations {
            out.push_str(&format!("error: {}\n  --> {}\n", v, result.contract));
        }
        out.push_str(&format!(
            "\n{} schema violation(s) in {}\n",
            result.violations.len(),
            result.contract
        ));
        out
    }

    fn format_explain(&self, result: &ExplainResult) -> String {
        let mut out = format!(
            "{} [{}] {}\n  {}\n\n",
            result.code,
            result.severity.as_str(),
            result.category,
            result.summary,
        );
        out.push_str(&format!("{}\n\n", result.explanation));
        out.push_str(&format!("  example: {}\n", result.example));
        out.push_str(&format!("  fix:     {}\n", result.fix));
        out
    }
}
