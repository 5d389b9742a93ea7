//! Batch checking of every job under a directory.

use std::path::Path;

use jobcheck_parsers::treesitter::TreeSitterParser;
use jobcheck_parsers::walker::JobEntry;
use rayon::prelude::*;
use serde_json::Value;

use crate::engine::{check_job, AnalysisOptions};
use crate::types::{CheckResult, ScanFailure, ScanResult, ScanSummary};

/// Check `jobs` in parallel. Each worker owns its own parser; results are
/// reported in script order regardless of completion order.
pub fn scan_jobs(
    root: &Path,
    jobs: &[JobEntry],
    schema: &Value,
    options: &AnalysisOptions,
) -> ScanResult {
    let outcomes: Vec<(String, Result<CheckResult, String>)> = jobs
        .par_iter()
        .map_init(TreeSitterParser::new, |parser, job| {
            let outcome = check_job(parser, &job.script, &job.contract, schema, options)
                .map_err(|e| e.to_string());
            (job.script.display().to_string(), outcome)
        })
        .collect();

    let mut checked = Vec::new();
    let mut failures = Vec::new();
    for (script, outcome) in outcomes {
        match outcome {
            Ok(result) => checked.push(result),
            Err(reason) => failures.push(ScanFailure { script, reason }),
        }
    }
    checked.sort_by(|a, b| a.script.cmp(&b.script));
    failures.sort_by(|a, b| a.script.cmp(&b.script));

    let summary = summarize(&checked);
    ScanResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "scan".to_string(),
        root: root.display().to_string(),
        jobs: checked,
        failures,
        summary,
    }
}

fn summarize(jobs: &[CheckResult]) -> ScanSummary {
    let mut summary = ScanSummary::default();
    for job in jobs {
        summary.checked += 1;
        if job.passed {
            summary.passed += 1;
        } else {
            summary.failed += 1;
        }
        summary.errors += job.errors.len() as u32;
        summary.warnings += job.warnings.len() as u32;
    }
    summary
}
