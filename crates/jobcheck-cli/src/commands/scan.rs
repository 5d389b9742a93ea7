use std::path::PathBuf;

use jobcheck_enforce::engine::AnalysisOptions;
use jobcheck_enforce::scan::scan_jobs;
use jobcheck_output::OutputFormatter;
use jobcheck_parsers::walker::JobWalker;

use super::{emit, exit_code, load_workspace, GlobalOpts};

/// Run `jobcheck scan [dir]` — check every (script, contract) pair under a directory.
pub fn run(
    formatter: &dyn OutputFormatter,
    global: GlobalOpts,
    dir: Option<PathBuf>,
    strict: bool,
) -> i32 {
    let ws = match load_workspace("scan", global) {
        Ok(ws) => ws,
        Err(code) => return code,
    };

    let root = dir.unwrap_or_else(|| ws.root.clone());
    if !root.is_dir() {
        eprintln!("jobcheck scan: {} is not a directory", root.display());
        return 2;
    }

    let walker = match JobWalker::new(&root, &ws.config.contract_suffix)
        .with_ignore_patterns(&ws.config.ignore_patterns)
    {
        Ok(w) => w,
        Err(e) => {
            eprintln!("jobcheck scan: {e}");
            return 2;
        }
    };
    let jobs = walker.walk();
    if global.verbose {
        eprintln!(
            "jobcheck scan: found {} job(s) under {}",
            jobs.len(),
            root.display()
        );
    }

    let options = AnalysisOptions::from(&ws.config);
    let result = scan_jobs(&root, &jobs, &ws.schema, &options);
    if global.verbose {
        for failure in &result.failures {
            eprintln!("jobcheck scan: {}: {}", failure.script, failure.reason);
        }
    }
    emit(&formatter.format_scan(&result));

    // Jobs that could not be analysed at all are a run-level failure.
    if !result.failures.is_empty() {
        return 2;
    }
    exit_code(
        result.summary.failed == 0,
        result.summary.warnings > 0,
        strict || ws.config.analysis.strict,
    )
}
