use std::path::PathBuf;

use jobcheck_enforce::engine::{check_job, AnalysisOptions};
use jobcheck_output::OutputFormatter;
use jobcheck_parsers::treesitter::TreeSitterParser;
use jobcheck_parsers::walker::contract_path_for;

use super::{emit, exit_code, load_workspace, report_check_error, GlobalOpts};

/// Run `jobcheck check <script>` — check one script against its contract.
pub fn run(
    formatter: &dyn OutputFormatter,
    global: GlobalOpts,
    script: PathBuf,
    contract: Option<PathBuf>,
    strict: bool,
) -> i32 {
    let ws = match load_workspace("check", global) {
        Ok(ws) => ws,
        Err(code) => return code,
    };

    let contract = contract.unwrap_or_else(|| contract_path_for(&script, &ws.config.contract_suffix));
    if global.verbose {
        eprintln!(
            "jobcheck check: {} against {}",
            script.display(),
            contract.display()
        );
    }

    let options = AnalysisOptions::from(&ws.config);
    let mut parser = TreeSitterParser::new();
    match check_job(&mut parser, &script, &contract, &ws.schema, &options) {
        Ok(result) => {
            if global.verbose {
                eprintln!(
                    "jobcheck check: {} error(s), {} warning(s)",
                    result.errors.len(),
                    result.warnings.len()
                );
            }
            emit(&formatter.format_check(&result));
            exit_code(
                result.passed,
                !result.warnings.is_empty(),
                strict || ws.config.analysis.strict,
            )
        }
        Err(e) => {
            report_check_error("check", &script.display().to_string(), &e);
            2
        }
    }
}
