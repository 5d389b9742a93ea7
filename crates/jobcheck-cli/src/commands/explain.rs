use jobcheck_enforce::codes::{explain_code, FindingCode};
use jobcheck_output::OutputFormatter;

use super::emit;

/// Run `jobcheck explain <code>` — describe a finding code.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool, code: String) -> i32 {
    match explain_code(&code) {
        Some(result) => {
            emit(&formatter.format_explain(&result));
            0
        }
        None => {
            if verbose {
                eprintln!("jobcheck explain: no code or category matches '{}'", code);
            }
            let known: Vec<&str> = FindingCode::ALL.iter().map(|c| c.code()).collect();
            eprintln!("error: unknown finding code: {}", code);
            eprintln!("known codes: {}", known.join(", "));
            2
        }
    }
}
