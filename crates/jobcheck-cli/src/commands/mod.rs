pub mod check;
pub mod completion;
pub mod explain;
pub mod scan;
pub mod validate;

use std::path::PathBuf;

use jobcheck_core::config::JobcheckConfig;
use jobcheck_core::contract::ContractError;
use jobcheck_enforce::engine::CheckError;
use serde_json::Value;

use crate::schema_cache::SchemaResolver;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalOpts {
    pub verbose: bool,
    pub no_cache: bool,
}

/// Config and contract schema for the current directory.
pub struct Workspace {
    pub root: PathBuf,
    pub config: JobcheckConfig,
    pub schema: Value,
}

/// Load `.jobcheck/jobcheck.json` and resolve the contract schema.
/// On failure the error is already reported and the exit code is returned.
pub fn load_workspace(cmd: &str, global: GlobalOpts) -> Result<Workspace, i32> {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("jobcheck {cmd}: failed to get current directory: {e}");
            return Err(2);
        }
    };

    let jobcheck_dir = cwd.join(".jobcheck");
    let config = JobcheckConfig::load(&jobcheck_dir);
    if global.verbose && jobcheck_dir.exists() {
        eprintln!("jobcheck {cmd}: loaded config from {}", jobcheck_dir.display());
    }

    let schema = SchemaResolver::new(&jobcheck_dir, &config.schema)
        .no_cache(global.no_cache)
        .verbose(global.verbose)
        .resolve()
        .map_err(|e| {
            eprintln!("jobcheck {cmd}: {e}");
            2
        })?;

    Ok(Workspace {
        root: cwd,
        config,
        schema,
    })
}

/// 0 = passed, 1 = conformance failure (or warnings under `--strict`).
pub fn exit_code(passed: bool, has_warnings: bool, strict: bool) -> i32 {
    if !passed || (strict && has_warnings) {
        1
    } else {
        0
    }
}

/// Print formatter output to stdout without doubling the trailing newline.
pub fn emit(output: &str) {
    if output.is_empty() {
        return;
    }
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}

/// Report a run-level failure on stderr.
pub fn report_check_error(cmd: &str, script: &str, error: &CheckError) {
    eprintln!("jobcheck {cmd}: {script}: {error}");
    if let CheckError::Contract(ContractError::Schema(violations)) = error {
        for v in violations {
            eprintln!("  {v}");
        }
    }
}
