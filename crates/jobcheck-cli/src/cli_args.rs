use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "jobcheck",
    version,
    about = "Check job scripts against their declared contracts"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print progress details to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Ignore the cached contract schema and fetch it again
    #[arg(long, global = true, env = "JOBCHECK_NO_CACHE")]
    pub no_cache: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check one script against its contract
    Check {
        /// Job script (.js, .mjs, .cjs, .ts, .jsx, .tsx)
        script: PathBuf,
        /// Contract file (default: sibling file with the configured suffix)
        #[arg(long)]
        contract: Option<PathBuf>,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// Check every job under a directory
    Scan {
        /// Directory to scan (default: current directory)
        dir: Option<PathBuf>,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// Validate a contract file against the contract schema
    Validate {
        /// Contract file
        contract: PathBuf,
    },

    /// Explain a finding code (e.g., E005 or missing_output)
    Explain {
        /// Finding code or category
        code: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
