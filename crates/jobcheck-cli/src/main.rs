//! jobcheck CLI — static conformance checking of job scripts.
//!
//! This binary provides the `jobcheck` command with subcommands for checking
//! a single script, scanning a directory of jobs, validating contracts, and
//! explaining finding codes. See `jobcheck --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod schema_cache;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn jobcheck_output::OutputFormatter> = if cli.json {
        Box::new(jobcheck_output::json::JsonFormatter)
    } else {
        Box::new(jobcheck_output::human::HumanFormatter)
    };

    let global = commands::GlobalOpts {
        verbose: cli.verbose,
        no_cache: cli.no_cache,
    };

    let exit_code = match cli.command {
        Commands::Check {
            script,
            contract,
            strict,
        } => commands::check::run(&*formatter, global, script, contract, strict),
        Commands::Scan { dir, strict } => commands::scan::run(&*formatter, global, dir, strict),
        Commands::Validate { contract } => commands::validate::run(&*formatter, global, contract),
        Commands::Explain { code } => commands::explain::run(&*formatter, global.verbose, code),
        Commands::Completion { shell } => commands::completion::run(shell),
    };

    std::process::exit(exit_code);
}
