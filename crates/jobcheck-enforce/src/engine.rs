//! One job, end to end: parse → locate → collect → compare.

use std::path::Path;

use jobcheck_core::config::JobcheckConfig;
use jobcheck_core::contract::{load_contract, ContractError};
use jobcheck_core::types::Contract;
use jobcheck_parsers::collector::Collector;
use jobcheck_parsers::handler::locate_handler;
use jobcheck_parsers::params::ParameterUsageCollector;
use jobcheck_parsers::returns::ReturnShapeCollector;
use jobcheck_parsers::treesitter::{ParseError, ParsedSource, TreeSitterParser};
use serde_json::Value;

use crate::comparator::{compare, handler_not_found};
use crate::types::{CheckInfo, CheckResult, ConformanceResult};

/// Knobs for a single analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub handler_name: String,
    pub include_nested_returns: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            handler_name: "invoke".to_string(),
            include_nested_returns: true,
        }
    }
}

impl From<&JobcheckConfig> for AnalysisOptions {
    fn from(config: &JobcheckConfig) -> Self {
        Self {
            handler_name: config.handler_name.clone(),
            include_nested_returns: config.analysis.include_nested_returns,
        }
    }
}

/// The comparison result plus what the collectors saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub result: ConformanceResult,
    pub info: CheckInfo,
}

/// Errors that stop a job from being analysed at all.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Contract(#[from] ContractError),
}

/// Analyse a parsed script against `contract`.
///
/// Pure and deterministic: no I/O, no shared state. A missing handler is a
/// result, not an error.
pub fn analyze(parsed: &ParsedSource, contract: &Contract, options: &AnalysisOptions) -> Analysis {
    let source = parsed.source();
    let handler = match locate_handler(parsed.root(), source, &options.handler_name) {
        Ok(h) => h,
        Err(e) => {
            return Analysis {
                result: handler_not_found(&e, &options.handler_name),
                info: CheckInfo::default(),
            };
        }
    };

    let usage = ParameterUsageCollector.collect(&handler, source);
    let shape = ReturnShapeCollector::new(options.include_nested_returns).collect(&handler, source);

    let info = CheckInfo {
        handler_line: Some(handler.line),
        inputs_used: usage.names().map(String::from).collect(),
        outputs_produced: shape.produced.names().map(String::from).collect(),
        dynamic_return: shape.has_dynamic_return(),
    };
    Analysis {
        result: compare(contract, &usage, &shape),
        info,
    }
}

/// Parse `source` as `language` and analyse it.
pub fn analyze_source(
    language: &str,
    source: &str,
    contract: &Contract,
    options: &AnalysisOptions,
) -> Result<Analysis, ParseError> {
    let parsed = TreeSitterParser::new().parse_source(language, source)?;
    Ok(analyze(&parsed, contract, options))
}

/// Load the contract, parse the script, and build the reportable result.
pub fn check_job(
    parser: &mut TreeSitterParser,
    script: &Path,
    contract_path: &Path,
    schema: &Value,
    options: &AnalysisOptions,
) -> Result<CheckResult, CheckError> {
    let contract = load_contract(contract_path, schema)?;
    let parsed = parser.parse_path(script)?;
    let analysis = analyze(&parsed, &contract, options);
    Ok(to_check_result(script, contract_path, analysis))
}

pub(crate) fn to_check_result(script: &Path, contract: &Path, analysis: Analysis) -> CheckResult {
    let Analysis { result, info } = analysis;
    CheckResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "check".to_string(),
        script: script.display().to_string(),
        contract: contract.display().to_string(),
        status: result.status().to_string(),
        passed: result.passed,
        errors: result.errors,
        warnings: result.warnings,
        info,
    }
}
