use jobcheck_core::contract::{embedded_schema, parse_contract};
use jobcheck_core::types::Contract;
use jobcheck_enforce::engine::{analyze_source, Analysis, AnalysisOptions};

/// Build a contract declaring `inputs` and `outputs` as strings.
pub fn contract(inputs: &[&str], outputs: &[&str]) -> Contract {
    let fields = |names: &[&str]| {
        names
            .iter()
            .map(|n| format!(r#""{n}": {{ "type": "string", "description": "" }}"#))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let text = format!(
        r#"{{ "name": "job", "description": "", "inputs": {{ {} }}, "outputs": {{ {} }} }}"#,
        fields(inputs),
        fields(outputs)
    );
    parse_contract(&text, &embedded_schema()).unwrap()
}

pub fn check_js(source: &str, contract: &Contract) -> Analysis {
    check_with(source, contract, &AnalysisOptions::default())
}

pub fn check_with(source: &str, contract: &Contract, options: &AnalysisOptions) -> Analysis {
    analyze_source("javascript", source, contract, options).unwrap()
}
