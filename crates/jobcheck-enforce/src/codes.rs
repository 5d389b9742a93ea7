//! Stable finding codes and their explanations (`jobcheck explain <code>`).

use crate::types::{ExplainResult, Finding, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingCode {
    MissingHandler,
    SpreadInReturn,
    ComputedKeyInReturn,
    UndeclaredInput,
    MissingOutput,
    UndeclaredOutput,
    UnusedInput,
    UnverifiableOutputs,
}

impl FindingCode {
    pub const ALL: [FindingCode; 8] = [
        FindingCode::MissingHandler,
        FindingCode::SpreadInReturn,
        FindingCode::ComputedKeyInReturn,
        FindingCode::UndeclaredInput,
        FindingCode::MissingOutput,
        FindingCode::UndeclaredOutput,
        FindingCode::UnusedInput,
        FindingCode::UnverifiableOutputs,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            FindingCode::MissingHandler => "E001",
            FindingCode::SpreadInReturn => "E002",
            FindingCode::ComputedKeyInReturn => "E003",
            FindingCode::UndeclaredInput => "E004",
            FindingCode::MissingOutput => "E005",
            FindingCode::UndeclaredOutput => "E006",
            FindingCode::UnusedInput => "W001",
            FindingCode::UnverifiableOutputs => "W002",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            FindingCode::MissingHandler => "missing_handler",
            FindingCode::SpreadInReturn => "spread_in_return",
            FindingCode::ComputedKeyInReturn => "computed_key_in_return",
            FindingCode::UndeclaredInput => "undeclared_input",
            FindingCode::MissingOutput => "missing_output",
            FindingCode::UndeclaredOutput => "undeclared_output",
            FindingCode::UnusedInput => "unused_input",
            FindingCode::UnverifiableOutputs => "unverifiable_outputs",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            FindingCode::UnusedInput | FindingCode::UnverifiableOutputs => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Case-insensitive lookup by code (`e005`) or category (`missing_output`).
    pub fn parse(s: &str) -> Option<FindingCode> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s) || c.category().eq_ignore_ascii_case(s))
    }

    pub fn finding(&self, message: impl Into<String>) -> Finding {
        Finding {
            code: self.code().to_string(),
            severity: self.severity(),
            category: self.category().to_string(),
            message: message.into(),
            field: None,
            line: None,
            fix_hint: None,
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            FindingCode::MissingHandler => "no entry handler found",
            FindingCode::SpreadInReturn => "returned object uses a spread element",
            FindingCode::ComputedKeyInReturn => "returned object uses a computed key",
            FindingCode::UndeclaredInput => "handler reads an input the contract does not declare",
            FindingCode::MissingOutput => "contract declares an output the handler never returns",
            FindingCode::UndeclaredOutput => "handler returns an output the contract does not declare",
            FindingCode::UnusedInput => "contract declares an input the handler never reads",
            FindingCode::UnverifiableOutputs => "outputs cannot be checked because no return is an object literal",
        }
    }

    fn explanation(&self) -> &'static str {
        match self {
            FindingCode::MissingHandler => {
                "The script must `export default` an object literal whose `invoke` property \
                 is a function (method shorthand, function expression, or arrow function). \
                 Without it nothing else can be checked, so this is the only finding reported."
            }
            FindingCode::SpreadInReturn => {
                "Keys merged in with `...` cannot be known without running the script. \
                 The offending return statement contributes no outputs."
            }
            FindingCode::ComputedKeyInReturn => {
                "A key written as `[expr]` is computed at runtime. \
                 The offending return statement contributes no outputs."
            }
            FindingCode::UndeclaredInput => {
                "The handler reads a field of its parameter that the contract's `inputs` \
                 does not list. Callers following the contract will never supply it."
            }
            FindingCode::MissingOutput => {
                "No object literal returned by the handler has this key, \
                 so consumers relying on the contract will not receive it."
            }
            FindingCode::UndeclaredOutput => {
                "A returned object literal has a key the contract's `outputs` does not list."
            }
            FindingCode::UnusedInput => {
                "The contract declares an input that the handler never reads through a \
                 literal property access or destructuring. Computed access such as \
                 `params[key]` is not tracked, so this is advisory."
            }
            FindingCode::UnverifiableOutputs => {
                "Every return passes something other than an object literal (a variable, \
                 a call, an awaited value), so produced keys cannot be read off the source. \
                 Output checks are skipped."
            }
        }
    }

    pub fn fix_hint(&self) -> &'static str {
        match self {
            FindingCode::MissingHandler => "export default { async invoke(params) { ... } }",
            FindingCode::SpreadInReturn | FindingCode::ComputedKeyInReturn => {
                "list every returned key explicitly"
            }
            FindingCode::UndeclaredInput => "declare the field under `inputs` or stop reading it",
            FindingCode::MissingOutput => "return the key or remove it from `outputs`",
            FindingCode::UndeclaredOutput => "declare the key under `outputs` or stop returning it",
            FindingCode::UnusedInput => "remove the input from the contract or read it",
            FindingCode::UnverifiableOutputs => "return an object literal with explicit keys",
        }
    }

    fn example(&self) -> &'static str {
        match self {
            FindingCode::MissingHandler => "module.exports = { invoke }",
            FindingCode::SpreadInReturn => "return { status: 'ok', ...extra };",
            FindingCode::ComputedKeyInReturn => "return { [name]: value };",
            FindingCode::UndeclaredInput => "const region = params.region; // `region` not in inputs",
            FindingCode::MissingOutput => "return { status: 'ok' }; // outputs also declare `target`",
            FindingCode::UndeclaredOutput => "return { status: 'ok', debug: trace };",
            FindingCode::UnusedInput => "inputs: { verbose: ... } // never read",
            FindingCode::UnverifiableOutputs => "return buildResult();",
        }
    }

    pub fn explain(&self) -> ExplainResult {
        ExplainResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "explain".to_string(),
            code: self.code().to_string(),
            severity: self.severity(),
            category: self.category().to_string(),
            summary: self.summary().to_string(),
            explanation: self.explanation().to_string(),
            fix: self.fix_hint().to_string(),
            example: self.example().to_string(),
        }
    }
}

impl std::fmt::Display for FindingCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Explain a code given on the command line.
pub fn explain_code(code: &str) -> Option<ExplainResult> {
    FindingCode::parse(code).map(|c| c.explain())
}
