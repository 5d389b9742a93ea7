//! Entry handler location.
//!
//! A job script exposes its handler as a function-valued property of the
//! object literal it default-exports:
//!
//! ```js
//! export default {
//!   async invoke(params) { ... },
//! };
//! ```

use tree_sitter::Node;

use crate::syntax::{
    has_token, is_function_value, line_of, named_children, node_text, property_key_name,
    unwrap_parens,
};

/// The located entry handler: a function node with its parameter list and body.
#[derive(Debug, Clone, Copy)]
pub struct HandlerRef<'t> {
    /// The function node itself (function expression, arrow, or method).
    pub function: Node<'t>,
    /// `formal_parameters`, or a bare `identifier` for `x => ...` arrows.
    pub parameters: Option<Node<'t>>,
    /// A `statement_block`, or the expression body of a concise arrow.
    pub body: Node<'t>,
    /// Line of the property that holds the handler.
    pub line: u32,
}

impl<'t> HandlerRef<'t> {
    /// True when the body is an expression rather than a block (`() => ({ ... })`).
    pub fn has_expression_body(&self) -> bool {
        self.body.kind() != "statement_block"
    }
}

/// Why no handler could be found. Every variant is reported as the same
/// fatal structural error; the variant only refines the hint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    #[error("the module has no default export")]
    NoDefaultExport,
    #[error("the default export (line {line}) is {kind}, not an object literal")]
    NotRecordLiteral { kind: String, line: u32 },
    #[error("the exported object has no `{name}` property")]
    MissingHandler { name: String },
    #[error("`{name}` (line {line}) is {kind}, not a function")]
    NotAFunction { name: String, kind: String, line: u32 },
}

/// Find the handler named `handler_name` on the default-exported object literal.
pub fn locate_handler<'t>(
    root: Node<'t>,
    source: &[u8],
    handler_name: &str,
) -> Result<HandlerRef<'t>, LocateError> {
    let exported = default_export_value(root).ok_or(LocateError::NoDefaultExport)?;
    let exported = unwrap_parens(exported);
    if exported.kind() != "object" {
        return Err(LocateError::NotRecordLiteral {
            kind: describe(exported),
            line: line_of(exported),
        });
    }

    // Later keys override earlier ones at runtime, so the last match wins.
    let property = named_children(exported)
        .into_iter()
        .filter(|prop| property_name(*prop, source).as_deref() == Some(handler_name))
        .last()
        .ok_or_else(|| LocateError::MissingHandler {
            name: handler_name.to_string(),
        })?;

    let not_a_function = |kind: String, line: u32| LocateError::NotAFunction {
        name: handler_name.to_string(),
        kind,
        line,
    };

    match property.kind() {
        "pair" => {
            let value = property
                .child_by_field_name("value")
                .map(unwrap_parens)
                .ok_or_else(|| not_a_function("empty".to_string(), line_of(property)))?;
            if !is_function_value(value) {
                return Err(not_a_function(describe(value), line_of(value)));
            }
            handler_from_function(value, line_of(property))
                .ok_or_else(|| not_a_function(describe(value), line_of(value)))
        }
        "method_definition" => {
            if has_token(property, "get") || has_token(property, "set") {
                return Err(not_a_function("an accessor".to_string(), line_of(property)));
            }
            if has_token(property, "*") {
                return Err(not_a_function("a generator".to_string(), line_of(property)));
            }
            handler_from_function(property, line_of(property))
                .ok_or_else(|| not_a_function(describe(property), line_of(property)))
        }
        _ => Err(not_a_function(describe(property), line_of(property))),
    }
}

/// The expression after `export default`, or the declaration for
/// `export default function/class`.
fn default_export_value(root: Node<'_>) -> Option<Node<'_>> {
    named_children(root)
        .into_iter()
        .filter(|n| n.kind() == "export_statement" && has_token(*n, "default"))
        .find_map(|n| {
            n.child_by_field_name("value")
                .or_else(|| n.child_by_field_name("declaration"))
        })
}

fn property_name(prop: Node<'_>, source: &[u8]) -> Option<String> {
    match prop.kind() {
        "pair" | "method_definition" => {
            let key = prop
                .child_by_field_name("key")
                .or_else(|| prop.child_by_field_name("name"))?;
            property_key_name(key, source)
        }
        "shorthand_property_identifier" => Some(node_text(prop, source).to_string()),
        _ => None,
    }
}

fn handler_from_function(function: Node<'_>, line: u32) -> Option<HandlerRef<'_>> {
    let body = function.child_by_field_name("body")?;
    let parameters = function
        .child_by_field_name("parameters")
        .or_else(|| function.child_by_field_name("parameter"));
    Some(HandlerRef {
        function,
        parameters,
        body,
        line,
    })
}

fn describe(node: Node<'_>) -> String {
    let article = match node.kind().chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    };
    format!("{article} {}", node.kind().replace('_', " "))
}
