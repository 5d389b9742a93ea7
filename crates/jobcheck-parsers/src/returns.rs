//! Which output fields does the handler return?
//!
//! Every `return` in the handler body is classified once into a
//! [`ReturnArgument`]. Object literals contribute their keys; anything else
//! marks the shape as dynamic. By default returns inside nested function
//! literals are attributed to the handler as well.

use tree_sitter::Node;

use crate::collector::{Collector, DefectKind, FieldSet, ReturnShape, StructuralDefect};
use crate::handler::HandlerRef;
use crate::syntax::{line_of, named_children, node_text, property_key_name, unwrap_parens, walk};

/// The argument of one return statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnArgument<'t> {
    /// `return;`
    Empty,
    /// `return { ... }` (parentheses ignored).
    Record(Node<'t>),
    /// Any other expression: a name, a call, an `await`, a ternary.
    Dynamic(Node<'t>),
}

impl<'t> ReturnArgument<'t> {
    /// Classify the argument of a `return_statement`.
    pub fn of_statement(statement: Node<'t>) -> Self {
        match named_children(statement).into_iter().next() {
            Some(argument) => Self::of_expression(argument),
            None => ReturnArgument::Empty,
        }
    }

    /// Classify a returned expression, e.g. the body of a concise arrow.
    pub fn of_expression(expression: Node<'t>) -> Self {
        let expression = unwrap_parens(expression);
        if expression.kind() == "object" {
            ReturnArgument::Record(expression)
        } else {
            ReturnArgument::Dynamic(expression)
        }
    }
}

/// Collects the [`ReturnShape`] of a handler.
#[derive(Debug, Clone, Copy)]
pub struct ReturnShapeCollector {
    /// Attribute returns inside nested function literals to the handler.
    pub include_nested: bool,
}

impl Default for ReturnShapeCollector {
    fn default() -> Self {
        Self {
            include_nested: true,
        }
    }
}

impl ReturnShapeCollector {
    pub fn new(include_nested: bool) -> Self {
        Self { include_nested }
    }
}

impl Collector for ReturnShapeCollector {
    type Output = ReturnShape;

    fn collect(&self, handler: &HandlerRef<'_>, source: &[u8]) -> ReturnShape {
        let mut shape = ReturnShape::default();

        if handler.has_expression_body() {
            record(&mut shape, ReturnArgument::of_expression(handler.body), source);
        }

        walk(handler.body, self.include_nested, &mut |node| {
            if node.kind() == "return_statement" {
                record(&mut shape, ReturnArgument::of_statement(node), source);
            }
        });
        shape
    }
}

fn record(shape: &mut ReturnShape, argument: ReturnArgument<'_>, source: &[u8]) {
    match argument {
        ReturnArgument::Empty => {}
        ReturnArgument::Dynamic(expr) => {
            shape.dynamic_return.get_or_insert(line_of(expr));
        }
        ReturnArgument::Record(object) => match record_keys(object, source) {
            Ok(keys) => shape.produced.extend(keys),
            Err(defect) => shape.defects.push(defect),
        },
    }
}

/// Keys listed directly in an object literal, or the first element that
/// prevents reading them.
fn record_keys(object: Node<'_>, source: &[u8]) -> Result<FieldSet, StructuralDefect> {
    let mut keys = FieldSet::new();
    for element in named_children(object) {
        match element.kind() {
            "spread_element" => {
                return Err(StructuralDefect {
                    kind: DefectKind::SpreadInReturn,
                    line: line_of(element),
                });
            }
            "shorthand_property_identifier" => {
                keys.insert(node_text(element, source), line_of(element));
            }
            "pair" | "method_definition" => {
                let Some(key) = element
                    .child_by_field_name("key")
                    .or_else(|| element.child_by_field_name("name"))
                else {
                    continue;
                };
                match property_key_name(key, source) {
                    Some(name) => keys.insert(name, line_of(key)),
                    None => {
                        return Err(StructuralDefect {
                            kind: DefectKind::ComputedKeyInReturn,
                            line: line_of(key),
                        });
                    }
                }
            }
            _ => {}
        }
    }
    Ok(keys)
}
