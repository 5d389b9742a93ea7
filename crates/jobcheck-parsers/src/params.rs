//! Which input fields does the handler read?
//!
//! The first parameter is resolved once into a [`ParameterBinding`]:
//!
//! - `invoke({ a, b })`: the destructured keys are the whole answer.
//! - `invoke(params)`: the body is searched for `params.field` and for
//!   `const { field } = params`. Parentheses and the TypeScript wrappers
//!   `as`, `!` and `satisfies` around `params` are seen through. Nested
//!   functions whose own parameters rebind the name are not searched.
//!
//! Computed access (`params[key]`, including `params['field']`) is not
//! tracked, so the result under-approximates what a handler may read.

use tree_sitter::Node;

use crate::collector::{Collector, UsageSet};
use crate::handler::HandlerRef;
use crate::syntax::{
    is_function_literal, line_of, named_children, node_text, property_key_name, unwrap_expression,
    walk_pruned,
};

/// How the handler binds its first parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterBinding {
    /// The handler takes no parameters.
    Absent,
    /// `({ a, b: renamed, c = 1 })`: the keys read at the binding site.
    Destructured(UsageSet),
    /// `(params)`: a plain name whose field accesses must be searched for.
    Aliased(String),
    /// Rest parameters, array patterns, and other shapes that name no fields.
    Opaque,
}

impl ParameterBinding {
    pub fn resolve(handler: &HandlerRef<'_>, source: &[u8]) -> Self {
        let Some(params) = handler.parameters else {
            return ParameterBinding::Absent;
        };
        if params.kind() == "identifier" {
            return ParameterBinding::Aliased(node_text(params, source).to_string());
        }
        let Some(first) = named_children(params).into_iter().next() else {
            return ParameterBinding::Absent;
        };
        match binding_pattern(first).kind() {
            "object_pattern" => {
                let mut names = UsageSet::new();
                destructured_keys(binding_pattern(first), source, &mut names);
                ParameterBinding::Destructured(names)
            }
            "identifier" => {
                ParameterBinding::Aliased(node_text(binding_pattern(first), source).to_string())
            }
            _ => ParameterBinding::Opaque,
        }
    }
}

/// Strip TypeScript parameter wrappers and default values down to the pattern.
fn binding_pattern(param: Node<'_>) -> Node<'_> {
    let pattern = match param.kind() {
        "required_parameter" | "optional_parameter" => {
            param.child_by_field_name("pattern").unwrap_or(param)
        }
        _ => param,
    };
    if pattern.kind() == "assignment_pattern" {
        pattern.child_by_field_name("left").unwrap_or(pattern)
    } else {
        pattern
    }
}

/// Add the keys named by an object destructuring pattern.
///
/// `{ a }`, `{ a: alias }`, `{ a = 1 }`, and `{ a: { nested } }` all read `a`.
/// Rest elements and computed keys name nothing.
fn destructured_keys(pattern: Node<'_>, source: &[u8], names: &mut UsageSet) {
    for element in named_children(pattern) {
        let key = match element.kind() {
            "shorthand_property_identifier_pattern" => Some(element),
            "pair_pattern" => element.child_by_field_name("key"),
            "object_assignment_pattern" => element.child_by_field_name("left"),
            _ => None,
        };
        if let Some(key) = key {
            if let Some(name) = property_key_name(key, source) {
                names.insert(name, line_of(key));
            }
        }
    }
}

/// Collects the [`UsageSet`] of a handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterUsageCollector;

impl Collector for ParameterUsageCollector {
    type Output = UsageSet;

    fn collect(&self, handler: &HandlerRef<'_>, source: &[u8]) -> UsageSet {
        match ParameterBinding::resolve(handler, source) {
            ParameterBinding::Destructured(names) => names,
            ParameterBinding::Aliased(alias) => alias_usage(handler.body, &alias, source),
            ParameterBinding::Absent | ParameterBinding::Opaque => UsageSet::new(),
        }
    }
}

/// True if a pattern introduces a binding called `name`.
fn pattern_binds(pattern: Node<'_>, name: &str, source: &[u8]) -> bool {
    match pattern.kind() {
        "identifier" | "shorthand_property_identifier_pattern" => {
            node_text(pattern, source) == name
        }
        "pair_pattern" => pattern
            .child_by_field_name("value")
            .is_some_and(|value| pattern_binds(value, name, source)),
        "object_assignment_pattern" | "assignment_pattern" => pattern
            .child_by_field_name("left")
            .is_some_and(|left| pattern_binds(left, name, source)),
        "required_parameter" | "optional_parameter" => {
            pattern_binds(binding_pattern(pattern), name, source)
        }
        "object_pattern" | "array_pattern" | "rest_pattern" => named_children(pattern)
            .into_iter()
            .any(|child| pattern_binds(child, name, source)),
        _ => false,
    }
}

/// True if a nested function's parameters shadow `name`.
fn rebinds(function: Node<'_>, name: &str, source: &[u8]) -> bool {
    if let Some(param) = function.child_by_field_name("parameter") {
        return pattern_binds(param, name, source);
    }
    function
        .child_by_field_name("parameters")
        .is_some_and(|params| {
            named_children(params)
                .into_iter()
                .any(|param| pattern_binds(param, name, source))
        })
}

fn alias_usage(body: Node<'_>, alias: &str, source: &[u8]) -> UsageSet {
    let is_alias = |n: Node<'_>| {
        let n = unwrap_expression(n);
        n.kind() == "identifier" && node_text(n, source) == alias
    };
    let in_scope = |n: Node<'_>| !(is_function_literal(n) && rebinds(n, alias, source));
    let mut names = UsageSet::new();
    walk_pruned(body, &in_scope, &mut |node| match node.kind() {
        // const { a, b } = params;
        "variable_declarator" => {
            let pattern = node.child_by_field_name("name");
            let value = node.child_by_field_name("value");
            if let (Some(pattern), Some(value)) = (pattern, value) {
                if pattern.kind() == "object_pattern" && is_alias(value) {
                    destructured_keys(pattern, source, &mut names);
                }
            }
        }
        // params.a, params?.a, (params as P).a
        "member_expression" => {
            let object = node.child_by_field_name("object");
            let property = node.child_by_field_name("property");
            if let (Some(object), Some(property)) = (object, property) {
                if is_alias(object) && property.kind() == "property_identifier" {
                    names.insert(node_text(property, source), line_of(property));
                }
            }
        }
        _ => {}
    });
    names
}
