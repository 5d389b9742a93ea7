//! Small helpers over tree-sitter nodes shared by the locator and collectors.
//!
//! Only the handful of JavaScript/TypeScript node kinds the analysis pattern
//! matches on are interpreted here; everything else is walked through opaquely.

use tree_sitter::Node;

pub(crate) fn node_text<'a>(node: Node<'_>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// 1-based line of the node's first character.
pub(crate) fn line_of(node: Node<'_>) -> u32 {
    node.start_position().row as u32 + 1
}

/// Named children, skipping comments.
pub(crate) fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|c| c.kind() != "comment")
        .collect();
    children
}

/// True if the node has an anonymous child token of the given kind (`default`, `async`, `get`).
pub(crate) fn has_token(node: Node<'_>, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|c| !c.is_named() && c.kind() == token);
    found
}

/// Function-valued expressions a handler may be written as.
pub(crate) fn is_function_value(node: Node<'_>) -> bool {
    matches!(node.kind(), "function_expression" | "function" | "arrow_function")
}

/// Anything that opens a new function body.
pub(crate) fn is_function_literal(node: Node<'_>) -> bool {
    matches!(
        node.kind(),
        "function_expression"
            | "function"
            | "arrow_function"
            | "generator_function"
            | "function_declaration"
            | "generator_function_declaration"
            | "method_definition"
    )
}

/// Strip redundant parentheses: `((x))` -> `x`.
pub(crate) fn unwrap_parens(mut node: Node<'_>) -> Node<'_> {
    while node.kind() == "parenthesized_expression" {
        match named_children(node).into_iter().next() {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Strip wrappers that leave the value unchanged: parentheses, `x as T`,
/// `x!`, and `x satisfies T`.
pub(crate) fn unwrap_expression(mut node: Node<'_>) -> Node<'_> {
    while matches!(
        node.kind(),
        "parenthesized_expression" | "as_expression" | "non_null_expression" | "satisfies_expression"
    ) {
        match named_children(node).into_iter().next() {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// The literal name of a property key, or `None` for computed keys.
///
/// Handles identifier keys, quoted string keys, and numeric keys.
pub(crate) fn property_key_name(key: Node<'_>, source: &[u8]) -> Option<String> {
    match key.kind() {
        "property_identifier"
        | "identifier"
        | "shorthand_property_identifier"
        | "shorthand_property_identifier_pattern"
        | "number" => Some(node_text(key, source).to_string()),
        "string" => {
            let raw = node_text(key, source);
            let inner = raw
                .strip_prefix(['"', '\''])
                .and_then(|s| s.strip_suffix(['"', '\'']))
                .unwrap_or(raw);
            Some(inner.to_string())
        }
        _ => None,
    }
}

/// Visit `node` and every named descendant in source order.
///
/// With `into_functions == false` nested function literals are not entered,
/// so only the statements belonging to the enclosing function are visited.
pub(crate) fn walk<'t, F>(node: Node<'t>, into_functions: bool, visit: &mut F)
where
    F: FnMut(Node<'t>),
{
    walk_pruned(
        node,
        &|child| into_functions || !is_function_literal(child),
        visit,
    );
}

/// Like [`walk`], but a child subtree is skipped entirely when `enter`
/// rejects it.
pub(crate) fn walk_pruned<'t, P, F>(node: Node<'t>, enter: &P, visit: &mut F)
where
    P: Fn(Node<'t>) -> bool,
    F: FnMut(Node<'t>),
{
    visit(node);
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.named_children(&mut cursor).collect();
    for child in children {
        if enter(child) {
            walk_pruned(child, enter, visit);
        }
    }
}
