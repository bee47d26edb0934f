//! Shared tree helpers used by every extractor.
//!
//! All searches go through [`search`], a single iterative pre-order walk
//! parameterized by the node kinds to match and a projection from a matched
//! node to the caller's result type.

use ast_grep_core::Node;

/// Delimiters stripped from string and template literals.
const DELIMITERS: &[char] = &['\'', '"', '`'];

/// Kinds that can act as the factory function of a DI array.
pub(crate) const FUNCTION_KINDS: &[&str] = &["arrow_function", "function_expression", "function"];

/// Walk the descendants of `node` in document order and project every node
/// whose kind is in `kinds`.
///
/// `node` itself is not tested. Matching nodes are still descended into, so
/// nested matches are reported after their ancestor.
pub(crate) fn search<'r, D, T, F>(node: &Node<'r, D>, kinds: &[&str], mut project: F) -> Vec<T>
where
    D: ast_grep_core::Doc,
    F: FnMut(&Node<'r, D>) -> Option<T>,
{
    let mut found = Vec::new();
    let mut stack: Vec<Node<'r, D>> = node.children().collect();
    stack.reverse();

    while let Some(current) = stack.pop() {
        if kinds.contains(&current.kind().as_ref())
            && let Some(item) = project(&current)
        {
            found.push(item);
        }
        let start = stack.len();
        stack.extend(current.children());
        stack[start..].reverse();
    }
    found
}

/// Every descendant of `node` whose kind is in `kinds`, in document order.
pub(crate) fn find_nodes_of_kind<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
    kinds: &[&str],
) -> Vec<Node<'r, D>> {
    search(node, kinds, |n| Some(n.clone()))
}

/// Named children, skipping punctuation and comments.
pub(crate) fn named_children<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Vec<Node<'r, D>> {
    node.children()
        .filter(|c| c.is_named() && c.kind().as_ref() != "comment")
        .collect()
}

/// First named child, skipping comments.
pub(crate) fn first_named_child<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
) -> Option<Node<'r, D>> {
    node.children()
        .find(|c| c.is_named() && c.kind().as_ref() != "comment")
}

/// Remove exactly one matching quote or backtick from each end of `text`.
///
/// Text that is not wrapped in a matching delimiter pair is returned as is.
pub(crate) fn strip_delimiters(text: &str) -> &str {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && DELIMITERS.contains(&first) => {
            &text[1..text.len() - 1]
        }
        _ => text,
    }
}

/// Text of a property key, with quotes removed from string keys.
///
/// Computed keys (`[expr]`) have no static name and return `None`.
fn property_key_name<D: ast_grep_core::Doc>(key: &Node<D>) -> Option<String> {
    match key.kind().as_ref() {
        "property_identifier" | "identifier" | "number" => Some(key.text().to_string()),
        "string" => Some(strip_delimiters(&key.text()).to_string()),
        _ => None,
    }
}

/// Value of the first top-level property named `name` in an object literal.
///
/// Shorthand properties (`{ template }`) return the shorthand identifier node,
/// which reads as a bare identifier reference. Nested objects are not searched.
pub(crate) fn find_property<'r, D: ast_grep_core::Doc>(
    object: &Node<'r, D>,
    name: &str,
) -> Option<Node<'r, D>> {
    for child in object.children() {
        match child.kind().as_ref() {
            "pair" => {
                let Some(key) = child.field("key") else {
                    continue;
                };
                if property_key_name(&key).as_deref() == Some(name) {
                    return child.field("value");
                }
            }
            "shorthand_property_identifier" if child.text() == name => {
                return Some(child);
            }
            _ => {}
        }
    }
    None
}

/// `(key, value)` pairs of an object literal in source order.
pub(crate) fn object_entries<'r, D: ast_grep_core::Doc>(
    object: &Node<'r, D>,
) -> Vec<(String, Node<'r, D>)> {
    object
        .children()
        .filter(|c| c.kind().as_ref() == "pair")
        .filter_map(|pair| {
            let key = property_key_name(&pair.field("key")?)?;
            Some((key, pair.field("value")?))
        })
        .collect()
}

/// Static text of a plain string literal, delimiters removed.
pub(crate) fn string_literal_value<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    (node.kind().as_ref() == "string").then(|| strip_delimiters(&node.text()).to_string())
}
