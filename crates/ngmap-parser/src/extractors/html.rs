//! HTML Flattener.
//!
//! Reduces a parsed HTML fragment or document to the ordered list of elements
//! it renders. Every element (including `<script>` and `<style>`) becomes one
//! [`FlattenNode`], immediately followed by the nodes of its subtree. Text,
//! comments and doctypes produce nothing. `<html>`, `<head>` and `<body>`
//! are not emitted, but their children are. Implied elements such as
//! `<tbody>` are never synthesized.

use ast_grep_core::Node;
use ngmap_core::{DiagnosticKind, Diagnostics, FlattenNode};

use crate::parser::HtmlTree;

mod helpers;

use helpers::{
    DOCUMENT_WRAPPER_TAGS, ELEMENT_KINDS, TRANSPARENT_KINDS, class_value, extract_tag_info,
};

/// Default element nesting depth below which the flattener stops descending.
pub const DEFAULT_MAX_HTML_DEPTH: usize = 256;

/// Flatten every element under `root` in pre-order.
///
/// Elements nested more than `max_depth` levels deep are not visited; the
/// first time that happens a [`DiagnosticKind::DepthLimitExceeded`] is
/// reported.
pub fn flatten_html<D: ast_grep_core::Doc>(
    root: &Node<D>,
    max_depth: usize,
    diagnostics: &mut Diagnostics,
) -> Vec<FlattenNode> {
    let mut flattened = Vec::new();
    let mut truncated = false;

    let mut stack: Vec<(Node<D>, usize)> = root.children().map(|c| (c, 1)).collect();
    stack.reverse();

    while let Some((node, depth)) = stack.pop() {
        let kind = node.kind();
        let child_depth = if ELEMENT_KINDS.contains(&kind.as_ref()) {
            let tag = extract_tag_info(&node);
            if tag
                .as_ref()
                .is_some_and(|(name, _)| DOCUMENT_WRAPPER_TAGS.contains(&name.as_str()))
            {
                depth
            } else if depth > max_depth {
                truncated = true;
                continue;
            } else {
                if let Some((tag_name, attrs)) = tag {
                    flattened.push(FlattenNode::new(tag_name, class_value(&attrs).as_deref()));
                }
                depth + 1
            }
        } else if TRANSPARENT_KINDS.contains(&kind.as_ref()) {
            depth
        } else {
            continue;
        };

        let start = stack.len();
        stack.extend(node.children().map(|c| (c, child_depth)));
        stack[start..].reverse();
    }

    if truncated {
        diagnostics.report(
            DiagnosticKind::DepthLimitExceeded,
            format!("elements nested deeper than {max_depth} levels were skipped"),
        );
    }
    flattened
}

/// Flatten a parsed [`HtmlTree`].
pub fn flatten_html_tree(
    tree: &HtmlTree,
    max_depth: usize,
    diagnostics: &mut Diagnostics,
) -> Vec<FlattenNode> {
    flatten_html(&tree.root(), max_depth, diagnostics)
}

/// Parse `markup` as a fragment and flatten it.
pub fn flatten_html_str(
    markup: &str,
    max_depth: usize,
    diagnostics: &mut Diagnostics,
) -> Vec<FlattenNode> {
    flatten_html_tree(&HtmlTree::parse(markup), max_depth, diagnostics)
}

#[cfg(test)]
mod tests;
