use ngmap_core::{DiagnosticKind, Diagnostics, FlattenNode};
use pretty_assertions::assert_eq;

use super::*;


fn flatten(markup: &str) -> Vec<FlattenNode> {
    let mut diagnostics = Diagnostics::for_file("inline.html");
    flatten_html_str(markup, DEFAULT_MAX_HTML_DEPTH, &mut diagnostics)
}

fn tags(nodes: &[FlattenNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.tag_name.as_str()).collect()
}

fn node(tag: &str, class: Option<&str>) -> FlattenNode {
    FlattenNode::new(tag, class)
}

#[test]
fn div_with_span_child() {
    assert_eq!(
        flatten(r#"<div class="a"><span/></div>"#),
        vec![node("div", Some("a")), node("span", None)]
    );
}

#[test]
fn flattening_is_idempotent() {
    let tree = HtmlTree::parse(include_str!("../../../../tests/fixtures/sample.html"));
    let mut diagnostics = Diagnostics::for_file("sample.html");
    let first = flatten_html_tree(&tree, DEFAULT_MAX_HTML_DEPTH, &mut diagnostics);
    let second = flatten_html_tree(&tree, DEFAULT_MAX_HTML_DEPTH, &mut diagnostics);
    assert_eq!(first, second);
    assert!(diagnostics.is_empty());
}

#[test]
fn depth_guard_stops_descending() {
    let mut diagnostics = Diagnostics::for_file("deep.html");
    let nodes = flatten_html_str(
        "<div><section><p><b>deep</b></p></section></div><footer></footer>",
        2,
        &mut diagnostics,
    );
    assert_eq!(tags(&nodes), vec!["div", "section", "footer"]);
    assert_eq!(diagnostics.count(DiagnosticKind::DepthLimitExceeded), 1);
}

#[test]
fn deep_nesting_within_limit_is_complete() {
    let depth = 200;
    let markup = format!("{}{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let nodes = flatten(&markup);
    assert_eq!(nodes.len(), depth);
}
