use ast_grep_core::Node;

/// An HTML attribute: `(name, optional_value)`.
pub(super) type HtmlAttr = (String, Option<String>);

/// Node kinds that produce a [`FlattenNode`](ngmap_core::FlattenNode).
pub(super) const ELEMENT_KINDS: &[&str] = &["element", "script_element", "style_element"];

/// Kinds whose children are walked as if they were the parent's own.
///
/// Error recovery wraps otherwise valid markup in `ERROR` nodes.
pub(super) const TRANSPARENT_KINDS: &[&str] = &["ERROR"];

/// Document wrapper tags. Their subtrees are walked as if the wrapper were
/// absent, so a full document flattens like the fragment it contains.
pub(super) const DOCUMENT_WRAPPER_TAGS: &[&str] = &["html", "head", "body"];

/// Lowercased tag name and attributes from an element's opening tag.
pub(super) fn extract_tag_info<D: ast_grep_core::Doc>(
    node: &Node<D>,
) -> Option<(String, Vec<HtmlAttr>)> {
    let tag = node
        .children()
        .find(|c| matches!(c.kind().as_ref(), "start_tag" | "self_closing_tag"))?;
    let tag_name = tag
        .children()
        .find(|c| c.kind().as_ref() == "tag_name")?
        .text()
        .to_ascii_lowercase();
    Some((tag_name, extract_attrs_from_tag(&tag)))
}

/// All attributes of a tag node. Names are lowercased.
///
/// `class=""` yields `Some("")`, a bare `class` yields `None`.
fn extract_attrs_from_tag<D: ast_grep_core::Doc>(tag_node: &Node<D>) -> Vec<HtmlAttr> {
    tag_node
        .children()
        .filter(|c| c.kind().as_ref() == "attribute")
        .filter_map(|attr| {
            let name = attr
                .children()
                .find(|c| c.kind().as_ref() == "attribute_name")?;
            let value = attr.children().find_map(|c| match c.kind().as_ref() {
                "attribute_value" => Some(c.text().to_string()),
                "quoted_attribute_value" => Some(
                    c.children()
                        .find(|v| v.kind().as_ref() == "attribute_value")
                        .map(|v| v.text().to_string())
                        .unwrap_or_default(),
                ),
                _ => None,
            });
            Some((name.text().to_ascii_lowercase(), value))
        })
        .collect()
}

/// Value of the first `class` attribute. A valueless `class` reads as empty.
pub(super) fn class_value(attrs: &[HtmlAttr]) -> Option<String> {
    attrs
        .iter()
        .find(|(n, _)| n == "class")
        .map(|(_, v)| v.clone().unwrap_or_default())
}
