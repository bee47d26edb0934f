//! Template Resolver: turns the value of a `template` property into
//! [`TemplateSpec`]s.
//!
//! The value node is first classified into a [`TemplateValue`] and then
//! dispatched. Identifier references go through the file's [`ImportIndex`];
//! unresolvable or unsupported values are reported on the file's
//! [`Diagnostics`] and produce no spec.

use ast_grep_core::Node;
use ngmap_core::{DeclarationKind, DiagnosticKind, Diagnostics, TemplateSpec};

use super::helpers::{
    FUNCTION_KINDS, find_nodes_of_kind, find_property, first_named_child, named_children,
    object_entries, strip_delimiters,
};
use super::imports::ImportIndex;

/// Shape of a template value.
pub enum TemplateValue<'r, D: ast_grep_core::Doc> {
    /// `template: importedTemplate`
    Identifier(Node<'r, D>),
    /// `template: ['dep', (dep) => { return tpl; }]`; holds the factory.
    DiArrayFactory(Node<'r, D>),
    /// `` template: `<div>${x}</div>` ``
    TemplateLiteral(Node<'r, D>),
    /// `template: '<div></div>'`
    StringLiteral(Node<'r, D>),
    Unknown(Node<'r, D>),
}

impl<'r, D: ast_grep_core::Doc> TemplateValue<'r, D> {
    /// Classify the value assigned to a `template` property.
    #[must_use]
    pub fn classify(value: &Node<'r, D>) -> Self {
        match value.kind().as_ref() {
            "identifier" | "shorthand_property_identifier" => Self::Identifier(value.clone()),
            "template_string" => Self::TemplateLiteral(value.clone()),
            "string" => Self::StringLiteral(value.clone()),
            "array" => match named_children(value).pop() {
                Some(last) if FUNCTION_KINDS.contains(&last.kind().as_ref()) => {
                    Self::DiArrayFactory(last)
                }
                _ => Self::Unknown(value.clone()),
            },
            _ => Self::Unknown(value.clone()),
        }
    }
}

/// Resolve one template value into zero or more specs.
pub fn resolve_template_value<D: ast_grep_core::Doc>(
    value: &Node<D>,
    imports: &ImportIndex,
    diagnostics: &mut Diagnostics,
) -> Vec<TemplateSpec> {
    match TemplateValue::classify(value) {
        TemplateValue::Identifier(id) => resolve_identifier(&id, imports, diagnostics)
            .into_iter()
            .collect(),
        TemplateValue::DiArrayFactory(factory) => {
            factory_return_identifiers(&factory)
                .iter()
                .filter_map(|id| resolve_identifier(id, imports, diagnostics))
                .collect()
        }
        TemplateValue::TemplateLiteral(literal) | TemplateValue::StringLiteral(literal) => {
            vec![TemplateSpec::InlineString(
                strip_delimiters(&literal.text()).to_string(),
            )]
        }
        TemplateValue::Unknown(node) => {
            let pos = node.start_pos();
            diagnostics.report(
                DiagnosticKind::UnknownTemplateShape,
                format!(
                    "unsupported template value `{}` at {}:{}",
                    node.kind(),
                    pos.line() + 1,
                    pos.column(&node) + 1
                ),
            );
            Vec::new()
        }
    }
}

/// Templates of a declaration's configuration object.
///
/// Only the first top-level `template` property is read. For state
/// declarations without one, and with `include_views` set, each object in
/// `views` contributes its own first `template` in source order.
pub fn extract_templates<D: ast_grep_core::Doc>(
    config: &Node<D>,
    kind: DeclarationKind,
    imports: &ImportIndex,
    include_views: bool,
    diagnostics: &mut Diagnostics,
) -> Vec<TemplateSpec> {
    if let Some(value) = find_property(config, "template") {
        return resolve_template_value(&value, imports, diagnostics);
    }
    if kind != DeclarationKind::State || !include_views {
        return Vec::new();
    }
    let Some(views) = find_property(config, "views").filter(|v| v.kind().as_ref() == "object")
    else {
        return Vec::new();
    };

    let mut specs = Vec::new();
    for (name, view) in object_entries(&views) {
        if view.kind().as_ref() != "object" {
            tracing::debug!(view = %name, "view is not an object literal, skipped");
            continue;
        }
        if let Some(value) = find_property(&view, "template") {
            specs.extend(resolve_template_value(&value, imports, diagnostics));
        }
    }
    specs
}

fn resolve_identifier<D: ast_grep_core::Doc>(
    id: &Node<D>,
    imports: &ImportIndex,
    diagnostics: &mut Diagnostics,
) -> Option<TemplateSpec> {
    let name = id.text();
    if let Some(path) = imports.lookup(&name) {
        return Some(TemplateSpec::FileRef(path.to_string()));
    }
    diagnostics.report(
        DiagnosticKind::UnresolvedTemplateReference,
        format!("`{name}` is not bound by any import"),
    );
    None
}

/// Identifiers returned by a DI factory, in pre-order.
///
/// A concise arrow body counts as a single implicit return. Returns of any
/// other expression are skipped.
fn factory_return_identifiers<'r, D: ast_grep_core::Doc>(factory: &Node<'r, D>) -> Vec<Node<'r, D>> {
    let Some(body) = factory.field("body") else {
        return Vec::new();
    };
    if body.kind().as_ref() != "statement_block" {
        return (body.kind().as_ref() == "identifier")
            .then_some(body)
            .into_iter()
            .collect();
    }
    find_nodes_of_kind(&body, &["return_statement"])
        .into_iter()
        .filter_map(|ret| first_named_child(&ret))
        .filter(|expr| expr.kind().as_ref() == "identifier")
        .collect()
}
