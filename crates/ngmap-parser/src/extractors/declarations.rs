//! Declaration Matcher: finds `x.component('name', {...})` and
//! `x.state('name', {...})` registration calls.

use ast_grep_core::Node;
use ngmap_core::{DeclarationKind, DeclarationScope, DiagnosticKind, Diagnostics};

use super::helpers::{find_nodes_of_kind, named_children, search, strip_delimiters};

/// A matched registration call.
pub struct Declaration<'r, D: ast_grep_core::Doc> {
    pub kind: DeclarationKind,
    /// Registered component name or state name, quotes removed.
    pub name: String,
    /// The options object literal holding `template`, `url`, `views`, ...
    pub config: Node<'r, D>,
    /// Byte offset of the name literal; declarations are ordered by it.
    pub offset: usize,
}

/// Every `kind` registration in the file rooted at `root`, ordered by the
/// position of the registered name.
///
/// Calls that invoke the right member but carry no name literal or no
/// resolvable options object are reported as
/// [`DiagnosticKind::UnmatchedDeclaration`] and skipped.
pub fn find_declarations<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
    kind: DeclarationKind,
    scope: DeclarationScope,
    diagnostics: &mut Diagnostics,
) -> Vec<Declaration<'r, D>> {
    let calls: Vec<Node<'r, D>> = match scope {
        DeclarationScope::TopLevel => root
            .children()
            .filter(|c| c.kind().as_ref() == "expression_statement")
            .flat_map(|statement| statement_calls(&statement))
            .collect(),
        DeclarationScope::Nested => find_nodes_of_kind(root, &["call_expression"]),
    };

    let mut declarations: Vec<_> = calls
        .iter()
        .filter_map(|call| match_registration(root, call, kind, diagnostics))
        .collect();
    declarations.sort_by_key(|d| d.offset);

    tracing::debug!(
        %kind,
        ?scope,
        calls = calls.len(),
        matched = declarations.len(),
        "declarations matched"
    );
    declarations
}

/// Call expressions reachable from one expression statement without entering
/// argument lists or function bodies: call chains, member receivers, comma
/// sequences and parentheses.
fn statement_calls<'r, D: ast_grep_core::Doc>(statement: &Node<'r, D>) -> Vec<Node<'r, D>> {
    let mut calls = Vec::new();
    let mut stack = named_children(statement);

    while let Some(node) = stack.pop() {
        match node.kind().as_ref() {
            "call_expression" => {
                if let Some(function) = node.field("function") {
                    stack.push(function);
                }
                calls.push(node);
            }
            "member_expression" => {
                if let Some(object) = node.field("object") {
                    stack.push(object);
                }
            }
            "sequence_expression" | "parenthesized_expression" => {
                stack.extend(named_children(&node));
            }
            _ => {}
        }
    }
    calls
}

/// Match one call against `receiver.<member>('name', options)`.
fn match_registration<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
    call: &Node<'r, D>,
    kind: DeclarationKind,
    diagnostics: &mut Diagnostics,
) -> Option<Declaration<'r, D>> {
    let function = call.field("function")?;
    if function.kind().as_ref() != "member_expression" {
        return None;
    }
    let property = function.field("property")?;
    if property.text() != kind.member_name() {
        return None;
    }

    let line = call.start_pos().line() + 1;
    let arguments = call
        .field("arguments")
        .map(|a| named_children(&a))
        .unwrap_or_default();
    let Some(name_index) = arguments.iter().position(|a| a.kind().as_ref() == "string") else {
        diagnostics.report(
            DiagnosticKind::UnmatchedDeclaration,
            format!("{kind} call on line {line} has no name literal"),
        );
        return None;
    };
    let name_node = &arguments[name_index];
    let name = strip_delimiters(&name_node.text()).to_string();

    let config = arguments
        .get(name_index + 1)
        .and_then(|options| resolve_options(root, options));
    let Some(config) = config else {
        diagnostics.report(
            DiagnosticKind::UnmatchedDeclaration,
            format!("{kind} '{name}' on line {line} has no resolvable options object"),
        );
        return None;
    };

    Some(Declaration {
        kind,
        name,
        config,
        offset: name_node.range().start,
    })
}

/// The options object literal, either inline or bound to a same-file
/// variable.
fn resolve_options<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
    options: &Node<'r, D>,
) -> Option<Node<'r, D>> {
    match options.kind().as_ref() {
        "object" => Some(options.clone()),
        "identifier" => {
            let wanted = options.text();
            search(root, &["variable_declarator"], |declarator| {
                let name = declarator.field("name")?;
                if name.text() != wanted {
                    return None;
                }
                declarator
                    .field("value")
                    .filter(|value| value.kind().as_ref() == "object")
            })
            .into_iter()
            .next()
        }
        _ => None,
    }
}
