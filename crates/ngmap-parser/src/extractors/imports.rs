//! Import Index: local binding name -> module path, one per source file.
//!
//! Built from every `import` declaration of the file (default, namespace and
//! named bindings, plus TypeScript `import x = require(...)`) and from
//! top-level CommonJS `const x = require('...')` declarators.

use std::collections::HashMap;

use ast_grep_core::Node;
use ngmap_core::ImportBinding;

use super::helpers::{find_nodes_of_kind, first_named_child, string_literal_value};
use crate::parser::SourceTree;

/// Mapping from locally bound import names to module paths.
#[derive(Debug, Clone, Default)]
pub struct ImportIndex {
    bindings: Vec<ImportBinding>,
    by_name: HashMap<String, usize>,
}

impl ImportIndex {
    /// Index every import of `tree`.
    #[must_use]
    pub fn build(tree: &SourceTree) -> Self {
        let mut index = Self::default();
        let root = tree.root();

        for statement in find_nodes_of_kind(&root, &["import_statement"]) {
            index_import_statement(&statement, &mut index);
        }
        for statement in root.children() {
            if matches!(
                statement.kind().as_ref(),
                "lexical_declaration" | "variable_declaration"
            ) {
                index_require_declaration(&statement, &mut index);
            }
        }

        tracing::trace!(
            file = %tree.path().display(),
            bindings = index.bindings.len(),
            "import index built"
        );
        index
    }

    /// Module path bound to `local_name`, if any import binds it.
    #[must_use]
    pub fn lookup(&self, local_name: &str) -> Option<&str> {
        self.by_name
            .get(local_name)
            .map(|&i| self.bindings[i].module_path.as_str())
    }

    /// All bindings in declaration order.
    #[must_use]
    pub fn bindings(&self) -> &[ImportBinding] {
        &self.bindings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// First binding of a name wins.
    fn insert(&mut self, local_name: String, module_path: &str) {
        if self.by_name.contains_key(&local_name) {
            return;
        }
        self.by_name.insert(local_name.clone(), self.bindings.len());
        self.bindings.push(ImportBinding {
            local_name,
            module_path: module_path.to_string(),
        });
    }
}

// ── import statements ──────────────────────────────────────────────

fn index_import_statement<D: ast_grep_core::Doc>(statement: &Node<D>, index: &mut ImportIndex) {
    let module_path = statement
        .field("source")
        .or_else(|| statement.children().find(|c| c.kind().as_ref() == "string"))
        .and_then(|source| string_literal_value(&source));

    for child in statement.children() {
        match child.kind().as_ref() {
            "import_clause" => {
                let Some(ref module_path) = module_path else {
                    continue;
                };
                for name in import_clause_names(&child) {
                    index.insert(name, module_path);
                }
            }
            // TypeScript: import tpl = require('./a.html');
            "import_require_clause" => {
                let name = child
                    .children()
                    .find(|c| c.kind().as_ref() == "identifier")
                    .map(|c| c.text().to_string());
                let path = child
                    .field("source")
                    .or_else(|| child.children().find(|c| c.kind().as_ref() == "string"))
                    .and_then(|s| string_literal_value(&s));
                if let (Some(name), Some(path)) = (name, path) {
                    index.insert(name, &path);
                }
            }
            _ => {}
        }
    }
}

/// Local names bound by an `import_clause`.
fn import_clause_names<D: ast_grep_core::Doc>(clause: &Node<D>) -> Vec<String> {
    let mut names = Vec::new();
    for part in clause.children() {
        match part.kind().as_ref() {
            // import tpl from '...'
            "identifier" => names.push(part.text().to_string()),
            // import * as tpl from '...'
            "namespace_import" => {
                if let Some(id) = part.children().find(|c| c.kind().as_ref() == "identifier") {
                    names.push(id.text().to_string());
                }
            }
            // import { a, b as c } from '...'
            "named_imports" => {
                for specifier in part
                    .children()
                    .filter(|c| c.kind().as_ref() == "import_specifier")
                {
                    let local = specifier.field("alias").or_else(|| specifier.field("name"));
                    if let Some(local) = local {
                        names.push(local.text().to_string());
                    }
                }
            }
            _ => {}
        }
    }
    names
}

// ── CommonJS require ───────────────────────────────────────────────

fn index_require_declaration<D: ast_grep_core::Doc>(declaration: &Node<D>, index: &mut ImportIndex) {
    for declarator in declaration
        .children()
        .filter(|c| c.kind().as_ref() == "variable_declarator")
    {
        let Some(name) = declarator.field("name") else {
            continue;
        };
        if name.kind().as_ref() != "identifier" {
            continue;
        }
        if let Some(path) = declarator.field("value").and_then(|v| require_path(&v)) {
            index.insert(name.text().to_string(), &path);
        }
    }
}

/// Module path of a `require('...')` call.
fn require_path<D: ast_grep_core::Doc>(call: &Node<D>) -> Option<String> {
    if call.kind().as_ref() != "call_expression" {
        return None;
    }
    let function = call.field("function")?;
    if function.kind().as_ref() != "identifier" || function.text() != "require" {
        return None;
    }
    let arguments = call.field("arguments")?;
    let first = first_named_child(&arguments)?;
    string_literal_value(&first)
}
