//! Aggregator: per-file extraction of component, route and template records.
//!
//! Combines the declaration matcher, the template resolver and the HTML
//! flattener. File references are joined with the declaring file's directory
//! and read through a [`TemplateLoader`].

use std::path::{Path, PathBuf};

use ngmap_core::{
    ComponentInfo, ComponentTemplates, DeclarationKind, DeclarationScope, DiagnosticKind,
    Diagnostics, ExtractError, Extraction, FlattenNode, HtmlFileInfo, RouteInfo, TemplateSpec,
};
use path_clean::PathClean;

use crate::extractors::declarations::{Declaration, find_declarations};
use crate::extractors::helpers::{find_property, string_literal_value, strip_delimiters};
use crate::extractors::html::{DEFAULT_MAX_HTML_DEPTH, flatten_html_str};
use crate::extractors::imports::ImportIndex;
use crate::extractors::templates::extract_templates;
use crate::loader::TemplateLoader;
use crate::parser::SourceTree;

/// Knobs shared by every aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    pub component_scope: DeclarationScope,
    pub route_scope: DeclarationScope,
    /// Read `views.*.template` for states without a top-level `template`.
    pub include_views: bool,
    pub max_html_depth: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            component_scope: DeclarationScope::TopLevel,
            route_scope: DeclarationScope::Nested,
            include_views: true,
            max_html_depth: DEFAULT_MAX_HTML_DEPTH,
        }
    }
}

/// Join a module path onto the directory of `source_file`, lexically
/// normalized. A leading `/` is treated as relative, like Node's
/// `path.join`.
#[must_use]
pub fn resolve_template_path(source_file: &Path, module_path: &str) -> PathBuf {
    let dir = source_file.parent().unwrap_or_else(|| Path::new(""));
    dir.join(module_path.trim_start_matches('/')).clean()
}

/// One [`ComponentInfo`] per component registration in `tree`.
///
/// Components whose templates all fail to resolve are still emitted with no
/// child elements.
pub fn extract_components(
    tree: &SourceTree,
    loader: &dyn TemplateLoader,
    options: &ExtractOptions,
) -> Extraction<ComponentInfo> {
    let mut diagnostics = file_diagnostics(tree);
    let imports = ImportIndex::build(tree);
    let root = tree.root();

    let records = find_declarations(
        &root,
        DeclarationKind::Component,
        options.component_scope,
        &mut diagnostics,
    )
    .into_iter()
    .map(|declaration| {
        let child_elements =
            declaration_elements(tree, &declaration, &imports, loader, options, &mut diagnostics);
        ComponentInfo {
            name: declaration.name,
            child_elements,
        }
    })
    .collect();

    finish(tree, records, diagnostics)
}

/// One [`RouteInfo`] per router state registration in `tree`.
pub fn extract_routes(
    tree: &SourceTree,
    loader: &dyn TemplateLoader,
    options: &ExtractOptions,
) -> Extraction<RouteInfo> {
    let mut diagnostics = file_diagnostics(tree);
    let imports = ImportIndex::build(tree);
    let root = tree.root();

    let records = find_declarations(
        &root,
        DeclarationKind::State,
        options.route_scope,
        &mut diagnostics,
    )
    .into_iter()
    .map(|declaration| {
        let url = find_property(&declaration.config, "url")
            .and_then(|value| match value.kind().as_ref() {
                "string" => string_literal_value(&value),
                "template_string" => Some(strip_delimiters(&value.text()).to_string()),
                _ => None,
            })
            .unwrap_or_default();
        let child_elements =
            declaration_elements(tree, &declaration, &imports, loader, options, &mut diagnostics);
        RouteInfo {
            name: declaration.name,
            url,
            child_elements,
        }
    })
    .collect();

    finish(tree, records, diagnostics)
}

/// Template specs of every component in `tree`, file references joined with
/// the file's directory. No template file is read.
pub fn list_component_templates(
    tree: &SourceTree,
    options: &ExtractOptions,
) -> Extraction<ComponentTemplates> {
    let mut diagnostics = file_diagnostics(tree);
    let imports = ImportIndex::build(tree);
    let root = tree.root();

    let records = find_declarations(
        &root,
        DeclarationKind::Component,
        options.component_scope,
        &mut diagnostics,
    )
    .into_iter()
    .map(|declaration| {
        let templates = extract_templates(
            &declaration.config,
            declaration.kind,
            &imports,
            options.include_views,
            &mut diagnostics,
        )
        .into_iter()
        .map(|spec| match spec {
            TemplateSpec::FileRef(module_path) => TemplateSpec::FileRef(
                resolve_template_path(tree.path(), &module_path)
                    .to_string_lossy()
                    .into_owned(),
            ),
            inline @ TemplateSpec::InlineString(_) => inline,
        })
        .collect();
        ComponentTemplates {
            name: declaration.name,
            templates,
        }
    })
    .collect();

    finish(tree, records, diagnostics)
}

/// Flatten one markup file.
///
/// # Errors
/// Returns [`ExtractError::MissingSource`] when the file cannot be read.
pub fn flatten_html_file(
    path: &Path,
    loader: &dyn TemplateLoader,
    options: &ExtractOptions,
) -> Result<Extraction<HtmlFileInfo>, ExtractError> {
    let display = path.display().to_string();
    let markup = loader
        .load(path)
        .map_err(|source| ExtractError::MissingSource {
            path: display.clone(),
            source,
        })?;
    let mut diagnostics = Diagnostics::for_file(display.clone());
    let child_elements = flatten_html_str(&markup, options.max_html_depth, &mut diagnostics);
    Ok(Extraction::new(
        vec![HtmlFileInfo {
            path: display,
            child_elements,
        }],
        diagnostics,
    ))
}

// ── internals ──────────────────────────────────────────────────────

fn file_diagnostics(tree: &SourceTree) -> Diagnostics {
    Diagnostics::for_file(tree.path().display().to_string())
}

fn finish<T>(tree: &SourceTree, records: Vec<T>, diagnostics: Diagnostics) -> Extraction<T> {
    tracing::debug!(
        file = %tree.path().display(),
        records = records.len(),
        diagnostics = diagnostics.as_slice().len(),
        "file extracted"
    );
    Extraction::new(records, diagnostics)
}

/// Flattened elements of every template of one declaration, in template
/// order.
fn declaration_elements<D: ast_grep_core::Doc>(
    tree: &SourceTree,
    declaration: &Declaration<'_, D>,
    imports: &ImportIndex,
    loader: &dyn TemplateLoader,
    options: &ExtractOptions,
    diagnostics: &mut Diagnostics,
) -> Vec<FlattenNode> {
    extract_templates(
        &declaration.config,
        declaration.kind,
        imports,
        options.include_views,
        diagnostics,
    )
    .iter()
    .flat_map(|spec| template_elements(tree.path(), spec, loader, options, diagnostics))
    .collect()
}

fn template_elements(
    source_file: &Path,
    spec: &TemplateSpec,
    loader: &dyn TemplateLoader,
    options: &ExtractOptions,
    diagnostics: &mut Diagnostics,
) -> Vec<FlattenNode> {
    match spec {
        TemplateSpec::InlineString(markup) => {
            flatten_html_str(markup, options.max_html_depth, diagnostics)
        }
        TemplateSpec::FileRef(module_path) => {
            let path = resolve_template_path(source_file, module_path);
            match loader.load(&path) {
                Ok(markup) => flatten_html_str(&markup, options.max_html_depth, diagnostics),
                Err(error) => {
                    diagnostics.report(
                        DiagnosticKind::MissingTemplate,
                        format!("{}: {error}", path.display()),
                    );
                    Vec::new()
                }
            }
        }
    }
}
