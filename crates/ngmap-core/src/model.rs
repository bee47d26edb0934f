//! Record types produced by the extraction pipeline.
//!
//! Every record serializes with camelCase field names (`tagName`,
//! `childElements`, ...) so the JSON output matches what downstream audit
//! tooling already consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `className` value written for elements that carry no `class` attribute.
pub const UNDEFINED_CLASS_NAME: &str = "undefined";

// ---------------------------------------------------------------------------
// FlattenNode
// ---------------------------------------------------------------------------

/// One element of a flattened HTML tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenNode {
    pub tag_name: String,
    /// JSON-serialized class attribute value, or `"undefined"` when absent.
    pub class_name: String,
}

impl FlattenNode {
    /// Build a node from a tag name and the raw `class` attribute value.
    #[must_use]
    pub fn new(tag_name: impl Into<String>, class_attr: Option<&str>) -> Self {
        let class_name = class_attr.map_or_else(
            || UNDEFINED_CLASS_NAME.to_string(),
            |value| serde_json::Value::String(value.to_string()).to_string(),
        );
        Self {
            tag_name: tag_name.into(),
            class_name,
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateSpec
// ---------------------------------------------------------------------------

/// Canonical description of the markup that renders a UI unit.
///
/// Serializes as `{"kind": "FileRef", "content": "./a.html"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content")]
pub enum TemplateSpec {
    /// Module path as written in the import, relative to the declaring file.
    FileRef(String),
    /// Template text with the outer delimiters stripped.
    InlineString(String),
}

// ---------------------------------------------------------------------------
// DeclarationKind
// ---------------------------------------------------------------------------

/// Which registration call introduced a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// `module.component('name', { ... })`
    Component,
    /// `$stateProvider.state('name', { ... })`
    State,
}

impl DeclarationKind {
    /// The member name that triggers this kind of registration.
    #[must_use]
    pub const fn member_name(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::State => "state",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.member_name())
    }
}

/// How far the declaration matcher looks for registration calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationScope {
    /// Only calls reachable from top-level expression statements, following
    /// call chains, comma sequences and parentheses.
    #[default]
    TopLevel,
    /// Every call expression in the file, including those inside functions.
    Nested,
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Import binding: a local name and the module path it was imported from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBinding {
    pub local_name: String,
    pub module_path: String,
}

/// A registered component and the elements its templates render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    pub name: String,
    pub child_elements: Vec<FlattenNode>,
}

/// A registered component and its template specifications, with file
/// references already joined to the declaring file's directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTemplates {
    pub name: String,
    pub templates: Vec<TemplateSpec>,
}

/// A registered router state and the elements its templates render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    pub name: String,
    /// Value of the state's `url` property; empty when the state has none.
    pub url: String,
    pub child_elements: Vec<FlattenNode>,
}

/// Flattened elements of one markup file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlFileInfo {
    pub path: String,
    pub child_elements: Vec<FlattenNode>,
}
