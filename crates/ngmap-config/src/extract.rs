//! How registrations and templates are extracted.

use ngmap_core::DeclarationScope;
use serde::{Deserialize, Serialize};

const fn default_route_scope() -> DeclarationScope {
    DeclarationScope::Nested
}

const fn default_include_views() -> bool {
    true
}

const fn default_max_html_depth() -> usize {
    256
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// Where `component(...)` registrations are looked for.
    #[serde(default)]
    pub component_scope: DeclarationScope,

    /// Where `state(...)` registrations are looked for. States usually live
    /// inside a config function, hence `nested`.
    #[serde(default = "default_route_scope")]
    pub route_scope: DeclarationScope,

    /// Read `views.*.template` of states without a top-level template.
    #[serde(default = "default_include_views")]
    pub include_views: bool,

    /// Element nesting depth below which HTML is not flattened.
    #[serde(default = "default_max_html_depth")]
    pub max_html_depth: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            component_scope: DeclarationScope::default(),
            route_scope: default_route_scope(),
            include_views: default_include_views(),
            max_html_depth: default_max_html_depth(),
        }
    }
}
