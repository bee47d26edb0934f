//! # ngmap-core
//!
//! Core types shared across all ngmap crates:
//! - Record structs emitted by the extraction pipeline (components, routes,
//!   template listings, flattened HTML elements)
//! - The canonical `TemplateSpec` describing where a template comes from
//! - Recoverable diagnostics collected while extracting one file
//! - The fatal per-file error taxonomy

pub mod diagnostics;
pub mod errors;
pub mod model;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Extraction};
pub use errors::ExtractError;
pub use model::{
    ComponentInfo, ComponentTemplates, DeclarationKind, DeclarationScope, FlattenNode,
    HtmlFileInfo, ImportBinding, RouteInfo, TemplateSpec, UNDEFINED_CLASS_NAME,
};
