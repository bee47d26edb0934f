//! Recoverable extraction diagnostics.
//!
//! Each diagnostic is recorded on the per-file [`Diagnostics`] collector and
//! emitted as a `tracing` event at the same time, so the CLI log and the
//! structured [`Extraction`] result always agree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Registration call without a resolvable name or configuration.
    UnmatchedDeclaration,
    /// Template identifier with no matching import in the same file.
    UnresolvedTemplateReference,
    /// Template value of a shape the resolver does not understand.
    UnknownTemplateShape,
    /// Referenced template file could not be read.
    MissingTemplate,
    /// HTML nesting deeper than the configured guard.
    DepthLimitExceeded,
}

impl DiagnosticKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnmatchedDeclaration => "unmatched_declaration",
            Self::UnresolvedTemplateReference => "unresolved_template_reference",
            Self::UnknownTemplateShape => "unknown_template_shape",
            Self::MissingTemplate => "missing_template",
            Self::DepthLimitExceeded => "depth_limit_exceeded",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recoverable condition observed in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub file: String,
    pub detail: String,
}

/// Per-file diagnostic collector.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    file: String,
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Start collecting diagnostics for `file`.
    #[must_use]
    pub fn for_file(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            items: Vec::new(),
        }
    }

    /// Record a diagnostic and emit it as a tracing event.
    pub fn report(&mut self, kind: DiagnosticKind, detail: impl Into<String>) {
        let detail = detail.into();
        match kind {
            DiagnosticKind::UnmatchedDeclaration => {
                tracing::debug!(file = %self.file, %kind, "{detail}");
            }
            _ => tracing::warn!(file = %self.file, %kind, "{detail}"),
        }
        self.items.push(Diagnostic {
            kind,
            file: self.file.clone(),
            detail,
        });
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of diagnostics of `kind`.
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

/// Records extracted from one file, plus what went wrong along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction<T> {
    pub records: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Extraction<T> {
    #[must_use]
    pub fn new(records: Vec<T>, diagnostics: Diagnostics) -> Self {
        Self {
            records,
            diagnostics: diagnostics.into_vec(),
        }
    }

    /// Number of diagnostics of `kind`.
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }
}
