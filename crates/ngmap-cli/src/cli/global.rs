use std::path::PathBuf;

use clap::ValueEnum;
use ngmap_core::DeclarationScope;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array.
    Json,
    /// Single-line JSON array.
    Raw,
}

/// `--scope` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ScopeArg {
    /// Only calls reachable from top-level statements.
    TopLevel,
    /// Every call in the file, including inside functions.
    Nested,
}

impl From<ScopeArg> for DeclarationScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::TopLevel => Self::TopLevel,
            ScopeArg::Nested => Self::Nested,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
}
