use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::global::ScopeArg;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Components and the elements their templates render.
    Components(ScanArgs),
    /// Router states, their URLs and the elements their templates render.
    Routes(ScanArgs),
    /// Components and their template specifications, without reading HTML.
    Templates(ScanArgs),
    /// Flattened elements of every HTML file.
    Html(ScanArgs),
}

impl Commands {
    #[must_use]
    pub const fn scan_args(&self) -> &ScanArgs {
        match self {
            Self::Components(args) | Self::Routes(args) | Self::Templates(args) | Self::Html(args) => {
                args
            }
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct ScanArgs {
    /// Directory to scan.
    pub root: PathBuf,
    /// Also scan spec files and test directories.
    #[arg(long)]
    pub include_tests: bool,
    /// Abort on the first file that cannot be read or parsed.
    #[arg(long)]
    pub fail_fast: bool,
    /// Where registration calls are looked for.
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,
    /// Ignore `views.*.template` of router states.
    #[arg(long)]
    pub no_views: bool,
    /// Process files on the current thread only.
    #[arg(long)]
    pub sequential: bool,
}
