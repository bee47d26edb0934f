use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat, ScopeArg};
pub use root_commands::{Commands, ScanArgs};

/// Top-level CLI parser for the `ngmap` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ngmap",
    version,
    about = "ngmap - inventory of AngularJS components, routes and the HTML they render"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file used instead of .ngmap/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            config: self.config.clone(),
        }
    }
}
