//! Settings shared by every scan command: config values with CLI overrides.

use std::path::PathBuf;

use ngmap_config::NgmapConfig;
use ngmap_core::{DeclarationKind, DeclarationScope};
use ngmap_parser::ExtractOptions;

use crate::cli::ScanArgs;
use crate::pipeline::BatchSettings;
use crate::walk::{WalkFilter, collect_files};

/// Effective settings of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSettings {
    pub skip_tests: bool,
    pub batch: BatchSettings,
    pub extract: ExtractOptions,
}

impl ScanSettings {
    /// Merge `config` with the command line. `kind` selects which declaration
    /// scope `--scope` overrides.
    #[must_use]
    pub fn resolve(args: &ScanArgs, config: &NgmapConfig, kind: DeclarationKind) -> Self {
        let mut extract = ExtractOptions {
            component_scope: config.extract.component_scope,
            route_scope: config.extract.route_scope,
            include_views: config.extract.include_views && !args.no_views,
            max_html_depth: config.extract.max_html_depth,
        };
        if let Some(scope) = args.scope {
            let scope = DeclarationScope::from(scope);
            match kind {
                DeclarationKind::Component => extract.component_scope = scope,
                DeclarationKind::State => extract.route_scope = scope,
            }
        }

        Self {
            skip_tests: config.scan.skip_tests && !args.include_tests,
            batch: BatchSettings {
                fail_fast: config.batch.fail_fast || args.fail_fast,
                parallel: config.batch.parallel && !args.sequential,
            },
            extract,
        }
    }

    /// Script files under the scan root.
    pub fn source_files(&self, args: &ScanArgs, config: &NgmapConfig) -> anyhow::Result<Vec<PathBuf>> {
        collect_files(
            &args.root,
            &WalkFilter {
                extensions: &config.scan.source_extensions,
                skip_tests: self.skip_tests,
                exclude: &config.scan.exclude,
            },
        )
    }

    /// Markup files under the scan root.
    pub fn html_files(&self, args: &ScanArgs, config: &NgmapConfig) -> anyhow::Result<Vec<PathBuf>> {
        collect_files(
            &args.root,
            &WalkFilter {
                extensions: &config.scan.html_extensions,
                skip_tests: self.skip_tests,
                exclude: &config.scan.exclude,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn resolve(argv: &[&str], kind: DeclarationKind) -> ScanSettings {
        let cli = Cli::try_parse_from(argv).expect("cli should parse");
        ScanSettings::resolve(cli.command.scan_args(), &NgmapConfig::default(), kind)
    }

    #[test]
    fn defaults_follow_config() {
        let settings = resolve(&["ngmap", "components", "."], DeclarationKind::Component);
        assert!(settings.skip_tests);
        assert!(settings.batch.parallel);
        assert!(!settings.batch.fail_fast);
        assert_eq!(settings.extract, ExtractOptions::default());
    }

    #[test]
    fn scope_flag_targets_the_command_kind() {
        let routes = resolve(
            &["ngmap", "routes", ".", "--scope", "top-level"],
            DeclarationKind::State,
        );
        assert_eq!(routes.extract.route_scope, DeclarationScope::TopLevel);
        assert_eq!(routes.extract.component_scope, DeclarationScope::TopLevel);

        let components = resolve(
            &["ngmap", "components", ".", "--scope", "nested"],
            DeclarationKind::Component,
        );
        assert_eq!(components.extract.component_scope, DeclarationScope::Nested);
        assert_eq!(components.extract.route_scope, DeclarationScope::Nested);
    }

    #[test]
    fn flags_override_config() {
        let settings = resolve(
            &[
                "ngmap",
                "routes",
                ".",
                "--include-tests",
                "--fail-fast",
                "--no-views",
                "--sequential",
            ],
            DeclarationKind::State,
        );
        assert!(!settings.skip_tests);
        assert!(settings.batch.fail_fast);
        assert!(!settings.batch.parallel);
        assert!(!settings.extract.include_views);
    }
}
