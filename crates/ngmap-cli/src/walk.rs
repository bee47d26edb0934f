//! Candidate file discovery.
//!
//! Uses the `ignore` crate for gitignore-aware directory walking, with
//! exclude globs from `scan.exclude`, an extension whitelist and optional
//! test file skipping. Results are sorted so batch output is deterministic.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

/// Custom ignore file honored in addition to `.gitignore`.
pub const IGNORE_FILENAME: &str = ".ngmapignore";

/// What to collect under a root directory.
#[derive(Debug, Clone)]
pub struct WalkFilter<'a> {
    /// Extensions without the leading dot, compared case-insensitively.
    pub extensions: &'a [String],
    pub skip_tests: bool,
    /// Gitignore-style globs to exclude.
    pub exclude: &'a [String],
}

/// Every file under `root` matching `filter`, sorted by path.
///
/// # Errors
/// Fails if `root` is not a directory or an exclude glob is invalid.
pub fn collect_files(root: &Path, filter: &WalkFilter<'_>) -> anyhow::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("scan root '{}' is not a directory", root.display());
    }

    let mut builder = WalkBuilder::new(root);
    // Don't skip hidden files; .gitignore still filters build output.
    builder.hidden(false);
    builder.add_custom_ignore_filename(IGNORE_FILENAME);

    if !filter.exclude.is_empty() {
        let mut overrides = OverrideBuilder::new(root);
        for glob in filter.exclude {
            overrides
                .add(&format!("!{glob}"))
                .with_context(|| format!("invalid exclude glob '{glob}'"))?;
        }
        builder.overrides(overrides.build().context("invalid exclude globs")?);
    }

    if filter.skip_tests {
        builder.filter_entry(|entry| {
            let file_name = entry.file_name().to_string_lossy();
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                entry.depth() == 0 || !ngmap_parser::is_test_dir(&file_name)
            } else {
                !ngmap_parser::is_test_file(&file_name)
            }
        });
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(%error, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if has_extension(entry.path(), filter.extensions) {
            files.push(entry.into_path());
        }
    }
    files.sort();

    tracing::debug!(root = %root.display(), files = files.len(), "walk complete");
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
