//! Batch pipeline: per-file extraction over a sorted file list.
//!
//! Files are independent, so with `parallel` they are mapped on the rayon
//! pool. `par_iter().map().collect()` keeps input order, so the concatenated
//! records are identical to a sequential run.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ngmap_core::{Diagnostic, ExtractError, Extraction};
use rayon::prelude::*;

/// Batch execution settings after config and CLI overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSettings {
    pub fail_fast: bool,
    pub parallel: bool,
}

/// Everything a batch produced.
#[derive(Debug)]
pub struct BatchOutcome<T> {
    /// Records of every successful file, in file order.
    pub records: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
    /// Files that could not be read or parsed.
    pub failed: Vec<PathBuf>,
}

/// Run `extract` over every file.
///
/// A file that fails yields no records. Without `fail_fast` the failure is
/// logged and the batch continues; with it, the first failure in file order
/// is returned as the error.
///
/// # Errors
/// Only with `fail_fast`, when any file fails.
pub fn run_batch<T, F>(
    files: &[PathBuf],
    settings: BatchSettings,
    extract: F,
) -> anyhow::Result<BatchOutcome<T>>
where
    T: Send,
    F: Fn(&Path) -> Result<Extraction<T>, ExtractError> + Sync,
{
    let results: Vec<Result<Extraction<T>, ExtractError>> = if settings.parallel {
        files.par_iter().map(|path| extract(path.as_path())).collect()
    } else {
        files.iter().map(|path| extract(path.as_path())).collect()
    };

    let mut outcome = BatchOutcome {
        records: Vec::new(),
        diagnostics: Vec::new(),
        failed: Vec::new(),
    };
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(extraction) => {
                outcome.records.extend(extraction.records);
                outcome.diagnostics.extend(extraction.diagnostics);
            }
            Err(error) if settings.fail_fast => {
                return Err(error).with_context(|| format!("failed to process {}", path.display()));
            }
            Err(error) => {
                tracing::warn!(file = %path.display(), %error, "file skipped");
                outcome.failed.push(path.clone());
            }
        }
    }

    tracing::info!(
        files = files.len(),
        records = outcome.records.len(),
        diagnostics = outcome.diagnostics.len(),
        failed = outcome.failed.len(),
        "batch complete"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use ngmap_core::Diagnostics;
    use pretty_assertions::assert_eq;

    use super::*;

    const SETTINGS: BatchSettings = BatchSettings {
        fail_fast: false,
        parallel: true,
    };

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    /// One record per file (its path), failing for names containing "bad".
    fn fake_extract(path: &Path) -> Result<Extraction<String>, ExtractError> {
        let name = path.display().to_string();
        if name.contains("bad") {
            return Err(ExtractError::UnsupportedLanguage(name));
        }
        Ok(Extraction::new(vec![name.clone()], Diagnostics::for_file(name)))
    }

    #[test]
    fn parallel_output_matches_sequential_order() {
        let files: Vec<PathBuf> = (0..64).map(|i| PathBuf::from(format!("f{i:02}.js"))).collect();
        let parallel = run_batch(&files, SETTINGS, fake_extract).expect("batch");
        let sequential = run_batch(
            &files,
            BatchSettings {
                parallel: false,
                ..SETTINGS
            },
            fake_extract,
        )
        .expect("batch");
        assert_eq!(parallel.records, sequential.records);
        assert_eq!(parallel.records[0], "f00.js");
        assert_eq!(parallel.records[63], "f63.js");
    }

    #[test]
    fn failing_file_does_not_remove_other_records() {
        let files = paths(&["a.js", "bad.js", "c.js"]);
        let outcome = run_batch(&files, SETTINGS, fake_extract).expect("batch continues");
        assert_eq!(outcome.records, vec!["a.js", "c.js"]);
        assert_eq!(outcome.failed, paths(&["bad.js"]));
    }

    #[test]
    fn fail_fast_returns_first_failure() {
        let files = paths(&["a.js", "bad-1.js", "bad-2.js"]);
        let error = run_batch(
            &files,
            BatchSettings {
                fail_fast: true,
                ..SETTINGS
            },
            fake_extract,
        )
        .expect_err("batch aborts");
        assert!(format!("{error:#}").contains("bad-1.js"));
    }

    #[test]
    fn empty_batch_is_empty() {
        let outcome = run_batch(&[], SETTINGS, fake_extract).expect("batch");
        assert!(outcome.records.is_empty());
        assert!(outcome.failed.is_empty());
    }
}
