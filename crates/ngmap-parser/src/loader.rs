//! Template file loading.
//!
//! The aggregator reads referenced template files through [`TemplateLoader`]
//! so extraction can run against the filesystem or an in-memory set of files.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Source of template file contents.
pub trait TemplateLoader: Sync {
    /// Read the template at `path` (already joined and normalized).
    ///
    /// # Errors
    /// Returns the I/O error describing why the template is unavailable.
    fn load(&self, path: &Path) -> io::Result<String>;
}

/// Reads templates from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl TemplateLoader for FsLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Serves templates from a map keyed by normalized path.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: HashMap<PathBuf, String>,
}

impl MemoryLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, returning `self` for chaining.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl AsRef<Path>, contents: impl Into<String>) {
        self.files.insert(path.as_ref().clean(), contents.into());
    }
}

impl TemplateLoader for MemoryLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        self.files.get(&path.clean()).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory template at {}", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_loader_normalizes_keys() {
        let loader = MemoryLoader::new().with_file("src/./views/../a.html", "<p></p>");
        assert_eq!(loader.load(Path::new("src/a.html")).expect("present"), "<p></p>");
    }

    #[test]
    fn memory_loader_missing_is_not_found() {
        let err = MemoryLoader::new()
            .load(Path::new("gone.html"))
            .expect_err("absent");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn fs_loader_reads_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("t.html");
        std::fs::write(&path, "<div></div>").expect("write");
        assert_eq!(FsLoader.load(&path).expect("readable"), "<div></div>");
        assert!(FsLoader.load(&dir.path().join("missing.html")).is_err());
    }
}
