//! Fatal per-file error types.
//!
//! Anything that only affects one declaration or one template is a
//! [`Diagnostic`](crate::Diagnostic), not an error. An `ExtractError` means
//! the file itself could not be processed and yields no records.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source file could not be read.
    #[error("Source file not readable: {path}")]
    MissingSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not map to a supported language.
    #[error("Language not supported for {0}")]
    UnsupportedLanguage(String),
}

impl ExtractError {
    /// Path of the file that failed.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::MissingSource { path, .. } | Self::UnsupportedLanguage(path) => path,
        }
    }
}
