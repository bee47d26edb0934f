//! ast-grep wrapper and language detection from file extensions.

use std::path::{Path, PathBuf};

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;
use ngmap_core::ExtractError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// A node borrowed from an [`AstTree`].
pub type SyntaxNode<'r> = ast_grep_core::Node<'r, StrDoc<SupportLang>>;

/// Detect the language from a file path extension.
///
/// Returns `None` for unsupported or unrecognized extensions.
#[must_use]
pub fn detect_language(file_path: &str) -> Option<SupportLang> {
    let ext = file_path.rsplit('.').next()?.to_ascii_lowercase();
    match ext.as_str() {
        "js" | "mjs" | "cjs" | "jsx" => Some(SupportLang::JavaScript),
        "ts" | "mts" | "cts" => Some(SupportLang::TypeScript),
        "tsx" => Some(SupportLang::Tsx),
        "html" | "htm" => Some(SupportLang::Html),
        _ => None,
    }
}

/// Whether `lang` is one of the script languages registrations are read from.
#[must_use]
pub const fn is_script_language(lang: SupportLang) -> bool {
    matches!(
        lang,
        SupportLang::JavaScript | SupportLang::TypeScript | SupportLang::Tsx
    )
}

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}

// ── SourceTree ─────────────────────────────────────────────────────

/// One parsed script file, paired with the path it was read from.
pub struct SourceTree {
    path: PathBuf,
    lang: SupportLang,
    ast: AstTree,
}

impl SourceTree {
    /// Parse `source` as the script file at `path`.
    ///
    /// # Errors
    /// Returns [`ExtractError::UnsupportedLanguage`] when the extension is not
    /// a JavaScript/TypeScript one.
    pub fn parse(path: impl Into<PathBuf>, source: &str) -> Result<Self, ExtractError> {
        let path = path.into();
        let display = path.to_string_lossy().to_string();
        let lang = detect_language(&display)
            .filter(|lang| is_script_language(*lang))
            .ok_or(ExtractError::UnsupportedLanguage(display))?;
        Ok(Self {
            ast: parse_source(source, lang),
            path,
            lang,
        })
    }

    /// Read and parse the script file at `path`.
    ///
    /// # Errors
    /// Returns [`ExtractError::MissingSource`] if the file cannot be read, or
    /// [`ExtractError::UnsupportedLanguage`] for a non-script extension.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ExtractError::MissingSource {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(path, &source)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn lang(&self) -> SupportLang {
        self.lang
    }

    /// The `program` node.
    #[must_use]
    pub fn root(&self) -> SyntaxNode<'_> {
        self.ast.root()
    }
}

// ── HtmlTree ───────────────────────────────────────────────────────

/// A parsed HTML fragment or document.
pub struct HtmlTree {
    ast: AstTree,
}

impl HtmlTree {
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        Self {
            ast: parse_source(markup, SupportLang::Html),
        }
    }

    /// Read and parse the markup file at `path`.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn read(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let markup = std::fs::read_to_string(path)?;
        Ok(Self::parse(&markup))
    }

    /// The `document` node.
    #[must_use]
    pub fn root(&self) -> SyntaxNode<'_> {
        self.ast.root()
    }
}
