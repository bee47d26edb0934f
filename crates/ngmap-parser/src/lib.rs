//! # ngmap-parser
//!
//! ast-grep-based extraction of `AngularJS` component and ui-router state
//! templates.
//!
//! Pipeline per script file:
//! - **Declaration matcher**: `x.component('name', {...})` and
//!   `x.state('name', {...})` calls
//! - **Template resolver**: inline strings, template literals, imported
//!   identifiers and DI factory returns, resolved through the file's import
//!   index
//! - **HTML flattener**: pre-order element list of each template
//!
//! [`aggregate`] ties the stages together and reads referenced template
//! files through a [`TemplateLoader`].

pub mod aggregate;
pub mod extractors;
pub mod loader;
pub mod parser;
mod test_files;

pub use aggregate::{
    ExtractOptions, extract_components, extract_routes, flatten_html_file,
    list_component_templates, resolve_template_path,
};
pub use extractors::html::{DEFAULT_MAX_HTML_DEPTH, flatten_html, flatten_html_str};
pub use extractors::imports::ImportIndex;
pub use loader::{FsLoader, MemoryLoader, TemplateLoader};
pub use parser::{HtmlTree, SourceTree, detect_language, is_script_language};
pub use test_files::{is_test_dir, is_test_file};
