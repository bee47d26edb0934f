//! Which files a scan visits.

use serde::{Deserialize, Serialize};

fn default_source_extensions() -> Vec<String> {
    ["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_html_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}

const fn default_skip_tests() -> bool {
    true
}

fn default_exclude() -> Vec<String> {
    ["node_modules", "bower_components", "dist"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Extensions (without the dot) scanned for registrations.
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,

    /// Extensions scanned by the `html` inventory.
    #[serde(default = "default_html_extensions")]
    pub html_extensions: Vec<String>,

    /// Skip spec files and test directories.
    #[serde(default = "default_skip_tests")]
    pub skip_tests: bool,

    /// Gitignore-style globs excluded from every scan.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_extensions: default_source_extensions(),
            html_extensions: default_html_extensions(),
            skip_tests: default_skip_tests(),
            exclude: default_exclude(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ScanConfig::default();
        assert!(config.source_extensions.iter().any(|e| e == "ts"));
        assert_eq!(config.html_extensions, vec!["html", "htm"]);
        assert!(config.skip_tests);
        assert!(config.exclude.iter().any(|e| e == "node_modules"));
    }
}
