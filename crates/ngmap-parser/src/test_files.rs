//! Test file and directory detection for filtering during scans.
//!
//! Used by the CLI walker to keep unit specs, end-to-end suites, mocks and
//! fixtures out of the component and route inventory.

/// Directory names conventionally used for tests, mocks and fixtures.
const TEST_DIRS: &[&str] = &[
    "test",
    "tests",
    "spec",
    "specs",
    "__tests__",
    "__mocks__",
    "__snapshots__",
    "e2e",
    "fixtures",
    "mocks",
];

/// Infixes that mark a script as a test: `app.spec.js`, `app.e2e.ts`, ...
const TEST_INFIXES: &[&str] = &["spec", "test", "e2e", "mock"];

/// Script extensions the infix convention applies to.
const SCRIPT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx"];

/// Test runner configuration files.
const RUNNER_CONFIGS: &[&str] = &[
    "karma.conf.js",
    "karma.conf.ts",
    "protractor.conf.js",
    "protractor.conf.ts",
    "jest.config.js",
    "jest.config.ts",
];

/// Returns `true` if `dir_name` matches a known test/fixture directory convention.
///
/// Comparison is case-sensitive (directory names are almost always lowercase).
///
/// # Examples
///
/// ```
/// use ngmap_parser::is_test_dir;
/// assert!(is_test_dir("__tests__"));
/// assert!(is_test_dir("e2e"));
/// assert!(!is_test_dir("components"));
/// ```
#[must_use]
pub fn is_test_dir(dir_name: &str) -> bool {
    TEST_DIRS.contains(&dir_name)
}

/// Returns `true` if `file_name` is a test script or test runner config.
///
/// Covers `*.{spec,test,e2e,mock}.{js,ts,...}` and the usual Karma,
/// Protractor and Jest configuration files. Comparison is case-insensitive.
///
/// # Examples
///
/// ```
/// use ngmap_parser::is_test_file;
/// assert!(is_test_file("header.component.spec.ts"));
/// assert!(is_test_file("karma.conf.js"));
/// assert!(!is_test_file("header.component.ts"));
/// ```
#[must_use]
pub fn is_test_file(file_name: &str) -> bool {
    let name = file_name.to_lowercase();
    if RUNNER_CONFIGS.contains(&name.as_str()) {
        return true;
    }

    let mut parts = name.rsplit('.');
    let (Some(ext), Some(infix)) = (parts.next(), parts.next()) else {
        return false;
    };
    // "spec.js" alone has no stem before the infix.
    parts.next().is_some() && SCRIPT_EXTENSIONS.contains(&ext) && TEST_INFIXES.contains(&infix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_matches_common_names() {
        for dir in TEST_DIRS {
            assert!(is_test_dir(dir), "expected is_test_dir({dir:?}) == true");
        }
    }

    #[test]
    fn test_dir_rejects_production_dirs() {
        for dir in ["src", "app", "components", "routes", "views", "dist"] {
            assert!(!is_test_dir(dir), "expected is_test_dir({dir:?}) == false");
        }
    }

    #[test]
    fn test_dir_is_case_sensitive() {
        assert!(!is_test_dir("Tests"));
        assert!(!is_test_dir("__Tests__"));
    }

    #[test]
    fn test_file_infixes() {
        assert!(is_test_file("app.spec.js"));
        assert!(is_test_file("app.test.tsx"));
        assert!(is_test_file("login.e2e.ts"));
        assert!(is_test_file("api.mock.mjs"));
        assert!(is_test_file("Header.Component.SPEC.TS"));
    }

    #[test]
    fn test_file_runner_configs() {
        assert!(is_test_file("karma.conf.js"));
        assert!(is_test_file("protractor.conf.ts"));
        assert!(!is_test_file("webpack.config.js"));
    }

    #[test]
    fn production_files_are_not_tests() {
        assert!(!is_test_file("app.module.js"));
        assert!(!is_test_file("routes.ts"));
        assert!(!is_test_file("spec.js"));
        assert!(!is_test_file("specs.js"));
        assert!(!is_test_file("view.spec.html"));
        assert!(!is_test_file("README"));
    }
}
