//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use std::path::Path;

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use ngmap_config::{ConfigError, LOCAL_CONFIG_PATH, NgmapConfig};
use ngmap_core::DeclarationScope;
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[scan]
source_extensions = ["js"]
skip_tests = false
exclude = ["vendor"]

[extract]
component_scope = "nested"
route_scope = "top_level"
include_views = false
max_html_depth = 32

[batch]
fail_fast = true
parallel = false
"#,
        )?;

        let config: NgmapConfig = Figment::from(Serialized::defaults(NgmapConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.scan.source_extensions, vec!["js"]);
        assert_eq!(config.scan.html_extensions, vec!["html", "htm"]);
        assert!(!config.scan.skip_tests);
        assert_eq!(config.scan.exclude, vec!["vendor"]);
        assert_eq!(config.extract.component_scope, DeclarationScope::Nested);
        assert_eq!(config.extract.route_scope, DeclarationScope::TopLevel);
        assert!(!config.extract.include_views);
        assert_eq!(config.extract.max_html_depth, 32);
        assert!(config.batch.fail_fast);
        assert!(!config.batch.parallel);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[extract]\nmax_html_depth = 10\n")?;

        let config: NgmapConfig = Figment::from(Serialized::defaults(NgmapConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.extract.max_html_depth, 10);
        assert_eq!(config.extract.route_scope, DeclarationScope::Nested);
        assert!(config.batch.parallel);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ngmap")?;
        jail.create_file(LOCAL_CONFIG_PATH, "[batch]\nfail_fast = true\n")?;

        let config = NgmapConfig::load().expect("config loads");
        assert!(config.batch.fail_fast);
        Ok(())
    });
}

#[test]
fn explicit_file_replaces_project_local() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ngmap")?;
        jail.create_file(LOCAL_CONFIG_PATH, "[extract]\nmax_html_depth = 5\n")?;
        jail.create_file("custom.toml", "[extract]\nmax_html_depth = 7\n")?;

        let config =
            NgmapConfig::load_from(Some(Path::new("custom.toml"))).expect("config loads");
        assert_eq!(config.extract.max_html_depth, 7);
        Ok(())
    });
}

#[test]
fn invalid_value_in_file_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("bad.toml", "[extract]\nmax_html_depth = 0\n")?;

        let err = NgmapConfig::load_from(Some(Path::new("bad.toml"))).expect_err("invalid");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("broken.toml", "[extract\nmax_html_depth = ")?;

        let err = NgmapConfig::load_from(Some(Path::new("broken.toml"))).expect_err("broken");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
