use figment::Jail;
use ngmap_config::NgmapConfig;
use ngmap_core::DeclarationScope;

#[test]
fn env_sets_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("NGMAP_EXTRACT__COMPONENT_SCOPE", "nested");
        jail.set_env("NGMAP_BATCH__PARALLEL", "false");

        let config = NgmapConfig::load().expect("config loads");
        assert_eq!(config.extract.component_scope, DeclarationScope::Nested);
        assert!(!config.batch.parallel);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ngmap")?;
        jail.create_file(".ngmap/config.toml", "[scan]\nskip_tests = false\n")?;
        jail.set_env("NGMAP_SCAN__SKIP_TESTS", "true");

        let config = NgmapConfig::load().expect("config loads");
        assert!(config.scan.skip_tests);
        Ok(())
    });
}

#[test]
fn log_filter_variable_does_not_break_loading() {
    Jail::expect_with(|jail| {
        jail.set_env("NGMAP_LOG", "debug");

        let config = NgmapConfig::load().expect("config loads");
        assert_eq!(config, NgmapConfig::default());
        Ok(())
    });
}
