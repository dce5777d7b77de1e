//! Configuration loading and validation tests

use agf_infrastructure::config::{ConfigLoader, FactoryConfig};
use std::io::Write;

#[test]
fn defaults_are_sensible() {
    let config = FactoryConfig::default();

    assert!(config.cache.enabled);
    assert_eq!(config.cache.provider, "moka");
    assert!(config.cache.max_size > 0);
    assert!(config.cache.default_ttl_secs > 0);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
}

#[test]
fn toml_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[cache]
provider = "memory"
max_size = 64

[logging]
level = "debug"
"#
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("config must load");

    // Overridden values
    assert_eq!(config.cache.provider, "memory");
    assert_eq!(config.cache.max_size, 64);
    assert_eq!(config.logging.level, "debug");
    // Untouched values keep their defaults
    assert!(config.cache.enabled);
    assert!(config.cache.default_ttl_secs > 0);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("does-not-exist.toml"))
        .load()
        .expect("defaults must load");

    assert_eq!(config.cache.provider, "moka");
}

#[test]
fn zero_ttl_with_cache_enabled_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[cache]
enabled = true
default_ttl_secs = 0
"#
    )
    .unwrap();

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();

    assert!(err.to_string().contains("Cache TTL"));
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[logging]
level = "verbose"
"#
    )
    .unwrap();

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();

    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn round_trips_through_save_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agf.toml");

    let mut config = FactoryConfig::default();
    config.cache.provider = "memory".to_string();

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();

    let reloaded = loader.load().unwrap();
    assert_eq!(reloaded.cache.provider, "memory");
}
