use std::fs;

use natal_config::{ConfigError, DEFAULT_CONFIG_FILE, NatalConfig, OutputFormat};

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();
    let config = NatalConfig::load(&path).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = NatalConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn load_from_dir_finds_default_name() {
    let dir = tempfile::tempdir().unwrap();
    assert!(NatalConfig::load_from_dir(dir.path()).unwrap().is_none());

    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        NatalConfig::default_toml().unwrap(),
    )
    .unwrap();
    let loaded = NatalConfig::load_from_dir(dir.path()).unwrap();
    assert_eq!(loaded, Some(NatalConfig::default()));
}

#[test]
fn malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&path, "[chart\nbodies = ").unwrap();
    assert!(matches!(
        NatalConfig::load(&path).unwrap_err(),
        ConfigError::Parse(_)
    ));
}
