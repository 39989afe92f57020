use deals_config::{Config, ConfigError, ConfigManager, StoreBackend};
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let config = manager.load().expect("load config");

    assert_eq!(config, Config::default());
    assert_eq!(config.store, StoreBackend::Mock);
    assert_eq!(config.mock.latency_ms, 400);
    assert_eq!(manager.config_path(), dir.path().join("config.json"));
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("nested")).expect("manager");

    let mut config = Config::default();
    config.store = StoreBackend::Json;
    config.validate_all_before_submit = true;
    config.brand.brand_name = "Acme Apparel".to_string();
    config.output.quiet = true;

    manager.save(&config).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, config);
    assert!(!dir.path().join("nested").join("config.json.tmp").exists());
}

#[test]
fn data_dir_follows_base_unless_overridden() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut config = Config::default();
    assert_eq!(manager.data_dir(&config), dir.path().join("data"));

    config.data_dir = Some(dir.path().join("elsewhere"));
    assert_eq!(manager.data_dir(&config), dir.path().join("elsewhere"));
}

#[test]
fn malformed_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::write(manager.config_path(), "{ not json").expect("write");

    let err = manager.load().unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)));
}
