//! Configuration Validation Tests

use apus_infrastructure::config::loader::validate_app_config;
use apus_infrastructure::config::{AppConfig, ConfigLoader};
use figment::Jail;

fn load_with(toml: &str) -> Result<AppConfig, String> {
    let mut outcome = Ok(AppConfig::default());
    Jail::expect_with(|jail| {
        jail.create_file("apus.toml", toml)?;
        outcome = ConfigLoader::new().load().map_err(|e| e.to_string());
        Ok(())
    });
    outcome
}

#[test]
fn test_default_config_is_valid() {
    assert!(validate_app_config(&AppConfig::default()).is_ok());
}

#[test]
fn test_rejects_invalid_log_level() {
    let err = load_with("[logging]\nlevel = \"loud\"\n").unwrap_err();
    assert!(err.contains("Invalid log level"));
}

#[test]
fn test_rejects_zoom_below_one() {
    let err = load_with("[camera]\nmax_zoom = 0.5\n").unwrap_err();
    assert!(err.contains("max_zoom"));
}

#[test]
fn test_rejects_empty_photo_directory() {
    let err = load_with("[photo_library]\ndirectory = \"\"\n").unwrap_err();
    assert!(err.contains("Photo library directory"));
}

#[test]
fn test_rejects_zero_frame_size() {
    let mut config = AppConfig::default();
    config.camera.frame_width = 0;
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_rejects_zero_result_limit() {
    let err = load_with("[detection]\nmax_results_per_category = 0\n").unwrap_err();
    assert!(err.contains("max_results_per_category"));
}
