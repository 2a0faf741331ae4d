//! Integration tests for configuration management

use grade_tracker::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.data_file.is_empty(),
        "Default data_file should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert!(
        !config.paths.data_file.contains("$GRADE_TRACKER"),
        "Defaults should be expanded"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_file = "./gradebook.json"
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_file, "./gradebook.json");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.data_file, "");
}

#[test]
fn test_config_from_toml_rejects_garbage() {
    assert!(Config::from_toml("[logging\nlevel = ").is_err());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GRADE_TRACKER/logs/app.log"

[paths]
data_file = "$GRADE_TRACKER/gradebook.json"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
    let dir = Config::get_gradetracker_dir();

    assert_eq!(
        PathBuf::from(&config.logging.file),
        dir.join("logs").join("app.log")
    );
    assert_eq!(
        PathBuf::from(&config.paths.data_file),
        dir.join("gradebook.json")
    );
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    config.set("level", "INFO").expect("valid level");
    assert_eq!(config.get("level"), Some("info".to_string()));

    config.set("verbose", "true").expect("valid bool");
    assert_eq!(config.get("verbose"), Some("true".to_string()));

    config.set("data-file", "/srv/grades.json").expect("valid path");
    assert_eq!(config.get("data_file"), Some("/srv/grades.json".to_string()));

    assert!(config.set("level", "loud").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("nonsense", "1").is_err());
    assert!(config.get("nonsense").is_none());
}

#[test]
fn test_config_unset() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();

    config.set("reports_dir", "/elsewhere").unwrap();
    config.unset("reports_dir", &defaults).unwrap();
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);

    assert!(config.unset("nonsense", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "error").unwrap();
    config.set("data_file", "/srv/grades.json").unwrap();
    config.save_to(&config_file).expect("Failed to save config");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.logging.level, "error");
    assert_eq!(loaded.paths.data_file, "/srv/grades.json");
}

#[test]
fn test_load_from_missing_file_writes_defaults() {
    let (_temp_dir, config_file) = setup_temp_config();
    assert!(!config_file.exists());

    let config = Config::load_from(&config_file);
    assert!(config_file.exists(), "First run should create the config file");
    assert_eq!(
        config.logging.level,
        Config::from_defaults().logging.level
    );
}

#[test]
fn test_load_from_unparseable_file_uses_defaults() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::write(&config_file, "not = [valid").unwrap();

    let config = Config::load_from(&config_file);
    assert_eq!(
        config.paths.data_file,
        Config::from_defaults().paths.data_file
    );
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        file: Some("/tmp/override.log".to_string()),
        verbose: Some(true),
        data_file: Some("/tmp/gradebook.json".to_string()),
        reports_dir: Some("/tmp/reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, "/tmp/override.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_file, "/tmp/gradebook.json");
    assert_eq!(config.paths.reports_dir, "/tmp/reports");
}

#[test]
fn test_config_overrides_partial() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();
    let overrides = ConfigOverrides {
        data_file: Some("/tmp/other.json".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.paths.data_file, "/tmp/other.json");
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
}

#[test]
fn test_config_display_format() {
    let display = Config::from_defaults().to_string();

    assert!(display.contains("[logging]"));
    assert!(display.contains("level = "));
    assert!(display.contains("[paths]"));
    assert!(display.contains("data_file = "));
    assert!(display.contains("reports_dir = "));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_toml("[logging]\nlevel = \"info\"\n").unwrap();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.paths.data_file, defaults.paths.data_file);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();
    config.paths.data_file = "/mine.json".to_string();
    config.logging.file = "/mine.log".to_string();

    assert!(!config.merge_defaults(&defaults));
    assert_eq!(config.paths.data_file, "/mine.json");
}

#[test]
fn test_get_gradetracker_dir() {
    let dir = Config::get_gradetracker_dir();
    assert!(dir.ends_with("gradetracker"));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let name = path.file_name().and_then(|n| n.to_str()).unwrap();
    assert!(name == "config.toml" || name == "dconfig.toml");
    assert_eq!(path.parent(), Some(Config::get_gradetracker_dir().as_path()));
}
