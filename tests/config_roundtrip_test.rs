//! Integration tests for config file I/O.

use rostr::config::Config;

#[test]
fn test_save_and_reload_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.settings.api.base_url = "http://localhost:8000/api".to_string();
    config.settings.gui.search_top_k = 5;
    config.settings.voice.silence_window_ms = 1500;

    config.save_to_file(&path).unwrap();
    let reloaded = Config::from_file(&path).unwrap();

    assert_eq!(reloaded.settings.api.base_url, "http://localhost:8000/api");
    assert_eq!(reloaded.settings.gui.search_top_k, 5);
    assert_eq!(reloaded.settings.voice.silence_window_ms, 1500);
}

#[test]
fn test_partial_file_gets_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    // Only one section present; everything else must fall back to defaults.
    std::fs::write(
        &path,
        "[settings.api]\nbase_url = \"http://example.test/api\"\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.settings.api.base_url, "http://example.test/api");
    assert_eq!(config.settings.api.timeout_secs, 30);
    assert_eq!(config.settings.gui.search_top_k, 20);
    assert_eq!(config.settings.gui.exact_threshold, 0.75);
    assert_eq!(config.settings.voice.silence_window_ms, 1000);
    assert!(config.settings.voice.enabled);
}

#[test]
fn test_empty_file_is_all_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.settings.voice.whisper_model, "base");
    assert_eq!(config.settings.gui.dashboard_refresh_secs, 30);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("config.toml");

    Config::default().save_to_file(&path).unwrap();
    assert!(path.exists());

    let reloaded = Config::from_file(&path).unwrap();
    assert_eq!(reloaded.settings.gui.search_top_k, 20);
}

#[test]
fn test_unparseable_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "not [valid toml").unwrap();

    assert!(Config::from_file(&path).is_err());
}
