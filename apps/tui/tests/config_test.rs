use golive_tui::config::TuiConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_missing_file_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = TuiConfig::load_from(&path).unwrap();
    assert_eq!(config, TuiConfig::default());
    assert!(path.exists());

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# GoLive TUI Configuration"));
    assert!(written.contains("[ping]"));
}

#[test]
fn test_load_from_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[theme]\npreset = \"light\"\n\n[ping]\nurl = \"http://localhost:9\"\n").unwrap();

    let config = TuiConfig::load_from(&path).unwrap();
    assert_eq!(config.theme.preset, "light");
    assert_eq!(config.ping.url, "http://localhost:9");
    assert_eq!(config.ping.timeout_secs, 5);
}

#[test]
fn test_load_from_broken_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui\nsplash = ").unwrap();

    let err = TuiConfig::load_from(&path).unwrap_err();
    assert!(format!("{err}").contains("config.toml"));
}
