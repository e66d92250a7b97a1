//! Tests for loading the TOML configuration.

use std::io::Write;

use pixel_chess::{AppConfig, TabKind};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_file_overrides_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
log_file = "game.log"
start_tab = "settings"

[display]
animations = false
music = true
"#
    )
    .unwrap();

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(*config.start_tab(), TabKind::Settings);
    assert!(!config.display().animations);
    assert!(config.display().effects);
    assert!(config.display().music);
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "start_tab = \"chessboard\"").unwrap();

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
