//! Tests for loading play configuration from disk.

use std::io::Write;

use supercheckers_cli::PlayConfig;

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
player_one = "Ada"
player_two = "Grace"
log_filter = "supercheckers=debug"
"#
    )
    .unwrap();

    let config = PlayConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.player_one(), "Ada");
    assert_eq!(config.player_two(), "Grace");
    assert_eq!(config.log_filter(), "supercheckers=debug");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = PlayConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(error.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_one = [1, 2").unwrap();

    let error = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(error.message.starts_with("Failed to parse config"));
}
