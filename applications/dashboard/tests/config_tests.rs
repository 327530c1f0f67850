use motive_dashboard::{DashboardConfig, DashboardError};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_load_from_file_with_partial_sections() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[assets]
root = "https://example.com/motive"

[rotation]
interval_secs = 10

[playback]
volume = 0.5
"#
    )
    .unwrap();

    let config = DashboardConfig::load(Some(file.path())).unwrap();
    config.validate().unwrap();

    assert_eq!(config.assets.root, "https://example.com/motive");
    assert_eq!(config.rotation.interval(), Duration::from_secs(10));
    assert_eq!(config.playback.volume, 0.5);
    // Unset values keep their defaults
    assert_eq!(config.playback.initial_track, "isochronic-tone-1.mp3");
    assert!(!config.playback.muted);
    assert_eq!(config.storage.database_url, "sqlite://./data/motive.db");
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = DashboardConfig::load(Some(dir.path().join("nope.toml").as_path()));
    assert!(matches!(result, Err(DashboardError::Config(_))));
}

#[test]
fn test_invalid_values_fail_validation() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[playback]
initial_track = "isochronic-tone-7.mp3"
"#
    )
    .unwrap();

    let config = DashboardConfig::load(Some(file.path())).unwrap();
    assert!(matches!(config.validate(), Err(DashboardError::Config(_))));
}
