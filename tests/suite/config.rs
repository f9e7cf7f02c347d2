//! Config file to running app.

use std::fs;
use std::time::Duration;

use restreveal_engine::{App, Edition, Phase, RestRevealConfig, Settings};

#[test]
fn config_file_drives_the_app() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[app]\nedition = \"quick\"\nreduced_motion = true\nascii_only = true\n",
    )
    .expect("write config");

    let config = RestRevealConfig::load_from(&path).expect("valid config");
    let settings = Settings::resolve_with(config.as_ref(), |_| None);
    assert_eq!(settings.edition, Edition::Quick);
    assert_eq!(settings.transition, Duration::from_millis(300));

    let mut app = App::new(settings);
    assert!(app.ui_options().ascii_only);
    app.start();
    // Reduced motion skips the delay entirely.
    assert_eq!(app.phase(), Phase::InProgress { index: 0 });
    assert_eq!(app.quiz().catalog().edition(), Edition::Quick);
}

#[test]
fn broken_config_reports_its_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app\nedition = ").expect("write config");

    let err = RestRevealConfig::load_from(&path).expect_err("parse failure");
    assert_eq!(err.path(), &path);
    assert!(err.to_string().contains("failed to parse config"));
}
