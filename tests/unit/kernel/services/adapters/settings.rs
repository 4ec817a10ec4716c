use super::*;
use tempfile::tempdir;

#[test]
fn default_file_is_written_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".livecode").join("settings.json");

    write_default_if_missing(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap(), Settings::default());

    std::fs::write(&path, r#"{ "layout": { "settle_delay_ms": 120 } }"#).unwrap();
    write_default_if_missing(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap().layout.settle_delay_ms, 120);
}

#[test]
fn broken_json_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ nope").unwrap();

    assert!(matches!(
        load_settings_from(&path),
        Err(SettingsError::Parse(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        load_settings_from(&dir.path().join("absent.json")),
        Err(SettingsError::Io(_))
    ));
}

#[test]
fn settings_path_ends_with_app_file() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with(".livecode/settings.json"));
    }
}
