use super::*;

#[test]
fn session_and_log_dirs_live_under_data_dir() {
    let Some(data) = get_data_dir() else {
        return;
    };
    assert!(data.to_string_lossy().contains(APP_NAME));

    let session = get_session_dir().unwrap();
    let logs = get_log_dir().unwrap();
    assert_eq!(session, data.join(SESSION_DIR));
    assert_eq!(logs, data.join(LOG_DIR));
}

#[test]
fn ensure_parent_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a").join("b").join("out.html");

    ensure_parent(&file).unwrap();

    assert!(dir.path().join("a").join("b").is_dir());
    assert!(!file.exists());
}

#[test]
fn ensure_parent_accepts_bare_file_name() {
    ensure_parent(std::path::Path::new("out.html")).unwrap();
}
