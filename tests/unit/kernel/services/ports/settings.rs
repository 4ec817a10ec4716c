use super::*;
use std::time::Duration;

#[test]
fn empty_json_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").expect("parse empty settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.formatter.command, "prettier");
    assert!(settings.formatter.args.is_empty());
    assert_eq!(settings.formatter.timeout(), Duration::from_secs(10));
    assert_eq!(settings.preview.path, None);
    assert_eq!(settings.layout.settle_delay(), Duration::from_millis(50));
}

#[test]
fn partial_sections_fill_missing_fields() {
    let json = r#"{ "formatter": { "args": ["--no-semi"], "timeout_ms": 2500 }, "layout": {} }"#;
    let settings: Settings = serde_json::from_str(json).expect("parse partial settings");

    assert_eq!(settings.formatter.command, "prettier");
    assert_eq!(settings.formatter.args, vec!["--no-semi".to_string()]);
    assert_eq!(settings.formatter.timeout_ms, 2500);
    assert_eq!(settings.layout.settle_delay_ms, 50);
}

#[test]
fn preview_path_is_skipped_when_unset() {
    let json = serde_json::to_string(&Settings::default()).expect("serialize settings");
    assert!(!json.contains("\"path\""));

    let mut settings = Settings::default();
    settings.preview.path = Some("out/preview.html".into());
    let json = serde_json::to_string(&settings).expect("serialize settings");
    let decoded: Settings = serde_json::from_str(&json).expect("deserialize settings");
    assert_eq!(decoded.preview.path, settings.preview.path);
}
