use super::*;

#[test]
fn storage_keys_are_distinct_and_stable() {
    assert_eq!(Language::Markup.storage_key(), "lcb_html");
    assert_eq!(Language::Style.storage_key(), "lcb_css");
    assert_eq!(Language::Script.storage_key(), "lcb_js");
}

#[test]
fn index_round_trips_for_every_language() {
    for lang in Language::ALL {
        assert_eq!(Language::from_index(lang.index()), Some(lang));
    }
    assert_eq!(Language::from_index(3), None);
}

#[test]
fn script_uses_babel_parser() {
    assert_eq!(Language::Markup.formatter_parser(), "html");
    assert_eq!(Language::Style.formatter_parser(), "css");
    assert_eq!(Language::Script.formatter_parser(), "babel");
}
