use super::*;

#[test]
fn modifiers_combine_and_contain() {
    let mods = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(mods.contains(KeyModifiers::SHIFT));
    assert!(!mods.contains(KeyModifiers::ALT));
    assert!(KeyModifiers::NONE.is_empty());
}

#[test]
fn shift_alone_is_not_a_command_modifier() {
    assert!(!KeyModifiers::SHIFT.has_command_modifier());
    assert!(!KeyModifiers::NONE.has_command_modifier());
    assert!((KeyModifiers::SHIFT | KeyModifiers::ALT).has_command_modifier());
}

#[test]
fn key_constructors_default_to_press() {
    let key = KeyEvent::ctrl('q');
    assert_eq!(key.code, KeyCode::Char('q'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
    assert!(!key.is_release());
}

#[test]
fn mouse_event_has_no_modifiers_by_default() {
    let ev = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 3, 4);
    assert_eq!((ev.column, ev.row), (3, 4));
    assert!(ev.modifiers.is_empty());
}
