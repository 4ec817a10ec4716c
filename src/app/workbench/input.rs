use super::Workbench;
use crate::core::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::kernel::{Action, Language};
use crate::views::CodeEditor;

/// Workbench-level shortcuts. Everything else goes to the active editor.
fn shortcut(key: &KeyEvent) -> Option<Shortcut> {
    let mods = key.modifiers;
    let ctrl = mods.contains(KeyModifiers::CONTROL);
    let alt = mods.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char(c) if ctrl && c.eq_ignore_ascii_case(&'q') => Some(Shortcut::Quit),
        KeyCode::Char(c) if ctrl && c.eq_ignore_ascii_case(&'r') => {
            Some(Shortcut::Action(Action::Run))
        }
        KeyCode::Enter if mods.contains(KeyModifiers::SHIFT) => Some(Shortcut::Action(Action::Run)),
        KeyCode::Char(c) if alt && c.eq_ignore_ascii_case(&'f') => {
            Some(Shortcut::Action(Action::Format))
        }
        KeyCode::Char(c) if ctrl && c.eq_ignore_ascii_case(&'l') => {
            Some(Shortcut::Action(Action::ToggleOrientation))
        }
        KeyCode::Char(c) if ctrl && c.eq_ignore_ascii_case(&'t') => {
            Some(Shortcut::Action(Action::ToggleTheme))
        }
        KeyCode::F(11) => Some(Shortcut::Action(Action::ToggleFullscreen)),
        KeyCode::Char(c @ '1'..='3') if alt => {
            let index = c as usize - '1' as usize;
            Language::from_index(index).map(|lang| Shortcut::Action(Action::SelectTab(lang)))
        }
        KeyCode::Esc => Some(Shortcut::Action(Action::DismissNotice)),
        _ => None,
    }
}

enum Shortcut {
    Quit,
    Action(Action),
}

impl Workbench {
    pub(super) fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.is_release() {
            return false;
        }

        match shortcut(key) {
            Some(Shortcut::Quit) => {
                tracing::info!("quit requested");
                self.quit = true;
                true
            }
            Some(Shortcut::Action(action)) => self.dispatch(action),
            None => {
                let handled = edit_key(self.playground.active_editor_mut(), key);
                if handled {
                    self.playground.poll_kernel_bus();
                }
                handled
            }
        }
    }
}

fn edit_key(editor: &mut CodeEditor, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.has_command_modifier() => editor.insert_char(c),
        KeyCode::Enter => editor.insert_newline(),
        KeyCode::Tab => editor.insert_tab(),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Delete => editor.delete(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Up => editor.move_up(),
        KeyCode::Down => editor.move_down(),
        KeyCode::Home => editor.move_line_start(),
        KeyCode::End => editor.move_line_end(),
        KeyCode::PageUp => editor.page_up(),
        KeyCode::PageDown => editor.page_down(),
        _ => return false,
    }
    true
}
