use super::layout::{cell_to_px, contains};
use super::{Workbench, SCROLL_STEP};
use crate::core::event::{MouseButton, MouseEvent, MouseEventKind};
use crate::kernel::{Action, DragKind, Orientation};

impl Workbench {
    pub(super) fn handle_mouse(&mut self, event: &MouseEvent) -> bool {
        let (col, row) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_down(col, row),
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                if !self.playground.state().layout.is_dragging() {
                    return false;
                }
                let geometry = self.frame_layout().geometry();
                let (x, y) = cell_to_px(col, row);
                self.dispatch(Action::PointerMove { x, y, geometry })
            }
            MouseEventKind::Up(MouseButton::Left) => self.dispatch(Action::PointerUp),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                if !contains(self.frame_layout().editor, col, row) {
                    return false;
                }
                let delta = if event.kind == MouseEventKind::ScrollUp {
                    -SCROLL_STEP
                } else {
                    SCROLL_STEP
                };
                self.playground.active_editor_mut().scroll_by(delta);
                true
            }
            _ => false,
        }
    }

    fn handle_left_down(&mut self, col: u16, row: u16) -> bool {
        let layout = self.frame_layout();

        if let Some(button) = layout.button_at(col, row) {
            tracing::debug!(?button, "header button");
            return self.dispatch(button.action());
        }
        if contains(layout.splitter, col, row) {
            return self.dispatch(Action::PointerDown {
                kind: DragKind::PreviewSplit,
            });
        }
        if self.playground.state().layout.orientation == Orientation::Stacked
            && layout.on_handle(col, row)
        {
            return self.dispatch(Action::PointerDown {
                kind: DragKind::EditorWidth,
            });
        }
        if let Some(lang) = layout.tab_at(col, row) {
            return self.dispatch(Action::SelectTab(lang));
        }
        if contains(layout.editor, col, row) {
            let editor = self.playground.active_editor_mut();
            editor.click(col - layout.editor.x, row - layout.editor.y);
            return true;
        }
        false
    }
}
