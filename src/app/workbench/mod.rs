//! Terminal workbench: turns input events into playground actions and paints the frame.
//!
//! Everything here is frontend-neutral; the binary feeds it converted terminal events and a
//! ratatui-backed `Backend`, tests feed it synthetic events and a `TestBackend`.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Instant;

use super::playground::Playground;
use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::DocumentPreview;
use crate::kernel::Action;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::Painter;
use crate::views::CodeEditor;

mod input;
pub mod layout;
mod mouse;
mod render;

pub use layout::{FrameLayout, HeaderButton};

pub type TerminalPlayground = Playground<CodeEditor, DocumentPreview>;

const MAX_LOG_DRAIN_PER_TICK: usize = 256;
const SCROLL_STEP: isize = 3;

pub struct Workbench {
    playground: TerminalPlayground,
    theme: UiTheme,
    painter: Painter,
    area: Rect,
    log_rx: Option<Receiver<String>>,
    last_log: Option<String>,
    quit: bool,
}

impl Workbench {
    pub fn new(playground: TerminalPlayground, width: u16, height: u16) -> Self {
        let mut workbench = Self {
            playground,
            theme: UiTheme::default(),
            painter: Painter::new(),
            area: Rect::new(0, 0, width, height),
            log_rx: None,
            last_log: None,
            quit: false,
        };
        workbench.sync_editor_geometry();
        workbench.playground.dispatch(Action::ViewportResized);
        workbench
    }

    /// Lines written by the tracing subscriber; the newest one shows in the status row.
    pub fn with_log_rx(mut self, rx: Receiver<String>) -> Self {
        self.log_rx = Some(rx);
        self
    }

    pub fn playground(&self) -> &TerminalPlayground {
        &self.playground
    }

    pub fn playground_mut(&mut self) -> &mut TerminalPlayground {
        &mut self.playground
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn last_log(&self) -> Option<&str> {
        self.last_log.as_deref()
    }

    pub fn frame_layout(&self) -> FrameLayout {
        let state = self.playground.state();
        FrameLayout::compute(self.area, &state.layout, state.fullscreen)
    }

    /// Returns whether a redraw is needed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Paste(text) => {
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.playground.active_editor_mut().insert_str(&text);
                self.playground.poll_kernel_bus();
                true
            }
            InputEvent::Resize(w, h) => {
                self.area = Rect::new(0, 0, *w, *h);
                self.sync_editor_geometry();
                self.dispatch(Action::ViewportResized)
            }
            InputEvent::FocusLost => self.dispatch(Action::WindowBlur),
            InputEvent::FocusGained => false,
        }
    }

    /// Called by the main loop between input polls.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.playground.tick(now);
        changed |= self.poll_logs();
        changed
    }

    /// When the main loop must wake up even without input.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.playground.next_deadline()
    }

    fn dispatch(&mut self, action: Action) -> bool {
        let changed = self.playground.dispatch(action);
        self.sync_editor_geometry();
        changed
    }

    /// Hands every editor the width it will be measured with on its next refresh.
    fn sync_editor_geometry(&mut self) {
        let width = self.frame_layout().editor.w;
        for editor in self.playground.editors_mut() {
            editor.set_viewport_width(width);
        }
    }

    fn poll_logs(&mut self) -> bool {
        let Some(rx) = self.log_rx.as_ref() else {
            return false;
        };

        let mut changed = false;
        for _ in 0..MAX_LOG_DRAIN_PER_TICK {
            match rx.try_recv() {
                Ok(line) => {
                    self.last_log = Some(line);
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.log_rx = None;
                    break;
                }
            }
        }
        changed
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
