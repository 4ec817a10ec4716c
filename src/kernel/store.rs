use std::time::Duration;

use super::compose::compose_buffers;
use super::layout::DragKind;
use super::{Action, AppState, Effect};

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(50);

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
    settle_delay: Duration,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::BufferChanged { lang, text } => {
                let state_changed = self.state.buffers.set(lang, text);
                DispatchResult {
                    effects: self.pipeline_effects(true),
                    state_changed,
                }
            }
            Action::Render => DispatchResult {
                effects: self.pipeline_effects(false),
                state_changed: false,
            },
            Action::Run => DispatchResult {
                effects: self.pipeline_effects(true),
                state_changed: false,
            },
            Action::Format => DispatchResult {
                effects: vec![Effect::FormatBuffer(self.state.active_tab)],
                state_changed: false,
            },
            Action::SelectTab(lang) => {
                let prev = self.state.active_tab;
                self.state.active_tab = lang;
                DispatchResult {
                    effects: vec![Effect::RefreshEditor(lang), Effect::FocusEditor(lang)],
                    state_changed: prev != lang,
                }
            }
            Action::PointerDown { kind } => {
                if !self.state.layout.begin_drag(kind) {
                    tracing::debug!(?kind, "drag start ignored");
                    return DispatchResult::unchanged();
                }
                let effects = if kind == DragKind::PreviewSplit {
                    vec![Effect::SetPreviewPointerEvents(false)]
                } else {
                    Vec::new()
                };
                DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            Action::PointerMove { x, y, geometry } => {
                DispatchResult::changed(self.state.layout.drag_to(x, y, &geometry))
            }
            Action::PointerUp | Action::WindowBlur => self.finish_drag(),
            Action::ViewportResized => DispatchResult {
                effects: vec![Effect::RefreshEditor(self.state.active_tab)],
                state_changed: true,
            },
            Action::ToggleOrientation => {
                let was_dragging = self.state.layout.is_dragging();
                let orientation = self.state.layout.toggle_orientation();
                tracing::debug!(?orientation, "orientation toggled");

                let mut effects = Vec::new();
                if was_dragging {
                    effects.push(Effect::SetPreviewPointerEvents(true));
                }
                effects.push(Effect::RefreshAllEditors {
                    delay: self.settle_delay,
                });
                DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            Action::ToggleTheme => {
                self.state.preview_theme = self.state.preview_theme.toggled();
                DispatchResult::changed(true)
            }
            Action::ToggleFullscreen => DispatchResult {
                effects: vec![Effect::RequestFullscreen(!self.state.fullscreen)],
                state_changed: false,
            },
            Action::FullscreenChanged(enabled) => {
                let prev = self.state.fullscreen;
                self.state.fullscreen = enabled;
                DispatchResult::changed(prev != enabled)
            }
            Action::ShowNotice(notice) => {
                self.state.notice = Some(notice);
                DispatchResult::changed(true)
            }
            Action::DismissNotice => DispatchResult::changed(self.state.notice.take().is_some()),
        }
    }

    // compose -> render -> persist, in that order.
    fn pipeline_effects(&self, persist: bool) -> Vec<Effect> {
        let mut effects = vec![Effect::RenderPreview(compose_buffers(&self.state.buffers))];
        if persist {
            effects.push(Effect::PersistBuffers(self.state.buffers.clone()));
        }
        effects
    }

    fn finish_drag(&mut self) -> DispatchResult {
        let Some(kind) = self.state.layout.end_drag() else {
            return DispatchResult::unchanged();
        };
        tracing::debug!(?kind, "drag finished");

        DispatchResult {
            effects: vec![
                Effect::SetPreviewPointerEvents(true),
                Effect::RefreshEditor(self.state.active_tab),
            ],
            state_changed: true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
