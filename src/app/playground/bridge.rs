use std::time::Instant;

use super::Playground;
use crate::kernel::services::ports::{EditorWidget, FormatError, FormatterStatus, PreviewSurface};
use crate::kernel::{Action, Effect, Language, Notice};

impl<E: EditorWidget, P: PreviewSurface> Playground<E, P> {
    /// Reduces `action` and runs the resulting effects. Returns whether state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        let mut state_changed = result.state_changed;
        for effect in result.effects {
            state_changed |= self.run_effect(effect);
        }
        state_changed
    }

    fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::RenderPreview(document) => {
                if let Err(e) = self.preview.load_document(&document) {
                    tracing::warn!(error = %e, "preview write failed");
                }
                true
            }
            Effect::PersistBuffers(buffers) => {
                if let Err(e) = self.buffer_store.save(&buffers) {
                    tracing::warn!(error = %e, "persist buffers failed");
                }
                false
            }
            Effect::SetPreviewPointerEvents(enabled) => {
                self.preview.set_pointer_passthrough(enabled);
                true
            }
            Effect::RefreshEditor(lang) => {
                self.editor_mut(lang).refresh_layout();
                true
            }
            Effect::FocusEditor(lang) => {
                for editor in self.editors.iter_mut() {
                    if editor.language() == lang {
                        editor.focus();
                    } else {
                        editor.blur();
                    }
                }
                true
            }
            Effect::RefreshAllEditors { delay } => {
                self.refresh_deadline = Some(Instant::now() + delay);
                false
            }
            Effect::FormatBuffer(lang) => self.format_buffer(lang),
            Effect::RequestFullscreen(enabled) => match self.display.request_fullscreen(enabled) {
                Ok(()) => self.dispatch(Action::FullscreenChanged(enabled)),
                Err(e) => {
                    tracing::error!(enabled, error = %e, "fullscreen request failed");
                    false
                }
            },
        }
    }

    fn format_buffer(&mut self, lang: Language) -> bool {
        match self.formatter.status() {
            FormatterStatus::Ready => {}
            FormatterStatus::NotReady => {
                tracing::info!(lang = lang.tag(), "formatter not ready");
                return self.dispatch(Action::ShowNotice(Notice::formatter_unavailable()));
            }
            FormatterStatus::Errored(reason) => {
                tracing::info!(lang = lang.tag(), %reason, "formatter failed to load");
                return self.dispatch(Action::ShowNotice(Notice::formatter_unavailable()));
            }
        }

        let source = self.editor(lang).text();
        match self.formatter.format(&source, lang) {
            Ok(formatted) => {
                tracing::debug!(lang = lang.tag(), "buffer formatted");
                self.editor_mut(lang).set_text(&formatted);
                self.poll_kernel_bus()
            }
            Err(FormatError::Unavailable) => {
                tracing::info!(lang = lang.tag(), "formatter unavailable");
                self.dispatch(Action::ShowNotice(Notice::formatter_unavailable()))
            }
            Err(e) => {
                tracing::error!(lang = lang.tag(), error = %e, "format failed");
                self.dispatch(Action::ShowNotice(Notice::format_failed()))
            }
        }
    }
}
