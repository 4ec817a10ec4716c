//! Wires the editors, the store and the service adapters together.
//!
//! The playground owns one editor per language. Editors report every edit on the kernel bus;
//! draining the bus feeds the store, whose effects are executed here against the preview
//! surface, the buffer store, the formatter and the display host.

use std::time::{Duration, Instant};

use crate::kernel::services::ports::{
    ChangeNotifier, DisplayHost, EditorWidget, Formatter, KeyValueStore, PreviewSurface,
};
use crate::kernel::services::{kernel_bus, KernelBusReceiver};
use crate::kernel::{Action, AppState, BufferStore, Language, Store};

mod bridge;
mod tick;

const MAX_KERNEL_DRAIN_PER_TICK: usize = 1024;

/// Everything the playground talks to besides its editors.
pub struct Services<P> {
    pub preview: P,
    pub storage: Box<dyn KeyValueStore>,
    pub formatter: Box<dyn Formatter>,
    pub display: Box<dyn DisplayHost>,
}

pub struct Playground<E, P> {
    store: Store,
    editors: [E; 3],
    preview: P,
    buffer_store: BufferStore,
    formatter: Box<dyn Formatter>,
    display: Box<dyn DisplayHost>,
    kernel_rx: KernelBusReceiver,
    refresh_deadline: Option<Instant>,
    restored: bool,
}

impl<E: EditorWidget, P: PreviewSurface> Playground<E, P> {
    /// Restores the session, seeds one editor per language and renders the first document.
    ///
    /// `make_editor` is called once per language in tab order. Seeding happens before the
    /// editors are subscribed, so startup neither persists nor re-renders per buffer.
    pub fn new(
        mut make_editor: impl FnMut(Language) -> E,
        services: Services<P>,
        settle_delay: Duration,
    ) -> Self {
        let Services {
            preview,
            storage,
            formatter,
            display,
        } = services;

        let buffer_store = BufferStore::new(storage);
        let (buffers, restored) = buffer_store.load_or_default();
        tracing::info!(restored, "buffers loaded");

        let (kernel_tx, kernel_rx) = kernel_bus();
        let mut editors = Language::ALL.map(&mut make_editor);
        for editor in editors.iter_mut() {
            let lang = editor.language();
            editor.set_text(buffers.get(lang));
            editor.on_change(ChangeNotifier::new(lang, kernel_tx.clone()));
        }

        let store = Store::new(AppState::new(buffers)).with_settle_delay(settle_delay);
        let mut playground = Self {
            store,
            editors,
            preview,
            buffer_store,
            formatter,
            display,
            kernel_rx,
            refresh_deadline: None,
            restored,
        };
        playground.dispatch(Action::Render);
        playground.dispatch(Action::SelectTab(Language::Markup));
        playground
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Whether the buffers came from a saved session rather than the sample.
    pub fn restored(&self) -> bool {
        self.restored
    }

    pub fn editor(&self, lang: Language) -> &E {
        &self.editors[lang.index()]
    }

    pub fn editor_mut(&mut self, lang: Language) -> &mut E {
        &mut self.editors[lang.index()]
    }

    pub fn active_editor(&self) -> &E {
        self.editor(self.state().active_tab)
    }

    pub fn active_editor_mut(&mut self) -> &mut E {
        let lang = self.state().active_tab;
        self.editor_mut(lang)
    }

    pub fn editors_mut(&mut self) -> impl Iterator<Item = &mut E> {
        self.editors.iter_mut()
    }

    pub fn preview(&self) -> &P {
        &self.preview
    }

    /// When the pending editor refresh is due, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.refresh_deadline
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/playground.rs"]
mod tests;
