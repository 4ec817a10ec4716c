use crate::kernel::services::bus::KernelBusSender;
use crate::kernel::Language;

/// The capability surface the orchestrator uses for each of the three editors.
pub trait EditorWidget {
    fn language(&self) -> Language;

    fn text(&self) -> String;

    /// Replaces the whole content. Fires the change notification like any other edit.
    fn set_text(&mut self, text: &str);

    /// Recompute internal measurements after the visible geometry changed.
    fn refresh_layout(&mut self);

    fn focus(&mut self);

    /// Counterpart of `focus` for editors that are no longer active.
    fn blur(&mut self) {}

    fn on_change(&mut self, notifier: ChangeNotifier);
}

/// Change subscription handed to an editor at startup.
#[derive(Clone)]
pub struct ChangeNotifier {
    lang: Language,
    bus: KernelBusSender,
}

impl ChangeNotifier {
    pub fn new(lang: Language, bus: KernelBusSender) -> Self {
        Self { lang, bus }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn notify(&self, text: String) {
        let lang = self.lang;
        if self.bus.buffer_edited(lang, text).is_err() {
            tracing::debug!(lang = lang.tag(), "change dropped: kernel bus closed");
        }
    }
}
