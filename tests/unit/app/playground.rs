use super::*;
use crate::kernel::compose::compose_buffers;
use crate::kernel::services::adapters::DocumentPreview;
use crate::kernel::services::ports::{DisplayError, FormatError, FormatterStatus, StorageError};
use crate::kernel::{BufferSet, DragKind, NoticeKind, Orientation};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

struct FakeEditor {
    lang: Language,
    text: String,
    notifier: Option<ChangeNotifier>,
    focused: bool,
    refreshes: usize,
}

impl FakeEditor {
    fn new(lang: Language) -> Self {
        Self {
            lang,
            text: String::new(),
            notifier: None,
            focused: false,
            refreshes: 0,
        }
    }

    fn type_str(&mut self, s: &str) {
        self.text.push_str(s);
        if let Some(notifier) = &self.notifier {
            notifier.notify(self.text.clone());
        }
    }
}

impl EditorWidget for FakeEditor {
    fn language(&self) -> Language {
        self.lang
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        if let Some(notifier) = &self.notifier {
            notifier.notify(self.text.clone());
        }
    }

    fn refresh_layout(&mut self) {
        self.refreshes += 1;
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn on_change(&mut self, notifier: ChangeNotifier) {
        self.notifier = Some(notifier);
    }
}

#[derive(Clone, Default)]
struct SharedStore {
    entries: Rc<RefCell<HashMap<String, Vec<u8>>>>,
    writes: Rc<Cell<usize>>,
}

impl SharedStore {
    fn text(&self, key: &str) -> Option<String> {
        self.entries
            .borrow()
            .get(key)
            .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
    }
}

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &[u8]) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }
}

struct ScriptedFormatter {
    status: FormatterStatus,
    result: Result<String, FormatError>,
    calls: Rc<RefCell<Vec<(String, Language)>>>,
}

impl Formatter for ScriptedFormatter {
    fn status(&self) -> FormatterStatus {
        self.status.clone()
    }

    fn format(&self, text: &str, lang: Language) -> Result<String, FormatError> {
        self.calls.borrow_mut().push((text.to_string(), lang));
        self.result.clone()
    }
}

struct FakeDisplay {
    result: Result<(), DisplayError>,
    requests: Rc<RefCell<Vec<bool>>>,
}

impl DisplayHost for FakeDisplay {
    fn request_fullscreen(&mut self, enabled: bool) -> Result<(), DisplayError> {
        self.requests.borrow_mut().push(enabled);
        self.result.clone()
    }
}

struct Harness {
    playground: Playground<FakeEditor, DocumentPreview>,
    storage: SharedStore,
    format_calls: Rc<RefCell<Vec<(String, Language)>>>,
    fullscreen_requests: Rc<RefCell<Vec<bool>>>,
}

struct Options {
    storage: SharedStore,
    status: FormatterStatus,
    format_result: Result<String, FormatError>,
    display_result: Result<(), DisplayError>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            storage: SharedStore::default(),
            status: FormatterStatus::Ready,
            format_result: Ok("formatted".to_string()),
            display_result: Ok(()),
        }
    }
}

fn harness(options: Options) -> Harness {
    let format_calls = Rc::new(RefCell::new(Vec::new()));
    let fullscreen_requests = Rc::new(RefCell::new(Vec::new()));
    let services = Services {
        preview: DocumentPreview::new(None),
        storage: Box::new(options.storage.clone()),
        formatter: Box::new(ScriptedFormatter {
            status: options.status,
            result: options.format_result,
            calls: format_calls.clone(),
        }),
        display: Box::new(FakeDisplay {
            result: options.display_result,
            requests: fullscreen_requests.clone(),
        }),
    };
    let playground = Playground::new(FakeEditor::new, services, Duration::from_millis(50));
    Harness {
        playground,
        storage: options.storage,
        format_calls,
        fullscreen_requests,
    }
}

fn saved_session(markup: &str, style: &str, script: &str) -> SharedStore {
    let store = SharedStore::default();
    for (key, text) in [("lcb_html", markup), ("lcb_css", style), ("lcb_js", script)] {
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), text.as_bytes().to_vec());
    }
    store
}

#[test]
fn startup_without_session_shows_sample_and_does_not_persist() {
    let h = harness(Options::default());
    let pg = &h.playground;

    assert!(!pg.restored());
    assert_eq!(pg.state().buffers, BufferSet::default_sample());
    assert_eq!(pg.editor(Language::Style).text(), BufferSet::default_sample().style());
    assert_eq!(pg.preview().loads(), 1);
    assert_eq!(
        pg.preview().document(),
        compose_buffers(&BufferSet::default_sample())
    );
    assert_eq!(h.storage.writes.get(), 0);
}

#[test]
fn startup_restores_saved_session() {
    let h = harness(Options {
        storage: saved_session("<p>saved</p>", "p {}", "x();"),
        ..Options::default()
    });
    let pg = &h.playground;

    assert!(pg.restored());
    assert_eq!(pg.state().buffers, BufferSet::new("<p>saved</p>", "p {}", "x();"));
    assert_eq!(pg.editor(Language::Script).text(), "x();");
    assert!(pg.preview().document().contains("<p>saved</p>"));
}

#[test]
fn startup_activates_markup_tab() {
    let h = harness(Options::default());
    let pg = &h.playground;

    assert_eq!(pg.state().active_tab, Language::Markup);
    assert!(pg.editor(Language::Markup).focused);
    assert_eq!(pg.editor(Language::Markup).refreshes, 1);
    assert!(!pg.editor(Language::Style).focused);
    assert_eq!(pg.editor(Language::Style).refreshes, 0);
}

#[test]
fn typing_recomposes_pushes_and_persists() {
    let mut h = harness(Options {
        storage: saved_session("<p>a</p>", "", ""),
        ..Options::default()
    });

    h.playground.editor_mut(Language::Style).type_str("p { color: red; }");
    assert!(h.playground.poll_kernel_bus());

    let expected = BufferSet::new("<p>a</p>", "p { color: red; }", "");
    assert_eq!(h.playground.state().buffers, expected);
    assert_eq!(h.playground.preview().document(), compose_buffers(&expected));
    assert_eq!(h.storage.text("lcb_css").as_deref(), Some("p { color: red; }"));
    assert_eq!(h.storage.text("lcb_html").as_deref(), Some("<p>a</p>"));
}

#[test]
fn every_change_is_processed_in_order() {
    let mut h = harness(Options::default());
    let loads_before = h.playground.preview().loads();

    let editor = h.playground.editor_mut(Language::Markup);
    editor.set_text("");
    editor.type_str("a");
    editor.type_str("b");
    h.playground.tick(Instant::now());

    assert_eq!(h.playground.preview().loads(), loads_before + 3);
    assert_eq!(h.playground.state().buffers.markup(), "ab");
    assert_eq!(h.storage.text("lcb_html").as_deref(), Some("ab"));
    assert_eq!(h.storage.writes.get(), 9);
}

#[test]
fn run_renders_and_persists_without_changes() {
    let mut h = harness(Options::default());

    h.playground.dispatch(Action::Run);

    assert_eq!(h.playground.preview().loads(), 2);
    assert_eq!(
        h.storage.text("lcb_js").as_deref(),
        Some(BufferSet::default_sample().script())
    );
}

#[test]
fn persistence_failure_keeps_session_running() {
    let services = Services {
        preview: DocumentPreview::new(None),
        storage: Box::new(BrokenStore),
        formatter: Box::new(ScriptedFormatter {
            status: FormatterStatus::NotReady,
            result: Err(FormatError::Unavailable),
            calls: Rc::default(),
        }),
        display: Box::new(FakeDisplay {
            result: Err(DisplayError::Unsupported),
            requests: Rc::default(),
        }),
    };
    let mut pg = Playground::new(FakeEditor::new, services, Duration::ZERO);
    assert!(!pg.restored());

    pg.editor_mut(Language::Markup).set_text("<b>x</b>");
    pg.poll_kernel_bus();

    assert_eq!(pg.state().buffers.markup(), "<b>x</b>");
    assert!(pg.preview().document().contains("<b>x</b>"));
}

#[test]
fn format_replaces_active_buffer_and_persists() {
    let mut h = harness(Options {
        format_result: Ok("p {\n  color: red;\n}\n".to_string()),
        ..Options::default()
    });
    h.playground.dispatch(Action::SelectTab(Language::Style));

    h.playground.dispatch(Action::Format);

    assert_eq!(
        h.format_calls.borrow().as_slice(),
        &[(BufferSet::default_sample().style().to_string(), Language::Style)]
    );
    assert_eq!(
        h.playground.editor(Language::Style).text(),
        "p {\n  color: red;\n}\n"
    );
    assert_eq!(
        h.playground.state().buffers.style(),
        "p {\n  color: red;\n}\n"
    );
    assert_eq!(
        h.storage.text("lcb_css").as_deref(),
        Some("p {\n  color: red;\n}\n")
    );
    assert_eq!(
        h.playground.editor(Language::Markup).text(),
        BufferSet::default_sample().markup()
    );
    assert!(h.playground.state().notice.is_none());
}

#[test]
fn format_when_not_ready_shows_notice_and_leaves_buffer() {
    let mut h = harness(Options {
        status: FormatterStatus::NotReady,
        ..Options::default()
    });

    h.playground.dispatch(Action::Format);

    assert!(h.format_calls.borrow().is_empty());
    let notice = h.playground.state().notice.as_ref().map(|n| n.kind);
    assert_eq!(notice, Some(NoticeKind::FormatterUnavailable));
    assert_eq!(
        h.playground.state().buffers.markup(),
        BufferSet::default_sample().markup()
    );
    assert_eq!(h.storage.writes.get(), 0);
}

#[test]
fn format_when_errored_shows_unavailable_notice() {
    let mut h = harness(Options {
        status: FormatterStatus::Errored("missing plugin".to_string()),
        ..Options::default()
    });

    h.playground.dispatch(Action::Format);

    assert!(h.format_calls.borrow().is_empty());
    let notice = h.playground.state().notice.as_ref().map(|n| n.kind);
    assert_eq!(notice, Some(NoticeKind::FormatterUnavailable));
}

#[test]
fn format_syntax_error_leaves_buffer_and_shows_notice() {
    let mut h = harness(Options {
        storage: saved_session("<div", "", ""),
        format_result: Err(FormatError::Syntax {
            parser: "html",
            message: "Unexpected character".to_string(),
        }),
        ..Options::default()
    });

    h.playground.dispatch(Action::Format);

    assert_eq!(h.format_calls.borrow().len(), 1);
    assert_eq!(h.playground.editor(Language::Markup).text(), "<div");
    assert_eq!(h.playground.state().buffers.markup(), "<div");
    let notice = h.playground.state().notice.as_ref().map(|n| n.kind);
    assert_eq!(notice, Some(NoticeKind::FormatFailed));
    assert_eq!(h.storage.writes.get(), 0);
}

#[test]
fn select_tab_focuses_and_refreshes_only_new_editor() {
    let mut h = harness(Options::default());

    h.playground.dispatch(Action::SelectTab(Language::Script));

    let pg = &h.playground;
    assert_eq!(pg.state().active_tab, Language::Script);
    assert!(pg.editor(Language::Script).focused);
    assert!(!pg.editor(Language::Markup).focused);
    assert_eq!(pg.editor(Language::Script).refreshes, 1);
    assert_eq!(pg.editor(Language::Style).refreshes, 0);
    assert_eq!(pg.active_editor().language(), Language::Script);
}

#[test]
fn orientation_toggle_refreshes_all_editors_after_delay() {
    let mut h = harness(Options::default());
    let start = Instant::now();

    h.playground.dispatch(Action::ToggleOrientation);
    assert_eq!(h.playground.state().layout.orientation, Orientation::SideBySide);
    let deadline = h.playground.next_deadline().unwrap();
    assert!(deadline >= start + Duration::from_millis(50));

    assert!(!h.playground.tick(start));
    assert_eq!(h.playground.editor(Language::Style).refreshes, 0);

    assert!(h.playground.tick(deadline));
    for lang in Language::ALL {
        assert!(h.playground.editor(lang).refreshes >= 1);
    }
    assert_eq!(h.playground.editor(Language::Style).refreshes, 1);
    assert!(h.playground.next_deadline().is_none());
}

#[test]
fn preview_split_drag_blocks_preview_pointer_until_release() {
    let mut h = harness(Options::default());

    h.playground.dispatch(Action::PointerDown {
        kind: DragKind::PreviewSplit,
    });
    assert!(!h.playground.preview().pointer_passthrough());

    h.playground.dispatch(Action::WindowBlur);
    assert!(h.playground.preview().pointer_passthrough());
    assert!(!h.playground.state().layout.is_dragging());
    assert_eq!(h.playground.editor(Language::Markup).refreshes, 2);
}

#[test]
fn fullscreen_success_is_recorded() {
    let mut h = harness(Options::default());

    assert!(h.playground.dispatch(Action::ToggleFullscreen));
    assert!(h.playground.state().fullscreen);
    h.playground.dispatch(Action::ToggleFullscreen);
    assert!(!h.playground.state().fullscreen);

    assert_eq!(h.fullscreen_requests.borrow().as_slice(), &[true, false]);
}

#[test]
fn fullscreen_failure_leaves_state_without_notice() {
    let mut h = harness(Options {
        display_result: Err(DisplayError::Denied("not a tty".to_string())),
        ..Options::default()
    });

    assert!(!h.playground.dispatch(Action::ToggleFullscreen));

    assert!(!h.playground.state().fullscreen);
    assert!(h.playground.state().notice.is_none());
    assert_eq!(h.fullscreen_requests.borrow().as_slice(), &[true]);
}
