use super::*;
use crate::kernel::services::adapters::storage::MemoryStore;

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Err(StorageError::Unavailable("quota".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &[u8]) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[test]
fn save_then_load_restores_exact_texts() {
    let mut store = BufferStore::new(Box::new(MemoryStore::new()));
    let buffers = BufferSet::new("<b>x</b>\n", "b { color: red }", "");

    store.save(&buffers).unwrap();

    assert_eq!(store.load(), Some(buffers));
}

#[test]
fn empty_storage_loads_default_sample() {
    let store = BufferStore::new(Box::new(MemoryStore::new()));

    let (buffers, restored) = store.load_or_default();

    assert!(!restored);
    assert_eq!(buffers, BufferSet::default_sample());
}

#[test]
fn partial_session_falls_back_for_all_three() {
    let mut memory = MemoryStore::new();
    memory.set("lcb_html", b"<p>saved</p>").unwrap();
    memory.set("lcb_css", b"p {}").unwrap();
    let store = BufferStore::new(Box::new(memory));

    assert_eq!(store.load(), None);
    let (buffers, restored) = store.load_or_default();
    assert!(!restored);
    assert_eq!(buffers.markup(), SAMPLE_MARKUP);
}

#[test]
fn saved_empty_strings_count_as_a_session() {
    let mut store = BufferStore::new(Box::new(MemoryStore::new()));
    store.save(&BufferSet::empty()).unwrap();

    let (buffers, restored) = store.load_or_default();
    assert!(restored);
    assert_eq!(buffers, BufferSet::empty());
}

#[test]
fn invalid_utf8_is_treated_as_missing() {
    let mut memory = MemoryStore::new();
    memory.set("lcb_html", &[0xff, 0xfe]).unwrap();
    memory.set("lcb_css", b"").unwrap();
    memory.set("lcb_js", b"").unwrap();
    let store = BufferStore::new(Box::new(memory));

    assert_eq!(store.load(), None);
}

#[test]
fn unavailable_storage_loads_defaults_and_reports_save_error() {
    let mut store = BufferStore::new(Box::new(BrokenStore));

    assert_eq!(store.load_or_default().0, BufferSet::default_sample());
    assert!(matches!(
        store.save(&BufferSet::empty()),
        Err(StorageError::Unavailable(_))
    ));
}

#[test]
fn set_reports_whether_text_changed() {
    let mut buffers = BufferSet::empty();
    assert!(buffers.set(Language::Script, "x".to_string()));
    assert!(!buffers.set(Language::Script, "x".to_string()));
    assert_eq!(buffers.script(), "x");
    assert_eq!(buffers.style(), "");
}

#[test]
fn iter_visits_languages_in_order() {
    let buffers = BufferSet::new("a", "b", "c");
    let seen: Vec<_> = buffers.iter().collect();
    assert_eq!(
        seen,
        vec![
            (Language::Markup, "a"),
            (Language::Style, "b"),
            (Language::Script, "c"),
        ]
    );
}
