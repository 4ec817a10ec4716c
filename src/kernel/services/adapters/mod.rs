//! Service adapters: OS specific implementations of the ports.

pub mod formatter;
pub mod paths;
pub mod preview;
pub mod settings;
pub mod storage;

pub use formatter::ProcessFormatter;
pub use paths::{ensure_log_dir, ensure_session_dir, get_data_dir, get_log_dir, get_session_dir};
pub use preview::DocumentPreview;
pub use settings::{ensure_settings_file, get_settings_path, load_settings, load_settings_from};
pub use storage::{FileStore, MemoryStore};
