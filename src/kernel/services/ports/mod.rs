//! Service ports: traits + data contracts.

pub mod config;
pub mod display;
pub mod editor;
pub mod formatter;
pub mod preview;
pub mod settings;
pub mod storage;

pub use config::EditorConfig;
pub use display::{DisplayError, DisplayHost};
pub use editor::{ChangeNotifier, EditorWidget};
pub use formatter::{FormatError, Formatter, FormatterStatus};
pub use preview::{PreviewError, PreviewSurface};
pub use settings::{FormatterSettings, LayoutSettings, PreviewSettings, Settings};
pub use storage::{KeyValueStore, StorageError};

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
