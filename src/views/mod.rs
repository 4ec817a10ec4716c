//! Views: stateful widgets painted through `ui::core::painter`.

pub mod code_editor;

pub use code_editor::CodeEditor;
