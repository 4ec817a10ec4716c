//! Frontend-neutral primitives shared by the workbench and terminal backends.

pub mod event;

pub use event::{InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
