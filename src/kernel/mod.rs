//! Headless application core (state/action/effect).

pub mod action;
pub mod buffers;
pub mod compose;
pub mod effect;
pub mod language;
pub mod layout;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use buffers::{BufferSet, BufferStore};
pub use compose::{compose, compose_buffers};
pub use effect::Effect;
pub use language::Language;
pub use layout::{Bounds, CursorStyle, DragKind, Geometry, LayoutState, Orientation};
pub use state::{AppState, Notice, NoticeKind, PreviewTheme};
pub use store::{DispatchResult, Store};
