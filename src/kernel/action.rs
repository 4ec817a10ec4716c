use crate::kernel::layout::{DragKind, Geometry};
use crate::kernel::state::Notice;
use crate::kernel::Language;

#[derive(Debug, Clone)]
pub enum Action {
    /// Emitted by an editor for every content mutation, including `set_text`.
    BufferChanged {
        lang: Language,
        text: String,
    },
    /// Recompose and push without persisting.
    Render,
    Run,
    Format,
    SelectTab(Language),
    PointerDown {
        kind: DragKind,
    },
    PointerMove {
        x: f64,
        y: f64,
        geometry: Geometry,
    },
    PointerUp,
    WindowBlur,
    ViewportResized,
    ToggleOrientation,
    ToggleTheme,
    ToggleFullscreen,
    FullscreenChanged(bool),
    ShowNotice(Notice),
    DismissNotice,
}
