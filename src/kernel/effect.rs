use std::time::Duration;

use crate::kernel::buffers::BufferSet;
use crate::kernel::Language;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    RenderPreview(String),
    PersistBuffers(BufferSet),
    SetPreviewPointerEvents(bool),
    RefreshEditor(Language),
    FocusEditor(Language),
    RefreshAllEditors { delay: Duration },
    FormatBuffer(Language),
    RequestFullscreen(bool),
}
