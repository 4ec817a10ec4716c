use super::buffers::BufferSet;
use super::language::Language;
use super::layout::LayoutState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewTheme {
    #[default]
    Dark,
    Light,
}

impl PreviewTheme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    FormatterUnavailable,
    FormatFailed,
}

/// A message the user must see; only one is shown at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn formatter_unavailable() -> Self {
        Self {
            kind: NoticeKind::FormatterUnavailable,
            message: "Formatting tools are still loading or failed to load.".to_string(),
        }
    }

    pub fn format_failed() -> Self {
        Self {
            kind: NoticeKind::FormatFailed,
            message: "Could not format code. Check the log for details.".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub buffers: BufferSet,
    pub active_tab: Language,
    pub layout: LayoutState,
    pub preview_theme: PreviewTheme,
    pub fullscreen: bool,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(buffers: BufferSet) -> Self {
        Self {
            buffers,
            active_tab: Language::Markup,
            layout: LayoutState::default(),
            preview_theme: PreviewTheme::default(),
            fullscreen: false,
            notice: None,
        }
    }
}
