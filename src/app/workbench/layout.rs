//! Cell geometry of one frame, derived from the layout state.
//!
//! The drag state machine works in pixels; cells are converted with a fixed cell size so a
//! drag onto a row or column lands the splitter exactly there.

use crate::kernel::{Action, Bounds, Geometry, Language, LayoutState, Orientation};
use crate::ui::core::geom::Rect;

pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const TITLE: &str = " livecode ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderButton {
    Run,
    Format,
    Layout,
    Theme,
    Fullscreen,
}

impl HeaderButton {
    pub const ALL: [HeaderButton; 5] = [
        HeaderButton::Run,
        HeaderButton::Format,
        HeaderButton::Layout,
        HeaderButton::Theme,
        HeaderButton::Fullscreen,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Run => " Run ",
            Self::Format => " Format ",
            Self::Layout => " Layout ",
            Self::Theme => " Theme ",
            Self::Fullscreen => " Full ",
        }
    }

    pub fn action(self) -> Action {
        match self {
            Self::Run => Action::Run,
            Self::Format => Action::Format,
            Self::Layout => Action::ToggleOrientation,
            Self::Theme => Action::ToggleTheme,
            Self::Fullscreen => Action::ToggleFullscreen,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLayout {
    pub area: Rect,
    pub header: Option<Rect>,
    pub buttons: Vec<(HeaderButton, Rect)>,
    pub status: Option<Rect>,
    pub body: Rect,
    pub preview: Rect,
    pub splitter: Rect,
    /// Editor section including its resize handles.
    pub section: Rect,
    /// Left and right edge handles; only while stacked.
    pub handles: Option<(Rect, Rect)>,
    pub tabs: Vec<(Language, Rect)>,
    pub editor: Rect,
}

impl FrameLayout {
    pub fn compute(area: Rect, layout: &LayoutState, fullscreen: bool) -> Self {
        let (header, rest) = if fullscreen {
            (None, area)
        } else {
            let (header, rest) = area.split_top(HEADER_HEIGHT);
            (Some(header), rest)
        };
        let (body, status) = if fullscreen {
            (rest, None)
        } else {
            let (body, status) = rest.split_bottom(STATUS_HEIGHT);
            (body, Some(status))
        };

        let buttons = header.map(header_buttons).unwrap_or_default();
        let split = layout.effective_split_percent();

        let (preview, splitter, section, handles, inner) = match layout.orientation {
            Orientation::Stacked => {
                let preview_h = scaled(body.h, split).min(body.h.saturating_sub(1));
                let (preview, rest) = body.split_top(preview_h);
                let (splitter, below) = rest.split_top(1);

                let cols = layout
                    .effective_editor_width_px()
                    .map(|px| ((px / CELL_WIDTH_PX).round() as u16).min(below.w))
                    .unwrap_or(below.w);
                let section = Rect::new(below.x + (below.w - cols) / 2, below.y, cols, below.h);

                if section.w >= 3 {
                    let left = Rect::new(section.x, section.y, 1, section.h);
                    let right = Rect::new(section.right() - 1, section.y, 1, section.h);
                    let inner = Rect::new(section.x + 1, section.y, section.w - 2, section.h);
                    (preview, splitter, section, Some((left, right)), inner)
                } else {
                    (preview, splitter, section, None, section)
                }
            }
            Orientation::SideBySide => {
                let preview_w = scaled(body.w, split).min(body.w.saturating_sub(1));
                let (preview, rest) = body.split_left(preview_w);
                let (splitter, section) = rest.split_left(1);
                (preview, splitter, section, None, section)
            }
        };

        let (tab_row, editor) = inner.split_top(1);
        let tabs = tab_rects(tab_row);

        Self {
            area,
            header,
            buttons,
            status,
            body,
            preview,
            splitter,
            section,
            handles,
            tabs,
            editor,
        }
    }

    /// Pixel geometry pointer moves are measured against.
    pub fn geometry(&self) -> Geometry {
        Geometry {
            container: Bounds::new(
                self.body.x as f64 * CELL_WIDTH_PX,
                self.body.y as f64 * CELL_HEIGHT_PX,
                self.body.w as f64 * CELL_WIDTH_PX,
                self.body.h as f64 * CELL_HEIGHT_PX,
            ),
            viewport_width: self.area.w as f64 * CELL_WIDTH_PX,
        }
    }

    pub fn button_at(&self, col: u16, row: u16) -> Option<HeaderButton> {
        self.buttons
            .iter()
            .find(|(_, rect)| contains(*rect, col, row))
            .map(|(button, _)| *button)
    }

    pub fn tab_at(&self, col: u16, row: u16) -> Option<Language> {
        self.tabs
            .iter()
            .find(|(_, rect)| contains(*rect, col, row))
            .map(|(lang, _)| *lang)
    }

    pub fn on_handle(&self, col: u16, row: u16) -> bool {
        self.handles
            .is_some_and(|(left, right)| contains(left, col, row) || contains(right, col, row))
    }
}

pub fn cell_to_px(col: u16, row: u16) -> (f64, f64) {
    (col as f64 * CELL_WIDTH_PX, row as f64 * CELL_HEIGHT_PX)
}

pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    rect.contains(crate::ui::core::geom::Pos::new(col, row))
}

fn scaled(extent: u16, percent: f64) -> u16 {
    (extent as f64 * percent / 100.0).round() as u16
}

fn header_buttons(header: Rect) -> Vec<(HeaderButton, Rect)> {
    let mut x = header.x.saturating_add(TITLE.len() as u16);
    let mut out = Vec::with_capacity(HeaderButton::ALL.len());
    for button in HeaderButton::ALL {
        let w = button.label().len() as u16;
        let rect = Rect::new(x, header.y, w, 1).intersect(header);
        if rect.is_empty() {
            break;
        }
        out.push((button, rect));
        x = x.saturating_add(w + 1);
    }
    out
}

fn tab_rects(row: Rect) -> Vec<(Language, Rect)> {
    let mut x = row.x;
    let mut out = Vec::with_capacity(Language::ALL.len());
    for lang in Language::ALL {
        let w = tab_label(lang).len() as u16;
        let rect = Rect::new(x, row.y, w, row.h).intersect(row);
        if rect.is_empty() {
            break;
        }
        out.push((lang, rect));
        x = x.saturating_add(w);
    }
    out
}

pub fn tab_label(lang: Language) -> String {
    format!(" {} ", lang.display_name())
}

pub fn title() -> &'static str {
    TITLE
}
