//! Split-pane geometry and the pointer-drag state machine.
//!
//! Coordinates are CSS-style pixels. The preview split is a percentage of the container along
//! the orientation axis; the editor width is a pixel width centered in the viewport and only
//! exists while the panes are stacked.

pub const MIN_SPLIT_PERCENT: f64 = 20.0;
pub const MAX_SPLIT_PERCENT: f64 = 80.0;
pub const DEFAULT_SPLIT_PERCENT: f64 = 50.0;
pub const MIN_EDITOR_WIDTH_PX: f64 = 300.0;
pub const EDITOR_WIDTH_MARGIN_PX: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Preview above the editors.
    #[default]
    Stacked,
    /// Preview beside the editors.
    SideBySide,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Self::Stacked => Self::SideBySide,
            Self::SideBySide => Self::Stacked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    PreviewSplit,
    EditorWidth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub kind: DragKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    RowResize,
    ColResize,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// What a pointer move is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub container: Bounds,
    pub viewport_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    pub orientation: Orientation,
    pub preview_height_pct: Option<f64>,
    pub preview_width_pct: Option<f64>,
    pub editor_width_px: Option<f64>,
    pub drag: Option<DragSession>,
    pub cursor: CursorStyle,
    pub preview_pointer_events: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            orientation: Orientation::Stacked,
            preview_height_pct: None,
            preview_width_pct: None,
            editor_width_px: None,
            drag: None,
            cursor: CursorStyle::Default,
            preview_pointer_events: true,
        }
    }
}

impl LayoutState {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_kind(&self) -> Option<DragKind> {
        self.drag.map(|d| d.kind)
    }

    /// Explicit split override for the current orientation's axis.
    pub fn split_ratio(&self) -> Option<f64> {
        match self.orientation {
            Orientation::Stacked => self.preview_height_pct,
            Orientation::SideBySide => self.preview_width_pct,
        }
    }

    pub fn effective_split_percent(&self) -> f64 {
        self.split_ratio().unwrap_or(DEFAULT_SPLIT_PERCENT)
    }

    /// `None` means the editor section fills the available width.
    pub fn effective_editor_width_px(&self) -> Option<f64> {
        match self.orientation {
            Orientation::Stacked => self.editor_width_px,
            Orientation::SideBySide => None,
        }
    }

    /// Returns `false` when the gesture is ignored.
    pub fn begin_drag(&mut self, kind: DragKind) -> bool {
        if self.drag.is_some() {
            return false;
        }
        if kind == DragKind::EditorWidth && self.orientation == Orientation::SideBySide {
            return false;
        }

        self.drag = Some(DragSession { kind });
        self.cursor = match (kind, self.orientation) {
            (DragKind::PreviewSplit, Orientation::Stacked) => CursorStyle::RowResize,
            (DragKind::PreviewSplit, Orientation::SideBySide) => CursorStyle::ColResize,
            (DragKind::EditorWidth, _) => CursorStyle::ColResize,
        };
        if kind == DragKind::PreviewSplit {
            self.preview_pointer_events = false;
        }
        true
    }

    /// Applies a pointer move to the active drag. Returns whether the geometry changed.
    pub fn drag_to(&mut self, x: f64, y: f64, geometry: &Geometry) -> bool {
        let Some(session) = self.drag else {
            return false;
        };

        match session.kind {
            DragKind::PreviewSplit => {
                let Some(percent) = split_percent_at(self.orientation, x, y, &geometry.container)
                else {
                    return false;
                };
                let slot = match self.orientation {
                    Orientation::Stacked => &mut self.preview_height_pct,
                    Orientation::SideBySide => &mut self.preview_width_pct,
                };
                let prev = slot.replace(percent);
                prev != Some(percent)
            }
            DragKind::EditorWidth => {
                if self.orientation != Orientation::Stacked {
                    return false;
                }
                let width = editor_width_at(x, geometry.viewport_width);
                let prev = self.editor_width_px.replace(width);
                prev != Some(width)
            }
        }
    }

    /// Leaves the drag state, wherever the pointer is. Returns the finished kind.
    pub fn end_drag(&mut self) -> Option<DragKind> {
        let session = self.drag.take()?;
        self.cursor = CursorStyle::Default;
        self.preview_pointer_events = true;
        Some(session.kind)
    }

    /// Flips the orientation and drops split overrides measured on the old axis.
    pub fn toggle_orientation(&mut self) -> Orientation {
        self.end_drag();
        self.orientation = self.orientation.toggled();
        self.preview_height_pct = None;
        self.preview_width_pct = None;
        self.orientation
    }
}

pub fn clamp_split_percent(percent: f64) -> f64 {
    percent.clamp(MIN_SPLIT_PERCENT, MAX_SPLIT_PERCENT)
}

/// Preview share of the container for a pointer at `(x, y)`, or `None` for a degenerate
/// container.
pub fn split_percent_at(
    orientation: Orientation,
    x: f64,
    y: f64,
    container: &Bounds,
) -> Option<f64> {
    let (offset, extent) = match orientation {
        Orientation::SideBySide => (x - container.left, container.width),
        Orientation::Stacked => (y - container.top, container.height),
    };
    if extent.is_nan() || extent <= 0.0 || !offset.is_finite() {
        return None;
    }
    Some(clamp_split_percent(offset / extent * 100.0))
}

/// Editor width for a pointer at `x`: twice the distance to the viewport center.
///
/// The lower bound is applied first, so on viewports narrower than
/// `MIN_EDITOR_WIDTH_PX + EDITOR_WIDTH_MARGIN_PX` the upper bound wins.
pub fn editor_width_at(x: f64, viewport_width: f64) -> f64 {
    let width = (x - viewport_width / 2.0).abs() * 2.0;
    width
        .max(MIN_EDITOR_WIDTH_PX)
        .min(viewport_width - EDITOR_WIDTH_MARGIN_PX)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/layout.rs"]
mod tests;
