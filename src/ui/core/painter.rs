//! Paint list for one frame of the playground.
//!
//! The workbench and the code editor record what to draw; a backend replays the list in
//! order, so later commands cover earlier ones.

use super::geom::{Pos, Rect};
use super::style::Style;

/// Direction a one-cell line runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn glyph(self) -> char {
        match self {
            Axis::Horizontal => '─',
            Axis::Vertical => '│',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    /// Blank the cells and give them `style`.
    Fill { rect: Rect, style: Style },
    /// Merge `style` into the cells already painted, keeping their symbols.
    Overlay { rect: Rect, style: Style },
    /// Splitter bar or resize handle.
    Rule {
        origin: Pos,
        len: u16,
        axis: Axis,
        style: Style,
    },
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Rect,
    },
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn fill(&mut self, rect: Rect, style: Style) {
        if !rect.is_empty() {
            self.cmds.push(PaintCmd::Fill { rect, style });
        }
    }

    pub fn overlay(&mut self, rect: Rect, style: Style) {
        if !rect.is_empty() {
            self.cmds.push(PaintCmd::Overlay { rect, style });
        }
    }

    /// Dims everything painted so far inside `rect`.
    pub fn dim(&mut self, rect: Rect) {
        self.overlay(rect, Style::dimmed());
    }

    /// A line through `rect` along `axis`: its top row when horizontal, its left column when
    /// vertical.
    pub fn rule(&mut self, rect: Rect, axis: Axis, style: Style) {
        if rect.is_empty() {
            return;
        }
        let len = match axis {
            Axis::Horizontal => rect.w,
            Axis::Vertical => rect.h,
        };
        self.cmds.push(PaintCmd::Rule {
            origin: Pos::new(rect.x, rect.y),
            len,
            axis,
            style,
        });
    }

    /// Text starting at `pos`, cut off at the edges of `clip`.
    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style, clip: Rect) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
            clip,
        });
    }

    /// One row per line of `text`, top down from `area.y`, indented by `indent` columns.
    /// Returns how many rows were painted.
    pub fn lines(&mut self, area: Rect, indent: u16, text: &str, style: Style) -> u16 {
        let x = area.x.saturating_add(indent);
        let mut painted = 0;
        for (y, line) in (area.y..area.bottom()).zip(text.lines()) {
            self.text(Pos::new(x, y), line, style, area);
            painted += 1;
        }
        painted
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
