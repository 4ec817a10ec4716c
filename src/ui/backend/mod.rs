//! Rendering backends.
//!
//! Both backends replay a paint list through [`replay`] onto a [`Surface`]; they differ only
//! in how a single cell is stored.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{Axis, PaintCmd};
use crate::ui::core::style::Style;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}

/// A grid of cells a paint list can be replayed onto.
pub trait Surface {
    fn bounds(&self) -> Rect;

    /// Replaces the cell's symbol and style. Out of bounds writes are ignored.
    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style);

    /// Merges `style` into the cell, keeping its symbol.
    fn overlay(&mut self, x: u16, y: u16, style: Style);
}

pub fn replay<S: Surface + ?Sized>(surface: &mut S, cmds: &[PaintCmd]) {
    let bounds = surface.bounds();
    for cmd in cmds {
        match cmd {
            PaintCmd::Fill { rect, style } => {
                let rect = rect.intersect(bounds);
                for y in rect.y..rect.bottom() {
                    for x in rect.x..rect.right() {
                        surface.put(x, y, " ", *style);
                    }
                }
            }
            PaintCmd::Overlay { rect, style } => {
                let rect = rect.intersect(bounds);
                for y in rect.y..rect.bottom() {
                    for x in rect.x..rect.right() {
                        surface.overlay(x, y, *style);
                    }
                }
            }
            PaintCmd::Rule {
                origin,
                len,
                axis,
                style,
            } => {
                let rect = match axis {
                    Axis::Horizontal => Rect::new(origin.x, origin.y, *len, 1),
                    Axis::Vertical => Rect::new(origin.x, origin.y, 1, *len),
                }
                .intersect(bounds);
                let mut tmp = [0u8; 4];
                let glyph = axis.glyph().encode_utf8(&mut tmp);
                for y in rect.y..rect.bottom() {
                    for x in rect.x..rect.right() {
                        surface.put(x, y, glyph, *style);
                    }
                }
            }
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => replay_text(surface, *pos, text, *style, clip.intersect(bounds)),
        }
    }
}

fn replay_text<S: Surface + ?Sized>(surface: &mut S, pos: Pos, text: &str, style: Style, clip: Rect) {
    if clip.is_empty() || pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        // A wide glyph is drawn whole or not at all.
        if x.saturating_add(w) > clip.right() {
            break;
        }
        if x >= clip.x {
            surface.put(x, pos.y, g, style);
            for dx in 1..w {
                surface.put(x + dx, pos.y, " ", style);
            }
        }
        x = x.saturating_add(w);
    }
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
