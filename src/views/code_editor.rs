//! Terminal code editor used for each of the three buffers.
//!
//! Soft wrapping is measured against the width the front end last assigned, but only when
//! `refresh_layout` runs. Edits re-measure the lines they touch at the already measured width,
//! so a resized editor keeps its old line breaks until it is refreshed.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::app::theme::UiTheme;
use crate::kernel::services::ports::{ChangeNotifier, EditorConfig, EditorWidget};
use crate::kernel::Language;
use crate::models::TextBuffer;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Mod, Style};

const MIN_GUTTER_DIGITS: usize = 3;

/// Visual row start columns (in graphemes) of every logical line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct WrapCache {
    text_width: u16,
    gutter_width: u16,
    rows: Vec<Vec<usize>>,
}

impl WrapCache {
    fn total_rows(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    fn first_visual_row(&self, line: usize) -> usize {
        self.rows.iter().take(line).map(Vec::len).sum()
    }

    /// Logical line and segment index of a visual row.
    fn line_at(&self, visual: usize) -> Option<(usize, usize)> {
        let mut acc = 0;
        for (line, starts) in self.rows.iter().enumerate() {
            if visual < acc + starts.len() {
                return Some((line, visual - acc));
            }
            acc += starts.len();
        }
        None
    }
}

pub struct CodeEditor {
    lang: Language,
    config: EditorConfig,
    buffer: TextBuffer,
    notifier: Option<ChangeNotifier>,
    focused: bool,
    assigned_width: u16,
    viewport_height: u16,
    scroll: usize,
    wrap: WrapCache,
    refresh_count: u64,
}

impl CodeEditor {
    pub fn new(lang: Language) -> Self {
        Self::with_config(lang, EditorConfig::default())
    }

    pub fn with_config(lang: Language, config: EditorConfig) -> Self {
        let mut editor = Self {
            lang,
            config,
            buffer: TextBuffer::new(),
            notifier: None,
            focused: false,
            assigned_width: 0,
            viewport_height: 0,
            scroll: 0,
            wrap: WrapCache::default(),
            refresh_count: 0,
        };
        editor.measure_all();
        editor
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.buffer.cursor()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    /// Records the columns available to the editor. Takes effect on the next `refresh_layout`.
    pub fn set_viewport_width(&mut self, width: u16) {
        self.assigned_width = width;
    }

    /// Text width the current line breaks were measured with.
    pub fn measured_width(&self) -> u16 {
        self.wrap.text_width
    }

    pub fn visual_row_count(&self) -> usize {
        self.wrap.total_rows()
    }

    // ---------------------------------------------------------------------
    // Editing
    // ---------------------------------------------------------------------

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }

        if self.config.auto_close_brackets {
            let next = self.buffer.char_at_cursor();
            if is_closer(c) && next == Some(c) {
                self.buffer.move_right();
                return;
            }
            if let Some(close) = closing_pair(c) {
                let is_quote = close == c;
                let next_is_free = next.map_or(true, |n| n.is_whitespace() || is_closer(n));
                if !is_quote || next_is_free {
                    self.apply_edit(|buf| {
                        buf.insert_char(c);
                        buf.insert_char(close);
                        buf.move_left();
                        true
                    });
                    return;
                }
            }
        }

        self.apply_edit(|buf| {
            buf.insert_char(c);
            true
        });
    }

    pub fn insert_newline(&mut self) {
        let unit = self.config.indent();
        let auto_close = self.config.auto_close_brackets;
        self.apply_edit(|buf| {
            let indent = buf.indentation(buf.cursor().0);
            let prev = buf.char_before_cursor();
            let next = buf.char_at_cursor();
            let opens_block = prev.is_some_and(|p| matches!(p, '(' | '[' | '{'));

            if opens_block && auto_close && next == prev.and_then(closing_pair) {
                buf.insert_str(&format!("\n{}{}", indent, unit));
                let inner = buf.cursor();
                buf.insert_str(&format!("\n{}", indent));
                buf.set_cursor(inner.0, inner.1);
            } else if opens_block {
                buf.insert_str(&format!("\n{}{}", indent, unit));
            } else {
                buf.insert_str(&format!("\n{}", indent));
            }
            true
        });
    }

    pub fn insert_tab(&mut self) {
        let unit = self.config.indent();
        self.apply_edit(|buf| {
            buf.insert_str(&unit);
            true
        });
    }

    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.apply_edit(|buf| {
            buf.insert_str(s);
            true
        });
    }

    pub fn backspace(&mut self) {
        let auto_close = self.config.auto_close_brackets;
        self.apply_edit(|buf| {
            let prev = buf.char_before_cursor();
            let next = buf.char_at_cursor();
            if auto_close && prev.and_then(closing_pair).is_some_and(|c| Some(c) == next) {
                buf.delete_around(1, 1);
                return true;
            }
            buf.delete_backward()
        });
    }

    pub fn delete(&mut self) {
        self.apply_edit(TextBuffer::delete_forward);
    }

    // ---------------------------------------------------------------------
    // Movement
    // ---------------------------------------------------------------------

    pub fn move_left(&mut self) {
        self.buffer.move_left();
        self.scroll_to_cursor();
    }

    pub fn move_right(&mut self) {
        self.buffer.move_right();
        self.scroll_to_cursor();
    }

    pub fn move_up(&mut self) {
        self.buffer.move_vertical(-1);
        self.scroll_to_cursor();
    }

    pub fn move_down(&mut self) {
        self.buffer.move_vertical(1);
        self.scroll_to_cursor();
    }

    pub fn move_line_start(&mut self) {
        self.buffer.move_line_start();
        self.scroll_to_cursor();
    }

    pub fn move_line_end(&mut self) {
        self.buffer.move_line_end();
        self.scroll_to_cursor();
    }

    pub fn page_up(&mut self) {
        let page = self.viewport_height.max(1) as isize;
        self.buffer.move_vertical(-page);
        self.scroll_to_cursor();
    }

    pub fn page_down(&mut self) {
        let page = self.viewport_height.max(1) as isize;
        self.buffer.move_vertical(page);
        self.scroll_to_cursor();
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.wrap.total_rows().saturating_sub(1) as isize;
        self.scroll = (self.scroll as isize + delta).clamp(0, max.max(0)) as usize;
    }

    /// Places the cursor at a cell relative to the editor's top-left corner.
    pub fn click(&mut self, col: u16, row: u16) {
        let visual = self.scroll + row as usize;
        let Some((line, seg)) = self
            .wrap
            .line_at(visual)
            .or_else(|| self.wrap.line_at(self.wrap.total_rows().saturating_sub(1)))
        else {
            return;
        };

        let target = col.saturating_sub(self.wrap.gutter_width) as usize;
        let starts = &self.wrap.rows[line];
        let seg_start = starts[seg];
        let seg_end = starts.get(seg + 1).copied();

        let text = self.buffer.line_text(line).unwrap_or(Cow::Borrowed(""));
        let mut x = 0;
        let mut col_idx = seg_start;
        for g in text.graphemes(true).skip(seg_start) {
            if seg_end.is_some_and(|end| col_idx >= end) {
                break;
            }
            let w = self.grapheme_width(g);
            if x + w > target {
                break;
            }
            x += w;
            col_idx += 1;
        }
        // A click past a wrapped segment stays on that segment.
        if let Some(end) = seg_end {
            col_idx = col_idx.min(end.saturating_sub(1).max(seg_start));
        }
        self.buffer.set_cursor(line, col_idx);
        self.focused = true;
    }

    // ---------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------

    fn gutter_width_for(&self, lines: usize) -> u16 {
        if !self.config.show_line_numbers {
            return 0;
        }
        let digits = lines.max(1).to_string().len().max(MIN_GUTTER_DIGITS);
        (digits + 1) as u16
    }

    fn grapheme_width(&self, g: &str) -> usize {
        if g == "\t" {
            self.config.tab_size as usize
        } else {
            UnicodeWidthStr::width(g).max(1)
        }
    }

    fn measure_line(&self, line: &str, width: u16) -> Vec<usize> {
        let mut starts = vec![0];
        if !self.config.line_wrapping || width == 0 {
            return starts;
        }
        let width = width as usize;
        let mut used = 0;
        for (i, g) in line.graphemes(true).enumerate() {
            let w = self.grapheme_width(g);
            if used > 0 && used + w > width {
                starts.push(i);
                used = 0;
            }
            used += w;
        }
        starts
    }

    fn measure_range(&self, from: usize, count: usize, width: u16) -> Vec<Vec<usize>> {
        (from..from + count)
            .map(|row| {
                let line = self.buffer.line_text(row).unwrap_or(Cow::Borrowed(""));
                self.measure_line(&line, width)
            })
            .collect()
    }

    fn measure_all(&mut self) {
        let gutter = self.gutter_width_for(self.buffer.len_lines());
        let text_width = self.assigned_width.saturating_sub(gutter);
        let rows = self.measure_range(0, self.buffer.len_lines(), text_width);
        self.wrap = WrapCache {
            text_width,
            gutter_width: gutter,
            rows,
        };
    }

    /// Re-measures the lines an edit starting at `first` replaced.
    fn relayout_edited(&mut self, first: usize, lines_before: usize) {
        let lines_after = self.buffer.len_lines();
        let gutter = self.gutter_width_for(lines_after);
        if self.wrap.rows.len() != lines_before || gutter != self.wrap.gutter_width {
            let width = self.wrap.text_width;
            self.wrap.gutter_width = gutter;
            self.wrap.rows = self.measure_range(0, lines_after, width);
            return;
        }

        let (old_span, new_span) = if lines_after >= lines_before {
            (1, 1 + lines_after - lines_before)
        } else {
            (1 + lines_before - lines_after, 1)
        };
        let old_end = (first + old_span).min(self.wrap.rows.len());
        let fresh = self.measure_range(first, new_span, self.wrap.text_width);
        self.wrap.rows.splice(first..old_end, fresh);
    }

    fn apply_edit(&mut self, edit: impl FnOnce(&mut TextBuffer) -> bool) {
        let lines_before = self.buffer.len_lines();
        let row_before = self.buffer.cursor().0;
        if !edit(&mut self.buffer) {
            return;
        }
        let first = row_before.min(self.buffer.cursor().0);
        self.relayout_edited(first, lines_before);
        self.scroll_to_cursor();
        self.emit_change();
    }

    fn emit_change(&self) {
        if let Some(notifier) = &self.notifier {
            notifier.notify(self.buffer.text());
        }
    }

    /// Visual row and display column of a buffer position.
    fn locate(&self, pos: (usize, usize)) -> (usize, usize) {
        let (line, col) = pos;
        let Some(starts) = self.wrap.rows.get(line) else {
            return (self.wrap.total_rows(), 0);
        };
        let seg = starts.iter().rposition(|&s| s <= col).unwrap_or(0);
        let text = self.buffer.line_text(line).unwrap_or(Cow::Borrowed(""));
        let x = text
            .graphemes(true)
            .skip(starts[seg])
            .take(col - starts[seg])
            .map(|g| self.grapheme_width(g))
            .sum();
        (self.wrap.first_visual_row(line) + seg, x)
    }

    fn scroll_to_cursor(&mut self) {
        let height = self.viewport_height as usize;
        if height == 0 {
            return;
        }
        let (visual, _) = self.locate(self.buffer.cursor());
        if visual < self.scroll {
            self.scroll = visual;
        } else if visual >= self.scroll + height {
            self.scroll = visual + 1 - height;
        }
    }

    // ---------------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------------

    /// Paints the editor into `area` and returns the terminal cursor position when focused.
    pub fn paint(&mut self, painter: &mut Painter, area: Rect, theme: &UiTheme) -> Option<Pos> {
        if area.is_empty() {
            return None;
        }
        self.viewport_height = area.h;
        self.scroll_to_cursor();

        let base = Style::colors(theme.editor_fg, theme.editor_bg);
        let gutter_style = Style::colors(theme.gutter_fg, theme.editor_bg);
        painter.fill(area, base);

        let cursor = self.buffer.cursor();
        let gutter = self.wrap.gutter_width;
        let text_x = area.x.saturating_add(gutter);

        for dy in 0..area.h {
            let Some((line, seg)) = self.wrap.line_at(self.scroll + dy as usize) else {
                break;
            };
            let y = area.y + dy;
            let row_rect = Rect::new(area.x, y, area.w, 1);

            if self.focused && line == cursor.0 {
                painter.overlay(row_rect, Style::on(theme.cursor_line_bg));
            }
            if gutter > 0 && seg == 0 {
                let label = format!("{:>width$} ", line + 1, width = (gutter - 1) as usize);
                painter.text(Pos::new(area.x, y), label, gutter_style, row_rect);
            }

            let starts = &self.wrap.rows[line];
            let from = starts[seg];
            let to = starts.get(seg + 1).copied().unwrap_or(usize::MAX);
            let text = self.buffer.line_text(line).unwrap_or(Cow::Borrowed(""));
            let visible: String = text
                .graphemes(true)
                .skip(from)
                .take(to.saturating_sub(from))
                .map(|g| {
                    if g == "\t" {
                        Cow::Owned(" ".repeat(self.config.tab_size as usize))
                    } else {
                        Cow::Borrowed(g)
                    }
                })
                .collect();
            let style = if self.focused && line == cursor.0 {
                base.bg(theme.cursor_line_bg)
            } else {
                base
            };
            painter.text(Pos::new(text_x, y), visible, style, row_rect);
        }

        if self.focused && self.config.match_brackets {
            self.paint_bracket_match(painter, area, text_x, theme);
        }

        if !self.focused {
            return None;
        }
        let (visual, x) = self.locate(cursor);
        let dy = visual.checked_sub(self.scroll)?;
        if dy >= area.h as usize {
            return None;
        }
        let x = text_x as usize + x;
        (x < area.right() as usize).then(|| Pos::new(x as u16, area.y + dy as u16))
    }

    fn paint_bracket_match(&self, painter: &mut Painter, area: Rect, text_x: u16, theme: &UiTheme) {
        let (row, col) = self.buffer.cursor();
        let candidates = [(row, col), (row, col.saturating_sub(1))];
        let Some((at, other)) = candidates
            .into_iter()
            .find_map(|pos| self.buffer.matching_bracket(pos).map(|m| (pos, m)))
        else {
            return;
        };

        let style = Style::on(theme.bracket_match_bg).add_mod(Mod::BOLD);
        for pos in [at, other] {
            let (visual, x) = self.locate(pos);
            let Some(dy) = visual.checked_sub(self.scroll) else {
                continue;
            };
            if dy >= area.h as usize {
                continue;
            }
            let cell = Rect::new(text_x.saturating_add(x as u16), area.y + dy as u16, 1, 1);
            let cell = cell.intersect(area);
            if !cell.is_empty() {
                painter.overlay(cell, style);
            }
        }
    }
}

fn closing_pair(c: char) -> Option<char> {
    match c {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '`' => Some('`'),
        _ => None,
    }
}

fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '}' | '"' | '\'' | '`')
}

impl EditorWidget for CodeEditor {
    fn language(&self) -> Language {
        self.lang
    }

    fn text(&self) -> String {
        self.buffer.text()
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.relayout_edited(0, usize::MAX);
        self.scroll_to_cursor();
        self.emit_change();
    }

    fn refresh_layout(&mut self) {
        self.measure_all();
        let max_scroll = self.wrap.total_rows().saturating_sub(1);
        self.scroll = self.scroll.min(max_scroll);
        self.scroll_to_cursor();
        self.refresh_count = self.refresh_count.saturating_add(1);
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn on_change(&mut self, notifier: ChangeNotifier) {
        self.notifier = Some(notifier);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/code_editor.rs"]
mod tests;
