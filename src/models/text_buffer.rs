//! Rope-backed text with a single grapheme cursor.
//!
//! Positions are `(row, col)` where `col` counts grapheme clusters, not chars or bytes.

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Borrows the slice when it is contiguous, otherwise copies it.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Clone, Debug)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
    /// Column vertical moves try to return to.
    goal_col: Option<usize>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::from_text("")
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
            goal_col: None,
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replaces the whole content, keeping the cursor as close as the new text allows.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        let (row, col) = self.cursor;
        self.set_cursor(row, col);
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Clamps to the nearest valid position.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.min(self.len_lines().saturating_sub(1));
        let col = col.min(self.line_grapheme_len(row));
        self.cursor = (row, col);
        self.goal_col = None;
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line_slice(&self, row: usize) -> Option<RopeSlice<'_>> {
        (row < self.rope.len_lines()).then(|| self.rope.line(row))
    }

    /// Line content without its trailing newline.
    pub fn line_text(&self, row: usize) -> Option<Cow<'_, str>> {
        let line = slice_to_cow(self.line_slice(row)?);
        Some(match line {
            Cow::Borrowed(s) => Cow::Borrowed(strip_newline(s)),
            Cow::Owned(s) => Cow::Owned(strip_newline(&s).to_string()),
        })
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        self.rope.line_to_char(pos.0) + self.grapheme_to_char_index(pos.0, pos.1)
    }

    pub fn char_to_pos(&self, char_idx: usize) -> (usize, usize) {
        let char_idx = char_idx.min(self.rope.len_chars());
        let row = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(row);
        let line = slice_to_cow(self.rope.line(row));
        let mut chars = 0;
        let mut col = 0;
        for g in line.graphemes(true) {
            if chars >= char_idx - line_start {
                break;
            }
            chars += g.chars().count();
            col += 1;
        }
        (row, col)
    }

    pub fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let Some(slice) = self.line_slice(row) else {
            return 0;
        };
        let line = slice_to_cow(slice);
        strip_newline(&line)
            .graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        self.line_text(row)
            .map(|line| line.graphemes(true).count())
            .unwrap_or(0)
    }

    fn cursor_char(&self) -> usize {
        self.pos_to_char(self.cursor)
    }

    /// Char right before the cursor, if any.
    pub fn char_before_cursor(&self) -> Option<char> {
        let idx = self.cursor_char();
        (idx > 0).then(|| self.rope.char(idx - 1))
    }

    /// Char right at the cursor, if any.
    pub fn char_at_cursor(&self) -> Option<char> {
        let idx = self.cursor_char();
        (idx < self.rope.len_chars()).then(|| self.rope.char(idx))
    }

    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let offset = self.cursor_char();
        self.rope.insert(offset, s);
        self.cursor = self.char_to_pos(offset + s.chars().count());
        self.goal_col = None;
    }

    pub fn insert_char(&mut self, c: char) {
        let mut tmp = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut tmp));
    }

    /// Backspace. Returns whether anything was removed.
    pub fn delete_backward(&mut self) -> bool {
        let (row, col) = self.cursor;
        let (start, end) = if col > 0 {
            (self.pos_to_char((row, col - 1)), self.pos_to_char((row, col)))
        } else if row > 0 {
            let end = self.rope.line_to_char(row);
            let crlf = end >= 2
                && self.rope.char(end - 1) == '\n'
                && self.rope.char(end - 2) == '\r';
            (if crlf { end - 2 } else { end - 1 }, end)
        } else {
            return false;
        };
        self.rope.remove(start..end);
        self.cursor = self.char_to_pos(start);
        self.goal_col = None;
        true
    }

    /// Delete. Returns whether anything was removed.
    pub fn delete_forward(&mut self) -> bool {
        let (row, col) = self.cursor;
        let start = self.pos_to_char((row, col));
        let end = if col < self.line_grapheme_len(row) {
            self.pos_to_char((row, col + 1))
        } else if row + 1 < self.len_lines() {
            self.rope.line_to_char(row + 1)
        } else {
            return false;
        };
        self.rope.remove(start..end);
        self.goal_col = None;
        true
    }

    /// Removes `before` graphemes left of the cursor and `after` graphemes right of it, on the
    /// cursor line only.
    pub fn delete_around(&mut self, before: usize, after: usize) {
        let (row, col) = self.cursor;
        let len = self.line_grapheme_len(row);
        let from = col.saturating_sub(before);
        let to = (col + after).min(len);
        let start = self.pos_to_char((row, from));
        let end = self.pos_to_char((row, to));
        if start < end {
            self.rope.remove(start..end);
        }
        self.cursor = (row, from);
        self.goal_col = None;
    }

    pub fn move_left(&mut self) {
        let (row, col) = self.cursor;
        if col > 0 {
            self.cursor = (row, col - 1);
        } else if row > 0 {
            self.cursor = (row - 1, self.line_grapheme_len(row - 1));
        }
        self.goal_col = None;
    }

    pub fn move_right(&mut self) {
        let (row, col) = self.cursor;
        if col < self.line_grapheme_len(row) {
            self.cursor = (row, col + 1);
        } else if row + 1 < self.len_lines() {
            self.cursor = (row + 1, 0);
        }
        self.goal_col = None;
    }

    /// Moves `delta` logical lines, keeping the goal column.
    pub fn move_vertical(&mut self, delta: isize) {
        let (row, col) = self.cursor;
        let goal = self.goal_col.unwrap_or(col);
        let last = self.len_lines().saturating_sub(1) as isize;
        let target = (row as isize + delta).clamp(0, last) as usize;
        self.cursor = (target, goal.min(self.line_grapheme_len(target)));
        self.goal_col = Some(goal);
    }

    pub fn move_line_start(&mut self) {
        self.cursor.1 = 0;
        self.goal_col = None;
    }

    pub fn move_line_end(&mut self) {
        self.cursor.1 = self.line_grapheme_len(self.cursor.0);
        self.goal_col = None;
    }

    /// Leading spaces and tabs of `row`.
    pub fn indentation(&self, row: usize) -> String {
        self.line_text(row)
            .map(|line| {
                line.chars()
                    .take_while(|c| *c == ' ' || *c == '\t')
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Position of the bracket matching the one at `pos`, if `pos` holds a bracket.
    pub fn matching_bracket(&self, pos: (usize, usize)) -> Option<(usize, usize)> {
        let idx = self.pos_to_char(pos);
        if idx >= self.rope.len_chars() {
            return None;
        }
        let ch = self.rope.char(idx);
        let (open, close, forward) = match ch {
            '(' => ('(', ')', true),
            '[' => ('[', ']', true),
            '{' => ('{', '}', true),
            ')' => ('(', ')', false),
            ']' => ('[', ']', false),
            '}' => ('{', '}', false),
            _ => return None,
        };

        let mut depth = 0usize;
        if forward {
            for (i, c) in self.rope.chars_at(idx).enumerate() {
                if c == open {
                    depth += 1;
                } else if c == close {
                    depth -= 1;
                    if depth == 0 {
                        return Some(self.char_to_pos(idx + i));
                    }
                }
            }
        } else {
            let mut chars = self.rope.chars_at(idx + 1);
            let mut i = idx + 1;
            while let Some(c) = chars.prev() {
                i -= 1;
                if c == close {
                    depth += 1;
                } else if c == open {
                    depth -= 1;
                    if depth == 0 {
                        return Some(self.char_to_pos(i));
                    }
                }
            }
        }
        None
    }
}

fn strip_newline(s: &str) -> &str {
    let s = s.strip_suffix('\n').unwrap_or(s);
    s.strip_suffix('\r').unwrap_or(s)
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
