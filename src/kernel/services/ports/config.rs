/// Fixed editor widget configuration. Not user configurable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    pub tab_size: u8,
    pub indent_unit: u8,
    pub show_line_numbers: bool,
    pub match_brackets: bool,
    pub auto_close_brackets: bool,
    pub line_wrapping: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 2,
            indent_unit: 2,
            show_line_numbers: true,
            match_brackets: true,
            auto_close_brackets: true,
            line_wrapping: true,
        }
    }
}

impl EditorConfig {
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_unit as usize)
    }
}
