//! UI colors, kept in one place so render code never hardcodes them.

use crate::kernel::PreviewTheme;
use crate::ui::core::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub header_bg: Color,
    pub header_fg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub separator: Color,
    pub separator_active: Color,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive_fg: Color,
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub gutter_fg: Color,
    pub cursor_line_bg: Color,
    pub bracket_match_bg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub notice_bg: Color,
    pub notice_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            header_bg: Color::Rgb(30, 41, 59),
            header_fg: Color::Rgb(226, 232, 240),
            button_bg: Color::Rgb(59, 130, 246),
            button_fg: Color::Rgb(255, 255, 255),
            separator: Color::Rgb(71, 85, 105),
            separator_active: Color::Rgb(59, 130, 246),
            tab_active_bg: Color::Rgb(40, 44, 52),
            tab_active_fg: Color::Rgb(255, 255, 255),
            tab_inactive_fg: Color::Rgb(148, 163, 184),
            editor_bg: Color::Rgb(40, 44, 52),
            editor_fg: Color::Rgb(171, 178, 191),
            gutter_fg: Color::Rgb(99, 109, 131),
            cursor_line_bg: Color::Rgb(44, 49, 58),
            bracket_match_bg: Color::Rgb(81, 95, 120),
            status_bg: Color::Rgb(30, 41, 59),
            status_fg: Color::Rgb(148, 163, 184),
            notice_bg: Color::Rgb(153, 27, 27),
            notice_fg: Color::Rgb(254, 226, 226),
        }
    }
}

/// Colors of the preview pane for a preview theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewPalette {
    pub bg: Color,
    pub fg: Color,
    pub muted_fg: Color,
}

impl PreviewPalette {
    pub fn for_theme(theme: PreviewTheme) -> Self {
        match theme {
            PreviewTheme::Dark => Self {
                bg: Color::Rgb(15, 23, 42),
                fg: Color::Rgb(226, 232, 240),
                muted_fg: Color::Rgb(100, 116, 139),
            },
            PreviewTheme::Light => Self {
                bg: Color::Rgb(240, 249, 255),
                fg: Color::Rgb(51, 65, 85),
                muted_fg: Color::Rgb(148, 163, 184),
            },
        }
    }
}
