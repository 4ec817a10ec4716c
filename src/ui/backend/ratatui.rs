use std::io;

use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

use crate::ui::backend::{replay, Backend, Surface};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Mod, Style};

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

/// The terminal the workbench draws into. Keeps `ratatui` types out of the rest of the crate.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            let mut backend = FrameBackend { frame, cursor: None };
            f(&mut backend, area);
        })?;
        Ok(())
    }
}

struct FrameBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
    cursor: Option<Pos>,
}

impl Drop for FrameBackend<'_, '_> {
    fn drop(&mut self) {
        // Without a position ratatui hides the cursor for this frame.
        if let Some(pos) = self.cursor {
            self.frame.set_cursor_position((pos.x, pos.y));
        }
    }
}

impl Backend for FrameBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        self.frame.render_widget(PaintList { cmds }, area.into());
    }

    fn set_cursor(&mut self, pos: Option<Pos>) {
        self.cursor = pos;
    }
}

struct PaintList<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintList<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        replay(&mut BufferSurface(buf), self.cmds);
    }
}

struct BufferSurface<'a>(&'a mut Buffer);

impl Surface for BufferSurface<'_> {
    fn bounds(&self) -> Rect {
        self.0.area.into()
    }

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if let Some(cell) = self.0.cell_mut((x, y)) {
            cell.reset();
            cell.set_symbol(symbol).set_style(convert_style(style));
        }
    }

    fn overlay(&mut self, x: u16, y: u16, style: Style) {
        // ratatui merges set colors and modifiers into the existing style.
        if let Some(cell) = self.0.cell_mut((x, y)) {
            cell.set_style(convert_style(style));
        }
    }
}

fn convert_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(convert_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(convert_color(bg));
    }
    out.add_modifier(convert_mods(s.mods))
}

fn convert_color(c: Color) -> RColor {
    match c {
        Color::Terminal => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
    }
}

fn convert_mods(m: Mod) -> RModifier {
    [
        (Mod::BOLD, RModifier::BOLD),
        (Mod::DIM, RModifier::DIM),
        (Mod::UNDERLINE, RModifier::UNDERLINED),
    ]
    .into_iter()
    .filter(|(ours, _)| m.contains(*ours))
    .fold(RModifier::empty(), |acc, (_, theirs)| acc | theirs)
}
