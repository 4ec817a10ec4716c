use super::layout::{tab_label, title, FrameLayout};
use super::Workbench;
use crate::app::theme::{PreviewPalette, UiTheme};
use crate::kernel::{AppState, DragKind, Orientation};
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{Axis, Painter};
use crate::ui::core::style::{Mod, Style};

const HINTS: &str =
    " Shift+Enter run  Alt+F format  Ctrl+L layout  Ctrl+T theme  F11 full  Alt+1/2/3 tabs  Ctrl+Q quit";

impl Workbench {
    pub fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        if area != self.area {
            self.area = area;
            self.sync_editor_geometry();
        }
        let layout = self.frame_layout();
        self.painter.clear();

        {
            let state = self.playground.state();
            let painter = &mut self.painter;
            let theme = &self.theme;
            if let Some(header) = layout.header {
                paint_header(painter, &layout, header, theme);
            }
            paint_preview(
                painter,
                layout.preview,
                state,
                self.playground.preview().document(),
                self.playground.preview().path().map(|p| p.display().to_string()),
                self.playground.preview().pointer_passthrough(),
            );
            paint_splitters(painter, &layout, state, theme);
            paint_tabs(painter, &layout, state, theme);
            if let Some(status) = layout.status {
                paint_status(painter, status, state, self.last_log.as_deref(), theme);
            }
        }

        let cursor =
            self.playground
                .active_editor_mut()
                .paint(&mut self.painter, layout.editor, &self.theme);

        backend.draw(area, self.painter.cmds());
        backend.set_cursor(cursor);
    }
}

fn paint_header(painter: &mut Painter, layout: &FrameLayout, header: Rect, theme: &UiTheme) {
    let base = Style::colors(theme.header_fg, theme.header_bg);
    painter.fill(header, base);
    painter.text(
        Pos::new(header.x, header.y),
        title(),
        base.add_mod(Mod::BOLD),
        header,
    );

    let button_style = Style::colors(theme.button_fg, theme.button_bg);
    for (button, rect) in &layout.buttons {
        painter.text(Pos::new(rect.x, rect.y), button.label(), button_style, *rect);
    }
}

fn paint_preview(
    painter: &mut Painter,
    area: Rect,
    state: &AppState,
    document: &str,
    path: Option<String>,
    passthrough: bool,
) {
    if area.is_empty() {
        return;
    }
    let palette = PreviewPalette::for_theme(state.preview_theme);
    let text = Style::colors(palette.fg, palette.bg);
    painter.fill(area, text);

    let target = path.unwrap_or_else(|| "in memory".to_string());
    painter.text(
        Pos::new(area.x, area.y),
        format!(" preview: {}", target),
        Style::colors(palette.muted_fg, palette.bg),
        area,
    );
    let (_, body) = area.split_top(1);
    painter.lines(body, 1, document, text);

    if !passthrough {
        painter.dim(area);
    }
}

fn paint_splitters(painter: &mut Painter, layout: &FrameLayout, state: &AppState, theme: &UiTheme) {
    let drag = state.layout.drag_kind();
    let style_for = |kind: DragKind| {
        let color = if drag == Some(kind) {
            theme.separator_active
        } else {
            theme.separator
        };
        Style::colors(color, theme.editor_bg)
    };

    let axis = match state.layout.orientation {
        Orientation::Stacked => Axis::Horizontal,
        Orientation::SideBySide => Axis::Vertical,
    };
    painter.rule(layout.splitter, axis, style_for(DragKind::PreviewSplit));

    // Space beside a narrowed editor section.
    let beside = Rect::new(
        layout.body.x,
        layout.section.y,
        layout.body.w,
        layout.section.h,
    )
    .intersect(layout.body);
    if state.layout.orientation == Orientation::Stacked && beside.w > layout.section.w {
        painter.fill(beside, Style::on(theme.status_bg));
    }

    if let Some((left, right)) = layout.handles {
        let style = style_for(DragKind::EditorWidth);
        painter.rule(left, Axis::Vertical, style);
        painter.rule(right, Axis::Vertical, style);
    }
}

fn paint_tabs(painter: &mut Painter, layout: &FrameLayout, state: &AppState, theme: &UiTheme) {
    let Some((_, first)) = layout.tabs.first() else {
        return;
    };
    let row = Rect::new(
        first.x,
        first.y,
        layout.editor.w.max(first.w),
        first.h,
    );
    painter.fill(row, Style::on(theme.editor_bg));

    for (lang, rect) in &layout.tabs {
        let style = if *lang == state.active_tab {
            Style::colors(theme.tab_active_fg, theme.tab_active_bg)
                .add_mod(Mod::BOLD | Mod::UNDERLINE)
        } else {
            Style::colors(theme.tab_inactive_fg, theme.editor_bg)
        };
        painter.text(Pos::new(rect.x, rect.y), tab_label(*lang), style, *rect);
    }
}

fn paint_status(
    painter: &mut Painter,
    area: Rect,
    state: &AppState,
    last_log: Option<&str>,
    theme: &UiTheme,
) {
    let pos = Pos::new(area.x, area.y);
    if let Some(notice) = &state.notice {
        let style = Style::colors(theme.notice_fg, theme.notice_bg);
        painter.fill(area, style);
        painter.text(
            pos,
            format!(" {}  (Esc to dismiss)", notice.message),
            style,
            area,
        );
        return;
    }

    let base = Style::colors(theme.status_fg, theme.status_bg);
    painter.fill(area, base);
    match last_log {
        Some(line) => painter.text(pos, format!(" {}", line), base, area),
        None => painter.text(pos, HINTS, base, area),
    }
}
