use super::*;
use crate::ui::core::painter::{Axis, Painter};
use crate::ui::core::style::{Color, Mod};

fn draw(w: u16, h: u16, paint: impl FnOnce(&mut Painter)) -> TestBackend {
    let mut painter = Painter::new();
    paint(&mut painter);
    let mut backend = TestBackend::new(w, h);
    backend.draw(Rect::new(0, 0, w, h), painter.cmds());
    backend
}

#[test]
fn wide_glyph_is_dropped_when_it_does_not_fit() {
    let area = Rect::new(0, 0, 1, 1);
    let backend = draw(1, 1, |p| p.text(Pos::new(0, 0), "👍", Style::default(), area));
    assert_eq!(backend.buffer().cell(0, 0).unwrap().symbol, " ");
}

#[test]
fn wide_glyph_occupies_two_cells_when_it_fits() {
    let area = Rect::new(0, 0, 2, 1);
    let backend = draw(2, 1, |p| p.text(Pos::new(0, 0), "👍", Style::default(), area));
    assert_eq!(backend.buffer().cell(0, 0).unwrap().symbol, "👍");
    assert_eq!(backend.buffer().cell(1, 0).unwrap().symbol, " ");
}

#[test]
fn text_stops_at_clip_edge() {
    let clip = Rect::new(1, 0, 3, 1);
    let backend = draw(8, 1, |p| p.text(Pos::new(0, 0), "preview", Style::default(), clip));
    assert_eq!(backend.buffer().row_text(0), " rev");
}

#[test]
fn fill_clips_to_buffer_area() {
    let bg = Style::on(Color::Rgb(1, 2, 3));
    let backend = draw(2, 2, |p| {
        p.text(Pos::new(0, 0), "AB", Style::default(), Rect::new(0, 0, 2, 1));
        p.fill(Rect::new(0, 0, 10, 10), bg);
    });
    assert_eq!(backend.buffer().row_text(0), "");
    assert_eq!(backend.buffer().cell(1, 1).unwrap().style, bg);
}

#[test]
fn dim_keeps_symbols_and_colors() {
    let style = Style::colors(Color::Rgb(9, 9, 9), Color::Rgb(0, 0, 0));
    let backend = draw(4, 1, |p| {
        p.text(Pos::new(0, 0), "html", style, Rect::new(0, 0, 4, 1));
        p.dim(Rect::new(0, 0, 2, 1));
    });

    let dimmed = backend.buffer().cell(0, 0).unwrap();
    assert_eq!(dimmed.symbol, "h");
    assert_eq!(dimmed.style.fg, style.fg);
    assert_eq!(dimmed.style.bg, style.bg);
    assert!(dimmed.style.mods.contains(Mod::DIM));
    assert!(!backend.buffer().cell(2, 0).unwrap().style.mods.contains(Mod::DIM));
}

#[test]
fn rules_use_the_axis_glyph() {
    let backend = draw(3, 3, |p| {
        p.rule(Rect::new(0, 0, 3, 1), Axis::Horizontal, Style::default());
        p.rule(Rect::new(2, 1, 1, 2), Axis::Vertical, Style::default());
    });
    assert_eq!(backend.buffer().row_text(0), "───");
    assert_eq!(backend.buffer().column_text(2), "─││");
}

#[test]
fn rule_longer_than_buffer_is_clipped() {
    let backend = draw(2, 1, |p| {
        p.rule(Rect::new(0, 0, 50, 1), Axis::Horizontal, Style::default())
    });
    assert_eq!(backend.buffer().row_text(0), "──");
}

#[test]
fn row_text_and_find() {
    let backend = draw(10, 2, |p| {
        p.text(Pos::new(2, 1), "Run", Style::default(), Rect::new(0, 0, 10, 2))
    });

    assert_eq!(backend.buffer().row_text(0), "");
    assert_eq!(backend.buffer().row_text(1), "  Run");
    assert_eq!(backend.buffer().find("Run"), Some(Pos::new(2, 1)));
    assert_eq!(backend.buffer().find("Stop"), None);
}
