use super::*;

fn geometry() -> Geometry {
    Geometry {
        container: Bounds::new(0.0, 40.0, 1024.0, 800.0),
        viewport_width: 1024.0,
    }
}

#[test]
fn stacked_split_uses_vertical_offset_from_container_top() {
    let mut layout = LayoutState::default();
    assert!(layout.begin_drag(DragKind::PreviewSplit));

    assert!(layout.drag_to(10.0, 40.0 + 300.0, &geometry()));
    assert_eq!(layout.preview_height_pct, Some(37.5));
    assert_eq!(layout.preview_width_pct, None);
    assert_eq!(layout.split_ratio(), Some(37.5));
}

#[test]
fn side_by_side_split_uses_horizontal_offset() {
    let mut layout = LayoutState::default();
    layout.toggle_orientation();
    assert!(layout.begin_drag(DragKind::PreviewSplit));

    assert!(layout.drag_to(640.0, 0.0, &geometry()));
    assert_eq!(layout.preview_width_pct, Some(62.5));
    assert_eq!(layout.preview_height_pct, None);
}

#[test]
fn drag_to_ninety_five_percent_clamps_to_eighty() {
    let mut layout = LayoutState::default();
    layout.begin_drag(DragKind::PreviewSplit);

    layout.drag_to(0.0, 40.0 + 760.0, &geometry());
    assert_eq!(layout.split_ratio(), Some(80.0));
}

#[test]
fn split_stays_within_bounds_for_any_pointer_sequence() {
    let mut layout = LayoutState::default();
    layout.begin_drag(DragKind::PreviewSplit);

    for y in [-5000.0, -1.0, 0.0, 40.0, 90.0, 200.0, 440.0, 839.0, 840.0, 9000.0] {
        layout.drag_to(0.0, y, &geometry());
        let ratio = layout.split_ratio().unwrap();
        assert!((MIN_SPLIT_PERCENT..=MAX_SPLIT_PERCENT).contains(&ratio), "{ratio}");
    }
}

#[test]
fn degenerate_container_ignores_move() {
    let mut layout = LayoutState::default();
    layout.begin_drag(DragKind::PreviewSplit);
    let geometry = Geometry {
        container: Bounds::new(0.0, 0.0, 800.0, 0.0),
        viewport_width: 800.0,
    };

    assert!(!layout.drag_to(10.0, 10.0, &geometry));
    assert_eq!(layout.split_ratio(), None);
}

#[test]
fn preview_split_drag_disables_passthrough_until_pointer_up() {
    let mut layout = LayoutState::default();
    layout.begin_drag(DragKind::PreviewSplit);
    assert!(!layout.preview_pointer_events);
    assert_eq!(layout.cursor, CursorStyle::RowResize);

    assert_eq!(layout.end_drag(), Some(DragKind::PreviewSplit));
    assert!(layout.preview_pointer_events);
    assert_eq!(layout.cursor, CursorStyle::Default);
    assert!(!layout.is_dragging());
}

#[test]
fn side_by_side_split_uses_column_cursor() {
    let mut layout = LayoutState::default();
    layout.toggle_orientation();
    layout.begin_drag(DragKind::PreviewSplit);
    assert_eq!(layout.cursor, CursorStyle::ColResize);
}

#[test]
fn editor_width_drag_keeps_passthrough() {
    let mut layout = LayoutState::default();
    assert!(layout.begin_drag(DragKind::EditorWidth));
    assert!(layout.preview_pointer_events);
    assert_eq!(layout.cursor, CursorStyle::ColResize);
}

#[test]
fn editor_width_is_twice_distance_from_center() {
    let mut layout = LayoutState::default();
    layout.begin_drag(DragKind::EditorWidth);

    layout.drag_to(800.0, 0.0, &geometry());
    assert_eq!(layout.editor_width_px, Some(576.0));

    // Left handle mirrors the right one.
    layout.drag_to(224.0, 0.0, &geometry());
    assert_eq!(layout.editor_width_px, Some(576.0));
}

#[test]
fn editor_width_clamps_to_bounds() {
    assert_eq!(editor_width_at(512.0, 1024.0), 300.0);
    assert_eq!(editor_width_at(1024.0, 1024.0), 1004.0);
    assert_eq!(editor_width_at(-300.0, 1024.0), 1004.0);
    assert_eq!(editor_width_at(712.0, 1024.0), 400.0);
}

#[test]
fn editor_width_stays_within_bounds_for_any_pointer_sequence() {
    let mut layout = LayoutState::default();
    layout.begin_drag(DragKind::EditorWidth);
    let geometry = geometry();

    for x in [-100.0, 0.0, 10.0, 350.0, 511.0, 512.0, 650.0, 1000.0, 1024.0, 4000.0] {
        layout.drag_to(x, 0.0, &geometry);
        let width = layout.editor_width_px.unwrap();
        assert!(width >= MIN_EDITOR_WIDTH_PX, "{width}");
        assert!(width <= geometry.viewport_width - EDITOR_WIDTH_MARGIN_PX, "{width}");
    }
}

#[test]
fn editor_width_upper_bound_wins_on_narrow_viewport() {
    assert_eq!(editor_width_at(0.0, 300.0), 280.0);
}

#[test]
fn editor_width_drag_is_ignored_side_by_side() {
    let mut layout = LayoutState::default();
    layout.toggle_orientation();

    assert!(!layout.begin_drag(DragKind::EditorWidth));
    assert!(!layout.is_dragging());
    assert_eq!(layout.cursor, CursorStyle::Default);
    assert!(!layout.drag_to(900.0, 0.0, &geometry()));
    assert_eq!(layout.editor_width_px, None);
}

#[test]
fn editor_width_is_ignored_while_side_by_side() {
    let mut layout = LayoutState::default();
    layout.begin_drag(DragKind::EditorWidth);
    layout.drag_to(900.0, 0.0, &geometry());
    layout.end_drag();
    assert_eq!(layout.effective_editor_width_px(), Some(776.0));

    layout.toggle_orientation();
    assert_eq!(layout.effective_editor_width_px(), None);

    layout.toggle_orientation();
    assert_eq!(layout.effective_editor_width_px(), Some(776.0));
}

#[test]
fn move_without_drag_is_noop() {
    let mut layout = LayoutState::default();
    assert!(!layout.drag_to(100.0, 100.0, &geometry()));
    assert_eq!(layout, LayoutState::default());
}

#[test]
fn second_pointer_down_does_not_replace_session() {
    let mut layout = LayoutState::default();
    assert!(layout.begin_drag(DragKind::PreviewSplit));
    assert!(!layout.begin_drag(DragKind::EditorWidth));
    assert_eq!(layout.drag_kind(), Some(DragKind::PreviewSplit));
}

#[test]
fn end_drag_when_idle_returns_none() {
    let mut layout = LayoutState::default();
    assert_eq!(layout.end_drag(), None);
}

#[test]
fn toggling_twice_restores_orientation_without_stale_override() {
    let mut layout = LayoutState::default();
    layout.begin_drag(DragKind::PreviewSplit);
    layout.drag_to(0.0, 40.0 + 200.0, &geometry());
    layout.end_drag();
    assert_eq!(layout.split_ratio(), Some(25.0));

    assert_eq!(layout.toggle_orientation(), Orientation::SideBySide);
    layout.begin_drag(DragKind::PreviewSplit);
    layout.drag_to(768.0, 0.0, &geometry());
    layout.end_drag();
    assert_eq!(layout.split_ratio(), Some(75.0));

    assert_eq!(layout.toggle_orientation(), Orientation::Stacked);
    assert_eq!(layout.preview_height_pct, None);
    assert_eq!(layout.preview_width_pct, None);
    assert_eq!(layout.effective_split_percent(), DEFAULT_SPLIT_PERCENT);
}

#[test]
fn toggle_ends_drag_in_progress() {
    let mut layout = LayoutState::default();
    layout.begin_drag(DragKind::EditorWidth);
    layout.toggle_orientation();

    assert!(!layout.is_dragging());
    assert!(layout.preview_pointer_events);
    assert_eq!(layout.cursor, CursorStyle::Default);
}
