use super::*;
use crate::draw::{Color, Point, RED, StrokeKind};
use crate::input::{
    EventResponse, InputEvent, PointerSample, PointerSource, Theme, ThemePalette, Tool,
};
use crate::util::{CanvasLayout, CanvasSize, Rect};

fn create_test_input_state() -> InputState {
    InputState::with_defaults(
        RED,
        5.0, // width
        Theme::Light,
        ThemePalette::default(),
        CanvasLayout::default(),
    )
}

fn down(state: &mut InputState, x: f64, y: f64) {
    state.handle_event(InputEvent::PointerDown(PointerSample::mouse(x, y)));
}

fn drag(state: &mut InputState, x: f64, y: f64) {
    state.handle_event(InputEvent::PointerMove(PointerSample::mouse(x, y)));
}

fn up(state: &mut InputState) {
    state.handle_event(InputEvent::PointerUp {
        source: PointerSource::Mouse,
    });
}

fn draw_line(state: &mut InputState, from: (f64, f64), to: (f64, f64)) {
    down(state, from.0, from.1);
    drag(state, to.0, to.1);
    up(state);
}

#[test]
fn test_brush_stroke_freezes_tool_settings() {
    let mut state = create_test_input_state();

    draw_line(&mut state, (10.0, 10.0), (20.0, 10.0));

    assert_eq!(state.drawing.len(), 1);
    let stroke = &state.drawing.strokes()[0];
    assert_eq!(stroke.kind(), StrokeKind::Brush);
    assert_eq!(stroke.color(), RED);
    assert_eq!(stroke.width(), 5.0);
    assert_eq!(
        stroke.points(),
        &[Point::new(10.0, 10.0), Point::new(20.0, 10.0)]
    );
}

#[test]
fn test_point_count_is_moves_plus_one() {
    let mut state = create_test_input_state();

    for moves in 0..5 {
        down(&mut state, 0.0, 0.0);
        for i in 0..moves {
            drag(&mut state, f64::from(i), 1.0);
        }
        up(&mut state);

        let last = state.drawing.strokes().last().unwrap();
        assert_eq!(last.points().len(), moves as usize + 1);
    }
    assert_eq!(state.drawing.len(), 5);
}

#[test]
fn test_eraser_without_points_is_discarded() {
    let mut state = create_test_input_state();
    state.toggle_eraser();

    // A touch start that reports no contacts has no position to record.
    let response = state.handle_event(InputEvent::PointerDown(PointerSample::touch(&[])));
    assert!(response.suppress_default);
    assert!(state.is_painting());
    assert_eq!(state.drawing.active().unwrap().kind(), StrokeKind::Eraser);

    state.handle_event(InputEvent::PointerUp {
        source: PointerSource::Touch,
    });

    assert!(!state.is_painting());
    assert!(state.drawing.is_empty());
}

#[test]
fn test_move_and_up_without_active_stroke_are_ignored() {
    let mut state = create_test_input_state();
    state.needs_redraw = false;

    drag(&mut state, 5.0, 5.0);
    up(&mut state);

    assert!(state.drawing.is_empty());
    assert!(state.drawing.active().is_none());
    assert!(!state.needs_redraw);
}

#[test]
fn test_reentrant_pointer_down_is_ignored() {
    let mut state = create_test_input_state();

    down(&mut state, 1.0, 1.0);
    down(&mut state, 50.0, 50.0);
    drag(&mut state, 2.0, 2.0);
    up(&mut state);

    assert_eq!(state.drawing.len(), 1);
    assert_eq!(
        state.drawing.strokes()[0].points(),
        &[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]
    );
}

#[test]
fn test_undo_on_empty_store_is_idempotent() {
    let mut state = create_test_input_state();

    for _ in 0..3 {
        state.handle_event(InputEvent::Undo);
        assert!(state.drawing.is_empty());
    }
}

#[test]
fn test_undo_removes_last_stroke_only() {
    let mut state = create_test_input_state();

    draw_line(&mut state, (10.0, 10.0), (90.0, 10.0));
    state.toggle_eraser();
    draw_line(&mut state, (10.0, 10.0), (90.0, 10.0));
    assert_eq!(state.drawing.len(), 2);

    state.handle_event(InputEvent::Undo);

    assert_eq!(state.drawing.len(), 1);
    assert_eq!(state.drawing.strokes()[0].kind(), StrokeKind::Brush);
}

#[test]
fn test_clear_then_draw_again() {
    let mut state = create_test_input_state();

    for i in 0..5 {
        let y = f64::from(i) * 10.0;
        draw_line(&mut state, (0.0, y), (50.0, y));
    }
    assert_eq!(state.drawing.len(), 5);

    state.handle_event(InputEvent::Clear);
    assert!(state.drawing.is_empty());
    assert!(state.needs_redraw);

    draw_line(&mut state, (1.0, 1.0), (2.0, 2.0));
    assert_eq!(state.drawing.len(), 1);
}

#[test]
fn test_clear_keeps_active_stroke() {
    let mut state = create_test_input_state();

    draw_line(&mut state, (0.0, 0.0), (10.0, 0.0));
    down(&mut state, 5.0, 5.0);
    state.handle_event(InputEvent::Clear);
    drag(&mut state, 6.0, 6.0);
    up(&mut state);

    assert_eq!(state.drawing.len(), 1);
    assert_eq!(state.drawing.strokes()[0].points().len(), 2);
}

#[test]
fn test_toggle_eraser_does_not_touch_existing_strokes() {
    let mut state = create_test_input_state();

    down(&mut state, 0.0, 0.0);
    assert_eq!(state.handle_event(InputEvent::ToggleEraser), EventResponse::default());
    drag(&mut state, 3.0, 3.0);
    up(&mut state);

    assert_eq!(state.tool(), Tool::Eraser);
    assert_eq!(state.drawing.strokes()[0].kind(), StrokeKind::Brush);

    draw_line(&mut state, (0.0, 0.0), (1.0, 1.0));
    assert_eq!(state.drawing.strokes()[1].kind(), StrokeKind::Eraser);
}

#[test]
fn test_tool_changes_apply_to_next_stroke() {
    let mut state = create_test_input_state();

    down(&mut state, 0.0, 0.0);
    state.handle_event(InputEvent::SetColor {
        color: "#00ff00".to_string(),
    });
    state.handle_event(InputEvent::SetBrushSize { size: 12.0 });
    up(&mut state);
    draw_line(&mut state, (0.0, 0.0), (1.0, 0.0));

    let strokes = state.drawing.strokes();
    assert_eq!(strokes[0].color(), RED);
    assert_eq!(strokes[0].width(), 5.0);
    assert_eq!(strokes[1].color(), Color::from_rgb8(0, 255, 0));
    assert_eq!(strokes[1].width(), 12.0);
}

#[test]
fn test_invalid_tool_settings_are_ignored() {
    let mut state = create_test_input_state();

    assert!(!state.set_color("not-a-color"));
    assert!(!state.set_width(0.0));
    assert!(!state.set_width(-3.0));
    assert!(!state.set_width(f64::NAN));

    assert_eq!(state.current_color, RED);
    assert_eq!(state.current_width, 5.0);
}

#[test]
fn test_toggle_theme_keeps_strokes() {
    let mut state = create_test_input_state();
    draw_line(&mut state, (0.0, 0.0), (10.0, 10.0));
    let before = state.drawing.strokes().to_vec();
    state.needs_redraw = false;

    state.handle_event(InputEvent::ToggleTheme);

    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.background_color().to_string(), "#1a1a1a");
    assert_eq!(state.drawing.strokes(), before.as_slice());
    assert!(state.needs_redraw);
}

#[test]
fn test_resize_keeps_strokes_and_logical_coordinates() {
    let mut state = create_test_input_state();
    draw_line(&mut state, (10.0, 10.0), (20.0, 10.0));

    state.handle_event(InputEvent::Resize {
        width: 2000.0,
        height: 1000.0,
    });

    assert_eq!(state.canvas_size(), CanvasSize::new(1120, 700));
    assert_eq!(state.canvas_rect(), Rect::at_size(0.0, 0.0, CanvasSize::new(1120, 700)));
    assert_eq!(
        state.drawing.strokes()[0].points(),
        &[Point::new(10.0, 10.0), Point::new(20.0, 10.0)]
    );
}

#[test]
fn test_non_finite_resize_is_ignored() {
    let mut state = create_test_input_state();
    let before = state.canvas_size();

    state.update_viewport(f64::INFINITY, 100.0);

    assert_eq!(state.canvas_size(), before);
}

#[test]
fn test_pointer_positions_are_normalized() {
    let mut state = create_test_input_state();
    // Canvas displayed at half size with an offset.
    state.set_canvas_rect(Rect::new(10.0, 20.0, 400.0, 250.0).unwrap());

    draw_line(&mut state, (10.0, 20.0), (210.0, 145.0));

    assert_eq!(
        state.drawing.strokes()[0].points(),
        &[Point::new(0.0, 0.0), Point::new(400.0, 250.0)]
    );
}

#[test]
fn test_touch_tracks_first_contact_and_suppresses_default() {
    let mut state = create_test_input_state();

    let responses = [
        state.handle_event(InputEvent::PointerDown(PointerSample::touch(&[
            (1.0, 1.0),
            (300.0, 300.0),
        ]))),
        state.handle_event(InputEvent::PointerMove(PointerSample::touch(&[
            (2.0, 2.0),
            (301.0, 301.0),
        ]))),
        state.handle_event(InputEvent::PointerUp {
            source: PointerSource::Touch,
        }),
    ];

    assert!(responses.iter().all(|r| r.suppress_default));
    assert_eq!(
        state.drawing.strokes()[0].points(),
        &[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]
    );
}

#[test]
fn test_mouse_events_keep_default() {
    let mut state = create_test_input_state();
    let response = state.handle_event(InputEvent::PointerDown(PointerSample::mouse(0.0, 0.0)));
    assert!(!response.suppress_default);
}

#[test]
fn test_export_request_is_taken_once() {
    let mut state = create_test_input_state();

    state.handle_event(InputEvent::Export {
        file_name: Some("sketch".to_string()),
    });

    assert_eq!(
        state.take_pending_export(),
        Some(ExportRequest {
            file_name: Some("sketch".to_string())
        })
    );
    assert_eq!(state.take_pending_export(), None);
}

#[test]
fn test_degenerate_canvas_rect_is_ignored() {
    let mut state = create_test_input_state();
    let before = state.canvas_rect();

    let zero_width = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 250.0,
    };
    let not_finite = Rect {
        x: f64::NAN,
        ..before
    };
    assert!(!state.set_canvas_rect(zero_width));
    assert!(!state.set_canvas_rect(not_finite));
    assert_eq!(state.canvas_rect(), before);

    draw_line(&mut state, (10.0, 10.0), (20.0, 10.0));
    assert!(
        state.drawing.strokes()[0]
            .points()
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite())
    );
}
