//! Drag, resize and pan gestures driven through the pointer handlers.

use crate::helpers::{
    TestCanvasBuilder, assert_all_in_bounds, assert_rect_eq, element_rect, move_at, move_to, press,
    press_with, release,
};
use notus::geometry::{Bounds, Rect, point};
use notus::input::{InputState, Modifiers, MouseButton, ResizeHandle};
use notus::types::ElementId;
use std::time::Instant;

// ============================================================================
// Element drag
// ============================================================================

#[test]
fn test_drag_follows_pointer() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .build();

    canvas.handle_pointer_down(&press(150.0, 150.0));
    assert!(canvas.input_state().is_dragging_element());
    assert_eq!(canvas.selected_id(), Some(ElementId(1)));

    canvas.handle_pointer_move(&move_to(250.0, 180.0));
    assert_rect_eq(element_rect(&canvas, 1), Rect::new(200.0, 130.0, 200.0, 100.0));

    canvas.handle_pointer_up(&release(250.0, 180.0));
    assert!(canvas.input_state().is_idle());
    assert_eq!(canvas.host().acquired, 1);
    assert_eq!(canvas.host().held(), 0);
}

#[test]
fn test_drag_clamps_to_right_edge() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Edge", Rect::new(4990.0, 10.0, 50.0, 50.0))
        .build();

    canvas.handle_pointer_down(&press(5000.0, 30.0));
    canvas.handle_pointer_move(&move_to(5100.0, 30.0));

    let rect = element_rect(&canvas, 1);
    assert_eq!(rect.x, 4950.0);
    assert_eq!(rect.y, 10.0);
}

#[test]
fn test_drag_with_zoom_pan_and_offset_container() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Zoomed", Rect::new(100.0, 100.0, 200.0, 100.0))
        .with_zoom(2.0)
        .with_pan(-100.0, -50.0)
        .with_bounds(Some(Bounds::new(40.0, 20.0, 1000.0, 800.0)))
        .build();

    // Element origin sits at client (140, 170); grab it 10 canvas units in.
    canvas.handle_pointer_down(&press(160.0, 190.0));
    assert_eq!(canvas.input_state().drag_offset(), Some(point(10.0, 10.0)));

    canvas.handle_pointer_move(&move_to(260.0, 290.0));
    assert_rect_eq(element_rect(&canvas, 1), Rect::new(150.0, 150.0, 200.0, 100.0));
}

#[test]
fn test_drag_topmost_element_wins() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Bottom", Rect::new(100.0, 100.0, 200.0, 100.0))
        .with_text("Top", Rect::new(150.0, 120.0, 200.0, 100.0))
        .build();

    canvas.handle_pointer_down(&press(200.0, 150.0));
    assert_eq!(canvas.input_state().dragged_element(), Some(ElementId(2)));
}

#[test]
fn test_any_button_on_element_selects_and_drags() {
    for button in [MouseButton::Right, MouseButton::Middle] {
        let mut canvas = TestCanvasBuilder::new()
            .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
            .build();

        canvas.handle_pointer_down(&press_with(150.0, 150.0, button));
        assert_eq!(canvas.selected_id(), Some(ElementId(1)), "{button:?}");
        assert_eq!(canvas.input_state().dragged_element(), Some(ElementId(1)));
        assert_eq!(canvas.host().held(), 1);

        canvas.handle_pointer_move(&move_to(170.0, 180.0));
        assert_rect_eq(element_rect(&canvas, 1), Rect::new(120.0, 130.0, 200.0, 100.0));
    }
}

#[test]
fn test_press_on_empty_canvas_clears_selection() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .select(1)
        .build();

    canvas.handle_pointer_down(&press_with(600.0, 600.0, MouseButton::Right));
    assert_eq!(canvas.selected_id(), None);
    assert!(canvas.input_state().is_idle());
}

// ============================================================================
// Element resize
// ============================================================================

#[test]
fn test_resize_se_divides_delta_by_zoom() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .with_zoom(2.0)
        .select(1)
        .build();

    // On screen the element spans (200, 200) to (600, 400).
    canvas.handle_pointer_down(&press(600.0, 400.0));
    assert_eq!(canvas.input_state().resize_handle(), Some(ResizeHandle::SE));

    canvas.handle_pointer_move(&move_to(630.0, 390.0));
    assert_rect_eq(element_rect(&canvas, 1), Rect::new(100.0, 100.0, 215.0, 95.0));
}

#[test]
fn test_handles_only_on_selected_element() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .build();

    // Bottom-right corner of an unselected element is a body hit.
    canvas.handle_pointer_down(&press(300.0, 200.0));
    assert!(canvas.input_state().is_dragging_element());
}

#[test]
fn test_handle_band_outside_element_counts() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .select(1)
        .build();

    canvas.handle_pointer_down(&press(304.0, 150.0));
    assert_eq!(canvas.input_state().resize_handle(), Some(ResizeHandle::E));
}

#[test]
fn test_resize_nw_past_opposite_corner_moves_origin() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .select(1)
        .build();

    canvas.handle_pointer_down(&press(100.0, 100.0));
    canvas.handle_pointer_move(&move_to(400.0, 400.0));

    assert_rect_eq(element_rect(&canvas, 1), Rect::new(400.0, 400.0, 50.0, 50.0));
}

#[test]
fn test_resize_west_shifts_origin_with_pointer() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .select(1)
        .build();

    canvas.handle_pointer_down(&press(100.0, 150.0));
    assert_eq!(canvas.input_state().resize_handle(), Some(ResizeHandle::W));

    canvas.handle_pointer_move(&move_to(350.0, 150.0));
    assert_rect_eq(element_rect(&canvas, 1), Rect::new(350.0, 100.0, 50.0, 100.0));
}

#[test]
fn test_handle_covered_by_later_element_drags_the_top_one() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Under", Rect::new(100.0, 100.0, 200.0, 100.0))
        .with_text("Over", Rect::new(250.0, 120.0, 200.0, 100.0))
        .select(1)
        .build();

    // (300, 150) is on the east edge of #1 and inside the body of #2.
    canvas.handle_pointer_down(&press(300.0, 150.0));
    assert!(!canvas.input_state().is_resizing());
    assert_eq!(canvas.input_state().dragged_element(), Some(ElementId(2)));
    assert_eq!(canvas.selected_id(), Some(ElementId(2)));

    canvas.handle_pointer_move(&move_to(310.0, 150.0));
    assert_rect_eq(element_rect(&canvas, 1), Rect::new(100.0, 100.0, 200.0, 100.0));
}

#[test]
fn test_handle_on_topmost_selected_element_still_resizes() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Under", Rect::new(250.0, 120.0, 200.0, 100.0))
        .with_text("Over", Rect::new(100.0, 100.0, 200.0, 100.0))
        .select(2)
        .build();

    canvas.handle_pointer_down(&press(300.0, 150.0));
    assert_eq!(canvas.input_state().resized_element(), Some(ElementId(2)));
    assert_eq!(canvas.input_state().resize_handle(), Some(ResizeHandle::E));
}

#[test]
fn test_resize_is_throttled_per_frame() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .select(1)
        .build();
    let t0 = Instant::now();

    canvas.handle_pointer_down(&press(300.0, 150.0));
    canvas.handle_pointer_move(&move_at(310.0, 150.0, t0, 0));
    assert_eq!(element_rect(&canvas, 1).width, 210.0);

    // Dropped: inside the same frame.
    canvas.handle_pointer_move(&move_at(320.0, 150.0, t0, 5));
    assert_eq!(element_rect(&canvas, 1).width, 210.0);

    // The dropped move did not advance the reference point.
    canvas.handle_pointer_move(&move_at(330.0, 150.0, t0, 20));
    assert_eq!(element_rect(&canvas, 1).width, 230.0);
}

#[test]
fn test_resize_result_stays_in_canvas() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Edge", Rect::new(4800.0, 100.0, 150.0, 100.0))
        .select(1)
        .build();

    canvas.handle_pointer_down(&press(4950.0, 150.0));
    assert_eq!(canvas.input_state().resize_handle(), Some(ResizeHandle::E));
    canvas.handle_pointer_move(&move_to(5400.0, 150.0));

    assert_all_in_bounds(&canvas);
}

#[test]
fn test_image_resize_keeps_aspect_ratio() {
    let mut canvas = TestCanvasBuilder::new()
        .with_image(Rect::new(0.0, 0.0, 300.0, 200.0))
        .select(1)
        .build();

    canvas.handle_pointer_down(&press(300.0, 200.0));
    canvas.handle_pointer_move(&move_to(360.0, 260.0));

    let rect = element_rect(&canvas, 1);
    assert_eq!((rect.width, rect.height), (360.0, 240.0));
}

// ============================================================================
// Hover cursor
// ============================================================================

#[test]
fn test_cursor_names_handle_of_selected_element() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .with_bounds(Some(Bounds::new(40.0, 20.0, 1000.0, 800.0)))
        .build();

    // Unselected: no handles anywhere.
    assert_eq!(canvas.cursor_at(point(340.0, 220.0)), None);

    canvas.select(Some(ElementId(1)));
    assert_eq!(canvas.cursor_at(point(340.0, 220.0)), Some("se-resize"));
    assert_eq!(canvas.cursor_at(point(140.0, 170.0)), Some("w-resize"));
    assert_eq!(canvas.resize_handle_at(point(240.0, 121.0)), Some(ResizeHandle::N));
    assert_eq!(canvas.cursor_at(point(240.0, 170.0)), None);
}

#[test]
fn test_cursor_outside_container_is_default() {
    let canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(0.0, 0.0, 200.0, 100.0))
        .with_bounds(Some(Bounds::new(40.0, 20.0, 1000.0, 800.0)))
        .select(1)
        .build();

    // The NW corner band reaches past the container's top-left corner.
    assert_eq!(canvas.cursor_at(point(40.0, 20.0)), Some("nw-resize"));
    assert_eq!(canvas.cursor_at(point(37.0, 18.0)), None);
}

#[test]
fn test_cursor_ignores_handle_under_another_element() {
    let canvas = TestCanvasBuilder::new()
        .with_text("Under", Rect::new(100.0, 100.0, 200.0, 100.0))
        .with_text("Over", Rect::new(250.0, 120.0, 200.0, 100.0))
        .select(1)
        .build();

    assert_eq!(canvas.cursor_at(point(300.0, 150.0)), None);
    assert_eq!(canvas.cursor_at(point(300.0, 110.0)), Some("e-resize"));
}

#[test]
fn test_cursor_follows_active_resize() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .select(1)
        .build();

    canvas.handle_pointer_down(&press(300.0, 150.0));
    assert_eq!(canvas.cursor_at(point(700.0, 600.0)), Some("e-resize"));

    canvas.handle_pointer_up(&release(700.0, 600.0));
    assert_eq!(canvas.cursor_at(point(700.0, 600.0)), None);
}

// ============================================================================
// Canvas pan
// ============================================================================

#[test]
fn test_middle_button_pans_by_client_delta() {
    let mut canvas = TestCanvasBuilder::new().build();

    canvas.handle_pointer_down(&press_with(500.0, 400.0, MouseButton::Middle));
    assert!(canvas.input_state().is_panning());

    canvas.handle_pointer_move(&move_to(530.0, 390.0));
    assert_eq!(canvas.view().pan(), point(30.0, -10.0));
    canvas.handle_pointer_move(&move_to(540.0, 400.0));
    assert_eq!(canvas.view().pan(), point(40.0, 0.0));

    canvas.handle_pointer_up(&release(540.0, 400.0));
    assert!(canvas.input_state().is_idle());
    assert_eq!(canvas.host().held(), 0);
}

#[test]
fn test_command_primary_on_empty_canvas_pans() {
    let mut canvas = TestCanvasBuilder::new().with_zoom(2.0).build();

    canvas.handle_pointer_down(&press(100.0, 100.0).with_modifiers(Modifiers::control()));
    canvas.handle_pointer_move(&move_to(80.0, 120.0));

    // Pan is in screen pixels regardless of zoom.
    assert_eq!(canvas.view().pan(), point(-20.0, 20.0));
}

// ============================================================================
// Gesture scope
// ============================================================================

#[test]
fn test_every_gesture_ends_idle_on_up_and_leave() {
    let starts = [
        press(150.0, 150.0),
        press(300.0, 200.0),
        press_with(700.0, 700.0, MouseButton::Middle),
    ];

    for (i, start) in starts.iter().enumerate() {
        for leave in [false, true] {
            let mut canvas = TestCanvasBuilder::new()
                .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
                .select(1)
                .build();

            canvas.handle_pointer_down(start);
            assert!(canvas.input_state().is_active(), "start {i} did not begin a gesture");

            if leave {
                canvas.handle_pointer_leave();
            } else {
                canvas.handle_pointer_up(&release(0.0, 0.0));
            }
            assert_eq!(*canvas.input_state(), InputState::Idle);
            assert_eq!(canvas.host().acquired, 1);
            assert_eq!(canvas.host().released, 1);
        }
    }
}

#[test]
fn test_release_without_gesture_is_harmless() {
    let mut canvas = TestCanvasBuilder::new().build();
    canvas.handle_pointer_up(&release(10.0, 10.0));
    canvas.handle_pointer_leave();
    assert!(canvas.input_state().is_idle());
    assert_eq!(canvas.host().released, 0);
}

#[test]
fn test_press_during_gesture_ends_the_previous_one() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .build();

    canvas.handle_pointer_down(&press_with(700.0, 700.0, MouseButton::Middle));
    canvas.handle_pointer_down(&press(150.0, 150.0));

    assert!(canvas.input_state().is_dragging_element());
    assert_eq!(canvas.host().acquired, 2);
    assert_eq!(canvas.host().held(), 1);
}

#[test]
fn test_deleted_target_ends_gesture_on_next_move() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Doomed", Rect::new(100.0, 100.0, 200.0, 100.0))
        .build();

    canvas.handle_pointer_down(&press(150.0, 150.0));
    assert!(canvas.delete_element(ElementId(1)));

    canvas.handle_pointer_move(&move_to(250.0, 250.0));
    assert!(canvas.input_state().is_idle());
    assert!(canvas.elements().is_empty());
    assert_eq!(canvas.host().held(), 0);
}

#[test]
fn test_deleted_target_ends_resize_on_next_move() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Doomed", Rect::new(100.0, 100.0, 200.0, 100.0))
        .select(1)
        .build();

    canvas.handle_pointer_down(&press(300.0, 200.0));
    assert_eq!(canvas.input_state().resize_handle(), Some(ResizeHandle::SE));
    assert!(canvas.delete_element(ElementId(1)));

    canvas.handle_pointer_move(&move_to(350.0, 260.0));
    assert!(canvas.input_state().is_idle());
    assert!(canvas.elements().is_empty());
    assert_eq!(canvas.host().held(), 0);
}

#[test]
fn test_unmeasured_container_ignores_pointer() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .with_bounds(None)
        .build();

    canvas.handle_pointer_down(&press(150.0, 150.0));
    assert!(canvas.input_state().is_idle());
    assert_eq!(canvas.selected_id(), None);
    assert_eq!(canvas.screen_to_canvas(point(150.0, 150.0)), point(0.0, 0.0));
}

#[test]
fn test_container_lost_mid_gesture_holds_element() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .build();

    canvas.handle_pointer_down(&press(150.0, 150.0));
    canvas.host_mut().bounds = None;
    canvas.handle_pointer_move(&move_to(400.0, 400.0));

    assert_rect_eq(element_rect(&canvas, 1), Rect::new(100.0, 100.0, 200.0, 100.0));
    assert!(canvas.input_state().is_dragging_element());
}

#[test]
fn test_random_drags_respect_bounds() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Note", Rect::new(100.0, 100.0, 200.0, 100.0))
        .build();

    let targets = [(-500.0, -500.0), (9000.0, 20.0), (40.0, 7000.0), (-10.0, 3000.0)];
    for (x, y) in targets {
        let rect = element_rect(&canvas, 1);
        let grab = (rect.x + 10.0, rect.y + 10.0);
        canvas.handle_pointer_down(&press(grab.0, grab.1));
        canvas.handle_pointer_move(&move_to(x, y));
        canvas.handle_pointer_up(&release(x, y));
        assert_all_in_bounds(&canvas);
    }
}
