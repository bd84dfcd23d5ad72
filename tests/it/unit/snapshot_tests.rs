//! Snapshot tests using the insta crate.
//!
//! Snapshots capture a readable rendering of the page after a gesture
//! sequence, so a behavior change shows up as a reviewable diff.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{TestCanvas, TestCanvasBuilder, double_click, move_to, press, release};
use notus::geometry::Rect;
use notus::types::ElementKind;

fn render_page(canvas: &TestCanvas) -> String {
    canvas
        .elements()
        .iter()
        .map(|e| {
            let kind = match &e.kind {
                ElementKind::Text { content } => format!("text {content:?}"),
                ElementKind::Media { media_type, name, .. } => {
                    format!("{} {name:?}", media_type.label())
                }
            };
            let selected = if canvas.selected_id() == Some(e.id) { " *" } else { "" };
            format!("#{} {kind} at ({}, {}) {}x{}{selected}", e.id, e.x, e.y, e.width, e.height)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn snapshot_page_after_create_drag_resize() {
    let mut canvas = TestCanvasBuilder::new()
        .with_text("Heading", Rect::new(100.0, 100.0, 300.0, 60.0))
        .with_image(Rect::new(500.0, 100.0, 300.0, 200.0))
        .build();

    // Create a text box, drag it, then grow the image from its SE corner.
    canvas.handle_pointer_down(&double_click(100.0, 400.0));
    canvas.handle_pointer_down(&press(150.0, 450.0));
    canvas.handle_pointer_move(&move_to(250.0, 470.0));
    canvas.handle_pointer_up(&release(250.0, 470.0));

    canvas.handle_pointer_down(&press(600.0, 150.0));
    canvas.handle_pointer_up(&release(600.0, 150.0));
    canvas.handle_pointer_down(&press(800.0, 300.0));
    canvas.handle_pointer_move(&move_to(860.0, 360.0));
    canvas.handle_pointer_up(&release(860.0, 360.0));

    insta::assert_snapshot!(render_page(&canvas), @r#"
    #1 text "Heading" at (100, 100) 300x60
    #2 IMAGE "test.png" at (500, 100) 360x240 *
    #3 text "New Text" at (200, 420) 200x100
    "#);
}
