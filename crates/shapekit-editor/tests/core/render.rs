//! Tests for draw-list production and the raster preview.

use shapekit_editor::{build_draw_list, render_to_image, Editor, Point, ShapeId, ShapeKind};

#[test]
fn test_draw_list_paints_selection_last() {
    let mut editor = Editor::new(400.0, 300.0);
    let first = editor.add_shape(ShapeKind::Rectangle);
    let second = editor.add_shape(ShapeKind::Ellipse);

    // Drag the top shape clear, then select the one underneath: the
    // selection paints last even though it was inserted first.
    editor.pointer_down(Point::new(50.0, 25.0));
    editor.pointer_move(Point::new(250.0, 225.0));
    editor.pointer_up(Point::new(250.0, 225.0));
    editor.pointer_down(Point::new(10.0, 10.0));
    assert_eq!(editor.selected_id(), Some(first));

    let list = build_draw_list(&editor);
    let order: Vec<ShapeId> = list.shapes.iter().map(|s| s.id).collect();
    assert_eq!(order, vec![second, first]);
    assert_eq!(list.shapes[1].z, 1);
    assert_eq!(list.shapes[0].z, 0);
}

#[test]
fn test_draw_list_overlay_follows_selection() {
    let mut editor = Editor::new(400.0, 300.0);
    editor.add_shape(ShapeKind::Rectangle);

    let list = build_draw_list(&editor);
    assert!(list.frame.is_none());

    editor.pointer_down(Point::new(50.0, 25.0));
    let list = build_draw_list(&editor);
    let overlay = list.frame.unwrap();
    assert_eq!(overlay.bounds, editor.frame().bounds());
    assert_eq!(overlay.markers[0], Point::new(0.0, 0.0));
    assert_eq!(overlay.markers[3], Point::new(100.0, 50.0));
    assert!(overlay.marker_radius > 0.0);

    editor.pointer_up(Point::new(50.0, 25.0));
    editor.pointer_down(Point::new(300.0, 200.0));
    let list = build_draw_list(&editor);
    assert!(list.frame.is_none());
}

#[test]
fn test_raster_preview_has_canvas_dimensions() {
    let mut editor = Editor::new(400.0, 300.0);
    editor.add_shape(ShapeKind::Rectangle);

    let image = render_to_image(&editor);
    assert_eq!(image.dimensions(), (400, 300));

    // Shape interior takes the fill color, empty canvas stays background.
    let inside = image.get_pixel(50, 25);
    let outside = image.get_pixel(380, 290);
    assert_ne!(inside, outside);
    assert_eq!(outside.0, [255, 255, 255]);
}
