//! Tests for the bounding-box shape model.

use shapekit_editor::catalog::create_shape;
use shapekit_editor::{Point, Rect, ShapeKind, Size};

#[test]
fn test_containment_uses_bounding_box() {
    let mut shape = create_shape(ShapeKind::Triangle);
    shape.set_origin(Point::new(20.0, 30.0));

    // The top-left corner of the box is outside the triangle's fill but
    // inside its bounding box, and that is what selection works on.
    assert!(shape.contains(Point::new(20.0, 30.0)));
    assert!(shape.contains(Point::new(170.0, 80.0)));
    assert!(!shape.contains(Point::new(19.0, 30.0)));
    assert!(!shape.contains(Point::new(20.0, 81.0)));
}

#[test]
fn test_containment_edges_are_inclusive() {
    let shape = create_shape(ShapeKind::Rectangle);
    assert!(shape.contains(Point::new(0.0, 0.0)));
    assert!(shape.contains(Point::new(100.0, 50.0)));
    assert!(!shape.contains(Point::new(100.1, 50.0)));
}

#[test]
fn test_translate_moves_origin_only() {
    let mut shape = create_shape(ShapeKind::Ellipse);
    shape.translate(15.0, -5.0);
    assert_eq!(shape.origin(), Point::new(15.0, -5.0));
    assert_eq!(shape.size(), Size::new(100.0, 50.0));
}

#[test]
fn test_set_size_regenerates_triangle_vertices() {
    let mut shape = create_shape(ShapeKind::Triangle);
    shape.set_size(Size::new(170.0, 60.0));

    let vertices = shape.vertices().unwrap();
    assert_eq!(vertices[0], Point::new(0.0, 60.0));
    assert_eq!(vertices[1], Point::new(85.0, 0.0));
    assert_eq!(vertices[2], Point::new(170.0, 60.0));
}

#[test]
fn test_set_size_leaves_other_kinds_plain() {
    let mut shape = create_shape(ShapeKind::Rectangle);
    shape.set_size(Size::new(170.0, 60.0));
    assert_eq!(shape.size(), Size::new(170.0, 60.0));
    assert!(shape.vertices().is_none());
}

#[test]
fn test_set_bounds_sets_origin_and_size() {
    let mut shape = create_shape(ShapeKind::Rectangle);
    shape.set_bounds(Rect::new(10.0, 20.0, 30.0, 40.0));
    assert_eq!(shape.origin(), Point::new(10.0, 20.0));
    assert_eq!(shape.size(), Size::new(30.0, 40.0));
    assert_eq!(shape.bounds(), Rect::new(10.0, 20.0, 30.0, 40.0));
}

#[test]
fn test_outline_is_nonempty_for_each_kind() {
    for kind in [ShapeKind::Rectangle, ShapeKind::Ellipse, ShapeKind::Triangle] {
        let shape = create_shape(kind);
        let events = shape.outline().iter().count();
        assert!(events > 0, "{} outline should have path events", kind);
    }
}

#[test]
fn test_kind_display_matches_catalog_names() {
    assert_eq!(ShapeKind::Rectangle.to_string(), "Rectangle");
    assert_eq!(ShapeKind::Ellipse.to_string(), "Ellipse");
    assert_eq!(ShapeKind::Triangle.to_string(), "Triangle");
}
