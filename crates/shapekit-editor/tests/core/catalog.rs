//! Tests for the shape catalog defaults.

use std::str::FromStr;

use shapekit_editor::catalog::{create_shape, default_fill, default_size};
use shapekit_editor::{Color, Point, ShapeKind, Size};

#[test]
fn test_rectangle_defaults() {
    let shape = create_shape(ShapeKind::Rectangle);
    assert_eq!(shape.kind(), ShapeKind::Rectangle);
    assert_eq!(shape.origin(), Point::new(0.0, 0.0));
    assert_eq!(shape.size(), Size::new(100.0, 50.0));
    assert_eq!(shape.fill, Color::BLUE);
    assert_eq!(shape.stroke.color, Color::BLACK);
    assert_eq!(shape.stroke.width, 2.0);
    assert!(shape.vertices().is_none());
}

#[test]
fn test_ellipse_defaults() {
    let shape = create_shape(ShapeKind::Ellipse);
    assert_eq!(shape.kind(), ShapeKind::Ellipse);
    assert_eq!(shape.size(), Size::new(100.0, 50.0));
    assert_eq!(shape.fill, Color::RED);
    assert!(shape.vertices().is_none());
}

#[test]
fn test_triangle_defaults() {
    let shape = create_shape(ShapeKind::Triangle);
    assert_eq!(shape.kind(), ShapeKind::Triangle);
    assert_eq!(shape.size(), Size::new(150.0, 50.0));
    assert_eq!(shape.fill, Color::GREEN);

    let vertices = shape.vertices().unwrap();
    assert_eq!(vertices[0], Point::new(0.0, 50.0));
    assert_eq!(vertices[1], Point::new(75.0, 0.0));
    assert_eq!(vertices[2], Point::new(150.0, 50.0));
}

#[test]
fn test_catalog_tables_cover_all_kinds() {
    for kind in [ShapeKind::Rectangle, ShapeKind::Ellipse, ShapeKind::Triangle] {
        let size = default_size(kind);
        assert!(size.width > 0.0 && size.height > 0.0);
        let _ = default_fill(kind);
    }
}

#[test]
fn test_created_shapes_get_unique_ids() {
    let a = create_shape(ShapeKind::Rectangle);
    let b = create_shape(ShapeKind::Rectangle);
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_kind_parses_case_insensitively() {
    assert_eq!(ShapeKind::from_str("rectangle").unwrap(), ShapeKind::Rectangle);
    assert_eq!(ShapeKind::from_str("Ellipse").unwrap(), ShapeKind::Ellipse);
    assert_eq!(ShapeKind::from_str("TRIANGLE").unwrap(), ShapeKind::Triangle);
}

#[test]
fn test_unknown_kind_is_rejected() {
    let err = ShapeKind::from_str("hexagon").unwrap_err();
    assert_eq!(err.to_string(), "Unknown shape kind: hexagon");
}
