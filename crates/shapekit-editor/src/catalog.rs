//! Shape catalog
//!
//! Produces new shapes with their fixed per-kind defaults. Pure
//! construction; the only side effect is generating the shape's id.

use shapekit_core::{Color, Point, Size};

use crate::model::{Shape, ShapeKind, Stroke};

/// Stroke width applied to every catalog shape.
const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Default size for the given kind.
pub fn default_size(kind: ShapeKind) -> Size {
    match kind {
        ShapeKind::Rectangle => Size::new(100.0, 50.0),
        ShapeKind::Ellipse => Size::new(100.0, 50.0),
        ShapeKind::Triangle => Size::new(150.0, 50.0),
    }
}

/// Default fill color for the given kind.
pub fn default_fill(kind: ShapeKind) -> Color {
    match kind {
        ShapeKind::Rectangle => Color::BLUE,
        ShapeKind::Ellipse => Color::RED,
        ShapeKind::Triangle => Color::GREEN,
    }
}

/// Creates a shape of the given kind with its type defaults and a fresh
/// id: rectangles and ellipses are 100x50, triangles 150x50 with vertices
/// derived from the bounding box, all stroked black at width 2.
///
/// Position is left at the local origin; placement on the canvas is the
/// controller's decision.
pub fn create_shape(kind: ShapeKind) -> Shape {
    Shape::new(
        kind,
        Point::new(0.0, 0.0),
        default_size(kind),
        default_fill(kind),
        Stroke::new(Color::BLACK, DEFAULT_STROKE_WIDTH),
    )
}
