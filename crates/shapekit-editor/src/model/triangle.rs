//! Triangle vertex derivation.

use shapekit_core::{Point, Size};

/// Vertices of an isosceles triangle filling a `size` bounding box, in
/// local coordinates: base-left corner, apex at top-center, base-right
/// corner. The same derivation is used at creation and after every
/// resize, so the vertex set is always exactly
/// `{(0, h), (w/2, 0), (w, h)}`.
pub fn triangle_vertices(size: Size) -> [Point; 3] {
    let w = size.width;
    let h = size.height;
    [
        Point::new(0.0, h),
        Point::new(w / 2.0, 0.0),
        Point::new(w, h),
    ]
}
