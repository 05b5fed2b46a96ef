//! Shape model
//!
//! Every shape is bounding-box based: a top-left origin plus a size, with
//! hit-testing done as bounding-box containment. A triangle additionally
//! stores its three vertices in local coordinates; they are derived from
//! the bounding box and regenerated whenever the size changes.

pub mod triangle;

use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use shapekit_core::{Color, EditorError, Point, Rect, ShapeId, Size};

use triangle::triangle_vertices;

/// The fixed set of shape kinds the catalog produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Triangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => write!(f, "Rectangle"),
            Self::Ellipse => write!(f, "Ellipse"),
            Self::Triangle => write!(f, "Triangle"),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = EditorError;

    /// Parses a catalog key as passed by a host UI. An unrecognized key is
    /// a programming error on the caller's side, not a recoverable state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rectangle" => Ok(Self::Rectangle),
            "ellipse" => Ok(Self::Ellipse),
            "triangle" => Ok(Self::Triangle),
            _ => Err(EditorError::UnknownShapeKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// Kind-specific geometry. Only the triangle carries data beyond the
/// shared bounding box: its vertices in the shape's local frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Figure {
    Rectangle,
    Ellipse,
    Triangle { vertices: [Point; 3] },
}

/// Stroke style applied around a shape's outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// A shape on the canvas.
///
/// Origin and size are kept private so that every size change flows
/// through [`Shape::set_size`] and keeps triangle vertices in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: ShapeId,
    origin: Point,
    size: Size,
    pub fill: Color,
    pub stroke: Stroke,
    figure: Figure,
}

impl Shape {
    pub fn new(kind: ShapeKind, origin: Point, size: Size, fill: Color, stroke: Stroke) -> Self {
        let figure = match kind {
            ShapeKind::Rectangle => Figure::Rectangle,
            ShapeKind::Ellipse => Figure::Ellipse,
            ShapeKind::Triangle => Figure::Triangle {
                vertices: triangle_vertices(size),
            },
        };
        Self {
            id: ShapeId::new(),
            origin,
            size,
            fill,
            stroke,
            figure,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        match self.figure {
            Figure::Rectangle => ShapeKind::Rectangle,
            Figure::Ellipse => ShapeKind::Ellipse,
            Figure::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Triangle vertices in local coordinates; `None` for other kinds.
    pub fn vertices(&self) -> Option<&[Point; 3]> {
        match &self.figure {
            Figure::Triangle { vertices } => Some(vertices),
            _ => None,
        }
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.x += dx;
        self.origin.y += dy;
    }

    /// Sets the size and regenerates a triangle's vertices from the new
    /// bounding box.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        if let Figure::Triangle { vertices } = &mut self.figure {
            *vertices = triangle_vertices(size);
        }
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.set_origin(bounds.origin());
        self.set_size(bounds.size());
    }

    /// Hit test in canvas coordinates: the point translated into the
    /// shape's local frame must fall within its bounding box (edges
    /// inclusive). Exact per-kind containment is deliberately not used.
    pub fn contains(&self, point: Point) -> bool {
        let local = point.relative_to(self.origin);
        Rect::new(0.0, 0.0, self.size.width, self.size.height).contains(local)
    }

    /// Fill outline in local coordinates. The renderer translates the path
    /// by the shape's origin.
    pub fn outline(&self) -> Path {
        let mut builder = Path::builder();
        let w = self.size.width as f32;
        let h = self.size.height as f32;
        match &self.figure {
            Figure::Rectangle => {
                builder.add_rectangle(
                    &lyon::math::Box2D::new(point(0.0, 0.0), point(w, h)),
                    lyon::path::Winding::Positive,
                );
            }
            Figure::Ellipse => {
                builder.add_ellipse(
                    point(w / 2.0, h / 2.0),
                    lyon::math::vector(w / 2.0, h / 2.0),
                    lyon::math::Angle::radians(0.0),
                    lyon::path::Winding::Positive,
                );
            }
            Figure::Triangle { vertices } => {
                builder.begin(point(vertices[0].x as f32, vertices[0].y as f32));
                builder.line_to(point(vertices[1].x as f32, vertices[1].y as f32));
                builder.line_to(point(vertices[2].x as f32, vertices[2].y as f32));
                builder.close();
            }
        }
        builder.build()
    }
}
