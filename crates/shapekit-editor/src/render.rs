//! Draw-list production
//!
//! Converts editor state into an ordered list of draw commands for a
//! host rendering layer: every shape with its outline, fill, and stroke
//! in paint order, then the frame overlay (border plus corner markers)
//! on top while a selection is active. No pixels are produced here;
//! [`crate::raster`] is the reference consumer.

use lyon::path::Path;

use shapekit_core::{Color, Point, Rect, ShapeId};

use crate::editor::Editor;
use crate::frame::MARKER_RADIUS;
use crate::model::Stroke;

/// Stroke width of the selection frame border.
const FRAME_BORDER_WIDTH: f64 = 0.5;

/// One shape to paint: local outline plus placement and style.
#[derive(Debug, Clone)]
pub struct DrawShape {
    pub id: ShapeId,
    /// Fill outline in the shape's local frame; translate by `origin`.
    pub outline: Path,
    pub origin: Point,
    pub fill: Color,
    pub stroke: Stroke,
    pub z: u8,
}

/// The selection overlay: a thin border rectangle and four filled
/// circular markers, one per corner.
#[derive(Debug, Clone)]
pub struct FrameOverlay {
    pub bounds: Rect,
    pub border: Stroke,
    /// Marker centers in canvas coordinates (TL, TR, BL, BR).
    pub markers: [Point; 4],
    pub marker_radius: f64,
    pub marker_fill: Color,
}

/// Everything a host needs to paint one frame, already in paint order.
#[derive(Debug, Clone)]
pub struct DrawList {
    pub shapes: Vec<DrawShape>,
    /// Present while a shape is selected; painted after all shapes.
    pub frame: Option<FrameOverlay>,
}

/// Snapshot of the editor's current state as a draw list. Pure read;
/// call after [`Editor::take_dirty`] reports a change.
pub fn build_draw_list(editor: &Editor) -> DrawList {
    let shapes = editor
        .scene()
        .draw_order()
        .into_iter()
        .map(|item| DrawShape {
            id: item.shape.id(),
            outline: item.shape.outline(),
            origin: item.shape.origin(),
            fill: item.shape.fill,
            stroke: item.shape.stroke,
            z: item.z,
        })
        .collect();

    let frame = editor.frame().is_attached().then(|| FrameOverlay {
        bounds: editor.frame().bounds(),
        border: Stroke::new(Color::BLACK, FRAME_BORDER_WIDTH),
        markers: editor.frame().markers(),
        marker_radius: MARKER_RADIUS,
        marker_fill: Color::WHITE,
    });

    DrawList { shapes, frame }
}
