//! Selection frame
//!
//! The rectangular overlay bound to the selected shape. It renders as a
//! thin border with a filled circular marker on each corner and owns the
//! corner-drag resize logic: marker hit-testing, the opposite-anchor
//! constraint, and axis-independent clamping to the canvas.

use serde::{Deserialize, Serialize};
use tracing::debug;

use shapekit_core::{EditorError, Point, Rect, Result, ShapeId, Size};

use crate::model::Shape;

/// Hit-test and draw radius of the corner markers.
pub const MARKER_RADIUS: f64 = 5.0;

/// One of the four resize handles, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    None,
}

/// The selection overlay and its resize state machine.
///
/// `Frame` is responsible for:
/// - Mirroring the bound shape's position and size
/// - Resolving which corner marker a local point lands on
/// - Resizing the bound shape from an active corner, clamped to the
///   canvas and to the anchor corner diagonally opposite the drag
/// - Regenerating a bound triangle's vertices after every resize
///
/// # Lifecycle
///
/// One frame is created per editor session. Selection binds it to a shape
/// with [`Frame::attach`] and unbinds it with [`Frame::detach`]; a
/// detached frame is not rendered and not hit-testable. The frame holds
/// the bound shape's id, never a reference; the controller looks the
/// shape up and passes it in for mutation.
///
/// # Resize model
///
/// A resize starts when a pointer-down lands within [`MARKER_RADIUS`] of
/// a corner ([`Frame::hit_corner`]), which records the corner and the
/// opposite anchor point ([`Frame::begin_resize`]). Every subsequent
/// cursor position is applied by [`Frame::resize_to`] until
/// [`Frame::end_resize`] clears the state on pointer-up.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Canvas extent; outer clamp boundary for all resize math.
    canvas: Size,
    origin: Point,
    size: Size,
    attached: Option<ShapeId>,
    corner: Corner,
    /// Anchor corner diagonally opposite the active one, fixed at
    /// drag start in canvas coordinates.
    opposite: Point,
    resizing: bool,
}

impl Frame {
    /// Creates a detached frame for a canvas of the given extent.
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            origin: Point::default(),
            size: Size::default(),
            attached: None,
            corner: Corner::None,
            opposite: Point::default(),
            resizing: false,
        }
    }

    /// Binds the frame to a shape, copying its position and size and
    /// clearing any in-progress resize state.
    pub fn attach(&mut self, shape: &Shape) {
        self.origin = shape.origin();
        self.size = shape.size();
        self.attached = Some(shape.id());
        self.corner = Corner::None;
        self.resizing = false;
    }

    /// Unbinds the frame. A detached frame is inactive: not rendered and
    /// not hit-testable.
    pub fn detach(&mut self) {
        self.attached = None;
        self.corner = Corner::None;
        self.resizing = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Id of the bound shape, if any.
    pub fn attached_to(&self) -> Option<ShapeId> {
        self.attached
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    /// The corner currently being dragged.
    pub fn active_corner(&self) -> Corner {
        self.corner
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

    /// Moves the frame with its shape during a drag. Size is untouched.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Corner marker positions in canvas coordinates, in top-left,
    /// top-right, bottom-left, bottom-right order.
    pub fn markers(&self) -> [Point; 4] {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.bounds();
        [
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x, y + height),
            Point::new(x + width, y + height),
        ]
    }

    /// Resolves which corner marker (if any) a frame-local point lands on.
    ///
    /// Each corner is tested with independent per-axis proximity: the
    /// point must be strictly within [`MARKER_RADIUS`] of the corner on
    /// both axes, which is the bounding box of the drawn marker. Corners
    /// are tested top-left, top-right, bottom-left, bottom-right; the
    /// first match wins. The exact center of the frame never matches,
    /// and neither does any point of the interior or exterior away from
    /// the markers. A detached frame matches nothing.
    pub fn hit_corner(&self, local: Point) -> Corner {
        if self.attached.is_none() {
            return Corner::None;
        }
        let r = MARKER_RADIUS;
        let w = self.size.width;
        let h = self.size.height;
        let near = |coord: f64, edge: f64| (coord - edge).abs() < r;
        if near(local.x, 0.0) && near(local.y, 0.0) {
            Corner::TopLeft
        } else if near(local.x, w) && near(local.y, 0.0) {
            Corner::TopRight
        } else if near(local.x, 0.0) && near(local.y, h) {
            Corner::BottomLeft
        } else if near(local.x, w) && near(local.y, h) {
            Corner::BottomRight
        } else {
            Corner::None
        }
    }

    /// Records the active corner and the opposite anchor point.
    ///
    /// The anchor is the frame corner diagonally across from `corner`,
    /// captured in canvas coordinates at drag start; subsequent origin
    /// updates clamp against it so the dragged corner can never cross
    /// past the anchor. Passing [`Corner::None`] is a no-op.
    pub fn begin_resize(&mut self, corner: Corner) {
        let right = self.origin.x + self.size.width;
        let bottom = self.origin.y + self.size.height;
        self.opposite = match corner {
            Corner::None => return,
            Corner::TopLeft => Point::new(right, bottom),
            Corner::TopRight => Point::new(self.origin.x, bottom),
            Corner::BottomLeft => Point::new(right, self.origin.y),
            Corner::BottomRight => self.origin,
        };
        self.corner = corner;
        self.resizing = true;
        debug!(
            "Begin resize at {:?}, anchor ({}, {})",
            corner, self.opposite.x, self.opposite.y
        );
    }

    /// Applies one resize step from the current cursor position, given in
    /// the frame's local coordinates (relative to its top-left before
    /// this step), then propagates the result to the bound shape.
    ///
    /// Dimensions are recomputed first, from the pre-step origin; the
    /// origin moves afterwards:
    ///
    /// - top-left: width and height shrink by the cursor offsets, origin
    ///   shifts by them
    /// - top-right: width becomes the cursor x, height shrinks, origin.y
    ///   shifts
    /// - bottom-left: width shrinks, height becomes the cursor y,
    ///   origin.x shifts
    /// - bottom-right: width and height become the cursor position
    ///
    /// Each dimension clamps so the far edge stays inside the canvas;
    /// each shifted origin coordinate clamps to `[0, anchor coordinate]`
    /// and never pushes the far edge out of the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ResizeWithoutCorner`] when no corner is
    /// active; calling this outside a `begin_resize`/`end_resize` window
    /// is a logic error in the caller.
    pub fn resize_to(&mut self, cursor: Point, shape: &mut Shape) -> Result<()> {
        let w = self.size.width;
        let h = self.size.height;
        match self.corner {
            Corner::TopLeft => {
                self.grow(-cursor.x, -cursor.y);
                self.shift(Some(cursor.x), Some(cursor.y));
            }
            Corner::TopRight => {
                self.grow(cursor.x - w, -cursor.y);
                self.shift(None, Some(cursor.y));
            }
            Corner::BottomLeft => {
                self.grow(-cursor.x, cursor.y - h);
                self.shift(Some(cursor.x), None);
            }
            Corner::BottomRight => {
                self.grow(cursor.x - w, cursor.y - h);
            }
            Corner::None => return Err(EditorError::ResizeWithoutCorner),
        }

        shape.set_origin(self.origin);
        shape.set_size(self.size);
        Ok(())
    }

    /// Clears the active corner and the resizing flag.
    pub fn end_resize(&mut self) {
        if self.resizing {
            debug!("End resize at {:?}", self.corner);
        }
        self.corner = Corner::None;
        self.resizing = false;
    }

    /// Recomputes both dimensions from the current origin. Runs before
    /// the origin moves, so the clamp sees the pre-step position.
    fn grow(&mut self, delta_x: f64, delta_y: f64) {
        let width =
            self.resized_dimension(self.size.width, delta_x, self.canvas.width, self.origin.x);
        let height =
            self.resized_dimension(self.size.height, delta_y, self.canvas.height, self.origin.y);
        self.size = Size::new(width, height);
    }

    /// One axis of the dimension rule.
    ///
    /// Only the bottom-right corner resizes unconditionally; the other
    /// corners keep the dimension while the origin coordinate on this
    /// axis sits exactly at 0. Within range, the new dimension is the
    /// clamped `current + delta`; past range, the far edge pins to the
    /// canvas edge.
    fn resized_dimension(
        &self,
        current: f64,
        delta: f64,
        canvas_extent: f64,
        position: f64,
    ) -> f64 {
        if self.corner != Corner::BottomRight && position == 0.0 {
            return current;
        }
        if current + delta + position < canvas_extent {
            (current + delta).max(0.0)
        } else {
            canvas_extent - position
        }
    }

    /// Shifts the origin on the axes a corner moves. Each coordinate
    /// clamps to `[0, anchor]` and additionally keeps the far edge on
    /// this axis inside the canvas, which matters only when the
    /// dimension was held by the origin-at-0 guard.
    fn shift(&mut self, delta_x: Option<f64>, delta_y: Option<f64>) {
        if let Some(dx) = delta_x {
            let max = self.opposite.x.min(self.canvas.width - self.size.width);
            self.origin.x = (self.origin.x + dx).clamp(0.0, max);
        }
        if let Some(dy) = delta_y {
            let max = self.opposite.y.min(self.canvas.height - self.size.height);
            self.origin.y = (self.origin.y + dy).clamp(0.0, max);
        }
    }
}
