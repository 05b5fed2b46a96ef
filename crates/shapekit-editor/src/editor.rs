//! Interaction controller
//!
//! Owns the scene, the selection frame, and the drag state, and
//! translates pointer and key events into select, move, resize, add, and
//! remove operations. Everything runs synchronously on the host's event
//! thread; coordinates arriving here are already canvas-local.
//!
//! Gesture routing: a press on a frame corner starts a resize, a press on
//! a shape selects it and starts a move, a press on empty canvas clears
//! the selection. While a gesture is active, move events go to it
//! exclusively until pointer-up, via the explicit state below rather
//! than pointer capture.

use tracing::{debug, trace, warn};

use shapekit_core::{Point, ShapeId, Size};

use crate::catalog;
use crate::frame::{Corner, Frame};
use crate::input::{CursorHint, Key};
use crate::model::{Shape, ShapeKind};
use crate::scene::{Scene, Z_BASE, Z_RAISED};

/// Where newly added shapes land on the canvas.
const DEFAULT_OFFSET: Point = Point { x: 0.0, y: 0.0 };

/// Pointer-drag state: the reference point move deltas are measured
/// from, and whether a move is in progress.
#[derive(Debug, Clone, Copy, Default)]
struct DragState {
    reference: Point,
    moving: bool,
}

/// The shape editor core: scene, selection, and interaction state for a
/// canvas of fixed extent.
#[derive(Debug)]
pub struct Editor {
    canvas: Size,
    scene: Scene,
    frame: Frame,
    selected: Option<ShapeId>,
    drag: DragState,
    dirty: bool,
}

impl Editor {
    /// Creates an empty editor. The canvas extent is fixed for the
    /// session and bounds all move and resize clamping.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        let canvas = Size::new(canvas_width, canvas_height);
        Self {
            canvas,
            scene: Scene::new(),
            frame: Frame::new(canvas),
            selected: None,
            drag: DragState::default(),
            dirty: false,
        }
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.scene.get(id)
    }

    /// Mutable access to a shape for hosts adjusting fill or stroke.
    /// Marks the editor dirty so the next render reflects the change.
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        let shape = self.scene.get_mut(id)?;
        self.dirty = true;
        Some(shape)
    }

    pub fn shape_count(&self) -> usize {
        self.scene.len()
    }

    /// True when observable state changed since the last call, clearing
    /// the flag. Hosts poll once per frame and repaint on true.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Creates a catalog shape, places it at the default offset, and
    /// appends it to the scene. The new shape is topmost and unselected.
    pub fn add_shape(&mut self, kind: ShapeKind) -> ShapeId {
        let mut shape = catalog::create_shape(kind);
        shape.set_origin(DEFAULT_OFFSET);
        let id = shape.id();
        self.scene.push(shape);
        self.dirty = true;
        debug!("Added {} {}", kind, id);
        id
    }

    /// Hit-tests the scene topmost-first and updates the selection.
    ///
    /// On a hit, the previous selection drops back to the base z level,
    /// the hit shape and the frame are raised, and a move begins with
    /// this point as its reference (press and drag is one gesture). On a
    /// miss, the selection clears and the frame detaches.
    pub fn select_at(&mut self, point: Point) {
        match self.scene.hit_test(point) {
            Some(id) => self.select(id, point),
            None => self.deselect(),
        }
    }

    /// Drag update: moves the selection by the delta from the drag
    /// reference, each axis independently clamped to
    /// `[0, canvas extent - shape extent]`, and moves the frame with it.
    ///
    /// The reference advances to `point` only when at least one axis
    /// stayed within bounds. With both axes clamped it holds still, so
    /// the offset cannot accumulate while the shape is pinned and the
    /// cursor can catch the drag back up once it re-enters range.
    pub fn move_selected_to(&mut self, point: Point) {
        if !self.drag.moving {
            return;
        }
        let Some(id) = self.selected else { return };
        let Some(shape) = self.scene.get_mut(id) else { return };

        let delta_x = point.x - self.drag.reference.x;
        let delta_y = point.y - self.drag.reference.y;
        let origin = shape.origin();
        let size = shape.size();

        let (x, x_in_bounds) = clamp_to_extent(origin.x + delta_x, size.width, self.canvas.width);
        let (y, y_in_bounds) = clamp_to_extent(origin.y + delta_y, size.height, self.canvas.height);

        let origin = Point::new(x, y);
        shape.set_origin(origin);
        self.frame.set_origin(origin);

        if x_in_bounds || y_in_bounds {
            self.drag.reference = point;
        }
        self.dirty = true;
        trace!("Moved {} to ({}, {})", id, x, y);
    }

    /// Ends the move gesture. Without an active move this is a no-op.
    pub fn end_move(&mut self) {
        if self.drag.moving {
            self.drag.moving = false;
            trace!("End move");
        }
    }

    /// Removes the selected shape from the scene and clears the
    /// selection. A no-op when nothing is selected or the selected id is
    /// no longer present; the frame itself is never a removal target
    /// since it does not live in the scene.
    pub fn remove_selected(&mut self) {
        let Some(id) = self.selected else {
            trace!("Remove requested with no selection");
            return;
        };
        if self.scene.remove(id).is_none() {
            return;
        }
        debug!("Removed {}", id);
        self.deselect();
    }

    /// Pointer-down entry point.
    ///
    /// A press within a corner marker of the attached frame starts a
    /// resize and leaves the selection untouched; any other press is a
    /// selection click.
    pub fn pointer_down(&mut self, point: Point) {
        if self.frame.is_attached() {
            let local = point.relative_to(self.frame.origin());
            let corner = self.frame.hit_corner(local);
            if corner != Corner::None {
                self.frame.begin_resize(corner);
                return;
            }
        }
        self.select_at(point);
    }

    /// Pointer-move entry point. Resize takes precedence over move, the
    /// explicit counterpart of capture-based event routing.
    pub fn pointer_move(&mut self, point: Point) {
        if self.frame.is_resizing() {
            self.resize_step(point);
        } else {
            self.move_selected_to(point);
        }
    }

    /// Pointer-up entry point: ends whichever gesture is active.
    pub fn pointer_up(&mut self, _point: Point) {
        if self.frame.is_resizing() {
            self.frame.end_resize();
        }
        self.end_move();
    }

    /// Key-down entry point: Delete removes the selection, other keys
    /// are ignored.
    pub fn key_down(&mut self, key: Key) {
        if key == Key::Delete {
            self.remove_selected();
        }
    }

    /// Cursor feedback for the host: diagonal resize arrows over the
    /// frame's corner markers, the default arrow everywhere else.
    pub fn cursor_hint(&self, point: Point) -> CursorHint {
        if !self.frame.is_attached() {
            return CursorHint::Arrow;
        }
        let local = point.relative_to(self.frame.origin());
        match self.frame.hit_corner(local) {
            Corner::TopLeft | Corner::BottomRight => CursorHint::ResizeNwSe,
            Corner::TopRight | Corner::BottomLeft => CursorHint::ResizeNeSw,
            Corner::None => CursorHint::Arrow,
        }
    }

    fn select(&mut self, id: ShapeId, reference: Point) {
        if let Some(previous) = self.selected {
            self.scene.set_z(previous, Z_BASE);
        }
        // The id came from this scene's hit test, so the lookup succeeds.
        if let Some(shape) = self.scene.get(id) {
            self.frame.attach(shape);
            self.scene.set_z(id, Z_RAISED);
            self.selected = Some(id);
            self.drag = DragState {
                reference,
                moving: true,
            };
            self.dirty = true;
            debug!("Selected {}", id);
        }
    }

    fn deselect(&mut self) {
        if let Some(id) = self.selected.take() {
            self.scene.set_z(id, Z_BASE);
            self.frame.detach();
            self.dirty = true;
            debug!("Deselected {}", id);
        }
    }

    fn resize_step(&mut self, point: Point) {
        let Some(id) = self.frame.attached_to() else {
            return;
        };
        let Some(shape) = self.scene.get_mut(id) else {
            return;
        };
        let local = point.relative_to(self.frame.origin());
        // An active resize always has a corner, so this cannot fail from
        // the event path.
        match self.frame.resize_to(local, shape) {
            Ok(()) => self.dirty = true,
            Err(err) => warn!("Resize step rejected: {}", err),
        }
    }
}

/// Clamps a proposed origin coordinate to `[0, limit - size]`, reporting
/// whether the proposal was already within bounds.
fn clamp_to_extent(coordinate: f64, size: f64, limit: f64) -> (f64, bool) {
    if coordinate < 0.0 {
        (0.0, false)
    } else if coordinate + size > limit {
        (limit - size, false)
    } else {
        (coordinate, true)
    }
}
