//! # ShapeKit Editor
//!
//! The geometry and interaction core of a 2D shape editor: a canvas on
//! which a host UI creates, selects, drags, resizes, and deletes simple
//! geometric shapes.
//!
//! ## Core Components
//!
//! - **Model**: bounding-box shapes (rectangle, ellipse, triangle)
//! - **Catalog**: per-kind shape defaults and id generation
//! - **Frame**: the selection overlay with corner-drag resizing
//! - **Scene**: insertion-ordered shape storage with a two-level z marker
//! - **Editor**: the interaction controller turning pointer and key
//!   events into scene mutations
//! - **Render / Raster**: draw-list production and a tiny-skia preview
//!
//! ## Architecture
//!
//! ```text
//! Host UI events (pointer, keys; canvas-local coordinates)
//!   └── Editor (selection, drag state, bounds clamping)
//!         ├── Scene (shapes, z markers, hit-testing)
//!         └── Frame (corner hit-testing, anchored resize)
//!
//! Editor state -> DrawList -> host renderer, or raster preview
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_editor::{Editor, Point, ShapeKind};
//!
//! let mut editor = Editor::new(400.0, 300.0);
//! editor.add_shape(ShapeKind::Rectangle);
//!
//! // Press on the shape, drag it, release.
//! editor.pointer_down(Point::new(50.0, 25.0));
//! editor.pointer_move(Point::new(90.0, 45.0));
//! editor.pointer_up(Point::new(90.0, 45.0));
//!
//! assert!(editor.selected_id().is_some());
//! ```

pub mod catalog;
pub mod editor;
pub mod frame;
pub mod input;
pub mod model;
pub mod raster;
pub mod render;
pub mod scene;

pub use editor::Editor;
pub use frame::{Corner, Frame};
pub use input::{CursorHint, Key};
pub use model::{Figure, Shape, ShapeKind, Stroke};
pub use raster::render_to_image;
pub use render::{build_draw_list, DrawList, DrawShape, FrameOverlay};
pub use scene::{Scene, SceneItem};

// Re-export the core primitives hosts need alongside the editor
pub use shapekit_core::{Color, EditorError, Point, Rect, Result, ShapeId, Size};
