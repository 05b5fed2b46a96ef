//! # ShapeKit
//!
//! An interactive 2D shape editor core: simple geometric shapes on a
//! fixed-extent canvas, with click selection, a corner-handled selection
//! frame, and bounds-clamped drag and resize. The core consumes
//! canvas-local pointer and key events and produces draw lists; it never
//! touches a window or a device itself.
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace:
//!
//! 1. **shapekit-core** - geometry primitives, colors, ids, errors
//! 2. **shapekit-editor** - shape model, catalog, selection frame, scene,
//!    interaction controller, draw-list production, raster preview
//! 3. **shapekit** - this facade plus the demo binary

pub use shapekit_editor as editor;

pub use shapekit_core::{Color, EditorError, Point, Rect, Result, ShapeId, Size};

pub use shapekit_editor::{
    build_draw_list, render_to_image, Corner, CursorHint, DrawList, DrawShape, Editor, Figure,
    Frame, FrameOverlay, Key, Scene, SceneItem, Shape, ShapeKind, Stroke,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
