//! # ShapeKit Core
//!
//! Core types for the ShapeKit editor.
//! Provides the geometry primitives, colors, shape identifiers, and the
//! error taxonomy shared by the editor crates.

pub mod color;
pub mod error;
pub mod geometry;
pub mod id;

pub use color::Color;
pub use error::{EditorError, Result};
pub use geometry::{Point, Rect, Size};
pub use id::ShapeId;
