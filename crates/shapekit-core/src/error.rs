//! Error handling for ShapeKit
//!
//! The editor distinguishes two failure classes:
//! - Programming errors (an unrecognized shape-kind key, a resize update
//!   with no active corner) surface as [`EditorError`] values.
//! - Geometric edge cases (cursor outside the canvas, zero-size shapes,
//!   drags past the bounds) are never errors; they are silently clamped.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Editor error type
///
/// Every variant represents a caller mistake rather than a user-recoverable
/// condition; operations either fully apply or are a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// A shape-kind key did not match any catalog entry
    #[error("Unknown shape kind: {kind}")]
    UnknownShapeKind {
        /// The unrecognized kind key.
        kind: String,
    },

    /// A resize update was requested while no corner is active
    #[error("Resize update without an active corner")]
    ResizeWithoutCorner,
}

/// Convenience result type used throughout the editor crates
pub type Result<T> = std::result::Result<T, EditorError>;
