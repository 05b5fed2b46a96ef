//! Input vocabulary
//!
//! The editor consumes pointer positions already translated to canvas
//! coordinates by the host, plus the few keys it reacts to.

use serde::{Deserialize, Serialize};

/// Keys the editor reacts to. Anything else arrives as `Other` and is
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Delete,
    Other,
}

/// Pointer cursor feedback for the host to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorHint {
    Arrow,
    /// Diagonal resize over the top-left or bottom-right marker.
    ResizeNwSe,
    /// Diagonal resize over the top-right or bottom-left marker.
    ResizeNeSw,
}
