//! The axis-aligned rectangle descriptor and its overlap test

use crate::Intersects;
use crate::Point;
use serde_derive::{Deserialize, Serialize};

/// A rectangle that is always axis-aligned, anchored by its top-left
/// corner
///
/// ```other
/// ┼─────────────────────────────────────── x
/// │
/// │   Top left → ┌─────────────┐ ─┬─
/// │              │             │ height
/// │              └─────────────┘ ─┴─
/// │              ├────width────┤
/// y
/// ```
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct AxisAlignedRect {
    /// The coordinates of the rectangle's top-left corner
    pub top_left: Point,
    /// The rectangle's extent along the x axis
    pub width: f64,
    /// The rectangle's extent along the y axis
    pub height: f64,
}

impl AxisAlignedRect {
    fn left(&self) -> f64 {
        self.top_left.x
    }

    fn right(&self) -> f64 {
        self.top_left.x + self.width
    }

    fn top(&self) -> f64 {
        self.top_left.y
    }

    fn bottom(&self) -> f64 {
        self.top_left.y + self.height
    }
}

impl Intersects for AxisAlignedRect {
    /// Returns whether this rectangle overlaps another axis-aligned
    /// rectangle.
    ///
    /// All edge comparisons are strict: rectangles that merely share an
    /// edge or corner are not considered overlapping. This contrasts
    /// with the inclusive boundary of the circle and rotated rectangle
    /// tests and is preserved deliberately.
    fn intersects(&self, other: &AxisAlignedRect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
