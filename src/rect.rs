//! The rotated rectangle descriptor and its overlap test

use crate::Intersects;
use crate::Point;
use crate::Vector;
use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};

/// A rectangle that may be rotated around its center.
///
/// The rotation is a counter-clockwise rotation of the rectangle's
/// local axes about its center, in degrees.
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Rect {
    /// The coordinates of the rectangle's center
    pub center: Point,
    /// The rectangle's extent along its local x axis
    pub width: f64,
    /// The rectangle's extent along its local y axis
    pub height: f64,
    /// The rotation around the center, in degrees counter-clockwise
    pub rotation: f64,
}

impl Rect {
    /// Returns the rectangle's world-space corners in a fixed winding
    /// order: top-left, top-right, bottom-right, bottom-left, where
    /// "top-left" is the corner at `(-width / 2, -height / 2)` before
    /// rotation. The corner set is an implementation detail of the
    /// overlap test and is not part of the public surface.
    fn corners(&self) -> [Point; 4] {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        let local_corners = [
            Point {
                x: -half_width,
                y: -half_height,
            },
            Point {
                x: half_width,
                y: -half_height,
            },
            Point {
                x: half_width,
                y: half_height,
            },
            Point {
                x: -half_width,
                y: half_height,
            },
        ];

        // See https://en.wikipedia.org/wiki/Rotation_matrix
        let (rotation_sin, rotation_cos) = self.rotation.to_radians().sin_cos();
        local_corners.map(|corner| Point {
            x: self.center.x + corner.x * rotation_cos - corner.y * rotation_sin,
            y: self.center.y + corner.x * rotation_sin + corner.y * rotation_cos,
        })
    }
}

impl Intersects for Rect {
    /// Returns whether this rectangle overlaps another rectangle,
    /// judged by corner containment.
    ///
    /// The rectangles overlap as soon as any corner of one lies inside
    /// (or exactly on the boundary of) the other. This is an
    /// approximation, not a full separating-axis test: two rectangles
    /// that overlap without either contributing a corner to the
    /// intersection, such as a wide bar and a tall bar crossing in a
    /// plus shape, are reported as not overlapping. That gap is a
    /// documented behavioral characteristic of this test.
    fn intersects(&self, other: &Rect) -> bool {
        let own_corners = self.corners();
        let other_corners = other.corners();

        own_corners
            .iter()
            .any(|&corner| contains_corner(&other_corners, corner))
            || other_corners
                .iter()
                .any(|&corner| contains_corner(&own_corners, corner))
    }
}

/// Checks if `point` rests inside the convex quadrilateral spanned by
/// `corners`.
///
/// For every edge of the corner sequence, taken in winding order, the
/// cross product of the edge vector with the vector from the edge start
/// to the point must be non-negative; a single negative sign means the
/// point lies outside that edge. Points exactly on an edge count as
/// contained.
fn contains_corner(corners: &[Point; 4], point: Point) -> bool {
    corners
        .iter()
        .circular_tuple_windows()
        .all(|(&edge_start, &edge_end)| {
            let edge = Vector::from(edge_end - edge_start);
            let towards_point = Vector::from(point - edge_start);
            edge.cross_product(towards_point) >= 0.0
        })
}
