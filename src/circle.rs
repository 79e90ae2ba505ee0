//! The circle descriptor and its overlap test

use crate::InvalidShapeError;
use crate::Point;
use serde_derive::{Deserialize, Serialize};

/// A circle, described by its center and radius.
///
/// The radius may be given directly via [`radius`] or nested inside an
/// optional [`path`] grouping; [`resolved_radius`] checks the direct
/// field first, then the grouping, in that order. A descriptor carrying
/// neither is malformed and every operation on it reports
/// [`InvalidShapeError`] instead of silently assuming a radius of zero,
/// which would silently disable collision for that circle.
///
/// [`radius`]: ./struct.Circle.html#structfield.radius
/// [`path`]: ./struct.Circle.html#structfield.path
/// [`resolved_radius`]: ./struct.Circle.html#method.resolved_radius
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Circle {
    /// The coordinates of the circle's center
    pub center: Point,
    /// The circle's radius, when given directly
    pub radius: Option<f64>,
    /// An optional grouping of path properties, the fallback source
    /// for the radius
    pub path: Option<CirclePath>,
}

/// Path properties of a [`Circle`], carrying the fallback radius
///
/// [`Circle`]: ./struct.Circle.html
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct CirclePath {
    /// The circle's radius
    pub radius: f64,
}

impl Circle {
    /// Creates a [`Circle`] with a directly set radius.
    ///
    /// # Examples
    /// ```
    /// use overlap2d::{Circle, Point};
    ///
    /// let circle = Circle::with_radius(Point { x: 4.0, y: -2.0 }, 10.0);
    /// assert_eq!(Ok(10.0), circle.resolved_radius());
    /// ```
    ///
    /// [`Circle`]: ./struct.Circle.html
    pub fn with_radius(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: Some(radius),
            path: None,
        }
    }

    /// Resolves the circle's radius, trying the direct [`radius`] field
    /// first and the [`path`] grouping second.
    ///
    /// # Errors
    /// Returns [`InvalidShapeError`] if neither source is present.
    ///
    /// [`radius`]: ./struct.Circle.html#structfield.radius
    /// [`path`]: ./struct.Circle.html#structfield.path
    /// [`InvalidShapeError`]: ../enum.InvalidShapeError.html
    pub fn resolved_radius(&self) -> Result<f64, InvalidShapeError> {
        self.radius
            .or_else(|| self.path.map(|path| path.radius))
            .ok_or(InvalidShapeError::UnresolvedRadius)
    }

    /// Returns whether this circle overlaps another circle.
    ///
    /// Two circles overlap when the distance between their centers is
    /// no greater than the sum of their radii. Exact tangency counts as
    /// overlapping; this inclusive boundary is deliberate.
    ///
    /// This is an inherent method rather than an [`Intersects`]
    /// implementation because radius resolution can fail.
    ///
    /// # Errors
    /// Returns [`InvalidShapeError`] if a radius cannot be resolved for
    /// either circle.
    ///
    /// [`Intersects`]: ./trait.Intersects.html
    /// [`InvalidShapeError`]: ../enum.InvalidShapeError.html
    pub fn intersects(&self, other: &Circle) -> Result<bool, InvalidShapeError> {
        let own_radius = self.resolved_radius()?;
        let other_radius = other.resolved_radius()?;
        Ok(self.center.distance(other.center) <= own_radius + other_radius)
    }
}
