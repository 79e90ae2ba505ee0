/// Tests whether this shape overlaps another shape
///
/// Boundary semantics are defined per implementation: the rotated
/// rectangle test counts a shared edge or corner as overlapping,
/// the axis-aligned rectangle test does not.
pub trait Intersects<Other: ?Sized = Self> {
    /// Returns whether this shape overlaps another shape
    fn intersects(&self, other: &Other) -> bool;
}
