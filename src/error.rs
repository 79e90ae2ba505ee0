use thiserror::Error;

/// The error returned when a required numeric field of a shape
/// descriptor cannot be resolved.
///
/// This is deliberately the crate's only error kind: apart from the
/// circle radius, all geometric inputs are trusted at face value, so
/// malformed values (negative extents, `NaN` coordinates) flow into
/// incorrect but non-crashing boolean results instead of errors.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum InvalidShapeError {
    /// Neither the circle's `radius` field nor its `path` grouping
    /// carries a radius
    #[error("no radius could be resolved from the circle's `radius` field or its `path` grouping")]
    UnresolvedRadius,
}
