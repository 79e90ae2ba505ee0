//! Pairwise 2D overlap tests for circles and axis-aligned
//! or rotated rectangles.
//!
//! Every test is a stateless pure predicate over caller-supplied
//! value descriptors: nothing is retained, mutated or shared between
//! calls. The crate computes boolean overlap only; it does not compute
//! contact points, penetration depth or normals.
//!
//! # Examples
//! ```
//! use overlap2d::{Circle, Point};
//!
//! let a = Circle::with_radius(Point { x: 0.0, y: 0.0 }, 5.0);
//! let b = Circle::with_radius(Point { x: 8.0, y: 0.0 }, 4.0);
//! assert!(a.intersects(&b).unwrap());
//! ```

#![deny(
    rust_2018_idioms,
    missing_debug_implementations,
    missing_docs,
    clippy::doc_markdown,
    clippy::unimplemented
)]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub use self::axis_aligned_rect::*;
pub use self::circle::*;
pub use self::error::*;
pub use self::intersects::*;
pub use self::point::*;
pub use self::rect::*;
pub use self::vector::*;

mod axis_aligned_rect;
mod circle;
mod error;
mod intersects;
mod point;
mod rect;
mod vector;
