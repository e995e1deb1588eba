//! Compact, editable glyph outlines.
//!
//! A [`PackedPath`] stores every point of every contour in one flat
//! coordinate buffer with a parallel list of [point types](PointType) and a
//! small descriptor per contour. This layout keeps outlines cheap to copy and
//! makes interpolation a matter of itemwise arithmetic on the coordinates.
//!
//! Paths can be edited point by point or contour by contour, drawn to any
//! [`Pen`], and built with the pen methods themselves:
//!
//! ```
//! use packed_outline::{pens::SvgPen, PackedPath, Pen, Point};
//!
//! let mut path = PackedPath::new();
//! path.move_to(0.0, 0.0);
//! path.line_to(0.0, 100.0);
//! path.quad_curve_to(&[Point::new(100.0, 100.0), Point::new(100.0, 0.0)]);
//! path.close();
//!
//! let mut pen = SvgPen::new();
//! path.draw(&mut pen);
//! assert_eq!(pen.to_string(), "M0,0 L0,100 Q100,100 100,0 L0,0 Z");
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

/// Expose the geometry vocabulary crate.
pub extern crate outline_types as types;

pub mod pens;
pub mod segments;

mod contour;
mod coords;
mod draw;
mod error;
mod hull;
mod index;
mod integrity;
mod iter;
mod path;
mod point_type;

#[cfg(test)]
mod testing;


pub use contour::{pack_contour, Contour, ContourInfo, OutlinePoint, UnpackedContour};
pub use coords::CoordinateBuffer;
pub use error::{LengthMismatch, PathError};
pub use hull::convex_hull;
pub use index::normalize_index;
pub use integrity::{IntegrityReport, IntegrityViolation};
pub use iter::{Contours, Handles, Points, PointsInRect, UnpackedContours};
pub use path::{OpenContourEnd, PackedPath, RawContourInfo, RawPath};
pub use point_type::{PointKind, PointType};

pub use types::{BoundingBox, NullPen, Pen, PenCommand, Point, Transform};
