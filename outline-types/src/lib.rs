//! Geometry vocabulary for glyph outlines.
//!
//! These are the small value types that outline producers and consumers
//! exchange: points, bounding boxes, affine transforms and the [`Pen`]
//! drawing interface.

#![deny(rustdoc::broken_intra_doc_links)]

mod bbox;
mod pen;
mod point;
mod transform;


pub use bbox::BoundingBox;
pub use pen::{NullPen, Pen, PenCommand};
pub use point::Point;
pub use transform::Transform;
