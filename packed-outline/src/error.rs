//! Error types associated with packed paths.

use core::fmt;

use crate::integrity::IntegrityReport;

/// Two numeric sequences that were combined itemwise had different lengths.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct LengthMismatch {
    /// Length of the receiver.
    pub left: usize,
    /// Length of the other operand.
    pub right: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "arrays have different lengths: {} vs. {}",
            self.left, self.right
        )
    }
}

impl std::error::Error for LengthMismatch {}

/// Errors that can occur when indexing, editing or combining a packed path.
///
/// The bounds variants carry the index as it was passed in by the caller
/// (before negative index normalization) and the name of the operation that
/// rejected it.
///
/// The structural variants are only produced when importing raw data.
#[derive(Clone, PartialEq, Debug)]
pub enum PathError {
    /// An absolute point index was past the last point.
    PointIndexOutOfBounds { index: usize, op: &'static str },
    /// A contour index was out of range after normalization.
    ContourIndexOutOfBounds { index: isize, op: &'static str },
    /// A contour-relative point index was out of range after normalization.
    ContourPointIndexOutOfBounds { index: isize, op: &'static str },
    /// Two paths differ in contour structure or point classes and can not be
    /// combined itemwise.
    Incompatible,
    /// Itemwise arithmetic on coordinate sequences of different lengths.
    LengthMismatch(LengthMismatch),
    /// A packed point type value was not one of the known point types.
    IllegalPointType { index: usize, bits: u8 },
    /// Raw coordinate data does not hold exactly two values per point.
    MalformedCoordinates {
        num_coordinates: usize,
        num_points: usize,
    },
    /// A raw contour descriptor has an end point below `-1`.
    InvalidEndPoint { contour_index: usize, end_point: isize },
    /// Raw contour descriptors do not partition the points.
    InvalidStructure(IntegrityReport),
}

impl PathError {
    /// Returns the name of the operation that raised a bounds error.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::PointIndexOutOfBounds { op, .. }
            | Self::ContourIndexOutOfBounds { op, .. }
            | Self::ContourPointIndexOutOfBounds { op, .. } => Some(op),
            _ => None,
        }
    }

    /// Returns true for the index out of bounds family of errors.
    pub fn is_out_of_bounds(&self) -> bool {
        self.operation().is_some()
    }
}

impl From<LengthMismatch> for PathError {
    fn from(value: LengthMismatch) -> Self {
        Self::LengthMismatch(value)
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::PointIndexOutOfBounds { index, .. } => {
                write!(f, "pointIndex out of bounds: {index}")
            }
            Self::ContourIndexOutOfBounds { index, .. } => {
                write!(f, "contourIndex out of bounds: {index}")
            }
            Self::ContourPointIndexOutOfBounds { index, .. } => {
                write!(f, "contourPointIndex out of bounds: {index}")
            }
            Self::Incompatible => write!(f, "paths are not compatible"),
            Self::LengthMismatch(e) => write!(f, "{e}"),
            Self::IllegalPointType { index, bits } => {
                write!(f, "illegal point type {bits} at point {index}")
            }
            Self::MalformedCoordinates {
                num_coordinates,
                num_points,
            } => write!(
                f,
                "expected {} coordinates for {num_points} points, found {num_coordinates}",
                num_points * 2
            ),
            Self::InvalidEndPoint {
                contour_index,
                end_point,
            } => write!(f, "invalid end point {end_point} for contour {contour_index}"),
            Self::InvalidStructure(report) => write!(f, "{report}"),
        }
    }
}

impl std::error::Error for PathError {}
