//! Consistency checks for packed paths.
//!
//! Every editing operation keeps the coordinates, point types and contour
//! descriptors of a path in sync. Paths assembled with
//! [`PackedPath::from_parts`] skip that bookkeeping, so these checks are
//! the way to find out whether such a path is usable.

use std::fmt;

use crate::path::PackedPath;

/// A broken structural invariant of a packed path.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum IntegrityViolation {
    /// The coordinate buffer does not hold exactly two values per point.
    CoordinateCount {
        num_points: usize,
        num_coordinates: usize,
    },
    /// A contour ends before the previous contour does.
    ContourEndsBeforeStart {
        contour_index: usize,
        end: usize,
        start: usize,
    },
    /// The last contour does not end at the last point.
    PointsNotCovered { covered: usize, num_points: usize },
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::CoordinateCount {
                num_points,
                num_coordinates,
            } => write!(
                f,
                "expected {} coordinates for {num_points} points, found {num_coordinates}",
                num_points * 2
            ),
            Self::ContourEndsBeforeStart {
                contour_index,
                end,
                start,
            } => write!(
                f,
                "contour {contour_index} ends at point {} before its start point {start}",
                *end as isize - 1
            ),
            Self::PointsNotCovered {
                covered,
                num_points,
            } => write!(
                f,
                "contours cover {covered} points but the path has {num_points}"
            ),
        }
    }
}

/// All integrity violations found in a path.
///
/// Never empty when returned from [`PackedPath::check_integrity`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IntegrityReport(Vec<IntegrityViolation>);

impl IntegrityReport {
    /// Returns the violations in the order they were found.
    pub fn violations(&self) -> &[IntegrityViolation] {
        &self.0
    }
}

impl fmt::Display for IntegrityReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let [violation] = self.0.as_slice() {
            return write!(f, "inconsistent path: {violation}");
        }
        write!(f, "inconsistent path, {} problems:", self.0.len())?;
        for violation in &self.0 {
            write!(f, "\n  {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for IntegrityReport {}

impl PackedPath {
    /// Returns an iterator over every broken invariant of this path.
    ///
    /// The checks are, in order: two coordinates per point, non-decreasing
    /// contour ends, and a last contour that ends at the last point. A path
    /// without contours must have no points.
    pub fn integrity_violations(&self) -> impl Iterator<Item = IntegrityViolation> + '_ {
        let num_points = self.num_points();
        let num_coordinates = self.coordinates().len();
        let coordinate_count = (num_coordinates != num_points * 2).then_some(
            IntegrityViolation::CoordinateCount {
                num_points,
                num_coordinates,
            },
        );
        let mut start = 0;
        let contour_order = self
            .contour_info()
            .iter()
            .enumerate()
            .filter_map(move |(contour_index, info)| {
                let prev_end = core::mem::replace(&mut start, info.end());
                (info.end() < prev_end).then_some(IntegrityViolation::ContourEndsBeforeStart {
                    contour_index,
                    end: info.end(),
                    start: prev_end,
                })
            });
        let covered = self.contour_info().last().map_or(0, |info| info.end());
        let coverage = (covered != num_points).then_some(IntegrityViolation::PointsNotCovered {
            covered,
            num_points,
        });
        coordinate_count
            .into_iter()
            .chain(contour_order)
            .chain(coverage)
    }

    /// Checks that the contour descriptors, point types and coordinates are
    /// consistent with each other.
    ///
    /// Point types are valid by construction; the smooth flag can not be set
    /// on an off-curve point.
    pub fn check_integrity(&self) -> Result<(), IntegrityReport> {
        let violations: Vec<_> = self.integrity_violations().collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(IntegrityReport(violations))
        }
    }

    pub(crate) fn debug_assert_integrity(&self, op: &str) {
        if cfg!(debug_assertions) {
            if let Err(report) = self.check_integrity() {
                panic!("{op} left an {report}");
            }
        }
    }
}
