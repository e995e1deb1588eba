//! Decomposition of contours into segments.
//!
//! A segment runs from one on-curve point to the next and owns the off-curve
//! points in between. Its kind is taken from the last off-curve point in the
//! run, so a run mixing quadratic and cubic points is treated as a single
//! segment of the later kind.
//!
//! Contours without any on-curve point are "quad blobs": closed splines
//! whose start point is implied halfway between the last and first points.

use crate::{
    error::PathError,
    path::PackedPath,
    point_type::{PointKind, PointType},
    Pen, PenCommand, Point,
};

/// The curve class of a segment.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SegmentKind {
    Line,
    Quad,
    Cubic,
    /// A contour made only of off-curve points.
    QuadBlob,
}

/// A segment described by absolute point indices.
///
/// For every kind except [`SegmentKind::QuadBlob`] the indices start and end
/// with on-curve points. The closing segment of a closed contour ends with
/// the index of the first on-curve point.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SegmentPointIndices {
    pub kind: SegmentKind,
    pub point_indices: Vec<usize>,
}

impl PackedPath {
    /// Splits a contour into segments of absolute point indices.
    pub fn contour_segment_point_indices(
        &self,
        contour_index: isize,
    ) -> Result<Vec<SegmentPointIndices>, PathError> {
        let contour_index =
            self.resolve_contour_index(contour_index, false, "contour_segment_point_indices")?;
        let range = self.contour_range(contour_index);
        let types = self.point_types().get(range.clone()).unwrap_or_default();
        let is_closed = self.contour_info()[contour_index].is_closed;
        Ok(segment_point_indices(types, is_closed)
            .map(|segment| SegmentPointIndices {
                kind: segment.kind,
                point_indices: segment
                    .point_indices
                    .into_iter()
                    .map(|i| i + range.start)
                    .collect(),
            })
            .collect())
    }
}

/// Splits a contour, given by its point types, into segments of
/// contour-relative point indices.
pub fn segment_point_indices(
    point_types: &[PointType],
    is_closed: bool,
) -> impl Iterator<Item = SegmentPointIndices> + '_ {
    let num_points = point_types.len();
    let first_on_curve = point_types.iter().position(|ty| ty.is_on_curve());
    let blob = match first_on_curve {
        None if num_points > 0 => Some(SegmentPointIndices {
            kind: SegmentKind::QuadBlob,
            point_indices: (0..num_points).collect(),
        }),
        _ => None,
    };
    let walk = first_on_curve.map(|first| SegmentWalk::new(point_types, first, is_closed));
    blob.into_iter().chain(walk.into_iter().flatten())
}

/// Steps through a contour from its first on-curve point, emitting a segment
/// at every subsequent on-curve point.
struct SegmentWalk<'a> {
    point_types: &'a [PointType],
    first_on_curve: usize,
    last_step: usize,
    step: usize,
    is_closed: bool,
    current: Vec<usize>,
    kind: SegmentKind,
}

impl<'a> SegmentWalk<'a> {
    fn new(point_types: &'a [PointType], first_on_curve: usize, is_closed: bool) -> Self {
        let num_points = point_types.len();
        let last_step = if is_closed {
            num_points
        } else {
            num_points - 1 - first_on_curve
        };
        Self {
            point_types,
            first_on_curve,
            last_step,
            step: 1,
            is_closed,
            current: vec![first_on_curve],
            kind: SegmentKind::Line,
        }
    }
}

impl Iterator for SegmentWalk<'_> {
    type Item = SegmentPointIndices;

    fn next(&mut self) -> Option<Self::Item> {
        while self.step <= self.last_step {
            let mut index = self.first_on_curve + self.step;
            if self.is_closed {
                index %= self.point_types.len();
            }
            self.step += 1;
            self.current.push(index);
            match self.point_types[index].kind() {
                PointKind::OnCurve => {
                    let kind = core::mem::replace(&mut self.kind, SegmentKind::Line);
                    let point_indices = core::mem::replace(&mut self.current, vec![index]);
                    return Some(SegmentPointIndices {
                        kind,
                        point_indices,
                    });
                }
                PointKind::OffCurveQuad => self.kind = SegmentKind::Quad,
                PointKind::OffCurveCubic => self.kind = SegmentKind::Cubic,
            }
        }
        None
    }
}

/// A segment with resolved point positions.
///
/// The points include both on-curve ends.
#[derive(Clone, PartialEq, Debug)]
pub struct Segment {
    pub kind: SegmentKind,
    pub points: Vec<Point<f64>>,
}

impl Segment {
    /// Emits the drawing commands for this segment, excluding the initial
    /// move to its start point.
    ///
    /// Quadratic runs with several off-curve points are split at implied
    /// on-curve points halfway between neighboring control points. A cubic
    /// run with one control point is drawn as a quadratic curve and one with
    /// more than two uses only its first and last control points.
    pub fn draw(&self, pen: &mut impl Pen) {
        let Some((&end, rest)) = self.points.split_last() else {
            return;
        };
        let off_curves = rest.get(1..).unwrap_or_default();
        match (self.kind, off_curves) {
            (_, []) | (SegmentKind::Line, _) => pen.line_to(end.x, end.y),
            (SegmentKind::Cubic, [c0]) => pen.quad_to(c0.x, c0.y, end.x, end.y),
            (SegmentKind::Cubic, [c0, .., c1]) => pen.curve_to(c0.x, c0.y, c1.x, c1.y, end.x, end.y),
            (SegmentKind::Quad | SegmentKind::QuadBlob, _) => {
                for pair in off_curves.windows(2) {
                    let implied = pair[0].midpoint(pair[1]);
                    pen.quad_to(pair[0].x, pair[0].y, implied.x, implied.y);
                }
                if let Some(last) = off_curves.last() {
                    pen.quad_to(last.x, last.y, end.x, end.y);
                }
            }
        }
    }

    /// Returns the drawing commands for this segment.
    pub fn to_commands(&self) -> Vec<PenCommand> {
        let mut commands = vec![];
        self.draw(&mut commands);
        commands
    }
}

/// Geometric decomposition of a single contour.
///
/// This resolves quad blobs to an ordinary closed contour that starts at an
/// implied on-curve point.
#[derive(Clone, Debug)]
pub struct ContourSegments<'a> {
    points: &'a [Point<f64>],
    point_types: &'a [PointType],
    implied_start: Option<Point<f64>>,
    is_closed: bool,
}

impl<'a> ContourSegments<'a> {
    /// Creates a decomposition from parallel slices of positions and types.
    ///
    /// Extra items in the longer slice are ignored.
    pub fn new(points: &'a [Point<f64>], point_types: &'a [PointType], is_closed: bool) -> Self {
        let len = points.len().min(point_types.len());
        let (points, point_types) = (&points[..len], &point_types[..len]);
        let implied_start = match (points.first(), points.last()) {
            (Some(first), Some(last)) if !point_types.iter().any(|ty| ty.is_on_curve()) => {
                Some(last.midpoint(*first))
            }
            _ => None,
        };
        Self {
            points,
            point_types,
            implied_start,
            is_closed: is_closed || implied_start.is_some(),
        }
    }

    /// Returns the point the contour starts at, or `None` for an empty
    /// contour.
    pub fn start(&self) -> Option<Point<f64>> {
        self.implied_start.or_else(|| {
            let first = self.point_types.iter().position(|ty| ty.is_on_curve())?;
            self.points.get(first).copied()
        })
    }

    /// Returns true if the contour is drawn closed.
    ///
    /// Quad blobs are always closed.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Returns an iterator over the segments of the contour.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + 'a {
        let points = self.points;
        let (blob, walk) = match self.implied_start {
            Some(start) => {
                let kind = match self.point_types.last().map(|ty| ty.kind()) {
                    Some(PointKind::OffCurveCubic) => SegmentKind::Cubic,
                    _ => SegmentKind::Quad,
                };
                let segment = Segment {
                    kind,
                    points: core::iter::once(start)
                        .chain(points.iter().copied())
                        .chain(core::iter::once(start))
                        .collect(),
                };
                (Some(segment), None)
            }
            None => (None, Some(segment_point_indices(self.point_types, self.is_closed))),
        };
        blob.into_iter()
            .chain(walk.into_iter().flatten().map(move |segment| Segment {
                kind: segment.kind,
                points: segment
                    .point_indices
                    .into_iter()
                    .map(|i| points[i])
                    .collect(),
            }))
    }

    /// Draws the contour: a move to the start point, one call per segment and
    /// a close if the contour is closed. Empty contours draw nothing.
    pub fn draw(&self, pen: &mut impl Pen) {
        let Some(start) = self.start() else {
            return;
        };
        pen.move_to(start.x, start.y);
        for segment in self.segments() {
            segment.draw(pen);
        }
        if self.is_closed {
            pen.close();
        }
    }
}
