//! Iterators over the points and contours of a packed path.
//!
//! All iterators borrow the path and can be restarted by requesting a new
//! one; none of them buffer the whole path.

use core::ops::Range;

use crate::{
    contour::{Contour, OutlinePoint, UnpackedContour},
    path::PackedPath,
    BoundingBox, Point,
};

impl PackedPath {
    /// Returns an iterator over all points in order.
    pub fn iter_points(&self) -> Points<'_> {
        Points {
            path: self,
            indices: 0..self.num_points(),
        }
    }

    /// Returns an iterator over all contours in packed form.
    pub fn iter_contours(&self) -> Contours<'_> {
        Contours {
            path: self,
            indices: 0..self.num_contours(),
        }
    }

    /// Returns an iterator over all contours as lists of points.
    pub fn iter_unpacked_contours(&self) -> UnpackedContours<'_> {
        UnpackedContours(self.iter_contours())
    }

    /// Returns an iterator over the handles of the path.
    ///
    /// A handle is a pair of neighboring points where one is on-curve and
    /// the other off-curve, or where the two off-curve points have different
    /// curve classes. Closed contours include the pair formed by the last and
    /// first points.
    pub fn iter_handles(&self) -> Handles<'_> {
        Handles {
            path: self,
            contour_index: 0,
            prev: 0,
            next: 0,
            end: 0,
        }
    }

    /// Returns an iterator over the points inside `rect`, with their absolute
    /// indices.
    ///
    /// Points on the boundary of the rectangle are included.
    pub fn iter_points_in_rect(&self, rect: BoundingBox<f64>) -> PointsInRect<'_> {
        PointsInRect {
            points: self.iter_points(),
            next_index: 0,
            rect,
        }
    }
}

/// Iterator over the points of a path.
///
/// See [`PackedPath::iter_points`].
#[derive(Clone)]
pub struct Points<'a> {
    path: &'a PackedPath,
    indices: Range<usize>,
}

impl Iterator for Points<'_> {
    type Item = OutlinePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        self.path.point(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for Points<'_> {}

/// Iterator over the contours of a path.
///
/// See [`PackedPath::iter_contours`].
#[derive(Clone)]
pub struct Contours<'a> {
    path: &'a PackedPath,
    indices: Range<usize>,
}

impl Iterator for Contours<'_> {
    type Item = Contour;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        Some(self.path.contour_at(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for Contours<'_> {}

/// Iterator over the contours of a path in unpacked form.
///
/// See [`PackedPath::iter_unpacked_contours`].
#[derive(Clone)]
pub struct UnpackedContours<'a>(Contours<'a>);

impl Iterator for UnpackedContours<'_> {
    type Item = UnpackedContour;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|contour| contour.unpack())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for UnpackedContours<'_> {}

/// Iterator over the handles of a path.
///
/// See [`PackedPath::iter_handles`].
#[derive(Clone)]
pub struct Handles<'a> {
    path: &'a PackedPath,
    contour_index: usize,
    prev: usize,
    next: usize,
    end: usize,
}

impl Iterator for Handles<'_> {
    type Item = (Point<f64>, Point<f64>);

    fn next(&mut self) -> Option<Self::Item> {
        let types = self.path.point_types();
        loop {
            if self.next >= self.end {
                let info = self.path.contour_info().get(self.contour_index)?;
                let range = self.path.contour_range(self.contour_index);
                self.contour_index += 1;
                self.end = range.end;
                if range.is_empty() {
                    self.next = range.end;
                } else if info.is_closed {
                    self.prev = range.end - 1;
                    self.next = range.start;
                } else {
                    self.prev = range.start;
                    self.next = range.start + 1;
                }
                continue;
            }
            let (prev, next) = (self.prev, self.next);
            self.prev = next;
            self.next += 1;
            if !types.get(prev)?.same_class(*types.get(next)?) {
                return Some((
                    self.path.point_position(prev)?,
                    self.path.point_position(next)?,
                ));
            }
        }
    }
}

/// Iterator over the points of a path inside a rectangle.
///
/// See [`PackedPath::iter_points_in_rect`].
#[derive(Clone)]
pub struct PointsInRect<'a> {
    points: Points<'a>,
    next_index: usize,
    rect: BoundingBox<f64>,
}

impl Iterator for PointsInRect<'_> {
    type Item = (usize, OutlinePoint);

    fn next(&mut self) -> Option<Self::Item> {
        for point in self.points.by_ref() {
            let index = self.next_index;
            self.next_index += 1;
            if self.rect.contains(point.position()) {
                return Some((index, point));
            }
        }
        None
    }
}
