//! The packed path.

use core::ops::Range;

use crate::{
    contour::{pack_contour, Contour, ContourInfo, OutlinePoint, UnpackedContour},
    coords::CoordinateBuffer,
    error::PathError,
    hull,
    index::normalize_index,
    point_type::PointType,
    BoundingBox, Pen, Point, Transform,
};

/// A glyph outline stored as three flat, parallel sequences.
///
/// All points of all contours live in one coordinate buffer (`x, y` pairs)
/// with one [`PointType`] per point. Contours are contiguous runs of points
/// described by a [`ContourInfo`] that records where each run ends.
///
/// The fields are only modified through the editing methods, which keep the
/// sequences consistent:
///
/// * there are exactly two coordinates per point type,
/// * contour ends are non-decreasing,
/// * the last contour ends at the last point.
///
/// Points are addressed either by an absolute index into the path or by a
/// contour index plus a contour-relative index. The latter two may be
/// negative to count from the end.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPath", into = "RawPath"))]
pub struct PackedPath {
    coordinates: CoordinateBuffer,
    point_types: Vec<PointType>,
    contour_info: Vec<ContourInfo>,
}

/// Which end of an open contour a point sits on.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(i8)]
pub enum OpenContourEnd {
    Start = -1,
    End = 1,
}

impl PackedPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from its raw parts.
    ///
    /// No consistency checks are performed; use
    /// [`check_integrity`](Self::check_integrity) on paths built from
    /// untrusted parts. Editing an inconsistent path may panic.
    pub fn from_parts(
        coordinates: impl Into<CoordinateBuffer>,
        point_types: Vec<PointType>,
        contour_info: Vec<ContourInfo>,
    ) -> Self {
        Self {
            coordinates: coordinates.into(),
            point_types,
            contour_info,
        }
    }

    /// Consumes the path, returning its raw parts.
    pub fn into_parts(self) -> (CoordinateBuffer, Vec<PointType>, Vec<ContourInfo>) {
        (self.coordinates, self.point_types, self.contour_info)
    }

    /// Builds a path from a sequence of unpacked contours.
    pub fn from_unpacked_contours<'a>(
        contours: impl IntoIterator<Item = &'a UnpackedContour>,
    ) -> Self {
        let mut path = Self::new();
        for contour in contours {
            let index = path.num_contours();
            path.insert_contour_at(index, &pack_contour(contour));
        }
        path
    }

    /// Returns the flat coordinate buffer.
    pub fn coordinates(&self) -> &CoordinateBuffer {
        &self.coordinates
    }

    /// Returns the point types, one per point.
    pub fn point_types(&self) -> &[PointType] {
        &self.point_types
    }

    /// Returns the contour descriptors.
    pub fn contour_info(&self) -> &[ContourInfo] {
        &self.contour_info
    }

    /// Returns the number of contours.
    pub fn num_contours(&self) -> usize {
        self.contour_info.len()
    }

    /// Returns the total number of points.
    pub fn num_points(&self) -> usize {
        self.point_types.len()
    }

    /// Returns true if the path has no contours.
    pub fn is_empty(&self) -> bool {
        self.contour_info.is_empty()
    }

    /// Returns the number of points in the given contour.
    pub fn num_points_of_contour(&self, contour_index: isize) -> Result<usize, PathError> {
        let contour_index =
            self.resolve_contour_index(contour_index, false, "num_points_of_contour")?;
        Ok(self.contour_range(contour_index).len())
    }

    /// Resolves a possibly negative contour index.
    ///
    /// With `for_insert` the index one past the last contour is accepted.
    pub fn normalize_contour_index(
        &self,
        contour_index: isize,
        for_insert: bool,
    ) -> Result<usize, PathError> {
        self.resolve_contour_index(contour_index, for_insert, "normalize_contour_index")
    }

    /// Converts a contour index and a contour-relative point index to an
    /// absolute point index.
    ///
    /// Both indices may be negative. With `for_insert` the position one past
    /// the last point of the contour is accepted.
    pub fn absolute_point_index(
        &self,
        contour_index: isize,
        contour_point_index: isize,
        for_insert: bool,
    ) -> Result<usize, PathError> {
        self.resolve_point_index(
            contour_index,
            contour_point_index,
            for_insert,
            "absolute_point_index",
        )
        .map(|(_, point_index)| point_index)
    }

    /// Returns the index of the contour containing the given point, or `None`
    /// if the point is past the end of the last contour.
    pub fn contour_index(&self, point_index: usize) -> Option<usize> {
        let contour_index = self
            .contour_info
            .partition_point(|info| info.end() <= point_index);
        (contour_index < self.contour_info.len()).then_some(contour_index)
    }

    /// Returns the contour index and the contour-relative index of the given
    /// point.
    pub fn contour_and_point_index(&self, point_index: usize) -> Result<(usize, usize), PathError> {
        self.locate_point(point_index, "contour_and_point_index")
    }

    /// Returns the point at the given absolute index.
    pub fn point(&self, point_index: usize) -> Option<OutlinePoint> {
        let point_type = *self.point_types.get(point_index)?;
        Some(OutlinePoint::from_parts(
            self.coordinates.point(point_index)?,
            point_type,
        ))
    }

    /// Returns the position of the point at the given absolute index.
    pub fn point_position(&self, point_index: usize) -> Option<Point<f64>> {
        self.coordinates.point(point_index)
    }

    /// Overwrites the position and type of a point.
    pub fn set_point(&mut self, point_index: usize, point: &OutlinePoint) -> Result<(), PathError> {
        self.check_point_index(point_index, "set_point")?;
        self.coordinates.set_point(point_index, point.position());
        self.point_types[point_index] = point.point_type();
        Ok(())
    }

    /// Overwrites the position of a point.
    pub fn set_point_position(
        &mut self,
        point_index: usize,
        position: Point<f64>,
    ) -> Result<(), PathError> {
        self.check_point_index(point_index, "set_point_position")?;
        self.coordinates.set_point(point_index, position);
        Ok(())
    }

    /// Overwrites the type of a point.
    pub fn set_point_type(
        &mut self,
        point_index: usize,
        point_type: PointType,
    ) -> Result<(), PathError> {
        self.check_point_index(point_index, "set_point_type")?;
        self.point_types[point_index] = point_type;
        Ok(())
    }

    /// Returns a point addressed by contour and contour-relative index.
    pub fn contour_point(
        &self,
        contour_index: isize,
        contour_point_index: isize,
    ) -> Result<OutlinePoint, PathError> {
        let op = "contour_point";
        let (_, point_index) =
            self.resolve_point_index(contour_index, contour_point_index, false, op)?;
        self.point(point_index).ok_or(PathError::PointIndexOutOfBounds {
            index: point_index,
            op,
        })
    }

    /// Overwrites a point addressed by contour and contour-relative index.
    pub fn set_contour_point(
        &mut self,
        contour_index: isize,
        contour_point_index: isize,
        point: &OutlinePoint,
    ) -> Result<(), PathError> {
        let (_, point_index) = self.resolve_point_index(
            contour_index,
            contour_point_index,
            false,
            "set_contour_point",
        )?;
        self.set_point(point_index, point)
    }

    /// Inserts a point into a contour before the given contour-relative
    /// index.
    ///
    /// A contour-relative index equal to the number of points in the contour
    /// appends.
    pub fn insert_point(
        &mut self,
        contour_index: isize,
        contour_point_index: isize,
        point: &OutlinePoint,
    ) -> Result<(), PathError> {
        let (contour_index, point_index) =
            self.resolve_point_index(contour_index, contour_point_index, true, "insert_point")?;
        self.insert_point_at(contour_index, point_index, point);
        self.debug_assert_integrity("insert_point");
        Ok(())
    }

    /// Appends a point to the end of a contour.
    pub fn append_point(&mut self, contour_index: isize, point: &OutlinePoint) -> Result<(), PathError> {
        let contour_index = self.resolve_contour_index(contour_index, false, "append_point")?;
        let point_index = self.contour_range(contour_index).end;
        self.insert_point_at(contour_index, point_index, point);
        self.debug_assert_integrity("append_point");
        Ok(())
    }

    /// Removes a point from a contour.
    ///
    /// Deleting the last point leaves an empty contour in place.
    pub fn delete_point(
        &mut self,
        contour_index: isize,
        contour_point_index: isize,
    ) -> Result<(), PathError> {
        let (contour_index, point_index) =
            self.resolve_point_index(contour_index, contour_point_index, false, "delete_point")?;
        self.coordinates
            .splice(point_index * 2..point_index * 2 + 2, []);
        self.point_types.remove(point_index);
        self.move_end_points(contour_index, -1);
        self.debug_assert_integrity("delete_point");
        Ok(())
    }

    /// Returns a copy of a contour in packed form.
    pub fn contour(&self, contour_index: isize) -> Result<Contour, PathError> {
        let contour_index = self.resolve_contour_index(contour_index, false, "contour")?;
        Ok(self.contour_at(contour_index))
    }

    /// Replaces a contour, which may change its number of points.
    pub fn set_contour(&mut self, contour_index: isize, contour: &Contour) -> Result<(), PathError> {
        check_contour(contour)?;
        let contour_index = self.resolve_contour_index(contour_index, false, "set_contour")?;
        self.set_contour_at(contour_index, contour);
        self.debug_assert_integrity("set_contour");
        Ok(())
    }

    /// Inserts a contour before the given contour index.
    ///
    /// An index equal to the number of contours appends.
    pub fn insert_contour(&mut self, contour_index: isize, contour: &Contour) -> Result<(), PathError> {
        check_contour(contour)?;
        let contour_index = self.resolve_contour_index(contour_index, true, "insert_contour")?;
        self.insert_contour_at(contour_index, contour);
        self.debug_assert_integrity("insert_contour");
        Ok(())
    }

    /// Appends a contour.
    pub fn append_contour(&mut self, contour: &Contour) -> Result<(), PathError> {
        check_contour(contour)?;
        self.insert_contour_at(self.num_contours(), contour);
        self.debug_assert_integrity("append_contour");
        Ok(())
    }

    /// Removes a contour and all of its points.
    pub fn delete_contour(&mut self, contour_index: isize) -> Result<(), PathError> {
        let contour_index = self.resolve_contour_index(contour_index, false, "delete_contour")?;
        let range = self.contour_range(contour_index);
        let num_points = range.len();
        self.coordinates.splice(range.start * 2..range.end * 2, []);
        self.point_types.drain(range);
        self.contour_info.remove(contour_index);
        self.move_end_points(contour_index, -(num_points as isize));
        log::trace!("deleted contour {contour_index} with {num_points} points");
        self.debug_assert_integrity("delete_contour");
        Ok(())
    }

    /// Removes the last `n` contours, or every contour if there are fewer.
    pub fn delete_n_trailing_contours(&mut self, n: usize) {
        let num_contours = self.num_contours().saturating_sub(n);
        let num_points = self.contour_start(num_contours);
        self.coordinates.truncate(num_points * 2);
        self.point_types.truncate(num_points);
        self.contour_info.truncate(num_contours);
        log::trace!("truncated path to {num_contours} contours, {num_points} points");
        self.debug_assert_integrity("delete_n_trailing_contours");
    }

    /// Returns a contour as a list of points.
    pub fn unpacked_contour(&self, contour_index: isize) -> Result<UnpackedContour, PathError> {
        let contour_index = self.resolve_contour_index(contour_index, false, "unpacked_contour")?;
        Ok(self.contour_at(contour_index).unpack())
    }

    /// Replaces a contour with the given list of points.
    pub fn set_unpacked_contour(
        &mut self,
        contour_index: isize,
        contour: &UnpackedContour,
    ) -> Result<(), PathError> {
        let contour_index =
            self.resolve_contour_index(contour_index, false, "set_unpacked_contour")?;
        self.set_contour_at(contour_index, &pack_contour(contour));
        self.debug_assert_integrity("set_unpacked_contour");
        Ok(())
    }

    /// Inserts a contour given as a list of points.
    pub fn insert_unpacked_contour(
        &mut self,
        contour_index: isize,
        contour: &UnpackedContour,
    ) -> Result<(), PathError> {
        let contour_index =
            self.resolve_contour_index(contour_index, true, "insert_unpacked_contour")?;
        self.insert_contour_at(contour_index, &pack_contour(contour));
        self.debug_assert_integrity("insert_unpacked_contour");
        Ok(())
    }

    /// Appends a contour given as a list of points.
    pub fn append_unpacked_contour(&mut self, contour: &UnpackedContour) {
        self.insert_contour_at(self.num_contours(), &pack_contour(contour));
        self.debug_assert_integrity("append_unpacked_contour");
    }

    /// Returns all contours as lists of points.
    pub fn unpacked_contours(&self) -> Vec<UnpackedContour> {
        self.iter_unpacked_contours().collect()
    }

    /// Returns the bounding box of all points, including off-curve points.
    ///
    /// Returns `None` for a path without points.
    pub fn control_bounds(&self) -> Option<BoundingBox<f64>> {
        BoundingBox::from_points(self.positions(0..self.num_points()))
    }

    /// Returns the bounding box of the points of a single contour.
    pub fn control_bounds_for_contour(
        &self,
        contour_index: isize,
    ) -> Result<Option<BoundingBox<f64>>, PathError> {
        let contour_index =
            self.resolve_contour_index(contour_index, false, "control_bounds_for_contour")?;
        Ok(BoundingBox::from_points(
            self.positions(self.contour_range(contour_index)),
        ))
    }

    /// Returns the convex hull of all points in counter-clockwise order, or
    /// `None` for a path without points.
    pub fn convex_hull(&self) -> Option<Vec<Point<f64>>> {
        let points: Vec<_> = self.positions(0..self.num_points()).collect();
        (!points.is_empty()).then(|| hull::convex_hull(points))
    }

    /// Reports whether a point is the first or last point of an open contour.
    ///
    /// Points of closed contours and interior points return `None`.
    pub fn is_start_or_end_point(
        &self,
        point_index: usize,
    ) -> Result<Option<OpenContourEnd>, PathError> {
        let (contour_index, contour_point_index) =
            self.locate_point(point_index, "is_start_or_end_point")?;
        let info = self.contour_info[contour_index];
        Ok(if info.is_closed {
            None
        } else if contour_point_index == 0 {
            Some(OpenContourEnd::Start)
        } else if info.end_point() == Some(point_index) {
            Some(OpenContourEnd::End)
        } else {
            None
        })
    }

    /// Returns the lowest index of a point within `margin` of `point` on both
    /// axes, ignoring the point at `skip`.
    pub fn first_point_index_near_point(
        &self,
        point: Point<f64>,
        margin: f64,
        skip: Option<usize>,
    ) -> Option<usize> {
        self.iter_points_in_rect(BoundingBox::centered(point, margin))
            .map(|(index, _)| index)
            .find(|index| Some(*index) != skip)
    }

    /// Returns true if `other` has the same contour structure and the same
    /// point classes, so the two can be combined itemwise.
    ///
    /// Smooth flags are not compared.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.contour_info == other.contour_info
            && self.point_types.len() == other.point_types.len()
            && self
                .point_types
                .iter()
                .zip(&other.point_types)
                .all(|(a, b)| a.same_class(*b))
    }

    /// Returns an error unless `other` is [compatible](Self::is_compatible).
    pub fn ensure_compatible(&self, other: &Self) -> Result<(), PathError> {
        if self.is_compatible(other) {
            Ok(())
        } else {
            log::debug!(
                "incompatible paths: {} vs. {} contours, {} vs. {} points",
                self.num_contours(),
                other.num_contours(),
                self.num_points(),
                other.num_points()
            );
            Err(PathError::Incompatible)
        }
    }

    /// Returns a new path with the coordinates of `other` added.
    ///
    /// The result has the point types and contours of `self`.
    pub fn add_itemwise(&self, other: &Self) -> Result<Self, PathError> {
        self.ensure_compatible(other)?;
        self.add_coordinates(&other.coordinates)
    }

    /// Returns a new path with the coordinates of `other` subtracted.
    pub fn sub_itemwise(&self, other: &Self) -> Result<Self, PathError> {
        self.ensure_compatible(other)?;
        self.sub_coordinates(&other.coordinates)
    }

    /// Returns a new path with `values` added to the coordinates.
    pub fn add_coordinates(&self, values: &[f64]) -> Result<Self, PathError> {
        Ok(self.with_coordinates(self.coordinates.add_itemwise(values)?))
    }

    /// Returns a new path with `values` subtracted from the coordinates.
    pub fn sub_coordinates(&self, values: &[f64]) -> Result<Self, PathError> {
        Ok(self.with_coordinates(self.coordinates.sub_itemwise(values)?))
    }

    /// Returns a new path with all coordinates multiplied by `scalar`.
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        self.with_coordinates(self.coordinates.mul_scalar(scalar))
    }

    /// Returns a new path with every point mapped through `transform`.
    pub fn transformed(&self, transform: &Transform) -> Self {
        self.transformed_with(|point| transform.transform_point(point))
    }

    /// Returns a new path with every point mapped through `f`.
    pub fn transformed_with(&self, mut f: impl FnMut(Point<f64>) -> Point<f64>) -> Self {
        let coordinates = self
            .positions(0..self.num_points())
            .flat_map(|point| {
                let Point { x, y } = f(point);
                [x, y]
            })
            .collect();
        self.with_coordinates(coordinates)
    }

    /// Returns a new path with the contours of `other` after those of `self`.
    pub fn concat(&self, other: &Self) -> Self {
        let offset = self.num_points();
        let mut result = self.clone();
        result.coordinates.extend(other.coordinates.iter().copied());
        result.point_types.extend_from_slice(&other.point_types);
        result.contour_info.extend(
            other
                .contour_info
                .iter()
                .map(|info| ContourInfo::with_end(info.end() + offset, info.is_closed)),
        );
        result
    }

    /// Appends a quadratic spline ending at the last of `points`.
    ///
    /// All but the last point become quadratic off-curve points; the last is
    /// on-curve.
    pub fn quad_curve_to(&mut self, points: &[Point<f64>]) {
        let Some((last, off_curves)) = points.split_last() else {
            return;
        };
        for point in off_curves {
            self.push_point(*point, PointType::off_curve_quad());
        }
        self.push_point(*last, PointType::on_curve());
    }

    /// Returns the range of absolute point indices of a contour.
    ///
    /// An out of range contour index yields an empty range.
    pub(crate) fn contour_range(&self, contour_index: usize) -> Range<usize> {
        let start = self.contour_start(contour_index);
        let end = self
            .contour_info
            .get(contour_index)
            .map(|info| info.end())
            .unwrap_or(start);
        start..end.max(start)
    }

    /// Returns the points of a contour with their types.
    ///
    /// The two slices have the same length, even for an inconsistent path.
    pub(crate) fn contour_points(&self, contour_index: usize) -> (&[Point<f64>], &[PointType]) {
        let range = self.contour_range(contour_index);
        let points = self
            .coordinates
            .as_points()
            .and_then(|points| points.get(range.clone()))
            .unwrap_or_default();
        let types = self.point_types.get(range).unwrap_or_default();
        let len = points.len().min(types.len());
        (&points[..len], &types[..len])
    }

    pub(crate) fn contour_at(&self, contour_index: usize) -> Contour {
        let range = self.contour_range(contour_index);
        Contour {
            coordinates: self
                .coordinates
                .get(range.start * 2..range.end * 2)
                .unwrap_or_default()
                .to_vec()
                .into(),
            point_types: self.point_types.get(range).unwrap_or_default().to_vec(),
            is_closed: self
                .contour_info
                .get(contour_index)
                .map(|info| info.is_closed)
                .unwrap_or_default(),
        }
    }

    fn contour_start(&self, contour_index: usize) -> usize {
        contour_index
            .checked_sub(1)
            .and_then(|prev| self.contour_info.get(prev))
            .map(|info| info.end())
            .unwrap_or(0)
    }

    fn positions(&self, range: Range<usize>) -> impl Iterator<Item = Point<f64>> + '_ {
        self.coordinates
            .get(range.start * 2..range.end * 2)
            .unwrap_or_default()
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
    }

    pub(crate) fn resolve_contour_index(
        &self,
        contour_index: isize,
        for_insert: bool,
        op: &'static str,
    ) -> Result<usize, PathError> {
        normalize_index(contour_index, self.contour_info.len(), for_insert).ok_or(
            PathError::ContourIndexOutOfBounds {
                index: contour_index,
                op,
            },
        )
    }

    fn resolve_point_index(
        &self,
        contour_index: isize,
        contour_point_index: isize,
        for_insert: bool,
        op: &'static str,
    ) -> Result<(usize, usize), PathError> {
        let contour_index = self.resolve_contour_index(contour_index, false, op)?;
        let range = self.contour_range(contour_index);
        let offset = normalize_index(contour_point_index, range.len(), for_insert).ok_or(
            PathError::ContourPointIndexOutOfBounds {
                index: contour_point_index,
                op,
            },
        )?;
        Ok((contour_index, range.start + offset))
    }

    fn locate_point(&self, point_index: usize, op: &'static str) -> Result<(usize, usize), PathError> {
        let contour_index = self
            .contour_index(point_index)
            .ok_or(PathError::PointIndexOutOfBounds {
                index: point_index,
                op,
            })?;
        Ok((
            contour_index,
            point_index - self.contour_start(contour_index),
        ))
    }

    fn check_point_index(&self, point_index: usize, op: &'static str) -> Result<(), PathError> {
        if point_index < self.num_points() && point_index * 2 + 1 < self.coordinates.len() {
            Ok(())
        } else {
            Err(PathError::PointIndexOutOfBounds {
                index: point_index,
                op,
            })
        }
    }

    fn with_coordinates(&self, coordinates: CoordinateBuffer) -> Self {
        Self {
            coordinates,
            point_types: self.point_types.clone(),
            contour_info: self.contour_info.clone(),
        }
    }

    fn insert_point_at(&mut self, contour_index: usize, point_index: usize, point: &OutlinePoint) {
        self.coordinates
            .splice(point_index * 2..point_index * 2, [point.x, point.y]);
        self.point_types.insert(point_index, point.point_type());
        self.move_end_points(contour_index, 1);
    }

    fn set_contour_at(&mut self, contour_index: usize, contour: &Contour) {
        let range = self.contour_range(contour_index);
        let delta = contour.len() as isize - range.len() as isize;
        self.replace_points(range, contour);
        self.move_end_points(contour_index, delta);
        self.contour_info[contour_index].is_closed = contour.is_closed;
    }

    fn insert_contour_at(&mut self, contour_index: usize, contour: &Contour) {
        let start = self.contour_start(contour_index);
        self.replace_points(start..start, contour);
        self.contour_info
            .insert(contour_index, ContourInfo::with_end(start, contour.is_closed));
        self.move_end_points(contour_index, contour.len() as isize);
    }

    /// Shifts the end of the given contour and all following contours.
    fn move_end_points(&mut self, from_contour_index: usize, delta: isize) {
        if let Some(infos) = self.contour_info.get_mut(from_contour_index..) {
            for info in infos {
                info.shift(delta);
            }
        }
    }

    fn replace_points(&mut self, range: Range<usize>, contour: &Contour) {
        log::trace!(
            "replacing points {}..{} with {} points",
            range.start,
            range.end,
            contour.len()
        );
        self.coordinates.splice(
            range.start * 2..range.end * 2,
            contour.coordinates.iter().copied(),
        );
        self.point_types
            .splice(range, contour.point_types.iter().copied());
    }

    fn push_point(&mut self, point: Point<f64>, point_type: PointType) {
        if self.contour_info.is_empty() {
            log::warn!("pen command with no current contour, starting a new one");
            self.contour_info
                .push(ContourInfo::with_end(self.num_points(), false));
        }
        self.coordinates.push_point(point);
        self.point_types.push(point_type);
        if let Some(info) = self.contour_info.last_mut() {
            info.shift(1);
        }
    }
}

fn check_contour(contour: &Contour) -> Result<(), PathError> {
    if contour.coordinates.len() == contour.point_types.len() * 2 {
        Ok(())
    } else {
        Err(PathError::MalformedCoordinates {
            num_coordinates: contour.coordinates.len(),
            num_points: contour.point_types.len(),
        })
    }
}

/// Builds contours point by point.
///
/// `move_to` starts a new open contour; the other commands append to the
/// last contour.
impl Pen for PackedPath {
    fn move_to(&mut self, x: f64, y: f64) {
        self.contour_info
            .push(ContourInfo::with_end(self.num_points(), false));
        self.push_point(Point::new(x, y), PointType::on_curve());
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push_point(Point::new(x, y), PointType::on_curve());
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        self.quad_curve_to(&[Point::new(cx0, cy0), Point::new(x, y)]);
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.push_point(Point::new(cx0, cy0), PointType::off_curve_cubic());
        self.push_point(Point::new(cx1, cy1), PointType::off_curve_cubic());
        self.push_point(Point::new(x, y), PointType::on_curve());
    }

    fn close(&mut self) {
        match self.contour_info.last_mut() {
            Some(info) => info.is_closed = true,
            None => log::warn!("close with no current contour"),
        }
    }
}

/// Plain-object form of a path.
///
/// Point types are kept as their packed integer values and contours are
/// described by the absolute index of their last point, `-1` for an empty
/// first contour. This is the serialized representation of [`PackedPath`].
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RawPath {
    pub coordinates: Vec<f64>,
    pub point_types: Vec<u8>,
    pub contour_info: Vec<RawContourInfo>,
}

/// Plain-object form of a [`ContourInfo`].
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RawContourInfo {
    pub end_point: isize,
    pub is_closed: bool,
}

impl PackedPath {
    /// Builds a path from its plain-object form, checking every invariant.
    pub fn from_raw(raw: RawPath) -> Result<Self, PathError> {
        let point_types = raw
            .point_types
            .iter()
            .enumerate()
            .map(|(index, bits)| {
                PointType::from_bits(*bits).ok_or(PathError::IllegalPointType { index, bits: *bits })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if raw.coordinates.len() != point_types.len() * 2 {
            return Err(PathError::MalformedCoordinates {
                num_coordinates: raw.coordinates.len(),
                num_points: point_types.len(),
            });
        }
        let contour_info = raw
            .contour_info
            .iter()
            .enumerate()
            .map(|(contour_index, info)| {
                info.end_point
                    .checked_add(1)
                    .and_then(|end| usize::try_from(end).ok())
                    .map(|end| ContourInfo::with_end(end, info.is_closed))
                    .ok_or(PathError::InvalidEndPoint {
                        contour_index,
                        end_point: info.end_point,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let path = Self::from_parts(raw.coordinates, point_types, contour_info);
        path.check_integrity().map_err(PathError::InvalidStructure)?;
        Ok(path)
    }

    /// Returns the plain-object form of this path.
    pub fn to_raw(&self) -> RawPath {
        RawPath {
            coordinates: self.coordinates.to_vec(),
            point_types: self.point_types.iter().map(|ty| ty.to_bits()).collect(),
            contour_info: self
                .contour_info
                .iter()
                .map(|info| RawContourInfo {
                    end_point: info.end() as isize - 1,
                    is_closed: info.is_closed,
                })
                .collect(),
        }
    }
}

impl TryFrom<RawPath> for PackedPath {
    type Error = PathError;

    fn try_from(value: RawPath) -> Result<Self, Self::Error> {
        Self::from_raw(value)
    }
}

impl From<PackedPath> for RawPath {
    fn from(value: PackedPath) -> Self {
        value.to_raw()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        point_type::PointKind,
        testing::{complex_test_path, simple_test_path},
    };

    fn contour_parts(path: &PackedPath, index: isize) -> (Vec<f64>, Vec<u8>, bool) {
        let contour = path.contour(index).unwrap();
        (
            contour.coordinates.to_vec(),
            contour.point_types.iter().map(|ty| ty.to_bits()).collect(),
            contour.is_closed,
        )
    }

    fn square(x: f64, y: f64) -> Vec<OutlinePoint> {
        vec![
            OutlinePoint::on_curve(0.0, 0.0),
            OutlinePoint::on_curve(0.0, y),
            OutlinePoint::on_curve(x, y),
            OutlinePoint::on_curve(x, 0.0),
        ]
    }

    #[test]
    fn empty() {
        let path = PackedPath::new();
        assert!(path.unpacked_contours().is_empty());
        let copy = path.clone();
        assert!(copy.coordinates().is_empty());
        assert!(copy.point_types().is_empty());
        assert!(copy.contour_info().is_empty());
        assert!(path.control_bounds().is_none());
        assert!(path.convex_hull().is_none());
    }

    #[test]
    fn copy_is_deep() {
        let path = simple_test_path(true);
        let copy = path.clone();
        let (mut coordinates, mut point_types, mut contour_info) = path.into_parts();
        coordinates[0] = 1000.0;
        point_types[0] = PointType::off_curve_quad();
        contour_info[0].is_closed = false;
        assert_eq!(copy.coordinates().as_slice(), &[0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0, 0.0]);
        assert!(copy.point_types().iter().all(|ty| ty.is_on_curve()));
        assert_eq!(copy.contour_info(), &[ContourInfo::new(3, true)]);
    }

    #[test]
    fn unpacked_contours() {
        for is_closed in [true, false] {
            let path = simple_test_path(is_closed);
            assert_eq!(
                path.unpacked_contours(),
                vec![UnpackedContour {
                    points: square(100.0, 100.0),
                    is_closed,
                }]
            );
        }
    }

    #[test]
    fn dangling_off_curves_are_kept() {
        let path = PackedPath::from_parts(
            vec![0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0, 0.0],
            vec![
                PointType::off_curve_quad(),
                PointType::on_curve(),
                PointType::off_curve_quad(),
                PointType::on_curve(),
            ],
            vec![ContourInfo::new(3, false)],
        );
        let points = &path.unpacked_contour(0).unwrap().points;
        assert_eq!(points[0], OutlinePoint::off_curve_quad(0.0, 0.0));
        assert_eq!(points[2], OutlinePoint::off_curve_quad(100.0, 100.0));
    }

    #[test]
    fn itemwise_arithmetic() {
        let path = PackedPath::from_parts(
            vec![0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0, 0.0],
            vec![
                PointType::on_curve(),
                PointType::off_curve_cubic(),
                PointType::off_curve_cubic(),
                PointType::on_curve(),
            ],
            vec![ContourInfo::new(3, true)],
        );
        let doubled = vec![
            OutlinePoint::on_curve(0.0, 0.0),
            OutlinePoint::off_curve_cubic(0.0, 200.0),
            OutlinePoint::off_curve_cubic(200.0, 200.0),
            OutlinePoint::on_curve(200.0, 0.0),
        ];
        let sum = path.add_itemwise(&path.clone()).unwrap();
        assert_eq!(sum.unpacked_contour(0).unwrap().points, doubled);
        assert_eq!(path.mul_scalar(2.0), sum);
        let diff = path.sub_itemwise(&path).unwrap();
        assert!(diff.coordinates().iter().all(|v| *v == 0.0));
        assert_eq!(diff.point_types(), path.point_types());
        assert_eq!(diff.contour_info(), path.contour_info());
        // x + x - x == x
        assert_eq!(sum.sub_itemwise(&path).unwrap(), path);
    }

    #[test]
    fn itemwise_with_raw_values() {
        let path = simple_test_path(true);
        let shifted = path.add_coordinates(&[1.0; 8]).unwrap();
        assert_eq!(shifted.point(2), Some(OutlinePoint::on_curve(101.0, 101.0)));
        assert_eq!(shifted.sub_coordinates(&[1.0; 8]).unwrap(), path);
        assert_eq!(
            path.add_coordinates(&[1.0; 6]).unwrap_err().to_string(),
            "arrays have different lengths: 8 vs. 6"
        );
    }

    #[test]
    fn itemwise_ignores_smooth_flag() {
        let path = simple_test_path(true);
        let mut smooth = path.clone();
        smooth
            .set_point_type(0, PointType::on_curve_smooth())
            .unwrap();
        assert!(path.is_compatible(&smooth));
        let sum = smooth.add_itemwise(&path).unwrap();
        assert!(sum.point_types()[0].is_smooth());
    }

    #[test]
    fn incompatible_paths() {
        let _ = env_logger::builder().is_test(true).try_init();
        let path = simple_test_path(true);
        let mut other = path.clone();
        other.set_point_type(1, PointType::off_curve_quad()).unwrap();
        assert_eq!(path.add_itemwise(&other), Err(PathError::Incompatible));
        assert_eq!(
            path.sub_itemwise(&simple_test_path(false))
                .unwrap_err()
                .to_string(),
            "paths are not compatible"
        );
        assert!(path.add_itemwise(&complex_test_path()).is_err());
    }

    #[test]
    fn transformed() {
        let path = simple_test_path(false);
        let scaled = path.transformed(&Transform::IDENTITY.scale(2.0, 2.0));
        assert_eq!(
            scaled.coordinates().as_slice(),
            &[0.0, 0.0, 0.0, 200.0, 200.0, 200.0, 200.0, 0.0]
        );
        assert_eq!(scaled.contour_info(), path.contour_info());
        let moved = path.transformed_with(|p| p + Point::new(1.0, -1.0));
        assert_eq!(moved.point_position(3), Some(Point::new(101.0, -1.0)));
    }

    #[test]
    fn concat() {
        let path = simple_test_path(true);
        let doubled = path.concat(&path);
        assert_eq!(doubled.num_contours(), 2);
        assert_eq!(doubled.num_points(), 8);
        assert_eq!(
            doubled.contour_info(),
            &[ContourInfo::new(3, true), ContourInfo::new(7, true)]
        );
        assert_eq!(doubled.unpacked_contour(1), path.unpacked_contour(0));
        assert!(doubled.check_integrity().is_ok());
    }

    #[test]
    fn point() {
        let path = simple_test_path(true);
        assert_eq!(path.point(0), Some(OutlinePoint::on_curve(0.0, 0.0)));
        assert_eq!(path.point(3), Some(OutlinePoint::on_curve(100.0, 0.0)));
        assert_eq!(path.point(4), None);
        assert_eq!(path.point_position(1), Some(Point::new(0.0, 100.0)));
    }

    #[test]
    fn huge_point_index() {
        let path = complex_test_path();
        assert_eq!(path.point_position(usize::MAX), None);
        assert_eq!(path.point(usize::MAX), None);
        assert_eq!(path.contour_index(usize::MAX), None);
        let mut path = path;
        assert!(path
            .set_point_position(usize::MAX, Point::new(1.0, 1.0))
            .is_err());
        assert!(path.is_start_or_end_point(usize::MAX).is_err());
    }

    #[test]
    fn point_reports_smooth_only_on_curve() {
        let path = PackedPath::from_raw(RawPath {
            coordinates: vec![0.0; 6],
            point_types: vec![8, 1, 2],
            contour_info: vec![RawContourInfo {
                end_point: 2,
                is_closed: false,
            }],
        })
        .unwrap();
        assert!(path.point(0).unwrap().smooth);
        assert_eq!(path.point(1).unwrap().kind, PointKind::OffCurveQuad);
        assert_eq!(path.point(2).unwrap().kind, PointKind::OffCurveCubic);
        assert!(!path.point(2).unwrap().smooth);
    }

    #[test]
    fn contour_index() {
        let path = PackedPath::from_parts(
            vec![],
            vec![],
            [3, 13, 15, 20]
                .into_iter()
                .map(|end| ContourInfo::new(end, true))
                .collect(),
        );
        let expected = [
            (0, Some(0)),
            (3, Some(0)),
            (4, Some(1)),
            (5, Some(1)),
            (13, Some(1)),
            (14, Some(2)),
            (15, Some(2)),
            (16, Some(3)),
            (20, Some(3)),
            (21, None),
        ];
        for (point_index, contour_index) in expected {
            assert_eq!(path.contour_index(point_index), contour_index, "{point_index}");
        }
    }

    #[test]
    fn contour_index_skips_empty_contours() {
        let path = PackedPath::from_parts(
            vec![0.0; 4],
            vec![PointType::on_curve(); 2],
            vec![
                ContourInfo::with_end(0, false),
                ContourInfo::with_end(1, false),
                ContourInfo::with_end(1, false),
                ContourInfo::with_end(2, false),
            ],
        );
        assert_eq!(path.contour_index(0), Some(1));
        assert_eq!(path.contour_index(1), Some(3));
        assert_eq!(path.num_points_of_contour(0), Ok(0));
        assert_eq!(path.num_points_of_contour(2), Ok(0));
    }

    #[test]
    fn contour_and_point_index() {
        let path = complex_test_path();
        let expected = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
            (2, 3),
        ];
        for (point_index, pair) in expected.into_iter().enumerate() {
            assert_eq!(path.contour_and_point_index(point_index), Ok(pair));
        }
        let err = path.contour_and_point_index(10).unwrap_err();
        assert_eq!(err.to_string(), "pointIndex out of bounds: 10");
        assert_eq!(err.operation(), Some("contour_and_point_index"));
    }

    #[test]
    fn unpacked_contour() {
        let mut path = simple_test_path(true);
        path.set_point_type(0, PointType::on_curve_smooth()).unwrap();
        let contour = path.unpacked_contour(0).unwrap();
        assert!(contour.is_closed);
        assert_eq!(contour.points.len(), 4);
        assert_eq!(contour.points[0], OutlinePoint::on_curve(0.0, 0.0).smooth());
        assert_eq!(contour.points[3], OutlinePoint::on_curve(100.0, 0.0));
        assert_eq!(path.unpacked_contour(-1).unwrap().points.len(), 4);
        assert_eq!(
            path.unpacked_contour(1).unwrap_err().to_string(),
            "contourIndex out of bounds: 1"
        );
    }

    #[test]
    fn control_bounds() {
        let mut path = PackedPath::new();
        path.move_to(0.0, 75.0);
        path.curve_to(25.0, 100.0, 75.0, 100.0, 100.0, 25.0);
        path.line_to(70.0, 0.0);
        path.close();
        assert_eq!(
            path.control_bounds(),
            Some(BoundingBox {
                x_min: 0.0,
                y_min: 0.0,
                x_max: 100.0,
                y_max: 100.0,
            })
        );
        let scaled = path.transformed(&Transform::IDENTITY.scale(1.5, 2.0));
        assert_eq!(
            scaled.control_bounds(),
            Some(BoundingBox {
                x_min: 0.0,
                y_min: 0.0,
                x_max: 150.0,
                y_max: 200.0,
            })
        );
    }

    #[test]
    fn control_bounds_for_contour() {
        let path = complex_test_path();
        assert_eq!(
            path.control_bounds_for_contour(1),
            Ok(Some(BoundingBox {
                x_min: 6.0,
                y_min: 7.0,
                x_max: 10.0,
                y_max: 11.0,
            }))
        );
        assert!(path.control_bounds_for_contour(3).is_err());
        let mut emptied = path.clone();
        for _ in 0..3 {
            emptied.delete_point(0, 0).unwrap();
        }
        assert_eq!(emptied.control_bounds_for_contour(0), Ok(None));
    }

    #[test]
    fn convex_hull() {
        let mut path = simple_test_path(true);
        path.append_point(0, &OutlinePoint::on_curve(50.0, 50.0))
            .unwrap();
        let hull = path.convex_hull().unwrap();
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Point::new(50.0, 50.0)));
    }

    #[test]
    fn set_point() {
        let mut path = simple_test_path(true);
        path.set_point_position(1, Point::new(23.0, 45.0)).unwrap();
        path.set_point(2, &OutlinePoint::off_curve_quad(65.0, 43.0))
            .unwrap();
        assert_eq!(path.point(1), Some(OutlinePoint::on_curve(23.0, 45.0)));
        assert_eq!(path.point(2), Some(OutlinePoint::off_curve_quad(65.0, 43.0)));
        let err = path.set_point(4, &OutlinePoint::default()).unwrap_err();
        assert_eq!(err.to_string(), "pointIndex out of bounds: 4");
        assert!(path.set_point_type(4, PointType::on_curve()).is_err());
    }

    #[test]
    fn contour_point() {
        let mut path = complex_test_path();
        assert_eq!(
            path.contour_point(2, -2),
            Ok(OutlinePoint::off_curve_quad(16.0, 17.0))
        );
        path.set_contour_point(-1, 0, &OutlinePoint::on_curve(1.0, 2.0))
            .unwrap();
        assert_eq!(path.point(6), Some(OutlinePoint::on_curve(1.0, 2.0)));
        assert_eq!(
            path.contour_point(0, 3).unwrap_err().to_string(),
            "contourPointIndex out of bounds: 3"
        );
    }

    #[test]
    fn insert_point_at_start() {
        let mut path = simple_test_path(true);
        path.insert_point(-1, 0, &OutlinePoint::on_curve(12.0, 13.0))
            .unwrap();
        assert_eq!(path.num_points(), 5);
        assert_eq!(path.point(0), Some(OutlinePoint::on_curve(12.0, 13.0)));
        assert_eq!(path.point(1), Some(OutlinePoint::on_curve(0.0, 0.0)));
        assert_eq!(path.contour_info(), &[ContourInfo::new(4, true)]);
    }

    #[test]
    fn insert_point_at_end_appends() {
        let mut inserted = simple_test_path(true);
        inserted
            .insert_point(-1, 4, &OutlinePoint::on_curve(12.0, 13.0))
            .unwrap();
        let mut appended = simple_test_path(true);
        appended
            .append_point(-1, &OutlinePoint::on_curve(12.0, 13.0))
            .unwrap();
        assert_eq!(inserted, appended);
        assert_eq!(appended.point(4), Some(OutlinePoint::on_curve(12.0, 13.0)));
        let err = inserted
            .insert_point(0, 6, &OutlinePoint::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "contourPointIndex out of bounds: 6");
    }

    #[test]
    fn append_point_to_later_contour() {
        let first = simple_test_path(true);
        let second =
            first.transformed(&Transform::IDENTITY.translate(10.0, 10.0).scale(2.0, 2.0));
        let mut path = first.concat(&second);
        path.append_point(1, &OutlinePoint::on_curve(12.0, 13.0))
            .unwrap();
        assert_eq!(
            path.contour_info(),
            &[ContourInfo::new(3, true), ContourInfo::new(8, true)]
        );
        assert_eq!(path.point(4), Some(OutlinePoint::on_curve(10.0, 10.0)));
        assert_eq!(path.point(8), Some(OutlinePoint::on_curve(12.0, 13.0)));
    }

    #[test]
    fn edits_in_middle_contour_shift_only_later_ends() {
        let mut path = complex_test_path();
        path.insert_point(1, 1, &OutlinePoint::on_curve(-1.0, -1.0))
            .unwrap();
        assert_eq!(
            path.contour_info(),
            &[
                ContourInfo::new(2, true),
                ContourInfo::new(6, true),
                ContourInfo::new(10, true)
            ]
        );
        assert_eq!(path.point(4), Some(OutlinePoint::on_curve(-1.0, -1.0)));
        assert_eq!(path.point(7), Some(OutlinePoint::on_curve(12.0, 13.0)));

        path.delete_point(1, 1).unwrap();
        assert_eq!(path, complex_test_path());

        let mut path = complex_test_path();
        let first = path.contour(0).unwrap();
        path.insert_contour(1, &first).unwrap();
        assert_eq!(
            path.contour_info(),
            &[
                ContourInfo::new(2, true),
                ContourInfo::new(5, true),
                ContourInfo::new(8, true),
                ContourInfo::new(12, true)
            ]
        );

        let mut path = complex_test_path();
        let last = path.contour(2).unwrap();
        path.set_contour(1, &last).unwrap();
        assert_eq!(
            path.contour_info(),
            &[
                ContourInfo::new(2, true),
                ContourInfo::new(6, true),
                ContourInfo::new(10, true)
            ]
        );
        assert_eq!(path.contour(2), Ok(last));
    }

    #[test]
    fn append_point_bad_contour() {
        let mut path = simple_test_path(true);
        let err = path
            .append_point(1, &OutlinePoint::on_curve(12.0, 13.0))
            .unwrap_err();
        assert_eq!(err.to_string(), "contourIndex out of bounds: 1");
        assert_eq!(err.operation(), Some("append_point"));
        assert_eq!(path, simple_test_path(true));
    }

    #[test]
    fn delete_point() {
        let mut path = simple_test_path(true);
        path.delete_point(0, 1).unwrap();
        assert_eq!(path.num_points(), 3);
        assert_eq!(path.coordinates().as_slice(), &[0.0, 0.0, 100.0, 100.0, 100.0, 0.0]);
        assert_eq!(path.contour_info(), &[ContourInfo::new(2, true)]);
    }

    #[test]
    fn delete_point_bad_index() {
        let mut path = simple_test_path(true);
        for index in [4, 5] {
            let err = path.delete_point(0, index).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("contourPointIndex out of bounds: {index}")
            );
        }
        assert_eq!(
            path.delete_point(0, -5).unwrap_err().to_string(),
            "contourPointIndex out of bounds: -5"
        );
    }

    #[test]
    fn delete_every_point_leaves_empty_contour() {
        let mut path = simple_test_path(true);
        for _ in 0..4 {
            path.delete_point(0, -1).unwrap();
        }
        assert_eq!(path.num_contours(), 1);
        assert_eq!(path.num_points(), 0);
        assert_eq!(path.contour_info()[0].end_point(), None);
        assert!(path.check_integrity().is_ok());
        path.append_point(0, &OutlinePoint::on_curve(1.0, 1.0))
            .unwrap();
        assert_eq!(path.contour_info(), &[ContourInfo::new(0, true)]);
    }

    #[test]
    fn num_points_of_contour() {
        let mut path = complex_test_path();
        path.delete_point(0, 0).unwrap();
        assert_eq!(path.num_points_of_contour(0), Ok(2));
        assert_eq!(path.num_points_of_contour(1), Ok(3));
        assert_eq!(path.num_points_of_contour(2), Ok(4));
        assert_eq!(path.num_points_of_contour(-1), Ok(4));
        assert_eq!(
            path.num_points_of_contour(3).unwrap_err().to_string(),
            "contourIndex out of bounds: 3"
        );
    }

    #[test]
    fn delete_contour() {
        let path = complex_test_path();
        let contours = path.unpacked_contours();
        assert_eq!(
            contours[0].points,
            vec![
                OutlinePoint::on_curve(0.0, 1.0),
                OutlinePoint::off_curve_quad(2.0, 3.0),
                OutlinePoint::on_curve(4.0, 5.0),
            ]
        );

        let cases: &[(&[isize], &[usize])] = &[
            (&[0], &[1, 2]),
            (&[1], &[0, 2]),
            (&[2], &[0, 1]),
            (&[2, 0], &[1]),
            (&[0, 0, 0], &[]),
        ];
        for (deletions, remaining) in cases {
            let mut copy = path.clone();
            for index in *deletions {
                copy.delete_contour(*index).unwrap();
            }
            assert!(copy.check_integrity().is_ok());
            let expected: Vec<_> = remaining.iter().map(|i| contours[*i].clone()).collect();
            assert_eq!(copy.unpacked_contours(), expected, "{deletions:?}");
            assert_eq!(copy.num_contours(), remaining.len());
        }
        let mut copy = path.clone();
        assert_eq!(
            copy.delete_contour(3).unwrap_err().to_string(),
            "contourIndex out of bounds: 3"
        );
        assert_eq!(copy.delete_contour(-4).unwrap_err().operation(), Some("delete_contour"));
    }

    #[test]
    fn delete_n_trailing_contours() {
        let path = complex_test_path();
        let mut two = path.clone();
        two.delete_n_trailing_contours(1);
        assert_eq!(two.num_points(), 6);
        assert_eq!(two.unpacked_contours(), path.unpacked_contours()[..2]);
        assert!(two.check_integrity().is_ok());

        let mut none = path.clone();
        none.delete_n_trailing_contours(0);
        assert_eq!(none, path);

        let doubled = path.concat(&simple_test_path(true));
        let mut emptied = doubled.clone();
        emptied.delete_n_trailing_contours(4);
        assert_eq!(emptied, PackedPath::new());
        // deleting from an empty path is a no-op
        emptied.delete_n_trailing_contours(2);
        assert_eq!(emptied, PackedPath::new());
    }

    #[test]
    fn contour() {
        let path = complex_test_path();
        assert_eq!(
            contour_parts(&path, 0),
            (vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0], vec![0, 1, 0], true)
        );
        assert_eq!(
            contour_parts(&path, 1),
            (vec![6.0, 7.0, 8.0, 9.0, 10.0, 11.0], vec![0, 0, 0], true)
        );
        assert_eq!(
            contour_parts(&path, 2),
            (
                vec![12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0],
                vec![0, 1, 1, 0],
                true
            )
        );
    }

    #[test]
    fn set_contour() {
        let mut path = complex_test_path();
        let first = path.contour(0).unwrap();
        path.set_contour(1, &first).unwrap();
        assert_eq!(path.contour(0), Ok(first.clone()));
        assert_eq!(path.contour(1), Ok(first));
        assert_eq!(contour_parts(&path, 2).1, vec![0, 1, 1, 0]);
        assert_eq!(path.num_contours(), 3);
        assert!(path.check_integrity().is_ok());
    }

    #[test]
    fn set_contour_changes_length() {
        let mut path = complex_test_path();
        let last = path.contour(-1).unwrap();
        path.set_contour(0, &last).unwrap();
        assert_eq!(path.num_points(), 11);
        assert_eq!(path.contour_info()[0].end_point(), Some(3));
        assert_eq!(path.contour(1).unwrap().coordinates.as_slice(), &[6.0, 7.0, 8.0, 9.0, 10.0, 11.0]);
        assert!(path.check_integrity().is_ok());
    }

    #[test]
    fn insert_contour() {
        for insert_at in [0, 1] {
            let mut path = complex_test_path();
            let original = path.clone();
            let last = path.contour(-1).unwrap();
            path.insert_contour(insert_at, &last).unwrap();
            assert_eq!(path.num_contours(), 4);
            assert!(path.check_integrity().is_ok());
            let mut expected: Vec<_> = (0..3).map(|i| original.contour(i).unwrap()).collect();
            expected.insert(insert_at as usize, last);
            let actual: Vec<_> = (0..4).map(|i| path.contour(i).unwrap()).collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn insert_contour_bounds() {
        let mut path = complex_test_path();
        let contour = path.contour(0).unwrap();
        path.insert_contour(3, &contour).unwrap();
        assert_eq!(path.contour(3), Ok(contour.clone()));
        let err = path.insert_contour(5, &contour).unwrap_err();
        assert_eq!(err.to_string(), "contourIndex out of bounds: 5");
    }

    #[test]
    fn append_contour() {
        let mut path = complex_test_path();
        let second = path.contour(1).unwrap();
        path.append_contour(&second).unwrap();
        assert_eq!(path.num_contours(), 4);
        assert_eq!(path.contour(3), Ok(second));
        assert_eq!(contour_parts(&path, 2).0.len(), 8);
        assert!(path.check_integrity().is_ok());
    }

    #[test]
    fn malformed_contour_is_rejected() {
        let mut path = complex_test_path();
        let contour = Contour {
            coordinates: vec![1.0, 2.0, 3.0].into(),
            point_types: vec![PointType::on_curve(); 2],
            is_closed: false,
        };
        assert!(matches!(
            path.append_contour(&contour),
            Err(PathError::MalformedCoordinates {
                num_coordinates: 3,
                num_points: 2
            })
        ));
        assert_eq!(path, complex_test_path());
    }

    #[test]
    fn empty_contour() {
        let mut path = PackedPath::new();
        path.append_contour(&Contour::default()).unwrap();
        path.append_contour(&complex_test_path().contour(0).unwrap())
            .unwrap();
        assert_eq!(path.num_contours(), 2);
        assert_eq!(path.num_points_of_contour(0), Ok(0));
        assert_eq!(path.contour_info()[0].end_point(), None);
        assert_eq!(path.contour_index(0), Some(1));
        assert!(path.contour(0).unwrap().is_empty());
        assert!(path.check_integrity().is_ok());
        assert_eq!(
            path.to_raw().contour_info[0],
            RawContourInfo {
                end_point: -1,
                is_closed: false
            }
        );
    }

    #[test]
    fn set_unpacked_contour_keeps_smooth() {
        let mut path = complex_test_path();
        path.set_point_type(2, PointType::on_curve_smooth()).unwrap();
        let first = path.unpacked_contour(0).unwrap();
        path.set_unpacked_contour(1, &first).unwrap();
        assert_eq!(contour_parts(&path, 0).1, vec![0, 1, 8]);
        assert_eq!(contour_parts(&path, 1).1, vec![0, 1, 8]);
        assert_eq!(contour_parts(&path, 2).1, vec![0, 1, 1, 0]);
        assert_eq!(path.num_contours(), 3);
        assert!(path.check_integrity().is_ok());
    }

    #[test]
    fn insert_and_append_unpacked_contour() {
        let mut path = complex_test_path();
        let contour = UnpackedContour {
            points: square(10.0, 20.0),
            is_closed: false,
        };
        path.insert_unpacked_contour(0, &contour).unwrap();
        path.append_unpacked_contour(&contour);
        assert_eq!(path.num_contours(), 5);
        assert_eq!(path.unpacked_contour(0), Ok(contour.clone()));
        assert_eq!(path.unpacked_contour(-1), Ok(contour));
        assert_eq!(path.num_points(), 18);
        assert!(path.check_integrity().is_ok());
    }

    #[test]
    fn from_unpacked_contours() {
        let path = complex_test_path();
        let rebuilt = PackedPath::from_unpacked_contours(&path.unpacked_contours());
        assert_eq!(rebuilt, path);
        assert_eq!(rebuilt.unpacked_contours(), path.unpacked_contours());
    }

    #[test]
    fn pen_methods() {
        let mut path = PackedPath::new();
        path.move_to(0.0, 0.0);
        path.line_to(0.0, 100.0);
        path.curve_to(30.0, 130.0, 70.0, 130.0, 100.0, 100.0);
        path.quad_curve_to(&[Point::new(130.0, 70.0), Point::new(130.0, 30.0), Point::new(100.0, 0.0)]);
        path.close();
        assert_eq!(
            path.point_types().iter().map(|ty| ty.to_bits()).collect::<Vec<_>>(),
            [0, 0, 2, 2, 0, 1, 1, 0]
        );
        assert_eq!(path.contour_info(), &[ContourInfo::new(7, true)]);
        path.move_to(5.0, 5.0);
        path.quad_to(6.0, 6.0, 7.0, 5.0);
        assert_eq!(path.num_contours(), 2);
        assert!(!path.contour_info()[1].is_closed);
        assert!(path.check_integrity().is_ok());
    }

    #[test]
    fn pen_without_contour() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut path = PackedPath::new();
        path.close();
        assert!(path.is_empty());
        path.line_to(1.0, 2.0);
        assert_eq!(path.num_contours(), 1);
        assert_eq!(path.point(0), Some(OutlinePoint::on_curve(1.0, 2.0)));
        assert!(path.check_integrity().is_ok());
    }

    #[test]
    fn is_start_or_end_point() {
        let mut path = simple_test_path(false).concat(&simple_test_path(true));
        path.append_contour(&Contour {
            coordinates: vec![5.0, 5.0].into(),
            point_types: vec![PointType::on_curve()],
            is_closed: false,
        })
        .unwrap();
        assert_eq!(path.is_start_or_end_point(0), Ok(Some(OpenContourEnd::Start)));
        assert_eq!(path.is_start_or_end_point(1), Ok(None));
        assert_eq!(path.is_start_or_end_point(3), Ok(Some(OpenContourEnd::End)));
        assert_eq!(path.is_start_or_end_point(4), Ok(None));
        assert_eq!(path.is_start_or_end_point(7), Ok(None));
        // single point open contour reports its start
        assert_eq!(path.is_start_or_end_point(8), Ok(Some(OpenContourEnd::Start)));
        assert_eq!(OpenContourEnd::End as i8, 1);
        assert!(path.is_start_or_end_point(9).is_err());
    }

    #[test]
    fn first_point_index_near_point() {
        let path = simple_test_path(true);
        let near = |x, y, skip| path.first_point_index_near_point(Point::new(x, y), 5.0, skip);
        assert_eq!(near(1.0, 99.0, None), Some(1));
        assert_eq!(near(1.0, 99.0, Some(1)), None);
        assert_eq!(near(50.0, 50.0, None), None);
        // boundary is inclusive
        assert_eq!(near(105.0, 0.0, None), Some(3));
        let doubled = path.concat(&path);
        assert_eq!(
            doubled.first_point_index_near_point(Point::new(100.0, 100.0), 1.0, Some(2)),
            Some(6)
        );
    }

    #[test]
    fn index_normalization() {
        let path = complex_test_path();
        assert_eq!(path.normalize_contour_index(-1, false), Ok(2));
        assert_eq!(path.normalize_contour_index(3, true), Ok(3));
        assert!(path.normalize_contour_index(3, false).is_err());
        assert_eq!(path.absolute_point_index(1, -1, false), Ok(5));
        assert_eq!(path.absolute_point_index(-1, 4, true), Ok(10));
        assert_eq!(path.absolute_point_index(0, 0, false), Ok(0));
        assert_eq!(
            path.absolute_point_index(0, 3, false),
            Err(PathError::ContourPointIndexOutOfBounds {
                index: 3,
                op: "absolute_point_index"
            })
        );
        assert_eq!(
            path.absolute_point_index(-4, 0, false),
            Err(PathError::ContourIndexOutOfBounds {
                index: -4,
                op: "absolute_point_index"
            })
        );
    }

    #[test]
    fn raw_round_trip() {
        let path = complex_test_path();
        let raw = path.to_raw();
        assert_eq!(raw.point_types, [0, 1, 0, 0, 0, 0, 0, 1, 1, 0]);
        assert_eq!(
            raw.contour_info.iter().map(|c| c.end_point).collect::<Vec<_>>(),
            [2, 5, 9]
        );
        assert_eq!(PackedPath::try_from(raw), Ok(path));
    }

    #[test]
    fn raw_rejects_bad_data() {
        let good = complex_test_path().to_raw();

        let mut raw = good.clone();
        raw.point_types[4] = 9;
        assert_eq!(
            PackedPath::from_raw(raw),
            Err(PathError::IllegalPointType { index: 4, bits: 9 })
        );

        let mut raw = good.clone();
        raw.coordinates.pop();
        assert!(matches!(
            PackedPath::from_raw(raw),
            Err(PathError::MalformedCoordinates { .. })
        ));

        let mut raw = good.clone();
        raw.contour_info[0].end_point = -2;
        assert_eq!(
            PackedPath::from_raw(raw),
            Err(PathError::InvalidEndPoint {
                contour_index: 0,
                end_point: -2
            })
        );

        let mut raw = good;
        raw.contour_info[2].end_point = 8;
        assert!(matches!(
            PackedPath::from_raw(raw),
            Err(PathError::InvalidStructure(_))
        ));
    }
}
