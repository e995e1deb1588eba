//! Rendering packed paths to pens.

use crate::{error::PathError, path::PackedPath, segments::ContourSegments, Pen};

impl PackedPath {
    /// Draws every contour of the path to `pen`.
    ///
    /// Each non-empty contour produces exactly one `move_to`, one call per
    /// segment and, for closed contours, a final `close`. The closing
    /// segment of a closed contour is drawn explicitly, so a contour whose
    /// last segment is a line ends with a `line_to` back to its start.
    pub fn draw(&self, pen: &mut impl Pen) {
        for contour_index in 0..self.num_contours() {
            self.segments_at(contour_index).draw(pen);
        }
    }

    /// Draws a single contour to `pen`.
    pub fn draw_contour(&self, contour_index: isize, pen: &mut impl Pen) -> Result<(), PathError> {
        self.contour_segments(contour_index)?.draw(pen);
        Ok(())
    }

    /// Returns the geometric decomposition of a contour.
    pub fn contour_segments(&self, contour_index: isize) -> Result<ContourSegments<'_>, PathError> {
        let contour_index = self.resolve_contour_index(contour_index, false, "contour_segments")?;
        Ok(self.segments_at(contour_index))
    }

    /// Returns the path as a kurbo [`BezPath`](kurbo::BezPath).
    #[cfg(feature = "kurbo")]
    pub fn to_bez_path(&self) -> kurbo::BezPath {
        let mut path = kurbo::BezPath::new();
        self.draw(&mut path);
        path
    }

    fn segments_at(&self, contour_index: usize) -> ContourSegments<'_> {
        let (points, point_types) = self.contour_points(contour_index);
        let is_closed = self
            .contour_info()
            .get(contour_index)
            .map(|info| info.is_closed)
            .unwrap_or_default();
        ContourSegments::new(points, point_types, is_closed)
    }
}
