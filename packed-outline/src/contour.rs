//! Contour descriptors and the packed and unpacked contour forms.

use crate::{
    coords::CoordinateBuffer,
    point_type::{PointKind, PointType},
    Point,
};

/// Descriptor for one contour of a packed path.
///
/// Contours are stored contiguously, so only the end of each contour is
/// recorded; a contour starts where the previous one ends. The end is kept
/// as an exclusive bound so that an empty first contour is representable.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct ContourInfo {
    end: usize,
    /// True if the contour is closed.
    pub is_closed: bool,
}

impl ContourInfo {
    /// Creates a descriptor for a contour whose last point has the absolute
    /// index `end_point`.
    pub const fn new(end_point: usize, is_closed: bool) -> Self {
        Self {
            end: end_point + 1,
            is_closed,
        }
    }

    /// Creates a descriptor from an exclusive end index.
    pub const fn with_end(end: usize, is_closed: bool) -> Self {
        Self { end, is_closed }
    }

    /// Returns the absolute index of the last point of this contour.
    ///
    /// This is `None` only for an empty contour at the start of a path.
    pub const fn end_point(&self) -> Option<usize> {
        self.end.checked_sub(1)
    }

    /// Returns one past the absolute index of the last point.
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Shifts the end of this contour by `delta` points.
    pub(crate) fn shift(&mut self, delta: isize) {
        let end = self.end.checked_add_signed(delta);
        debug_assert!(end.is_some(), "contour end {} shifted by {delta}", self.end);
        self.end = end.unwrap_or_default();
    }
}

/// A single point with its type, detached from any path.
///
/// This is the "unpacked" point form used by editing code.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlinePoint {
    pub x: f64,
    pub y: f64,
    /// Curve class; serialized as `type` and omitted for on-curve points.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "is_on_curve")
    )]
    pub kind: PointKind,
    /// Smoothness, only meaningful for on-curve points.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_false"))]
    pub smooth: bool,
}

#[cfg(feature = "serde")]
fn is_on_curve(kind: &PointKind) -> bool {
    kind.is_on_curve()
}

#[cfg(feature = "serde")]
fn is_false(value: &bool) -> bool {
    !*value
}

impl OutlinePoint {
    /// Creates an on-curve point.
    pub const fn on_curve(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointKind::OnCurve,
            smooth: false,
        }
    }

    /// Creates a quadratic off-curve point.
    pub const fn off_curve_quad(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointKind::OffCurveQuad,
            smooth: false,
        }
    }

    /// Creates a cubic off-curve point.
    pub const fn off_curve_cubic(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointKind::OffCurveCubic,
            smooth: false,
        }
    }

    /// Returns a copy with the smooth flag set.
    pub const fn smooth(mut self) -> Self {
        self.smooth = true;
        self
    }

    /// Builds the point stored at some index of a packed path.
    pub fn from_parts(point: Point<f64>, point_type: PointType) -> Self {
        Self {
            x: point.x,
            y: point.y,
            kind: point_type.kind(),
            smooth: point_type.is_smooth(),
        }
    }

    /// Returns the position of this point.
    pub fn position(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }

    /// Returns the packed type of this point.
    ///
    /// The smooth flag is dropped for off-curve points.
    pub fn point_type(&self) -> PointType {
        PointType::new(self.kind, self.smooth)
    }
}

/// A contour in packed form: flat coordinates plus parallel point types.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Contour {
    pub coordinates: CoordinateBuffer,
    pub point_types: Vec<PointType>,
    pub is_closed: bool,
}

impl Contour {
    /// Number of points in the contour.
    pub fn len(&self) -> usize {
        self.point_types.len()
    }

    /// Returns true if the contour has no points.
    pub fn is_empty(&self) -> bool {
        self.point_types.is_empty()
    }

    /// Converts to the unpacked form.
    pub fn unpack(&self) -> UnpackedContour {
        let points = self
            .point_types
            .iter()
            .enumerate()
            .filter_map(|(i, ty)| Some(OutlinePoint::from_parts(self.coordinates.point(i)?, *ty)))
            .collect();
        UnpackedContour {
            points,
            is_closed: self.is_closed,
        }
    }
}

/// A contour as a list of points.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UnpackedContour {
    pub points: Vec<OutlinePoint>,
    pub is_closed: bool,
}

/// Converts an unpacked contour to packed form.
pub fn pack_contour(unpacked: &UnpackedContour) -> Contour {
    let mut coordinates = CoordinateBuffer::zeros(unpacked.points.len() * 2);
    let mut point_types = Vec::with_capacity(unpacked.points.len());
    for (i, point) in unpacked.points.iter().enumerate() {
        coordinates.set_point(i, point.position());
        point_types.push(point.point_type());
    }
    Contour {
        coordinates,
        point_types,
        is_closed: unpacked.is_closed,
    }
}

impl From<&UnpackedContour> for Contour {
    fn from(value: &UnpackedContour) -> Self {
        pack_contour(value)
    }
}
