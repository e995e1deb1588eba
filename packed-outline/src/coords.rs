//! Flat storage for point coordinates.

use core::ops::{Deref, DerefMut, Range};

use crate::{error::LengthMismatch, Point};

/// Growable sequence of coordinate values with itemwise arithmetic.
///
/// In a packed path this holds consecutive `x, y` pairs, but the arithmetic
/// itself places no meaning on the values: any two buffers of the same
/// length can be combined.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CoordinateBuffer(Vec<f64>);

impl CoordinateBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    /// Returns the values as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the buffer viewed as points, or `None` if it holds an odd
    /// number of values.
    pub fn as_points(&self) -> Option<&[Point<f64>]> {
        bytemuck::try_cast_slice(&self.0).ok()
    }

    /// Returns the point stored at `index`.
    pub fn point(&self, index: usize) -> Option<Point<f64>> {
        let start = index.checked_mul(2)?;
        match self.0.get(start..start.checked_add(2)?)? {
            [x, y] => Some(Point::new(*x, *y)),
            _ => None,
        }
    }

    /// Overwrites the point stored at `index`.
    ///
    /// Panics if `index` is out of range.
    pub fn set_point(&mut self, index: usize, point: Point<f64>) {
        self.0[index * 2] = point.x;
        self.0[index * 2 + 1] = point.y;
    }

    /// Appends a point.
    pub fn push_point(&mut self, point: Point<f64>) {
        self.0.extend([point.x, point.y]);
    }

    /// Shortens the buffer to `len` values.
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// Replaces the values in `range` with `values`.
    pub fn splice(&mut self, range: Range<usize>, values: impl IntoIterator<Item = f64>) {
        self.0.splice(range, values);
    }

    /// Returns a new buffer with `self[i] + other[i]` at every index.
    pub fn add_itemwise(&self, other: &[f64]) -> Result<Self, LengthMismatch> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Returns a new buffer with `self[i] - other[i]` at every index.
    pub fn sub_itemwise(&self, other: &[f64]) -> Result<Self, LengthMismatch> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Returns a new buffer with every value multiplied by `scalar`.
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self(self.0.iter().map(|v| v * scalar).collect())
    }

    fn zip_with(&self, other: &[f64], f: impl Fn(f64, f64) -> f64) -> Result<Self, LengthMismatch> {
        if self.0.len() != other.len() {
            return Err(LengthMismatch {
                left: self.0.len(),
                right: other.len(),
            });
        }
        Ok(Self(
            self.0.iter().zip(other).map(|(a, b)| f(*a, *b)).collect(),
        ))
    }
}

impl Deref for CoordinateBuffer {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CoordinateBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<f64>> for CoordinateBuffer {
    fn from(value: Vec<f64>) -> Self {
        Self(value)
    }
}

impl From<CoordinateBuffer> for Vec<f64> {
    fn from(value: CoordinateBuffer) -> Self {
        value.0
    }
}

impl FromIterator<f64> for CoordinateBuffer {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<f64> for CoordinateBuffer {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}
