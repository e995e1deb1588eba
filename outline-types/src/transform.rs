//! Contains a [`Transform`] object holding values of an affine transformation matrix.
use std::ops::{Mul, MulAssign};

use crate::Point;

/// A 2D affine transformation.
///
/// Factors are specified in column-order, meaning that
/// for a vector `(x,y)` the transformed position `x'` of the vector
/// is calculated by
/// `x' = xx * x + xy * y + dx`,
/// and the transformed position y' is calculated by
/// `y' = yx * x + yy * y + dy`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        xx: 1.0,
        yx: 0.0,
        xy: 0.0,
        yy: 1.0,
        dx: 0.0,
        dy: 0.0,
    };

    /// Creates a transform from the six coefficients in
    /// `[xx, yx, xy, yy, dx, dy]` order.
    pub const fn new([xx, yx, xy, yy, dx, dy]: [f64; 6]) -> Self {
        Self {
            xx,
            yx,
            xy,
            yy,
            dx,
            dy,
        }
    }

    /// Returns a copy of this transform that first translates by (x, y).
    ///
    /// This is equivalent to post-multiplying by a translation matrix.
    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.dx += (self.xx * x) + (self.xy * y);
        self.dy += (self.yx * x) + (self.yy * y);
        self
    }

    /// Returns a copy of this transform that first scales by (sx, sy).
    pub fn scale(mut self, sx: f64, sy: f64) -> Self {
        self.xx *= sx;
        self.yx *= sx;
        self.xy *= sy;
        self.yy *= sy;
        self
    }

    /// Returns a copy of this transform that first rotates by `radians`.
    pub fn rotate(self, radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        self * Self::new([c, s, -s, c, 0.0, 0.0])
    }

    /// Returns true if this transform only translates.
    pub fn is_translation(&self) -> bool {
        self.xx == 1.0 && self.yx == 0.0 && self.xy == 0.0 && self.yy == 1.0
    }

    /// Applies the transform to a point.
    pub fn transform_point(&self, Point { x, y }: Point<f64>) -> Point<f64> {
        Point::new(
            self.dx + (self.xx * x) + (self.xy * y),
            self.dy + (self.yx * x) + (self.yy * y),
        )
    }
}

impl MulAssign for Transform {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        fn muladdmul(a: f64, b: f64, c: f64, d: f64) -> f64 {
            a * b + c * d
        }
        Self {
            xx: muladdmul(self.xx, rhs.xx, self.xy, rhs.yx),
            xy: muladdmul(self.xx, rhs.xy, self.xy, rhs.yy),
            dx: muladdmul(self.xx, rhs.dx, self.xy, rhs.dy) + self.dx,
            yx: muladdmul(self.yx, rhs.xx, self.yy, rhs.yx),
            yy: muladdmul(self.yx, rhs.xy, self.yy, rhs.yy),
            dy: muladdmul(self.yx, rhs.dx, self.yy, rhs.dy) + self.dy,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Affine> for Transform {
    fn from(value: kurbo::Affine) -> Self {
        Self::new(value.as_coeffs())
    }
}

#[cfg(feature = "kurbo")]
impl From<Transform> for kurbo::Affine {
    fn from(value: Transform) -> Self {
        kurbo::Affine::new([value.xx, value.yx, value.xy, value.yy, value.dx, value.dy])
    }
}
