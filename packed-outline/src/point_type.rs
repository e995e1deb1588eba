//! Per point curve classification.

/// The curve class of a point.
///
/// On-curve points are the endpoints of segments. Off-curve points are
/// control points of either a quadratic spline or a cubic bezier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointKind {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "on"))]
    OnCurve,
    #[cfg_attr(feature = "serde", serde(rename = "quad"))]
    OffCurveQuad,
    #[cfg_attr(feature = "serde", serde(rename = "cubic"))]
    OffCurveCubic,
}

impl PointKind {
    /// Returns true if this is an on curve point.
    #[inline]
    pub const fn is_on_curve(self) -> bool {
        matches!(self, Self::OnCurve)
    }

    /// Returns true if this is an off curve point of either flavor.
    #[inline]
    pub const fn is_off_curve(self) -> bool {
        !self.is_on_curve()
    }
}

/// Type of a point: its curve class plus the smooth flag.
///
/// The smooth flag is only meaningful for on-curve points; the constructors
/// never set it on an off-curve point.
///
/// In the packed integer form the class occupies the low bits
/// (`0` on-curve, `1` quadratic, `2` cubic) and smoothness is bit `0x08`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct PointType {
    kind: PointKind,
    smooth: bool,
}

impl PointType {
    pub const ON_CURVE: u8 = 0x00;
    pub const OFF_CURVE_QUAD: u8 = 0x01;
    pub const OFF_CURVE_CUBIC: u8 = 0x02;
    pub const SMOOTH_FLAG: u8 = 0x08;
    pub const POINT_TYPE_MASK: u8 = 0x07;

    /// Creates a point type, dropping `smooth` for off-curve kinds.
    pub const fn new(kind: PointKind, smooth: bool) -> Self {
        Self {
            kind,
            smooth: smooth && kind.is_on_curve(),
        }
    }

    /// Creates a new on curve point type.
    pub const fn on_curve() -> Self {
        Self::new(PointKind::OnCurve, false)
    }

    /// Creates a new smooth on curve point type.
    pub const fn on_curve_smooth() -> Self {
        Self::new(PointKind::OnCurve, true)
    }

    /// Creates a new off curve quadratic point type.
    pub const fn off_curve_quad() -> Self {
        Self::new(PointKind::OffCurveQuad, false)
    }

    /// Creates a new off curve cubic point type.
    pub const fn off_curve_cubic() -> Self {
        Self::new(PointKind::OffCurveCubic, false)
    }

    /// Decodes the packed integer form.
    ///
    /// Returns `None` for an unknown class, unknown flag bits, or a smooth
    /// flag on an off-curve point.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !(Self::POINT_TYPE_MASK | Self::SMOOTH_FLAG) != 0 {
            return None;
        }
        let kind = match bits & Self::POINT_TYPE_MASK {
            Self::ON_CURVE => PointKind::OnCurve,
            Self::OFF_CURVE_QUAD => PointKind::OffCurveQuad,
            Self::OFF_CURVE_CUBIC => PointKind::OffCurveCubic,
            _ => return None,
        };
        let smooth = bits & Self::SMOOTH_FLAG != 0;
        if smooth && kind.is_off_curve() {
            return None;
        }
        Some(Self { kind, smooth })
    }

    /// Returns the packed integer form.
    pub const fn to_bits(self) -> u8 {
        let class = match self.kind {
            PointKind::OnCurve => Self::ON_CURVE,
            PointKind::OffCurveQuad => Self::OFF_CURVE_QUAD,
            PointKind::OffCurveCubic => Self::OFF_CURVE_CUBIC,
        };
        if self.smooth {
            class | Self::SMOOTH_FLAG
        } else {
            class
        }
    }

    /// Returns the curve class.
    #[inline]
    pub const fn kind(self) -> PointKind {
        self.kind
    }

    /// Returns true if the smooth flag is set.
    #[inline]
    pub const fn is_smooth(self) -> bool {
        self.smooth
    }

    /// Returns true if this is an on curve point.
    #[inline]
    pub const fn is_on_curve(self) -> bool {
        self.kind.is_on_curve()
    }

    /// Returns true if this is an off curve point of either flavor.
    #[inline]
    pub const fn is_off_curve(self) -> bool {
        self.kind.is_off_curve()
    }

    /// Returns true if this is an off curve quadratic point.
    #[inline]
    pub const fn is_off_curve_quad(self) -> bool {
        matches!(self.kind, PointKind::OffCurveQuad)
    }

    /// Returns true if this is an off curve cubic point.
    #[inline]
    pub const fn is_off_curve_cubic(self) -> bool {
        matches!(self.kind, PointKind::OffCurveCubic)
    }

    /// Returns a copy with the smooth flag set or cleared.
    ///
    /// Setting the flag on an off-curve point has no effect.
    pub const fn with_smooth(self, smooth: bool) -> Self {
        Self::new(self.kind, smooth)
    }

    /// Returns true if both points have the same curve class, ignoring the
    /// smooth flag.
    #[inline]
    pub fn same_class(self, other: Self) -> bool {
        self.kind == other.kind
    }
}

impl From<PointKind> for PointType {
    fn from(kind: PointKind) -> Self {
        Self::new(kind, false)
    }
}

impl From<PointType> for u8 {
    fn from(value: PointType) -> Self {
        value.to_bits()
    }
}
