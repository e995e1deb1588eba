//! Pens for inspecting drawn paths.
//!
//! With the `kurbo` feature a `kurbo::BezPath` is itself a pen, which is how
//! `PackedPath::to_bez_path` builds its result.

use core::fmt::{self, Write};

use crate::{BoundingBox, Pen, Point};

/// Pen that writes SVG path data.
///
/// Every command is written as its SVG letter followed by comma separated
/// `x,y` pairs, with commands separated by single spaces. Closing a contour
/// writes `Z`.
#[derive(Clone, Default, Debug)]
pub struct SvgPen {
    data: String,
    precision: Option<usize>,
}

impl SvgPen {
    /// Creates a pen that writes coordinates in their shortest form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pen that writes coordinates with exactly `precision`
    /// digits after the decimal point.
    pub fn with_precision(precision: usize) -> Self {
        Self {
            data: String::new(),
            precision: Some(precision),
        }
    }

    /// Consumes the pen, returning the path data.
    pub fn into_string(self) -> String {
        self.data
    }

    fn command(&mut self, letter: char, points: &[(f64, f64)]) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push(letter);
        for (i, (x, y)) in points.iter().enumerate() {
            if i > 0 {
                self.data.push(' ');
            }
            // writing to a String can not fail
            let _ = match self.precision {
                Some(precision) => write!(self.data, "{x:.precision$},{y:.precision$}"),
                None => write!(self.data, "{x},{y}"),
            };
        }
    }
}

impl Pen for SvgPen {
    fn move_to(&mut self, x: f64, y: f64) {
        self.command('M', &[(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.command('L', &[(x, y)]);
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        self.command('Q', &[(cx0, cy0), (x, y)]);
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.command('C', &[(cx0, cy0), (cx1, cy1), (x, y)]);
    }

    fn close(&mut self) {
        self.command('Z', &[]);
    }
}

impl fmt::Display for SvgPen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

/// Pen that accumulates the bounding box of every point it receives,
/// control points included.
#[derive(Clone, Default, Debug)]
pub struct ControlBoundsPen {
    bounds: Option<BoundingBox<f64>>,
}

impl ControlBoundsPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulated bounds, or `None` if nothing was drawn.
    pub fn bounds(&self) -> Option<BoundingBox<f64>> {
        self.bounds
    }

    fn add(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        match self.bounds.as_mut() {
            Some(bounds) => bounds.add_point(point),
            None => self.bounds = BoundingBox::from_points([point]),
        }
    }
}

impl Pen for ControlBoundsPen {
    fn move_to(&mut self, x: f64, y: f64) {
        self.add(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.add(x, y);
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        self.add(cx0, cy0);
        self.add(x, y);
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.add(cx0, cy0);
        self.add(cx1, cy1);
        self.add(x, y);
    }

    fn close(&mut self) {}
}
