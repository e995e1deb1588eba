/// Interface for accepting a sequence of path commands.
///
/// This is the drawing target for outline rendering. Implementations only
/// rely on these five calls, so the same decomposition can feed a canvas,
/// a polygon flattener or a bounds accumulator.
///
/// AbstractPen in Python terms.
/// <https://github.com/fonttools/fonttools/blob/78e10d8b42095b709cd4125e592d914d3ed1558e/Lib/fontTools/pens/basePen.py#L54>
pub trait Pen {
    /// Emit a command to begin a new subpath at (x, y).
    fn move_to(&mut self, x: f64, y: f64);

    /// Emit a line segment from the current point to (x, y).
    fn line_to(&mut self, x: f64, y: f64);

    /// Emit a quadratic bezier segment from the current point with a control
    /// point at (cx0, cy0) and ending at (x, y).
    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64);

    /// Emit a cubic bezier segment from the current point with control
    /// points at (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64);

    /// Emit a command to close the current subpath.
    fn close(&mut self);
}

/// A single recorded pen call.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PenCommand {
    /// Begin a new subpath at (x, y).
    MoveTo { x: f64, y: f64 },
    /// Draw a line from the current point to (x, y).
    LineTo { x: f64, y: f64 },
    /// Draw a quadratic bezier from the current point with a control point at
    /// (cx0, cy0) and ending at (x, y).
    QuadTo { cx0: f64, cy0: f64, x: f64, y: f64 },
    /// Draw a cubic bezier from the current point with control points at
    /// (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    CurveTo {
        cx0: f64,
        cy0: f64,
        cx1: f64,
        cy1: f64,
        x: f64,
        y: f64,
    },
    /// Close the current subpath.
    Close,
}

impl PenCommand {
    /// Replays this command on `pen`.
    pub fn apply_to(&self, pen: &mut impl Pen) {
        match *self {
            PenCommand::MoveTo { x, y } => pen.move_to(x, y),
            PenCommand::LineTo { x, y } => pen.line_to(x, y),
            PenCommand::QuadTo { cx0, cy0, x, y } => pen.quad_to(cx0, cy0, x, y),
            PenCommand::CurveTo {
                cx0,
                cy0,
                cx1,
                cy1,
                x,
                y,
            } => pen.curve_to(cx0, cy0, cx1, cy1, x, y),
            PenCommand::Close => pen.close(),
        }
    }
}

impl Pen for Vec<PenCommand> {
    fn move_to(&mut self, x: f64, y: f64) {
        self.push(PenCommand::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(PenCommand::LineTo { x, y })
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        self.push(PenCommand::QuadTo { cx0, cy0, x, y })
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.push(PenCommand::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        })
    }

    fn close(&mut self) {
        self.push(PenCommand::Close)
    }
}

impl<P: Pen + ?Sized> Pen for &mut P {
    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y)
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        (**self).quad_to(cx0, cy0, x, y)
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        (**self).curve_to(cx0, cy0, cx1, cy1, x, y)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Collects the drawing output as a kurbo path.
#[cfg(feature = "kurbo")]
impl Pen for kurbo::BezPath {
    fn move_to(&mut self, x: f64, y: f64) {
        kurbo::BezPath::move_to(self, (x, y))
    }

    fn line_to(&mut self, x: f64, y: f64) {
        kurbo::BezPath::line_to(self, (x, y))
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        kurbo::BezPath::quad_to(self, (cx0, cy0), (x, y))
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        kurbo::BezPath::curve_to(self, (cx0, cy0), (cx1, cy1), (x, y))
    }

    fn close(&mut self) {
        self.close_path()
    }
}

/// Pen that drops all drawing output into the ether.
pub struct NullPen;

impl Pen for NullPen {
    fn move_to(&mut self, _x: f64, _y: f64) {}
    fn line_to(&mut self, _x: f64, _y: f64) {}
    fn quad_to(&mut self, _cx0: f64, _cy0: f64, _x: f64, _y: f64) {}
    fn curve_to(&mut self, _cx0: f64, _cy0: f64, _cx1: f64, _cy1: f64, _x: f64, _y: f64) {}
    fn close(&mut self) {}
}
