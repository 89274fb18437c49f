use crate::core::config::AxisBounds;

/// (intensity, performance) in data units
pub type Point = (f64, f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn points(&self) -> [Point; 2] {
        [self.start, self.end]
    }
}

/// Logarithmic extents of the visible window.
///
/// Label offsets elsewhere are expressed as fractions of these spans, so
/// placement scales with the number of decades shown rather than with the
/// absolute axis range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisGeometry {
    pub bounds: AxisBounds,
    /// Decades spanned by the x axis
    pub xlogsize: f64,
    /// Decades spanned by the y axis
    pub ylogsize: f64,
    /// xlogsize / ylogsize
    pub m: f64,
}

impl AxisGeometry {
    pub fn new(bounds: &AxisBounds) -> Self {
        let xlogsize = (bounds.xmax / bounds.xmin).log10();
        let ylogsize = (bounds.ymax / bounds.ymin).log10();
        Self {
            bounds: *bounds,
            xlogsize,
            ylogsize,
            m: xlogsize / ylogsize,
        }
    }

    /// Multiplicative x offset covering `fraction` of the x span
    #[inline]
    pub fn x_offset(&self, fraction: f64) -> f64 {
        10f64.powf(self.xlogsize * fraction)
    }

    /// Multiplicative y offset covering `fraction` of the y span
    #[inline]
    pub fn y_offset(&self, fraction: f64) -> f64 {
        10f64.powf(self.ylogsize * fraction)
    }

    /// Visible part of `segment`, or `None` if it misses the window.
    ///
    /// Straight lines in log-log space stay straight on screen, so clipping
    /// runs on log10 coordinates. A start point at the origin is replaced by
    /// a point on the ray towards `end` lying below the window, which is
    /// exact for bandwidth lines through (0, 0).
    pub fn clip(&self, segment: &Segment) -> Option<Segment> {
        let b = &self.bounds;
        let mut start = segment.start;
        let end = segment.end;
        if start == (0.0, 0.0) && end.0 > 0.0 && end.1 > 0.0 {
            let scale = 0.1 * (b.xmin / end.0).min(b.ymin / end.1).min(1.0);
            start = (end.0 * scale, end.1 * scale);
        }
        if start.0 <= 0.0 || start.1 <= 0.0 || end.0 <= 0.0 || end.1 <= 0.0 {
            return None;
        }

        let (x0, y0) = (start.0.log10(), start.1.log10());
        let (dx, dy) = (end.0.log10() - x0, end.1.log10() - y0);
        let edges = [
            (-dx, x0 - b.xmin.log10()),
            (dx, b.xmax.log10() - x0),
            (-dy, y0 - b.ymin.log10()),
            (dy, b.ymax.log10() - y0),
        ];

        // Liang-Barsky
        let (mut t0, mut t1) = (0.0f64, 1.0f64);
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }

        let at = |t: f64| (10f64.powf(x0 + t * dx), 10f64.powf(y0 + t * dy));
        Some(Segment::new(at(t0), at(t1)))
    }
}
