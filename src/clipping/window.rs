use glam::DVec2;

use crate::error::{DiagramError, Result};
use crate::Point2;

/// Axis-aligned clip rectangle `[x0, x1] x [y0, y1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    min: DVec2,
    max: DVec2,
}

impl ClipWindow {
    /// Bounds must be finite with `x0 <= x1` and `y0 <= y1`.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self> {
        let finite = [x0, y0, x1, y1].iter().all(|v| v.is_finite());
        if !finite || x0 > x1 || y0 > y1 {
            return Err(DiagramError::InvalidWindow { x0, y0, x1, y1 });
        }
        Ok(Self {
            min: DVec2::new(x0, y0),
            max: DVec2::new(x1, y1),
        })
    }

    #[inline]
    pub fn x0(&self) -> f64 {
        self.min.x
    }

    #[inline]
    pub fn y0(&self) -> f64 {
        self.min.y
    }

    #[inline]
    pub fn x1(&self) -> f64 {
        self.max.x
    }

    #[inline]
    pub fn y1(&self) -> f64 {
        self.max.y
    }

    #[inline]
    pub fn min(&self) -> Point2 {
        Point2::from_dvec2(self.min)
    }

    #[inline]
    pub fn max(&self) -> Point2 {
        Point2::from_dvec2(self.max)
    }

    /// Inclusive containment test, widened by `slack` on every side.
    pub fn contains(&self, p: Point2, slack: f64) -> bool {
        let p = p.to_dvec2();
        p.cmpge(self.min - slack).all() && p.cmple(self.max + slack).all()
    }

    /// Exact inclusive containment. False for NaN components.
    #[inline]
    pub(crate) fn encloses(&self, p: DVec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Nearest point of the window to a finite `p`.
    #[inline]
    pub(crate) fn clamp(&self, p: DVec2) -> DVec2 {
        p.clamp(self.min, self.max)
    }
}
