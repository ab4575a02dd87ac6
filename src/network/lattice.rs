//! Periodic cell handling in the xy projection.

use super::point::PointF;

/// Periodic lengths along x and y. A zero length means that axis is not periodic.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Lattice {
    pub x: f64,
    pub y: f64,
}
impl Lattice {
    pub const OPEN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn is_periodic(&self) -> bool {
        self.x > 0.0 || self.y > 0.0
    }
    /// Apply the minimum-image convention to a displacement.
    pub fn min_image(&self, d: PointF) -> PointF {
        PointF(wrap(d.0, self.x), wrap(d.1, self.y))
    }
    /// Displacement from `from` to `to`, unwrapped across the cell boundary.
    pub fn displacement(&self, from: PointF, to: PointF) -> PointF {
        self.min_image(to - from)
    }
}

fn wrap(d: f64, len: f64) -> f64 {
    if len > 0.0 && d.abs() > len * 0.5 {
        d - len * (d / len).round()
    } else {
        d
    }
}
