use std::ops::*;

/// A position or displacement in the xy projection.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointF(pub f64, pub f64);
impl PointF {
    /// Return the square of the length of the vector.
    pub fn sq_length(self) -> f64 {
        self.0 * self.0 + self.1 * self.1
    }
    /// Return the length of the vector.
    pub fn length(self) -> f64 {
        let slen = self.sq_length();
        if slen > f64::EPSILON {
            slen.sqrt()
        } else {
            0.0
        }
    }
    /// Find the z component of the cross product of this vector with another.
    pub fn cross(self, other: Self) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }
}
impl Add for PointF {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }
}
impl Sub for PointF {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1)
    }
}
impl AddAssign for PointF {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}
