// Copyright 2026 the Bezspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple 3D vector.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Point3;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A 3D vector.
///
/// This is intended primarily for a vector in the mathematical sense,
/// but it can be interpreted as a translation, and converted to and
/// from a [`Point3`] (vector relative to the origin).
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
    /// The z-coordinate.
    pub z: f64,
}

impl Vec3 {
    /// The vector (0, 0, 0).
    pub const ZERO: Vec3 = Vec3::new(0., 0., 0.);

    /// The unit vector along the positive x axis.
    pub const X: Vec3 = Vec3::new(1., 0., 0.);

    /// The unit vector along the positive y axis.
    pub const Y: Vec3 = Vec3::new(0., 1., 0.);

    /// The unit vector along the positive z axis.
    pub const Z: Vec3 = Vec3::new(0., 0., 1.);

    /// Create a new vector.
    #[inline(always)]
    pub const fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { x, y, z }
    }

    /// Convert this vector into a [`Point3`].
    #[inline(always)]
    pub const fn to_point(self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product of two vectors.
    ///
    /// The result is perpendicular to both inputs, following the right-hand rule.
    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Magnitude of vector.
    ///
    /// See [`Point3::distance`] for the same operation on [`Point3`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bezspline::Vec3;
    /// let v = Vec3::new(2.0, 3.0, 6.0);
    /// assert_eq!(v.hypot(), 7.0);
    /// ```
    #[inline]
    pub fn hypot(self) -> f64 {
        self.hypot2().sqrt()
    }

    /// Magnitude of vector.
    ///
    /// This is an alias for [`Vec3::hypot`].
    #[inline]
    pub fn length(self) -> f64 {
        self.hypot()
    }

    /// Magnitude squared of vector.
    #[inline]
    pub fn hypot2(self) -> f64 {
        self.dot(self)
    }

    /// Linearly interpolate between two vectors.
    #[inline]
    pub fn lerp(self, other: Vec3, t: f64) -> Vec3 {
        self + t * (other - self)
    }

    /// Returns a vector of [magnitude] 1.0 with the same direction as `self`.
    ///
    /// This produces `NaN` values when the magnitude is `0`.
    ///
    /// [magnitude]: Self::hypot
    #[inline]
    pub fn normalize(self) -> Vec3 {
        self / self.hypot()
    }

    /// Like [`Vec3::normalize`], but returns [`Vec3::ZERO`] when the
    /// magnitude is zero or the result would not be finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezspline::Vec3;
    /// assert_eq!(Vec3::new(0.0, 0.0, 4.0).normalize_or_zero(), Vec3::Z);
    /// assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
    /// ```
    #[inline]
    pub fn normalize_or_zero(self) -> Vec3 {
        let normalized = self.normalize();
        if normalized.is_finite() {
            normalized
        } else {
            Vec3::ZERO
        }
    }

    /// Is this vector [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Is this vector [`NaN`]?
    ///
    /// [`NaN`]: f64::is_nan
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    #[inline(always)]
    fn from(v: (f64, f64, f64)) -> Vec3 {
        Vec3 {
            x: v.0,
            y: v.1,
            z: v.2,
        }
    }
}

impl From<Vec3> for (f64, f64, f64) {
    #[inline(always)]
    fn from(v: Vec3) -> (f64, f64, f64) {
        (v.x, v.y, v.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, other: Vec3) {
        *self = *self + other;
    }
}

impl Sum for Vec3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Vec3::ZERO, |sum, v| sum + v)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, other: Vec3) {
        *self = *self - other;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, other: f64) -> Vec3 {
        Vec3 {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl MulAssign<f64> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    /// Note: division by a scalar is implemented by multiplying by the reciprocal.
    ///
    /// This is more efficient but has different roundoff behavior than division.
    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: f64) -> Vec3 {
        self * other.recip()
    }
}

impl DivAssign<f64> for Vec3 {
    #[inline]
    fn div_assign(&mut self, other: f64) {
        *self *= other.recip();
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline]
    fn neg(self) -> Vec3 {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "𝐯=(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.z, formatter)?;
        write!(formatter, ")")
    }
}

// Conversions to and from mint
#[cfg(feature = "mint")]
impl From<Vec3> for mint::Vector3<f64> {
    #[inline(always)]
    fn from(p: Vec3) -> mint::Vector3<f64> {
        mint::Vector3 {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector3<f64>> for Vec3 {
    #[inline(always)]
    fn from(p: mint::Vector3<f64>) -> Vec3 {
        Vec3 {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let v = Vec3::new(1.2332421, 532.10721213123, -3.0);
        let s = format!("{v:.2}");
        assert_eq!(s.as_str(), "𝐯=(1.23, 532.11, -3.00)");
    }

    #[test]
    fn cross_is_right_handed() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn normalize_degenerate() {
        assert!(Vec3::ZERO.normalize().is_nan());
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
        let n = Vec3::new(3.0, 0.0, 4.0).normalize_or_zero();
        assert!((n.hypot() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sum() {
        let total: Vec3 = [Vec3::X, Vec3::Y, Vec3::Z, Vec3::X].into_iter().sum();
        assert_eq!(total, Vec3::new(2.0, 1.0, 1.0));
    }
}
