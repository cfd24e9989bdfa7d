// Copyright 2026 the Bezspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 3D point.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::Vec3;

/// A 3D point.
///
/// Control points of a [`Spline`](crate::Spline), both anchors and tangents,
/// are `Point3`s.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
    /// The z coordinate.
    pub z: f64,
}

impl Point3 {
    /// The point (0, 0, 0).
    pub const ZERO: Point3 = Point3::new(0., 0., 0.);

    /// The point at the origin; (0, 0, 0).
    pub const ORIGIN: Point3 = Point3::new(0., 0., 0.);

    /// Create a new `Point3` with the provided `x`, `y` and `z` coordinates.
    #[inline(always)]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    /// Convert this point into a [`Vec3`].
    #[inline(always)]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Linearly interpolate between two points.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate along the line.
    #[inline]
    pub fn lerp(self, other: Point3, t: f64) -> Point3 {
        self.to_vec3().lerp(other.to_vec3(), t).to_point()
    }

    /// Determine the midpoint of two points.
    #[inline]
    pub fn midpoint(self, other: Point3) -> Point3 {
        Point3::new(
            0.5 * (self.x + other.x),
            0.5 * (self.y + other.y),
            0.5 * (self.z + other.z),
        )
    }

    /// Reflect `other` through this point.
    ///
    /// The result is `2 * self - other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezspline::Point3;
    /// let anchor = Point3::new(1.0, 0.0, 0.0);
    /// let handle = Point3::new(0.5, -0.5, 0.0);
    /// assert_eq!(anchor.mirror(handle), Point3::new(1.5, 0.5, 0.0));
    /// ```
    #[inline]
    pub fn mirror(self, other: Point3) -> Point3 {
        self + (self - other)
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point3) -> f64 {
        (self - other).hypot()
    }

    /// Squared Euclidean distance.
    #[inline]
    pub fn distance_squared(self, other: Point3) -> f64 {
        (self - other).hypot2()
    }

    /// Is this point [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Is this point [`NaN`]?
    ///
    /// [`NaN`]: f64::is_nan
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

impl From<(f64, f64, f64)> for Point3 {
    #[inline(always)]
    fn from(v: (f64, f64, f64)) -> Point3 {
        Point3 {
            x: v.0,
            y: v.1,
            z: v.2,
        }
    }
}

impl From<Point3> for (f64, f64, f64) {
    #[inline(always)]
    fn from(v: Point3) -> (f64, f64, f64) {
        (v.x, v.y, v.z)
    }
}

impl Add<Vec3> for Point3 {
    type Output = Point3;

    #[inline]
    fn add(self, other: Vec3) -> Self {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign<Vec3> for Point3 {
    #[inline]
    fn add_assign(&mut self, other: Vec3) {
        *self = *self + other;
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Point3;

    #[inline]
    fn sub(self, other: Vec3) -> Self {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign<Vec3> for Point3 {
    #[inline]
    fn sub_assign(&mut self, other: Vec3) {
        *self = *self - other;
    }
}

impl Add<(f64, f64, f64)> for Point3 {
    type Output = Point3;

    #[inline]
    fn add(self, (x, y, z): (f64, f64, f64)) -> Self {
        Point3::new(self.x + x, self.y + y, self.z + z)
    }
}

impl Sub<(f64, f64, f64)> for Point3 {
    type Output = Point3;

    #[inline]
    fn sub(self, (x, y, z): (f64, f64, f64)) -> Self {
        Point3::new(self.x - x, self.y - y, self.z - z)
    }
}

impl Sub<Point3> for Point3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, other: Point3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl fmt::Debug for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.z, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(feature = "mint")]
impl From<Point3> for mint::Point3<f64> {
    #[inline(always)]
    fn from(p: Point3) -> mint::Point3<f64> {
        mint::Point3 {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point3<f64>> for Point3 {
    #[inline(always)]
    fn from(p: mint::Point3<f64>) -> Point3 {
        Point3 {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}
