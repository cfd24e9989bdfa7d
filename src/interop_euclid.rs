// Copyright 2026 the Bezspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to and from the [euclid] crate's 3D types.
//!
//! The unit tag of the euclid types is dropped when converting into this
//! crate, and chosen by the caller when converting out.
//!
//! [euclid]: https://docs.rs/euclid/

use crate::{Point3, Vec3};

impl<U> From<euclid::Point3D<f64, U>> for Point3 {
    #[inline]
    fn from(p: euclid::Point3D<f64, U>) -> Point3 {
        Point3::new(p.x, p.y, p.z)
    }
}

impl<U> From<Point3> for euclid::Point3D<f64, U> {
    #[inline]
    fn from(p: Point3) -> euclid::Point3D<f64, U> {
        euclid::Point3D::new(p.x, p.y, p.z)
    }
}

impl<U> From<euclid::Vector3D<f64, U>> for Vec3 {
    #[inline]
    fn from(v: euclid::Vector3D<f64, U>) -> Vec3 {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl<U> From<Vec3> for euclid::Vector3D<f64, U> {
    #[inline]
    fn from(v: Vec3) -> euclid::Vector3D<f64, U> {
        euclid::Vector3D::new(v.x, v.y, v.z)
    }
}
