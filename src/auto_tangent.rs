// Copyright 2026 the Bezspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tangent placement derived from neighbouring anchors.
//!
//! These are pure functions of anchor positions. [`Spline`](crate::Spline)
//! applies them after edits when auto-tangent mode is on, and uses
//! [`smooth_tangents`] to seed the handles of a knot inserted by a split.

use crate::{Point3, Vec3};

/// Tangent positions for a knot, as computed by [`smooth_tangents`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothTangents {
    /// The tangent pointing toward the previous anchor.
    pub in_tangent: Point3,
    /// The tangent pointing toward the next anchor.
    pub out_tangent: Point3,
}

/// Place both tangents of `anchor` so the curve passes through it smoothly.
///
/// The tangent direction is the normalized bisector of the directions to the
/// previous and next anchors, and each tangent reaches half of the way to its
/// neighbour. A missing neighbour contributes no direction and leaves its
/// tangent on the anchor. Coincident anchors produce a zero direction, in
/// which case both tangents collapse onto the anchor.
///
/// # Examples
///
/// ```
/// use bezspline::{auto_tangent::smooth_tangents, Point3};
/// let t = smooth_tangents(
///     Some(Point3::new(-2.0, 0.0, 0.0)),
///     Point3::ORIGIN,
///     Some(Point3::new(4.0, 0.0, 0.0)),
/// );
/// assert_eq!(t.in_tangent, Point3::new(-1.0, 0.0, 0.0));
/// assert_eq!(t.out_tangent, Point3::new(2.0, 0.0, 0.0));
/// ```
pub fn smooth_tangents(prev: Option<Point3>, anchor: Point3, next: Option<Point3>) -> SmoothTangents {
    let mut dir = Vec3::ZERO;
    let mut dist_prev = 0.0;
    let mut dist_next = 0.0;
    if let Some(prev) = prev {
        let offset = prev - anchor;
        dir += offset.normalize_or_zero();
        dist_prev = offset.hypot();
    }
    if let Some(next) = next {
        let offset = next - anchor;
        dir -= offset.normalize_or_zero();
        dist_next = offset.hypot();
    }
    let dir = dir.normalize_or_zero();
    SmoothTangents {
        in_tangent: anchor + dir * (0.5 * dist_prev),
        out_tangent: anchor - dir * (0.5 * dist_next),
    }
}

/// The single tangent at the end of an open spline.
///
/// It sits halfway between the end anchor and its neighbouring anchor.
#[inline]
pub fn end_tangent(end: Point3, neighbour: Point3) -> Point3 {
    end.midpoint(neighbour)
}
