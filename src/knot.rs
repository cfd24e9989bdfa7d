// Copyright 2026 the Bezspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchors together with their tangent handles.

use core::fmt;

use crate::{Point3, Vec3};

/// An anchor of a [`Spline`](crate::Spline) along with its two tangents.
///
/// The curve passes through the anchor. The in-tangent shapes the segment
/// arriving at the anchor and the out-tangent shapes the segment leaving it.
/// On an open spline the first knot has no in-tangent and the last knot has
/// no out-tangent; on a closed spline every knot has both.
#[derive(Clone, Copy, PartialEq)]
pub struct Knot {
    pub(crate) in_tangent: Option<Point3>,
    pub(crate) anchor: Point3,
    pub(crate) out_tangent: Option<Point3>,
}

/// The role a position in the flat point sequence of a spline plays.
///
/// Each variant carries the index of the [`Knot`] the point belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointRole {
    /// The anchor of the knot.
    Anchor(usize),
    /// The tangent shaping the segment that arrives at the knot.
    InTangent(usize),
    /// The tangent shaping the segment that leaves the knot.
    OutTangent(usize),
}

impl PointRole {
    /// Resolve a flat point index for a spline with `knot_count` knots.
    ///
    /// The flat layout is `A0, O0, I1, A1, O1, I2, A2, ...`; a closed spline
    /// ends in `O(n-1), I0`, so its final point wraps back to the first knot.
    #[inline]
    pub(crate) fn from_index(index: usize, knot_count: usize) -> PointRole {
        let knot = index / 3;
        match index % 3 {
            0 => PointRole::Anchor(knot),
            1 => PointRole::OutTangent(knot),
            _ => PointRole::InTangent((knot + 1) % knot_count),
        }
    }

    /// The index of the knot this point belongs to.
    #[inline]
    pub fn knot(self) -> usize {
        match self {
            PointRole::Anchor(k) | PointRole::InTangent(k) | PointRole::OutTangent(k) => k,
        }
    }

    /// Returns `true` for anchors.
    #[inline]
    pub fn is_anchor(self) -> bool {
        matches!(self, PointRole::Anchor(_))
    }
}

impl Knot {
    /// Create a knot with both tangents present.
    #[inline]
    pub fn new(in_tangent: Point3, anchor: Point3, out_tangent: Point3) -> Knot {
        Knot {
            in_tangent: Some(in_tangent),
            anchor,
            out_tangent: Some(out_tangent),
        }
    }

    /// The point the curve passes through.
    #[inline]
    pub fn anchor(&self) -> Point3 {
        self.anchor
    }

    /// The tangent toward the previous knot, if this knot has one.
    #[inline]
    pub fn in_tangent(&self) -> Option<Point3> {
        self.in_tangent
    }

    /// The tangent toward the next knot, if this knot has one.
    #[inline]
    pub fn out_tangent(&self) -> Option<Point3> {
        self.out_tangent
    }

    /// The in-tangent, or the anchor itself when the knot has none.
    ///
    /// A missing handle behaves like a handle collapsed onto its anchor.
    #[inline]
    pub fn in_point(&self) -> Point3 {
        self.in_tangent.unwrap_or(self.anchor)
    }

    /// The out-tangent, or the anchor itself when the knot has none.
    #[inline]
    pub fn out_point(&self) -> Point3 {
        self.out_tangent.unwrap_or(self.anchor)
    }

    /// Move the anchor, carrying both tangents along rigidly.
    pub(crate) fn translate(&mut self, delta: Vec3) {
        self.anchor += delta;
        if let Some(p) = &mut self.in_tangent {
            *p += delta;
        }
        if let Some(p) = &mut self.out_tangent {
            *p += delta;
        }
    }

    pub(crate) fn tangent_mut(&mut self, role: PointRole) -> Option<&mut Point3> {
        match role {
            PointRole::InTangent(_) => self.in_tangent.as_mut(),
            PointRole::OutTangent(_) => self.out_tangent.as_mut(),
            PointRole::Anchor(_) => None,
        }
    }

    /// Place the tangent opposite to `moved` so the join stays smooth.
    ///
    /// The opposite tangent keeps its distance from the anchor but is turned
    /// to point directly away from `moved`.
    pub(crate) fn mirror_opposite(&mut self, moved: PointRole) {
        let anchor = self.anchor;
        let Some(moved_pos) = (match moved {
            PointRole::InTangent(_) => self.in_tangent,
            PointRole::OutTangent(_) => self.out_tangent,
            PointRole::Anchor(_) => None,
        }) else {
            return;
        };
        let opposite = match moved {
            PointRole::InTangent(_) => self.out_tangent.as_mut(),
            PointRole::OutTangent(_) => self.in_tangent.as_mut(),
            PointRole::Anchor(_) => None,
        };
        if let Some(opposite) = opposite {
            let dist = anchor.distance(*opposite);
            let dir = (anchor - moved_pos).normalize_or_zero();
            *opposite = anchor + dir * dist;
        }
    }
}

impl fmt::Debug for Knot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.in_tangent, self.out_tangent) {
            (Some(i), Some(o)) => write!(f, "in: {i:?}, anchor: {:?}, out: {o:?}", self.anchor),
            (Some(i), None) => write!(f, "in: {i:?}, anchor: {:?}, out: n/a", self.anchor),
            (None, Some(o)) => write!(f, "in: n/a, anchor: {:?}, out: {o:?}", self.anchor),
            (None, None) => write!(f, "in: n/a, anchor: {:?}, out: n/a", self.anchor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_index_roles() {
        // Open spline with 3 knots: A0 O0 I1 A1 O1 I2 A2
        let roles: Vec<_> = (0..7).map(|i| PointRole::from_index(i, 3)).collect();
        assert_eq!(
            roles,
            [
                PointRole::Anchor(0),
                PointRole::OutTangent(0),
                PointRole::InTangent(1),
                PointRole::Anchor(1),
                PointRole::OutTangent(1),
                PointRole::InTangent(2),
                PointRole::Anchor(2),
            ]
        );
        // Closed spline with 2 knots: the last point is the first knot's in-tangent.
        assert_eq!(PointRole::from_index(5, 2), PointRole::InTangent(0));
        assert_eq!(PointRole::from_index(4, 2), PointRole::OutTangent(1));
    }

    #[test]
    fn translate_moves_handles_rigidly() {
        let mut knot = Knot {
            in_tangent: None,
            anchor: Point3::new(0.0, 0.0, 0.0),
            out_tangent: Some(Point3::new(1.0, 1.0, 0.0)),
        };
        knot.translate(Vec3::new(0.5, 0.0, -1.0));
        assert_eq!(knot.anchor(), Point3::new(0.5, 0.0, -1.0));
        assert_eq!(knot.out_tangent(), Some(Point3::new(1.5, 1.0, -1.0)));
        assert_eq!(knot.in_tangent(), None);
        assert_eq!(knot.in_point(), knot.anchor());
    }

    #[test]
    fn mirror_keeps_opposite_length() {
        let mut knot = Knot::new(
            Point3::new(-2.0, 0.0, 0.0),
            Point3::ORIGIN,
            Point3::new(1.0, 0.0, 0.0),
        );
        knot.out_tangent = Some(Point3::new(0.0, 3.0, 0.0));
        knot.mirror_opposite(PointRole::OutTangent(0));
        let opposite = knot.in_tangent().unwrap();
        assert!((opposite - Point3::new(0.0, -2.0, 0.0)).hypot() < 1e-12);
    }
}
