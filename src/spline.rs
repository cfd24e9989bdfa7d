// Copyright 2026 the Bezspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editable piecewise cubic Bézier splines.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::auto_tangent::{end_tangent, smooth_tangents};
use crate::common::floor_fract;
use crate::{
    evenly_spaced_points, CubicBez, InvalidOperation, Knot, Nearest, ParamCurve, ParamCurveArclen,
    ParamCurveNearest, Point3, PointRole, SplineError, Vec3,
};

/// A chain of cubic Bézier segments that can be edited interactively.
///
/// A spline is a sequence of [`Knot`]s. Consecutive knots are joined by a
/// cubic segment running from one anchor, through its out-tangent and the
/// next knot's in-tangent, to the next anchor. A closed spline has one more
/// segment joining the last knot back to the first.
///
/// Points are also addressed through a flat view that interleaves anchors
/// and tangents: `A0, O0, I1, A1, O1, I2, A2, ...`. Every index divisible by
/// three is an anchor. A closed spline appends the last out-tangent and the
/// first in-tangent, so an open spline has `3 * segment_count + 1` points and
/// a closed one has `3 * segment_count`.
///
/// With auto-tangent mode on, every tangent is derived from the neighbouring
/// anchors and recomputed after each edit. With it off, tangents only move
/// when they are moved explicitly or carried along by their anchor.
///
/// # Examples
///
/// ```
/// use bezspline::{Point3, Spline};
/// let mut spline = Spline::new(Point3::ORIGIN);
/// spline.add_segment(Point3::new(2.0, 0.0, 0.0)).unwrap();
/// assert_eq!(spline.segment_count(), 2);
/// assert_eq!(spline.point_count(), 7);
/// assert_eq!(spline.eval(1.0), Point3::new(2.0, 0.0, 0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::SplineData", into = "crate::SplineData")
)]
pub struct Spline {
    pub(crate) knots: Vec<Knot>,
    pub(crate) closed: bool,
    pub(crate) auto_tangent: bool,
}

/// Knot indices touched by a single edit.
type Affected = SmallVec<[usize; 3]>;

impl Spline {
    /// Create a single-segment spline centred on `center`.
    ///
    /// The anchors sit one unit to either side along the x axis, with the
    /// tangents offset diagonally so the segment is gently S-shaped. The
    /// spline is open and auto-tangent mode is off.
    pub fn new(center: Point3) -> Spline {
        Spline {
            knots: Vec::from([
                Knot {
                    in_tangent: None,
                    anchor: center + Vec3::new(-1.0, 0.0, 0.0),
                    out_tangent: Some(center + Vec3::new(-0.5, 0.5, 0.0)),
                },
                Knot {
                    in_tangent: Some(center + Vec3::new(0.5, -0.5, 0.0)),
                    anchor: center + Vec3::new(1.0, 0.0, 0.0),
                    out_tangent: None,
                },
            ]),
            closed: false,
            auto_tangent: false,
        }
    }

    /// Create a spline from its flat point sequence.
    ///
    /// The points follow the layout described on [`Spline`]. Auto-tangent
    /// mode is off, so the tangents are taken as given.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::MalformedPath`] unless the points describe at
    /// least one segment: `3n + 1` points with `n >= 1` for an open spline,
    /// or `3n` points with `n >= 1` for a closed one.
    pub fn from_points<I>(points: I, closed: bool) -> Result<Spline, SplineError>
    where
        I: IntoIterator<Item = Point3>,
    {
        let points: Vec<Point3> = points.into_iter().collect();
        let len = points.len();
        let knot_count = match (closed, len % 3) {
            (false, 1) if len >= 4 => (len + 2) / 3,
            (true, 0) if len >= 3 => len / 3,
            _ => return Err(SplineError::MalformedPath { len, closed }),
        };
        let knots = (0..knot_count)
            .map(|k| {
                let i = 3 * k;
                let in_tangent = match k {
                    0 if closed => Some(points[len - 1]),
                    0 => None,
                    _ => Some(points[i - 1]),
                };
                let out_tangent = points.get(i + 1).copied();
                Knot {
                    in_tangent,
                    anchor: points[i],
                    out_tangent,
                }
            })
            .collect();
        Ok(Spline {
            knots,
            closed,
            auto_tangent: false,
        })
    }

    /// The knots, in order along the curve.
    #[inline]
    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// Whether the last knot is joined back to the first.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether tangents are derived from the anchors.
    #[inline]
    pub fn is_auto_tangent(&self) -> bool {
        self.auto_tangent
    }

    /// The number of cubic segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        if self.closed {
            self.knots.len()
        } else {
            self.knots.len() - 1
        }
    }

    /// The number of points in the flat view, anchors and tangents together.
    #[inline]
    pub fn point_count(&self) -> usize {
        if self.closed {
            3 * self.knots.len()
        } else {
            3 * self.knots.len() - 2
        }
    }

    /// The role of the point at flat index `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::IndexOutOfRange`] if `index >= point_count()`.
    pub fn role(&self, index: usize) -> Result<PointRole, SplineError> {
        self.check_point_index(index)?;
        Ok(PointRole::from_index(index, self.knots.len()))
    }

    /// The point at flat index `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::IndexOutOfRange`] if `index >= point_count()`.
    pub fn point(&self, index: usize) -> Result<Point3, SplineError> {
        let role = self.role(index)?;
        Ok(self.point_at(role))
    }

    /// Iterate over the flat view of the points.
    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        let knot_count = self.knots.len();
        (0..self.point_count()).map(move |i| self.point_at(PointRole::from_index(i, knot_count)))
    }

    /// The four control points of segment `index`.
    ///
    /// On a closed spline the last segment runs from the last anchor back to
    /// the first.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::IndexOutOfRange`] if `index >= segment_count()`.
    pub fn segment_points(&self, index: usize) -> Result<[Point3; 4], SplineError> {
        Ok(self.segment(index)?.to_points())
    }

    /// The cubic segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::IndexOutOfRange`] if `index >= segment_count()`.
    pub fn segment(&self, index: usize) -> Result<CubicBez, SplineError> {
        let len = self.segment_count();
        if index >= len {
            return Err(SplineError::IndexOutOfRange { index, len });
        }
        Ok(self.segment_unchecked(index))
    }

    /// Iterate over the cubic segments in order.
    pub fn segments(&self) -> impl Iterator<Item = CubicBez> + '_ {
        (0..self.segment_count()).map(move |i| self.segment_unchecked(i))
    }

    /// Open or close the spline.
    ///
    /// Closing adds a segment from the last anchor back to the first. Its
    /// tangents mirror the existing tangents at those anchors, so the joins
    /// start out smooth. Opening removes that segment again. Setting the
    /// current value does nothing, and neither does opening a closed spline
    /// with a single anchor, which would leave no segments.
    pub fn set_closed(&mut self, closed: bool) {
        if closed == self.closed {
            return;
        }
        let last = self.knots.len() - 1;
        if !closed && last == 0 {
            log::debug!("kept single-anchor spline closed");
            return;
        }
        if closed {
            let k = &mut self.knots[last];
            k.out_tangent = Some(k.anchor.mirror(k.in_point()));
            let k = &mut self.knots[0];
            k.in_tangent = Some(k.anchor.mirror(k.out_point()));
            self.closed = true;
            if self.auto_tangent {
                self.smooth_knots([0, last]);
            }
        } else {
            self.knots[last].out_tangent = None;
            self.knots[0].in_tangent = None;
            self.closed = false;
            if self.auto_tangent {
                self.apply_end_tangents();
            }
        }
        log::debug!("spline closed: {closed}");
    }

    /// Turn auto-tangent mode on or off.
    ///
    /// Turning it on immediately recomputes every tangent. Turning it off
    /// leaves the tangents where they are.
    pub fn set_auto_tangent(&mut self, auto_tangent: bool) {
        self.auto_tangent = auto_tangent;
        if auto_tangent {
            self.smooth_knots(0..self.knots.len());
            self.apply_end_tangents();
        }
    }

    /// Append a segment ending at `anchor`.
    ///
    /// The new out-tangent of the former last anchor mirrors its in-tangent,
    /// and the new anchor's in-tangent sits halfway between that out-tangent
    /// and the new anchor.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperation::AppendToClosed`] if the spline is closed.
    pub fn add_segment(&mut self, anchor: Point3) -> Result<(), SplineError> {
        if self.closed {
            return Err(InvalidOperation::AppendToClosed.into());
        }
        let last_index = self.knots.len() - 1;
        let last = &mut self.knots[last_index];
        let out = last.anchor.mirror(last.in_point());
        last.out_tangent = Some(out);
        self.knots.push(Knot {
            in_tangent: Some(out.midpoint(anchor)),
            anchor,
            out_tangent: None,
        });
        let new = self.knots.len() - 1;
        if self.auto_tangent {
            self.smooth_knots([new - 1, new]);
            self.apply_end_tangents();
        }
        log::debug!("appended segment ending at {anchor:?}");
        Ok(())
    }

    /// Insert a new anchor into segment `segment_index`, splitting it in two.
    ///
    /// The new anchor's tangents are placed by the auto-tangent rule. With
    /// auto-tangent mode on, its neighbours are recomputed as well.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::IndexOutOfRange`] if
    /// `segment_index >= segment_count()`.
    pub fn split_segment(&mut self, anchor: Point3, segment_index: usize) -> Result<(), SplineError> {
        let len = self.segment_count();
        if segment_index >= len {
            return Err(SplineError::IndexOutOfRange {
                index: segment_index,
                len,
            });
        }
        let k = segment_index + 1;
        self.knots.insert(k, Knot::new(anchor, anchor, anchor));
        if self.auto_tangent {
            self.smooth_knots(self.neighbourhood(k));
            self.apply_end_tangents();
        } else {
            self.smooth_knots([k]);
        }
        log::debug!("split segment {segment_index} at {anchor:?}");
        Ok(())
    }

    /// Remove the anchor at flat index `anchor_index` along with its tangents.
    ///
    /// The two segments meeting at the anchor merge into one, keeping the
    /// outer tangents. Removing an end anchor of an open spline drops the
    /// end segment instead. A spline is never reduced below one segment (two
    /// when closed); such a removal is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::IndexOutOfRange`] if
    /// `anchor_index >= point_count()`, or
    /// [`InvalidOperation::NotAnAnchor`] if it names a tangent.
    pub fn remove_segment(&mut self, anchor_index: usize) -> Result<(), SplineError> {
        let role = self.role(anchor_index)?;
        let PointRole::Anchor(k) = role else {
            return Err(InvalidOperation::NotAnAnchor(anchor_index).into());
        };
        let segments = self.segment_count();
        if !(segments > 2 || (!self.closed && segments > 1)) {
            log::debug!("ignored removal of anchor {anchor_index}: only {segments} segments left");
            return Ok(());
        }
        let last = self.knots.len() - 1;
        if k == 0 {
            self.knots.remove(0);
            if !self.closed {
                self.knots[0].in_tangent = None;
            }
        } else if k == last && !self.closed {
            self.knots.pop();
            self.knots[k - 1].out_tangent = None;
        } else {
            self.knots.remove(k);
        }
        if self.auto_tangent {
            // The knots on either side of the removed one now neighbour each other.
            let remaining = self.knots.len();
            let mut affected = Affected::new();
            if self.closed {
                affected.push((k + remaining - 1) % remaining);
                affected.push(k % remaining);
            } else {
                affected.extend(k.checked_sub(1));
                if k < remaining {
                    affected.push(k);
                }
            }
            self.smooth_knots(affected);
            self.apply_end_tangents();
        }
        log::debug!("removed anchor {anchor_index}");
        Ok(())
    }

    /// Move the point at flat index `index` to `pos`.
    ///
    /// Moving an anchor carries its tangents along. In auto-tangent mode the
    /// tangents of the moved anchor and of its neighbouring anchors are
    /// recomputed instead, and the end tangents of an open spline are placed
    /// again, so tangents other than the moved anchor's may change.
    ///
    /// Moving a tangent turns the opposite tangent of the same anchor to keep
    /// the join smooth, preserving its distance from the anchor.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::IndexOutOfRange`] if `index >= point_count()`,
    /// or [`InvalidOperation::MoveDerivedTangent`] if `index` names a tangent
    /// while auto-tangent mode is on.
    pub fn move_point(&mut self, index: usize, pos: Point3) -> Result<(), SplineError> {
        let role = self.role(index)?;
        let k = role.knot();
        if let PointRole::Anchor(_) = role {
            if self.auto_tangent {
                self.knots[k].anchor = pos;
                self.smooth_knots(self.neighbourhood(k));
                self.apply_end_tangents();
            } else {
                let delta = pos - self.knots[k].anchor;
                self.knots[k].translate(delta);
            }
        } else {
            if self.auto_tangent {
                return Err(InvalidOperation::MoveDerivedTangent.into());
            }
            let knot = &mut self.knots[k];
            if let Some(tangent) = knot.tangent_mut(role) {
                *tangent = pos;
            }
            knot.mirror_opposite(role);
        }
        log::trace!("moved point {index} to {pos:?}");
        Ok(())
    }

    /// Evaluate the spline at `t`, where `0` is the first anchor and `1` is
    /// the end of the last segment.
    ///
    /// Each segment covers an equal share of the parameter range, regardless
    /// of its length. `t` is clamped to `[0, 1]`.
    pub fn eval(&self, t: f64) -> Point3 {
        let n = self.segment_count();
        let (whole, local) = floor_fract(t.clamp(0.0, 1.0) * n as f64);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the clamped parameter scales into 0..=segment_count"
        )]
        let (index, local) = match whole as usize {
            i if i >= n => (n - 1, 1.0),
            i => (i, local),
        };
        self.segment_unchecked(index).eval(local)
    }

    /// Points spaced roughly `spacing` apart along the spline.
    ///
    /// See [`evenly_spaced_points`](crate::evenly_spaced_points) for how the
    /// samples are chosen; [`DEFAULT_RESOLUTION`](crate::DEFAULT_RESOLUTION)
    /// is a reasonable `resolution`.
    pub fn evenly_spaced_points(&self, spacing: f64, resolution: f64) -> Vec<Point3> {
        evenly_spaced_points(self.segments(), spacing, resolution)
    }

    /// The total arc length, accurate to within `accuracy`.
    pub fn arclen(&self, accuracy: f64) -> f64 {
        let accuracy = accuracy / self.segment_count() as f64;
        self.segments().map(|seg| seg.arclen(accuracy)).sum()
    }

    /// The flat index of the anchor closest to `p`, if any lies strictly
    /// within `max_distance`.
    pub fn nearest_anchor(&self, p: Point3, max_distance: f64) -> Option<usize> {
        let mut best = None;
        let mut best_dist = max_distance;
        for (k, knot) in self.knots.iter().enumerate() {
            let dist = knot.anchor.distance(p);
            if dist < best_dist {
                best_dist = dist;
                best = Some(3 * k);
            }
        }
        best
    }

    /// The segment closest to `p`, if any passes strictly within
    /// `max_distance`, along with the nearest position on it.
    pub fn nearest_segment(
        &self,
        p: Point3,
        max_distance: f64,
        accuracy: f64,
    ) -> Option<(usize, Nearest)> {
        let mut best = None;
        let max_distance = max_distance.max(0.0);
        let mut best_dist_sq = max_distance * max_distance;
        for (i, seg) in self.segments().enumerate() {
            let nearest = seg.nearest(p, accuracy);
            if nearest.distance_sq < best_dist_sq {
                best_dist_sq = nearest.distance_sq;
                best = Some((i, nearest));
            }
        }
        best
    }

    fn check_point_index(&self, index: usize) -> Result<(), SplineError> {
        let len = self.point_count();
        if index >= len {
            return Err(SplineError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    fn point_at(&self, role: PointRole) -> Point3 {
        match role {
            PointRole::Anchor(k) => self.knots[k].anchor,
            PointRole::OutTangent(k) => self.knots[k].out_point(),
            PointRole::InTangent(k) => self.knots[k].in_point(),
        }
    }

    fn segment_unchecked(&self, index: usize) -> CubicBez {
        let from = &self.knots[index];
        let to = &self.knots[(index + 1) % self.knots.len()];
        CubicBez::new(from.anchor, from.out_point(), to.in_point(), to.anchor)
    }

    /// The knot and its existing neighbours.
    fn neighbourhood(&self, k: usize) -> Affected {
        let n = self.knots.len();
        let mut affected = Affected::new();
        if self.closed {
            for i in [k + n - 1, k, k + 1] {
                let i = i % n;
                if !affected.contains(&i) {
                    affected.push(i);
                }
            }
        } else {
            affected.extend(k.checked_sub(1));
            affected.push(k);
            if k + 1 < n {
                affected.push(k + 1);
            }
        }
        affected
    }

    fn neighbour_anchors(&self, k: usize) -> (Option<Point3>, Option<Point3>) {
        let n = self.knots.len();
        let prev = match k {
            0 if self.closed => Some(self.knots[n - 1].anchor),
            0 => None,
            _ => Some(self.knots[k - 1].anchor),
        };
        let next = if k + 1 < n {
            Some(self.knots[k + 1].anchor)
        } else if self.closed {
            Some(self.knots[0].anchor)
        } else {
            None
        };
        (prev, next)
    }

    /// Recompute the tangents of each listed knot from its neighbours.
    ///
    /// Only tangents the knot already has are written.
    fn smooth_knots(&mut self, knots: impl IntoIterator<Item = usize>) {
        for k in knots {
            let (prev, next) = self.neighbour_anchors(k);
            let knot = &mut self.knots[k];
            let smooth = smooth_tangents(prev, knot.anchor, next);
            if knot.in_tangent.is_some() {
                knot.in_tangent = Some(smooth.in_tangent);
            }
            if knot.out_tangent.is_some() {
                knot.out_tangent = Some(smooth.out_tangent);
            }
        }
    }

    /// Place the lone tangents at both ends of an open spline.
    fn apply_end_tangents(&mut self) {
        if self.closed {
            return;
        }
        let n = self.knots.len();
        let second = self.knots[1].anchor;
        let first = &mut self.knots[0];
        first.out_tangent = Some(end_tangent(first.anchor, second));
        let second_last = self.knots[n - 2].anchor;
        let last = &mut self.knots[n - 1];
        last.in_tangent = Some(end_tangent(last.anchor, second_last));
    }
}

impl Default for Spline {
    /// The single-segment spline of [`Spline::new`], centred on the origin.
    fn default() -> Spline {
        Spline::new(Point3::ORIGIN)
    }
}
