// Copyright 2026 the Bezspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use core::ops::Range;

use crate::{
    eval_quadratic, Nearest, ParamCurve, ParamCurveArclen, ParamCurveDeriv, ParamCurveNearest,
    Point3, QuadBez,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Evaluate the cubic Bézier curve with control points `a`, `b`, `c`, `d` at `t`.
///
/// The two quadratics `a, b, c` and `b, c, d` are evaluated at `t` and the
/// results are interpolated at `t` again, which is de Casteljau's
/// construction. The parameter is not clamped; the curve is simply
/// extrapolated outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use bezspline::{eval_cubic, Point3};
/// let a = Point3::new(-1.0, 0.0, 0.0);
/// let b = Point3::new(-0.5, 0.5, 0.0);
/// let c = Point3::new(0.5, -0.5, 0.0);
/// let d = Point3::new(1.0, 0.0, 0.0);
/// assert_eq!(eval_cubic(a, b, c, d, 0.0), a);
/// assert_eq!(eval_cubic(a, b, c, d, 1.0), d);
/// ```
#[inline]
pub fn eval_cubic(a: Point3, b: Point3, c: Point3, d: Point3, t: f64) -> Point3 {
    let p0 = eval_quadratic(a, b, c, t);
    let p1 = eval_quadratic(b, c, d, t);
    p0.lerp(p1, t)
}

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CubicBez {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

/// An iterator which produces quadratic Bézier segments.
struct ToQuads {
    c: CubicBez,
    max_hypot2: f64,
    t: f64,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point3>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Create a segment from its four control points, in curve order.
    #[inline]
    pub fn from_points(points: [Point3; 4]) -> CubicBez {
        let [p0, p1, p2, p3] = points;
        CubicBez { p0, p1, p2, p3 }
    }

    /// The four control points, in curve order.
    #[inline]
    pub fn to_points(&self) -> [Point3; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Length of the control polygon, `|p1 - p0| + |p2 - p1| + |p3 - p2|`.
    ///
    /// This is always an upper bound on the arc length.
    #[inline]
    pub fn control_polygon_len(&self) -> f64 {
        self.p0.distance(self.p1) + self.p1.distance(self.p2) + self.p2.distance(self.p3)
    }

    /// A cheap length estimate: the chord plus half the control polygon.
    ///
    /// This overestimates the arc length for typical curves, which makes it
    /// suitable for choosing a sampling density.
    #[inline]
    pub fn estimated_len(&self) -> f64 {
        self.p0.distance(self.p3) + 0.5 * self.control_polygon_len()
    }

    /// Convert to quadratic Béziers.
    ///
    /// The iterator returns the start and end parameter in the cubic of each quadratic
    /// segment, along with the quadratic.
    ///
    /// Note that the resulting quadratic Béziers are not in general G1 continuous;
    /// they are optimized for minimizing distance error.
    #[inline]
    pub fn to_quads(&self, accuracy: f64) -> impl Iterator<Item = (f64, f64, QuadBez)> {
        // This magic number is the square of 36 / sqrt(3).
        // See: http://caffeineowl.com/graphics/2d/vectorial/cubic2quad01.html
        let max_hypot2 = 432.0 * accuracy * accuracy;
        ToQuads {
            c: *self,
            max_hypot2,
            t: 0.0,
        }
    }

    /// Is this cubic Bezier curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point3 {
        eval_cubic(self.p0, self.p1, self.p2, self.p3, t)
    }

    #[inline]
    fn start(&self) -> Point3 {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point3 {
        self.p3
    }

    fn subsegment(&self, range: Range<f64>) -> CubicBez {
        let (t0, t1) = (range.start, range.end);
        let p0 = self.eval(t0);
        let p3 = self.eval(t1);
        let d = self.deriv();
        let scale = (t1 - t0) * (1.0 / 3.0);
        let p1 = p0 + scale * d.eval(t0).to_vec3();
        let p2 = p3 - scale * d.eval(t1).to_vec3();
        CubicBez { p0, p1, p2, p3 }
    }

    /// Subdivide into halves, using de Casteljau.
    #[inline]
    fn subdivide(&self) -> (CubicBez, CubicBez) {
        let pm = self.eval(0.5);
        let p01 = self.p0.midpoint(self.p1);
        let p12 = self.p1.midpoint(self.p2);
        let p23 = self.p2.midpoint(self.p3);
        (
            CubicBez::new(self.p0, p01, p01.midpoint(p12), pm),
            CubicBez::new(pm, p12.midpoint(p23), p23, self.p3),
        )
    }
}

impl ParamCurveDeriv for CubicBez {
    type DerivResult = QuadBez;

    #[inline]
    fn deriv(&self) -> QuadBez {
        QuadBez::new(
            (3.0 * (self.p1 - self.p0)).to_point(),
            (3.0 * (self.p2 - self.p1)).to_point(),
            (3.0 * (self.p3 - self.p2)).to_point(),
        )
    }
}

impl ParamCurveArclen for CubicBez {
    /// Arclength of a cubic Bézier segment.
    ///
    /// This algorithm is based on "Adaptive subdivision and the length and
    /// energy of Bézier curves" by Jens Gravesen.
    fn arclen(&self, accuracy: f64) -> f64 {
        // Estimate for a single segment.
        fn calc_l0(c: &CubicBez) -> f64 {
            let lc = (c.p3 - c.p0).hypot();
            let lp = c.control_polygon_len();
            (lc + lp) * 0.5
        }
        const MAX_DEPTH: usize = 16;
        fn rec(c: &CubicBez, l0: f64, accuracy: f64, depth: usize) -> f64 {
            let (c0, c1) = c.subdivide();
            let l0_c0 = calc_l0(&c0);
            let l0_c1 = calc_l0(&c1);
            let l1 = l0_c0 + l0_c1;
            let error = (l0 - l1) * (1.0 / 15.0);
            if error.abs() < accuracy || depth == MAX_DEPTH {
                l1 - error
            } else {
                rec(&c0, l0_c0, accuracy * 0.5, depth + 1)
                    + rec(&c1, l0_c1, accuracy * 0.5, depth + 1)
            }
        }
        rec(self, calc_l0(self), accuracy, 0)
    }
}

impl ParamCurveNearest for CubicBez {
    /// Find the nearest point, using subdivision.
    fn nearest(&self, p: Point3, accuracy: f64) -> Nearest {
        let mut best_r = None;
        let mut best_t = 0.0;
        for (t0, t1, q) in self.to_quads(accuracy) {
            let nearest = q.nearest(p, accuracy);
            if best_r
                .map(|best_r| nearest.distance_sq < best_r)
                .unwrap_or(true)
            {
                best_t = t0 + nearest.t * (t1 - t0);
                best_r = Some(nearest.distance_sq);
            }
        }
        Nearest {
            t: best_t,
            distance_sq: best_r.unwrap_or(f64::INFINITY),
        }
    }
}

impl Iterator for ToQuads {
    type Item = (f64, f64, QuadBez);

    fn next(&mut self) -> Option<(f64, f64, QuadBez)> {
        let t0 = self.t;
        let mut t1 = 1.0;
        if t0 >= t1 {
            return None;
        }
        loop {
            let seg = self.c.subsegment(t0..t1);
            // Compute error for candidate quadratic.
            let p1x2 = 3.0 * seg.p1.to_vec3() - seg.p0.to_vec3();
            let p2x2 = 3.0 * seg.p2.to_vec3() - seg.p3.to_vec3();
            let err = (p2x2 - p1x2).hypot2();
            if err < self.max_hypot2 || !err.is_finite() {
                let result = QuadBez::new(seg.p0, ((p1x2 + p2x2) / 4.0).to_point(), seg.p3);
                self.t = t1;
                return Some((t0, t1, result));
            } else {
                let shrink = if t1 == 1.0 && err < 64.0 * self.max_hypot2 {
                    0.5
                } else {
                    0.999_999 * (self.max_hypot2 / err).powf(1. / 6.0)
                };
                t1 = t0 + shrink * (t1 - t0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        eval_cubic, CubicBez, ParamCurve, ParamCurveArclen, ParamCurveDeriv, ParamCurveNearest,
        Point3,
    };

    fn assert_near(p0: Point3, p1: Point3, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    #[test]
    fn cubic_endpoints() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(-4.0, 0.5, 9.0);
        let c = Point3::new(7.0, 7.0, -2.0);
        let d = Point3::new(0.0, -1.0, 5.0);
        assert_eq!(eval_cubic(a, b, c, d, 0.0), a);
        assert_eq!(eval_cubic(a, b, c, d, 1.0), d);
    }

    #[test]
    fn cubic_degenerate_is_constant() {
        let a = Point3::new(0.25, -3.5, 8.0);
        for t in [-1.0, 0.0, 0.3, 0.5, 0.9, 1.0, 2.5] {
            assert_eq!(eval_cubic(a, a, a, a, t), a);
        }
    }

    #[test]
    fn cubic_matches_bernstein_form() {
        let c = CubicBez::new((0.0, 0.0, 0.0), (1.0, 3.0, -1.0), (4.0, -2.0, 2.0), (5.0, 1.0, 0.0));
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let mt = 1.0 - t;
            let bernstein = c.p0.to_vec3() * (mt * mt * mt)
                + c.p1.to_vec3() * (3.0 * mt * mt * t)
                + c.p2.to_vec3() * (3.0 * mt * t * t)
                + c.p3.to_vec3() * (t * t * t);
            assert_near(c.eval(t), bernstein.to_point(), 1e-12);
        }
    }

    #[test]
    fn cubicbez_deriv() {
        // y = x^2
        let c = CubicBez::new(
            (0.0, 0.0, 0.0),
            (1.0 / 3.0, 0.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0, 0.0),
            (1.0, 1.0, 0.0),
        );
        let deriv = c.deriv();

        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let delta = 1e-6;
            let p = c.eval(t);
            let p1 = c.eval(t + delta);
            let d_approx = (p1 - p) * delta.recip();
            let d = deriv.eval(t).to_vec3();
            assert!((d - d_approx).hypot() < delta * 2.0);
        }
    }

    #[test]
    fn cubicbez_arclen() {
        // y = x^2
        let c = CubicBez::new(
            (0.0, 0.0, 0.0),
            (1.0 / 3.0, 0.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0, 0.0),
            (1.0, 1.0, 0.0),
        );
        let true_arclen = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        for i in 0..12 {
            let accuracy = 0.1f64.powi(i);
            let error = c.arclen(accuracy) - true_arclen;
            assert!(error.abs() < accuracy);
        }
    }

    #[test]
    fn cubicbez_estimated_len_bounds() {
        let c = CubicBez::new(
            (0.0, 0.0, 0.0),
            (1.0 / 3.0, 0.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0, 0.5),
            (1.0, 1.0, 1.0),
        );
        let arclen = c.arclen(1e-9);
        assert!(c.estimated_len() >= arclen);
        assert!(c.control_polygon_len() >= arclen);
        assert!(c.p0.distance(c.p3) <= arclen);
    }

    #[test]
    fn cubicbez_inv_arclen() {
        // y = x^2
        let c = CubicBez::new(
            (0.0, 0.0, 0.0),
            (1.0 / 3.0, 0.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0, 0.0),
            (1.0, 1.0, 0.0),
        );
        let true_arclen = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        for i in 0..8 {
            let accuracy = 0.1f64.powi(i);
            let n = 10;
            for j in 0..=n {
                let arc = (j as f64) * ((n as f64).recip() * true_arclen);
                let t = c.inv_arclen(arc, accuracy * 0.5);
                let actual_arc = c.subsegment(0.0..t).arclen(accuracy * 0.5);
                assert!(
                    (arc - actual_arc).abs() < accuracy,
                    "at accuracy {accuracy:e}, wanted {actual_arc} got {arc}"
                );
            }
        }
    }

    #[test]
    fn cubicbez_subsegment() {
        let c = CubicBez::new((3.1, 4.1, 0.0), (5.9, 2.6, 1.0), (5.3, 5.8, -2.0), (9.7, 9.3, 0.5));
        let t0 = 0.1;
        let t1 = 0.8;
        let cs = c.subsegment(t0..t1);
        let epsilon = 1e-12;
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let ts = t0 + t * (t1 - t0);
            assert_near(c.eval(ts), cs.eval(t), epsilon);
        }
    }

    #[test]
    fn cubicbez_subdivide() {
        let c = CubicBez::new((3.1, 4.1, 0.0), (5.9, 2.6, 1.0), (5.3, 5.8, -2.0), (9.7, 9.3, 0.5));
        let (left, right) = c.subdivide();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_near(left.eval(t), c.eval(0.5 * t), 1e-12);
            assert_near(right.eval(t), c.eval(0.5 + 0.5 * t), 1e-12);
        }
    }

    #[test]
    fn cubicbez_nearest() {
        fn verify(result: crate::Nearest, expected: f64) {
            assert!(
                (result.t - expected).abs() < 1e-6,
                "got {result:?} expected {expected}"
            );
        }
        // y = x^3
        let c = CubicBez::new(
            (0.0, 0.0, 0.0),
            (1.0 / 3.0, 0.0, 0.0),
            (2.0 / 3.0, 0.0, 0.0),
            (1.0, 1.0, 0.0),
        );
        verify(c.nearest(Point3::new(0.1, 0.001, 0.0), 1e-6), 0.1);
        verify(c.nearest(Point3::new(0.2, 0.008, 0.0), 1e-6), 0.2);
        verify(c.nearest(Point3::new(0.3, 0.027, 0.0), 1e-6), 0.3);
        verify(c.nearest(Point3::new(0.5, 0.125, 0.0), 1e-6), 0.5);
        verify(c.nearest(Point3::new(0.8, 0.512, 0.0), 1e-6), 0.8);
        verify(c.nearest(Point3::new(1.0, 1.0, 0.0), 1e-6), 1.0);
        verify(c.nearest(Point3::new(1.1, 1.1, 0.0), 1e-6), 1.0);
        verify(c.nearest(Point3::new(-0.1, 0.0, 0.0), 1e-6), 0.0);
    }

    #[test]
    fn cubicbez_toquads() {
        // y = x^3
        let c = CubicBez::new(
            (0.0, 0.0, 0.0),
            (1.0 / 3.0, 0.0, 0.0),
            (2.0 / 3.0, 0.0, 0.0),
            (1.0, 1.0, 0.0),
        );
        for i in 0..10 {
            let accuracy = 0.1f64.powi(i);
            for (t0, t1, q) in c.to_quads(accuracy) {
                let epsilon = 1e-12;
                assert!((q.start() - c.eval(t0)).hypot() < epsilon);
                assert!((q.end() - c.eval(t1)).hypot() < epsilon);
                let n = 4;
                for j in 0..=n {
                    let t = (j as f64) * (n as f64).recip();
                    let p = q.eval(t);
                    let err = (p.y - p.x.powi(3)).abs();
                    assert!(err < accuracy, "got {err} wanted {accuracy}");
                }
            }
        }
    }
}
