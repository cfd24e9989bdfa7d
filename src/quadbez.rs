// Copyright 2026 the Bezspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use core::ops::Range;

use crate::common::solve_cubic;
use crate::{CubicBez, Nearest, ParamCurve, ParamCurveArclen, ParamCurveNearest, Point3};

/// Evaluate the quadratic Bézier curve through `a`, `b`, `c` at `t`.
///
/// This is two nested linear interpolations (de Casteljau). The parameter
/// is not clamped, so values outside `[0, 1]` extrapolate the curve.
///
/// # Examples
///
/// ```
/// use bezspline::{eval_quadratic, Point3};
/// let a = Point3::new(0.0, 0.0, 0.0);
/// let b = Point3::new(1.0, 2.0, 0.0);
/// let c = Point3::new(2.0, 0.0, 0.0);
/// assert_eq!(eval_quadratic(a, b, c, 0.5), Point3::new(1.0, 1.0, 0.0));
/// ```
#[inline]
pub fn eval_quadratic(a: Point3, b: Point3, c: Point3, t: f64) -> Point3 {
    let ab = a.lerp(b, t);
    let bc = b.lerp(c, t);
    ab.lerp(bc, t)
}

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct QuadBez {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new<V: Into<Point3>>(p0: V, p1: V, p2: V) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Raise the order by 1.
    ///
    /// Returns a cubic Bézier segment that exactly represents this quadratic.
    #[inline]
    pub fn raise(&self) -> CubicBez {
        CubicBez::new(
            self.p0,
            self.p0 + (2.0 / 3.0) * (self.p1 - self.p0),
            self.p2 + (2.0 / 3.0) * (self.p1 - self.p2),
            self.p2,
        )
    }

    /// Is this quadratic Bezier curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite()
    }
}

impl ParamCurve for QuadBez {
    #[inline]
    fn eval(&self, t: f64) -> Point3 {
        eval_quadratic(self.p0, self.p1, self.p2, t)
    }

    #[inline]
    fn start(&self) -> Point3 {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point3 {
        self.p2
    }

    /// Subdivide into halves, using de Casteljau.
    #[inline]
    fn subdivide(&self) -> (QuadBez, QuadBez) {
        let pm = self.eval(0.5);
        (
            QuadBez::new(self.p0, self.p0.midpoint(self.p1), pm),
            QuadBez::new(pm, self.p1.midpoint(self.p2), self.p2),
        )
    }

    fn subsegment(&self, range: Range<f64>) -> QuadBez {
        let (t0, t1) = (range.start, range.end);
        let p0 = self.eval(t0);
        let p2 = self.eval(t1);
        let p1 = p0 + (self.p1 - self.p0).lerp(self.p2 - self.p1, t0) * (t1 - t0);
        QuadBez { p0, p1, p2 }
    }
}

impl ParamCurveArclen for QuadBez {
    /// Arclength of a quadratic Bézier segment.
    ///
    /// This algorithm is based on "Adaptive subdivision and the length and
    /// energy of Bézier curves" by Jens Gravesen.
    fn arclen(&self, accuracy: f64) -> f64 {
        // Estimate for a single segment.
        fn calc_l0(q: &QuadBez) -> f64 {
            let lc = (q.p2 - q.p0).hypot();
            let lp = (q.p1 - q.p0).hypot() + (q.p2 - q.p1).hypot();
            (2.0 * lc + lp) * (1.0 / 3.0)
        }
        const MAX_DEPTH: usize = 16;
        fn rec(q: &QuadBez, l0: f64, accuracy: f64, depth: usize) -> f64 {
            let (q0, q1) = q.subdivide();
            let l0_q0 = calc_l0(&q0);
            let l0_q1 = calc_l0(&q1);
            let l1 = l0_q0 + l0_q1;
            let error = (l0 - l1) * (1.0 / 15.0);
            if error.abs() < accuracy || depth == MAX_DEPTH {
                l1 - error
            } else {
                rec(&q0, l0_q0, accuracy * 0.5, depth + 1)
                    + rec(&q1, l0_q1, accuracy * 0.5, depth + 1)
            }
        }
        rec(self, calc_l0(self), accuracy, 0)
    }
}

impl ParamCurveNearest for QuadBez {
    /// Find the nearest point, using analytical algorithm based on cubic root finding.
    fn nearest(&self, p: Point3, _accuracy: f64) -> Nearest {
        fn eval_t(p: Point3, t_best: &mut f64, r_best: &mut Option<f64>, t: f64, p0: Point3) {
            let r = (p0 - p).hypot2();
            if r_best.map(|r_best| r < r_best).unwrap_or(true) {
                *r_best = Some(r);
                *t_best = t;
            }
        }
        fn try_t(
            q: &QuadBez,
            p: Point3,
            t_best: &mut f64,
            r_best: &mut Option<f64>,
            t: f64,
        ) -> bool {
            if !(0.0..=1.0).contains(&t) {
                return true;
            }
            eval_t(p, t_best, r_best, t, q.eval(t));
            false
        }
        let d0 = self.p1 - self.p0;
        let d1 = self.p0.to_vec3() + self.p2.to_vec3() - 2.0 * self.p1.to_vec3();
        let d = self.p0 - p;
        let c0 = d.dot(d0);
        let c1 = 2.0 * d0.hypot2() + d.dot(d1);
        let c2 = 3.0 * d1.dot(d0);
        let c3 = d1.hypot2();
        let roots = solve_cubic(c0, c1, c2, c3);
        let mut r_best = None;
        let mut t_best = 0.0;
        let mut need_ends = false;
        if roots.is_empty() {
            need_ends = true;
        }
        for &t in &roots {
            need_ends |= try_t(self, p, &mut t_best, &mut r_best, t);
        }
        if need_ends {
            eval_t(p, &mut t_best, &mut r_best, 0.0, self.p0);
            eval_t(p, &mut t_best, &mut r_best, 1.0, self.p2);
        }

        Nearest {
            t: t_best,
            distance_sq: r_best.unwrap_or(f64::INFINITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        eval_quadratic, ParamCurve, ParamCurveArclen, ParamCurveNearest, Point3, QuadBez,
    };

    fn assert_near(p0: Point3, p1: Point3, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    #[test]
    fn quadratic_endpoints() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(-4.0, 0.5, 9.0);
        let c = Point3::new(7.0, 7.0, -2.0);
        assert_eq!(eval_quadratic(a, b, c, 0.0), a);
        assert_eq!(eval_quadratic(a, b, c, 1.0), c);
    }

    #[test]
    fn quadratic_extrapolates() {
        // A straight, evenly parametrized quadratic stays on its line past the ends.
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(2.0, 0.0, 0.0);
        assert_near(eval_quadratic(a, b, c, 1.5), Point3::new(3.0, 0.0, 0.0), 1e-12);
        assert_near(eval_quadratic(a, b, c, -0.5), Point3::new(-1.0, 0.0, 0.0), 1e-12);
    }

    #[test]
    fn quadbez_arclen() {
        let true_arclen = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        let planar = QuadBez::new((0.0, 0.0, 0.0), (0.0, 0.5, 0.0), (1.0, 1.0, 0.0));
        // The same parabola, lying in the yz plane instead.
        let upright = QuadBez::new((0.0, 0.0, 0.0), (0.0, 0.0, 0.5), (0.0, 1.0, 1.0));
        for q in [planar, upright] {
            for i in 0..12 {
                let accuracy = 0.1f64.powi(i);
                let error = q.arclen(accuracy) - true_arclen;
                assert!(error.abs() < accuracy);
            }
        }
    }

    #[test]
    fn quadbez_subsegment() {
        let q = QuadBez::new((3.1, 4.1, 0.3), (5.9, 2.6, -1.0), (5.3, 5.8, 2.2));
        let t0 = 0.1;
        let t1 = 0.8;
        let qs = q.subsegment(t0..t1);
        let epsilon = 1e-12;
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let ts = t0 + t * (t1 - t0);
            assert_near(q.eval(ts), qs.eval(t), epsilon);
        }
    }

    #[test]
    fn quadbez_raise() {
        let q = QuadBez::new((3.1, 4.1, 0.3), (5.9, 2.6, -1.0), (5.3, 5.8, 2.2));
        let c = q.raise();
        let epsilon = 1e-12;
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            assert_near(q.eval(t), c.eval(t), epsilon);
        }
    }

    #[test]
    fn quadbez_nearest() {
        fn verify(result: crate::Nearest, expected: f64) {
            assert!(
                (result.t - expected).abs() < 1e-6,
                "got {result:?} expected {expected}"
            );
        }
        // y = x^2
        let q = QuadBez::new((-1.0, 1.0, 0.0), (0.0, -1.0, 0.0), (1.0, 1.0, 0.0));
        verify(q.nearest(Point3::new(0.0, 0.0, 0.0), 1e-3), 0.5);
        verify(q.nearest(Point3::new(0.0, 0.1, 0.0), 1e-3), 0.5);
        verify(q.nearest(Point3::new(0.0, -0.1, 0.0), 1e-3), 0.5);
        verify(q.nearest(Point3::new(0.5, 0.25, 0.0), 1e-3), 0.75);
        verify(q.nearest(Point3::new(1.0, 1.0, 0.0), 1e-3), 1.0);
        verify(q.nearest(Point3::new(1.1, 1.1, 0.0), 1e-3), 1.0);
        verify(q.nearest(Point3::new(-1.1, 1.1, 0.0), 1e-3), 0.0);
        // Lifting the query point off the plane doesn't move the foot point.
        let lifted = q.nearest(Point3::new(0.5, 0.25, 3.0), 1e-3);
        verify(lifted, 0.75);
        assert!((lifted.distance_sq - 9.0).abs() < 1e-9);
    }
}
