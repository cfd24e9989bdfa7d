// Copyright 2026 the Bezspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resampling a chain of cubic segments at even arc-length spacing.

use alloc::vec::Vec;

use crate::{CubicBez, ParamCurve, Point3};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The default sampling density for [`evenly_spaced_points`].
///
/// Each segment is walked in `ceil(estimated_len * resolution * 10)`
/// divisions, each divided ten times again.
pub const DEFAULT_RESOLUTION: f64 = 2.0;

/// Walk a chain of segments and emit points roughly `spacing` apart.
///
/// The first point is the start of the first segment. Each segment is
/// stepped through in small parameter increments, sized from
/// [`CubicBez::estimated_len`] and `resolution`, accumulating the straight
/// line distance between successive samples. Whenever the running distance
/// reaches `spacing`, a point is emitted, backed up along the last step by
/// the overshoot so that emitted points lie on the sampled polyline. The
/// overshoot is carried forward.
///
/// The final end point is only included if it happens to land on the
/// spacing. A `spacing` that is not a positive finite number yields only the
/// start point, and a non-finite `resolution` falls back to
/// [`DEFAULT_RESOLUTION`]. An empty chain yields no points.
///
/// # Examples
///
/// ```
/// use bezspline::{evenly_spaced_points, CubicBez, Point3, DEFAULT_RESOLUTION};
/// let line = CubicBez::new((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (2.0, 0.0, 0.0), (3.0, 0.0, 0.0));
/// let points = evenly_spaced_points([line], 1.0, DEFAULT_RESOLUTION);
/// assert_eq!(points[0], Point3::ORIGIN);
/// assert!((points[1].x - 1.0).abs() < 1e-9);
/// assert!((points[2].x - 2.0).abs() < 1e-9);
/// ```
pub fn evenly_spaced_points<I>(segments: I, spacing: f64, resolution: f64) -> Vec<Point3>
where
    I: IntoIterator<Item = CubicBez>,
{
    let mut segments = segments.into_iter().peekable();
    let Some(first) = segments.peek() else {
        return Vec::new();
    };
    let start = first.p0;
    let mut result = Vec::new();
    result.push(start);
    if !(spacing > 0.0 && spacing.is_finite()) {
        log::trace!("resampling skipped for spacing {spacing}");
        return result;
    }
    let resolution = if resolution.is_finite() {
        resolution
    } else {
        DEFAULT_RESOLUTION
    };

    let mut prev = start;
    let mut since_last = 0.0;
    for seg in segments {
        // `max` also maps a NaN estimate to a single division.
        let divisions = (seg.estimated_len() * resolution * 10.0).ceil().max(1.0);
        let step = 0.1 / divisions;
        let mut t = 0.0;
        while t < 1.0 {
            t = (t + step).min(1.0);
            let p = seg.eval(t);
            since_last += prev.distance(p);
            while since_last >= spacing {
                let overshoot = since_last - spacing;
                let emitted = p + (prev - p).normalize_or_zero() * overshoot;
                result.push(emitted);
                since_last = overshoot;
                prev = emitted;
            }
            prev = p;
        }
    }
    log::trace!(
        "resampled at spacing {spacing} (resolution {resolution}) into {} points",
        result.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x0: f64, x1: f64) -> CubicBez {
        let d = (x1 - x0) / 3.0;
        CubicBez::new(
            (x0, 0.0, 0.0),
            (x0 + d, 0.0, 0.0),
            (x0 + 2.0 * d, 0.0, 0.0),
            (x1, 0.0, 0.0),
        )
    }

    #[test]
    fn straight_line_spacing() {
        let points = evenly_spaced_points([line(0.0, 2.0), line(2.0, 4.0)], 0.5, DEFAULT_RESOLUTION);
        assert_eq!(points[0], Point3::ORIGIN);
        // The last sample may fall just short of the end due to rounding.
        assert!(points.len() == 8 || points.len() == 9, "{}", points.len());
        for (i, p) in points.iter().enumerate() {
            assert!((p.x - 0.5 * i as f64).abs() < 1e-9, "{i}: {p:?}");
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn curved_spacing_is_even() {
        let arc = CubicBez::new((0.0, 0.0, 0.0), (0.0, 2.0, 1.0), (3.0, 2.0, -1.0), (3.0, 0.0, 0.0));
        let spacing = 0.25;
        let points = evenly_spaced_points([arc], spacing, 4.0);
        assert!(points.len() > 10);
        for pair in points.windows(2) {
            let d = pair[0].distance(pair[1]);
            // Chords across a curved stretch are slightly shorter than the spacing.
            assert!(d <= spacing + 1e-9 && d > 0.95 * spacing, "{d}");
        }
    }

    #[test]
    fn degenerate_spacing() {
        let segs = [line(0.0, 1.0)];
        for spacing in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(evenly_spaced_points(segs, spacing, 1.0), vec![Point3::ORIGIN]);
        }
        assert!(evenly_spaced_points(core::iter::empty(), 1.0, 1.0).is_empty());
    }

    #[test]
    fn spacing_longer_than_chain() {
        let points = evenly_spaced_points([line(0.0, 1.0)], 10.0, DEFAULT_RESOLUTION);
        assert_eq!(points, vec![Point3::ORIGIN]);
    }

    #[test]
    fn zero_length_chain() {
        let p = CubicBez::new((1.0, 1.0, 1.0), (1.0, 1.0, 1.0), (1.0, 1.0, 1.0), (1.0, 1.0, 1.0));
        let points = evenly_spaced_points([p], 0.1, DEFAULT_RESOLUTION);
        assert_eq!(points, vec![Point3::new(1.0, 1.0, 1.0)]);
    }
}
