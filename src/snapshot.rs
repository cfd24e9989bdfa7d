// Copyright 2026 the Bezspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A plain representation of a spline for saving and loading.

use alloc::vec::Vec;

use crate::{Point3, Spline, SplineError};

/// The persisted form of a [`Spline`]: its flat point sequence and flags.
///
/// Converting back into a [`Spline`] validates the point count. The
/// auto-tangent flag is restored without recomputing the tangents, so a
/// spline survives a round trip unchanged.
///
/// # Examples
///
/// ```
/// use bezspline::{Point3, Spline, SplineData};
/// let spline = Spline::new(Point3::ORIGIN);
/// let data = SplineData::from(&spline);
/// assert_eq!(data.points.len(), 4);
/// assert_eq!(Spline::try_from(data), Ok(spline));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplineData {
    /// Anchors and tangents in flat order.
    pub points: Vec<Point3>,
    /// Whether the last anchor joins back to the first.
    pub closed: bool,
    /// Whether tangents are derived from the anchors.
    #[cfg_attr(feature = "serde", serde(default))]
    pub auto_tangent: bool,
}

impl TryFrom<SplineData> for Spline {
    type Error = SplineError;

    fn try_from(data: SplineData) -> Result<Spline, SplineError> {
        let mut spline = Spline::from_points(data.points, data.closed)?;
        spline.auto_tangent = data.auto_tangent;
        Ok(spline)
    }
}

impl From<&Spline> for SplineData {
    fn from(spline: &Spline) -> SplineData {
        SplineData {
            points: spline.points().collect(),
            closed: spline.is_closed(),
            auto_tangent: spline.is_auto_tangent(),
        }
    }
}

impl From<Spline> for SplineData {
    #[inline]
    fn from(spline: Spline) -> SplineData {
        SplineData::from(&spline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_keeps_tangents() {
        let mut spline = Spline::new(Point3::new(0.0, 1.0, 2.0));
        spline.add_segment(Point3::new(4.0, 0.0, 0.0)).unwrap();
        spline.set_closed(true);
        spline.set_auto_tangent(true);
        spline.set_auto_tangent(false);
        spline.move_point(1, Point3::new(-3.0, 3.0, 3.0)).unwrap();
        spline.set_auto_tangent(true);

        let data = SplineData::from(&spline);
        assert_eq!(data.points.len(), 9);
        assert!(data.closed);
        assert!(data.auto_tangent);
        assert_eq!(Spline::try_from(data), Ok(spline));
    }

    #[test]
    fn malformed_data_is_rejected() {
        let data = SplineData {
            points: vec![Point3::ORIGIN; 5],
            closed: false,
            auto_tangent: false,
        };
        assert_eq!(
            Spline::try_from(data),
            Err(SplineError::MalformedPath {
                len: 5,
                closed: false
            })
        );
        assert!(Spline::try_from(SplineData::default()).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let mut spline = Spline::default();
        spline.add_segment(Point3::new(2.0, 0.5, -1.0)).unwrap();
        spline.split_segment(Point3::new(0.0, 1.0, 0.0), 0).unwrap();

        let json = serde_json::to_string(&spline).unwrap();
        let back: Spline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spline);

        // Older documents without the auto-tangent flag still load.
        let json = r#"{
            "points": [
                {"x": -1.0, "y": 0.0, "z": 0.0},
                {"x": -0.5, "y": 0.5, "z": 0.0},
                {"x": 0.5, "y": -0.5, "z": 0.0},
                {"x": 1.0, "y": 0.0, "z": 0.0}
            ],
            "closed": false
        }"#;
        let loaded: Spline = serde_json::from_str(json).unwrap();
        assert_eq!(loaded, Spline::default());

        // Point counts are validated while deserializing.
        let json = r#"{"points": [{"x": 0.0, "y": 0.0, "z": 0.0}], "closed": false}"#;
        assert!(serde_json::from_str::<Spline>(json).is_err());
    }
}
