// Copyright 2026 the Bezspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`Spline`](crate::Spline) operations.

/// An error from constructing or editing a [`Spline`](crate::Spline).
///
/// Each variant describes a violated structural precondition. The spline is
/// left unchanged whenever one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SplineError {
    /// A point or segment index was outside of its valid range.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of points or segments that were available.
        len: usize,
    },
    /// The operation is not valid in the spline's current configuration.
    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] InvalidOperation),
    /// A point list does not have the length required by the open or closed layout.
    #[error("{len} points do not form a spline (closed: {closed})")]
    MalformedPath {
        /// The number of points supplied.
        len: usize,
        /// Whether the points were meant to describe a closed spline.
        closed: bool,
    },
}

/// The reason an operation was rejected with [`SplineError::InvalidOperation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidOperation {
    /// Segments can only be appended to an open spline.
    #[error("cannot append a segment to a closed spline")]
    AppendToClosed,
    /// Tangents are derived from the anchors while auto-tangent mode is on.
    #[error("tangent points cannot be moved while auto-tangent mode is on")]
    MoveDerivedTangent,
    /// The index names a tangent, where an anchor was required.
    #[error("point {0} is a tangent, not an anchor")]
    NotAnAnchor(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = SplineError::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(format!("{err}"), "index 7 is out of range for length 4");

        let err = SplineError::from(InvalidOperation::NotAnAnchor(2));
        assert_eq!(
            format!("{err}"),
            "invalid operation: point 2 is a tangent, not an anchor"
        );

        let err = SplineError::MalformedPath {
            len: 5,
            closed: true,
        };
        assert_eq!(format!("{err}"), "5 points do not form a spline (closed: true)");
    }
}
