// Copyright 2026 the Bezspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editable piecewise cubic Bézier splines in 3D.
//!
//! The bezspline library contains the geometry engine behind interactive
//! curve editing: a [`Spline`] made of anchors and tangent handles that can
//! be extended, split, trimmed, opened and closed, and whose points can be
//! dragged around while the joins stay smooth. A spline can be evaluated at
//! any normalized parameter, and resampled into points spaced evenly along
//! its length, which is what most consumers (something moving along a path,
//! a road mesh generator) actually want.
//!
//! Underneath are vocabulary types in the style of a small geometry library:
//! [`Point3`] and [`Vec3`], the [`QuadBez`] and [`CubicBez`] segments, and
//! the [`ParamCurve`] family of traits for evaluation, arc length and nearest
//! point queries.
//!
//! # Examples
//!
//! Building a spline and walking along it:
//! ```
//! use bezspline::{Point3, Spline, DEFAULT_RESOLUTION};
//!
//! let mut spline = Spline::new(Point3::ORIGIN);
//! spline.add_segment(Point3::new(3.0, 1.0, 0.0)).unwrap();
//! spline.set_auto_tangent(true);
//!
//! let start = spline.eval(0.0);
//! assert_eq!(start, Point3::new(-1.0, 0.0, 0.0));
//!
//! let points = spline.evenly_spaced_points(0.5, DEFAULT_RESOLUTION);
//! for pair in points.windows(2) {
//!     assert!(pair[0].distance(pair[1]) <= 0.5 + 1e-9);
//! }
//! ```
//!
//! Picking the anchor under a cursor and dragging it:
//! ```
//! use bezspline::{Point3, Spline};
//!
//! let mut spline = Spline::default();
//! let cursor = Point3::new(0.9, 0.1, 0.0);
//! if let Some(index) = spline.nearest_anchor(cursor, 0.5) {
//!     spline.move_point(index, Point3::new(1.0, 2.0, 0.0)).unwrap();
//! }
//! assert_eq!(spline.point(3), Ok(Point3::new(1.0, 2.0, 0.0)));
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. However, note that the `libm` crate is not as
//! efficient as the standard library, and that this crate still uses the
//! `alloc` crate regardless.
//!
//! The `serde` feature makes the geometry types serializable; a [`Spline`]
//! is stored as a [`SplineData`] and validated when loaded. The `schemars`,
//! `mint` and `euclid` features add interoperability with those crates.
//!
//! Edits are reported through the [`log`] facade at `debug` level, and
//! resampling at `trace` level. No logger is installed by this crate.
//!
//! [`libm`]: https://docs.rs/libm
//! [`log`]: https://docs.rs/log

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("bezspline requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

pub mod auto_tangent;
pub mod common;
mod cubicbez;
mod error;
#[cfg(feature = "euclid")]
mod interop_euclid;
mod knot;
mod param_curve;
mod point3;
mod quadbez;
mod resample;
mod snapshot;
mod spline;
mod vec3;

pub use crate::cubicbez::*;
pub use crate::error::*;
pub use crate::knot::*;
pub use crate::param_curve::*;
pub use crate::point3::*;
pub use crate::quadbez::*;
pub use crate::resample::*;
pub use crate::snapshot::*;
pub use crate::spline::*;
pub use crate::vec3::*;
