//! Path generators for the layout's angular output.
//!
//! Generators are plain values configured through `with_*` setters. They read descriptors only,
//! never the matrix or the layout configuration, so reconfiguring one never invalidates a
//! computed layout.

pub mod arc;
pub mod arrow;
pub mod chord;
pub mod lens;
pub mod wedge;

pub use arc::{AnnularArc, ArcPrimitive, NodeArc, SpanKind};
pub use arrow::{ArrowTarget, DirectionArrow};
pub use chord::ChordRibbon;
pub use lens::{LensStyle, ThroughputLens};
pub use wedge::{DropKind, DropWedge};

use crate::geom::{large_arc, polar};
use crate::path::PathData;
use std::f64::consts::TAU;

const FULL_TURN_EPSILON: f64 = 1e-6;

/// Appends an arc of `radius` from angle `from` to angle `to`; the current point must already be
/// `polar(radius, from)`.
///
/// SVG cannot draw a closed circle with one arc command, so near-full turns are split in two.
pub(crate) fn push_arc(path: &mut PathData, radius: f64, from: f64, to: f64) {
    let delta = to - from;
    let sweep = delta > 0.0;
    if delta.abs() >= TAU - FULL_TURN_EPSILON {
        let mid = from + delta / 2.0;
        path.arc_to(radius, false, sweep, polar(radius, mid));
        path.arc_to(radius, false, sweep, polar(radius, to));
    } else {
        path.arc_to(radius, large_arc(delta.abs()), sweep, polar(radius, to));
    }
}
