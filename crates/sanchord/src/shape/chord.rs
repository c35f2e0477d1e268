use super::push_arc;
use crate::geom::{point, polar};
use crate::model::{AngularSpan, ChordDescriptor};
use crate::path::PathData;

/// Ribbon between a chord's source and target spans, both on a circle of `radius`.
///
/// The outline runs along the source span, bends through the centre to the target span, runs
/// along it and bends back. A descriptor whose two spans coincide collapses to a single lobe;
/// the solver never emits one (sources sit in output arcs, targets in input arcs), but
/// hand-built descriptors can.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordRibbon {
    radius: f64,
}

impl Default for ChordRibbon {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl ChordRibbon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn path(&self, chord: &ChordDescriptor) -> PathData {
        let r = self.radius;
        let s = &chord.source.span;
        let t = &chord.target.span;
        let center = point(0.0, 0.0);

        let mut path = PathData::new();
        path.move_to(polar(r, s.start_angle));
        push_arc(&mut path, r, s.start_angle, s.end_angle);
        if same_span(s, t) {
            path.quad_to(center, polar(r, s.start_angle));
        } else {
            path.quad_to(center, polar(r, t.start_angle));
            push_arc(&mut path, r, t.start_angle, t.end_angle);
            path.quad_to(center, polar(r, s.start_angle));
        }
        path.close();
        path
    }
}

fn same_span(a: &AngularSpan, b: &AngularSpan) -> bool {
    a.start_angle == b.start_angle && a.end_angle == b.end_angle
}
