use super::push_arc;
use crate::geom::polar;
use crate::model::{AngularSpan, NodeDescriptor};
use crate::path::PathData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropKind {
    /// Inbound flow that does not leave the node again.
    #[default]
    DropOff,
    /// Outbound flow that did not arrive at the node.
    DropIn,
}

impl DropKind {
    pub fn span(self, node: &NodeDescriptor) -> &AngularSpan {
        match self {
            DropKind::DropOff => &node.drop_off,
            DropKind::DropIn => &node.drop_in,
        }
    }
}

/// Wedge outside the ring encoding flow loss (drop-off) or gain (drop-in).
///
/// The wedge keeps the full span width on one radius and tapers to a point on the other: drop-off
/// tapers outward (base on `inner_radius`), drop-in tapers inward (base on `outer_radius`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropWedge {
    inner_radius: f64,
    outer_radius: f64,
    kind: DropKind,
}

impl Default for DropWedge {
    fn default() -> Self {
        Self {
            inner_radius: 1.0,
            outer_radius: 1.2,
            kind: DropKind::DropOff,
        }
    }
}

impl DropWedge {
    pub fn new(kind: DropKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn with_inner_radius(mut self, radius: f64) -> Self {
        self.inner_radius = radius;
        self
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn with_outer_radius(mut self, radius: f64) -> Self {
        self.outer_radius = radius;
        self
    }

    pub fn kind(&self) -> DropKind {
        self.kind
    }

    pub fn with_kind(mut self, kind: DropKind) -> Self {
        self.kind = kind;
        self
    }

    /// `None` unless the selected span carries a positive value.
    pub fn path(&self, node: &NodeDescriptor) -> Option<PathData> {
        let span = self.kind.span(node);
        if span.value <= 0.0 {
            return None;
        }

        let (base, apex) = match self.kind {
            DropKind::DropOff => (self.inner_radius, self.outer_radius),
            DropKind::DropIn => (self.outer_radius, self.inner_radius),
        };

        let mut path = PathData::new();
        path.move_to(polar(base, span.start_angle));
        push_arc(&mut path, base, span.start_angle, span.end_angle);
        path.line_to(polar(apex, span.mid_angle()));
        path.close();
        Some(path)
    }
}
