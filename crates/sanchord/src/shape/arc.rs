use super::push_arc;
use crate::geom::{point, polar};
use crate::model::{AngularSpan, NodeDescriptor};
use crate::path::PathData;

/// Draws a single angular span at a radius.
///
/// This is the seam to whatever arc primitive the host renderer prefers; [`AnnularArc`] is the
/// bundled one.
pub trait ArcPrimitive {
    fn arc(&self, start_angle: f64, end_angle: f64, radius: f64) -> PathData;
}

/// Annular sector between `radius - width` and `radius`.
///
/// A zero width yields an open arc for stroking; a width reaching the centre yields a pie slice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnnularArc {
    width: f64,
}

impl AnnularArc {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

impl ArcPrimitive for AnnularArc {
    fn arc(&self, start_angle: f64, end_angle: f64, radius: f64) -> PathData {
        let mut path = PathData::new();
        path.move_to(polar(radius, start_angle));
        push_arc(&mut path, radius, start_angle, end_angle);
        if self.width <= 0.0 {
            return path;
        }

        let inner = radius - self.width;
        if inner > 0.0 {
            path.line_to(polar(inner, end_angle));
            push_arc(&mut path, inner, end_angle, start_angle);
        } else {
            path.line_to(point(0.0, 0.0));
        }
        path.close();
        path
    }
}

/// Which node span a [`NodeArc`] draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanKind {
    Input,
    Output,
    #[default]
    Total,
}

impl SpanKind {
    pub fn span(self, node: &NodeDescriptor) -> &AngularSpan {
        match self {
            SpanKind::Input => &node.input,
            SpanKind::Output => &node.output,
            SpanKind::Total => &node.total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeArc<A = AnnularArc> {
    radius: f64,
    kind: SpanKind,
    primitive: A,
}

impl Default for NodeArc<AnnularArc> {
    fn default() -> Self {
        Self {
            radius: 1.0,
            kind: SpanKind::Total,
            primitive: AnnularArc::default(),
        }
    }
}

impl NodeArc<AnnularArc> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: ArcPrimitive> NodeArc<A> {
    pub fn with_primitive<B: ArcPrimitive>(self, primitive: B) -> NodeArc<B> {
        NodeArc {
            radius: self.radius,
            kind: self.kind,
            primitive,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn with_kind(mut self, kind: SpanKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn primitive(&self) -> &A {
        &self.primitive
    }

    pub fn path(&self, node: &NodeDescriptor) -> PathData {
        let span = self.kind.span(node);
        self.primitive.arc(span.start_angle, span.end_angle, self.radius)
    }
}
