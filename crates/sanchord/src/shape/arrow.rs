use crate::geom::polar;
use crate::model::{AngularSpan, NodeDescriptor};
use crate::path::PathData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrowTarget {
    Input,
    Output,
    #[default]
    Both,
}

/// Triangular chevron on the midpoint of a node's input and/or output span.
///
/// Input arrows point outward (flow arrives at the node), output arrows point inward. The angular
/// width is `min(max_angle, fraction * span width)`; arrows narrower than `min_angle` are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionArrow {
    inner_radius: f64,
    outer_radius: f64,
    min_angle: f64,
    max_angle: f64,
    fraction: f64,
    target: ArrowTarget,
}

impl Default for DirectionArrow {
    fn default() -> Self {
        Self {
            inner_radius: 0.9,
            outer_radius: 1.0,
            min_angle: 0.01,
            max_angle: 0.1,
            fraction: 0.5,
            target: ArrowTarget::Both,
        }
    }
}

impl DirectionArrow {
    pub fn new() -> Self {
        Self::default()
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

    pub fn min_angle(&self) -> f64 {
        self.min_angle
    }

    pub fn with_min_angle(mut self, radians: f64) -> Self {
        self.min_angle = radians;
        self
    }

    pub fn max_angle(&self) -> f64 {
        self.max_angle
    }

    pub fn with_max_angle(mut self, radians: f64) -> Self {
        self.max_angle = radians;
        self
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.fraction = fraction;
        self
    }

    pub fn target(&self) -> ArrowTarget {
        self.target
    }

    pub fn with_target(mut self, target: ArrowTarget) -> Self {
        self.target = target;
        self
    }

    /// `None` when every selected arrow is suppressed.
    pub fn path(&self, node: &NodeDescriptor) -> Option<PathData> {
        let mut path = PathData::new();
        if matches!(self.target, ArrowTarget::Input | ArrowTarget::Both) {
            if let Some(arrow) = self.triangle(&node.input, true) {
                path.extend(arrow);
            }
        }
        if matches!(self.target, ArrowTarget::Output | ArrowTarget::Both) {
            if let Some(arrow) = self.triangle(&node.output, false) {
                path.extend(arrow);
            }
        }
        (!path.is_empty()).then_some(path)
    }

    fn triangle(&self, span: &AngularSpan, apex_outward: bool) -> Option<PathData> {
        let width = self.max_angle.min(self.fraction * span.width());
        if width <= 0.0 || width < self.min_angle {
            return None;
        }

        let mid = span.mid_angle();
        let half = width / 2.0;
        let (base, apex) = if apex_outward {
            (self.inner_radius, self.outer_radius)
        } else {
            (self.outer_radius, self.inner_radius)
        };

        let mut path = PathData::new();
        path.move_to(polar(base, mid - half))
            .line_to(polar(base, mid + half))
            .line_to(polar(apex, mid))
            .close();
        Some(path)
    }
}
