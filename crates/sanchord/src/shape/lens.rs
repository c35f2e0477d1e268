use super::push_arc;
use crate::geom::{Point, polar};
use crate::model::NodeDescriptor;
use crate::path::PathData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LensStyle {
    #[default]
    Curved,
    Straight,
}

/// Closed shape showing the flow that passes through a node.
///
/// The lens covers the throughput span on the ring of `radius` and narrows inward to a short arc
/// of `io_radius` that spans the node's io gap around the span midpoint. Curved flanks bulge
/// outward more as the span widens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroughputLens {
    radius: f64,
    io_radius: f64,
    style: LensStyle,
}

impl Default for ThroughputLens {
    fn default() -> Self {
        Self {
            radius: 1.0,
            io_radius: 0.8,
            style: LensStyle::Curved,
        }
    }
}

impl ThroughputLens {
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

    pub fn io_radius(&self) -> f64 {
        self.io_radius
    }

    pub fn with_io_radius(mut self, io_radius: f64) -> Self {
        self.io_radius = io_radius;
        self
    }

    pub fn style(&self) -> LensStyle {
        self.style
    }

    pub fn with_style(mut self, style: LensStyle) -> Self {
        self.style = style;
        self
    }

    /// `None` for nodes without throughput.
    pub fn path(&self, node: &NodeDescriptor) -> Option<PathData> {
        let span = &node.throughput;
        if span.value <= 0.0 {
            return None;
        }

        let (a0, a1) = (span.start_angle, span.end_angle);
        let mid = span.mid_angle();
        let half_gap = node.io_gap() / 2.0;
        let tip0 = mid - half_gap;
        let tip1 = mid + half_gap;
        let delta = span.width();

        let mut path = PathData::new();
        path.move_to(polar(self.radius, a0));
        self.flank(&mut path, a0 - skew(delta), delta, polar(self.io_radius, tip0));
        push_arc(&mut path, self.io_radius, tip0, tip1);
        self.flank(&mut path, a1 + skew(delta), delta, polar(self.radius, a1));
        push_arc(&mut path, self.radius, a1, a0);
        path.close();
        Some(path)
    }

    fn flank(&self, path: &mut PathData, ctrl_angle: f64, delta: f64, to: Point) {
        match self.style {
            LensStyle::Straight => {
                path.line_to(to);
            }
            LensStyle::Curved => {
                let bulge = (self.io_radius * (1.0 + 0.5 * delta)).min(self.radius);
                path.quad_to(polar(bulge, ctrl_angle), to);
            }
        }
    }
}

/// Angular offset of a curved flank's control point.
fn skew(delta: f64) -> f64 {
    0.2 * delta * delta
}
