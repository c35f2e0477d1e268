use crate::error::{Error, Result};
use crate::shape::LensStyle;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;

/// Caller-supplied total order over two weights.
///
/// Used for both node ordering (weights are node totals) and flow ordering (weights are the
/// two-way flow between a node and a neighbour). Panics raised by the comparator propagate to
/// whoever triggered the layout.
pub type Comparator = Arc<dyn Fn(f64, f64) -> Ordering + Send + Sync>;

/// Named comparators, for configurations that come from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn comparator(self) -> Comparator {
        match self {
            SortOrder::Ascending => Arc::new(|a: f64, b: f64| a.total_cmp(&b)),
            SortOrder::Descending => Arc::new(|a: f64, b: f64| b.total_cmp(&a)),
        }
    }
}

/// Inputs of the solver besides the matrix.
#[derive(Clone, Default)]
pub struct LayoutConfig {
    /// Radians inserted after each node's combined arc.
    pub node_padding: f64,
    /// Radians inserted between a node's input and output sub-arcs.
    pub io_padding: f64,
    pub sort_nodes: Option<Comparator>,
    pub sort_flows: Option<Comparator>,
}

impl std::fmt::Debug for LayoutConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutConfig")
            .field("node_padding", &self.node_padding)
            .field("io_padding", &self.io_padding)
            .field("sort_nodes", &self.sort_nodes.is_some())
            .field("sort_flows", &self.sort_flows.is_some())
            .finish()
    }
}

impl LayoutConfig {
    pub fn with_node_padding(mut self, radians: f64) -> Self {
        self.node_padding = radians;
        self
    }

    pub fn with_io_padding(mut self, radians: f64) -> Self {
        self.io_padding = radians;
        self
    }

    pub fn with_sort_nodes(mut self, comparator: Option<Comparator>) -> Self {
        self.sort_nodes = comparator;
        self
    }

    pub fn with_sort_flows(mut self, comparator: Option<Comparator>) -> Self {
        self.sort_flows = comparator;
        self
    }

    pub(crate) fn validate(&self, n: usize) -> Result<()> {
        validate_padding("nodePadding", self.node_padding)?;
        validate_padding("ioPadding", self.io_padding)?;
        validate_budget(self.node_padding, self.io_padding, n)
    }
}

pub(crate) fn validate_padding(name: &str, radians: f64) -> Result<()> {
    if !radians.is_finite() || radians < 0.0 {
        return Err(Error::InvalidConfig {
            message: format!("{name} must be a finite, non-negative angle (got {radians})"),
        });
    }
    Ok(())
}

/// Paddings for `n` nodes must leave a positive angle for the flows themselves.
pub(crate) fn validate_budget(node_padding: f64, io_padding: f64, n: usize) -> Result<()> {
    if n == 0 {
        return Ok(());
    }
    let required = (node_padding + io_padding) * n as f64;
    let available = std::f64::consts::TAU;
    if required >= available {
        return Err(Error::PaddingBudgetExceeded {
            required,
            available,
        });
    }
    Ok(())
}

/// Serializable diagram configuration: layout parameters plus the radii and thresholds the
/// shape generators are configured with.
///
/// All keys are optional in JSON; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChordConfig {
    pub node_padding: f64,
    pub io_padding: f64,
    pub sort_nodes: Option<SortOrder>,
    pub sort_flows: Option<SortOrder>,
    /// Outer radius of the node ring; chords attach here.
    pub radius: f64,
    pub ring_width: f64,
    /// Radius of the throughput lens tip.
    pub io_radius: f64,
    pub drop_inner_radius: f64,
    pub drop_outer_radius: f64,
    pub arrow_min_angle: f64,
    pub arrow_max_angle: f64,
    pub arrow_fraction: f64,
    pub lens_style: LensStyle,
}

impl Default for ChordConfig {
    fn default() -> Self {
        Self {
            node_padding: 0.05,
            io_padding: 0.02,
            sort_nodes: None,
            sort_flows: None,
            radius: 200.0,
            ring_width: 16.0,
            io_radius: 150.0,
            drop_inner_radius: 216.0,
            drop_outer_radius: 240.0,
            arrow_min_angle: 0.01,
            arrow_max_angle: 0.12,
            arrow_fraction: 0.5,
            lens_style: LensStyle::Curved,
        }
    }
}

impl ChordConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn layout_config(&self) -> Result<LayoutConfig> {
        validate_padding("nodePadding", self.node_padding)?;
        validate_padding("ioPadding", self.io_padding)?;
        Ok(LayoutConfig {
            node_padding: self.node_padding,
            io_padding: self.io_padding,
            sort_nodes: self.sort_nodes.map(SortOrder::comparator),
            sort_flows: self.sort_flows.map(SortOrder::comparator),
        })
    }
}
