#![forbid(unsafe_code)]

//! Headless circular chord-flow layout.
//!
//! A square flow matrix is laid out on a single ring: every node gets an arc split into an input
//! and an output sub-arc, every non-zero cell becomes a chord between the matching sub-spans, and
//! every node carries throughput / drop-off / drop-in spans that show how much of its inbound flow
//! leaves it again. The [`shape`] generators turn those angles into SVG path data.

pub mod config;
pub mod error;
pub mod geom;
pub mod layout;
pub mod matrix;
pub mod model;
pub mod path;
pub mod shape;

pub use config::{ChordConfig, Comparator, LayoutConfig, SortOrder};
pub use error::{Error, Result};
pub use layout::{ChordLayout, relayout};
pub use matrix::FlowMatrix;
pub use model::{AngularSpan, ChordDescriptor, ComputedLayout, FlowSpan, NodeDescriptor};
pub use path::{PathData, PathSegment};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validates `rows` and computes the layout in one step.
pub fn layout_matrix(rows: Vec<Vec<f64>>, config: LayoutConfig) -> Result<ComputedLayout> {
    let matrix = FlowMatrix::new(rows)?;
    config.validate(matrix.len())?;
    Ok(relayout(&matrix, &config))
}
