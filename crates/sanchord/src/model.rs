use serde::Serialize;

/// Angular interval on the ring, in radians, with the flow magnitude it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngularSpan {
    pub start_angle: f64,
    pub end_angle: f64,
    pub value: f64,
}

impl AngularSpan {
    pub fn new(start_angle: f64, end_angle: f64, value: f64) -> Self {
        Self {
            start_angle,
            end_angle,
            value,
        }
    }

    pub(crate) fn collapsed(angle: f64, value: f64) -> Self {
        Self::new(angle, angle, value)
    }

    pub fn width(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// One sub-span of a node's input or output arc, tagged with the matrix cell it represents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSpan {
    /// Row of the matrix cell (the node the flow leaves).
    pub out_index: usize,
    /// Column of the matrix cell (the node the flow enters).
    pub in_index: usize,
    #[serde(flatten)]
    pub span: AngularSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    pub index: usize,
    pub input: AngularSpan,
    pub output: AngularSpan,
    pub total: AngularSpan,
    /// Decoration straddling the input/output boundary, not extra angular budget.
    pub throughput: AngularSpan,
    /// Inbound flow not matched by outbound flow; sits at the leading edge of `input`.
    pub drop_off: AngularSpan,
    /// Outbound flow not matched by inbound flow; sits at the trailing edge of `output`.
    pub drop_in: AngularSpan,
}

impl NodeDescriptor {
    /// Angular gap between the input and output sub-arcs.
    pub fn io_gap(&self) -> f64 {
        self.output.start_angle - self.input.end_angle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordDescriptor {
    /// Sub-span of the source node's output arc.
    pub source: FlowSpan,
    /// Sub-span of the target node's input arc, carrying the same value.
    pub target: FlowSpan,
}

impl ChordDescriptor {
    pub fn value(&self) -> f64 {
        self.source.span.value
    }

    pub fn is_self_loop(&self) -> bool {
        self.source.out_index == self.source.in_index
    }
}

/// Everything one solver run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedLayout {
    /// Descriptors in visiting order (the sorted node order, identity without `sort_nodes`).
    pub nodes: Vec<NodeDescriptor>,
    /// Chords in row-major order of their matrix cell.
    pub chords: Vec<ChordDescriptor>,
    /// Radians per unit of flow; zero when the matrix carries no flow.
    pub scale: f64,
    /// Mutation counter of the owning `ChordLayout` this layout was computed for.
    #[serde(skip)]
    pub revision: u64,
}

impl ComputedLayout {
    pub fn node(&self, index: usize) -> Option<&NodeDescriptor> {
        self.nodes.iter().find(|n| n.index == index)
    }

    /// Node indices in visiting order.
    pub fn order(&self) -> Vec<usize> {
        self.nodes.iter().map(|n| n.index).collect()
    }
}
