use crate::config::{self, Comparator, LayoutConfig};
use crate::error::Result;
use crate::matrix::FlowMatrix;
use crate::model::{AngularSpan, ChordDescriptor, ComputedLayout, FlowSpan, NodeDescriptor};
use std::cell::OnceCell;
use std::f64::consts::TAU;

/// Chord-flow layout with a lazily computed, memoized result.
///
/// Every mutator bumps the revision and drops the memo before returning; the next read
/// recomputes from scratch. Reads without an intervening mutation hand out the same data.
#[derive(Debug, Default)]
pub struct ChordLayout {
    matrix: Option<FlowMatrix>,
    config: LayoutConfig,
    revision: u64,
    cache: OnceCell<ComputedLayout>,
}

impl ChordLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matrix(matrix: FlowMatrix) -> Result<Self> {
        let mut layout = Self::new();
        layout.set_matrix(matrix)?;
        Ok(layout)
    }

    pub fn with_config(matrix: FlowMatrix, config: LayoutConfig) -> Result<Self> {
        config.validate(matrix.len())?;
        Ok(Self {
            matrix: Some(matrix),
            config,
            revision: 0,
            cache: OnceCell::new(),
        })
    }

    pub fn matrix(&self) -> Option<&FlowMatrix> {
        self.matrix.as_ref()
    }

    /// Number of nodes; zero while no matrix is set.
    pub fn len(&self) -> usize {
        self.matrix.as_ref().map_or(0, FlowMatrix::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn set_matrix(&mut self, matrix: FlowMatrix) -> Result<()> {
        config::validate_budget(self.config.node_padding, self.config.io_padding, matrix.len())?;
        self.matrix = Some(matrix);
        self.invalidate();
        Ok(())
    }

    pub fn clear_matrix(&mut self) {
        self.matrix = None;
        self.invalidate();
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) -> Result<()> {
        config.validate(self.len())?;
        self.config = config;
        self.invalidate();
        Ok(())
    }

    pub fn node_padding(&self) -> f64 {
        self.config.node_padding
    }

    pub fn set_node_padding(&mut self, radians: f64) -> Result<()> {
        config::validate_padding("nodePadding", radians)?;
        config::validate_budget(radians, self.config.io_padding, self.len())?;
        self.config.node_padding = radians;
        self.invalidate();
        Ok(())
    }

    pub fn io_padding(&self) -> f64 {
        self.config.io_padding
    }

    pub fn set_io_padding(&mut self, radians: f64) -> Result<()> {
        config::validate_padding("ioPadding", radians)?;
        config::validate_budget(self.config.node_padding, radians, self.len())?;
        self.config.io_padding = radians;
        self.invalidate();
        Ok(())
    }

    pub fn sort_nodes(&self) -> Option<&Comparator> {
        self.config.sort_nodes.as_ref()
    }

    pub fn set_sort_nodes(&mut self, comparator: Option<Comparator>) {
        self.config.sort_nodes = comparator;
        self.invalidate();
    }

    pub fn sort_flows(&self) -> Option<&Comparator> {
        self.config.sort_flows.as_ref()
    }

    pub fn set_sort_flows(&mut self, comparator: Option<Comparator>) {
        self.config.sort_flows = comparator;
        self.invalidate();
    }

    /// Mutation counter; changes on every successful setter call.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether a computed layout is currently memoized.
    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }

    pub fn layout(&self) -> &ComputedLayout {
        self.cache.get_or_init(|| {
            let mut computed = match &self.matrix {
                Some(matrix) => relayout(matrix, &self.config),
                None => ComputedLayout {
                    nodes: Vec::new(),
                    chords: Vec::new(),
                    scale: 0.0,
                    revision: 0,
                },
            };
            computed.revision = self.revision;
            computed
        })
    }

    pub fn nodes(&self) -> &[NodeDescriptor] {
        &self.layout().nodes
    }

    pub fn chords(&self) -> &[ChordDescriptor] {
        &self.layout().chords
    }

    fn invalidate(&mut self) {
        self.revision += 1;
        self.cache = OnceCell::new();
    }
}

/// Computes node and chord descriptors for `matrix`.
///
/// Nodes are swept clockwise from angle zero in visiting order. Each node lays out its incoming
/// sub-spans, then `io_padding`, then its outgoing sub-spans, then `node_padding`. The neighbour
/// rotation makes chords of adjacent nodes meet edge to edge instead of crossing at the ring.
pub fn relayout(matrix: &FlowMatrix, config: &LayoutConfig) -> ComputedLayout {
    let n = matrix.len();
    let input_sums: Vec<f64> = (0..n).map(|i| matrix.input_sum(i)).collect();
    let output_sums: Vec<f64> = (0..n).map(|i| matrix.output_sum(i)).collect();
    let totals: Vec<f64> = input_sums
        .iter()
        .zip(&output_sums)
        .map(|(i, o)| i + o)
        .collect();
    let grand_total: f64 = totals.iter().sum();

    let order = visiting_order(&totals, config.sort_nodes.as_ref());

    if grand_total <= 0.0 {
        tracing::debug!(nodes = n, "flow matrix carries no flow; collapsing every node span");
        let nodes = order
            .iter()
            .map(|&i| collapsed_node(i, input_sums[i], output_sums[i]))
            .collect();
        return ComputedLayout {
            nodes,
            chords: Vec::new(),
            scale: 0.0,
            revision: 0,
        };
    }

    let (in_orders, out_orders) = flow_orders(matrix, &order, config.sort_flows.as_ref());

    let k = (TAU - (config.node_padding + config.io_padding) * n as f64) / grand_total;
    tracing::debug!(nodes = n, grand_total, scale = k, "relayout");

    // Dense (source, target) tables; slot `from * n + to` holds the two halves of one chord.
    let mut sources: Vec<Option<AngularSpan>> = vec![None; n * n];
    let mut targets: Vec<Option<AngularSpan>> = vec![None; n * n];
    let mut nodes = Vec::with_capacity(n);

    let mut r = 0.0;
    for &node in &order {
        let ri = r;
        for &from in &in_orders[node] {
            let value = matrix.value(from, node);
            let start = r;
            r += value * k;
            targets[from * n + node] = Some(AngularSpan::new(start, r, value));
        }
        let input = AngularSpan::new(ri, r, input_sums[node]);

        r += config.io_padding;
        let ro = r;
        for &to in &out_orders[node] {
            let value = matrix.value(node, to);
            let start = r;
            r += value * k;
            sources[node * n + to] = Some(AngularSpan::new(start, r, value));
        }
        let output = AngularSpan::new(ro, r, output_sums[node]);
        let total = AngularSpan::new(ri, r, totals[node]);

        let (throughput, drop_off, drop_in) = decorations(&input, &output, k);
        tracing::trace!(
            node,
            start = ri,
            end = r,
            throughput = throughput.value,
            "node spans"
        );

        nodes.push(NodeDescriptor {
            index: node,
            input,
            output,
            total,
            throughput,
            drop_off,
            drop_in,
        });
        r += config.node_padding;
    }

    let mut chords = Vec::new();
    for from in 0..n {
        for to in 0..n {
            let slot = from * n + to;
            let (Some(source), Some(target)) = (sources[slot], targets[slot]) else {
                continue;
            };
            if source.value <= 0.0 {
                continue;
            }
            chords.push(ChordDescriptor {
                source: FlowSpan {
                    out_index: from,
                    in_index: to,
                    span: source,
                },
                target: FlowSpan {
                    out_index: from,
                    in_index: to,
                    span: target,
                },
            });
        }
    }

    ComputedLayout {
        nodes,
        chords,
        scale: k,
        revision: 0,
    }
}

fn visiting_order(totals: &[f64], sort_nodes: Option<&Comparator>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..totals.len()).collect();
    if let Some(cmp) = sort_nodes {
        order.sort_by(|&a, &b| cmp(totals[a], totals[b]));
    }
    order
}

/// Incoming and outgoing neighbour orders, indexed by node.
fn flow_orders(
    matrix: &FlowMatrix,
    order: &[usize],
    sort_flows: Option<&Comparator>,
) -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
    let n = order.len();
    let mut in_orders = vec![Vec::new(); n];
    let mut out_orders = vec![Vec::new(); n];

    for (position, &node) in order.iter().enumerate() {
        let mut outgoing = rotated(order, (position + 1) % n);
        outgoing.reverse();
        let mut incoming = rotated(order, position);
        incoming.reverse();

        if let Some(cmp) = sort_flows {
            let weight = |other: usize| matrix.value(node, other) + matrix.value(other, node);
            outgoing.sort_by(|&a, &b| cmp(weight(a), weight(b)));
            incoming.sort_by(|&a, &b| cmp(weight(a), weight(b)).reverse());
        }

        in_orders[node] = incoming;
        out_orders[node] = outgoing;
    }

    (in_orders, out_orders)
}

fn rotated(order: &[usize], start: usize) -> Vec<usize> {
    order[start..].iter().chain(&order[..start]).copied().collect()
}

/// Throughput, drop-off and drop-in spans layered over the input/output arcs.
fn decorations(
    input: &AngularSpan,
    output: &AngularSpan,
    k: f64,
) -> (AngularSpan, AngularSpan, AngularSpan) {
    let throughput = input.value.min(output.value);
    let drop_off = input.value - throughput;
    let drop_in = output.value - throughput;
    (
        AngularSpan::new(
            input.end_angle - throughput * k,
            output.start_angle + throughput * k,
            throughput,
        ),
        AngularSpan::new(
            input.start_angle,
            input.start_angle + drop_off * k,
            drop_off,
        ),
        AngularSpan::new(output.end_angle - drop_in * k, output.end_angle, drop_in),
    )
}

fn collapsed_node(index: usize, input_sum: f64, output_sum: f64) -> NodeDescriptor {
    let throughput = input_sum.min(output_sum);
    NodeDescriptor {
        index,
        input: AngularSpan::collapsed(0.0, input_sum),
        output: AngularSpan::collapsed(0.0, output_sum),
        total: AngularSpan::collapsed(0.0, input_sum + output_sum),
        throughput: AngularSpan::collapsed(0.0, throughput),
        drop_off: AngularSpan::collapsed(0.0, input_sum - throughput),
        drop_in: AngularSpan::collapsed(0.0, output_sum - throughput),
    }
}
