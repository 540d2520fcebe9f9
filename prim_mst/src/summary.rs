use crate::graph::{Edge, Graph};
use crate::mst::SpanningForest;

/// Digest of a spanning forest for downstream consumers (JSON output,
/// visualization). The core makes no formatting decisions beyond this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestSummary {
    pub num_vertices: usize,
    pub num_components: usize,
    pub total_weight: f64,
    pub edges: Vec<Edge>,
}

pub fn summarize(graph: &Graph, forest: &SpanningForest) -> ForestSummary {
    ForestSummary {
        num_vertices: graph.num_vertices(),
        num_components: forest.num_components(),
        total_weight: forest.total_weight(),
        edges: forest.edges().copied().collect(),
    }
}
