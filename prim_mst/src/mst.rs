use crate::graph::{Edge, Graph};
use index_min_pq::IndexMinPq;

/// A minimum spanning forest: for each vertex, the cheapest edge that
/// connected it to its component's growing tree. `None` marks a component
/// root (the vertex that seeded its component).
#[derive(Debug, Clone)]
pub struct SpanningForest {
    best_edge: Vec<Option<Edge>>,
}

impl SpanningForest {
    pub fn num_vertices(&self) -> usize {
        self.best_edge.len()
    }

    /// The tree edge into `v`, or `None` for a component root.
    pub fn best_edge(&self, v: usize) -> Option<&Edge> {
        self.best_edge[v].as_ref()
    }

    /// All tree edges across every component, in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.best_edge.iter().filter_map(|edge| edge.as_ref())
    }

    /// One root per connected component.
    pub fn num_components(&self) -> usize {
        self.best_edge.iter().filter(|edge| edge.is_none()).count()
    }

    pub fn total_weight(&self) -> f64 {
        self.edges().map(|edge| edge.weight).sum()
    }
}

/// Prim's algorithm over every connected component of `graph`.
///
/// Each unvisited vertex in increasing id order seeds a component; the inner
/// loop pops the closest unvisited vertex and relaxes its incident edges into
/// the queue, pushing absent endpoints and re-keying present ones. The queue
/// is shared across the whole run but only non-empty within one component.
pub fn spanning_forest(graph: &Graph) -> SpanningForest {
    let num_v = graph.num_vertices();
    let mut queue = IndexMinPq::new(num_v);
    let mut dist = vec![f64::INFINITY; num_v];
    let mut visited = vec![false; num_v];
    let mut best_edge: Vec<Option<Edge>> = vec![None; num_v];
    for seed in 0..num_v {
        if visited[seed] {
            continue;
        }
        dist[seed] = 0.;
        queue.push(dist[seed], seed).unwrap();
        while let Ok(root) = queue.pop() {
            visited[root] = true;
            for edge in graph.edges(root) {
                let adj = edge.other(root);
                if visited[adj] {
                    continue;
                }
                if edge.weight < dist[adj] {
                    dist[adj] = edge.weight;
                    best_edge[adj] = Some(*edge);
                    if queue.contains(adj).unwrap() {
                        queue.change_key(dist[adj], adj).unwrap();
                    } else {
                        queue.push(dist[adj], adj).unwrap();
                    }
                }
            }
        }
    }
    let forest = SpanningForest { best_edge };
    debug!(
        "spanning forest: {} vertices, {} components, total weight {}",
        num_v,
        forest.num_components(),
        forest.total_weight()
    );
    forest
}
