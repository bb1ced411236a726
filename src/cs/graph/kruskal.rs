use std::time::Instant;

use log::{debug, trace};

use super::disjoint_set::DisjointSet;
use super::edge::Weight;
use super::{Algorithm, Graph, MstResult, MstSolver};

/// Kruskal's algorithm as an [`MstSolver`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl MstSolver for Kruskal {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Kruskal
    }

    fn solve(&self, graph: &Graph) -> MstResult {
        minimum_spanning_tree(graph)
    }
}

/// Kruskal's algorithm to compute the MST for an undirected, weighted graph.
///
/// Edges are sorted by weight (stable, so equal weights keep their insertion order) and
/// accepted whenever their endpoints are still in different components. Stops as soon
/// as `V - 1` edges have been accepted.
///
/// Returns an empty result with zero cost if the graph is empty or disconnected; no
/// spanning forest is produced.
///
/// # Examples
/// ```
/// use mstkit::graph::{kruskal, Graph};
///
/// let graph = Graph::from_edges([("A", "B", 4), ("B", "C", 1), ("A", "C", 2)]);
/// let result = kruskal::minimum_spanning_tree(&graph);
/// assert_eq!(result.total_cost(), 3);
/// assert_eq!(result.edge_count(), 2);
/// ```
///
/// # Complexity
/// * Time: O(E log E)
/// * Space: O(V + E)
///
/// # Panics
/// The running total is a plain `i64` sum, so it overflows (and panics in debug
/// builds) if the tree's weights add up beyond `i64` range.
pub fn minimum_spanning_tree(graph: &Graph) -> MstResult {
    let start = Instant::now();

    if graph.is_empty() || !graph.is_connected() {
        debug!(
            "kruskal: empty or disconnected graph with {} vertices",
            graph.vertex_count()
        );
        return MstResult::empty();
    }

    let target = graph.vertex_count() - 1;
    let mut operations: u64 = 0;

    // Sort edges by weight
    let mut edges = graph.edges().to_vec();
    edges.sort_by_key(|e| e.weight());
    operations += 1;

    let mut uf = DisjointSet::new(graph.vertices().iter().map(String::as_str));
    let mut mst = Vec::with_capacity(target);
    let mut total_cost: Weight = 0;

    for edge in edges {
        operations += 1;

        if uf.connected(edge.from(), edge.to()) {
            trace!("kruskal: skipping {} (same component)", edge);
            continue;
        }

        operations += 1;
        uf.union(edge.from(), edge.to());
        total_cost += edge.weight();
        trace!("kruskal: adding {}, running cost {}", edge, total_cost);
        mst.push(edge);
        operations += 2;

        if mst.len() == target {
            break;
        }
    }

    operations += uf.operations();
    let elapsed = start.elapsed();

    debug!(
        "kruskal: {} edges, total cost {}, {} operations",
        mst.len(),
        total_cost,
        operations
    );
    MstResult::new(mst, total_cost, operations, elapsed)
}
