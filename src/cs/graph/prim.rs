use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

use log::{debug, trace};

use super::edge::{Edge, Weight};
use super::{Algorithm, Graph, MstResult, MstSolver};

/// Prim's algorithm as an [`MstSolver`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

impl MstSolver for Prim {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Prim
    }

    fn solve(&self, graph: &Graph) -> MstResult {
        minimum_spanning_tree(graph)
    }
}

/// Entry in the priority queue for Prim's algorithm
#[derive(Debug)]
struct Candidate<'a> {
    edge: &'a Edge,
    seq: u64,
}

impl Candidate<'_> {
    fn rank(&self) -> (Weight, u64) {
        (self.edge.weight(), self.seq)
    }
}

impl Eq for Candidate<'_> {}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap; earlier pushes win ties
        other.rank().cmp(&self.rank())
    }
}

/// Min-priority frontier. Entries for already visited vertices are left in place and
/// discarded when popped.
#[derive(Debug, Default)]
struct Frontier<'a> {
    heap: BinaryHeap<Candidate<'a>>,
    pushed: u64,
}

impl<'a> Frontier<'a> {
    fn push(&mut self, edge: &'a Edge) {
        self.heap.push(Candidate {
            edge,
            seq: self.pushed,
        });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<&'a Edge> {
        self.heap.pop().map(|c| c.edge)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Computes the minimum spanning tree (MST) of an undirected graph using Prim's algorithm.
///
/// Grows a single tree from the first vertex of the graph, always taking the lightest
/// frontier edge whose far endpoint is not yet in the tree. Equal weights are taken in
/// the order they entered the frontier, which follows adjacency order.
///
/// Edges in the result are oriented from the tree side towards the vertex they added.
/// Returns an empty result with zero cost if the graph is empty or disconnected.
///
/// # Examples
/// ```
/// use mstkit::graph::{prim, Graph};
///
/// let graph = Graph::from_edges([("A", "B", 4), ("A", "C", 2), ("B", "C", 1)]);
/// let result = prim::minimum_spanning_tree(&graph);
/// assert_eq!(result.total_cost(), 3);
/// ```
///
/// # Complexity
/// * Time: O(E log E), since stale entries are not removed from the heap
/// * Space: O(V + E)
///
/// # Panics
/// The running total is a plain `i64` sum, so it overflows (and panics in debug
/// builds) if the tree's weights add up beyond `i64` range.
pub fn minimum_spanning_tree(graph: &Graph) -> MstResult {
    let start = Instant::now();

    if graph.is_empty() || !graph.is_connected() {
        debug!(
            "prim: empty or disconnected graph with {} vertices",
            graph.vertex_count()
        );
        return MstResult::empty();
    }

    let vertex_count = graph.vertex_count();
    let mut operations: u64 = 0;
    let mut mst = Vec::with_capacity(vertex_count - 1);
    let mut total_cost: Weight = 0;
    let mut visited: HashSet<&str> = HashSet::with_capacity(vertex_count);
    let mut frontier = Frontier::default();

    // Initialize with start vertex
    let root = graph.vertices()[0].as_str();
    visited.insert(root);
    for edge in graph.adjacent(root) {
        frontier.push(edge);
    }
    operations += 1;

    while visited.len() < vertex_count {
        let Some(edge) = frontier.pop() else {
            break;
        };
        operations += 1;

        if visited.contains(edge.to()) {
            operations += 1;
            continue;
        }

        mst.push(edge.clone());
        total_cost += edge.weight();
        visited.insert(edge.to());
        operations += 3;
        trace!("prim: adding {}, running cost {}", edge, total_cost);

        // Add edges to unvisited neighbors
        for next in graph.adjacent(edge.to()) {
            operations += 1;
            if !visited.contains(next.to()) {
                frontier.push(next);
                operations += 1;
            }
        }
    }

    let elapsed = start.elapsed();

    debug!(
        "prim: {} edges, total cost {}, {} operations, {} entries left in frontier",
        mst.len(),
        total_cost,
        operations,
        frontier.len()
    );
    MstResult::new(mst, total_cost, operations, elapsed)
}
