use std::collections::{HashMap, VecDeque};
use std::fmt;

use super::edge::{Edge, Weight};

/// Undirected, weighted graph over string-labelled vertices.
///
/// Vertices are kept in insertion order. Every edge is stored once in the edge list and
/// twice in the adjacency index: under `from` as-is and under `to` reversed, so that
/// [`Edge::to`] is always the far endpoint when walking `adjacent(v)`.
///
/// # Examples
/// ```
/// use mstkit::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 4);
/// graph.add_edge("B", "C", 1);
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.adjacent("B").len(), 2);
/// assert!(graph.is_connected());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<Edge>>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(from, to, weight)` triples.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, Weight)>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Adds a vertex. Does nothing if the label is already present.
    pub fn add_vertex<S: Into<String>>(&mut self, label: S) {
        self.slot(label.into());
    }

    /// Adds an undirected edge, adding either endpoint first if it is new.
    pub fn add_edge<A, B>(&mut self, from: A, to: B, weight: Weight)
    where
        A: Into<String>,
        B: Into<String>,
    {
        let edge = Edge::new(from, to, weight);
        let from_slot = self.slot(edge.from().to_string());
        let to_slot = self.slot(edge.to().to_string());

        self.adjacency[from_slot].push(edge.clone());
        self.adjacency[to_slot].push(edge.reversed());
        self.edges.push(edge);
    }

    fn slot(&mut self, label: String) -> usize {
        if let Some(&i) = self.index.get(&label) {
            return i;
        }
        let i = self.vertices.len();
        self.vertices.push(label.clone());
        self.index.insert(label, i);
        self.adjacency.push(Vec::new());
        i
    }

    /// All vertex labels in insertion order.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// All edges, each exactly once, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges incident to `v`, oriented away from it. Empty if `v` is unknown.
    pub fn adjacent(&self, v: &str) -> &[Edge] {
        match self.index.get(v) {
            Some(&i) => &self.adjacency[i],
            None => &[],
        }
    }

    pub fn contains_vertex(&self, v: &str) -> bool {
        self.index.contains_key(v)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Breadth-first search from the first vertex; true if every vertex is reached.
    ///
    /// The empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        if self.vertices.is_empty() {
            return true;
        }

        let mut visited = vec![false; self.vertices.len()];
        let mut queue = VecDeque::new();
        let mut reached = 1;
        visited[0] = true;
        queue.push_back(0);

        while let Some(current) = queue.pop_front() {
            for edge in &self.adjacency[current] {
                let next = self.index[edge.to()];
                if !visited[next] {
                    visited[next] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }

        reached == self.vertices.len()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph with {} vertices and {} edges:",
            self.vertex_count(),
            self.edge_count()
        )?;
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}
