use std::fmt;
use std::time::Duration;

use super::edge::{Edge, Weight};

/// Outcome of one MST computation.
///
/// Edges are kept in the order the solver accepted them. `operations_count` is only
/// comparable between runs of the same algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult {
    edges: Vec<Edge>,
    total_cost: Weight,
    operations_count: u64,
    execution_time_ms: f64,
}

impl MstResult {
    pub fn new(
        edges: Vec<Edge>,
        total_cost: Weight,
        operations_count: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            edges,
            total_cost,
            operations_count,
            execution_time_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    /// Result for an empty or disconnected graph: no edges, zero cost, nothing counted.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 0, Duration::ZERO)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn total_cost(&self) -> Weight {
        self.total_cost
    }

    pub fn operations_count(&self) -> u64 {
        self.operations_count
    }

    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time_ms
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl fmt::Display for MstResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MST Result:")?;
        writeln!(f, "Total Cost: {}", self.total_cost)?;
        writeln!(f, "Operations: {}", self.operations_count)?;
        writeln!(f, "Execution Time: {:.2} ms", self.execution_time_ms)?;
        writeln!(f, "Edges:")?;
        for edge in &self.edges {
            writeln!(f, "  {}", edge)?;
        }
        Ok(())
    }
}
