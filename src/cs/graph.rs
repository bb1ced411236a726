//! Minimum spanning trees over undirected, weighted graphs.
//!
//! This module provides:
//! - [`Graph`]: string-labelled undirected graph with an adjacency index
//! - [`DisjointSet`]: union-find with path compression and union by rank
//! - [`kruskal`] and [`prim`]: the two MST solvers, both returning an [`MstResult`]
//! - [`comparison`]: runs both solvers over a stream of graphs and checks they agree
//!
//! # Examples
//!
//! ```rust
//! use mstkit::graph::{Algorithm, Graph};
//!
//! let graph = Graph::from_edges([("A", "B", 4), ("A", "C", 3), ("B", "C", 2)]);
//!
//! let prim = Algorithm::Prim.solver().solve(&graph);
//! let kruskal = Algorithm::Kruskal.solver().solve(&graph);
//! assert_eq!(prim.total_cost(), 5);
//! assert_eq!(prim.total_cost(), kruskal.total_cost());
//! ```

use std::fmt;

pub mod comparison;
pub mod disjoint_set;
pub mod edge;
pub mod kruskal;
pub mod mst_result;
pub mod prim;
pub mod undirected;


pub use comparison::{
    ComparisonConfig, ComparisonReport, GraphInput, GraphSource, ResultSink, RunSummary,
    VecSink, VecSource,
};
pub use disjoint_set::DisjointSet;
pub use edge::{Edge, Weight};
pub use kruskal::Kruskal;
pub use mst_result::MstResult;
pub use prim::Prim;
pub use undirected::Graph;

/// The MST algorithms available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Prim,
    Kruskal,
}

impl Algorithm {
    pub fn solver(self) -> Box<dyn MstSolver> {
        match self {
            Algorithm::Prim => Box::new(Prim),
            Algorithm::Kruskal => Box::new(Kruskal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Prim => write!(f, "Prim"),
            Algorithm::Kruskal => write!(f, "Kruskal"),
        }
    }
}

/// Computes a minimum spanning tree of a graph without modifying it.
///
/// Implementations keep no state between calls, so one solver may be shared across
/// threads and reused on any number of graphs.
pub trait MstSolver: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    fn solve(&self, graph: &Graph) -> MstResult;
}
