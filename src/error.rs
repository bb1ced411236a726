use thiserror::Error;

use crate::graph::Weight;

/// Errors raised while feeding graphs through the comparison pipeline.
///
/// The MST core itself never fails: disconnected and empty graphs produce an
/// empty result instead of an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("graph source failed: {0}")]
    Source(String),

    #[error("result sink failed: {0}")]
    Sink(String),

    #[error("graph {graph_id}: Prim total cost {prim} differs from Kruskal total cost {kruskal}")]
    CostMismatch {
        graph_id: u64,
        prim: Weight,
        kruskal: Weight,
    },
}

impl Error {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
