//! Feeds graphs through both MST solvers and checks that they agree on the total cost.
//!
//! Where the graphs come from and where the reports go is left to the caller through
//! the [`GraphSource`] and [`ResultSink`] traits. [`VecSource`] and [`VecSink`] cover
//! the in-memory case.

use std::collections::VecDeque;

use log::{error, info, warn};

use super::{Graph, Kruskal, MstResult, MstSolver, Prim, Weight};
use crate::error::{Error, Result};

/// A graph together with the identifier it is reported under.
#[derive(Debug, Clone)]
pub struct GraphInput {
    pub id: u64,
    pub graph: Graph,
}

impl GraphInput {
    pub fn new(id: u64, graph: Graph) -> Self {
        Self { id, graph }
    }
}

/// Yields fully built graphs, one at a time, until it returns `Ok(None)`.
pub trait GraphSource {
    fn next_graph(&mut self) -> Result<Option<GraphInput>>;
}

/// Consumes one report per processed graph.
pub trait ResultSink {
    fn accept(&mut self, report: ComparisonReport) -> Result<()>;
}

/// In-memory source handing out its graphs in order.
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    pending: VecDeque<GraphInput>,
}

impl VecSource {
    pub fn new(inputs: Vec<GraphInput>) -> Self {
        Self {
            pending: inputs.into(),
        }
    }
}

impl GraphSource for VecSource {
    fn next_graph(&mut self) -> Result<Option<GraphInput>> {
        Ok(self.pending.pop_front())
    }
}

/// In-memory sink collecting every report it is given.
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    pub reports: Vec<ComparisonReport>,
}

impl ResultSink for VecSink {
    fn accept(&mut self, report: ComparisonReport) -> Result<()> {
        self.reports.push(report);
        Ok(())
    }
}

/// Both solver results for one graph, with the input's size.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub graph_id: u64,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub prim: MstResult,
    pub kruskal: MstResult,
}

impl ComparisonReport {
    pub fn costs_match(&self) -> bool {
        self.prim.total_cost() == self.kruskal.total_cost()
    }

    pub fn total_cost(&self) -> Option<Weight> {
        self.costs_match().then_some(self.prim.total_cost())
    }
}

/// Configuration for [`run`].
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    /// Skip disconnected graphs instead of reporting two empty results
    pub skip_disconnected: bool,
    /// Stop with [`Error::CostMismatch`] when the solvers disagree
    pub fail_on_mismatch: bool,
    /// Run Prim and Kruskal concurrently on each graph
    pub parallel: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            skip_disconnected: true,
            fail_on_mismatch: false,
            parallel: false,
        }
    }
}

/// Counts gathered over one [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped_disconnected: usize,
    pub mismatches: usize,
}

/// Runs both solvers on one graph.
///
/// With `parallel` set the two solvers share the graph read-only from two rayon tasks.
pub fn compare(id: u64, graph: &Graph, parallel: bool) -> ComparisonReport {
    compare_with(id, graph, &Prim, &Kruskal, parallel)
}

/// Like [`compare`], with the solvers filling the `prim` and `kruskal` slots supplied
/// by the caller.
pub fn compare_with(
    id: u64,
    graph: &Graph,
    prim: &dyn MstSolver,
    kruskal: &dyn MstSolver,
    parallel: bool,
) -> ComparisonReport {
    let (prim, kruskal) = if parallel {
        rayon::join(|| prim.solve(graph), || kruskal.solve(graph))
    } else {
        (prim.solve(graph), kruskal.solve(graph))
    };

    ComparisonReport {
        graph_id: id,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        prim,
        kruskal,
    }
}

/// Pulls every graph from `source`, solves it with both algorithms and hands the report
/// to `sink`.
///
/// Disconnected graphs are logged and, by default, skipped. Errors from the source or
/// the sink stop the run and are returned as-is.
///
/// # Examples
/// ```
/// use mstkit::graph::{comparison, ComparisonConfig, Graph, GraphInput, VecSink, VecSource};
///
/// let mut source = VecSource::new(vec![
///     GraphInput::new(1, Graph::from_edges([("A", "B", 1), ("B", "C", 2)])),
///     GraphInput::new(2, Graph::from_edges([("A", "B", 1), ("C", "D", 2)])),
/// ]);
/// let mut sink = VecSink::default();
///
/// let summary = comparison::run(&mut source, &mut sink, &ComparisonConfig::default()).unwrap();
/// assert_eq!(summary.processed, 1);
/// assert_eq!(summary.skipped_disconnected, 1);
/// assert_eq!(sink.reports[0].total_cost(), Some(3));
/// ```
pub fn run<S, K>(source: &mut S, sink: &mut K, config: &ComparisonConfig) -> Result<RunSummary>
where
    S: GraphSource + ?Sized,
    K: ResultSink + ?Sized,
{
    run_with(source, sink, config, &Prim, &Kruskal)
}

/// Like [`run`], with caller-supplied solvers in the `prim` and `kruskal` slots.
///
/// A cost mismatch is counted and logged; the report still reaches the sink unless
/// `fail_on_mismatch` is set, in which case the run stops with
/// [`Error::CostMismatch`].
pub fn run_with<S, K>(
    source: &mut S,
    sink: &mut K,
    config: &ComparisonConfig,
    prim: &dyn MstSolver,
    kruskal: &dyn MstSolver,
) -> Result<RunSummary>
where
    S: GraphSource + ?Sized,
    K: ResultSink + ?Sized,
{
    let mut summary = RunSummary::default();

    while let Some(GraphInput { id, graph }) = source.next_graph()? {
        info!(
            "graph {}: {} vertices, {} edges",
            id,
            graph.vertex_count(),
            graph.edge_count()
        );

        if !graph.is_connected() {
            warn!("graph {} is not connected", id);
            if config.skip_disconnected {
                summary.skipped_disconnected += 1;
                continue;
            }
        }

        let report = compare_with(id, &graph, prim, kruskal, config.parallel);

        if report.costs_match() {
            info!(
                "graph {}: both algorithms produced total cost {}",
                id,
                report.prim.total_cost()
            );
        } else {
            error!(
                "graph {}: {} cost {} differs from {} cost {}",
                id,
                prim.algorithm(),
                report.prim.total_cost(),
                kruskal.algorithm(),
                report.kruskal.total_cost()
            );
            summary.mismatches += 1;
            if config.fail_on_mismatch {
                return Err(Error::CostMismatch {
                    graph_id: id,
                    prim: report.prim.total_cost(),
                    kruskal: report.kruskal.total_cost(),
                });
            }
        }

        sink.accept(report)?;
        summary.processed += 1;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Algorithm;
    use std::time::Duration;

    fn canonical() -> Graph {
        Graph::from_edges([
            ("A", "B", 4),
            ("A", "C", 3),
            ("B", "C", 2),
            ("B", "D", 5),
            ("C", "D", 7),
            ("C", "E", 8),
            ("D", "E", 6),
        ])
    }

    fn disconnected() -> Graph {
        Graph::from_edges([("A", "B", 1), ("C", "D", 2)])
    }

    struct FailingSource;

    impl GraphSource for FailingSource {
        fn next_graph(&mut self) -> Result<Option<GraphInput>> {
            Err(Error::Source("unreadable input".to_string()))
        }
    }

    /// Kruskal's tree with every weight counted one higher.
    struct InflatedCost;

    impl MstSolver for InflatedCost {
        fn algorithm(&self) -> Algorithm {
            Algorithm::Kruskal
        }

        fn solve(&self, graph: &Graph) -> MstResult {
            let exact = Kruskal.solve(graph);
            let cost = exact.total_cost() + exact.edge_count() as Weight;
            MstResult::new(
                exact.edges().to_vec(),
                cost,
                exact.operations_count(),
                Duration::ZERO,
            )
        }
    }

    struct FailingSink;

    impl ResultSink for FailingSink {
        fn accept(&mut self, _report: ComparisonReport) -> Result<()> {
            Err(Error::Sink("disk full".to_string()))
        }
    }

    #[test]
    fn test_compare_canonical() {
        let report = compare(7, &canonical(), false);
        assert_eq!(report.graph_id, 7);
        assert_eq!(report.vertex_count, 5);
        assert_eq!(report.edge_count, 7);
        assert!(report.costs_match());
        assert_eq!(report.total_cost(), Some(16));
    }

    #[test]
    fn test_compare_parallel_matches_sequential() {
        let graph = canonical();
        let sequential = compare(1, &graph, false);
        let parallel = compare(1, &graph, true);
        assert_eq!(sequential.prim.edges(), parallel.prim.edges());
        assert_eq!(sequential.kruskal.edges(), parallel.kruskal.edges());
        assert_eq!(
            sequential.prim.operations_count(),
            parallel.prim.operations_count()
        );
    }

    #[test]
    fn test_run_skips_disconnected() {
        let mut source = VecSource::new(vec![
            GraphInput::new(1, canonical()),
            GraphInput::new(2, disconnected()),
            GraphInput::new(3, Graph::from_edges([("A", "B", 5)])),
        ]);
        let mut sink = VecSink::default();

        let summary = run(&mut source, &mut sink, &ComparisonConfig::default()).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                processed: 2,
                skipped_disconnected: 1,
                mismatches: 0,
            }
        );
        let ids: Vec<u64> = sink.reports.iter().map(|r| r.graph_id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(sink.reports[1].total_cost(), Some(5));
    }

    #[test]
    fn test_run_reports_disconnected_when_asked() {
        let mut source = VecSource::new(vec![GraphInput::new(2, disconnected())]);
        let mut sink = VecSink::default();
        let config = ComparisonConfig {
            skip_disconnected: false,
            ..ComparisonConfig::default()
        };

        let summary = run(&mut source, &mut sink, &config).unwrap();
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.skipped_disconnected, 0);

        let report = &sink.reports[0];
        assert!(report.prim.is_empty());
        assert!(report.kruskal.is_empty());
        assert_eq!(report.total_cost(), Some(0));
    }

    #[test]
    fn test_run_parallel() {
        let mut source = VecSource::new(vec![GraphInput::new(1, canonical())]);
        let mut sink = VecSink::default();
        let config = ComparisonConfig {
            parallel: true,
            fail_on_mismatch: true,
            ..ComparisonConfig::default()
        };

        run(&mut source, &mut sink, &config).unwrap();
        assert_eq!(sink.reports[0].total_cost(), Some(16));
    }

    #[test]
    fn test_run_empty_source() {
        let mut source = VecSource::default();
        let mut sink = VecSink::default();
        let summary = run(&mut source, &mut sink, &ComparisonConfig::default()).unwrap();
        assert_eq!(summary, RunSummary::default());
        assert!(sink.reports.is_empty());
    }

    #[test]
    fn test_source_error_propagates() {
        let mut sink = VecSink::default();
        let err = run(&mut FailingSource, &mut sink, &ComparisonConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Source(_)));
    }

    #[test]
    fn test_sink_error_propagates() {
        let mut source = VecSource::new(vec![GraphInput::new(1, canonical())]);
        let err = run(&mut source, &mut FailingSink, &ComparisonConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Sink(_)));
    }

    #[test]
    fn test_report_mismatch() {
        let matching = compare(1, &canonical(), false);
        let report = ComparisonReport {
            kruskal: compare(2, &Graph::from_edges([("A", "B", 5)]), false).kruskal,
            ..matching
        };
        assert!(!report.costs_match());
        assert_eq!(report.total_cost(), None);
    }

    #[test]
    fn test_trait_objects() {
        let mut source: Box<dyn GraphSource> =
            Box::new(VecSource::new(vec![GraphInput::new(1, canonical())]));
        let mut sink: Box<dyn ResultSink> = Box::new(VecSink::default());
        let summary = run(source.as_mut(), sink.as_mut(), &ComparisonConfig::default()).unwrap();
        assert_eq!(summary.processed, 1);
    }

    #[test]
    fn test_mismatch_is_counted_and_reported() {
        let mut source = VecSource::new(vec![
            GraphInput::new(1, canonical()),
            GraphInput::new(2, Graph::from_edges([("A", "B", 5)])),
        ]);
        let mut sink = VecSink::default();

        let summary = run_with(
            &mut source,
            &mut sink,
            &ComparisonConfig::default(),
            &Prim,
            &InflatedCost,
        )
        .unwrap();
        assert_eq!(
            summary,
            RunSummary {
                processed: 2,
                skipped_disconnected: 0,
                mismatches: 2,
            }
        );
        assert_eq!(sink.reports.len(), 2);
        assert_eq!(sink.reports[0].prim.total_cost(), 16);
        assert_eq!(sink.reports[0].kruskal.total_cost(), 20);
        assert_eq!(sink.reports[0].total_cost(), None);
    }

    #[test]
    fn test_mismatch_fails_when_strict() {
        let mut source = VecSource::new(vec![GraphInput::new(9, canonical())]);
        let mut sink = VecSink::default();
        let config = ComparisonConfig {
            fail_on_mismatch: true,
            ..ComparisonConfig::default()
        };

        let err = run_with(&mut source, &mut sink, &config, &Prim, &InflatedCost).unwrap_err();
        assert!(matches!(
            err,
            Error::CostMismatch {
                graph_id: 9,
                prim: 16,
                kruskal: 20,
            }
        ));
        assert!(sink.reports.is_empty(), "failing report is not forwarded");
    }

    #[test]
    fn test_compare_with_parallel_solvers() {
        let report = compare_with(3, &canonical(), &Kruskal, &InflatedCost, true);
        assert_eq!(report.prim.total_cost(), 16);
        assert_eq!(report.kruskal.total_cost(), 20);
        assert!(!report.costs_match());
    }
}
