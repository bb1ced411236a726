use mstkit::graph::{
    comparison, ComparisonConfig, ComparisonReport, Graph, GraphInput, ResultSink, VecSource,
};
use mstkit::{Error, Result};

/// Prints every report to stdout as it arrives.
struct ConsoleSink;

impl ResultSink for ConsoleSink {
    fn accept(&mut self, report: ComparisonReport) -> Result<()> {
        println!("\n=== Graph {} ===", report.graph_id);
        println!("Vertices: {}", report.vertex_count);
        println!("Edges: {}", report.edge_count);
        println!("\nPrim's Algorithm\n{}", report.prim);
        println!("Kruskal's Algorithm\n{}", report.kruskal);
        match report.total_cost() {
            Some(cost) => println!("Both algorithms produced same total cost: {}", cost),
            None => println!("ERROR: Algorithms produced different costs!"),
        }
        Ok(())
    }
}

fn sample_graphs() -> Vec<GraphInput> {
    let mut ring = Graph::new();
    for i in 0..20 {
        ring.add_edge(format!("R{}", i), format!("R{}", (i + 1) % 20), (i % 7) + 1);
    }
    ring.add_edge("R0", "R10", 1);

    vec![
        GraphInput::new(
            1,
            Graph::from_edges([
                ("A", "B", 4),
                ("A", "C", 3),
                ("B", "C", 2),
                ("B", "D", 5),
                ("C", "D", 7),
                ("C", "E", 8),
                ("D", "E", 6),
            ]),
        ),
        GraphInput::new(2, Graph::from_edges([("A", "B", 1), ("C", "D", 2)])),
        GraphInput::new(3, Graph::from_edges([("A", "B", 5)])),
        GraphInput::new(4, ring),
    ]
}

fn parse_args() -> Result<ComparisonConfig> {
    let mut config = ComparisonConfig::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--parallel" => config.parallel = true,
            "--keep-disconnected" => config.skip_disconnected = false,
            "--strict" => config.fail_on_mismatch = true,
            other => return Err(Error::invalid_input(format!("unknown argument `{}`", other))),
        }
    }
    Ok(config)
}

fn main() {
    let result = parse_args().and_then(|config| {
        let mut source = VecSource::new(sample_graphs());
        comparison::run(&mut source, &mut ConsoleSink, &config)
    });

    match result {
        Ok(summary) => println!(
            "\nDone: {} processed, {} skipped as disconnected, {} mismatches",
            summary.processed, summary.skipped_disconnected, summary.mismatches
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
