use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use interval_sssp::algorithm::{IntervalPathAlgorithm, MinMaxLabelSetting, SearchStats, WorstCaseDijkstra};
use interval_sssp::graph::generators::generate_random_interval_graph;
use interval_sssp::graph::{Graph, IntervalGraph};

// Function to benchmark the baseline on a graph
fn benchmark_baseline(graph: &IntervalGraph<f64>, source: usize, destination: usize) -> Duration {
    let start = Instant::now();
    let result = WorstCaseDijkstra::new().find_path(graph, source, destination);
    let duration = start.elapsed();

    match result {
        Ok(path) if path.is_reachable() => {
            println!("  - Baseline: B={} in {} hops, {:?}", path.worst, path.nodes.len() - 1, duration)
        }
        Ok(_) => println!("  - Baseline: unreachable, {:?}", duration),
        Err(err) => println!("  - Baseline failed: {}", err),
    }

    duration
}

// Function to benchmark the robust search on a graph
fn benchmark_robust(graph: &IntervalGraph<f64>, source: usize, destination: usize) -> (Duration, SearchStats) {
    let start = Instant::now();
    let result = MinMaxLabelSetting::new().search(graph, source, destination);
    let duration = start.elapsed();

    match result {
        Ok(result) => {
            if result.is_reachable() {
                println!(
                    "  - Robust: A={} B={} ({} labels), {:?}",
                    result.best.best, result.best.worst, result.stats.labels_created, duration
                );
            } else {
                println!("  - Robust: unreachable, {:?}", duration);
            }
            (duration, result.stats)
        }
        Err(err) => {
            println!("  - Robust search failed: {}", err);
            (duration, SearchStats::default())
        }
    }
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];

    // Edge factor: average number of edges per node
    let edge_factor = 3.0;
    let p_closed = 0.05;

    println!("=====================================================");
    println!("Benchmark: worst-case Dijkstra vs min-max label setting");
    println!("Edge factor: {} edges per node, closure probability {}", edge_factor, p_closed);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random interval graph with {} nodes...", size);
        let graph = match generate_random_interval_graph(size, edge_factor, p_closed, &mut rng) {
            Ok(graph) => graph,
            Err(err) => {
                println!("  - Generation failed: {}", err);
                continue;
            }
        };
        let source = 0;
        let destination = rng.gen_range(1..size);

        println!(
            "Graph has {} nodes and {} edges ({} open); routing {} -> {}",
            graph.node_count(),
            graph.edge_count(),
            graph.state_summary().open,
            source,
            destination
        );

        let baseline_time = benchmark_baseline(&graph, source, destination);
        let (robust_time, stats) = benchmark_robust(&graph, source, destination);

        results.push((size, baseline_time, robust_time, stats));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<13} | {:<11} | {:<8} | {:<8} | {:<10}",
        "Nodes", "Baseline (ms)", "Robust (ms)", "Labels", "Pruned", "Dominated"
    );
    println!("-----------------------------------------------------");

    for (size, baseline_time, robust_time, stats) in &results {
        println!(
            "{:<10} | {:<13.3} | {:<11.3} | {:<8} | {:<8} | {:<10}",
            size,
            baseline_time.as_secs_f64() * 1000.0,
            robust_time.as_secs_f64() * 1000.0,
            stats.labels_created,
            stats.pruned_by_bound,
            stats.dominated
        );
    }
}
