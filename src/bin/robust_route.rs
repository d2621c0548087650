use clap::Parser;
use colored::*;
use interval_sssp::config::ScenarioConfig;
use interval_sssp::graph::generators::embedded_network;
use interval_sssp::graph::{Graph, IntervalGraph};
use interval_sssp::{robust_shortest_path, RouteReport, Verdict};
use std::process::ExitCode;

/// Robust route over the embedded network with randomly closed edges
#[derive(Parser, Debug)]
#[command(name = "robust_route", version, about)]
struct Cli {
    /// Seed used to close or open edges
    #[arg(long, env = "INTERVAL_SSSP_SEED", default_value_t = 42)]
    seed: u64,

    /// Probability of marking an edge as closed (0..1)
    #[arg(long = "p", env = "INTERVAL_SSSP_P_CLOSED", default_value_t = 0.02)]
    p_closed: f64,

    /// Source node
    #[arg(long = "src", env = "INTERVAL_SSSP_SRC", default_value = "b")]
    source: String,

    /// Destination node
    #[arg(long = "dst", env = "INTERVAL_SSSP_DST", default_value = "g")]
    destination: String,

    /// Print the JSON report instead of the step-by-step narration
    #[arg(long, env = "INTERVAL_SSSP_JSON")]
    json: bool,
}

impl From<Cli> for ScenarioConfig {
    fn from(cli: Cli) -> Self {
        ScenarioConfig {
            seed: cli.seed,
            p_closed: cli.p_closed,
            source: cli.source,
            destination: cli.destination,
            json: cli.json,
        }
    }
}

fn tag(delta: f64) -> ColoredString {
    if delta == 0.0 {
        "equal".normal()
    } else if delta < 0.0 {
        "better (↓)".green()
    } else {
        "worse (↑)".red()
    }
}

fn describe_graph(graph: &IntervalGraph<f64>) {
    let summary = graph.state_summary();
    println!("1) Edge states");
    println!(
        "   - Total edges: {} | open: {} | closed: {}",
        summary.total, summary.open, summary.closed
    );
    println!("   - List (u -> v [a, b] state):");
    for edge in graph.edges() {
        let state = edge.state.to_string();
        let state = if edge.is_open() { state.green() } else { state.red() };
        println!(
            "     • {} -> {}  [{}, {}]  state={}",
            graph.node_name(edge.from).unwrap_or("?"),
            graph.node_name(edge.to).unwrap_or("?"),
            edge.cost.best,
            edge.cost.worst,
            state
        );
    }
}

fn run(config: &ScenarioConfig) -> interval_sssp::Result<()> {
    config.validate()?;
    let graph = embedded_network(config.seed, config.p_closed)?;
    let source = graph.resolve(&config.source)?;
    let destination = graph.resolve(&config.destination)?;

    let result = robust_shortest_path(&graph, &config.source, &config.destination)?;
    let report = RouteReport::assemble(&graph, &result);

    if config.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("{}", "=== SCENARIO ===".bold());
    println!(
        "Seed={}  Closure probability={:.2}  Source={}  Destination={}",
        config.seed, config.p_closed, config.source, config.destination
    );
    println!();
    describe_graph(&graph);

    println!("\n2) Preprocessing (closed edges removed)");
    let preprocessed = graph.preprocess();
    println!(
        "   - Usable edges: {} (all open after preprocessing)",
        preprocessed.edge_count()
    );

    println!("\n3) Reachability from the source");
    if graph.reachable_from(source)?.contains(&destination) {
        println!(
            "   - Destination '{}' is reachable from '{}' over open edges.",
            config.destination, config.source
        );
    } else {
        println!(
            "   - Destination '{}' is NOT reachable from '{}'. No route will exist.",
            config.destination, config.source
        );
    }

    println!("\n4) Route computation");
    if report.baseline.path.is_empty() {
        println!("   - No baseline route (no path over open edges).");
        println!(
            "\n6) Final summary\n   Result: {} due to closures. Try lowering --p or changing --seed.\n",
            "INFEASIBLE".red().bold()
        );
        return Ok(());
    }
    println!(
        "   - Baseline route found: {:?} (A={}, B={})",
        report.baseline.path, report.baseline.best, report.baseline.worst
    );
    println!("   - Running the min-max label-setting search pruned by the baseline...");
    if report.is_feasible() {
        println!(
            "   - Robust route found: {:?} (A*={}, B*={})",
            report.best_path, report.best_a, report.best_b
        );
    } else {
        println!("   - No robust route found.");
    }
    log::debug!("search statistics: {:?}", result.stats);

    if let Some((delta_a, delta_b)) = report.delta() {
        println!("\n5) Baseline vs. robust route (min-max criterion)");
        println!(
            "   - Baseline : {:?} | A_base={} | B_base={}",
            report.baseline.path, report.baseline.best, report.baseline.worst
        );
        println!(
            "   - Robust   : {:?} | A*={} | B*={}",
            report.best_path, report.best_a, report.best_b
        );
        println!(
            "   - Deltas   : ΔA={} ({}), ΔB={} ({})",
            delta_a,
            tag(delta_a),
            delta_b,
            tag(delta_b)
        );
    }

    println!("\n6) Final summary");
    match report.verdict() {
        Verdict::Infeasible => {
            println!("   - No robust route; the instance is infeasible with the current closures.")
        }
        verdict => {
            println!(
                "   - Final (robust) route: {:?} with (A*={}, B*={}).",
                report.best_path, report.best_a, report.best_b
            );
            println!(
                "   - Conclusion: the robust route {} under the min-max criterion (minimize B, then A).",
                verdict.to_string().bold()
            );
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let config = ScenarioConfig::from(Cli::parse());
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
