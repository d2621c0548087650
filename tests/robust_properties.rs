use interval_sssp::algorithm::{IntervalPath, MinMaxLabelSetting};
use interval_sssp::graph::generators::{
    generate_random_fractional_interval_graph, generate_random_interval_graph,
};
use interval_sssp::graph::{Graph, IntervalGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Costs of the open edge between two consecutive nodes; generated graphs
// have no parallel edges
fn edge_cost(graph: &IntervalGraph<f64>, u: usize, v: usize) -> (f64, f64) {
    let edge = graph
        .open_edges(u)
        .find(|e| e.to == v)
        .unwrap_or_else(|| panic!("path uses missing or closed edge {} -> {}", u, v));
    (edge.cost.best, edge.cost.worst)
}

fn path_cost(graph: &IntervalGraph<f64>, path: &IntervalPath<f64>) -> (f64, f64) {
    path.nodes.windows(2).fold((0.0, 0.0), |(a, b), hop| {
        let (ea, eb) = edge_cost(graph, hop[0], hop[1]);
        (a + ea, b + eb)
    })
}

// Lexicographically smallest (B, A) over every simple open path
fn brute_force_optimum(graph: &IntervalGraph<f64>, source: usize, destination: usize) -> Option<(f64, f64)> {
    fn visit(
        graph: &IntervalGraph<f64>,
        node: usize,
        destination: usize,
        cost: (f64, f64),
        on_path: &mut Vec<bool>,
        best: &mut Option<(f64, f64)>,
    ) {
        if node == destination {
            let better = match best {
                None => true,
                Some((b, a)) => cost.1 < *b || (cost.1 == *b && cost.0 < *a),
            };
            if better {
                *best = Some((cost.1, cost.0));
            }
            return;
        }
        for edge in graph.open_edges(node) {
            if on_path[edge.to] {
                continue;
            }
            on_path[edge.to] = true;
            let next = (cost.0 + edge.cost.best, cost.1 + edge.cost.worst);
            visit(graph, edge.to, destination, next, on_path, best);
            on_path[edge.to] = false;
        }
    }

    let mut on_path = vec![false; graph.node_count()];
    on_path[source] = true;
    let mut best = None;
    visit(graph, source, destination, (0.0, 0.0), &mut on_path, &mut best);
    best
}

fn random_graph(seed: u64, n: usize) -> IntervalGraph<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_random_interval_graph(n, 2.5, 0.15, &mut rng).unwrap()
}

fn random_fractional_graph(seed: u64, n: usize) -> IntervalGraph<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_random_fractional_interval_graph(n, 2.5, 0.15, &mut rng).unwrap()
}

#[test]
fn test_robust_never_worse_than_baseline() {
    for seed in 0..40 {
        let graph = random_graph(seed, 30);
        let mut rng = StdRng::seed_from_u64(seed + 1000);
        for _ in 0..5 {
            let s = rng.gen_range(0..30);
            let t = rng.gen_range(0..30);
            let result = MinMaxLabelSetting::new().search(&graph, s, t).unwrap();
            if !result.baseline.is_reachable() {
                continue;
            }

            let (best, baseline) = (&result.best, &result.baseline);
            assert!(best.is_reachable(), "seed {}: robust lost a reachable route", seed);
            assert!(best.worst <= baseline.worst, "seed {}: B above baseline", seed);
            if best.worst == baseline.worst {
                assert!(best.best <= baseline.best, "seed {}: A above baseline at equal B", seed);
            }
        }
    }
}

#[test]
fn test_reported_costs_match_the_path() {
    for seed in 0..40 {
        let graph = random_graph(seed, 25);
        for t in 1..25 {
            let result = MinMaxLabelSetting::new().search(&graph, 0, t).unwrap();
            for path in [&result.best, &result.baseline] {
                if !path.is_reachable() {
                    continue;
                }
                assert_eq!(path.nodes.first(), Some(&0));
                assert_eq!(path.nodes.last(), Some(&t));
                assert_eq!(path_cost(&graph, path), (path.best, path.worst), "seed {} target {}", seed, t);
            }
        }
    }
}

#[test]
fn test_infeasibility_is_symmetric() {
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        // Sparse and heavily closed, so many pairs are disconnected
        let graph = generate_random_interval_graph(20, 1.2, 0.4, &mut rng).unwrap();
        for t in 1..20 {
            let result = MinMaxLabelSetting::new().search(&graph, 0, t).unwrap();
            assert_eq!(result.best.is_reachable(), result.baseline.is_reachable());

            let reachable = graph.reachable_from(0).unwrap().contains(&t);
            assert_eq!(result.best.is_reachable(), reachable, "seed {} target {}", seed, t);
        }
    }
}

#[test]
fn test_matches_brute_force_optimum() {
    for seed in 0..60 {
        let graph = random_graph(seed, 9);
        for t in 1..9 {
            let result = MinMaxLabelSetting::new().search(&graph, 0, t).unwrap();
            let expected = brute_force_optimum(&graph, 0, t);
            let actual = result
                .best
                .is_reachable()
                .then(|| (result.best.worst, result.best.best));
            assert_eq!(actual, expected, "seed {} target {}", seed, t);
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    for seed in 0..10 {
        let graph = random_graph(seed, 40);
        let first = MinMaxLabelSetting::new().search(&graph, 0, 39).unwrap();
        let second = MinMaxLabelSetting::new().search(&graph, 0, 39).unwrap();
        assert_eq!(first, second);

        let regenerated = random_graph(seed, 40);
        let third = MinMaxLabelSetting::new().search(&regenerated, 0, 39).unwrap();
        assert_eq!(first, third);
    }
}

#[test]
fn test_fractional_costs_keep_the_bound_valid() {
    for seed in 0..40 {
        let graph = random_fractional_graph(seed, 30);
        for t in 1..30 {
            let result = MinMaxLabelSetting::new().search(&graph, 0, t).unwrap();
            let (best, baseline) = (&result.best, &result.baseline);
            assert_eq!(best.is_reachable(), baseline.is_reachable(), "seed {} target {}", seed, t);
            if !baseline.is_reachable() {
                continue;
            }

            assert!(best.worst <= baseline.worst, "seed {}: B above baseline", seed);
            if best.worst == baseline.worst {
                assert!(best.best <= baseline.best, "seed {}: A above baseline at equal B", seed);
            }
        }
    }
}

#[test]
fn test_fractional_reported_costs_match_the_path() {
    for seed in 0..40 {
        let graph = random_fractional_graph(seed, 25);
        for t in 1..25 {
            let result = MinMaxLabelSetting::new().search(&graph, 0, t).unwrap();
            for path in [&result.best, &result.baseline] {
                if !path.is_reachable() {
                    continue;
                }
                assert_eq!(path_cost(&graph, path), (path.best, path.worst), "seed {} target {}", seed, t);
            }
        }
    }
}

#[test]
fn test_fractional_infeasibility_is_symmetric() {
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = generate_random_fractional_interval_graph(20, 1.2, 0.4, &mut rng).unwrap();
        for t in 1..20 {
            let result = MinMaxLabelSetting::new().search(&graph, 0, t).unwrap();
            assert_eq!(result.best.is_reachable(), result.baseline.is_reachable());

            let reachable = graph.reachable_from(0).unwrap().contains(&t);
            assert_eq!(result.best.is_reachable(), reachable, "seed {} target {}", seed, t);
        }
    }
}

#[test]
fn test_fractional_matches_brute_force_optimum() {
    for seed in 0..60 {
        let graph = random_fractional_graph(seed, 9);
        for t in 1..9 {
            let result = MinMaxLabelSetting::new().search(&graph, 0, t).unwrap();
            let expected = brute_force_optimum(&graph, 0, t);
            let actual = result
                .best
                .is_reachable()
                .then(|| (result.best.worst, result.best.best));
            assert_eq!(actual, expected, "seed {} target {}", seed, t);
        }
    }
}
