use crate::graph::{EdgeState, Interval, IntervalGraph, MutableGraph};
use crate::{Error, Result};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// The embedded scenario network: `(from, to, best, worst)`
pub const EMBEDDED_EDGES: [(&str, &str, f64, f64); 14] = [
    ("a", "b", 5.0, 20.0),
    ("b", "c", 12.0, 35.0),
    ("c", "d", 8.0, 25.0),
    ("d", "e", 15.0, 40.0),
    ("e", "f", 3.0, 18.0),
    ("f", "g", 10.0, 30.0),
    ("g", "h", 7.0, 22.0),
    ("h", "a", 20.0, 45.0),
    ("a", "c", 6.0, 28.0),
    ("b", "d", 11.0, 33.0),
    ("c", "e", 9.0, 27.0),
    ("d", "f", 14.0, 38.0),
    ("e", "g", 4.0, 19.0),
    ("f", "h", 13.0, 36.0),
];

fn check_probability(p_closed: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p_closed) {
        Ok(())
    } else {
        Err(Error::InvalidProbability(p_closed))
    }
}

/// Builds the embedded network, closing each edge with probability `p_closed`.
///
/// Edge states are drawn in edge-list order from a `StdRng` seeded with `seed`,
/// so the same seed always closes the same edges.
pub fn embedded_network(seed: u64, p_closed: f64) -> Result<IntervalGraph<f64>> {
    check_probability(p_closed)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = IntervalGraph::with_capacity(8);
    for (u, v, a, b) in EMBEDDED_EDGES {
        let state = if rng.gen::<f64>() < p_closed {
            EdgeState::Closed
        } else {
            EdgeState::Open
        };
        graph.add_edge(u, v, Interval::new(a, b), state)?;
    }

    Ok(graph)
}

/// The embedded network with every edge open
pub fn embedded_network_all_open() -> Result<IntervalGraph<f64>> {
    embedded_network(0, 0.0)
}

/// Generates a random directed interval graph with `n` nodes named `"0".."n-1"`.
///
/// About `edge_factor * n` edges are drawn, skipping self loops and parallel
/// edges. Costs are whole numbers: `best` in `[1, 20]`, `worst = best + [0, 30]`.
pub fn generate_random_interval_graph<R: Rng + ?Sized>(
    n: usize,
    edge_factor: f64,
    p_closed: f64,
    rng: &mut R,
) -> Result<IntervalGraph<f64>> {
    generate_with_costs(n, edge_factor, p_closed, rng, |rng| {
        let best = rng.gen_range(1..=20) as f64;
        Interval::new(best, best + rng.gen_range(0..=30) as f64)
    })
}

/// Like [`generate_random_interval_graph`], with fractional costs:
/// `best` in `[0.1, 20)`, `worst = best + [0, 30)`.
pub fn generate_random_fractional_interval_graph<R: Rng + ?Sized>(
    n: usize,
    edge_factor: f64,
    p_closed: f64,
    rng: &mut R,
) -> Result<IntervalGraph<f64>> {
    generate_with_costs(n, edge_factor, p_closed, rng, |rng| {
        let best = rng.gen_range(0.1..20.0);
        Interval::new(best, best + rng.gen_range(0.0..30.0))
    })
}

fn generate_with_costs<R, F>(
    n: usize,
    edge_factor: f64,
    p_closed: f64,
    rng: &mut R,
    mut sample_cost: F,
) -> Result<IntervalGraph<f64>>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> Interval<f64>,
{
    check_probability(p_closed)?;

    let mut graph = IntervalGraph::with_capacity(n);
    let names: Vec<String> = (0..n).map(|i| i.to_string()).collect();
    for name in &names {
        graph.add_node(name);
    }
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    let mut added_edges = HashSet::with_capacity(num_edges);
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v || !added_edges.insert((u, v)) {
            continue;
        }

        let cost = sample_cost(rng);
        let state = if rng.gen::<f64>() < p_closed {
            EdgeState::Closed
        } else {
            EdgeState::Open
        };
        graph.add_edge(&names[u], &names[v], cost, state)?;
    }

    Ok(graph)
}
