use std::fmt::Debug;
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::algorithm::{ensure_non_negative, ensure_nodes, IntervalPath, IntervalPathAlgorithm};
use crate::data_structures::MinPriorityQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm over the worst-case cost `b` of each open edge.
///
/// The best-case total `A` is accumulated along the chosen route but never
/// optimized: among routes tied on `B`, whichever is found first wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorstCaseDijkstra;

impl WorstCaseDijkstra {
    /// Creates a new worst-case Dijkstra instance
    pub fn new() -> Self {
        WorstCaseDijkstra
    }
}

impl<W, G> IntervalPathAlgorithm<W, G> for WorstCaseDijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Worst-case Dijkstra"
    }

    fn find_path(&self, graph: &G, source: usize, destination: usize) -> Result<IntervalPath<W>> {
        ensure_nodes(graph, &[source, destination])?;
        ensure_non_negative(graph)?;

        let n = graph.node_count();

        // Tentative worst-case distance, and the edge that produced it as
        // (predecessor, best-case cost of that edge)
        let mut worst: Vec<Option<W>> = vec![None; n];
        let mut via: Vec<Option<(usize, W)>> = vec![None; n];

        worst[source] = Some(W::zero());

        let mut queue = MinPriorityQueue::new();
        queue.push(source, OrderedFloat(W::zero()));

        while let Some((u, OrderedFloat(dist_u))) = queue.pop() {
            // If we've already found a shorter path to u, skip
            if let Some(current_dist) = worst[u] {
                if current_dist < dist_u {
                    continue;
                }
            }

            if u == destination {
                break;
            }

            for edge in graph.open_edges(u) {
                let new_dist = dist_u + edge.cost.worst;

                let should_update = match worst[edge.to] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    worst[edge.to] = Some(new_dist);
                    via[edge.to] = Some((u, edge.cost.best));
                    queue.push(edge.to, OrderedFloat(new_dist));
                }
            }
        }

        let Some(total_worst) = worst[destination] else {
            log::debug!(
                "worst-case search: {} unreachable from {} after {} pops",
                destination,
                source,
                queue.popped()
            );
            return Ok(IntervalPath::unreachable());
        };

        // Walk the predecessor edges back, keeping the best case of each hop
        let mut nodes = vec![destination];
        let mut hop_best = Vec::new();
        let mut current = destination;
        while current != source {
            let (prev, edge_best) = via[current].ok_or(Error::BrokenPredecessorChain(current))?;
            hop_best.push(edge_best);
            nodes.push(prev);
            current = prev;

            if nodes.len() > n {
                return Err(Error::BrokenPredecessorChain(current));
            }
        }
        nodes.reverse();

        // Sum from the source forward, the order the label search extends in
        let total_best = hop_best
            .iter()
            .rev()
            .fold(W::zero(), |total, &edge_best| total + edge_best);

        log::debug!(
            "worst-case search: {} -> {} in {} hops, A={:?} B={:?} ({} pushes)",
            source,
            destination,
            nodes.len() - 1,
            total_best,
            total_worst,
            queue.pushed()
        );

        Ok(IntervalPath {
            nodes,
            best: total_best,
            worst: total_worst,
        })
    }
}
