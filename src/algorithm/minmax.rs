use std::fmt::Debug;
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::algorithm::{
    ensure_non_negative, ensure_nodes, IntervalPath, IntervalPathAlgorithm, WorstCaseDijkstra,
};
use crate::data_structures::{Label, LabelArena, LabelId, MinPriorityQueue, ParetoFrontier};
use crate::graph::{Graph, IntervalGraph};
use crate::{Error, Result};

/// Counters collected during one label-setting search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Labels admitted to a frontier, the origin label included
    pub labels_created: usize,
    /// Candidates discarded because they cannot beat the baseline
    pub pruned_by_bound: usize,
    /// Candidates discarded because a frontier label dominated or equalled them
    pub dominated: usize,
    /// Frontier labels removed by a newly admitted, dominating label
    pub evicted: usize,
    /// Queue entries skipped because their label had been evicted
    pub stale_pops: usize,
    /// Labels popped while still on their frontier
    pub settled: usize,
}

/// Outcome of a robust search: the min-max route and the baseline that bounded it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RobustResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub best: IntervalPath<W>,
    pub baseline: IntervalPath<W>,
    pub stats: SearchStats,
}

impl<W> RobustResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn is_reachable(&self) -> bool {
        self.best.is_reachable()
    }
}

/// Bi-criteria label-setting search for the min-max robust route.
///
/// Labels `(A, B)` are popped in ascending `(B, A)` order. Each node keeps a
/// Pareto frontier of non-dominated labels, and candidates that cannot match
/// the worst-case baseline are pruned before they reach a frontier. The first
/// destination label popped is the route with the smallest `B`, ties broken
/// by the smallest `A`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinMaxLabelSetting;

/// Queue key: worst case, best case, node. Label ids break the remaining ties.
type Priority<W> = (OrderedFloat<W>, OrderedFloat<W>, usize);

fn priority<W>(label: &Label<W>, node: usize) -> Priority<W>
where
    W: Float + Zero + Debug + Copy,
{
    (OrderedFloat(label.worst), OrderedFloat(label.best), node)
}

/// True if `candidate` cannot end up at least as good as `bound`
fn exceeds_bound<W>(candidate: &Label<W>, bound: &Label<W>) -> bool
where
    W: Float + Zero + Debug + Copy,
{
    candidate.worst > bound.worst || (candidate.worst == bound.worst && candidate.best > bound.best)
}

impl MinMaxLabelSetting {
    pub fn new() -> Self {
        MinMaxLabelSetting
    }

    /// Runs the baseline on the preprocessed graph, then the bounded label
    /// search on `graph` itself.
    pub fn search<W>(
        &self,
        graph: &IntervalGraph<W>,
        source: usize,
        destination: usize,
    ) -> Result<RobustResult<W>>
    where
        W: Float + Zero + Debug + Copy,
    {
        let baseline = WorstCaseDijkstra::new().find_path(&graph.preprocess(), source, destination)?;
        let (best, stats) = self.search_with_bound(graph, source, destination, &baseline)?;

        Ok(RobustResult {
            best,
            baseline,
            stats,
        })
    }

    /// Label-setting search pruned by a known route `bound`.
    ///
    /// An unreachable bound means the destination cannot be reached over the
    /// same open edges, so the search returns unreachable without exploring.
    pub fn search_with_bound<W, G>(
        &self,
        graph: &G,
        source: usize,
        destination: usize,
        bound: &IntervalPath<W>,
    ) -> Result<(IntervalPath<W>, SearchStats)>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        ensure_nodes(graph, &[source, destination])?;
        ensure_non_negative(graph)?;

        let mut stats = SearchStats::default();
        if !bound.is_reachable() {
            log::debug!("min-max search: no baseline from {} to {}, skipping", source, destination);
            return Ok((IntervalPath::unreachable(), stats));
        }
        let upper = Label::new(bound.best, bound.worst);

        let mut arena = LabelArena::new();
        let mut frontiers: Vec<ParetoFrontier<W>> =
            (0..graph.node_count()).map(|_| ParetoFrontier::new()).collect();
        let mut queue: MinPriorityQueue<LabelId, Priority<W>> = MinPriorityQueue::new();

        let origin = Label::origin();
        let origin_id = arena.push(source, origin, None);
        frontiers[source].insert(origin_id, origin);
        queue.push(origin_id, priority(&origin, source));
        stats.labels_created = 1;

        while let Some((id, _)) = queue.pop() {
            let (node, label) = match arena.get(id) {
                Some(entry) => (entry.node, entry.label),
                None => return Err(Error::BrokenPredecessorChain(id.0)),
            };

            // Evicted by a dominating label after it was queued
            if !frontiers[node].contains(id) {
                stats.stale_pops += 1;
                continue;
            }
            stats.settled += 1;

            if node == destination {
                let nodes = reconstruct_path(&arena, id, source)?;
                log::debug!(
                    "min-max search: {} -> {} A={:?} B={:?} ({:?}, {} pushes)",
                    source,
                    destination,
                    label.best,
                    label.worst,
                    stats,
                    queue.pushed()
                );
                return Ok((
                    IntervalPath {
                        nodes,
                        best: label.best,
                        worst: label.worst,
                    },
                    stats,
                ));
            }

            for edge in graph.open_edges(node) {
                let candidate = label.extend(&edge.cost);
                debug_assert!(candidate.best >= label.best && candidate.worst >= label.worst);

                if exceeds_bound(&candidate, &upper) {
                    stats.pruned_by_bound += 1;
                    continue;
                }

                let frontier = &mut frontiers[edge.to];
                if frontier.covers(&candidate) {
                    stats.dominated += 1;
                    continue;
                }

                let candidate_id = arena.push(edge.to, candidate, Some(id));
                let evicted = frontier.insert(candidate_id, candidate);
                debug_assert!(frontier.is_mutually_non_dominated());
                log::trace!(
                    "label {:?} on {} admitted from {:?}, evicting {:?}",
                    candidate,
                    edge.to,
                    id,
                    evicted
                );

                stats.labels_created += 1;
                stats.evicted += evicted.len();
                queue.push(candidate_id, priority(&candidate, edge.to));
            }
        }

        log::debug!(
            "min-max search: queue exhausted before reaching {} from {} ({:?})",
            destination,
            source,
            stats
        );
        Ok((IntervalPath::unreachable(), stats))
    }
}

/// Follows predecessor links from `winner` back to the origin label on `source`.
fn reconstruct_path<W>(arena: &LabelArena<W>, winner: LabelId, source: usize) -> Result<Vec<usize>>
where
    W: Float + Zero + Debug + Copy,
{
    let mut nodes = Vec::new();
    let mut current = winner;
    loop {
        let entry = arena
            .get(current)
            .ok_or(Error::BrokenPredecessorChain(current.0))?;
        nodes.push(entry.node);

        match entry.predecessor {
            Some(prev) if nodes.len() <= arena.len() => current = prev,
            None if entry.node == source && entry.label == Label::origin() => break,
            _ => {
                log::warn!("predecessor chain from {:?} broken at {:?}", winner, current);
                return Err(Error::BrokenPredecessorChain(current.0));
            }
        }
    }

    nodes.reverse();
    Ok(nodes)
}

impl<W, G> IntervalPathAlgorithm<W, G> for MinMaxLabelSetting
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Min-max label setting"
    }

    /// Bounds the search with the worst-case baseline over the open edges of `graph`
    fn find_path(&self, graph: &G, source: usize, destination: usize) -> Result<IntervalPath<W>> {
        let baseline = WorstCaseDijkstra::new().find_path(graph, source, destination)?;
        let (best, _) = self.search_with_bound(graph, source, destination, &baseline)?;
        Ok(best)
    }
}
