use std::fmt::Debug;
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::graph::Graph;
use crate::Result;

/// A route between two nodes with its cumulative interval cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalPath<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Node ids from source to destination; empty when unreachable
    pub nodes: Vec<usize>,

    /// Cumulative best-case cost `A`
    pub best: W,

    /// Cumulative worst-case cost `B`
    pub worst: W,
}

impl<W> IntervalPath<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// The infeasible outcome: infinite costs and no nodes
    pub fn unreachable() -> Self {
        IntervalPath {
            nodes: Vec::new(),
            best: W::infinity(),
            worst: W::infinity(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.nodes.is_empty()
    }
}

/// Trait for searches that route between a source and a destination
pub trait IntervalPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Finds a path from `source` to `destination`.
    ///
    /// An unreachable destination is not an error: it yields
    /// [`IntervalPath::unreachable`].
    fn find_path(&self, graph: &G, source: usize, destination: usize) -> Result<IntervalPath<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
