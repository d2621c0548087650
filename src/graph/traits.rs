use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::edge::{EdgeState, Interval, IntervalEdge};
use crate::Result;

/// Trait representing a directed graph with interval edge costs
///
/// Nodes are dense indices `0..node_count()`, each with a unique name.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph, closed ones included
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges of a node, in insertion order
    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = &IntervalEdge<W>> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Looks up a node index by name
    fn node_id(&self, name: &str) -> Option<usize>;

    /// Looks up the name of a node index
    fn node_name(&self, node: usize) -> Option<&str>;

    /// Outgoing edges a search is allowed to relax
    fn open_edges(&self, node: usize) -> Box<dyn Iterator<Item = &IntervalEdge<W>> + '_> {
        Box::new(self.outgoing_edges(node).filter(|edge| edge.is_open()))
    }
}

/// Trait for building graphs edge by edge
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Registers a node by name and returns its index. Existing names keep their index.
    fn add_node(&mut self, name: &str) -> usize;

    /// Appends a directed edge, creating both endpoints if needed
    fn add_edge(&mut self, from: &str, to: &str, cost: Interval<W>, state: EdgeState) -> Result<()>;
}
