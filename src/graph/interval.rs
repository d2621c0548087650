use crate::graph::edge::{EdgeState, Interval, IntervalEdge};
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;

/// A directed interval-cost multigraph using adjacency lists
#[derive(Debug, Clone)]
pub struct IntervalGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Node names, indexed by node id
    names: Vec<String>,

    /// Reverse lookup: name -> node id
    index: HashMap<String, usize>,

    /// Outgoing edges for each node, in insertion order
    outgoing: Vec<Vec<IntervalEdge<W>>>,
}

/// Edge counts by availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateSummary {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
}

impl<W> IntervalGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        IntervalGraph {
            names: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
        }
    }

    /// Creates a new graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        IntervalGraph {
            names: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            outgoing: Vec::with_capacity(nodes),
        }
    }

    /// Returns a new graph holding only the open edges.
    ///
    /// Every node is kept with the same index, so ids resolved against `self`
    /// stay valid on the result.
    pub fn preprocess(&self) -> Self {
        IntervalGraph {
            names: self.names.clone(),
            index: self.index.clone(),
            outgoing: self
                .outgoing
                .iter()
                .map(|edges| edges.iter().filter(|e| e.is_open()).cloned().collect())
                .collect(),
        }
    }

    /// Iterates over every edge, grouped by source node
    pub fn edges(&self) -> impl Iterator<Item = &IntervalEdge<W>> + '_ {
        self.outgoing.iter().flatten()
    }

    /// Node names in index order
    pub fn node_names(&self) -> &[String] {
        &self.names
    }

    /// Resolves a node name, failing on names the graph does not know
    pub fn resolve(&self, name: &str) -> Result<usize> {
        self.node_id(name)
            .ok_or_else(|| Error::UnknownNode(name.to_string()))
    }

    /// Maps a sequence of node ids back to their names
    pub fn path_names(&self, path: &[usize]) -> Vec<String> {
        path.iter()
            .filter_map(|&node| self.node_name(node))
            .map(str::to_string)
            .collect()
    }

    pub fn state_summary(&self) -> StateSummary {
        let total = self.edge_count();
        let open = self.edges().filter(|e| e.is_open()).count();
        StateSummary {
            total,
            open,
            closed: total - open,
        }
    }

    /// Nodes reachable from `source` over open edges
    pub fn reachable_from(&self, source: usize) -> Result<BTreeSet<usize>> {
        if !self.has_node(source) {
            return Err(Error::InvalidNode(source));
        }

        let mut visited = BTreeSet::from([source]);
        let mut stack = vec![source];
        while let Some(u) = stack.pop() {
            for edge in self.open_edges(u) {
                if visited.insert(edge.to) {
                    stack.push(edge.to);
                }
            }
        }

        Ok(visited)
    }
}

impl<W> Default for IntervalGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for IntervalGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.names.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = &IntervalEdge<W>> + '_> {
        if let Some(edges) = self.outgoing.get(node) {
            Box::new(edges.iter())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn node_id(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn node_name(&self, node: usize) -> Option<&str> {
        self.names.get(node).map(String::as_str)
    }
}

impl<W> MutableGraph<W> for IntervalGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, name: &str) -> usize {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    fn add_edge(&mut self, from: &str, to: &str, cost: Interval<W>, state: EdgeState) -> Result<()> {
        if !cost.is_finite() {
            return Err(Error::NonFiniteCost {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let u = self.add_node(from);
        let v = self.add_node(to);
        self.outgoing[u].push(IntervalEdge {
            from: u,
            to: v,
            cost,
            state,
        });

        Ok(())
    }
}
