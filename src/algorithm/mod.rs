pub mod minmax;
pub mod traits;
pub mod worst_case;

pub use minmax::{MinMaxLabelSetting, RobustResult, SearchStats};
pub use traits::{IntervalPath, IntervalPathAlgorithm};
pub use worst_case::WorstCaseDijkstra;

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::{Graph, IntervalGraph};
use crate::{Error, Result};

/// Worst-case baseline between two named nodes, over the open edges only
pub fn baseline_shortest_path<W>(
    graph: &IntervalGraph<W>,
    source: &str,
    destination: &str,
) -> Result<IntervalPath<W>>
where
    W: Float + Zero + Debug + Copy,
{
    let s = graph.resolve(source)?;
    let t = graph.resolve(destination)?;
    WorstCaseDijkstra::new().find_path(&graph.preprocess(), s, t)
}

/// Robust min-max route between two named nodes, together with its baseline
pub fn robust_shortest_path<W>(
    graph: &IntervalGraph<W>,
    source: &str,
    destination: &str,
) -> Result<RobustResult<W>>
where
    W: Float + Zero + Debug + Copy,
{
    let s = graph.resolve(source)?;
    let t = graph.resolve(destination)?;
    MinMaxLabelSetting::new().search(graph, s, t)
}

/// Rejects graphs where a search could relax a negative cost
pub(crate) fn ensure_non_negative<W, G>(graph: &G) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    for node in 0..graph.node_count() {
        if let Some(edge) = graph.open_edges(node).find(|e| !e.cost.is_non_negative()) {
            let name = |id: usize| graph.node_name(id).unwrap_or("?").to_string();
            return Err(Error::NegativeCost {
                from: name(edge.from),
                to: name(edge.to),
            });
        }
    }
    Ok(())
}

/// Fails fast on node ids that are out of range
pub(crate) fn ensure_nodes<W, G>(graph: &G, nodes: &[usize]) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    match nodes.iter().find(|&&node| !graph.has_node(node)) {
        Some(&node) => Err(Error::InvalidNode(node)),
        None => Ok(()),
    }
}
