//! Interval SSSP - robust shortest paths over interval-cost graphs
//!
//! Every edge of the graph carries a best-case/worst-case cost `[a, b]` and an
//! availability state. The library computes two routes between a pair of nodes:
//!
//! * a worst-case baseline, the classic Dijkstra shortest path over `b`;
//! * a robust min-max route, found by a bi-criteria label-setting search that
//!   minimizes the cumulative worst case `B` and breaks ties on the cumulative
//!   best case `A`, pruned by the baseline.
//!
//! Closed edges are never traversed by either search.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    baseline_shortest_path, minmax::MinMaxLabelSetting, robust_shortest_path,
    worst_case::WorstCaseDijkstra, IntervalPath, IntervalPathAlgorithm, RobustResult,
    SearchStats,
};
/// Re-export main types for convenient use
pub use graph::{EdgeState, Interval, IntervalEdge, IntervalGraph};
pub use report::{RouteReport, Verdict};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Invalid node ID: {0}")]
    InvalidNode(usize),

    #[error("Non-finite edge cost on {from} -> {to}")]
    NonFiniteCost { from: String, to: String },

    #[error("Negative edge cost on {from} -> {to}")]
    NegativeCost { from: String, to: String },

    #[error("Closure probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("Predecessor chain broken at {0}")]
    BrokenPredecessorChain(usize),

    #[error("Could not serialize report: {0}")]
    Serialization(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
