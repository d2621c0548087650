pub mod edge;
pub mod generators;
pub mod interval;
pub mod traits;

pub use edge::{EdgeState, Interval, IntervalEdge};
pub use interval::{IntervalGraph, StateSummary};
pub use traits::{Graph, MutableGraph};
