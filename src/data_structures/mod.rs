pub mod frontier;
pub mod label;
pub mod priority_queue;

pub use frontier::ParetoFrontier;
pub use label::{Label, LabelArena, LabelEntry, LabelId};
pub use priority_queue::MinPriorityQueue;
