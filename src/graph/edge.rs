use num_traits::{Float, Zero};
use serde::Serialize;
use std::fmt::{self, Debug};

/// Availability of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeState {
    /// The edge may be traversed
    Open,
    /// The edge exists but no search will relax it
    Closed,
}

impl fmt::Display for EdgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeState::Open => write!(f, "open"),
            EdgeState::Closed => write!(f, "closed"),
        }
    }
}

/// Interval cost `[best, worst]` of a single edge
///
/// `best <= worst` is expected but never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval<W> {
    /// Best-case cost (`a`)
    pub best: W,
    /// Worst-case cost (`b`)
    pub worst: W,
}

impl<W> Interval<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new(best: W, worst: W) -> Self {
        Interval { best, worst }
    }

    pub fn is_finite(&self) -> bool {
        self.best.is_finite() && self.worst.is_finite()
    }

    pub fn is_non_negative(&self) -> bool {
        self.best >= W::zero() && self.worst >= W::zero()
    }
}

/// A directed edge between two node indices
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalEdge<W> {
    pub from: usize,
    pub to: usize,
    pub cost: Interval<W>,
    pub state: EdgeState,
}

impl<W> IntervalEdge<W> {
    pub fn is_open(&self) -> bool {
        self.state == EdgeState::Open
    }
}
