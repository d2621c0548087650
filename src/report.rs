//! Result assembly: robust and baseline routes, by node name, ready to print.

use std::cmp::Ordering;
use std::fmt::{self, Debug};
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::algorithm::{IntervalPath, RobustResult};
use crate::data_structures::Label;
use crate::graph::IntervalGraph;
use crate::{Error, Result};

/// One route with its cumulative costs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport<W> {
    pub path: Vec<String>,
    #[serde(rename = "A")]
    pub best: W,
    #[serde(rename = "B")]
    pub worst: W,
}

/// Robust route and its baseline.
///
/// Serializes as `{best_path, best_A, best_B, baseline: {path, A, B}}`.
/// Unreachable routes have an empty path and infinite costs, which JSON
/// renders as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport<W> {
    pub best_path: Vec<String>,
    #[serde(rename = "best_A")]
    pub best_a: W,
    #[serde(rename = "best_B")]
    pub best_b: W,
    pub baseline: PathReport<W>,
}

/// How the robust route compares with the baseline under the min-max order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Strictly smaller `B`, or equal `B` and smaller `A`
    Improves,
    /// Same `A` and `B`
    Matches,
    /// Larger than the baseline; never produced by a correct search
    Worse,
    /// No route exists under the current edge states
    Infeasible,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Verdict::Improves => "improves on the baseline",
            Verdict::Matches => "matches the baseline",
            Verdict::Worse => "is worse than the baseline",
            Verdict::Infeasible => "is infeasible",
        };
        f.write_str(text)
    }
}

impl<W> PathReport<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn from_path(graph: &IntervalGraph<W>, path: &IntervalPath<W>) -> Self {
        PathReport {
            path: graph.path_names(&path.nodes),
            best: path.best,
            worst: path.worst,
        }
    }
}

impl<W> RouteReport<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Maps a search result back to node names
    pub fn assemble(graph: &IntervalGraph<W>, result: &RobustResult<W>) -> Self {
        RouteReport {
            best_path: graph.path_names(&result.best.nodes),
            best_a: result.best.best,
            best_b: result.best.worst,
            baseline: PathReport::from_path(graph, &result.baseline),
        }
    }

    pub fn is_feasible(&self) -> bool {
        !self.best_path.is_empty()
    }

    /// `(ΔA, ΔB)` of the robust route relative to the baseline
    pub fn delta(&self) -> Option<(W, W)> {
        if !self.is_feasible() || self.baseline.path.is_empty() {
            return None;
        }
        Some((self.best_a - self.baseline.best, self.best_b - self.baseline.worst))
    }

    pub fn verdict(&self) -> Verdict {
        if !self.is_feasible() {
            return Verdict::Infeasible;
        }

        let robust = Label::new(self.best_a, self.best_b);
        let baseline = Label::new(self.baseline.best, self.baseline.worst);
        match robust.lex_cmp(&baseline) {
            Ordering::Less => Verdict::Improves,
            Ordering::Equal => Verdict::Matches,
            Ordering::Greater => Verdict::Worse,
        }
    }
}

impl<W> RouteReport<W>
where
    W: Float + Zero + Debug + Copy + Serialize,
{
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| Error::Serialization(err.to_string()))
    }
}
