use crate::graph::Interval;
use num_traits::{Float, Zero};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Cumulative `(A, B)` cost of one path from the search origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label<W> {
    /// Cumulative best-case cost `A`
    pub best: W,
    /// Cumulative worst-case cost `B`
    pub worst: W,
}

impl<W> Label<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new(best: W, worst: W) -> Self {
        Label { best, worst }
    }

    /// The `(0, 0)` label of the search origin
    pub fn origin() -> Self {
        Label::new(W::zero(), W::zero())
    }

    /// Label reached by following an edge with the given cost
    pub fn extend(&self, cost: &Interval<W>) -> Self {
        Label::new(self.best + cost.best, self.worst + cost.worst)
    }

    /// True when `self` is no worse on both criteria and strictly better on one
    pub fn dominates(&self, other: &Self) -> bool {
        self.best <= other.best
            && self.worst <= other.worst
            && (self.best < other.best || self.worst < other.worst)
    }

    /// Min-max order: worst case first, best case second
    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        self.worst
            .partial_cmp(&other.worst)
            .unwrap_or(Ordering::Equal)
            .then(self.best.partial_cmp(&other.best).unwrap_or(Ordering::Equal))
    }
}

/// Identity of a label inside a [`LabelArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelId(pub usize);

/// A label together with the node it sits on and the label it was extended from
#[derive(Debug, Clone)]
pub struct LabelEntry<W> {
    pub node: usize,
    pub label: Label<W>,
    pub predecessor: Option<LabelId>,
}

/// Append-only store of every label created during one search.
///
/// Predecessor links point at arena indices, so two labels with equal costs
/// on the same node are never confused with each other.
#[derive(Debug)]
pub struct LabelArena<W> {
    entries: Vec<LabelEntry<W>>,
}

impl<W> LabelArena<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new() -> Self {
        LabelArena {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, node: usize, label: Label<W>, predecessor: Option<LabelId>) -> LabelId {
        let id = LabelId(self.entries.len());
        self.entries.push(LabelEntry {
            node,
            label,
            predecessor,
        });
        id
    }

    pub fn get(&self, id: LabelId) -> Option<&LabelEntry<W>> {
        self.entries.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W> Default for LabelArena<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
