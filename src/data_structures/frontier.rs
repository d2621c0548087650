use crate::data_structures::label::{Label, LabelId};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Non-dominated labels held by one node.
///
/// No label in the frontier dominates another, and no two labels are equal.
#[derive(Debug, Clone)]
pub struct ParetoFrontier<W> {
    entries: Vec<(LabelId, Label<W>)>,
}

impl<W> ParetoFrontier<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new() -> Self {
        ParetoFrontier {
            entries: Vec::new(),
        }
    }

    /// True if some label already in the frontier dominates or equals `candidate`
    pub fn covers(&self, candidate: &Label<W>) -> bool {
        self.entries
            .iter()
            .any(|(_, label)| label == candidate || label.dominates(candidate))
    }

    /// Inserts a label, evicting every label it dominates.
    ///
    /// Returns the ids of the evicted labels. The caller must have checked
    /// [`covers`](Self::covers) first.
    pub fn insert(&mut self, id: LabelId, label: Label<W>) -> Vec<LabelId> {
        debug_assert!(!self.covers(&label), "inserted label is already covered");

        let mut evicted = Vec::new();
        self.entries.retain(|(other_id, other)| {
            if label.dominates(other) {
                evicted.push(*other_id);
                false
            } else {
                true
            }
        });
        self.entries.push((id, label));
        evicted
    }

    pub fn contains(&self, id: LabelId) -> bool {
        self.entries.iter().any(|(other_id, _)| *other_id == id)
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label<W>> + '_ {
        self.entries.iter().map(|(_, label)| label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that no label dominates or duplicates another
    pub fn is_mutually_non_dominated(&self) -> bool {
        self.entries.iter().enumerate().all(|(i, (_, x))| {
            self.entries
                .iter()
                .skip(i + 1)
                .all(|(_, y)| x != y && !x.dominates(y) && !y.dominates(x))
        })
    }
}

impl<W> Default for ParetoFrontier<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
