use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue with lazy deletion, as used by label-setting searches.
///
/// Entries are never decreased in place: callers push a fresh entry and skip
/// the stale ones when they come out. Push and pop counts are kept so a search
/// can report how much work the queue did.
#[derive(Debug)]
pub struct MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
    pushed: usize,
    popped: usize,
}

impl<V, P> MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
            pushed: 0,
            popped: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item; ties on `priority` are broken by the item itself
    pub fn push(&mut self, item: V, priority: P) {
        self.pushed += 1;
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the item with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        let Reverse((priority, item)) = self.heap.pop()?;
        self.popped += 1;
        Some((item, priority))
    }

    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, item))| (*item, *priority))
    }

    /// Total number of pushes since creation
    pub fn pushed(&self) -> usize {
        self.pushed
    }

    /// Total number of pops since creation
    pub fn popped(&self) -> usize {
        self.popped
    }
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
