use std::{cmp::Ordering, collections::BinaryHeap};


/// Counters shared by every strategy
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchStats {
    pub nodes_expanded: usize, // nodes popped from the frontier
    pub peak_memory: usize, // most nodes held at once in frontier + explored, a count not bytes
}

impl SearchStats {

    /// Record the number of nodes currently held by the frontier and explored set
    pub fn observe(&mut self, in_memory: usize) {
        self.peak_memory = self.peak_memory.max(in_memory);
    }

    /// Fold the counters of one iteration into a running total
    pub fn absorb(&mut self, other: SearchStats) {
        self.nodes_expanded += other.nodes_expanded;
        self.peak_memory = self.peak_memory.max(other.peak_memory);
    }
}


/// Frontier entry - the ordering key and the node's index in the SearchTree
#[derive(Debug)]
struct FrontierEntry<K> {
    key: K,
    index: usize,
}

// BinaryHeap pops the largest entry, so the comparison is reversed:
// smallest key first, then the oldest node (lowest tree index)
impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key.cmp(&self.key)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<K: Ord> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<K: Ord> Eq for FrontierEntry<K> {}


/// Min-priority frontier over tree indices
/// Each strategy supplies the key, so uniform-cost, greedy and A* order nodes differently
#[derive(Debug)]
pub(crate) struct PriorityFrontier<K> {
    heap: BinaryHeap<FrontierEntry<K>>,
}

impl<K: Ord> PriorityFrontier<K> {

    pub fn new() -> Self {
        Self { heap: BinaryHeap::new() }
    }

    pub fn push(&mut self, key: K, index: usize) {
        self.heap.push(FrontierEntry { key, index });
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.index)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
