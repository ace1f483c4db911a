//! Bounded top-k selection over scored dictionary positions.

use std::collections::BinaryHeap;

/// A scored dictionary position.
///
/// Ordering is by `distance`, then by `index`, which is exactly the ranking
/// order: closer words first, earlier dictionary entries first on ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    /// Edit distance to the query.
    pub distance: usize,
    /// Position in the original dictionary.
    pub index: usize,
}

/// A collector that keeps the `limit` best candidates seen so far.
///
/// Backed by a max-heap whose top is the worst retained candidate, so each
/// insertion is O(log k) and memory stays bounded by `limit` regardless of
/// dictionary size. Draining yields the same sequence as sorting every
/// candidate by `(distance, index)` and truncating.
#[derive(Debug)]
pub struct TopKCollector {
    limit: usize,
    heap: BinaryHeap<Candidate>,
    total_collected: u64,
}

impl TopKCollector {
    /// Create a new collector retaining at most `limit` candidates.
    pub fn new(limit: usize) -> Self {
        TopKCollector {
            limit,
            // Avoid reserving huge buffers for "unbounded" limits.
            heap: BinaryHeap::with_capacity(limit.min(1024)),
            total_collected: 0,
        }
    }

    /// Offer a candidate to the collector.
    pub fn collect(&mut self, index: usize, distance: usize) {
        self.total_collected += 1;
        if self.limit == 0 {
            return;
        }

        let candidate = Candidate { distance, index };
        if self.heap.len() < self.limit {
            self.heap.push(candidate);
        } else if let Some(mut worst) = self.heap.peek_mut()
            && candidate < *worst
        {
            *worst = candidate;
        }
    }

    /// Number of candidates offered, retained or not.
    pub fn total_collected(&self) -> u64 {
        self.total_collected
    }

    /// Number of candidates currently retained.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no candidate is retained.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consume the collector, returning candidates best first.
    pub fn into_sorted_vec(self) -> Vec<Candidate> {
        self.heap.into_sorted_vec()
    }
}
