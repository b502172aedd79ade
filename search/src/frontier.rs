//! Best-first frontier with an explored set.
//!
//! The heap holds `(score, node_id)` keys only; nodes live in the
//! [`crate::node::NodeArena`]. A fingerprint enters the explored set when its
//! node is generated, not when it is popped, so a state is admitted at most
//! once per search and the first path to reach it wins.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use tileslide_kernel::carrier::grid::Fingerprint;

use crate::node::{FrontierKey, SearchNodeV1};

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the lowest key
/// - A `HashSet<Fingerprint>` of every state ever admitted
pub struct BestFirstFrontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    explored: HashSet<Fingerprint>,
    high_water: u64,
}

impl BestFirstFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            explored: HashSet::new(),
            high_water: 0,
        }
    }

    /// Whether a state with this fingerprint was already admitted.
    #[must_use]
    pub fn is_explored(&self, fingerprint: &Fingerprint) -> bool {
        self.explored.contains(fingerprint)
    }

    /// Admit `node` under `fingerprint`.
    ///
    /// Returns `false` if the fingerprint was already explored (node not added).
    pub fn push(&mut self, fingerprint: Fingerprint, node: &SearchNodeV1) -> bool {
        if !self.explored.insert(fingerprint) {
            return false;
        }
        self.heap.push(Reverse(FrontierKey::from(node)));
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        true
    }

    /// Pop the lowest `(score, node_id)` key.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierKey> {
        self.heap.pop().map(|Reverse(key)| key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Number of distinct states admitted so far.
    #[must_use]
    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }
}

impl Default for BestFirstFrontier {
    fn default() -> Self {
        Self::new()
    }
}
