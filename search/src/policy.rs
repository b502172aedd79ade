//! Search policy types.

use tileslide_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::heuristic::Heuristic;

/// Heuristic choice, limits, and recording switch for one search.
///
/// A limit of `0` means unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Distance estimate used for `score = depth + h`.
    pub heuristic: Heuristic,
    /// Stop after this many expansions. `0` = no limit.
    pub iteration_limit: u64,
    /// Stop when a node of exactly this depth is popped. `0` = no limit.
    pub depth_limit: u32,
    /// Record a [`crate::graph::SearchGraphV1`] audit trail.
    pub record_graph: bool,
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Manhattan,
            iteration_limit: 0,
            depth_limit: 0,
            record_graph: false,
        }
    }
}

impl SearchPolicyV1 {
    /// A policy with the given heuristic and limits, not recording a graph.
    #[must_use]
    pub const fn new(heuristic: Heuristic, iteration_limit: u64, depth_limit: u32) -> Self {
        Self {
            heuristic,
            iteration_limit,
            depth_limit,
            record_graph: false,
        }
    }

    /// Enable audit graph recording.
    #[must_use]
    pub const fn with_graph(mut self) -> Self {
        self.record_graph = true;
        self
    }

    pub(crate) fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "depth_limit": self.depth_limit,
            "heuristic": self.heuristic.key(),
            "iteration_limit": self.iteration_limit,
        })
    }

    /// Content hash of the fields that influence the search outcome.
    ///
    /// `record_graph` is excluded: recording never changes what is found.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        let bytes = self.to_json_value().to_string();
        canonical_hash(HashDomain::SearchPolicy, bytes.as_bytes())
    }
}
