//! `SearchGraphV1`: expansion-event audit log.
//!
//! The normative decision surface is the ordered list of `ExpandEventV1`
//! entries. Node summaries are a derived index for path reconstruction.

use tileslide_kernel::operators::slide::Move;
use tileslide_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::heuristic::Heuristic;
use crate::node::{NodeArena, SearchNodeV1};

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraphV1 {
    /// Ordered expansion events (normative decision surface).
    pub expansions: Vec<ExpandEventV1>,
    /// Derived node index sorted by `node_id` ascending.
    pub node_summaries: Vec<SearchGraphNodeSummaryV1>,
    /// Aggregate metadata.
    pub metadata: SearchGraphMetadata,
}

/// A single frontier-pop + successor-expansion event.
#[derive(Debug, Clone)]
pub struct ExpandEventV1 {
    /// Total order of expansions, starting at 0.
    pub expansion_order: u64,
    /// The node being expanded.
    pub node_id: u64,
    /// Content hash of the expanded grid.
    pub grid_digest: String,
    /// The frontier key at time of pop.
    pub frontier_pop_key: FrontierPopKeyV1,
    /// One record per legal move, in enumeration order.
    pub candidates: Vec<CandidateRecordV1>,
}

impl ExpandEventV1 {
    pub(crate) fn opened(expansion_order: u64, node: &SearchNodeV1) -> Self {
        Self {
            expansion_order,
            node_id: node.node_id(),
            grid_digest: node.grid().digest().to_string(),
            frontier_pop_key: FrontierPopKeyV1 {
                score: node.score(),
                depth: node.depth(),
                creation_order: node.node_id(),
            },
            candidates: Vec::with_capacity(Move::ALL.len()),
        }
    }
}

/// The frontier ordering key recorded at pop time, plus the node depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierPopKeyV1 {
    pub score: u64,
    pub depth: u32,
    pub creation_order: u64,
}

/// A legal move with its outcome recorded in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecordV1 {
    /// Index in the legal-move list.
    pub index: u64,
    /// Direction the blank travelled.
    pub direction: Move,
    /// What happened to the resulting state.
    pub outcome: CandidateOutcomeV1,
}

/// Outcome of processing a successor during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOutcomeV1 {
    /// New state; created a node.
    Applied { to_node: u64 },
    /// State already explored (first-seen-wins dedup).
    DuplicateSuppressed,
}

/// Derived node summary for path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraphNodeSummaryV1 {
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub producing_move: Option<Move>,
    pub depth: u32,
    pub h_cost: u64,
    pub score: u64,
    pub is_goal: bool,
    pub expansion_order: Option<u64>,
}

/// Aggregate metadata.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    // Bindings
    pub rows: usize,
    pub cols: usize,
    pub root_digest: String,
    pub goal_digest: String,
    pub heuristic: Heuristic,
    pub search_policy_digest: String,

    // Counters
    pub total_expansions: u64,
    pub total_nodes_generated: u64,
    pub total_duplicates_suppressed: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReasonV1,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A popped node matched the goal.
    GoalReached { node_id: u64 },
    /// The expansion counter hit `iteration_limit`.
    IterationLimitReached { limit: u64 },
    /// A node of depth `depth_limit` was popped.
    DepthLimitReached { limit: u32, node_id: u64 },
    /// Frontier emptied without finding the goal.
    FrontierExhausted,
}

/// Accumulates expansion events while the driver runs.
#[derive(Debug, Default)]
pub(crate) struct GraphRecorder {
    expansions: Vec<ExpandEventV1>,
}

impl GraphRecorder {
    pub(crate) fn push(&mut self, event: ExpandEventV1) {
        self.expansions.push(event);
    }

    /// Close the log, deriving node summaries from the arena.
    pub(crate) fn finish(self, arena: &NodeArena, metadata: SearchGraphMetadata) -> SearchGraphV1 {
        let mut expansion_order = vec![None; arena.len()];
        for event in &self.expansions {
            if let Some(slot) = usize::try_from(event.node_id)
                .ok()
                .and_then(|i| expansion_order.get_mut(i))
            {
                *slot = Some(event.expansion_order);
            }
        }
        let goal_node = match metadata.termination_reason {
            TerminationReasonV1::GoalReached { node_id } => Some(node_id),
            _ => None,
        };
        let node_summaries = arena
            .iter()
            .zip(expansion_order)
            .map(|(node, expansion_order)| SearchGraphNodeSummaryV1 {
                node_id: node.node_id(),
                parent_id: node.parent_id(),
                producing_move: node.producing_move(),
                depth: node.depth(),
                h_cost: node.h_cost(),
                score: node.score(),
                is_goal: goal_node == Some(node.node_id()),
                expansion_order,
            })
            .collect();
        SearchGraphV1 {
            expansions: self.expansions,
            node_summaries,
            metadata,
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraphV1 {
    /// Serialize the graph to canonical JSON bytes (sorted keys, compact).
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// Content hash of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    /// Convert to a `serde_json::Value`. Object keys sort on serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self.node_summaries.iter().map(node_summary_to_json).collect::<Vec<_>>(),
        })
    }
}

fn expand_event_to_json(e: &ExpandEventV1) -> serde_json::Value {
    serde_json::json!({
        "candidates": e.candidates.iter().map(candidate_record_to_json).collect::<Vec<_>>(),
        "expansion_order": e.expansion_order,
        "frontier_pop_key": {
            "creation_order": e.frontier_pop_key.creation_order,
            "depth": e.frontier_pop_key.depth,
            "score": e.frontier_pop_key.score,
        },
        "grid_digest": e.grid_digest,
        "node_id": e.node_id,
    })
}

fn candidate_record_to_json(r: &CandidateRecordV1) -> serde_json::Value {
    serde_json::json!({
        "direction": move_str(r.direction),
        "index": r.index,
        "outcome": outcome_to_json(r.outcome),
    })
}

fn move_str(m: Move) -> String {
    m.letter().to_string()
}

fn outcome_to_json(o: CandidateOutcomeV1) -> serde_json::Value {
    match o {
        CandidateOutcomeV1::Applied { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "applied"})
        }
        CandidateOutcomeV1::DuplicateSuppressed => {
            serde_json::json!({"type": "duplicate_suppressed"})
        }
    }
}

fn node_summary_to_json(n: &SearchGraphNodeSummaryV1) -> serde_json::Value {
    serde_json::json!({
        "depth": n.depth,
        "expansion_order": n.expansion_order,
        "h_cost": n.h_cost,
        "is_goal": n.is_goal,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
        "producing_move": n.producing_move.map(move_str),
        "score": n.score,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "cols": m.cols,
        "frontier_high_water": m.frontier_high_water,
        "goal_digest": m.goal_digest,
        "heuristic": m.heuristic.key(),
        "root_digest": m.root_digest,
        "rows": m.rows,
        "search_policy_digest": m.search_policy_digest,
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_duplicates_suppressed": m.total_duplicates_suppressed,
        "total_expansions": m.total_expansions,
        "total_nodes_generated": m.total_nodes_generated,
    })
}

fn termination_reason_to_json(r: TerminationReasonV1) -> serde_json::Value {
    match r {
        TerminationReasonV1::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": "goal_reached"})
        }
        TerminationReasonV1::IterationLimitReached { limit } => {
            serde_json::json!({"limit": limit, "type": "iteration_limit_reached"})
        }
        TerminationReasonV1::DepthLimitReached { limit, node_id } => {
            serde_json::json!({"limit": limit, "node_id": node_id, "type": "depth_limit_reached"})
        }
        TerminationReasonV1::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
    }
}
