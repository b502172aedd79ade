//! Search entry point and expansion loop.

use tileslide_kernel::carrier::grid::GridV1;
use tileslide_kernel::operators::slide::{apply, legal_moves_from, Move};
use tracing::{info, trace};

use crate::error::{GridRole, SolveError};
use crate::frontier::BestFirstFrontier;
use crate::graph::{
    CandidateOutcomeV1, CandidateRecordV1, ExpandEventV1, GraphRecorder, SearchGraphMetadata,
    SearchGraphV1, TerminationReasonV1,
};
use crate::heuristic::{GoalIndex, Heuristic};
use crate::node::{NodeArena, SearchNodeV1};
use crate::policy::SearchPolicyV1;

/// Which limit stopped the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitKind {
    Iteration,
    Depth,
}

impl std::fmt::Display for LimitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iteration => f.write_str("iteration"),
            Self::Depth => f.write_str("depth"),
        }
    }
}

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The goal was popped. `moves` replay from start to goal.
    Solved {
        moves: Vec<Move>,
        depth: u32,
        expansions: u64,
    },
    /// A configured limit stopped the search first.
    LimitReached { kind: LimitKind, limit: u64 },
    /// Every reachable state was explored without meeting the goal.
    Exhausted,
}

impl Outcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// Counters collected over one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub expansions: u64,
    /// Nodes created, root included.
    pub nodes_generated: u64,
    /// Successors dropped because their state was already explored.
    pub duplicates_suppressed: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Distinct states admitted.
    pub explored_states: u64,
}

/// Result of a search execution.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: Outcome,
    pub stats: SearchStats,
    /// Present iff the policy asked for it.
    pub graph: Option<SearchGraphV1>,
}

/// Solve with the given heuristic and limits. A limit of `0` means unbounded.
///
/// # Errors
///
/// See [`search`].
pub fn solve(
    start: &GridV1,
    goal: &GridV1,
    heuristic: Heuristic,
    iteration_limit: u64,
    depth_limit: u32,
) -> Result<Outcome, SolveError> {
    let policy = SearchPolicyV1::new(heuristic, iteration_limit, depth_limit);
    search(start, goal, &policy).map(|result| result.outcome)
}

/// Run best-first search from `start` toward `goal`.
///
/// Every runtime termination (goal, limit, exhaustion) returns
/// `Ok(SearchResult)`. Errors are pre-flight only: no node has been expanded
/// when one is returned.
///
/// # Errors
///
/// - [`SolveError::MalformedGrid`] if either grid is not a permutation of
///   `0..R·C` (start is checked first).
/// - [`SolveError::IncompatibleGoal`] if the grids differ in shape or tiles.
pub fn search(
    start: &GridV1,
    goal: &GridV1,
    policy: &SearchPolicyV1,
) -> Result<SearchResult, SolveError> {
    start.validate().map_err(SolveError::malformed(GridRole::Start))?;
    let goal_index = GoalIndex::build(goal).map_err(SolveError::malformed(GridRole::Goal))?;
    goal_index.check_compatible(start)?;
    let root_blank = start
        .blank_position()
        .map_err(SolveError::malformed(GridRole::Start))?;

    info!(
        event = "search_start",
        rows = start.rows(),
        cols = start.cols(),
        heuristic = policy.heuristic.key(),
        iteration_limit = policy.iteration_limit,
        depth_limit = policy.depth_limit,
    );

    let evaluate = policy.heuristic.evaluator();
    let mut arena = NodeArena::new();
    let mut frontier = BestFirstFrontier::new();
    let mut recorder = policy.record_graph.then(GraphRecorder::default);
    let mut stats = SearchStats::default();

    let root = SearchNodeV1::root(arena.next_id(), start.clone(), root_blank, evaluate, &goal_index);
    frontier.push(start.fingerprint(), &root);
    arena.push(root);

    let termination = loop {
        let Some(key) = frontier.pop() else {
            break TerminationReasonV1::FrontierExhausted;
        };
        let parent = &arena[key.node_id];

        if parent.grid() == goal {
            break TerminationReasonV1::GoalReached {
                node_id: key.node_id,
            };
        }
        if policy.iteration_limit > 0 && stats.expansions == policy.iteration_limit {
            break TerminationReasonV1::IterationLimitReached {
                limit: policy.iteration_limit,
            };
        }
        if policy.depth_limit > 0 && parent.depth() == policy.depth_limit {
            break TerminationReasonV1::DepthLimitReached {
                limit: policy.depth_limit,
                node_id: key.node_id,
            };
        }

        let mut event = recorder
            .as_ref()
            .map(|_| ExpandEventV1::opened(stats.expansions, parent));
        stats.expansions += 1;
        trace!(
            node_id = key.node_id,
            score = key.score,
            depth = parent.depth(),
            frontier = frontier.len(),
        );

        let mut admitted = Vec::with_capacity(Move::ALL.len());
        let mut next_id = arena.next_id();
        for (index, action) in legal_moves_from(parent.grid(), parent.blank())
            .iter()
            .enumerate()
        {
            let child_grid = apply(parent.grid(), action);
            let fingerprint = child_grid.fingerprint();
            let outcome = if frontier.is_explored(&fingerprint) {
                stats.duplicates_suppressed += 1;
                CandidateOutcomeV1::DuplicateSuppressed
            } else {
                let child =
                    SearchNodeV1::child(next_id, parent, action, child_grid, evaluate, &goal_index);
                frontier.push(fingerprint, &child);
                admitted.push(child);
                next_id += 1;
                CandidateOutcomeV1::Applied {
                    to_node: next_id - 1,
                }
            };
            if let Some(event) = event.as_mut() {
                event.candidates.push(CandidateRecordV1 {
                    index: index as u64,
                    direction: action.direction(),
                    outcome,
                });
            }
        }
        for child in admitted {
            arena.push(child);
        }
        if let (Some(recorder), Some(event)) = (recorder.as_mut(), event) {
            recorder.push(event);
        }
    };

    stats.nodes_generated = arena.next_id();
    stats.frontier_high_water = frontier.high_water();
    stats.explored_states = frontier.explored_count() as u64;

    let outcome = match termination {
        TerminationReasonV1::GoalReached { node_id } => Outcome::Solved {
            moves: arena.steps_sequence(node_id),
            depth: arena[node_id].depth(),
            expansions: stats.expansions,
        },
        TerminationReasonV1::IterationLimitReached { limit } => Outcome::LimitReached {
            kind: LimitKind::Iteration,
            limit,
        },
        TerminationReasonV1::DepthLimitReached { limit, .. } => Outcome::LimitReached {
            kind: LimitKind::Depth,
            limit: u64::from(limit),
        },
        TerminationReasonV1::FrontierExhausted => Outcome::Exhausted,
    };

    info!(
        event = "search_end",
        outcome = outcome_label(&outcome),
        expansions = stats.expansions,
        nodes_generated = stats.nodes_generated,
        duplicates_suppressed = stats.duplicates_suppressed,
        frontier_high_water = stats.frontier_high_water,
    );

    let graph = recorder.map(|recorder| {
        let metadata = SearchGraphMetadata {
            rows: start.rows(),
            cols: start.cols(),
            root_digest: start.digest().to_string(),
            goal_digest: goal.digest().to_string(),
            heuristic: policy.heuristic,
            search_policy_digest: policy.digest().to_string(),
            total_expansions: stats.expansions,
            total_nodes_generated: stats.nodes_generated,
            total_duplicates_suppressed: stats.duplicates_suppressed,
            frontier_high_water: stats.frontier_high_water,
            termination_reason: termination,
        };
        recorder.finish(&arena, metadata)
    });

    Ok(SearchResult {
        outcome,
        stats,
        graph,
    })
}

fn outcome_label(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Solved { .. } => "solved",
        Outcome::LimitReached {
            kind: LimitKind::Iteration,
            ..
        } => "iteration_limit",
        Outcome::LimitReached {
            kind: LimitKind::Depth,
            ..
        } => "depth_limit",
        Outcome::Exhausted => "exhausted",
    }
}
