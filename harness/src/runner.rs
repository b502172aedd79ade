//! Harness runner: validate, optionally parity-check, search, and verify.
//!
//! # Pipeline
//!
//! ```text
//! [is_solvable()] → search() → apply_moves() replay → RunReport
//! ```
//!
//! The runner owns wall-clock timing. The search itself never reads a clock.

use std::path::Path;
use std::time::{Duration, Instant};

use tileslide_kernel::carrier::grid::GridError;
use tileslide_kernel::carrier::parity::is_solvable;
use tileslide_kernel::operators::slide::{apply_moves, ApplyFailure};
use tileslide_kernel::proof::hash::ContentHash;
use tileslide_search::graph::SearchGraphV1;
use tileslide_search::{search, Heuristic, Outcome, SearchStats, SolveError};
use tracing::{debug, warn};

use crate::puzzle_file::{PuzzleFileError, PuzzleSpecV1};

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleFileError),
    #[error(transparent)]
    Solve(#[from] SolveError),
    /// The parity pre-check rejected the grids.
    #[error("parity check failed: {0}")]
    Parity(#[from] GridError),
    /// The reported solution left the grid while replaying.
    #[error("solution does not replay: {0}")]
    Replay(#[from] ApplyFailure),
    /// The reported solution replays to something other than the goal.
    #[error("solution replays to a grid other than the goal")]
    ReplayMismatch,
    #[error("cannot serialize search graph: {0}")]
    Graph(#[from] serde_json::Error),
    #[error("cannot write {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// Everything the report and the exit code need from one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub heuristic: Heuristic,
    pub outcome: Outcome,
    pub stats: SearchStats,
    /// Wall-clock time spent in the search.
    pub elapsed: Duration,
    /// Parity verdict, when the check ran.
    pub solvable: Option<bool>,
    /// `false` when the parity pre-check made the search unnecessary.
    pub searched: bool,
    pub graph: Option<SearchGraphV1>,
}

impl RunReport {
    /// Process exit status: `0` solved, `1` not solved.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.outcome.is_solved() {
            0
        } else {
            1
        }
    }

    /// Whether parity proved the goal unreachable.
    #[must_use]
    pub const fn proven_unsolvable(&self) -> bool {
        matches!(self.solvable, Some(false))
    }
}

/// Run one puzzle end to end.
///
/// # Errors
///
/// - [`HarnessError::Parity`] if `check_parity` is set and the grids are
///   malformed or differ in shape.
/// - [`HarnessError::Solve`] for search setup errors.
/// - [`HarnessError::Replay`] / [`HarnessError::ReplayMismatch`] if a
///   reported solution fails verification.
pub fn run_puzzle(spec: &PuzzleSpecV1) -> Result<RunReport, HarnessError> {
    let mut solvable = if spec.check_parity {
        Some(is_solvable(&spec.start, &spec.goal)?)
    } else {
        None
    };

    if solvable == Some(false) {
        debug!(event = "parity_skip", "goal unreachable by parity; search skipped");
        return Ok(RunReport {
            heuristic: spec.policy.heuristic,
            outcome: Outcome::Exhausted,
            stats: SearchStats::default(),
            elapsed: Duration::ZERO,
            solvable,
            searched: false,
            graph: None,
        });
    }

    let started = Instant::now();
    let result = search(&spec.start, &spec.goal, &spec.policy)?;
    let elapsed = started.elapsed();

    match &result.outcome {
        Outcome::Solved { moves, .. } => {
            let end = apply_moves(&spec.start, moves)?;
            if end != spec.goal {
                return Err(HarnessError::ReplayMismatch);
            }
        }
        // Grids are validated by now, so parity cannot fail here.
        Outcome::Exhausted if solvable.is_none() => {
            solvable = is_solvable(&spec.start, &spec.goal).ok();
            if solvable == Some(true) {
                warn!("search exhausted a goal that parity says is reachable");
            }
        }
        Outcome::Exhausted | Outcome::LimitReached { .. } => {}
    }

    Ok(RunReport {
        heuristic: spec.policy.heuristic,
        outcome: result.outcome,
        stats: result.stats,
        elapsed,
        solvable,
        searched: true,
        graph: result.graph,
    })
}

/// Write a graph's canonical JSON to `path` and return its digest.
///
/// # Errors
///
/// [`HarnessError::Graph`] on serialization failure, [`HarnessError::Write`]
/// if the file cannot be written.
pub fn write_graph(graph: &SearchGraphV1, path: &Path) -> Result<ContentHash, HarnessError> {
    let bytes = graph.to_canonical_json_bytes()?;
    std::fs::write(path, &bytes).map_err(|source| HarnessError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(graph.digest()?)
}
