//! Typed search errors.
//!
//! `SolveError` represents setup failures only. Every way the expansion loop
//! can stop (goal, limit, exhaustion) is an [`crate::search::Outcome`], never
//! an error.

use std::fmt;

use tileslide_kernel::carrier::grid::{GridError, Tile};

/// Which input grid a setup error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridRole {
    Start,
    Goal,
}

impl fmt::Display for GridRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// How a start grid fails to match the goal it is searched against.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Incompatibility {
    /// The grids differ in dimensions.
    #[error("start is {start_rows}x{start_cols}, goal is {goal_rows}x{goal_cols}")]
    Shape {
        start_rows: usize,
        start_cols: usize,
        goal_rows: usize,
        goal_cols: usize,
    },
    /// A start tile has no place in the goal. `search` validates both grids
    /// first, so only direct [`GoalIndex::check_compatible`] callers see it.
    ///
    /// [`GoalIndex::check_compatible`]: crate::heuristic::GoalIndex::check_compatible
    #[error("tile {tile} does not appear in the goal")]
    TileSet { tile: Tile },
}

/// Typed failure for pre-flight search validation.
///
/// Returned before any node is expanded. No partial result exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// A grid is not a permutation of `0..R·C`.
    #[error("{role} grid is malformed: {source}")]
    MalformedGrid { role: GridRole, source: GridError },
    /// Start and goal cannot describe the same puzzle.
    #[error("goal is incompatible with start: {0}")]
    IncompatibleGoal(#[from] Incompatibility),
}

impl SolveError {
    pub(crate) fn malformed(role: GridRole) -> impl FnOnce(GridError) -> Self {
        move |source| Self::MalformedGrid { role, source }
    }
}
