//! Heuristic evaluation against a goal index.
//!
//! All three estimates ignore the blank and run in O(R·C). The selector is a
//! closed enum; the driver resolves it to a plain function pointer once per
//! search so the per-node path does no dispatch on the variant.

use std::fmt;
use std::str::FromStr;

use tileslide_kernel::carrier::grid::{GridError, GridV1, Position, Tile, BLANK};

use crate::error::Incompatibility;

/// Goal position of every tile value.
///
/// Built once per search from the goal grid and threaded explicitly into
/// every evaluation. Read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalIndex {
    rows: usize,
    cols: usize,
    positions: Box<[Position]>,
}

impl GoalIndex {
    /// Index a goal grid.
    ///
    /// # Errors
    ///
    /// Any [`GridV1::validate`] failure of `goal`.
    pub fn build(goal: &GridV1) -> Result<Self, GridError> {
        goal.validate()?;
        let mut positions = vec![Position::new(0, 0); goal.len()];
        for (pos, tile) in goal.tiles() {
            positions[usize::from(tile)] = pos;
        }
        Ok(Self {
            rows: goal.rows(),
            cols: goal.cols(),
            positions: positions.into_boxed_slice(),
        })
    }

    /// Goal position of `tile`. Panics if the tile is not in the goal.
    #[must_use]
    pub fn position(&self, tile: Tile) -> Position {
        self.positions[usize::from(tile)]
    }

    /// Check that `start` has the goal's dimensions and tile set.
    ///
    /// # Errors
    ///
    /// - [`Incompatibility::Shape`] on a dimension mismatch.
    /// - [`Incompatibility::TileSet`] for the first start tile (row-major)
    ///   that is outside the goal or appears more often than in the goal.
    ///   Unreachable through [`crate::search`], which validates `start`
    ///   first; this guards callers that use a `GoalIndex` directly.
    pub fn check_compatible(&self, start: &GridV1) -> Result<(), Incompatibility> {
        if start.rows() != self.rows || start.cols() != self.cols {
            return Err(Incompatibility::Shape {
                start_rows: start.rows(),
                start_cols: start.cols(),
                goal_rows: self.rows,
                goal_cols: self.cols,
            });
        }
        let mut used = vec![false; self.positions.len()];
        for &tile in start.cells() {
            match used.get_mut(usize::from(tile)) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(Incompatibility::TileSet { tile }),
            }
        }
        Ok(())
    }
}

/// Signature every heuristic resolves to.
pub type HeuristicFn = fn(&GridV1, &GoalIndex) -> u64;

/// Heuristic selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// Number of non-blank tiles off their goal cell.
    MisplacedTiles,
    /// Sum of per-tile Manhattan distances.
    #[default]
    Manhattan,
    /// Misplaced tiles plus Manhattan. A literal sum, so not admissible.
    Mixed,
}

impl Heuristic {
    pub const ALL: [Self; 3] = [Self::MisplacedTiles, Self::Manhattan, Self::Mixed];

    /// Map the numeric menu choice (`1`, `2`, `3`).
    #[must_use]
    pub const fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            1 => Some(Self::MisplacedTiles),
            2 => Some(Self::Manhattan),
            3 => Some(Self::Mixed),
            _ => None,
        }
    }

    /// Stable machine name (`misplaced`, `manhattan`, `mixed`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::MisplacedTiles => "misplaced",
            Self::Manhattan => "manhattan",
            Self::Mixed => "mixed",
        }
    }

    /// The evaluation function for this variant.
    #[must_use]
    pub const fn evaluator(self) -> HeuristicFn {
        match self {
            Self::MisplacedTiles => misplaced_tiles,
            Self::Manhattan => manhattan,
            Self::Mixed => mixed,
        }
    }

    /// Evaluate `grid` against `goal`.
    #[must_use]
    pub fn evaluate(self, grid: &GridV1, goal: &GoalIndex) -> u64 {
        (self.evaluator())(grid, goal)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MisplacedTiles => f.write_str("Misplaced tiles"),
            Self::Manhattan => f.write_str("Manhattan"),
            Self::Mixed => f.write_str("Mixed"),
        }
    }
}

/// A heuristic name or selector that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown heuristic {0:?} (expected misplaced, manhattan, mixed, or 1-3)")]
pub struct UnknownHeuristic(pub String);

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if let Ok(selector) = lowered.parse::<u8>() {
            return Self::from_selector(selector).ok_or(UnknownHeuristic(s.to_string()));
        }
        match lowered.as_str() {
            "misplaced" | "misplaced-tiles" | "misplaced_tiles" => Ok(Self::MisplacedTiles),
            "manhattan" => Ok(Self::Manhattan),
            "mixed" => Ok(Self::Mixed),
            _ => Err(UnknownHeuristic(s.to_string())),
        }
    }
}

/// Count of non-blank tiles whose cell differs from their goal cell.
#[must_use]
pub fn misplaced_tiles(grid: &GridV1, goal: &GoalIndex) -> u64 {
    let count = grid
        .tiles()
        .filter(|&(pos, tile)| tile != BLANK && goal.position(tile) != pos)
        .count();
    count as u64
}

/// Sum over non-blank tiles of `|x - x_goal| + |y - y_goal|`.
#[must_use]
pub fn manhattan(grid: &GridV1, goal: &GoalIndex) -> u64 {
    grid.tiles()
        .filter(|&(_, tile)| tile != BLANK)
        .map(|(pos, tile)| pos.manhattan(goal.position(tile)) as u64)
        .sum()
}

/// [`misplaced_tiles`] plus [`manhattan`].
#[must_use]
pub fn mixed(grid: &GridV1, goal: &GoalIndex) -> u64 {
    misplaced_tiles(grid, goal) + manhattan(grid, goal)
}
