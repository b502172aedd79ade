//! Slide operators: enumerate and apply blank moves.
//!
//! A [`Move`] names the direction the **blank** travels. `Right` moves the
//! blank one column right, so the tile that was there slides left.
//!
//! Enumeration order is fixed (`Left`, `Right`, `Up`, `Down`) so that
//! successor generation, and therefore search output, is deterministic.

use std::fmt;

use crate::carrier::grid::{GridError, GridV1, Position};

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Successor enumeration order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Column and row delta of the blank.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Single-letter code used in reports.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    /// Parse a single-letter code (case-insensitive).
    #[must_use]
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }

    /// Destination of the blank from `from`, if it stays on the grid.
    #[must_use]
    pub fn target(self, grid: &GridV1, from: Position) -> Option<Position> {
        let (dx, dy) = self.offset();
        let x = from.x.checked_add_signed(dx)?;
        let y = from.y.checked_add_signed(dy)?;
        let to = Position::new(x, y);
        grid.contains(to).then_some(to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        };
        f.write_str(s)
    }
}

/// A legal slide: the direction plus the blank's before/after coordinates.
///
/// Only produced by [`legal_moves`], so `from` is always the blank of the
/// grid it was enumerated on and `to` is always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideAction {
    direction: Move,
    from: Position,
    to: Position,
}

impl SlideAction {
    #[must_use]
    pub const fn direction(&self) -> Move {
        self.direction
    }

    /// Blank position before the slide.
    #[must_use]
    pub const fn blank_from(&self) -> Position {
        self.from
    }

    /// Blank position after the slide.
    #[must_use]
    pub const fn blank_to(&self) -> Position {
        self.to
    }
}

/// Typed failure for replaying a move sequence. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyFailure {
    /// The grid has no blank to move.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// A move would push the blank off the grid.
    #[error("move {index} ({direction}) leaves the grid from {from}")]
    OffGrid {
        index: usize,
        direction: Move,
        from: Position,
    },
}

/// Enumerate legal slides of the blank, in [`Move::ALL`] order.
///
/// # Errors
///
/// Returns [`GridError::MissingBlank`] if the grid has no blank.
pub fn legal_moves(grid: &GridV1) -> Result<Vec<SlideAction>, GridError> {
    let blank = grid.blank_position()?;
    Ok(legal_moves_from(grid, blank))
}

/// Enumerate legal slides when the blank position is already known.
///
/// `blank` must be the blank of `grid`; search nodes carry it so that
/// expansion skips the row-major scan.
#[must_use]
pub fn legal_moves_from(grid: &GridV1, blank: Position) -> Vec<SlideAction> {
    Move::ALL
        .iter()
        .filter_map(|&direction| {
            direction.target(grid, blank).map(|to| SlideAction {
                direction,
                from: blank,
                to,
            })
        })
        .collect()
}

/// Apply a slide, producing a new grid. The input grid is untouched.
///
/// `action` must come from [`legal_moves`] on a grid with the same tile
/// arrangement as `grid`.
#[must_use]
pub fn apply(grid: &GridV1, action: &SlideAction) -> GridV1 {
    debug_assert!(grid.contains(action.to));
    debug_assert_eq!(grid.tile_at(action.from), crate::carrier::grid::BLANK);
    grid.with_swapped(action.from, action.to)
}

/// Replay a sequence of moves from `grid`.
///
/// # Errors
///
/// - [`ApplyFailure::Grid`] if the grid has no blank.
/// - [`ApplyFailure::OffGrid`] at the first move that leaves the grid.
pub fn apply_moves(grid: &GridV1, moves: &[Move]) -> Result<GridV1, ApplyFailure> {
    let mut blank = grid.blank_position()?;
    let mut current = grid.clone();
    for (index, &direction) in moves.iter().enumerate() {
        let to = direction
            .target(&current, blank)
            .ok_or(ApplyFailure::OffGrid {
                index,
                direction,
                from: blank,
            })?;
        current = current.with_swapped(blank, to);
        blank = to;
    }
    Ok(current)
}
