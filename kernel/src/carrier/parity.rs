//! Reachability parity between two grids.
//!
//! Every slide swaps the blank with a neighbour: one transposition of the
//! position permutation, and one unit step of the blank. So the parity of the
//! permutation taking `start` to `goal` always matches the parity of the
//! blank's Manhattan displacement along any reachable path. For grids with at
//! least two rows and two columns that condition is also sufficient.
//!
//! Single-row and single-column grids are a line: tiles can never pass each
//! other, so the goal is reachable iff the non-blank tiles appear in the same
//! order.

use crate::carrier::grid::{GridError, GridV1, Tile, BLANK};

/// Whether `goal` is reachable from `start` by sliding the blank.
///
/// # Errors
///
/// - Any [`GridV1::validate`] failure of either grid.
/// - [`GridError::ShapeMismatch`] if the grids differ in dimensions.
pub fn is_solvable(start: &GridV1, goal: &GridV1) -> Result<bool, GridError> {
    start.validate()?;
    goal.validate()?;
    if !start.same_shape(goal) {
        return Err(GridError::ShapeMismatch {
            expected_rows: goal.rows(),
            expected_cols: goal.cols(),
            actual_rows: start.rows(),
            actual_cols: start.cols(),
        });
    }

    if start.rows() == 1 || start.cols() == 1 {
        let tiles = |g: &GridV1| -> Vec<Tile> {
            g.cells().iter().copied().filter(|&t| t != BLANK).collect()
        };
        return Ok(tiles(start) == tiles(goal));
    }

    let blank_distance = start.blank_position()?.manhattan(goal.blank_position()?);
    Ok(permutation_parity(start, goal) == blank_distance % 2)
}

/// Parity (0 even, 1 odd) of the permutation sending each cell of `start` to
/// the cell its tile occupies in `goal`. Both grids must be validated.
fn permutation_parity(start: &GridV1, goal: &GridV1) -> usize {
    let mut goal_index = vec![0usize; goal.len()];
    for (i, &tile) in goal.cells().iter().enumerate() {
        goal_index[usize::from(tile)] = i;
    }
    let target: Vec<usize> = start
        .cells()
        .iter()
        .map(|&tile| goal_index[usize::from(tile)])
        .collect();

    // n - cycles = number of transpositions.
    let mut visited = vec![false; target.len()];
    let mut cycles = 0usize;
    for begin in 0..target.len() {
        if visited[begin] {
            continue;
        }
        cycles += 1;
        let mut i = begin;
        while !visited[i] {
            visited[i] = true;
            i = target[i];
        }
    }
    (target.len() - cycles) % 2
}
