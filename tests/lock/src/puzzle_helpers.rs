//! Grid builders, brute-force distances, and the fixed fixture puzzles.
//!
//! # Panics
//!
//! Helpers panic on malformed literals. They only ever see test inputs.

use std::collections::{HashMap, VecDeque};

use tileslide_kernel::carrier::grid::{GridV1, Tile};
use tileslide_kernel::operators::slide::{apply, legal_moves};

/// Build a grid from row literals.
///
/// # Panics
///
/// Panics if the rows are empty or ragged.
#[must_use]
pub fn grid(rows: &[&[Tile]]) -> GridV1 {
    GridV1::from_rows(rows).unwrap_or_else(|e| panic!("bad test grid {rows:?}: {e}"))
}

/// The ordered goal layout for `rows × cols`.
///
/// # Panics
///
/// Panics if the shape is empty or too large.
#[must_use]
pub fn ordered(rows: usize, cols: usize) -> GridV1 {
    GridV1::ordered(rows, cols).unwrap_or_else(|e| panic!("bad shape {rows}x{cols}: {e}"))
}

/// Exact move distance from every state reachable from `goal` back to it.
///
/// Slides are reversible, so a breadth-first sweep outward from the goal
/// gives each state's distance to the goal.
///
/// # Panics
///
/// Panics if `goal` has no blank.
#[must_use]
pub fn bfs_distances(goal: &GridV1) -> HashMap<GridV1, u32> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(goal.clone(), 0);
    queue.push_back(goal.clone());
    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        for action in legal_moves(&current).unwrap_or_else(|e| panic!("{e}")) {
            let next = apply(&current, &action);
            if !dist.contains_key(&next) {
                dist.insert(next.clone(), d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Every ordering of `0..n`, in lexicographic order.
#[must_use]
pub fn permutations(n: usize) -> Vec<Vec<Tile>> {
    let mut current: Vec<Tile> = (0..n)
        .map(|v| Tile::try_from(v).unwrap_or(Tile::MAX))
        .collect();
    let mut out = vec![current.clone()];
    // Next lexicographic permutation until the sequence is descending.
    loop {
        let Some(i) = (1..current.len()).rev().find(|&i| current[i - 1] < current[i]) else {
            return out;
        };
        let pivot = i - 1;
        let Some(j) = (i..current.len()).rev().find(|&j| current[j] > current[pivot]) else {
            return out;
        };
        current.swap(pivot, j);
        current[i..].reverse();
        out.push(current.clone());
    }
}

/// A named start/goal pair used by fixtures and scenario tests.
#[derive(Debug, Clone)]
pub struct FixturePuzzle {
    pub name: &'static str,
    pub start: GridV1,
    pub goal: GridV1,
}

/// The fixed puzzles the cross-process fixture solves.
#[must_use]
pub fn fixture_puzzles() -> Vec<FixturePuzzle> {
    vec![
        FixturePuzzle {
            name: "one_move_2x2",
            start: grid(&[&[1, 2], &[0, 3]]),
            goal: ordered(2, 2),
        },
        FixturePuzzle {
            name: "five_moves_3x3",
            start: grid(&[&[1, 2, 3], &[5, 6, 0], &[4, 7, 8]]),
            goal: ordered(3, 3),
        },
        FixturePuzzle {
            name: "scrambled_3x3",
            start: grid(&[&[8, 6, 7], &[2, 5, 4], &[3, 0, 1]]),
            goal: ordered(3, 3),
        },
        FixturePuzzle {
            name: "scrambled_2x4",
            start: grid(&[&[3, 4, 7, 6], &[2, 0, 1, 5]]),
            goal: ordered(2, 4),
        },
        FixturePuzzle {
            name: "unsolvable_2x3",
            start: grid(&[&[2, 1, 3], &[4, 5, 0]]),
            goal: ordered(2, 3),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutations_of_three() {
        let all = permutations(3);
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec![0, 1, 2]);
        assert_eq!(all[5], vec![2, 1, 0]);
    }

    #[test]
    fn bfs_covers_half_of_2x2_states() {
        let dist = bfs_distances(&ordered(2, 2));
        assert_eq!(dist.len(), 12);
        assert_eq!(dist.values().max(), Some(&6));
    }
}
