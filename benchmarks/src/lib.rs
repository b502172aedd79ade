//! Shared inputs for tileslide benchmark suites.

use std::collections::{HashSet, VecDeque};

use tileslide_kernel::carrier::grid::{GridV1, Tile};
use tileslide_kernel::operators::slide::{apply, legal_moves};

/// A named start/goal pair with a known optimal length.
pub struct BenchPuzzle {
    pub name: &'static str,
    pub start: GridV1,
    pub goal: GridV1,
}

/// Build a grid from row literals.
///
/// # Panics
///
/// Panics on a malformed literal. Benchmark setup failures are fatal.
#[must_use]
pub fn grid(rows: &[&[Tile]]) -> GridV1 {
    GridV1::from_rows(rows).unwrap_or_else(|e| panic!("bad bench grid {rows:?}: {e}"))
}

/// The ordered layout for `rows × cols`.
///
/// # Panics
///
/// Panics on an empty or oversized shape.
#[must_use]
pub fn ordered(rows: usize, cols: usize) -> GridV1 {
    GridV1::ordered(rows, cols).unwrap_or_else(|e| panic!("bad bench shape {rows}x{cols}: {e}"))
}

/// Puzzles of increasing difficulty, easiest first.
#[must_use]
pub fn bench_puzzles() -> Vec<BenchPuzzle> {
    vec![
        BenchPuzzle {
            name: "3x3_depth5",
            start: grid(&[&[1, 2, 3], &[5, 6, 0], &[4, 7, 8]]),
            goal: ordered(3, 3),
        },
        BenchPuzzle {
            name: "2x4_depth18",
            start: grid(&[&[3, 4, 7, 6], &[2, 0, 1, 5]]),
            goal: ordered(2, 4),
        },
        BenchPuzzle {
            name: "3x3_depth31",
            start: grid(&[&[8, 6, 7], &[2, 5, 4], &[3, 0, 1]]),
            goal: ordered(3, 3),
        },
    ]
}

/// Up to `count` distinct grids reachable from `origin`, breadth-first.
///
/// # Panics
///
/// Panics if `origin` has no blank.
#[must_use]
pub fn reachable_states(origin: &GridV1, count: usize) -> Vec<GridV1> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    let mut out = Vec::with_capacity(count);
    seen.insert(origin.clone());
    queue.push_back(origin.clone());
    while let Some(current) = queue.pop_front() {
        if out.len() == count {
            break;
        }
        for action in legal_moves(&current).unwrap_or_else(|e| panic!("{e}")) {
            let next = apply(&current, &action);
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
        out.push(current);
    }
    out
}
