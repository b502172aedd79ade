//! End-to-end search scenarios: immediate goal, one move, depth and
//! iteration limits, unsolvable permutations, and setup errors.

use lock_tests::puzzle_helpers::{fixture_puzzles, grid, ordered};
use tileslide_kernel::carrier::grid::GridError;
use tileslide_kernel::operators::slide::{apply_moves, Move};
use tileslide_search::{
    search, solve, GridRole, Heuristic, Incompatibility, LimitKind, Outcome, SearchPolicyV1,
    SolveError,
};

#[test]
fn trivial_2x2_already_solved() {
    let goal = ordered(2, 2);
    for h in Heuristic::ALL {
        for (iterations, depth) in [(0, 0), (1, 0), (0, 1), (5, 5)] {
            assert_eq!(
                solve(&goal, &goal, h, iterations, depth).unwrap(),
                Outcome::Solved {
                    moves: vec![],
                    depth: 0,
                    expansions: 0,
                },
                "{h} with limits ({iterations}, {depth})"
            );
        }
    }
}

#[test]
fn one_move_away_under_every_heuristic() {
    let start = grid(&[&[1, 2], &[0, 3]]);
    let goal = grid(&[&[1, 2], &[3, 0]]);
    for h in Heuristic::ALL {
        assert_eq!(
            solve(&start, &goal, h, 0, 0).unwrap(),
            Outcome::Solved {
                moves: vec![Move::Right],
                depth: 1,
                expansions: 1,
            },
            "{h}"
        );
    }
}

#[test]
fn depth_limit_hit_before_goal() {
    let start = grid(&[&[1, 2, 3], &[5, 6, 0], &[4, 7, 8]]);
    let outcome = solve(&start, &ordered(3, 3), Heuristic::Manhattan, 0, 3).unwrap();
    assert_eq!(
        outcome,
        Outcome::LimitReached {
            kind: LimitKind::Depth,
            limit: 3,
        }
    );
}

#[test]
fn iteration_limit_of_one_expands_only_root() {
    let start = grid(&[&[1, 2, 3], &[5, 6, 0], &[4, 7, 8]]);
    let policy = SearchPolicyV1::new(Heuristic::Manhattan, 1, 0);
    let result = search(&start, &ordered(3, 3), &policy).unwrap();
    assert_eq!(
        result.outcome,
        Outcome::LimitReached {
            kind: LimitKind::Iteration,
            limit: 1,
        }
    );
    assert_eq!(result.stats.expansions, 1);
}

#[test]
fn hardest_8_puzzle_solves_and_replays() {
    let start = grid(&[&[8, 6, 7], &[2, 5, 4], &[3, 0, 1]]);
    let goal = ordered(3, 3);
    let outcome = solve(&start, &goal, Heuristic::Manhattan, 0, 0).unwrap();
    let Outcome::Solved {
        moves,
        depth,
        expansions,
    } = outcome
    else {
        panic!("expected Solved, got {outcome:?}");
    };
    assert_eq!(usize::try_from(depth).unwrap(), moves.len());
    assert!(depth >= 31, "no solution is shorter than 31 moves");
    assert!(expansions > 0);
    assert_eq!(apply_moves(&start, &moves).unwrap(), goal);
}

#[test]
fn every_fixture_solution_replays_to_goal() {
    for puzzle in fixture_puzzles() {
        for h in Heuristic::ALL {
            let outcome = solve(&puzzle.start, &puzzle.goal, h, 0, 0).unwrap();
            match outcome {
                Outcome::Solved { moves, depth, .. } => {
                    assert_eq!(usize::try_from(depth).unwrap(), moves.len());
                    assert_eq!(
                        apply_moves(&puzzle.start, &moves).unwrap(),
                        puzzle.goal,
                        "{} / {h}",
                        puzzle.name
                    );
                }
                Outcome::Exhausted => assert!(puzzle.name.starts_with("unsolvable")),
                Outcome::LimitReached { .. } => panic!("no limits were set"),
            }
        }
    }
}

#[test]
fn swapped_pair_on_3x3_is_exhausted() {
    let start = grid(&[&[2, 1, 3], &[4, 5, 6], &[7, 8, 0]]);
    let result = search(&start, &ordered(3, 3), &SearchPolicyV1::default()).unwrap();
    assert_eq!(result.outcome, Outcome::Exhausted);
    // Half of 9! states share the start's parity class.
    assert_eq!(result.stats.explored_states, 181_440);
    assert_eq!(result.stats.expansions, 181_440);
}

#[test]
fn malformed_grids_fail_before_search() {
    let goal = ordered(2, 2);
    let cases = [
        (grid(&[&[1, 2], &[3, 3]]), GridError::DuplicateValue { value: 3 }),
        (
            grid(&[&[1, 2], &[3, 9]]),
            GridError::ValueOutOfRange { value: 9, max: 3 },
        ),
    ];
    for (start, expected) in cases {
        assert_eq!(
            solve(&start, &goal, Heuristic::Manhattan, 0, 0).unwrap_err(),
            SolveError::MalformedGrid {
                role: GridRole::Start,
                source: expected,
            }
        );
    }
}

#[test]
fn goal_of_different_shape_is_incompatible() {
    let start = ordered(2, 3);
    let goal = ordered(3, 2);
    assert_eq!(
        solve(&start, &goal, Heuristic::Manhattan, 0, 0).unwrap_err(),
        SolveError::IncompatibleGoal(Incompatibility::Shape {
            start_rows: 2,
            start_cols: 3,
            goal_rows: 3,
            goal_cols: 2,
        })
    );
}

#[test]
fn single_row_puzzle_slides_along_the_line() {
    let start = grid(&[&[1, 0, 2, 3]]);
    let goal = grid(&[&[1, 2, 3, 0]]);
    assert_eq!(
        solve(&start, &goal, Heuristic::MisplacedTiles, 0, 0).unwrap(),
        Outcome::Solved {
            moves: vec![Move::Right, Move::Right],
            depth: 2,
            expansions: 2,
        }
    );
}
