//! The permutation-parity test agrees with exhaustive search on every
//! arrangement of a 2×3 board.

use lock_tests::puzzle_helpers::{ordered, permutations};
use tileslide_kernel::carrier::grid::GridV1;
use tileslide_kernel::carrier::parity::is_solvable;
use tileslide_search::{search, Outcome, SearchPolicyV1};

#[test]
fn parity_matches_search_on_all_2x3_layouts() {
    let goal = ordered(2, 3);
    let policy = SearchPolicyV1::default();
    let mut solvable = 0usize;
    let mut unsolvable = 0usize;

    for cells in permutations(6) {
        let start = GridV1::from_cells(2, 3, cells).unwrap();
        let predicted = is_solvable(&start, &goal).unwrap();
        let result = search(&start, &goal, &policy).unwrap();
        match result.outcome {
            Outcome::Solved { .. } => {
                assert!(predicted, "parity rejected a solvable {:?}", start.to_rows());
                solvable += 1;
            }
            Outcome::Exhausted => {
                assert!(!predicted, "parity accepted an unsolvable {:?}", start.to_rows());
                // The whole parity class was visited before giving up.
                assert_eq!(result.stats.explored_states, 360);
                unsolvable += 1;
            }
            Outcome::LimitReached { .. } => panic!("no limits were set"),
        }
    }
    assert_eq!((solvable, unsolvable), (360, 360));
}

#[test]
fn parity_is_relative_to_the_goal() {
    let start = ordered(2, 3);
    let swapped = GridV1::from_rows(&[[2, 1, 3], [4, 5, 0]]).unwrap();
    assert!(!is_solvable(&start, &swapped).unwrap());
    assert!(is_solvable(&swapped, &swapped).unwrap());
    assert_eq!(
        search(&start, &swapped, &SearchPolicyV1::default())
            .unwrap()
            .outcome,
        Outcome::Exhausted
    );
}
