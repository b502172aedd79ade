//! In-process determinism, audit graph stability, and limit monotonicity.

use lock_tests::puzzle_helpers::{fixture_puzzles, grid, ordered};
use tileslide_kernel::operators::slide::Move;
use tileslide_search::graph::{CandidateOutcomeV1, TerminationReasonV1};
use tileslide_search::{search, solve, Heuristic, LimitKind, Outcome, SearchPolicyV1};

#[test]
fn repeated_solves_return_identical_outcomes() {
    for puzzle in fixture_puzzles() {
        for h in Heuristic::ALL {
            let first = solve(&puzzle.start, &puzzle.goal, h, 0, 0).unwrap();
            for _ in 0..3 {
                assert_eq!(
                    solve(&puzzle.start, &puzzle.goal, h, 0, 0).unwrap(),
                    first,
                    "{} / {h}",
                    puzzle.name
                );
            }
        }
    }
}

#[test]
fn graph_bytes_identical_across_runs() {
    let start = grid(&[&[8, 6, 7], &[2, 5, 4], &[3, 0, 1]]);
    let goal = ordered(3, 3);
    let policy = SearchPolicyV1::new(Heuristic::Mixed, 0, 0).with_graph();

    let first = search(&start, &goal, &policy).unwrap().graph.unwrap();
    let first_bytes = first.to_canonical_json_bytes().unwrap();
    for _ in 1..5 {
        let again = search(&start, &goal, &policy).unwrap().graph.unwrap();
        assert_eq!(again.to_canonical_json_bytes().unwrap(), first_bytes);
        assert_eq!(again.digest().unwrap(), first.digest().unwrap());
    }
}

#[test]
fn graph_metadata_binds_inputs_and_counters() {
    let puzzle = &fixture_puzzles()[1];
    let policy = SearchPolicyV1::default().with_graph();
    let result = search(&puzzle.start, &puzzle.goal, &policy).unwrap();
    let graph = result.graph.unwrap();
    let meta = &graph.metadata;

    assert_eq!(meta.root_digest, puzzle.start.digest().to_string());
    assert_eq!(meta.goal_digest, puzzle.goal.digest().to_string());
    assert_eq!(meta.search_policy_digest, policy.digest().to_string());
    assert_eq!(meta.total_expansions, result.stats.expansions);
    assert_eq!(meta.total_nodes_generated, result.stats.nodes_generated);
    assert_eq!(
        meta.total_duplicates_suppressed,
        result.stats.duplicates_suppressed
    );
    assert!(matches!(
        meta.termination_reason,
        TerminationReasonV1::GoalReached { .. }
    ));
}

#[test]
fn graph_candidates_account_for_every_node() {
    let puzzle = &fixture_puzzles()[3];
    let policy = SearchPolicyV1::new(Heuristic::Manhattan, 0, 0).with_graph();
    let result = search(&puzzle.start, &puzzle.goal, &policy).unwrap();
    let graph = result.graph.unwrap();

    let mut applied = 0u64;
    let mut suppressed = 0u64;
    for event in &graph.expansions {
        for candidate in &event.candidates {
            match candidate.outcome {
                CandidateOutcomeV1::Applied { to_node } => {
                    applied += 1;
                    let summary = &graph.node_summaries[usize::try_from(to_node).unwrap()];
                    assert_eq!(summary.parent_id, Some(event.node_id));
                    assert_eq!(summary.producing_move, Some(candidate.direction));
                }
                CandidateOutcomeV1::DuplicateSuppressed => suppressed += 1,
            }
        }
    }
    // Every node except the root was applied exactly once.
    assert_eq!(applied + 1, result.stats.nodes_generated);
    assert_eq!(suppressed, result.stats.duplicates_suppressed);
}

#[test]
fn raising_or_removing_limits_keeps_the_solution() {
    for puzzle in fixture_puzzles() {
        for h in Heuristic::ALL {
            let policy = SearchPolicyV1::new(h, 0, 0).with_graph();
            let result = search(&puzzle.start, &puzzle.goal, &policy).unwrap();
            let Outcome::Solved { expansions, .. } = &result.outcome else {
                continue;
            };
            // Deepest node the unbounded run ever popped.
            let deepest = result
                .graph
                .as_ref()
                .and_then(|g| {
                    g.node_summaries
                        .iter()
                        .filter(|n| n.expansion_order.is_some() || n.is_goal)
                        .map(|n| n.depth)
                        .max()
                })
                .unwrap_or(0);
            let loose = [
                (expansions + 1, 0),
                (*expansions, 0),
                (0, deepest + 1),
                (expansions * 2 + 1, deepest + 10),
            ];
            for (iterations, depth_limit) in loose {
                assert_eq!(
                    solve(&puzzle.start, &puzzle.goal, h, iterations, depth_limit).unwrap(),
                    result.outcome,
                    "{} / {h} with limits ({iterations}, {depth_limit})",
                    puzzle.name
                );
            }
        }
    }
}

#[test]
fn tightening_the_iteration_limit_never_invents_a_solution() {
    let puzzle = &fixture_puzzles()[2];
    let unbounded = solve(&puzzle.start, &puzzle.goal, Heuristic::Mixed, 0, 0).unwrap();
    let Outcome::Solved { expansions, .. } = unbounded else {
        panic!("fixture must be solvable");
    };
    for limit in [1, expansions / 2, expansions] {
        if limit == 0 {
            continue;
        }
        let outcome = solve(&puzzle.start, &puzzle.goal, Heuristic::Mixed, limit, 0).unwrap();
        if limit == expansions {
            // The goal is popped before the counter is compared.
            assert_eq!(outcome, unbounded);
        } else {
            assert_eq!(
                outcome,
                Outcome::LimitReached {
                    kind: LimitKind::Iteration,
                    limit,
                }
            );
        }
    }
}

#[test]
fn tie_break_picks_the_known_ten_move_path() {
    // Pinned by the (score, insertion order) key and L, R, U, D enumeration.
    let start = grid(&[&[0, 4, 1], &[2, 6, 3], &[7, 5, 8]]);
    let outcome = solve(&start, &ordered(3, 3), Heuristic::Manhattan, 0, 0).unwrap();
    let expected: Vec<Move> = "RRDLLURDDR"
        .chars()
        .map(|c| Move::from_letter(c).unwrap())
        .collect();
    assert_eq!(
        outcome,
        Outcome::Solved {
            moves: expected,
            depth: 10,
            expansions: 13,
        }
    );
}
