//! Human-readable run summary.

use std::fmt::Write as _;

use tileslide_search::{LimitKind, Outcome};

use crate::runner::RunReport;

/// Render the summary block printed after a run.
///
/// ```text
/// --- Summary ---
/// Heuristic used: Manhattan
/// Operators: L-Left, R-Right, U-Up, D-Down
/// Time taken: 0.0003 sec
/// Depth: 5
/// Expanded nodes: 5
/// Solution: L L D R R
/// Number of steps: 5
/// ```
///
/// Letters name the direction the blank travels.
#[must_use]
pub fn render_report(report: &RunReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "--- Summary ---");
    let _ = writeln!(out, "Heuristic used: {}", report.heuristic);
    match &report.outcome {
        Outcome::Solved {
            moves,
            depth,
            expansions,
        } => {
            let letters: Vec<String> = moves.iter().map(|m| m.letter().to_string()).collect();
            let _ = writeln!(out, "Operators: L-Left, R-Right, U-Up, D-Down");
            let _ = writeln!(out, "Time taken: {:.4} sec", report.elapsed.as_secs_f64());
            let _ = writeln!(out, "Depth: {depth}");
            let _ = writeln!(out, "Expanded nodes: {expansions}");
            let _ = writeln!(out, "Solution: {}", letters.join(" "));
            let _ = writeln!(out, "Number of steps: {}", moves.len());
        }
        Outcome::LimitReached { kind, .. } => {
            let line = match kind {
                LimitKind::Depth => "Depth limit reached",
                LimitKind::Iteration => "Iterations limit reached",
            };
            let _ = writeln!(out, "{line}");
            let _ = writeln!(out, "Solution not found");
        }
        Outcome::Exhausted => {
            if report.proven_unsolvable() {
                let _ = writeln!(out, "No solution exists (permutation parity)");
            } else {
                let _ = writeln!(out, "No solution exists");
            }
            let _ = writeln!(out, "Solution not found");
        }
    }
    out
}
