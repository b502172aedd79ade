//! `tileslide`: solve a sliding-tile puzzle from a file or inline grids.
//!
//! Exit status: `0` solved, `1` not solved (limit or exhaustion),
//! `2` malformed input or I/O failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tileslide_harness::{
    parse_inline_grid, render_report, run_puzzle, write_graph, HarnessError, PuzzleFileV1,
    PuzzleSpecV1,
};
use tileslide_search::{GridRole, Heuristic};

#[derive(Parser)]
#[command(name = "tileslide")]
#[command(about = "Best-first solver for M×N sliding-tile puzzles")]
struct Cli {
    /// TOML puzzle file (start, goal, heuristic, limits)
    #[arg(long, short, conflicts_with = "start")]
    puzzle: Option<PathBuf>,

    /// Start grid, rows separated by '/', e.g. "1 2 3/4 0 5"
    #[arg(long, required_unless_present = "puzzle")]
    start: Option<String>,

    /// Goal grid in the same format (default: tiles in order, blank last)
    #[arg(long)]
    goal: Option<String>,

    /// Heuristic: misplaced, manhattan, mixed (or 1, 2, 3)
    #[arg(long = "heuristic", short = 'H')]
    heuristic: Option<Heuristic>,

    /// Expansion limit, 0 for none
    #[arg(long = "iterations")]
    iteration_limit: Option<u64>,

    /// Depth limit, 0 for none
    #[arg(long = "depth")]
    depth_limit: Option<u32>,

    /// Skip the search when permutation parity proves the goal unreachable
    #[arg(long)]
    check_parity: bool,

    /// Write the search audit graph as canonical JSON
    #[arg(long)]
    graph_out: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn puzzle_spec(&self) -> Result<PuzzleSpecV1, HarnessError> {
        let mut spec = match (&self.puzzle, &self.start) {
            (Some(path), _) => {
                let mut spec = PuzzleFileV1::load(path)?.into_spec()?;
                if let Some(goal) = &self.goal {
                    spec.goal = parse_inline_grid(goal, GridRole::Goal)?;
                }
                spec
            }
            (None, start) => PuzzleSpecV1::from_inline(
                start.as_deref().unwrap_or_default(),
                self.goal.as_deref(),
            )?,
        };
        if let Some(heuristic) = self.heuristic {
            spec.policy.heuristic = heuristic;
        }
        if let Some(limit) = self.iteration_limit {
            spec.policy.iteration_limit = limit;
        }
        if let Some(limit) = self.depth_limit {
            spec.policy.depth_limit = limit;
        }
        spec.policy.record_graph = self.graph_out.is_some();
        spec.check_parity = self.check_parity;
        Ok(spec)
    }
}

fn run(cli: &Cli) -> Result<u8, HarnessError> {
    let spec = cli.puzzle_spec()?;
    let report = run_puzzle(&spec)?;
    print!("{}", render_report(&report));

    if let (Some(path), Some(graph)) = (&cli.graph_out, &report.graph) {
        let digest = write_graph(graph, path)?;
        info!(event = "graph_written", path = %path.display(), digest = %digest);
    }
    Ok(report.exit_code())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
