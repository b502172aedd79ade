//! TileSlide Harness: puzzle loading, runs, and reports.
//!
//! The harness turns puzzle files or inline grids into a
//! [`puzzle_file::PuzzleSpecV1`], runs it through the search crate, verifies
//! any solution by replaying it on the kernel, and renders the summary.
//!
//! The harness does NOT implement search logic. It delegates to
//! `tileslide_search` and `tileslide_kernel`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod puzzle_file;
pub mod report;
pub mod runner;

pub use puzzle_file::{parse_inline_grid, PuzzleFileError, PuzzleFileV1, PuzzleSpecV1};
pub use report::render_report;
pub use runner::{run_puzzle, write_graph, HarnessError, RunReport};
