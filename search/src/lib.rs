//! TileSlide Search: deterministic best-first search over sliding-tile grids.
//!
//! This crate provides the search layer. It depends only on
//! `tileslide_kernel`; it does NOT depend on `tileslide_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! tileslide_kernel  ←  tileslide_search  ←  tileslide_harness
//! (grid, slides)       (frontier, nodes)     (puzzle files, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`Heuristic`] -- closed set of distance estimates
//! - [`SearchNodeV1`] -- immutable arena node with precomputed score
//! - [`BestFirstFrontier`] -- `(score, node_id)` heap plus explored set
//! - [`SearchPolicyV1`] -- heuristic, limits, and graph recording switch
//! - [`SearchGraphV1`] -- expansion-event audit log
//! - [`Outcome`] -- solved, limit reached, or exhausted

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod search;

pub use error::{GridRole, Incompatibility, SolveError};
pub use frontier::BestFirstFrontier;
pub use graph::{SearchGraphV1, TerminationReasonV1};
pub use heuristic::{GoalIndex, Heuristic};
pub use node::{NodeArena, SearchNodeV1};
pub use policy::SearchPolicyV1;
pub use search::{search, solve, LimitKind, Outcome, SearchResult, SearchStats};
