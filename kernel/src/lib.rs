//! TileSlide Kernel: the deterministic carrier for sliding-tile puzzles.
//!
//! # API Surface
//!
//! - [`carrier::grid::GridV1`] -- immutable R×C tile grid with blank lookup
//! - [`operators::slide::legal_moves`] / [`operators::slide::apply`] -- successor generation
//! - [`carrier::parity::is_solvable`] -- reachability check between two grids
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashing
//!
//! # Module Dependency Direction
//!
//! `proof` ← `carrier` ← `operators`
//!
//! One-way only. `proof` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
