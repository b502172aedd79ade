//! Carrier module: the grid state and its reachability parity.
//!
//! Depends on `proof` for grid digests only.

pub mod grid;
pub mod parity;
