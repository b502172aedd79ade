//! Proof module: domain-separated content hashing.
//!
//! The bottom layer. Imports no other kernel module.

pub mod hash;
pub mod hash_domain;
