//! Operators module: slide enumeration and application.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod slide;
