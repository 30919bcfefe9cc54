//! Core data structures for mindeps.
//!
//! The closure itself is an ordered `BTreeSet<String>` of class and
//! resource identifiers; this module holds the line-oriented manifest
//! loader that feeds it.

pub mod manifest;

pub use manifest::load_manifest;
