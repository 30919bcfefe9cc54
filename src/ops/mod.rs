//! High-level operations.
//!
//! This module contains the implementation of the mindeps run itself:
//! fan out analysis over the entry classes and fold the reports into the
//! final closure.

pub mod closure;

pub use closure::{compute_closure, ClosureOptions};
