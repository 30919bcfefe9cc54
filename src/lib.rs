//! Mindeps - minimal class dependency closures via an external analyzer
//!
//! This crate provides the core library functionality for mindeps:
//! loading entry-class and resource manifests, invoking the external
//! class-dependency analyzer once per entry class, and folding the
//! per-class reports into one sorted, duplicate-free closure.

pub mod analyzer;
pub mod core;
pub mod ops;
pub mod util;

pub use crate::analyzer::{AnalysisError, DependencyReporter, JdepsReporter};
pub use crate::core::manifest::load_manifest;
pub use crate::ops::closure::{compute_closure, ClosureOptions};
