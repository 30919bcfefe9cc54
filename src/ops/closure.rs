//! Dependency closure aggregation.
//!
//! Each entry class is analyzed independently; the analyzer's recursive
//! mode already returns the full transitive set per root, so aggregation
//! is a plain union rather than a graph expansion. The union is
//! commutative and idempotent, which makes the result independent of
//! entry order and safe to compute across a worker pool.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::analyzer::{AnalysisError, DependencyReporter};

/// Options controlling closure aggregation.
#[derive(Debug, Clone, Default)]
pub struct ClosureOptions {
    /// Number of parallel analyzer invocations. `None` lets rayon size
    /// the pool from the available cores.
    pub jobs: Option<usize>,
}

/// Compute the dependency closure for the given entry classes.
///
/// Invokes the reporter once per entry class, unions every report with
/// the resource list (resources bypass analysis entirely), and returns
/// the closure as a sorted, duplicate-free sequence.
///
/// Fail-fast: the first analysis failure aborts the run and all partial
/// reports are discarded - a partial closure would silently omit required
/// classes downstream.
pub fn compute_closure<R>(
    reporter: &R,
    classes: &[String],
    class_path: &str,
    resources: &[String],
    opts: &ClosureOptions,
) -> Result<Vec<String>>
where
    R: DependencyReporter + Sync,
{
    let reports = analyze_all(reporter, classes, class_path, opts)?;

    // Workers hand their reports back; only this fold touches the
    // accumulated closure.
    let mut closure = BTreeSet::new();
    for report in reports {
        closure.extend(report);
    }
    closure.extend(resources.iter().cloned());

    Ok(closure.into_iter().collect())
}

/// Run one analyzer invocation per entry class across a bounded pool.
fn analyze_all<R>(
    reporter: &R,
    classes: &[String],
    class_path: &str,
    opts: &ClosureOptions,
) -> Result<Vec<BTreeSet<String>>>
where
    R: DependencyReporter + Sync,
{
    let run = || {
        classes
            .par_iter()
            .map(|class| reporter.report(class, class_path))
            .collect::<Result<Vec<_>, AnalysisError>>()
    };

    let reports = match opts.jobs {
        Some(jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("failed to build analysis thread pool")?
            .install(run),
        None => run(),
    }?;

    Ok(reports)
}
