//! External class-dependency analysis.
//!
//! The analyzer is modeled as a capability: anything that can take one
//! class name plus a classpath and report that class's full transitive
//! dependency set. The shipped implementation drives the JDK's `jdeps`
//! binary; alternate analyzers plug in behind [`DependencyReporter`]
//! without touching the aggregation code.

pub mod jdeps;
pub mod report;

use std::collections::BTreeSet;
use std::io;

use thiserror::Error;

pub use jdeps::JdepsReporter;
pub use report::parse_report;

/// Error from a single analyzer invocation.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The analyzer process could not be launched at all.
    #[error("failed to launch `{command}`")]
    Invocation {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The analyzer ran but exited non-zero.
    #[error("`{command}` failed with exit code {code:?}\n{stderr}")]
    Execution {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// A source of per-class dependency reports.
///
/// One call covers one entry class: the reporter is expected to recurse
/// through all transitive dependencies itself, so callers union reports
/// rather than re-expanding them.
pub trait DependencyReporter {
    /// Report every class the given class transitively depends on,
    /// resolving against the given classpath.
    fn report(&self, class: &str, class_path: &str) -> Result<BTreeSet<String>, AnalysisError>;
}
