//! `jdeps`-backed dependency reporter.
//!
//! Locates the `jdeps` binary under a JDK home and runs it once per entry
//! class with `-cp <classpath> -recursive -verbose:class <class>`, so a
//! single invocation already covers the class's full transitive set.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::analyzer::report::parse_report;
use crate::analyzer::{AnalysisError, DependencyReporter};
use crate::util::ProcessBuilder;

#[cfg(windows)]
const JDEPS_BINARY: &str = "jdeps.exe";
#[cfg(not(windows))]
const JDEPS_BINARY: &str = "jdeps";

/// Dependency reporter backed by the JDK's `jdeps` tool.
#[derive(Debug, Clone)]
pub struct JdepsReporter {
    jdeps: PathBuf,
    keep_self: bool,
}

impl JdepsReporter {
    /// Locate `jdeps` under the given JDK home directory.
    ///
    /// Validates the home and the binary up front so a bad configuration
    /// fails before any analysis starts.
    pub fn discover(java_home: &Path) -> Result<Self> {
        if !java_home.exists() {
            bail!("analyzer home does not exist: {}", java_home.display());
        }
        if !java_home.is_dir() {
            bail!(
                "analyzer home is not a directory: {}",
                java_home.display()
            );
        }

        let jdeps = java_home.join("bin").join(JDEPS_BINARY);
        if !jdeps.is_file() {
            bail!("jdeps binary does not exist: {}", jdeps.display());
        }

        Ok(JdepsReporter {
            jdeps,
            keep_self: false,
        })
    }

    /// Keep entry-class self-references in reports instead of dropping them.
    pub fn keep_self(mut self, keep: bool) -> Self {
        self.keep_self = keep;
        self
    }

    /// Path to the resolved `jdeps` binary.
    pub fn binary(&self) -> &Path {
        &self.jdeps
    }
}

impl DependencyReporter for JdepsReporter {
    fn report(&self, class: &str, class_path: &str) -> Result<BTreeSet<String>, AnalysisError> {
        // Progress goes to the diagnostic stream, never stdout.
        tracing::info!("analyzing {}", class);

        let cmd = ProcessBuilder::new(&self.jdeps)
            .args(["-cp", class_path, "-recursive", "-verbose:class"])
            .arg(class);

        let output = cmd.exec().map_err(|source| AnalysisError::Invocation {
            command: cmd.display_command(),
            source,
        })?;

        if !output.status.success() {
            return Err(AnalysisError::Execution {
                command: cmd.display_command(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let raw = String::from_utf8_lossy(&output.stdout);
        Ok(parse_report(&raw, class, self.keep_self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_rejects_missing_home() {
        let err = JdepsReporter::discover(Path::new("/nonexistent/jdk")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_discover_rejects_file_as_home() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("jdk");
        std::fs::write(&file, "").unwrap();

        let err = JdepsReporter::discover(&file).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_discover_requires_binary() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("bin")).unwrap();

        let err = JdepsReporter::discover(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("jdeps binary does not exist"));
    }

    #[test]
    fn test_discover_finds_binary() {
        let tmp = tempfile::tempdir().unwrap();
        let bin = tmp.path().join("bin");
        std::fs::create_dir(&bin).unwrap();
        std::fs::write(bin.join(JDEPS_BINARY), "").unwrap();

        let reporter = JdepsReporter::discover(tmp.path()).unwrap();
        assert_eq!(reporter.binary(), bin.join(JDEPS_BINARY));
    }
}
