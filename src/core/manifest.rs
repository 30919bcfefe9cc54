//! Line-oriented manifest loading.
//!
//! Entry-class and resource manifests share one format: UTF-8 text, one
//! identifier per line. A line is significant only if, after trimming
//! whitespace, it is non-empty and does not start with `#`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Load a manifest file, returning its significant lines in file order.
///
/// Duplicates are preserved; callers that need set semantics deduplicate
/// when folding into the closure.
pub fn load_manifest(path: &Path) -> Result<Vec<String>> {
    if path.is_dir() {
        bail!("manifest points to a directory: {}", path.display());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest: {}", path.display()))?;
    Ok(significant_lines(&text))
}

/// Filter raw manifest text down to its significant lines.
fn significant_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
