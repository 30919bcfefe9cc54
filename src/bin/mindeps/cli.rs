//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Mindeps - compute the minimal class dependency closure for a set of
/// entry-point classes
#[derive(Parser)]
#[command(name = "mindeps")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JDK root directory containing the jdeps binary
    #[arg(long, env = "JAVA_HOME", value_name = "DIR")]
    pub analyzer_home: PathBuf,

    /// Classpath passed verbatim to the analyzer for each invocation
    #[arg(long, value_name = "CLASSPATH")]
    pub class_path: String,

    /// File listing the entry classes, one per line; blank lines and
    /// lines starting with # are ignored
    #[arg(long, value_name = "FILE")]
    pub classes: PathBuf,

    /// File listing resources to include verbatim (eg .props files)
    #[arg(long, value_name = "FILE")]
    pub resources: Option<PathBuf>,

    /// Keep an entry class's self-reference if the analyzer reports one
    #[arg(long)]
    pub keep_self: bool,

    /// Number of parallel analyzer invocations
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress per-class progress output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
