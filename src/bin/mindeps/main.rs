//! Mindeps CLI - minimal class dependency closures via an external analyzer

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

use mindeps::ops::closure::{compute_closure, ClosureOptions};
use mindeps::{load_manifest, JdepsReporter};

fn main() {
    // Exit 1 for argument errors, 2 for runtime failures; stdout stays
    // empty in both cases.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    // Set up logging on stderr; stdout is reserved for the manifest.
    let filter = if cli.verbose {
        EnvFilter::new("mindeps=debug")
    } else if cli.quiet {
        EnvFilter::new("mindeps=warn")
    } else {
        EnvFilter::new("mindeps=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(2);
    }
}

fn run(cli: Cli) -> Result<()> {
    let reporter = JdepsReporter::discover(&cli.analyzer_home)?.keep_self(cli.keep_self);

    let classes = load_manifest(&cli.classes)?;
    let resources = match &cli.resources {
        Some(path) => load_manifest(path)?,
        None => Vec::new(),
    };

    let opts = ClosureOptions { jobs: cli.jobs };
    let closure = compute_closure(&reporter, &classes, &cli.class_path, &resources, &opts)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for dep in &closure {
        writeln!(out, "{}", dep)?;
    }

    Ok(())
}
