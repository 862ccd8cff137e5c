//! vsh CLI entry point.
//!
//! Usage:
//!   vsh                          # interactive loop over an empty namespace
//!   vsh --fs tree.desc           # bulk-load the namespace first
//!   vsh --fs tree.desc --script setup.vsh
//!                                # run a script instead of the loop

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vsh_kernel::Shell;

/// A UNIX-like shell over an in-memory namespace.
#[derive(Debug, Parser)]
#[command(name = "vsh", version, about)]
struct Cli {
    /// Bulk description file to load the namespace from.
    #[arg(long, value_name = "FILE")]
    fs: Option<PathBuf>,

    /// Script to run instead of the interactive loop.
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Bulk load is all-or-nothing: a bad description means no shell.
    let shell = match &cli.fs {
        Some(path) => Shell::from_description(path)
            .with_context(|| format!("failed to load description {}", path.display()))?,
        None => Shell::new(),
    };

    match &cli.script {
        Some(path) => vsh_repl::run_script(shell, path),
        None => {
            vsh_repl::run(shell)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
