//! vsh front-end — interactive loop and script runner.
//!
//! The kernel does the work; this crate handles:
//! - the prompt (`user@host%path$ `, with the live namespace path),
//! - line editing and history via rustyline,
//! - feeding script files one line at a time,
//! - printing `ExecResult`s to stdout/stderr.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tokio::runtime::Runtime;

use vsh_kernel::{Eval, ExecResult, Shell};

/// Build the interactive prompt around the current namespace path.
fn prompt(shell: &Shell) -> String {
    format!(
        "{}@{}%{}$ ",
        username(),
        hostname(),
        shell.current_path()
    )
}

fn username() -> String {
    std::env::var("USER").unwrap_or_else(|_| "unknown".to_string())
}

/// Read the hostname from /proc/sys/kernel/hostname.
fn hostname() -> String {
    std::fs::read_to_string("/proc/sys/kernel/hostname")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

fn print_result(result: &ExecResult) {
    if !result.out.is_empty() {
        println!("{}", result.out);
    }
    if !result.err.is_empty() {
        eprintln!("{}", result.err);
    }
}

fn history_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.data_dir().join("vsh").join("history.txt"))
}

fn save_history(rl: &mut Editor<(), DefaultHistory>, path: &Option<PathBuf>) {
    if let Some(path) = path {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("failed to create history dir: {e}");
                return;
            }
        }
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("failed to save history: {e}");
        }
    }
}

/// Interactive loop. Returns when the user runs `exit` or hits EOF.
pub fn run(mut shell: Shell) -> Result<()> {
    let runtime = Runtime::new().context("failed to create tokio runtime")?;
    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("failed to create line editor")?;

    let history = history_path();
    if let Some(ref path) = history {
        if let Err(e) = rl.load_history(path) {
            let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
            if !is_not_found {
                tracing::warn!("failed to load history: {e}");
            }
        }
    }

    if let Some(motd) = shell.motd() {
        println!("{motd}");
    }

    loop {
        match rl.readline(&prompt(&shell)) {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::warn!("failed to add history entry: {e}");
                }
                match runtime.block_on(shell.eval_line(&line)) {
                    Eval::Empty => {}
                    Eval::Done(result) => print_result(&result),
                    Eval::Unknown(name) => eprintln!("{name}: command not found"),
                    Eval::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        }
    }

    save_history(&mut rl, &history);
    Ok(())
}

/// How a script run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptOutcome {
    /// Every line ran (or `exit` stopped the script cleanly).
    Completed,
    /// An unknown command halted the remaining lines.
    Halted,
}

/// Run a script file, one command per line.
///
/// Blank lines and `#` comment lines are skipped. An unknown command
/// halts the remaining lines and the process exits with failure. `exit`
/// stops the script cleanly; any other error is reported and the script
/// continues.
pub fn run_script(shell: Shell, path: &Path) -> Result<ExitCode> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    match run_script_source(shell, &source)? {
        ScriptOutcome::Completed => Ok(ExitCode::SUCCESS),
        ScriptOutcome::Halted => Ok(ExitCode::FAILURE),
    }
}

fn run_script_source(mut shell: Shell, source: &str) -> Result<ScriptOutcome> {
    let runtime = Runtime::new().context("failed to create tokio runtime")?;

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match runtime.block_on(shell.eval_line(trimmed)) {
            Eval::Empty => {}
            Eval::Done(result) => print_result(&result),
            Eval::Unknown(name) => {
                eprintln!("{name}: command not found");
                return Ok(ScriptOutcome::Halted);
            }
            Eval::Exit => break,
        }
    }
    Ok(ScriptOutcome::Completed)
}
