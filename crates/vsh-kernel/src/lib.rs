//! vsh kernel — a UNIX-like shell over an in-memory namespace.
//!
//! The kernel owns everything except terminal I/O:
//!
//! - [`vfs`] — the namespace tree: nodes, path resolution, mutation.
//! - [`loader`] — bulk-loads a complete tree from a delimited description.
//! - [`lexer`] — splits raw lines into command + arguments with
//!   shell-style quoting.
//! - [`tools`] — one [`tools::Tool`] per command, dispatched by name.
//! - [`shell`] — ties it together: one [`Shell`] per process, fed lines
//!   by the REPL or the script runner.

pub mod lexer;
pub mod loader;
pub mod result;
pub mod shell;
pub mod tools;
pub mod vfs;

pub use result::ExecResult;
pub use shell::{Eval, Shell};
