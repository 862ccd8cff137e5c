//! Errors from tree operations.

use thiserror::Error;

/// A tree operation that was not performed, and why.
///
/// Display strings are the POSIX-style one-liners; command handlers
/// prefix them with the command name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// The path (or its parent directory) does not resolve.
    #[error("{0}: No such file or directory")]
    NotFound(String),

    /// A path component or target that must be a directory is a file.
    #[error("{0}: Not a directory")]
    NotADirectory(String),

    /// Name collision on create, rename, or move-into.
    #[error("{0}: File exists")]
    AlreadyExists(String),

    /// The operation itself is invalid, e.g. moving the root.
    #[error("{0}")]
    InvalidOperand(String),
}
