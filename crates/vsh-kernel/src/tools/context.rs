//! Execution context for tools.

use crate::vfs::VfsTree;

/// State threaded through every command.
///
/// The namespace tree (which carries the current location) is the only
/// shell-wide mutable state; it is constructed once at startup and passed
/// explicitly to every handler rather than living in a global.
#[derive(Debug, Default)]
pub struct ExecContext {
    /// The namespace tree.
    pub tree: VfsTree,
}

impl ExecContext {
    /// Create a context over an empty tree (root only).
    pub fn new() -> Self {
        Self {
            tree: VfsTree::new(),
        }
    }

    /// Create a context over a pre-built tree, e.g. from the bulk loader.
    pub fn with_tree(tree: VfsTree) -> Self {
        Self { tree }
    }
}
