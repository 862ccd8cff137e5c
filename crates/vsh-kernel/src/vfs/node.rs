//! Node — a single named entry in the namespace tree.

use std::collections::BTreeMap;

/// Index of a node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) usize);

/// What a node is: a directory with children, or a file with content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// A single entry in the namespace.
///
/// Nodes are owned exclusively by the tree arena. `parent` and the ids in
/// `children` are arena indices, never owning references, so the parent
/// back-link cannot form an ownership cycle.
#[derive(Debug, Clone)]
pub struct Node {
    pub(super) name: String,
    pub(super) kind: NodeKind,
    /// Decoded file content. Always `None` for directories.
    pub(super) content: Option<String>,
    /// Back-reference to the enclosing directory. `None` only for the root.
    pub(super) parent: Option<NodeId>,
    /// Children by name. Only directories have entries; iteration is
    /// lexicographic by construction.
    pub(super) children: BTreeMap<String, NodeId>,
}

impl Node {
    pub(super) fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
            content: None,
            parent: None,
            children: BTreeMap::new(),
        }
    }

    pub(super) fn file(name: impl Into<String>, content: Option<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            content,
            parent: None,
            children: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// A directory listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: NodeKind,
}
