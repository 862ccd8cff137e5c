//! The namespace tree engine: path resolution and mutation.

use super::error::VfsError;
use super::node::{DirEntry, Node, NodeId, NodeKind};

/// Path separator for the namespace.
pub const SEPARATOR: char = '/';

/// The in-memory namespace tree.
///
/// Nodes live in an arena indexed by [`NodeId`]; the root is always present
/// at index 0 and the current location defaults to it. All lookups and
/// mutations go through absolute or cwd-relative string paths, so callers
/// never hold references into the arena across a mutation.
#[derive(Debug, Clone)]
pub struct VfsTree {
    nodes: Vec<Node>,
    cwd: NodeId,
}

impl Default for VfsTree {
    fn default() -> Self {
        Self::new()
    }
}

impl VfsTree {
    /// Id of the root directory, valid for every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a tree holding only the root directory.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::directory("/")],
            cwd: Self::ROOT,
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Id of the current location.
    pub fn current(&self) -> NodeId {
        self.cwd
    }

    /// Absolute path of the current location.
    pub fn current_path(&self) -> String {
        self.path_of(self.cwd)
    }

    /// Absolute path of a node, derived by walking the parent chain.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut cur = id;
        while let Some(parent) = self.node(cur).parent {
            parts.push(self.node(cur).name.as_str());
            cur = parent;
        }
        if parts.is_empty() {
            return String::from("/");
        }
        parts.reverse();
        format!("/{}", parts.join("/"))
    }

    /// Anchor a path at the current location unless it is already absolute.
    pub fn to_absolute(&self, path: &str) -> String {
        if path.starts_with(SEPARATOR) {
            return path.to_string();
        }
        let base = self.current_path();
        if base == "/" {
            format!("/{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    /// Non-empty path components; repeated and trailing separators collapse.
    fn components(path: &str) -> impl Iterator<Item = &str> {
        path.split(SEPARATOR).filter(|c| !c.is_empty())
    }

    /// Resolve a path to a node.
    ///
    /// Relative paths are anchored at the current location. Returns `None`
    /// at the first missing component or when a file is reached before the
    /// path is exhausted.
    pub fn resolve(&self, path: &str) -> Option<NodeId> {
        let mut cur = if path.starts_with(SEPARATOR) {
            Self::ROOT
        } else {
            self.cwd
        };
        for comp in Self::components(path) {
            let node = self.node(cur);
            if node.kind != NodeKind::Directory {
                return None;
            }
            cur = *node.children.get(comp)?;
        }
        Some(cur)
    }

    /// Change the current location.
    ///
    /// `..` steps to the parent (the root stays put and never errors),
    /// `.` is a no-op, `~` or no argument returns to the root.
    pub fn change_dir(&mut self, target: Option<&str>) -> Result<(), VfsError> {
        match target {
            None | Some("~") => {
                self.cwd = Self::ROOT;
                Ok(())
            }
            Some(".") => Ok(()),
            Some("..") => {
                if let Some(parent) = self.node(self.cwd).parent {
                    self.cwd = parent;
                }
                Ok(())
            }
            Some(path) => {
                let id = self
                    .resolve(path)
                    .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
                if !self.node(id).is_dir() {
                    return Err(VfsError::NotADirectory(path.to_string()));
                }
                self.cwd = id;
                Ok(())
            }
        }
    }

    /// Create an empty directory. The parent must already exist.
    pub fn mkdir(&mut self, path: &str) -> Result<NodeId, VfsError> {
        self.attach(path, NodeKind::Directory, None)
    }

    /// Insert a new node at `path` without creating intermediate
    /// directories. Used by `mkdir` and the bulk loader.
    pub(crate) fn attach(
        &mut self,
        path: &str,
        kind: NodeKind,
        content: Option<String>,
    ) -> Result<NodeId, VfsError> {
        let abs = self.to_absolute(path);
        let (parents, name) = match Self::split_leaf(&abs) {
            Some(split) => split,
            // Only `/` has no leaf component, and the root always exists.
            None => return Err(VfsError::AlreadyExists(path.to_string())),
        };
        let parent = self.resolve_dir(&parents, path)?;
        if self.node(parent).children.contains_key(name) {
            return Err(VfsError::AlreadyExists(path.to_string()));
        }
        let node = match kind {
            NodeKind::Directory => Node::directory(name),
            NodeKind::File => Node::file(name, content),
        };
        Ok(self.insert(parent, node))
    }

    /// Move or rename a node.
    ///
    /// A target that resolves to an existing directory is a move-into (the
    /// node keeps its name); a target that does not resolve is a rename
    /// (the target's last component becomes the new name, its parent must
    /// exist). Either way the detach and reinsert happen as one update.
    pub fn rename(&mut self, source: &str, target: &str) -> Result<(), VfsError> {
        let src = self
            .resolve(source)
            .ok_or_else(|| VfsError::NotFound(source.to_string()))?;
        if src == Self::ROOT {
            return Err(VfsError::InvalidOperand(String::from(
                "cannot move the root directory",
            )));
        }

        let (dst_parent, new_name) = match self.resolve(target) {
            Some(dst) => {
                if !self.node(dst).is_dir() {
                    return Err(VfsError::NotADirectory(target.to_string()));
                }
                (dst, self.node(src).name.clone())
            }
            None => {
                let abs = self.to_absolute(target);
                let (parents, name) = Self::split_leaf(&abs)
                    .ok_or_else(|| VfsError::NotFound(target.to_string()))?;
                (self.resolve_dir(&parents, target)?, name.to_string())
            }
        };

        // Reparenting a directory under itself would cut it loose from the
        // root and break acyclicity.
        if dst_parent == src || self.is_descendant(dst_parent, src) {
            return Err(VfsError::InvalidOperand(format!(
                "cannot move '{source}' into itself"
            )));
        }
        if self.node(dst_parent).children.contains_key(&new_name) {
            return Err(VfsError::AlreadyExists(format!(
                "{}/{new_name}",
                self.path_of(dst_parent).trim_end_matches(SEPARATOR)
            )));
        }

        let old_name = self.node(src).name.clone();
        if let Some(old_parent) = self.node(src).parent {
            self.node_mut(old_parent).children.remove(&old_name);
        }
        let node = self.node_mut(src);
        node.name = new_name.clone();
        node.parent = Some(dst_parent);
        self.node_mut(dst_parent).children.insert(new_name, src);
        Ok(())
    }

    /// Count a node and all its descendants.
    pub fn count(&self, id: NodeId) -> usize {
        let node = self.node(id);
        1 + node.children.values().map(|&c| self.count(c)).sum::<usize>()
    }

    /// Listing for a node: a file yields the single entry for itself, a
    /// directory yields its children in lexicographic name order.
    pub fn entries(&self, id: NodeId) -> Vec<DirEntry> {
        let node = self.node(id);
        match node.kind {
            NodeKind::File => vec![DirEntry {
                name: node.name.clone(),
                kind: NodeKind::File,
            }],
            NodeKind::Directory => node
                .children
                .values()
                .map(|&c| {
                    let child = self.node(c);
                    DirEntry {
                        name: child.name.clone(),
                        kind: child.kind,
                    }
                })
                .collect(),
        }
    }

    /// Split an absolute path into parent components and the leaf name.
    /// Returns `None` for the root path.
    fn split_leaf(abs: &str) -> Option<(Vec<&str>, &str)> {
        let mut comps: Vec<&str> = Self::components(abs).collect();
        let name = comps.pop()?;
        Some((comps, name))
    }

    /// Walk `comps` from the root, requiring a directory at every step.
    /// `display` is the user-facing path used in error messages.
    fn resolve_dir(&self, comps: &[&str], display: &str) -> Result<NodeId, VfsError> {
        let mut cur = Self::ROOT;
        for comp in comps {
            let node = self.node(cur);
            if !node.is_dir() {
                return Err(VfsError::NotADirectory(display.to_string()));
            }
            cur = *node
                .children
                .get(*comp)
                .ok_or_else(|| VfsError::NotFound(display.to_string()))?;
        }
        if !self.node(cur).is_dir() {
            return Err(VfsError::NotADirectory(display.to_string()));
        }
        Ok(cur)
    }

    fn insert(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        let name = node.name.clone();
        self.nodes.push(node);
        self.node_mut(parent).children.insert(name, id);
        id
    }

    /// True if `node` sits somewhere below `ancestor`.
    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut cur = self.node(node).parent;
        while let Some(c) = cur {
            if c == ancestor {
                return true;
            }
            cur = self.node(c).parent;
        }
        false
    }
}
