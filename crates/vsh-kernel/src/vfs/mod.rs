//! Virtual filesystem for vsh.
//!
//! The namespace is a single in-memory tree, bulk-loaded once at startup
//! and mutated in place for the life of the process:
//!
//! ```text
//! /                      # root, always present
//! ├── /docs/             # directories carry children
//! │   └── readme         # files carry content
//! └── /motd              # fixed path surfaced at startup
//! ```
//!
//! Nodes live in an arena owned by [`VfsTree`]; parent links and child
//! maps hold arena ids, so ownership stays acyclic while `..` navigation
//! and detach-reinsert moves stay cheap.

mod error;
mod node;
mod tree;

pub use error::VfsError;
pub use node::{DirEntry, Node, NodeId, NodeKind};
pub use tree::{VfsTree, SEPARATOR};
