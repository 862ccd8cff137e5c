//! Tool system for vsh.
//!
//! Every command is a tool implementing the same [`Tool`] trait, looked up
//! by name in the [`ToolRegistry`] and handed the shared [`ExecContext`].

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::Tool;
