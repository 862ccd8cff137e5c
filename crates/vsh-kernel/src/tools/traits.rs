//! Core tool trait.

use async_trait::async_trait;

use crate::result::ExecResult;

use super::context::ExecContext;

/// A built-in command.
///
/// Tools receive the already-tokenized argument list and the execution
/// context, validate their own argument shape, and render either output
/// or a one-line command-prefixed error. They hold no state of their own.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The command name used for lookup.
    fn name(&self) -> &str;

    /// Execute the tool with the given arguments and context.
    async fn execute(&self, args: &[String], ctx: &mut ExecContext) -> ExecResult;
}
