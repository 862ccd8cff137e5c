//! cd — Change the current location.

use async_trait::async_trait;

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool};

/// Cd tool: change the current location in the namespace.
pub struct Cd;

#[async_trait]
impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    async fn execute(&self, args: &[String], ctx: &mut ExecContext) -> ExecResult {
        if args.len() > 1 {
            return ExecResult::failure(1, "cd: too many arguments");
        }
        match ctx.tree.change_dir(args.first().map(String::as_str)) {
            Ok(()) => ExecResult::success(""),
            Err(e) => ExecResult::failure(1, format!("cd: {e}")),
        }
    }
}
