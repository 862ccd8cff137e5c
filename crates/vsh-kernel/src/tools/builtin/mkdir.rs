//! mkdir — Create a directory.

use async_trait::async_trait;

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool};

/// Mkdir tool: create a single empty directory.
pub struct Mkdir;

#[async_trait]
impl Tool for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    async fn execute(&self, args: &[String], ctx: &mut ExecContext) -> ExecResult {
        let path = match args {
            [path] => path,
            [] => return ExecResult::failure(1, "mkdir: missing operand"),
            _ => return ExecResult::failure(1, "mkdir: too many arguments"),
        };
        match ctx.tree.mkdir(path) {
            Ok(_) => ExecResult::success(""),
            Err(e) => ExecResult::failure(1, format!("mkdir: {e}")),
        }
    }
}
