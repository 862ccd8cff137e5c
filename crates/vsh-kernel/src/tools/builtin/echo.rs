//! echo — Print arguments.

use async_trait::async_trait;

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool};

/// Echo tool: print the arguments space-joined.
pub struct Echo;

#[async_trait]
impl Tool for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    async fn execute(&self, args: &[String], _ctx: &mut ExecContext) -> ExecResult {
        ExecResult::success(args.join(" "))
    }
}
