//! du — Count nodes under a path.

use async_trait::async_trait;

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool};

/// Du tool: count a node and all its descendants.
pub struct Du;

#[async_trait]
impl Tool for Du {
    fn name(&self) -> &str {
        "du"
    }

    async fn execute(&self, args: &[String], ctx: &mut ExecContext) -> ExecResult {
        if args.len() > 1 {
            return ExecResult::failure(1, "du: too many arguments");
        }
        let target = match args.first() {
            Some(path) => match ctx.tree.resolve(path) {
                Some(id) => id,
                None => {
                    return ExecResult::failure(
                        1,
                        format!("du: {path}: No such file or directory"),
                    )
                }
            },
            None => ctx.tree.current(),
        };
        ExecResult::success(ctx.tree.count(target).to_string())
    }
}
