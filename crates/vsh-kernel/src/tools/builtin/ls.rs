//! ls — List directory contents.

use async_trait::async_trait;

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool};
use crate::vfs::NodeKind;

/// Ls tool: list a directory, or name a single file.
pub struct Ls;

#[async_trait]
impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    async fn execute(&self, args: &[String], ctx: &mut ExecContext) -> ExecResult {
        if args.len() > 1 {
            return ExecResult::failure(1, "ls: too many arguments");
        }

        let target = match args.first() {
            Some(path) => match ctx.tree.resolve(path) {
                Some(id) => id,
                None => {
                    return ExecResult::failure(
                        1,
                        format!("ls: {path}: No such file or directory"),
                    )
                }
            },
            None => ctx.tree.current(),
        };

        // Directories get a trailing marker; a file target lists as itself.
        let lines: Vec<String> = ctx
            .tree
            .entries(target)
            .into_iter()
            .map(|e| match e.kind {
                NodeKind::Directory => format!("{}/", e.name),
                NodeKind::File => e.name,
            })
            .collect();

        ExecResult::success(lines.join("\n"))
    }
}
