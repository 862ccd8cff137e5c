//! mv — Move or rename a node.

use async_trait::async_trait;

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool};

/// Mv tool: move a node into an existing directory, or rename it to a
/// not-yet-existing path.
pub struct Mv;

#[async_trait]
impl Tool for Mv {
    fn name(&self) -> &str {
        "mv"
    }

    async fn execute(&self, args: &[String], ctx: &mut ExecContext) -> ExecResult {
        let (source, target) = match args {
            [source, target] => (source, target),
            _ => return ExecResult::failure(1, "mv: expects a source and a target"),
        };
        match ctx.tree.rename(source, target) {
            Ok(()) => ExecResult::success(""),
            Err(e) => ExecResult::failure(1, format!("mv: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::{NodeKind, VfsTree};

    fn make_ctx() -> ExecContext {
        let mut tree = VfsTree::new();
        tree.mkdir("/a").unwrap();
        tree.attach("/a/b", NodeKind::File, Some("payload".into()))
            .unwrap();
        tree.mkdir("/dest").unwrap();
        ExecContext::with_tree(tree)
    }

    #[tokio::test]
    async fn rename_to_fresh_path() {
        let mut ctx = make_ctx();
        let result = Mv
            .execute(&["/a/b".into(), "/c".into()], &mut ctx)
            .await;
        assert!(result.ok());

        let c = ctx.tree.resolve("/c").unwrap();
        assert_eq!(ctx.tree.node(c).content(), Some("payload"));
        assert!(ctx.tree.resolve("/a/b").is_none());
    }

    #[tokio::test]
    async fn move_into_existing_directory() {
        let mut ctx = make_ctx();
        let result = Mv
            .execute(&["/a/b".into(), "/dest".into()], &mut ctx)
            .await;
        assert!(result.ok());
        assert!(ctx.tree.resolve("/dest/b").is_some());
        assert!(ctx.tree.resolve("/a/b").is_none());
    }

    #[tokio::test]
    async fn missing_source_fails() {
        let mut ctx = make_ctx();
        let result = Mv
            .execute(&["/nope".into(), "/dest".into()], &mut ctx)
            .await;
        assert!(!result.ok());
        assert_eq!(result.err, "mv: /nope: No such file or directory");
    }

    #[tokio::test]
    async fn root_source_fails() {
        let mut ctx = make_ctx();
        let result = Mv
            .execute(&["/".into(), "/dest".into()], &mut ctx)
            .await;
        assert!(!result.ok());
        assert_eq!(result.err, "mv: cannot move the root directory");
    }

    #[tokio::test]
    async fn argument_count_is_enforced() {
        let mut ctx = make_ctx();
        assert!(!Mv.execute(&[], &mut ctx).await.ok());
        assert!(!Mv.execute(&["/a".into()], &mut ctx).await.ok());
        assert!(
            !Mv.execute(&["/a".into(), "/b".into(), "/c".into()], &mut ctx)
                .await
                .ok()
        );
    }
}
