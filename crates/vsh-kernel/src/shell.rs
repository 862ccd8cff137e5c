//! Shell — owns the namespace and dispatches commands.

use std::path::Path;

use tracing::debug;

use crate::lexer;
use crate::loader::{self, LoadError, MOTD_PATH};
use crate::result::ExecResult;
use crate::tools::{register_builtins, ExecContext, ToolRegistry};

/// Outcome of evaluating one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eval {
    /// Blank input, nothing ran.
    Empty,
    /// A command ran to completion.
    Done(ExecResult),
    /// `exit` was requested; the caller should stop its loop.
    Exit,
    /// The command name did not resolve to a tool.
    Unknown(String),
}

/// The shell kernel: the execution context plus the fixed command table.
pub struct Shell {
    ctx: ExecContext,
    tools: ToolRegistry,
}

impl Shell {
    /// Boot a shell over an empty namespace (root only).
    pub fn new() -> Self {
        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);
        Self {
            ctx: ExecContext::new(),
            tools,
        }
    }

    /// Boot a shell from a bulk description file.
    ///
    /// All-or-nothing: on any load error no shell is produced and the
    /// caller is expected to terminate.
    pub fn from_description(path: &Path) -> Result<Self, LoadError> {
        let tree = loader::load_description(path)?;
        let mut shell = Self::new();
        shell.ctx = ExecContext::with_tree(tree);
        Ok(shell)
    }

    /// Absolute path of the current location, for prompt rendering.
    pub fn current_path(&self) -> String {
        self.ctx.tree.current_path()
    }

    /// Decoded `/motd` content, if the description provided one.
    pub fn motd(&self) -> Option<String> {
        let tree = &self.ctx.tree;
        let id = tree.resolve(MOTD_PATH)?;
        let node = tree.node(id);
        if node.is_dir() {
            return None;
        }
        node.content().map(str::to_string)
    }

    /// Tokenize and dispatch a single input line.
    pub async fn eval_line(&mut self, line: &str) -> Eval {
        let tokens = match lexer::split_line(line) {
            Ok(tokens) => tokens,
            Err(e) => return Eval::Done(ExecResult::failure(1, format!("vsh: {e}"))),
        };
        let Some((name, args)) = tokens.split_first() else {
            return Eval::Empty;
        };
        if name == "exit" {
            return Eval::Exit;
        }
        match self.tools.get(name) {
            Some(tool) => {
                debug!(command = %name, "dispatch");
                Eval::Done(tool.execute(args, &mut self.ctx).await)
            }
            None => Eval::Unknown(name.clone()),
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_line_is_empty() {
        let mut shell = Shell::new();
        assert_eq!(shell.eval_line("   ").await, Eval::Empty);
    }

    #[tokio::test]
    async fn exit_is_a_control_outcome() {
        let mut shell = Shell::new();
        assert_eq!(shell.eval_line("exit").await, Eval::Exit);
        // arguments are ignored
        assert_eq!(shell.eval_line("exit now").await, Eval::Exit);
    }

    #[tokio::test]
    async fn unknown_command_is_reported_by_name() {
        let mut shell = Shell::new();
        assert_eq!(
            shell.eval_line("frobnicate /x").await,
            Eval::Unknown("frobnicate".into())
        );
    }

    #[tokio::test]
    async fn commands_share_one_context() {
        let mut shell = Shell::new();
        shell.eval_line("mkdir /x").await;
        shell.eval_line("cd /x").await;
        assert_eq!(shell.current_path(), "/x");
    }

    #[tokio::test]
    async fn unterminated_quote_is_a_rendered_error() {
        let mut shell = Shell::new();
        match shell.eval_line("echo 'oops").await {
            Eval::Done(result) => {
                assert!(!result.ok());
                assert_eq!(result.err, "vsh: unterminated quote");
            }
            other => panic!("expected Done, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn motd_is_absent_on_an_empty_tree() {
        let shell = Shell::new();
        assert_eq!(shell.motd(), None);
    }
}
