//! Built-in tools.
//!
//! One module per command; every command the shell understands (except
//! the `exit` control outcome, which the dispatcher handles itself) is
//! registered here.

mod cd;
mod du;
mod echo;
mod ls;
mod mkdir;
mod mv;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(cd::Cd);
    registry.register(du::Du);
    registry.register(echo::Echo);
    registry.register(ls::Ls);
    registry.register(mkdir::Mkdir);
    registry.register(mv::Mv);
}
