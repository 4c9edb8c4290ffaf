//! Built-in shell-extension commands.
//!
//! Commands implemented here run locally, validate their arguments, and
//! forward device work through the shared proxy transport. Unknown
//! names fall through to the resolver instead.

mod cache_maint;
mod listing;
mod lookup;
mod mount;
mod registry;
mod run;
mod show;

#[cfg(test)]
mod test_utils;

pub use registry::CommandRegistry;

use idun_api::ExecutionContext;

use crate::cache::FileCache;
use crate::config::Config;
use crate::error::ShellError;
use crate::proxy::ProxyTransport;
use crate::state::SessionState;

/// Context passed to commands during execution.
pub struct CommandContext<'a> {
    /// Resolved runtime configuration.
    pub config: &'a Config,
    /// The session state (cwd, last match).
    pub state: &'a mut SessionState,
    /// Transport for device operations.
    pub proxy: &'a dyn ProxyTransport,
    /// The fuzzy-lookup cache.
    pub cache: &'a FileCache,
    /// Channel selector, resolved once at startup.
    pub context: ExecutionContext,
}

/// Trait for the built-in commands dispatched ahead of the resolver.
pub trait IdunCommand {
    /// The command name (e.g. "mount", "ff").
    fn name(&self) -> &'static str;

    /// Execute with the given arguments, returning the exit code.
    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> Result<i32, ShellError>;
}
