//! Idun Kernel - the dispatch/proxy core of the idun shell extension.
//!
//! This crate contains:
//! - Proxy transport (channel selection, one external process per call)
//! - Command resolution (the enclosing shell's not-found hook)
//! - Built-in commands (mount, show, run, listings, fuzzy lookup,
//!   cache maintenance)
//! - The TTL-bound fuzzy-lookup file cache
//! - Session state and argument completion

pub mod cache;
pub mod commands;
pub mod completion;
pub mod expand;

mod config;
mod error;
mod proxy;
mod resolver;
mod state;

pub use commands::CommandRegistry;
pub use config::Config;
pub use error::ShellError;
pub use proxy::{detect_context, quote, IdunProxy, ProxyTransport};
pub use resolver::{CommandResolver, Resolution};
pub use state::SessionState;

use idun_api::ExecutionContext;

use crate::cache::FileCache;
use crate::commands::CommandContext;

/// The shell extension core - owns session state and dispatches
/// commands: built-ins first, then the unknown-command resolver.
pub struct Shell {
    config: Config,
    context: ExecutionContext,
    state: SessionState,
    commands: CommandRegistry,
    proxy: Box<dyn ProxyTransport>,
    cache: FileCache,
}

impl Shell {
    /// Create a shell wired to the real proxy binary and cache tools.
    pub fn new(config: Config, context: ExecutionContext) -> anyhow::Result<Self> {
        let proxy = Box::new(IdunProxy::new(config.proxy_program.clone()));
        let cache = FileCache::from_config(&config);
        let state = SessionState::new()?;
        Ok(Self {
            config,
            context,
            state,
            commands: CommandRegistry::new(),
            proxy,
            cache,
        })
    }

    /// Create a shell from injected parts (tests, embedding).
    pub fn with_parts(
        config: Config,
        context: ExecutionContext,
        state: SessionState,
        proxy: Box<dyn ProxyTransport>,
        cache: FileCache,
    ) -> Self {
        Self {
            config,
            context,
            state,
            commands: CommandRegistry::new(),
            proxy,
            cache,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// Dispatch one command, returning the process exit status.
    ///
    /// Errors are reported on stderr here, in one place, so the
    /// individual commands stay silent on failure.
    pub fn dispatch(&mut self, name: &str, args: &[String]) -> i32 {
        if let Some(cmd) = self.commands.get(name) {
            let mut ctx = CommandContext {
                config: &self.config,
                state: &mut self.state,
                proxy: self.proxy.as_ref(),
                cache: &self.cache,
                context: self.context,
            };
            return match cmd.execute(args, &mut ctx) {
                Ok(code) => code,
                Err(err) => {
                    eprintln!("{err}");
                    err.exit_code()
                }
            };
        }

        match CommandResolver::resolve(name, args, &self.config, &self.state.cwd) {
            Resolution::Forward(request) => match self.proxy.invoke(&request, self.context) {
                Ok(code) => code,
                Err(err) => {
                    eprintln!("{err}");
                    err.exit_code()
                }
            },
            Resolution::NotFound => {
                let err = ShellError::CommandNotFound(name.to_string());
                eprintln!("{err}");
                err.exit_code()
            }
        }
    }
}
