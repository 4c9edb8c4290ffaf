//! Command registry for the built-in shell-extension commands.

use std::collections::HashMap;

use super::cache_maint::{CacheInfoCommand, RecacheCommand};
use super::listing::{CatalogCommand, DirCommand};
use super::lookup::{CompleteCommand, FcdCommand, FfCommand};
use super::mount::MountCommand;
use super::run::{RunCommand, ZloadCommand};
use super::show::ShowCommand;
use super::IdunCommand;

/// Registry of all built-in commands.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn IdunCommand>>,
}

impl CommandRegistry {
    /// Create a new registry with every built-in registered.
    pub fn new() -> Self {
        let mut registry = Self {
            commands: HashMap::new(),
        };

        // device operations
        registry.register(MountCommand);
        registry.register(ShowCommand);
        registry.register(RunCommand);
        registry.register(ZloadCommand);
        registry.register(DirCommand);
        registry.register(CatalogCommand);

        // fuzzy lookup and completion
        registry.register(FcdCommand);
        registry.register(FfCommand);
        registry.register(CompleteCommand);

        // cache maintenance
        registry.register(RecacheCommand);
        registry.register(CacheInfoCommand);

        registry
    }

    fn register<C: IdunCommand + 'static>(&mut self, cmd: C) {
        self.commands.insert(cmd.name(), Box::new(cmd));
    }

    /// Look up a command by name.
    pub fn get(&self, name: &str) -> Option<&dyn IdunCommand> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Check if a command is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// List all registered command names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
