//! Fuzzy lookup commands - `fcd`, `ff`, and the completion bridge.

use idun_api::CacheKind;

use super::{CommandContext, IdunCommand};
use crate::completion;
use crate::error::ShellError;

pub struct FcdCommand;

impl IdunCommand for FcdCommand {
    fn name(&self) -> &'static str {
        "fcd"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> Result<i32, ShellError> {
        let [pattern] = args else {
            return Err(ShellError::Usage("usage: fcd <pattern>".to_string()));
        };

        // the enclosing shell performs the actual chdir on our output
        match ctx
            .cache
            .query(pattern, CacheKind::Directories, &ctx.state.cwd)?
        {
            Some(dir) => {
                println!("{dir}");
                Ok(0)
            }
            None => {
                eprintln!("fcd: no match for '{pattern}'");
                Ok(1)
            }
        }
    }
}

pub struct FfCommand;

impl IdunCommand for FfCommand {
    fn name(&self) -> &'static str {
        "ff"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> Result<i32, ShellError> {
        let [pattern] = args else {
            return Err(ShellError::Usage("usage: ff <pattern>".to_string()));
        };

        match ctx.cache.query(pattern, CacheKind::Files, &ctx.state.cwd)? {
            Some(path) => {
                ctx.state.record_match(path.clone());
                println!("{path}");
                Ok(0)
            }
            None => {
                eprintln!("ff: no match for '{pattern}'");
                Ok(1)
            }
        }
    }
}

/// Completion bridge for the enclosing shell: prints the candidates for
/// a command name, one per line.
pub struct CompleteCommand;

impl IdunCommand for CompleteCommand {
    fn name(&self) -> &'static str {
        "complete"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> Result<i32, ShellError> {
        let [command] = args else {
            return Err(ShellError::Usage("usage: complete <command>".to_string()));
        };
        for candidate in completion::candidates(ctx.state, command) {
            println!("{candidate}");
        }
        Ok(0)
    }
}
