//! Cache maintenance commands - `recache` and `cache-info`.

use idun_api::{CacheKind, CacheStats};
use serde::Serialize;

use super::{CommandContext, IdunCommand};
use crate::error::ShellError;

pub struct RecacheCommand;

impl IdunCommand for RecacheCommand {
    fn name(&self) -> &'static str {
        "recache"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> Result<i32, ShellError> {
        if !args.is_empty() {
            return Err(ShellError::Usage("usage: recache".to_string()));
        }
        ctx.cache.refresh_all()?;
        Ok(0)
    }
}

/// Machine-readable shape for `cache-info -j`.
#[derive(Serialize)]
struct CacheReport {
    files: CacheStats,
    directories: CacheStats,
}

pub struct CacheInfoCommand;

impl IdunCommand for CacheInfoCommand {
    fn name(&self) -> &'static str {
        "cache-info"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> Result<i32, ShellError> {
        let json = match args {
            [] => false,
            [flag] if flag == "-j" => true,
            _ => return Err(ShellError::Usage("usage: cache-info [-j]".to_string())),
        };

        if json {
            let report = CacheReport {
                files: ctx.cache.stats(CacheKind::Files),
                directories: ctx.cache.stats(CacheKind::Directories),
            };
            let rendered = serde_json::to_string(&report)
                .map_err(|e| ShellError::Io(std::io::Error::other(e)))?;
            println!("{rendered}");
            return Ok(0);
        }

        for kind in CacheKind::ALL {
            let stats = ctx.cache.stats(kind);
            match stats.age_secs {
                Some(age) => println!("{}: {} entries, {}s old", kind.label(), stats.entries, age),
                None => println!("{}: no snapshot", kind.label()),
            }
        }
        Ok(0)
    }
}
