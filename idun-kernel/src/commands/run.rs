//! The `run` command - load a program on the device.

use idun_api::CommandRequest;

use super::{CommandContext, IdunCommand};
use crate::error::ShellError;
use crate::proxy::quote;

const USAGE: &str = "usage: run [-u] <prg>";

pub struct RunCommand;

impl IdunCommand for RunCommand {
    fn name(&self) -> &'static str {
        "run"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> Result<i32, ShellError> {
        run_program(args, ctx)
    }
}

/// `zload` is the historical name for `run`; both dispatch identically.
pub struct ZloadCommand;

impl IdunCommand for ZloadCommand {
    fn name(&self) -> &'static str {
        "zload"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> Result<i32, ShellError> {
        run_program(args, ctx)
    }
}

fn run_program(args: &[String], ctx: &mut CommandContext) -> Result<i32, ShellError> {
    let mut ultimate = false;
    let mut file: Option<&String> = None;

    for arg in args {
        match arg.as_str() {
            "-u" => ultimate = true,
            _ if file.is_none() => file = Some(arg),
            _ => return Err(ShellError::Usage(USAGE.to_string())),
        }
    }
    let Some(file) = file else {
        return Err(ShellError::Usage(USAGE.to_string()));
    };

    // join leaves absolute paths alone
    if !ctx.state.cwd.join(file).is_file() {
        return Err(ShellError::ProgramNotFound(file.clone()));
    }

    if ultimate {
        if ctx.config.ultimate_ip.is_none() {
            return Err(ShellError::Usage(
                "run: -u requires C64_ULTIMATE_IP".to_string(),
            ));
        }
        let request = CommandRequest::message("load", vec![file.clone()]);
        return ctx.proxy.invoke_ultimate(&request);
    }

    let request = CommandRequest::message("load", vec![quote(file)]);
    ctx.proxy.invoke(&request, ctx.context)
}
