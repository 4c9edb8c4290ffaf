//! The `show` command - display images through a device-side viewer.

use idun_api::{CommandRequest, ViewerClass};

use super::{CommandContext, IdunCommand};
use crate::error::ShellError;
use crate::proxy::quote;

pub struct ShowCommand;

impl IdunCommand for ShowCommand {
    fn name(&self) -> &'static str {
        "show"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> Result<i32, ShellError> {
        if args.is_empty() {
            return Err(ShellError::Usage("usage: show <file>...".to_string()));
        }

        let viewer = ViewerClass::select(args.iter().map(String::as_str));
        let quoted = args.iter().map(|a| quote(a)).collect();
        let request = CommandRequest::exec(viewer, quoted);
        ctx.proxy.invoke(&request, ctx.context)
    }
}
