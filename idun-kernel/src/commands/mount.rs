//! The `mount` command - attach disk images or local paths to device
//! drives.

use idun_api::{CommandRequest, DriveSpec, MountTarget};

use super::{CommandContext, IdunCommand};
use crate::error::ShellError;

const USAGE: &str = "usage: mount [<drive>: <image|path>]";

pub struct MountCommand;

impl IdunCommand for MountCommand {
    fn name(&self) -> &'static str {
        "mount"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> Result<i32, ShellError> {
        if args.is_empty() {
            // bare `mount` lists the active drives
            let request = CommandRequest::message("drives", Vec::new());
            return ctx.proxy.invoke(&request, ctx.context);
        }
        if args.len() != 2 {
            return Err(ShellError::Usage(USAGE.to_string()));
        }

        let drive =
            DriveSpec::parse(&args[0]).ok_or_else(|| ShellError::Usage(USAGE.to_string()))?;
        let target = &args[1];

        // The two primary slots go straight to the Ultimate hardware
        // when its web service is reachable.
        if drive.is_primary() && ctx.config.ultimate_ip.is_some() {
            let request =
                CommandRequest::message("mount", vec![drive.to_string(), target.clone()]);
            return ctx.proxy.invoke_ultimate(&request);
        }

        match MountTarget::classify(target) {
            Some(MountTarget::DiskImage(..)) => {
                let request =
                    CommandRequest::message("mount", vec![drive.to_string(), target.clone()]);
                ctx.proxy.invoke(&request, ctx.context)
            }
            Some(MountTarget::DirectoryPath(..)) => {
                let request =
                    CommandRequest::message("assign", vec![drive.to_string(), target.clone()]);
                ctx.proxy.invoke(&request, ctx.context)
            }
            None => Err(ShellError::TargetNotFound(target.clone())),
        }
    }
}
