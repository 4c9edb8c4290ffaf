//! Device file-listing commands - `dir` and `catalog`.

use idun_api::CommandRequest;

use super::{CommandContext, IdunCommand};
use crate::error::ShellError;

pub struct DirCommand;

impl IdunCommand for DirCommand {
    fn name(&self) -> &'static str {
        "dir"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> Result<i32, ShellError> {
        if args.len() > 1 {
            return Err(ShellError::Usage("usage: dir [<drive>:]".to_string()));
        }
        let request = CommandRequest::message("dir", args.to_vec());
        ctx.proxy.invoke(&request, ctx.context)
    }
}

pub struct CatalogCommand;

impl IdunCommand for CatalogCommand {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> Result<i32, ShellError> {
        let mut long = false;
        let mut dev = Vec::new();
        for arg in args {
            match arg.as_str() {
                "-l" => long = true,
                _ => dev.push(arg.clone()),
            }
        }
        if dev.len() > 1 {
            return Err(ShellError::Usage(
                "usage: catalog [-l] [<drive>:]".to_string(),
            ));
        }

        let mut request = CommandRequest::message("catalog", dev);
        if long {
            request = request.with_xarg("l");
        }
        ctx.proxy.invoke(&request, ctx.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_utils::test_helpers::{args, TestContext};

    #[test]
    fn test_dir_forwards_device() {
        let mut tc = TestContext::new_default();
        DirCommand.execute(&args(&["a:"]), &mut tc.ctx()).unwrap();

        let calls = tc.calls();
        assert_eq!(calls[0].request.name, "dir");
        assert_eq!(calls[0].request.arguments, vec!["a:".to_string()]);
    }

    #[test]
    fn test_dir_too_many_args() {
        let mut tc = TestContext::new_default();
        let err = DirCommand
            .execute(&args(&["a:", "b:"]), &mut tc.ctx())
            .unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_catalog_long_format_sets_xarg() {
        let mut tc = TestContext::new_default();
        CatalogCommand
            .execute(&args(&["-l", "a:"]), &mut tc.ctx())
            .unwrap();

        let calls = tc.calls();
        assert_eq!(calls[0].request.name, "catalog");
        assert_eq!(calls[0].request.xarg.as_deref(), Some("l"));
    }

    #[test]
    fn test_catalog_plain() {
        let mut tc = TestContext::new_default();
        CatalogCommand.execute(&[], &mut tc.ctx()).unwrap();
        assert!(tc.calls()[0].request.xarg.is_none());
    }
}
