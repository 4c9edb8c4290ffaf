//! Proxy transport - every remote operation goes through here.

use std::process::Command;

use idun_api::{CommandRequest, ExecutionContext, ExecutionKind};

use crate::error::ShellError;

/// Process name of the interactive device shell. A parent with this
/// name means device output already streams into the caller's terminal.
const DEVICE_SHELL_COMM: &str = "idun";

/// Transport over the external proxy binary.
///
/// Exactly one proxy process is spawned per call, the child's exit
/// status is propagated unchanged, and nothing is retried.
pub trait ProxyTransport {
    /// Forward a request over the channel selected by `context`.
    fn invoke(
        &self,
        request: &CommandRequest,
        context: ExecutionContext,
    ) -> Result<i32, ShellError>;

    /// Forward a request over the C64 Ultimate hardware channel.
    fn invoke_ultimate(&self, request: &CommandRequest) -> Result<i32, ShellError>;
}

/// The real transport: spawns the `idunsh` proxy binary.
pub struct IdunProxy {
    program: String,
}

impl IdunProxy {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, request: &CommandRequest, mut cmd: Command) -> Result<i32, ShellError> {
        if request.kind == ExecutionKind::Exec {
            cmd.arg("exec");
        }
        cmd.arg(&request.name).args(&request.arguments);

        tracing::debug!(program = %self.program, request = %request.name, "spawning proxy");
        let status = cmd
            .status()
            .map_err(|_| ShellError::ProxyFailed(request.name.clone()))?;
        Ok(status.code().unwrap_or(127))
    }
}

impl ProxyTransport for IdunProxy {
    fn invoke(
        &self,
        request: &CommandRequest,
        context: ExecutionContext,
    ) -> Result<i32, ShellError> {
        let mut cmd = Command::new(&self.program);
        if context == ExecutionContext::StandardTerminal {
            // Outside the device shell the proxy must echo device output
            // back to this terminal itself.
            cmd.arg("-o");
        }
        if let Some(flags) = &request.xarg {
            cmd.arg("-x").arg(flags);
        }
        self.run(request, cmd)
    }

    fn invoke_ultimate(&self, request: &CommandRequest) -> Result<i32, ShellError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-u");
        self.run(request, cmd)
    }
}

/// Resolve the execution context once, from the parent process identity.
pub fn detect_context() -> ExecutionContext {
    match parent_comm() {
        Some(comm) if comm == DEVICE_SHELL_COMM => ExecutionContext::InteractiveShell,
        _ => ExecutionContext::StandardTerminal,
    }
}

#[cfg(unix)]
fn parent_comm() -> Option<String> {
    let ppid = nix::unistd::getppid();
    let comm = std::fs::read_to_string(format!("/proc/{}/comm", ppid)).ok()?;
    Some(comm.trim().to_string())
}

#[cfg(not(unix))]
fn parent_comm() -> Option<String> {
    None
}

/// Shell-quote one argument so its boundaries survive the proxy's
/// space-joined argument string. Plain names pass through unchanged.
pub fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '.' | '/' | '-' | '_' | ':' | '+' | ',' | '=')
        });
    if plain {
        return arg.to_string();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('\'');
    for c in arg.chars() {
        if c == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain_name_unchanged() {
        assert_eq!(quote("a.koa"), "a.koa");
        assert_eq!(quote("pics/side-b.d64"), "pics/side-b.d64");
    }

    #[test]
    fn test_quote_embedded_space() {
        assert_eq!(quote("with space.koa"), "'with space.koa'");
    }

    #[test]
    fn test_quote_metacharacters() {
        assert_eq!(quote("a&b"), "'a&b'");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_quote_single_quote() {
        assert_eq!(quote("it's"), "'it'\\''s'");
    }
}
