//! Forwarded-operation types shared between the kernel and the CLI.

use serde::{Deserialize, Serialize};

/// How a forwarded operation executes on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionKind {
    /// Run a device program and return its result.
    Exec,
    /// Issue a device control command and return acknowledgement.
    Message,
}

/// One operation forwarded to the device through the proxy.
///
/// Created per invocation, immutable once built, discarded after the
/// proxy call returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Device subcommand or program name.
    pub name: String,
    /// Arguments in caller order.
    pub arguments: Vec<String>,
    pub kind: ExecutionKind,
    /// Extended-argument flag characters forwarded to the proxy's `-x`
    /// option (the device side expands each into a `/c` switch).
    pub xarg: Option<String>,
}

impl CommandRequest {
    /// Build an Exec-kind request.
    pub fn exec(name: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            name: name.into(),
            arguments,
            kind: ExecutionKind::Exec,
            xarg: None,
        }
    }

    /// Build a Message-kind request.
    pub fn message(name: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            name: name.into(),
            arguments,
            kind: ExecutionKind::Message,
            xarg: None,
        }
    }

    /// Attach extended-argument flag characters.
    pub fn with_xarg(mut self, flags: impl Into<String>) -> Self {
        self.xarg = Some(flags.into());
        self
    }
}

/// Where the shell extension was invoked from.
///
/// Resolved once at startup by inspecting the parent process identity,
/// then passed explicitly to the transport; never re-queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Running inside the device shell; the proxy streams output itself.
    InteractiveShell,
    /// An ordinary terminal; the proxy must redirect device output back.
    StandardTerminal,
}
