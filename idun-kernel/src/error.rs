//! Shell error types.

use thiserror::Error;

/// Every failure the shell extension reports.
///
/// All variants are terminal for the current invocation; nothing is
/// retried automatically.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("{0}")]
    Usage(String),

    #[error("{0}: no such file or directory")]
    TargetNotFound(String),

    #[error("{0}: file not found")]
    ProgramNotFound(String),

    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("{0} failed to load")]
    ProxyFailed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::TargetNotFound(_) | Self::Io(_) => 1,
            Self::ProgramNotFound(_) => 2,
            Self::CommandNotFound(_) | Self::ProxyFailed(_) => 127,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ShellError::Usage("usage: x".into()).exit_code(), 1);
        assert_eq!(ShellError::TargetNotFound("/x".into()).exit_code(), 1);
        assert_eq!(ShellError::ProgramNotFound("x.prg".into()).exit_code(), 2);
        assert_eq!(ShellError::CommandNotFound("foo".into()).exit_code(), 127);
        assert_eq!(ShellError::ProxyFailed("tool".into()).exit_code(), 127);
    }

    #[test]
    fn test_not_found_message() {
        let err = ShellError::CommandNotFound("foo".into());
        assert_eq!(err.to_string(), "foo: command not found");
    }

    #[test]
    fn test_proxy_failed_message() {
        let err = ShellError::ProxyFailed("backup".into());
        assert_eq!(err.to_string(), "backup failed to load");
    }
}
