//! Session state carried across commands within one shell session.

use std::path::PathBuf;

/// The session's mutable state.
///
/// `last_match` holds the most recent successful fuzzy file lookup; it
/// is what argument completion offers back, persists for the session,
/// and is never cleared.
#[derive(Debug)]
pub struct SessionState {
    /// Working directory the session was started in.
    pub cwd: PathBuf,
    last_match: Option<String>,
}

impl SessionState {
    /// Create session state rooted at the current working directory.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self::with_cwd(std::env::current_dir()?))
    }

    /// Create session state rooted at an explicit directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        Self {
            cwd,
            last_match: None,
        }
    }

    pub fn last_match(&self) -> Option<&str> {
        self.last_match.as_deref()
    }

    pub fn record_match(&mut self, path: impl Into<String>) {
        self.last_match = Some(path.into());
    }
}
