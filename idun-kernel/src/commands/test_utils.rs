//! Test utilities for command testing.
//!
//! Provides a TestContext helper that sets up all the infrastructure
//! needed to test commands in isolation, with a recording transport in
//! place of the real proxy.

#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::path::Path;
    use std::time::Duration;

    use idun_api::{CacheKind, CommandRequest, ExecutionContext};

    use crate::cache::{FileCache, FuzzyFilter, Indexer};
    use crate::commands::CommandContext;
    use crate::config::Config;
    use crate::error::ShellError;
    use crate::proxy::ProxyTransport;
    use crate::state::SessionState;

    /// One recorded proxy call.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub request: CommandRequest,
        pub ultimate: bool,
    }

    /// Transport double that records requests instead of spawning.
    pub struct RecordingTransport {
        pub calls: RefCell<Vec<RecordedCall>>,
        pub exit_code: i32,
    }

    impl RecordingTransport {
        pub fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                exit_code: 0,
            }
        }
    }

    impl ProxyTransport for RecordingTransport {
        fn invoke(
            &self,
            request: &CommandRequest,
            _context: ExecutionContext,
        ) -> Result<i32, ShellError> {
            self.calls.borrow_mut().push(RecordedCall {
                request: request.clone(),
                ultimate: false,
            });
            Ok(self.exit_code)
        }

        fn invoke_ultimate(&self, request: &CommandRequest) -> Result<i32, ShellError> {
            self.calls.borrow_mut().push(RecordedCall {
                request: request.clone(),
                ultimate: true,
            });
            Ok(self.exit_code)
        }
    }

    /// Indexer double returning a fixed listing.
    pub struct FixedIndexer(pub Vec<String>);

    impl Indexer for FixedIndexer {
        fn scan(&self, _root: &Path, _kind: CacheKind) -> Result<Vec<String>, ShellError> {
            Ok(self.0.clone())
        }
    }

    /// Filter double: case-insensitive substring match, input order.
    pub struct SubstringFilter;

    impl FuzzyFilter for SubstringFilter {
        fn rank(&self, pattern: &str, candidates: &str) -> Result<Vec<String>, ShellError> {
            let pattern = pattern.to_ascii_lowercase();
            Ok(candidates
                .lines()
                .filter(|line| line.to_ascii_lowercase().contains(&pattern))
                .map(str::to_string)
                .collect())
        }
    }

    /// A test context that owns all the resources CommandContext borrows.
    pub struct TestContext {
        pub tmp: tempfile::TempDir,
        pub config: Config,
        pub state: SessionState,
        pub transport: RecordingTransport,
        pub cache: FileCache,
    }

    impl TestContext {
        /// Context with the given cache index entries; everything is
        /// rooted inside a fresh temp directory.
        pub fn with_index(entries: Vec<String>) -> Self {
            let tmp = tempfile::tempdir().unwrap();
            let config = Config {
                sys_dir: tmp.path().join("sys"),
                ultimate_ip: None,
                cache_root: tmp.path().to_path_buf(),
                cache_dir: tmp.path().join("cache"),
                cache_ttl: Duration::from_secs(300),
                proxy_program: "idunsh".to_string(),
                indexer_program: "fd".to_string(),
                filter_program: "fzf".to_string(),
            };
            let cache = FileCache::new(
                config.cache_root.clone(),
                config.cache_dir.clone(),
                config.cache_ttl,
                Box::new(FixedIndexer(entries)),
                Box::new(SubstringFilter),
            );
            Self {
                state: SessionState::with_cwd(tmp.path().to_path_buf()),
                tmp,
                config,
                transport: RecordingTransport::new(),
                cache,
            }
        }

        pub fn new_default() -> Self {
            Self::with_index(Vec::new())
        }

        /// Re-index with entries expressed relative to the session cwd.
        pub fn index_under_cwd(&mut self, relative: &[&str]) {
            let entries = relative
                .iter()
                .map(|r| format!("{}/{}", self.state.cwd.display(), r))
                .collect();
            self.cache = FileCache::new(
                self.config.cache_root.clone(),
                self.config.cache_dir.clone(),
                self.config.cache_ttl,
                Box::new(FixedIndexer(entries)),
                Box::new(SubstringFilter),
            );
        }

        /// Get a CommandContext that borrows from this TestContext.
        pub fn ctx(&mut self) -> CommandContext<'_> {
            CommandContext {
                config: &self.config,
                state: &mut self.state,
                proxy: &self.transport,
                cache: &self.cache,
                context: ExecutionContext::StandardTerminal,
            }
        }

        /// All calls recorded by the transport so far.
        pub fn calls(&self) -> Vec<RecordedCall> {
            self.transport.calls.borrow().clone()
        }
    }

    /// Convert plain str args into the owned form commands take.
    pub fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }
}
