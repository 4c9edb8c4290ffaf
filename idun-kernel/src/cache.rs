//! Fuzzy-lookup file cache - TTL-bound snapshots of a filesystem subtree.
//!
//! Two flat path lists (files, directories) live under the cache
//! storage directory. They are regenerated synchronously by an external
//! recursive indexer whenever stale, then queried through an external
//! fuzzy filter. Snapshot replacement is atomic (write to a temp
//! sibling, rename over) so a concurrent reader never sees a torn file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, SystemTime};

use idun_api::{CacheKind, CacheStats};

use crate::config::Config;
use crate::error::ShellError;

/// External recursive indexer producing one path per line.
pub trait Indexer {
    fn scan(&self, root: &Path, kind: CacheKind) -> Result<Vec<String>, ShellError>;
}

/// External fuzzy filter ranking candidate lines against a pattern,
/// most relevant first.
pub trait FuzzyFilter {
    fn rank(&self, pattern: &str, candidates: &str) -> Result<Vec<String>, ShellError>;
}

/// `fd`-based indexer: hidden entries included, version-control
/// metadata excluded, absolute paths out.
pub struct FdIndexer {
    program: String,
}

impl FdIndexer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Indexer for FdIndexer {
    fn scan(&self, root: &Path, kind: CacheKind) -> Result<Vec<String>, ShellError> {
        let type_flag = match kind {
            CacheKind::Files => "f",
            CacheKind::Directories => "d",
        };
        let output = Command::new(&self.program)
            .args(["--type", type_flag, "--hidden", "--exclude", ".git"])
            .args(["--absolute-path", "."])
            .arg(root)
            .output()?;
        if !output.status.success() {
            return Err(ShellError::Io(std::io::Error::other(format!(
                "{} exited with {}",
                self.program, output.status
            ))));
        }
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

/// `fzf --filter`-based ranker (non-interactive, case-insensitive).
pub struct FzfFilter {
    program: String,
}

impl FzfFilter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl FuzzyFilter for FzfFilter {
    fn rank(&self, pattern: &str, candidates: &str) -> Result<Vec<String>, ShellError> {
        let mut child = Command::new(&self.program)
            .args(["--filter", pattern, "-i"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(candidates.as_bytes())?;
        }
        // the filter exits nonzero on an empty ranking; that is a miss,
        // not an error
        let output = child.wait_with_output()?;
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

/// TTL-bound snapshot cache over the indexer and fuzzy filter.
pub struct FileCache {
    root: PathBuf,
    dir: PathBuf,
    ttl: Duration,
    indexer: Box<dyn Indexer>,
    filter: Box<dyn FuzzyFilter>,
}

impl FileCache {
    pub fn new(
        root: PathBuf,
        dir: PathBuf,
        ttl: Duration,
        indexer: Box<dyn Indexer>,
        filter: Box<dyn FuzzyFilter>,
    ) -> Self {
        Self {
            root,
            dir,
            ttl,
            indexer,
            filter,
        }
    }

    /// Cache wired to the real external tools from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.cache_root.clone(),
            config.cache_dir.clone(),
            config.cache_ttl,
            Box::new(FdIndexer::new(&config.indexer_program)),
            Box::new(FzfFilter::new(&config.filter_program)),
        )
    }

    fn snapshot_path(&self, kind: CacheKind) -> PathBuf {
        self.dir.join(kind.snapshot_name())
    }

    /// Snapshot age, or `None` when absent.
    fn snapshot_age(&self, kind: CacheKind) -> Option<Duration> {
        let modified = fs::metadata(self.snapshot_path(kind))
            .and_then(|m| m.modified())
            .ok()?;
        // a clock step backwards makes the snapshot look brand new
        Some(
            SystemTime::now()
                .duration_since(modified)
                .unwrap_or(Duration::ZERO),
        )
    }

    /// Regenerate the snapshot for `kind` unless it is younger than the
    /// TTL. Blocks until regeneration completes.
    pub fn ensure_fresh(&self, kind: CacheKind) -> Result<(), ShellError> {
        match self.snapshot_age(kind) {
            Some(age) if age < self.ttl => Ok(()),
            _ => self.regenerate(kind),
        }
    }

    /// Rebuild one snapshot and atomically replace the on-disk list.
    pub fn regenerate(&self, kind: CacheKind) -> Result<(), ShellError> {
        fs::create_dir_all(&self.dir)?;
        let entries = self.indexer.scan(&self.root, kind)?;

        let path = self.snapshot_path(kind);
        let tmp = path.with_extension("tmp");
        let mut data = entries.join("\n");
        if !data.is_empty() {
            data.push('\n');
        }
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &path)?;

        tracing::debug!(kind = kind.label(), entries = entries.len(), "snapshot rebuilt");
        Ok(())
    }

    /// Force both snapshots to regenerate regardless of TTL.
    pub fn refresh_all(&self) -> Result<(), ShellError> {
        for kind in CacheKind::ALL {
            self.regenerate(kind)?;
        }
        Ok(())
    }

    /// Best fuzzy match for `pattern` in the `kind` snapshot.
    ///
    /// File results under `cwd` come back relative to it; everything
    /// else keeps its absolute form.
    pub fn query(
        &self,
        pattern: &str,
        kind: CacheKind,
        cwd: &Path,
    ) -> Result<Option<String>, ShellError> {
        self.ensure_fresh(kind)?;
        let candidates = fs::read_to_string(self.snapshot_path(kind))?;
        let ranked = self.filter.rank(pattern, &candidates)?;

        let Some(best) = ranked.into_iter().next() else {
            return Ok(None);
        };
        if kind == CacheKind::Files {
            if let Ok(rel) = Path::new(&best).strip_prefix(cwd) {
                return Ok(Some(rel.to_string_lossy().into_owned()));
            }
        }
        Ok(Some(best))
    }

    /// Entry count and age for one snapshot.
    pub fn stats(&self, kind: CacheKind) -> CacheStats {
        let entries = fs::read_to_string(self.snapshot_path(kind))
            .map(|s| s.lines().count())
            .unwrap_or(0);
        let age_secs = self.snapshot_age(kind).map(|d| d.as_secs());
        CacheStats { entries, age_secs }
    }
}
