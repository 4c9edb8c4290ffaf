//! Cache snapshot kinds and statistics.

use serde::{Deserialize, Serialize};

/// Which snapshot a cache operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CacheKind {
    Files,
    Directories,
}

impl CacheKind {
    pub const ALL: [CacheKind; 2] = [CacheKind::Files, CacheKind::Directories];

    /// Snapshot file name under the cache storage directory.
    pub fn snapshot_name(self) -> &'static str {
        match self {
            Self::Files => "files.list",
            Self::Directories => "dirs.list",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::Directories => "directories",
        }
    }
}

/// Per-kind snapshot statistics reported by `cache-info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Entry count; 0 when the snapshot is absent or unreadable.
    pub entries: usize,
    /// Snapshot age in seconds; `None` when absent (infinitely old).
    pub age_secs: Option<u64>,
}
