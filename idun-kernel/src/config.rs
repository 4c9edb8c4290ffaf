//! Environment-driven configuration, resolved once at startup.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default snapshot TTL when `IDUN_CACHE_TTL` is unset.
const DEFAULT_TTL_SECS: u64 = 300;

/// Runtime configuration. Every field has an environment override and a
/// default, so the extension works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding device system programs (`IDUN_SYS_DIR`).
    pub sys_dir: PathBuf,
    /// C64 Ultimate web-service address (`C64_ULTIMATE_IP`); presence
    /// enables the hardware channel.
    pub ultimate_ip: Option<String>,
    /// Root of the indexed subtree (`IDUN_CACHE_ROOT`).
    pub cache_root: PathBuf,
    /// Where snapshot lists are stored (`IDUN_CACHE_DIR`).
    pub cache_dir: PathBuf,
    /// Maximum snapshot age before regeneration (`IDUN_CACHE_TTL`, seconds).
    pub cache_ttl: Duration,
    /// Proxy binary (`IDUN_PROXY`).
    pub proxy_program: String,
    /// Recursive indexer binary (`IDUN_INDEXER`).
    pub indexer_program: String,
    /// Fuzzy filter binary (`IDUN_FILTER`).
    pub filter_program: String,
}

impl Config {
    pub fn from_env() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        let cache_base = dirs::cache_dir().unwrap_or_else(|| home.join(".cache"));

        Self {
            sys_dir: env::var_os("IDUN_SYS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/usr/local/idun/sys")),
            ultimate_ip: env::var("C64_ULTIMATE_IP").ok().filter(|v| !v.is_empty()),
            cache_root: env::var_os("IDUN_CACHE_ROOT")
                .map(PathBuf::from)
                .unwrap_or(home),
            cache_dir: env::var_os("IDUN_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| cache_base.join("idun-sh")),
            cache_ttl: env::var("IDUN_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(DEFAULT_TTL_SECS)),
            proxy_program: env::var("IDUN_PROXY").unwrap_or_else(|_| "idunsh".to_string()),
            indexer_program: env::var("IDUN_INDEXER").unwrap_or_else(|_| "fd".to_string()),
            filter_program: env::var("IDUN_FILTER").unwrap_or_else(|_| "fzf".to_string()),
        }
    }
}
