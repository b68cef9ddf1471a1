//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::DEFAULT_PAGE_SIZE;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_enable_wal() -> bool {
    true
}

fn default_busy_timeout_ms() -> u64 {
    30_000
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for the `member-search` binary.
pub struct AppConfig {
    pub database_url: String,
    /// Page size used when the query string does not carry `size`.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_enable_wal")]
    pub enable_wal: bool,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}
