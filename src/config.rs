//! Explicit run configuration.
//!
//! Built once by the entry point and threaded through every stage; nothing
//! in the pipeline reads process-global state.

use std::path::PathBuf;

/// Default ceiling on file size for secret sniffing, in bytes.
pub const DEFAULT_MAX_SNIFF_BYTES: u64 = 200_000;

/// Default cap on collected secret hits.
pub const DEFAULT_MAX_HITS: usize = 200;

/// Default truncation length for matched secret text, in characters.
pub const DEFAULT_TRUNCATE_LEN: usize = 60;

/// Configuration for one audit run.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Scan root; every recorded path is relative to it.
    pub root: PathBuf,
    /// Where the three report files are written.
    pub reports_dir: PathBuf,
    /// Files larger than this are not sniffed for secrets.
    pub max_sniff_bytes: u64,
    /// Hard cap on the secret-hit list in the summary.
    pub max_hits: usize,
    /// Matched secret text is truncated to this many characters.
    pub truncate_len: usize,
}

impl AuditConfig {
    /// Configuration rooted at `root`, with default knobs and the reports
    /// directory nested under the root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let reports_dir = root.join("reports");
        Self {
            root,
            reports_dir,
            max_sniff_bytes: DEFAULT_MAX_SNIFF_BYTES,
            max_hits: DEFAULT_MAX_HITS,
            truncate_len: DEFAULT_TRUNCATE_LEN,
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_dir_nests_under_root() {
        let config = AuditConfig::new("/some/repo");
        assert_eq!(config.reports_dir, PathBuf::from("/some/repo/reports"));
        assert_eq!(config.max_sniff_bytes, DEFAULT_MAX_SNIFF_BYTES);
        assert_eq!(config.max_hits, DEFAULT_MAX_HITS);
        assert_eq!(config.truncate_len, DEFAULT_TRUNCATE_LEN);
    }
}
