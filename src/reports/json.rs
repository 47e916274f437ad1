//! Machine-readable JSON dump of the full summary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::summary::Summary;

/// Write the summary as 2-space-indented JSON. serde_json leaves non-ASCII
/// characters unescaped, so UTF-8 paths survive literally.
pub fn write_report(path: &Path, summary: &Summary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write JSON report: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::Aggregator;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_has_all_schema_keys() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("repo_audit.json");

        let summary = Aggregator::default().finish("2026-08-05T00:00:00".to_string(), 200);
        write_report(&out, &summary).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        for key in [
            "generated_at",
            "total_files",
            "by_ext",
            "by_top_dir",
            "largest_files",
            "meta_found",
            "html_templates",
            "workflows",
            "secrets_hits",
        ] {
            assert!(value.get(key).is_some(), "missing key: {key}");
        }
    }

    #[test]
    fn test_non_ascii_preserved_literally() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("repo_audit.json");

        let mut aggregator = Aggregator::default();
        aggregator.add_meta("docs/liesmich-übersicht.txt");
        let summary = aggregator.finish("2026-08-05T00:00:00".to_string(), 200);
        write_report(&out, &summary).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.contains("liesmich-übersicht"));
        assert!(!content.contains("\\u00fc"));
    }
}
