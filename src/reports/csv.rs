//! Flat CSV listing of every recorded file.

use std::path::Path;

use anyhow::{Context, Result};

use crate::scanner::types::FileRecord;

/// Write `path,size,ext` rows, sorted case-insensitively by path.
///
/// Fields go through the csv writer's minimal quoting: a path containing a
/// comma, quote, or newline is quoted instead of corrupting its row, and
/// every other path serializes exactly as the bare text.
pub fn write_report(path: &Path, files: &[FileRecord]) -> Result<()> {
    let mut rows: Vec<&FileRecord> = files.iter().collect();
    rows.sort_by_key(|record| record.path.to_lowercase());

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV report: {}", path.display()))?;
    writer.write_record(["path", "size", "ext"])?;
    for record in rows {
        let size = record.size.to_string();
        writer.write_record([record.path.as_str(), size.as_str(), record.ext.as_str()])?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write CSV report: {}", path.display()))?;
    Ok(())
}
