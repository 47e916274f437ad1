//! Report emission: three serializations of one summary.

pub mod csv;
pub mod html;
pub mod json;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::AuditConfig;
use crate::scanner::types::FileRecord;
use crate::summary::Summary;

/// Paths of the artifacts written by one run.
#[derive(Debug)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub html: PathBuf,
    pub json: PathBuf,
}

/// Write all three reports, creating the reports directory if absent.
///
/// Each write is a total overwrite of its target; there is no atomicity,
/// and an interrupted run may leave a truncated artifact behind.
pub fn write_all(
    config: &AuditConfig,
    summary: &Summary,
    files: &[FileRecord],
) -> Result<ReportPaths> {
    fs::create_dir_all(&config.reports_dir).with_context(|| {
        format!(
            "Failed to create reports directory: {}",
            config.reports_dir.display()
        )
    })?;

    let paths = ReportPaths {
        csv: config.reports_dir.join("repo_files.csv"),
        html: config.reports_dir.join("repo_audit.html"),
        json: config.reports_dir.join("repo_audit.json"),
    };

    csv::write_report(&paths.csv, files)?;
    html::write_report(&paths.html, summary)?;
    json::write_report(&paths.json, summary)?;

    Ok(paths)
}
