//! The audit pipeline: traversal, inspection, aggregation, emission.
//!
//! Fully synchronous and single-threaded; the only state is the
//! accumulator owned by the one run.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::Local;

use crate::config::AuditConfig;
use crate::reports::{self, ReportPaths};
use crate::scanner::types::{AuditStats, FileRecord, SkipReason, SniffOutcome};
use crate::scanner::{SecretPatterns, Sniffer, classify, walker};
use crate::summary::{Aggregator, Summary};

/// Everything one run produces.
#[derive(Debug)]
pub struct AuditOutcome {
    pub summary: Summary,
    pub paths: ReportPaths,
    pub stats: AuditStats,
}

/// Run the full pipeline against `config.root` and write the reports.
///
/// Per-file sniff failures degrade to skips; everything else (missing
/// root, uncreatable reports directory, write failures) is fatal.
pub fn run(config: &AuditConfig) -> Result<AuditOutcome> {
    let start = Instant::now();

    if !config.root.is_dir() {
        bail!(
            "Scan root does not exist or is not a directory: {}",
            config.root.display()
        );
    }

    let patterns = SecretPatterns::new()?;
    let sniffer = Sniffer::new(patterns, config.max_sniff_bytes, config.truncate_len);

    let mut aggregator = Aggregator::default();
    let mut files: Vec<FileRecord> = Vec::new();
    let mut stats = AuditStats::default();

    for entry in walker::build_walker(&config.root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Walk error: {}", e);
                continue;
            }
        };
        if !entry.file_type().map_or(false, |ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let rel = relative_path(path, &config.root)?;
        // A file whose first segment is a denylisted name is dropped even
        // when the walker let it through; this also excludes a root-level
        // file named e.g. `build`.
        let first = rel.split('/').next().unwrap_or_default();
        if walker::DIR_SKIP.contains(first) {
            continue;
        }

        let metadata = entry
            .metadata()
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        let size = metadata.len();
        let ext = extension_of(path);

        let segments: Vec<&str> = rel.split('/').collect();
        let file_name = segments.last().copied().unwrap_or_default();
        if classify::is_meta_file(file_name) {
            aggregator.add_meta(&rel);
        }
        if classify::is_template(&segments, &ext) {
            aggregator.add_template(&rel);
        }
        if classify::is_workflow(&segments) {
            aggregator.add_workflow(&rel);
        }

        match sniffer.sniff(path, &rel, &ext, size) {
            SniffOutcome::Hits(hits) => {
                stats.files_sniffed += 1;
                stats.total_hits += hits.len();
                aggregator.add_hits(hits);
            }
            SniffOutcome::Skipped(reason) => match reason {
                SkipReason::BinaryExtension => stats.skipped_binary_ext += 1,
                SkipReason::Oversized => stats.skipped_oversized += 1,
                SkipReason::Unreadable => stats.skipped_unreadable += 1,
            },
        }

        let record = FileRecord {
            path: rel,
            size,
            ext,
        };
        aggregator.add_file(&record);
        stats.files_recorded += 1;
        files.push(record);
    }

    let generated_at = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    let summary = aggregator.finish(generated_at, config.max_hits);
    let paths = reports::write_all(config, &summary, &files)?;

    stats.duration_ms = start.elapsed().as_millis() as u64;
    tracing::info!(
        "Audited {} files in {}ms ({} secret hits)",
        stats.files_recorded,
        stats.duration_ms,
        stats.total_hits
    );

    Ok(AuditOutcome {
        summary,
        paths,
        stats,
    })
}

/// Path relative to the scan root, with forward-slash segments so the
/// classification rules behave the same on every platform.
fn relative_path(path: &Path, root: &Path) -> Result<String> {
    let rel = path
        .strip_prefix(root)
        .with_context(|| format!("Path escapes scan root: {}", path.display()))?;
    let segments: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(segments.join("/"))
}

/// Lowercased extension with its leading dot, or empty when the filename
/// has none (dotfiles like `.env` count as extensionless).
fn extension_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy().to_lowercase()),
        _ => String::new(),
    }
}
