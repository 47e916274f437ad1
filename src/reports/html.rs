//! Human-readable HTML report.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::summary::Summary;

/// Escape text interpolated into the report body, so a hostile filename or
/// matched secret fragment cannot inject markup.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a byte count with thousands separators: 1234567 -> "1,234,567".
fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn table_row(key: &str, value: &str) -> String {
    format!(
        "<tr><td style='font-weight:600'>{}</td><td><pre style='white-space:pre-wrap'>{}</pre></td></tr>",
        escape_html(key),
        escape_html(value)
    )
}

/// Placeholder for empty aggregate categories.
fn or_dash(value: String) -> String {
    if value.is_empty() {
        "—".to_string()
    } else {
        value
    }
}

fn counts_block(entries: &[(String, usize)]) -> String {
    entries
        .iter()
        .map(|(key, count)| format!("{key}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the summary table document.
pub fn write_report(path: &Path, summary: &Summary) -> Result<()> {
    let largest = summary
        .largest_files
        .iter()
        .map(|(size, file)| format!("{}  {}", format_thousands(*size), file))
        .collect::<Vec<_>>()
        .join("\n");
    let secrets = if summary.secrets_hits.is_empty() {
        "No obvious hits".to_string()
    } else {
        summary
            .secrets_hits
            .iter()
            .map(|hit| format!("{}: {}  ->  {}", hit.kind.as_str(), hit.matched, hit.file))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let rows = [
        table_row("Total files", &summary.total_files.to_string()),
        table_row("Meta files", &or_dash(summary.meta_found.join("\n"))),
        table_row("HTML templates", &or_dash(summary.html_templates.join("\n"))),
        table_row("Workflows", &or_dash(summary.workflows.join("\n"))),
        table_row("By extension", &or_dash(counts_block(&summary.by_ext))),
        table_row("Top-level dirs", &or_dash(counts_block(&summary.by_top_dir))),
        table_row("Largest files", &or_dash(largest)),
        table_row("Potential secrets (review!)", &secrets),
    ]
    .concat();

    let html = format!(
        r#"<!doctype html><html lang="en"><meta charset="utf-8">
<title>Repo Audit</title>
<style>
  body{{font-family:system-ui,-apple-system,Segoe UI,Roboto;max-width:1100px;margin:32px auto;padding:0 16px}}
  h1{{font-size:24px;margin:0 0 16px}}
  table{{width:100%;border-collapse:collapse}}
  td{{border:1px solid #ddd;padding:8px;vertical-align:top}}
  .note{{background:#f6f8fa;padding:8px;border-radius:8px;margin:8px 0}}
</style>
<h1>Repository audit</h1>
<div class="note">Generated: {generated}</div>
<table>{rows}</table>
<p class="note">This report was generated automatically. Review the potential secret findings before publishing the code.</p>
</html>
"#,
        generated = escape_html(&summary.generated_at),
        rows = rows
    );

    fs::write(path, html)
        .with_context(|| format!("Failed to write HTML report: {}", path.display()))?;
    Ok(())
}
