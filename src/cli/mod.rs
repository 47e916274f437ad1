//! Command-line interface.
//!
//! One flat command: audit a tree and write the reports. Knobs that the
//! pipeline treats as configuration (size ceiling, hit cap, truncation
//! length) surface here with their defaults.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

pub mod output;

pub use output::Output;

use crate::audit;
use crate::config::{
    AuditConfig, DEFAULT_MAX_HITS, DEFAULT_MAX_SNIFF_BYTES, DEFAULT_TRUNCATE_LEN,
};

/// Audit a repository tree: file statistics, secret sniffing, and
/// CSV/HTML/JSON reports
#[derive(Parser)]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Directory to audit
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Directory to write reports into [default: <ROOT>/reports]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip secret sniffing for files larger than this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_SNIFF_BYTES)]
    pub max_file_size: u64,

    /// Cap on the number of secret hits kept in the reports
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_HITS)]
    pub max_hits: usize,

    /// Truncate matched secret text to this many characters
    #[arg(long, value_name = "CHARS", default_value_t = DEFAULT_TRUNCATE_LEN)]
    pub truncate: usize,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print run statistics after the report paths
    #[arg(long)]
    pub stats: bool,
}

impl Cli {
    /// Execute the audit.
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);

        let mut config = AuditConfig::new(self.root);
        if let Some(dir) = self.output_dir {
            config.reports_dir = dir;
        }
        config.max_sniff_bytes = self.max_file_size;
        config.max_hits = self.max_hits;
        config.truncate_len = self.truncate;

        output.verbose(&format!("Auditing {}", config.root.display()));
        let outcome = audit::run(&config)?;

        output.success(&format!("Wrote {}", outcome.paths.html.display()));
        output.success(&format!("Wrote {}", outcome.paths.csv.display()));

        if self.stats {
            let stats = &outcome.stats;
            output.blank_line();
            output.info("Run statistics");
            output.summary_stats("Files recorded:", stats.files_recorded);
            output.summary_stats("Files sniffed:", stats.files_sniffed);
            output.summary_stats("Skipped (binary ext):", stats.skipped_binary_ext);
            output.summary_stats("Skipped (oversized):", stats.skipped_oversized);
            output.summary_stats("Skipped (unreadable):", stats.skipped_unreadable);
            output.summary_stats("Secret hits:", stats.total_hits);
            output.summary_stats("Duration (ms):", stats.duration_ms as usize);
        }

        Ok(())
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,ignore=warn,globset=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
