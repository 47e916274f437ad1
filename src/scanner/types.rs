use serde::Serialize;

/// One discovered file, relative to the scan root.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Relative path with forward-slash segments.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
    /// Lowercased extension including the leading dot, or empty.
    pub ext: String,
}

/// The fixed set of secret-shaped patterns the sniffer recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretKind {
    GenericToken,
    AwsKey,
    GhPat,
    Jwt,
}

impl SecretKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretKind::GenericToken => "generic_token",
            SecretKind::AwsKey => "aws_key",
            SecretKind::GhPat => "gh_pat",
            SecretKind::Jwt => "jwt",
        }
    }
}

/// A single pattern match inside one file.
#[derive(Debug, Clone, Serialize)]
pub struct SecretHit {
    #[serde(rename = "type")]
    pub kind: SecretKind,
    /// Matched text, truncated to the configured length.
    #[serde(rename = "match")]
    pub matched: String,
    /// Relative path of the file the match came from.
    pub file: String,
}

/// Why a file was not sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Extension is on the image/archive denylist.
    BinaryExtension,
    /// File exceeds the sniff size ceiling.
    Oversized,
    /// The file could not be read (permissions, vanished mid-run).
    Unreadable,
}

/// Outcome of sniffing one file.
///
/// Skips are a normal result, not an error: an unreadable file degrades to
/// zero hits and never aborts the run. Keeping the reason distinguishes
/// "scanned, nothing found" from "could not scan".
#[derive(Debug)]
pub enum SniffOutcome {
    Hits(Vec<SecretHit>),
    Skipped(SkipReason),
}

/// Counters for one audit run.
#[derive(Debug, Default)]
pub struct AuditStats {
    pub files_recorded: usize,
    pub files_sniffed: usize,
    pub skipped_binary_ext: usize,
    pub skipped_oversized: usize,
    pub skipped_unreadable: usize,
    /// Hits found before the summary cap is applied.
    pub total_hits: usize,
    pub duration_ms: u64,
}
