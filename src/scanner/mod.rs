//! File discovery, classification, and secret sniffing.

pub mod classify;
pub mod patterns;
pub mod sniff;
pub mod types;
pub mod walker;

pub use patterns::SecretPatterns;
pub use sniff::Sniffer;
pub use types::{AuditStats, FileRecord, SecretHit, SecretKind, SkipReason, SniffOutcome};
