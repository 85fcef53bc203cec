use std::time::Duration;

use serde_json::Value;

/// The output of a completed scan.
#[derive(Debug)]
pub struct Results {
    /// The document produced by the root schema entry.
    pub document: Value,

    /// Scan statistics.
    pub stats: ScanStats,
}

/// Statistics for a completed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanStats {
    /// Files read and handed to a parser.
    pub files: usize,

    /// Directories listed.
    pub dirs: usize,

    /// Listed entries that no schema entry applied to.
    pub skipped: usize,

    /// Wall-clock time from scan start to completion.
    pub duration: Duration,
}
