use std::path::PathBuf;
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }
}

/// One path found during a scan, read fresh from the filesystem.
#[derive(Debug, Clone)]
pub struct FilesystemEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub modified: SystemTime,
    /// Always 0 for directories.
    pub size_bytes: u64,
}

impl FilesystemEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Stale means modified strictly before the cutoff.
    pub fn is_stale(&self, cutoff: SystemTime) -> bool {
        self.modified < cutoff
    }
}

/// An entry selected for removal this run.
#[derive(Debug, Clone)]
pub struct RemovalCandidate {
    pub entry: FilesystemEntry,
    /// Label of the category that selected it.
    pub category: &'static str,
}

/// Result of scanning a root.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub candidates: Vec<RemovalCandidate>,
    pub total_bytes: u64,
    /// Number of entries looked at, root excluded.
    pub scanned: usize,
    /// Per-directory problems that did not stop the scan.
    pub errors: Vec<String>,
}

#[derive(Debug)]
pub struct RemovalFailure {
    pub candidate: RemovalCandidate,
    pub message: String,
}

/// Aggregate counts for one run.
#[derive(Debug, Default, Clone)]
pub struct RunSummary {
    /// Entries looked at below the root.
    pub scanned: usize,
    pub found: usize,
    /// Size of the files found, removed or not.
    pub bytes_found: u64,
    pub removed: usize,
    pub failed: usize,
    pub files_removed: usize,
    pub dirs_removed: usize,
    pub bytes_freed: u64,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Scan finished and nothing qualified.
    NothingFound,
    /// Candidates reported, filesystem untouched.
    DryRun,
    /// Confirmation declined.
    Cancelled,
    /// Removal pass ran; failures may still be present.
    Completed,
    /// The root could not be listed.
    ScanAborted,
}

impl RunStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RunStatus::NothingFound => "nothing found",
            RunStatus::DryRun => "dry run",
            RunStatus::Cancelled => "cancelled",
            RunStatus::Completed => "completed",
            RunStatus::ScanAborted => "scan aborted",
        }
    }
}

/// What `Sweeper::run` hands back alongside the log and console output.
#[derive(Debug)]
pub struct RunReport {
    pub status: RunStatus,
    pub summary: RunSummary,
    /// Everything found, in dry-run and cancelled runs; empty otherwise.
    pub pending: Vec<RemovalCandidate>,
    pub removed: Vec<RemovalCandidate>,
    pub failures: Vec<RemovalFailure>,
    pub warnings: Vec<String>,
}

impl RunReport {
    pub(crate) fn new(status: RunStatus) -> Self {
        Self {
            status,
            summary: RunSummary::default(),
            pending: Vec::new(),
            removed: Vec::new(),
            failures: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_at(modified: SystemTime) -> FilesystemEntry {
        FilesystemEntry {
            path: PathBuf::from("a.txt"),
            kind: EntryKind::File,
            modified,
            size_bytes: 1,
        }
    }

    #[test]
    fn stale_is_strictly_before_cutoff() {
        let cutoff = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        assert!(entry_at(cutoff - Duration::from_secs(1)).is_stale(cutoff));
        assert!(!entry_at(cutoff).is_stale(cutoff));
        assert!(!entry_at(cutoff + Duration::from_secs(1)).is_stale(cutoff));
    }
}
