use tracing::{debug, warn};

use crate::cleaner::{EntryKind, RemovalCandidate, RemovalFailure};
use crate::reporter::{format_timestamp, RunLog};
use crate::utils;

#[derive(Debug, Default)]
pub struct RemovalResult {
    pub removed: Vec<RemovalCandidate>,
    pub failures: Vec<RemovalFailure>,
    pub bytes_freed: u64,
}

/// Delete every candidate. A failure is logged and counted; it never stops the loop.
pub fn remove_all(candidates: Vec<RemovalCandidate>, log: &RunLog) -> RemovalResult {
    let mut result = RemovalResult::default();

    for candidate in candidates {
        let entry = &candidate.entry;
        match utils::safe_remove(entry) {
            Ok(freed) => {
                let line = match entry.kind {
                    EntryKind::File => format!(
                        "Removed file: {} (last modified {}, {})",
                        entry.path.display(),
                        format_timestamp(entry.modified),
                        utils::format_size(entry.size_bytes)
                    ),
                    EntryKind::Directory => format!(
                        "Removed directory: {} (last modified {})",
                        entry.path.display(),
                        format_timestamp(entry.modified)
                    ),
                };
                debug!("{line}");
                log.info(&line);
                result.bytes_freed += freed;
                result.removed.push(candidate);
            }
            Err(e) => {
                let message = format!("Failed to remove {}: {e}", entry.path.display());
                warn!("{message}");
                log.error(&message);
                result.failures.push(RemovalFailure { candidate, message });
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::FilesystemEntry;
    use crate::clock::FixedClock;
    use std::path::Path;
    use std::sync::Arc;
    use std::time::SystemTime;
    use tempfile::tempdir;

    fn candidate(path: &Path, kind: EntryKind, size_bytes: u64) -> RemovalCandidate {
        RemovalCandidate {
            entry: FilesystemEntry {
                path: path.to_path_buf(),
                kind,
                modified: SystemTime::UNIX_EPOCH,
                size_bytes,
            },
            category: "stale-files",
        }
    }

    #[test]
    fn failure_does_not_stop_later_removals() {
        let tmp = tempdir().unwrap();
        let logs = tmp.path().join("logs");
        let log = RunLog::open(&logs, 7, Arc::new(FixedClock(SystemTime::now())));

        let work = tmp.path().join("work");
        std::fs::create_dir(&work).unwrap();
        let missing = work.join("already-gone.txt");
        let present = work.join("b.txt");
        std::fs::write(&present, b"12345").unwrap();
        let empty = work.join("EmptyOld");
        std::fs::create_dir(&empty).unwrap();

        let result = remove_all(
            vec![
                candidate(&missing, EntryKind::File, 3),
                candidate(&present, EntryKind::File, 5),
                candidate(&empty, EntryKind::Directory, 0),
            ],
            &log,
        );

        assert_eq!(result.removed.len(), 2);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].candidate.entry.path, missing);
        assert_eq!(result.bytes_freed, 5);
        assert!(!present.exists());
        assert!(!empty.exists());

        let content = std::fs::read_to_string(log.path()).unwrap();
        assert!(content.contains("[ERROR] Failed to remove"));
        assert!(content.contains("[INFO] Removed file:"));
        assert!(content.contains("[INFO] Removed directory:"));
    }

    #[test]
    fn failed_item_stays_and_removed_item_goes() {
        let tmp = tempdir().unwrap();
        let log = RunLog::open(tmp.path(), 7, Arc::new(FixedClock(SystemTime::now())));

        // A non-empty directory recorded as a file cannot be unlinked.
        let stuck = tmp.path().join("stuck");
        std::fs::create_dir(&stuck).unwrap();
        std::fs::write(stuck.join("inner"), b"x").unwrap();
        let gone = tmp.path().join("gone.txt");
        std::fs::write(&gone, b"x").unwrap();

        let result = remove_all(
            vec![
                candidate(&stuck, EntryKind::File, 0),
                candidate(&gone, EntryKind::File, 1),
            ],
            &log,
        );

        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.removed.len(), 1);
        assert!(stuck.exists());
        assert!(!gone.exists());
    }
}
