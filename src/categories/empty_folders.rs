use std::path::Path;
use std::time::SystemTime;

use super::{Category, Verdict};
use crate::cleaner::FilesystemEntry;

/// Stale directories that have no children right now.
///
/// Emptiness is read straight from the directory at classification time,
/// never inferred from the recursive listing, so a folder whose only
/// contents are about to be removed in the same run is kept.
pub struct EmptyFolders;

/// True when the directory has no immediate children, hidden ones included.
fn is_empty(path: &Path) -> std::io::Result<bool> {
    let mut entries = std::fs::read_dir(path)?;
    match entries.next() {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(e)) => Err(e),
    }
}

impl Category for EmptyFolders {
    fn name(&self) -> &'static str {
        "empty-folders"
    }

    fn label(&self) -> &'static str {
        "Empty Folders"
    }

    fn classify(&self, entry: &FilesystemEntry, cutoff: SystemTime) -> Verdict {
        if !entry.is_dir() || !entry.is_stale(cutoff) {
            return Verdict::Keep;
        }
        match is_empty(&entry.path) {
            Ok(true) => Verdict::Remove,
            Ok(false) => Verdict::Keep,
            Err(e) => Verdict::Unreadable(format!("Cannot list {}: {e}", entry.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::EntryKind;
    use std::time::Duration;
    use tempfile::tempdir;

    fn dir_entry(path: &Path, modified: SystemTime) -> FilesystemEntry {
        FilesystemEntry {
            path: path.to_path_buf(),
            kind: EntryKind::Directory,
            modified,
            size_bytes: 0,
        }
    }

    #[test]
    fn stale_empty_dir_is_removed() {
        let tmp = tempdir().unwrap();
        let now = SystemTime::now();
        let entry = dir_entry(tmp.path(), now - Duration::from_secs(60));
        assert_eq!(EmptyFolders.classify(&entry, now), Verdict::Remove);
    }

    #[test]
    fn recent_empty_dir_is_kept() {
        let tmp = tempdir().unwrap();
        let now = SystemTime::now();
        let entry = dir_entry(tmp.path(), now);
        assert_eq!(EmptyFolders.classify(&entry, now), Verdict::Keep);
    }

    #[test]
    fn hidden_child_makes_dir_non_empty() {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join(".hidden"), b"x").unwrap();
        let now = SystemTime::now();
        let entry = dir_entry(tmp.path(), now - Duration::from_secs(60));
        assert_eq!(EmptyFolders.classify(&entry, now), Verdict::Keep);
    }

    #[test]
    fn vanished_dir_is_unreadable() {
        let tmp = tempdir().unwrap();
        let gone = tmp.path().join("gone");
        let now = SystemTime::now();
        let entry = dir_entry(&gone, now - Duration::from_secs(60));
        assert!(matches!(
            EmptyFolders.classify(&entry, now),
            Verdict::Unreadable(_)
        ));
    }
}
