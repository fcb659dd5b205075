use std::path::Path;

use crate::cleaner::{EntryKind, FilesystemEntry};

/// Remove one entry. Files are unlinked; directories are removed recursively.
/// Returns bytes freed on success.
pub fn safe_remove(entry: &FilesystemEntry) -> Result<u64, std::io::Error> {
    match entry.kind {
        EntryKind::Directory => std::fs::remove_dir_all(&entry.path)?,
        EntryKind::File => std::fs::remove_file(&entry.path)?,
    }
    Ok(entry.size_bytes)
}

/// Format byte count as human-readable string.
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_073_741_824 {
        format!("{:.2} GB", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.2} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1_024 {
        format!("{:.2} KB", bytes as f64 / 1_024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Shorten a path for display by replacing home dir with ~.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;
    use tempfile::tempdir;

    #[test]
    fn sizes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1_572_864), "1.50 MB");
        assert_eq!(format_size(2_147_483_648), "2.00 GB");
    }

    #[test]
    fn home_is_shortened() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(display_path(&home.join("notes.txt")), "~/notes.txt");
        }
    }

    #[test]
    fn removes_files_and_dirs() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("a.bin");
        std::fs::write(&file, vec![0u8; 64]).unwrap();
        let dir = tmp.path().join("empty");
        std::fs::create_dir(&dir).unwrap();

        let freed = safe_remove(&FilesystemEntry {
            path: file.clone(),
            kind: EntryKind::File,
            modified: SystemTime::now(),
            size_bytes: 64,
        })
        .unwrap();
        assert_eq!(freed, 64);
        assert!(!file.exists());

        safe_remove(&FilesystemEntry {
            path: dir.clone(),
            kind: EntryKind::Directory,
            modified: SystemTime::now(),
            size_bytes: 0,
        })
        .unwrap();
        assert!(!dir.exists());
    }
}
