use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::categories::{Category, Verdict};
use crate::cleaner::{EntryKind, FilesystemEntry, RemovalCandidate, ScanResult};
use crate::error::CleanupError;
use crate::guard::normalize;

/// Walk everything under `root` and collect what the categories want removed.
///
/// Paths are reported absolute. The root itself is never a candidate, and
/// nothing at or below a `skip` path is looked at. Failing to list the root
/// is an error; failing to list anything below it is recorded in
/// [`ScanResult::errors`] and the walk continues.
pub fn scan(
    root: &Path,
    cutoff: SystemTime,
    categories: &[Box<dyn Category>],
    skip: &[PathBuf],
) -> Result<ScanResult, CleanupError> {
    std::fs::read_dir(root).map_err(|e| CleanupError::enumeration(root, e))?;

    let mut result = ScanResult::default();
    let root = normalize(root);
    let skip: Vec<PathBuf> = skip.iter().map(|p| normalize(p)).collect();

    let walker = WalkDir::new(&root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !skip.iter().any(|s| e.path() == s));

    for item in walker {
        let dent = match item {
            Ok(dent) => dent,
            Err(e) => {
                let msg = match e.path() {
                    Some(p) => format!("Cannot enumerate {}: {e}", p.display()),
                    None => format!("Cannot enumerate entry under {}: {e}", root.display()),
                };
                warn!("{msg}");
                result.errors.push(msg);
                continue;
            }
        };

        // Metadata of the entry itself; links are never followed.
        let meta = match dent.metadata() {
            Ok(m) => m,
            Err(e) => {
                let msg = format!("Cannot read metadata for {}: {e}", dent.path().display());
                warn!("{msg}");
                result.errors.push(msg);
                continue;
            }
        };

        let modified = match meta.modified() {
            Ok(t) => t,
            Err(e) => {
                let msg = format!("No modification time for {}: {e}", dent.path().display());
                warn!("{msg}");
                result.errors.push(msg);
                continue;
            }
        };

        let kind = if dent.file_type().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        let entry = FilesystemEntry {
            path: dent.path().to_path_buf(),
            kind,
            modified,
            size_bytes: if kind == EntryKind::File { meta.len() } else { 0 },
        };
        result.scanned += 1;

        if let Some(category) = classify(&entry, cutoff, categories, &mut result.errors) {
            debug!(
                "Candidate ({}): {} {}",
                category.name(),
                entry.kind.label(),
                entry.path.display()
            );
            result.total_bytes += entry.size_bytes;
            result.candidates.push(RemovalCandidate {
                entry,
                category: category.label(),
            });
        }
    }

    Ok(result)
}

/// First category that asks for removal wins.
fn classify<'a>(
    entry: &FilesystemEntry,
    cutoff: SystemTime,
    categories: &'a [Box<dyn Category>],
    errors: &mut Vec<String>,
) -> Option<&'a dyn Category> {
    for category in categories {
        match category.classify(entry, cutoff) {
            Verdict::Remove => return Some(category.as_ref()),
            Verdict::Keep => {}
            Verdict::Unreadable(msg) => {
                warn!("{msg}");
                errors.push(msg);
                return None;
            }
        }
    }
    None
}
