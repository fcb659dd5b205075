use std::path::Path;
use std::time::SystemTime;

use super::{Category, Verdict};
use crate::cleaner::FilesystemEntry;

/// Files older than the cutoff, optionally restricted to one extension.
pub struct StaleFiles {
    extension: Option<String>,
}

impl StaleFiles {
    pub fn new(extension: Option<&str>) -> Self {
        Self {
            extension: extension.map(str::to_string),
        }
    }

    fn matches_extension(&self, path: &Path) -> bool {
        let Some(wanted) = &self.extension else {
            return true;
        };
        file_extension(path).is_some_and(|actual| same_extension(&actual, wanted))
    }
}

/// Extension with its leading dot. A dotfile with no other dot, such as
/// `.log`, is all extension.
fn file_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    if let Some(rest) = name.strip_prefix('.') {
        if !rest.is_empty() && !rest.contains('.') {
            return Some(name.into_owned());
        }
    }
    path.extension().map(|ext| format!(".{}", ext.to_string_lossy()))
}

// Follows the platform's path case rules.
#[cfg(windows)]
fn same_extension(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(not(windows))]
fn same_extension(a: &str, b: &str) -> bool {
    a == b
}

impl Category for StaleFiles {
    fn name(&self) -> &'static str {
        "stale-files"
    }

    fn label(&self) -> &'static str {
        "Stale Files"
    }

    fn classify(&self, entry: &FilesystemEntry, cutoff: SystemTime) -> Verdict {
        if entry.is_dir() || !entry.is_stale(cutoff) {
            return Verdict::Keep;
        }
        if self.matches_extension(&entry.path) {
            Verdict::Remove
        } else {
            Verdict::Keep
        }
    }
}
