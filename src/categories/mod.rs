mod empty_folders;
mod stale_files;

use std::time::SystemTime;

use crate::cleaner::FilesystemEntry;

pub use empty_folders::EmptyFolders;
pub use stale_files::StaleFiles;

/// What a category decided about one entry.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Remove,
    Keep,
    /// The entry could not be inspected; it is kept and the reason reported.
    Unreadable(String),
}

/// The trait every candidate rule implements.
pub trait Category {
    /// Machine-readable name recorded on each candidate (e.g. "stale-files").
    fn name(&self) -> &'static str;

    /// Human-readable label for display (e.g. "Stale Files").
    fn label(&self) -> &'static str;

    /// Decide whether `entry` should be removed given the staleness cutoff.
    /// Must never touch the filesystem beyond reading.
    fn classify(&self, entry: &FilesystemEntry, cutoff: SystemTime) -> Verdict;
}

pub fn all_categories(extension: Option<&str>) -> Vec<Box<dyn Category>> {
    vec![
        Box::new(StaleFiles::new(extension)),
        Box::new(EmptyFolders),
    ]
}
