//! stalesweep - remove stale files and empty folders.
//!
//! A run checks the target against a platform deny-list, walks it once,
//! selects files older than the age threshold (optionally by extension) and
//! directories that are both old and empty, then either reports them
//! (dry-run), asks for confirmation, or removes them. Every step is written
//! to a daily log file that is itself pruned after a retention window.

pub mod categories;
pub mod cleaner;
pub mod cli;
pub mod clock;
pub mod config;
pub mod confirm;
pub mod error;
pub mod guard;
pub mod logging;
pub mod output;
pub mod remover;
pub mod reporter;
pub mod scanner;
pub mod sweeper;
pub mod utils;

pub use cleaner::{
    EntryKind, FilesystemEntry, RemovalCandidate, RemovalFailure, RunReport, RunStatus, RunSummary,
    ScanResult,
};
pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use config::CleanupConfig;
pub use confirm::{AssumeNo, AssumeYes, Confirm, LinePrompt, StdinPrompt};
pub use error::CleanupError;
pub use guard::{Guard, MacPaths, ProtectedPaths, UnixPaths, WindowsPaths};
pub use sweeper::Sweeper;
