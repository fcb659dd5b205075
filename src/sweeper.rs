//! One cleanup run: guard, scan, dry-run or confirmation gate, removal, summary.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::categories::all_categories;
use crate::cleaner::{EntryKind, RunReport, RunStatus};
use crate::clock::{days_before, SharedClock, SystemClock};
use crate::config::CleanupConfig;
use crate::confirm::{Confirm, StdinPrompt};
use crate::error::CleanupError;
use crate::guard::{platform_paths, Guard, ProtectedPaths};
use crate::remover;
use crate::reporter::RunLog;
use crate::scanner;

pub struct Sweeper {
    clock: SharedClock,
    confirm: Box<dyn Confirm>,
    protected: Box<dyn ProtectedPaths>,
}

impl Default for Sweeper {
    fn default() -> Self {
        Self::new()
    }
}

impl Sweeper {
    /// Wall clock, terminal prompt, this platform's protected paths.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            confirm: Box::new(StdinPrompt),
            protected: platform_paths(),
        }
    }

    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_confirm(mut self, confirm: Box<dyn Confirm>) -> Self {
        self.confirm = confirm;
        self
    }

    pub fn with_protected_paths(mut self, protected: Box<dyn ProtectedPaths>) -> Self {
        self.protected = protected;
        self
    }

    /// Guard errors are returned. Everything after the guard is reported
    /// through the run log, tracing and the returned [`RunReport`].
    pub fn run(&mut self, config: &CleanupConfig) -> Result<RunReport, CleanupError> {
        let started = Instant::now();
        let log = RunLog::open(
            &config.log_dir,
            config.log_retention_days,
            self.clock.clone(),
        );
        log.info(&format!(
            "Starting stale file cleanup: {}, pruned_logs={}",
            config.describe(),
            log.pruned()
        ));

        let guard = Guard::new(self.protected.as_ref());
        if let Err(e) = guard.check(&config.root, config.allow_system_paths) {
            log.error(&e.to_string());
            return Err(e);
        }

        let cutoff = days_before(self.clock.now(), config.age_days);
        let categories = all_categories(config.extension.as_deref());

        // Our own logs may live under the root (the default temp dir does).
        let skip = [config.log_dir.clone()];

        let scan = match scanner::scan(&config.root, cutoff, &categories, &skip) {
            Ok(scan) => scan,
            Err(e) => {
                let msg = e.to_string();
                warn!("{msg}");
                log.warning(&msg);
                let mut report = RunReport::new(RunStatus::ScanAborted);
                report.warnings.push(msg);
                return Ok(finish(report, &log, started));
            }
        };

        for err in &scan.errors {
            log.warning(err);
        }

        let found = scan.candidates.len();
        let status = if found == 0 {
            RunStatus::NothingFound
        } else if config.dry_run {
            RunStatus::DryRun
        } else if !config.force && !self.confirm.confirm(found) {
            RunStatus::Cancelled
        } else {
            RunStatus::Completed
        };

        let mut report = RunReport::new(status);
        report.summary.found = found;
        report.summary.scanned = scan.scanned;
        report.summary.bytes_found = scan.total_bytes;
        report.warnings = scan.errors;

        match status {
            RunStatus::DryRun => {
                for candidate in &scan.candidates {
                    debug!(
                        "Would remove {}: {}",
                        candidate.entry.kind.label(),
                        candidate.entry.path.display()
                    );
                }
                log.info(&format!("Dry run: would remove {found} item(s)"));
                report.pending = scan.candidates;
            }
            RunStatus::Cancelled => {
                log.info(&format!("Cleanup cancelled by user; {found} item(s) left in place"));
                report.pending = scan.candidates;
            }
            RunStatus::Completed => {
                let removal = remover::remove_all(scan.candidates, &log);
                let summary = &mut report.summary;
                summary.removed = removal.removed.len();
                summary.failed = removal.failures.len();
                summary.bytes_freed = removal.bytes_freed;
                summary.files_removed = removal
                    .removed
                    .iter()
                    .filter(|c| c.entry.kind == EntryKind::File)
                    .count();
                summary.dirs_removed = summary.removed - summary.files_removed;
                report.removed = removal.removed;
                report.failures = removal.failures;
            }
            RunStatus::NothingFound | RunStatus::ScanAborted => {}
        }

        Ok(finish(report, &log, started))
    }
}

fn finish(mut report: RunReport, log: &RunLog, started: Instant) -> RunReport {
    report.summary.elapsed = started.elapsed();
    let s = &report.summary;
    log.info(&format!(
        "Cleanup finished ({}): scanned={}, found={}, removed={}, failed={}, duration={:.2}s",
        report.status.label(),
        s.scanned,
        s.found,
        s.removed,
        s.failed,
        s.elapsed.as_secs_f64()
    ));
    report
}
