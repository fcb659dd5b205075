//! Daily plain-text run log.
//!
//! One file per calendar day, `stale-file-cleanup_YYYY-MM-DD.log`, appended
//! one line at a time. Writing here is independent of console output: a
//! failed append produces a console warning and the run goes on.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use tracing::warn;

use crate::clock::{days_before, SharedClock};

const LOG_NAME: &str = "stale-file-cleanup";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        })
    }
}

/// Outcome of pruning old logs.
#[derive(Debug, Default)]
pub struct PruneReport {
    pub removed: Vec<PathBuf>,
    pub errors: Vec<String>,
}

pub struct RunLog {
    path: PathBuf,
    clock: SharedClock,
    pruned: usize,
}

impl RunLog {
    /// Prune logs past retention, then point at today's file.
    /// Prune problems are written into the new log as warnings.
    pub fn open(dir: &Path, retention_days: u32, clock: SharedClock) -> Self {
        let now = clock.now();
        let pruned = prune_old_logs(dir, retention_days, now);

        let log = Self {
            path: dir.join(daily_file_name(now)),
            clock,
            pruned: pruned.removed.len(),
        };
        for err in &pruned.errors {
            log.warning(err);
        }
        log
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Old log files deleted when this log was opened.
    pub fn pruned(&self) -> usize {
        self.pruned
    }

    pub fn info(&self, msg: &str) {
        self.append(LogLevel::Info, msg);
    }

    pub fn warning(&self, msg: &str) {
        self.append(LogLevel::Warning, msg);
    }

    pub fn error(&self, msg: &str) {
        self.append(LogLevel::Error, msg);
    }

    pub fn append(&self, level: LogLevel, msg: &str) {
        let line = format_line(self.clock.now(), level, msg);
        if let Err(e) = write_line(&self.path, &line) {
            warn!("Failed to write log {}: {e}", self.path.display());
        }
    }
}

/// `stale-file-cleanup_2026-10-15.log` for the local date of `now`.
pub fn daily_file_name(now: SystemTime) -> String {
    let date: DateTime<Local> = now.into();
    format!("{LOG_NAME}_{}.log", date.format("%Y-%m-%d"))
}

/// `2026-10-15 09:30:00 [INFO] message`
pub fn format_line(now: SystemTime, level: LogLevel, msg: &str) -> String {
    format_timestamp(now) + &format!(" [{level}] {msg}")
}

pub fn format_timestamp(t: SystemTime) -> String {
    let local: DateTime<Local> = t.into();
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn write_line(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}

/// Delete `*.log` files in `dir` last modified strictly before `now - retention_days`.
pub fn prune_old_logs(dir: &Path, retention_days: u32, now: SystemTime) -> PruneReport {
    let mut report = PruneReport::default();
    let cutoff = days_before(now, retention_days);

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return report,
        Err(e) => {
            let msg = format!("Failed to read log directory {}: {e}", dir.display());
            warn!("{msg}");
            report.errors.push(msg);
            return report;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("log") {
            continue;
        }
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }
        let Ok(modified) = meta.modified() else {
            continue;
        };
        if modified >= cutoff {
            continue;
        }
        match fs::remove_file(&path) {
            Ok(()) => report.removed.push(path),
            Err(e) => {
                let msg = format!("Failed to delete old log {}: {e}", path.display());
                warn!("{msg}");
                report.errors.push(msg);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use std::fs::File;
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::tempdir;

    const DAY: u64 = 86_400;

    fn age(path: &Path, now: SystemTime, days: u64) {
        File::open(path)
            .unwrap()
            .set_modified(now - Duration::from_secs(days * DAY))
            .unwrap();
    }

    #[test]
    fn line_format() {
        let line = format_line(SystemTime::now(), LogLevel::Warning, "disk busy");
        // "YYYY-MM-DD HH:MM:SS [WARNING] disk busy"
        assert_eq!(&line[4..5], "-");
        assert_eq!(&line[10..11], " ");
        assert!(line.ends_with(" [WARNING] disk busy"));
        assert_eq!(line.len(), 19 + " [WARNING] disk busy".len());
    }

    #[test]
    fn file_name_uses_date() {
        let now = SystemTime::now();
        let today: DateTime<Local> = now.into();
        assert_eq!(
            daily_file_name(now),
            format!("stale-file-cleanup_{}.log", today.format("%Y-%m-%d"))
        );
    }

    #[test]
    fn appends_lines_to_daily_file() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("logs");
        let log = RunLog::open(&dir, 7, Arc::new(FixedClock(SystemTime::now())));

        log.info("started");
        log.error("boom");

        let content = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INFO] started"));
        assert!(lines[1].ends_with("[ERROR] boom"));
    }

    #[test]
    fn prunes_only_logs_past_retention() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        let now = SystemTime::now();

        for name in ["old.log", "recent.log", "old.txt"] {
            fs::write(dir.join(name), b"x").unwrap();
        }
        age(&dir.join("old.log"), now, 8);
        age(&dir.join("recent.log"), now, 6);
        age(&dir.join("old.txt"), now, 30);

        let report = prune_old_logs(dir, 7, now);
        assert_eq!(report.removed, vec![dir.join("old.log")]);
        assert!(report.errors.is_empty());
        assert!(!dir.join("old.log").exists());
        assert!(dir.join("recent.log").exists());
        assert!(dir.join("old.txt").exists());
    }

    #[test]
    fn pruning_happens_before_first_line() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        let now = SystemTime::now();
        let clock: SharedClock = Arc::new(FixedClock(now));

        let stale = dir.join("stale-file-cleanup_2000-01-01.log");
        fs::write(&stale, b"ancient\n").unwrap();
        age(&stale, now, 365);

        let log = RunLog::open(dir, 7, clock);
        assert!(!stale.exists());
        assert_eq!(log.pruned(), 1);
        log.info("fresh");
        assert!(log.path().exists());
    }

    #[test]
    fn missing_log_dir_is_not_an_error() {
        let tmp = tempdir().unwrap();
        let report = prune_old_logs(&tmp.path().join("absent"), 7, SystemTime::now());
        assert!(report.removed.is_empty());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn unwritable_log_does_not_panic() {
        let tmp = tempdir().unwrap();
        // a file where the log directory should be
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();
        let log = RunLog::open(&blocker, 7, Arc::new(FixedClock(SystemTime::now())));
        log.info("goes nowhere");
        assert!(!log.path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn undeletable_old_log_becomes_warning_line() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("logs");
        fs::create_dir(&dir).unwrap();
        let now = SystemTime::now();

        // today's file already exists, so appending needs no directory write access
        let today = dir.join(daily_file_name(now));
        fs::write(&today, b"").unwrap();
        let old = dir.join("stale-file-cleanup_2000-01-01.log");
        fs::write(&old, b"ancient\n").unwrap();
        age(&old, now, 365);

        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();
        if fs::write(dir.join("writable"), b"x").is_ok() {
            // privileged user; permissions are not enforced
            fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let log = RunLog::open(&dir, 7, Arc::new(FixedClock(now)));
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(old.exists());
        assert_eq!(log.pruned(), 0);
        let content = fs::read_to_string(&today).unwrap();
        assert!(content.contains("[WARNING] Failed to delete old log"));
        assert!(content.contains("stale-file-cleanup_2000-01-01.log"));
    }
}
