use std::path::PathBuf;

/// Default number of days daily run logs are kept.
pub const DEFAULT_LOG_RETENTION_DAYS: u32 = 7;

/// Everything one cleanup run needs to know. Built once, never mutated by the run.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    pub root: PathBuf,
    pub age_days: u32,
    /// Exact extension including the leading dot, e.g. `.log`.
    pub extension: Option<String>,
    pub force: bool,
    pub dry_run: bool,
    pub allow_system_paths: bool,
    pub log_retention_days: u32,
    pub log_dir: PathBuf,
    pub verbose: bool,
}

impl CleanupConfig {
    pub fn new(root: impl Into<PathBuf>, age_days: u32) -> Self {
        Self {
            root: root.into(),
            age_days,
            extension: None,
            force: false,
            dry_run: false,
            allow_system_paths: false,
            log_retention_days: DEFAULT_LOG_RETENTION_DAYS,
            log_dir: default_log_dir(),
            verbose: false,
        }
    }

    pub fn with_extension(mut self, extension: Option<&str>) -> Self {
        self.extension = extension.and_then(normalize_extension);
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_allow_system_paths(mut self, allow: bool) -> Self {
        self.allow_system_paths = allow;
        self
    }

    pub fn with_log_retention_days(mut self, days: u32) -> Self {
        self.log_retention_days = days;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// One-line rendering of the effective parameters for the run log.
    pub fn describe(&self) -> String {
        format!(
            "path={}, age_days={}, extension={}, force={}, dry_run={}, allow_system_paths={}, log_retention_days={}",
            self.root.display(),
            self.age_days,
            self.extension.as_deref().unwrap_or("<any>"),
            self.force,
            self.dry_run,
            self.allow_system_paths,
            self.log_retention_days,
        )
    }
}

/// Root scanned when no path is given.
pub fn default_root() -> PathBuf {
    std::env::temp_dir()
}

/// `<temp>/stalesweep`, where the daily run logs live.
pub fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("stalesweep")
}

/// `"log"` and `".log"` both become `".log"`. Blank input means no filter.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim();
    if ext.is_empty() || ext == "." {
        return None;
    }
    if ext.starts_with('.') {
        Some(ext.to_string())
    } else {
        Some(format!(".{ext}"))
    }
}
