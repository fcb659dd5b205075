use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, CleanupConfig, DEFAULT_LOG_RETENTION_DAYS};

#[derive(Parser, Debug)]
#[command(
    name = "stalesweep",
    about = "Remove files and empty folders that have not been modified for a given number of days",
    version
)]
pub struct Cli {
    /// Directory to clean (defaults to the system temp directory)
    pub path: Option<PathBuf>,

    /// Minimum age in days; entries modified more recently are kept
    #[arg(long, short)]
    pub age: u32,

    /// Only remove files with this extension (e.g. ".log")
    #[arg(long, short)]
    pub extension: Option<String>,

    /// Delete without asking for confirmation
    #[arg(long, short)]
    pub force: bool,

    /// Report what would be removed without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Days to keep daily run logs
    #[arg(long, default_value_t = DEFAULT_LOG_RETENTION_DAYS)]
    pub log_retention_days: u32,

    /// Allow cleaning drive roots and OS directories
    #[arg(long)]
    pub allow_system_paths: bool,

    /// Directory for daily run logs
    #[arg(long, env = "STALESWEEP_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// List every item as it is found or removed
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> CleanupConfig {
        let root = self.path.unwrap_or_else(config::default_root);
        let log_dir = self.log_dir.unwrap_or_else(config::default_log_dir);
        CleanupConfig::new(root, self.age)
            .with_extension(self.extension.as_deref())
            .with_force(self.force)
            .with_dry_run(self.dry_run)
            .with_allow_system_paths(self.allow_system_paths)
            .with_log_retention_days(self.log_retention_days)
            .with_log_dir(log_dir)
            .with_verbose(self.verbose)
    }
}
