use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a cleanup run.
#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error(
        "Refusing to clean protected system path: {} (use --allow-system-paths to override)",
        .0.display()
    )]
    SystemPathProtected(PathBuf),

    #[error("Cannot enumerate {}: {source}", path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CleanupError {
    pub fn enumeration(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanupError::Enumeration {
            path: path.into(),
            source,
        }
    }
}
