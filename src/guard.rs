//! Refuses to run against drive roots and OS directories.
//!
//! Matching is exact: `/usr` is protected, `/usr/local` is not. Each platform
//! supplies its list through [`ProtectedPaths`]; the comparison itself is the
//! same everywhere.

use std::path::{Component, Path, PathBuf};

use crate::error::CleanupError;

/// Supplies the deny-list for one platform.
pub trait ProtectedPaths {
    fn protected_paths(&self) -> Vec<PathBuf>;
}

const UNIX_PROTECTED: &[&str] = &["/", "/etc", "/bin", "/sbin", "/usr", "/boot", "/sys", "/proc"];

const MACOS_EXTRA: &[&str] = &["/System", "/Applications"];

pub struct UnixPaths;

impl ProtectedPaths for UnixPaths {
    fn protected_paths(&self) -> Vec<PathBuf> {
        UNIX_PROTECTED.iter().map(PathBuf::from).collect()
    }
}

pub struct MacPaths;

impl ProtectedPaths for MacPaths {
    fn protected_paths(&self) -> Vec<PathBuf> {
        UNIX_PROTECTED
            .iter()
            .chain(MACOS_EXTRA)
            .map(PathBuf::from)
            .collect()
    }
}

/// Drive roots plus the directories Windows names through its environment.
pub struct WindowsPaths {
    drive_roots: Vec<PathBuf>,
    system_root: Option<PathBuf>,
    program_files: Option<PathBuf>,
    program_files_x86: Option<PathBuf>,
    program_data: Option<PathBuf>,
}

impl WindowsPaths {
    pub fn new(drive_roots: Vec<PathBuf>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };
        Self {
            drive_roots,
            system_root: var("SystemRoot").or_else(|| var("windir")),
            program_files: var("ProgramFiles"),
            program_files_x86: var("ProgramFiles(x86)"),
            program_data: var("ProgramData"),
        }
    }

    pub fn from_env() -> Self {
        Self::new(mounted_drive_roots(), |name| std::env::var(name).ok())
    }
}

impl ProtectedPaths for WindowsPaths {
    fn protected_paths(&self) -> Vec<PathBuf> {
        let mut paths = self.drive_roots.clone();
        if let Some(root) = &self.system_root {
            paths.push(root.clone());
            paths.push(root.join("System32"));
        }
        paths.extend(
            [
                &self.program_files,
                &self.program_files_x86,
                &self.program_data,
            ]
            .into_iter()
            .flatten()
            .cloned(),
        );
        paths
    }
}

/// `A:\` through `Z:\`, keeping the ones that exist.
fn mounted_drive_roots() -> Vec<PathBuf> {
    (b'A'..=b'Z')
        .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
        .filter(|root| cfg!(windows) && root.exists())
        .collect()
}

/// The adapter for the platform this binary was built for.
pub fn platform_paths() -> Box<dyn ProtectedPaths> {
    if cfg!(windows) {
        Box::new(WindowsPaths::from_env())
    } else if cfg!(target_os = "macos") {
        Box::new(MacPaths)
    } else {
        Box::new(UnixPaths)
    }
}

pub struct Guard {
    protected: Vec<PathBuf>,
}

impl Guard {
    pub fn new(paths: &dyn ProtectedPaths) -> Self {
        Self {
            protected: paths.protected_paths(),
        }
    }

    pub fn is_protected(&self, path: &Path) -> bool {
        let lexical = normalize(path);
        let canonical = std::fs::canonicalize(path).ok();

        self.protected.iter().any(|blocked| {
            if same_path(&lexical, &normalize(blocked)) {
                return true;
            }
            match (&canonical, std::fs::canonicalize(blocked).ok()) {
                (Some(a), Some(b)) => same_path(a, &b),
                _ => false,
            }
        })
    }

    /// Existence first, then the deny-list.
    pub fn check(&self, path: &Path, allow_system_paths: bool) -> Result<(), CleanupError> {
        if !path.exists() {
            return Err(CleanupError::PathNotFound(path.to_path_buf()));
        }
        if !allow_system_paths && self.is_protected(path) {
            return Err(CleanupError::SystemPathProtected(path.to_path_buf()));
        }
        Ok(())
    }
}

/// Absolute path with `.` and `..` folded and trailing separators dropped.
pub fn normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(windows)]
fn same_path(a: &Path, b: &Path) -> bool {
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}

#[cfg(not(windows))]
fn same_path(a: &Path, b: &Path) -> bool {
    a == b
}
