use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Gets the platform's default directory for node data (log files, etc.)
///
/// # Returns
/// `None` if the platform has no notion of a user data directory
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "Checkpoints", "checkpoints").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Creates `path` (and its parents) if it doesn't exist yet
pub fn ensure_exists(path: &Path) -> io::Result<()> {
    match std::fs::create_dir_all(path) {
        Err(err) if err.kind() != io::ErrorKind::AlreadyExists => Err(err),
        _ => Ok(()),
    }
}
