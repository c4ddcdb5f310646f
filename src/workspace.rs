//! Workspace discovery
//!
//! A cadence workspace is any directory containing a `.cadence/` directory.
//! Commands may be run from anywhere inside it; the root is found by walking
//! up the directory tree, the same way git finds `.git`.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Marker directory that identifies a workspace root.
pub const WORKSPACE_DIR: &str = ".cadence";

/// Find the workspace root by walking up from the current directory.
pub fn find_root() -> Result<PathBuf> {
    find_root_from(&std::env::current_dir()?)
}

/// Find the workspace root by walking up from `start`.
pub fn find_root_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(WORKSPACE_DIR).is_dir() {
            return Ok(current);
        }

        if let Some(parent) = current.parent() {
            current = parent.to_path_buf();
        } else {
            anyhow::bail!("Not in a cadence workspace");
        }
    }
}

/// Check if a directory is a workspace root.
pub fn is_workspace(path: &Path) -> bool {
    path.join(WORKSPACE_DIR).is_dir()
}

/// Get the `.cadence` directory for a workspace.
pub fn cadence_dir(root: &Path) -> PathBuf {
    root.join(WORKSPACE_DIR)
}

/// Get the backups directory for a workspace.
pub fn backups_dir(root: &Path) -> PathBuf {
    cadence_dir(root).join("backups")
}
