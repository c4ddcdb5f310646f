//! Progress tracking
//!
//! The sole mutable state in the system: a single non-negative integer — the
//! index of the next unprocessed commit — stored as decimal text in a file.
//! A missing file means a fresh start (index 0, first run). Writes go to a
//! temp file in the same directory followed by an atomic rename, so a crash
//! never leaves a partial counter.
//!
//! The counter is shared only across separate sequential invocations; nothing
//! guards against two invocations racing on the same file.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the next invocation should pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Index of the next unprocessed commit.
    pub next_index: usize,
    /// True when no state file existed (fresh start).
    pub first_run: bool,
}

/// Read progress from `path`.
///
/// Absent file -> index 0, first run. An unparsable file is fatal: silently
/// resetting to zero would re-run already-completed commits, so the raw
/// contents are surfaced to the operator instead.
pub fn read(path: &Path) -> Result<Progress> {
    if !path.exists() {
        return Ok(Progress {
            next_index: 0,
            first_run: true,
        });
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read progress state: {}", path.display()))?;

    let next_index = raw.trim().parse::<usize>().map_err(|_| {
        anyhow::anyhow!(
            "Corrupt progress state in {}: expected a non-negative integer, found {:?}",
            path.display(),
            raw.trim()
        )
    })?;

    Ok(Progress {
        next_index,
        first_run: false,
    })
}

/// Persist `current_index + 1` as the next index.
///
/// Called only after a prompt was produced for `current_index`.
pub fn advance(path: &Path, current_index: usize) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create state directory: {}", parent.display())
        })?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, (current_index + 1).to_string())
        .with_context(|| format!("Failed to write progress state: {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to commit progress state: {}", path.display()))?;

    Ok(())
}

/// Remove the state file so the next run starts fresh.
///
/// The old file is copied into `backups_dir` with a timestamp suffix first.
/// Returns the backup path, or `None` when there was no state to clear.
pub fn clear(path: &Path, backups_dir: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    fs::create_dir_all(backups_dir)
        .with_context(|| format!("Failed to create backups directory: {}", backups_dir.display()))?;

    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let backup_path = backups_dir.join(format!("progress-{}", timestamp));

    fs::copy(path, &backup_path).with_context(|| {
        format!(
            "Failed to backup {} to {}",
            path.display(),
            backup_path.display()
        )
    })?;
    fs::remove_file(path)
        .with_context(|| format!("Failed to remove progress state: {}", path.display()))?;

    Ok(Some(backup_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_absent_is_fresh_and_idempotent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("progress");

        // Reading twice without an advance yields the same fresh state
        for _ in 0..2 {
            let progress = read(&path).unwrap();
            assert_eq!(progress.next_index, 0);
            assert!(progress.first_run);
        }
    }

    #[test]
    fn test_advance_then_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("progress");

        advance(&path, 0).unwrap();
        let progress = read(&path).unwrap();
        assert_eq!(progress.next_index, 1);
        assert!(!progress.first_run);

        advance(&path, progress.next_index).unwrap();
        assert_eq!(read(&path).unwrap().next_index, 2);
    }

    #[test]
    fn test_state_file_is_bare_decimal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("progress");

        advance(&path, 41).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "42");
    }

    #[test]
    fn test_advance_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("progress");

        advance(&path, 7).unwrap();
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_read_tolerates_surrounding_whitespace() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("progress");
        fs::write(&path, "  13\n").unwrap();

        assert_eq!(read(&path).unwrap().next_index, 13);
    }

    #[test]
    fn test_corrupt_state_surfaces_raw_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("progress");
        fs::write(&path, "three").unwrap();

        let err = read(&path).unwrap_err().to_string();
        assert!(err.contains("Corrupt progress state"));
        assert!(err.contains("three"));
    }

    #[test]
    fn test_negative_state_is_corrupt() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("progress");
        fs::write(&path, "-1").unwrap();

        assert!(read(&path).is_err());
    }

    #[test]
    fn test_clear_backs_up_then_removes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("progress");
        let backups = tmp.path().join("backups");
        fs::write(&path, "5").unwrap();

        let backup = clear(&path, &backups).unwrap().unwrap();
        assert!(!path.exists());
        assert_eq!(fs::read_to_string(&backup).unwrap(), "5");
    }

    #[test]
    fn test_clear_without_state_is_noop() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("progress");
        let backups = tmp.path().join("backups");

        assert!(clear(&path, &backups).unwrap().is_none());
        assert!(!backups.exists());
    }
}
