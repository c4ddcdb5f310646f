//! Commit store
//!
//! An ordered list of commit records loaded once from a JSON document and
//! read-only for the rest of the process. The position of a record in the
//! source array is its processing order; records are addressed by index and
//! never reordered.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One unit of work to be described in a prompt.
///
/// All fields are required; a record missing any of them fails the load.
/// The timestamp is carried verbatim and never parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    pub commit_number: u64,
    pub timestamp: String,
    pub task: String,
    pub instructions: String,
    pub commit_message: String,
}

/// Ordered, read-only sequence of commit records.
#[derive(Debug, Clone)]
pub struct CommitStore {
    records: Vec<CommitRecord>,
}

impl CommitStore {
    /// Load the commit list from a JSON array at `path`.
    pub fn load(path: &Path) -> Result<CommitStore> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read commit source: {}", path.display()))?;

        let records: Vec<CommitRecord> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse commit source: {}", path.display()))?;

        Ok(CommitStore { records })
    }

    /// Record at `index`, or `None` past the end. A `None` here signals
    /// completion to the runner, not an error.
    pub fn get(&self, index: usize) -> Option<&CommitRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
