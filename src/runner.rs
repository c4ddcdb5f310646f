//! Runner
//!
//! Orchestration only: read progress, fetch the record at the next index,
//! render, persist the advanced index. Past the end of the store the outcome
//! is `Complete` and nothing is written — the state file stays untouched.

use anyhow::Result;
use std::path::Path;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::progress;
use crate::prompt;
use crate::store::CommitStore;

/// Fixed message printed when no commits remain.
pub const COMPLETION_MESSAGE: &str = "All commits completed!";

/// Result of one `next` invocation.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A prompt was rendered and progress advanced past `index`.
    Prompt {
        text: String,
        index: usize,
        total: usize,
        first_run: bool,
    },
    /// Every commit has been processed; no state was written.
    Complete,
}

/// Render the prompt for the next unprocessed commit and advance progress.
///
/// Progress is persisted only after the prompt has been rendered, so a
/// failure anywhere earlier leaves the index where it was.
pub fn next(root: &Path) -> Result<Outcome> {
    let config = Config::load(root)?;
    let store = CommitStore::load(&config.commits_path(root))?;

    let mut catalog = Catalog::builtin();
    catalog.merge(&config.projects);
    let project = catalog.get(&config.project.name)?;

    let state_path = config.state_path(root);
    let state = progress::read(&state_path)?;

    let commit = match store.get(state.next_index) {
        Some(commit) => commit,
        None => return Ok(Outcome::Complete),
    };

    let text = prompt::render(commit, &config.project.name, project, state.first_run);
    progress::advance(&state_path, state.next_index)?;

    Ok(Outcome::Prompt {
        text,
        index: state.next_index,
        total: store.len(),
        first_run: state.first_run,
    })
}

/// Render the prompt for an arbitrary commit without touching progress.
pub fn peek(root: &Path, index: usize, detailed: bool) -> Result<String> {
    let config = Config::load(root)?;
    let store = CommitStore::load(&config.commits_path(root))?;

    let mut catalog = Catalog::builtin();
    catalog.merge(&config.projects);
    let project = catalog.get(&config.project.name)?;

    let commit = store.get(index).ok_or_else(|| {
        anyhow::anyhow!(
            "Commit index {} is out of range (the store holds {} commits)",
            index,
            store.len()
        )
    })?;

    Ok(prompt::render(commit, &config.project.name, project, detailed))
}
