use anyhow::{Context, Result};
use cadence::config::Config;
use cadence::progress;
use cadence::store::CommitStore;
use cadence::workspace;
use colored::Colorize;

pub fn execute() -> Result<()> {
    let root = workspace::find_root()
        .context("Not in a cadence workspace. Run 'cadence init' first.")?;

    let config = Config::load(&root)?;
    let commits_path = config.commits_path(&root);
    let store = CommitStore::load(&commits_path)?;
    let state = progress::read(&config.state_path(&root))?;

    println!("Workspace: {}", root.display());
    println!("Project:   {}", config.project.name);
    println!(
        "Source:    {} ({} commits)",
        commits_path.display(),
        store.len()
    );

    if state.first_run {
        println!(
            "Progress:  not started (the next run sends the full project brief)"
        );
    } else if let Some(commit) = store.get(state.next_index) {
        println!(
            "Progress:  {} / {} dispatched; next: commit {} — {}",
            state.next_index,
            store.len(),
            commit.commit_number,
            commit.task
        );
    } else {
        println!(
            "Progress:  {}",
            format!("{} / {} — all commits completed", store.len(), store.len()).green()
        );
    }

    Ok(())
}
