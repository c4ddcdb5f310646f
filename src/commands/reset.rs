use anyhow::{Context, Result};
use cadence::config::Config;
use cadence::progress;
use cadence::workspace;
use colored::Colorize;

pub fn execute(yes: bool) -> Result<()> {
    let root = workspace::find_root()
        .context("Not in a cadence workspace. Run 'cadence init' first.")?;

    let config = Config::load(&root)?;
    let state_path = config.state_path(&root);

    if !state_path.exists() {
        println!("No saved progress; nothing to reset.");
        return Ok(());
    }

    let state = progress::read(&state_path)?;
    if !yes {
        anyhow::bail!(
            "This discards saved progress ({} commits dispatched). Re-run with --yes to confirm.",
            state.next_index
        );
    }

    if let Some(backup) = progress::clear(&state_path, &workspace::backups_dir(&root))? {
        println!(
            "{} Progress reset; previous state backed up to {}",
            "✓".green(),
            backup.display()
        );
    }

    Ok(())
}
