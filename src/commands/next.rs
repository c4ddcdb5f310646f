use anyhow::{Context, Result};
use cadence::runner::{self, Outcome};
use cadence::workspace;
use colored::Colorize;

pub fn execute() -> Result<()> {
    let root = workspace::find_root()
        .context("Not in a cadence workspace. Run 'cadence init' first.")?;

    match runner::next(&root)? {
        Outcome::Prompt {
            text,
            index,
            total,
            first_run,
        } => {
            println!("{}", text);

            let note = if first_run {
                " (first run: full project brief)"
            } else {
                ""
            };
            eprintln!(
                "{}",
                format!("✓ Dispatched commit {} of {}{}", index + 1, total, note).green()
            );
        }
        Outcome::Complete => {
            println!("{}", runner::COMPLETION_MESSAGE);
        }
    }

    Ok(())
}
