use anyhow::{Context, Result};
use cadence::runner;
use cadence::workspace;

pub fn execute(index: usize, detailed: bool) -> Result<()> {
    let root = workspace::find_root()
        .context("Not in a cadence workspace. Run 'cadence init' first.")?;

    let text = runner::peek(&root, index, detailed)?;
    println!("{}", text);

    Ok(())
}
