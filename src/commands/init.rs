use anyhow::{bail, Result};
use cadence::config::{self, Config};
use cadence::workspace;
use colored::Colorize;
use std::fs;

pub fn execute(name: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;

    if workspace::is_workspace(&cwd) {
        bail!(
            "Already a cadence workspace: {}",
            workspace::cadence_dir(&cwd).display()
        );
    }

    fs::create_dir_all(workspace::cadence_dir(&cwd))?;

    let project_name = name.unwrap_or_else(|| Config::default().project.name);
    fs::write(config::config_path(&cwd), default_config(&project_name))?;

    println!(
        "{} Initialized cadence workspace in {}",
        "✓".green(),
        cwd.display()
    );
    println!();
    println!("Next steps:");
    println!("  1. Put your commit list at commits.json");
    println!("  2. Run 'cadence next' to dispatch the first task");

    Ok(())
}

fn default_config(project_name: &str) -> String {
    format!(
        r#"# cadence workspace configuration

[project]
name = "{project_name}"

[commits]
# JSON array of commit records, relative to the workspace root
source = "commits.json"

[state]
# Progress counter; `cadence reset` clears it with a backup
file = ".cadence/progress"
"#
    )
}
