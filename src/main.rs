use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Incremental commit-task prompts for AI-assisted development", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a cadence workspace in the current directory
    Init {
        /// Project name to preselect in the generated config
        name: Option<String>,
    },

    /// Print the next commit prompt and advance progress
    Next,

    /// Show progress without advancing
    Status,

    /// Render the prompt for one commit without touching progress
    Show {
        /// Zero-based position in the commit list
        index: usize,

        /// Render the full project brief instead of the condensed form
        #[arg(long)]
        detailed: bool,
    },

    /// Discard saved progress so the next run starts fresh
    Reset {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { name } => {
            commands::init::execute(name)?;
        }
        Commands::Next => {
            commands::next::execute()?;
        }
        Commands::Status => {
            commands::status::execute()?;
        }
        Commands::Show { index, detailed } => {
            commands::show::execute(index, detailed)?;
        }
        Commands::Reset { yes } => {
            commands::reset::execute(yes)?;
        }
    }

    Ok(())
}
