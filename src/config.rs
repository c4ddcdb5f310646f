//! Workspace configuration
//!
//! Manages `.cadence/config.toml`. Every section is optional with defaults,
//! so an empty or missing file yields a fully usable configuration. Paths are
//! tilde-expanded and resolved relative to the workspace root unless
//! absolute.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::ProjectRecord;
use crate::workspace;

/// Configuration stored in `.cadence/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub commits: CommitsSection,
    #[serde(default)]
    pub state: StateSection,
    /// Additional project records merged into the built-in catalog.
    /// An entry with a built-in name replaces the built-in record.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub projects: BTreeMap<String, ProjectRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    /// Active project name, fixed per deployment.
    #[serde(default = "default_project_name")]
    pub name: String,
}

fn default_project_name() -> String {
    "Jovibe Portfolio".to_string()
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            name: default_project_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitsSection {
    /// Path to the JSON commit list.
    #[serde(default = "default_commits_source")]
    pub source: String,
}

fn default_commits_source() -> String {
    "commits.json".to_string()
}

impl Default for CommitsSection {
    fn default() -> Self {
        Self {
            source: default_commits_source(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSection {
    /// Path to the progress counter file.
    #[serde(default = "default_state_file")]
    pub file: String,
}

fn default_state_file() -> String {
    ".cadence/progress".to_string()
}

impl Default for StateSection {
    fn default() -> Self {
        Self {
            file: default_state_file(),
        }
    }
}

impl Config {
    /// Load configuration from `.cadence/config.toml` under `root`.
    ///
    /// Returns the default configuration if the file doesn't exist.
    pub fn load(root: &Path) -> Result<Config> {
        let path = config_path(root);

        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Resolved path to the commit source.
    pub fn commits_path(&self, root: &Path) -> PathBuf {
        resolve(root, &self.commits.source)
    }

    /// Resolved path to the progress state file.
    pub fn state_path(&self, root: &Path) -> PathBuf {
        resolve(root, &self.state.file)
    }
}

/// Get the config file path for a workspace.
pub fn config_path(root: &Path) -> PathBuf {
    workspace::cadence_dir(root).join("config.toml")
}

/// Expand `~` and resolve relative paths against the workspace root.
fn resolve(root: &Path, value: &str) -> PathBuf {
    let expanded = shellexpand::tilde(value);
    let path = Path::new(expanded.as_ref());
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
