//! Project catalog
//!
//! Descriptive records for the sites this tool can brief an agent on: theme,
//! palette, stack, branding, and mock-data descriptors. The catalog ships
//! with one built-in project and is constructed at startup and passed by
//! reference — never held as module-level global state. Workspace config may
//! add projects or replace built-ins by name.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Branding assets for a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branding {
    pub logo: String,
    pub font: String,
    pub icon_set: String,
}

/// Immutable description of one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub theme: String,
    pub primary_colors: Vec<String>,
    pub accent_colors: Vec<String>,
    pub stack: Vec<String>,
    pub style: String,
    pub design_pattern: String,
    pub branding: Branding,
    /// Free-form content category -> descriptor. BTreeMap keeps rendering
    /// order deterministic.
    #[serde(default)]
    pub mock_data: BTreeMap<String, String>,
    pub special_effects: String,
}

/// Name-keyed collection of project records.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: BTreeMap<String, ProjectRecord>,
}

impl Catalog {
    /// Catalog with the built-in projects.
    pub fn builtin() -> Self {
        let mut projects = BTreeMap::new();
        projects.insert("Jovibe Portfolio".to_string(), jovibe_portfolio());
        Self { projects }
    }

    /// Merge records into the catalog; an existing name is replaced.
    pub fn merge(&mut self, extra: &BTreeMap<String, ProjectRecord>) {
        for (name, record) in extra {
            self.projects.insert(name.clone(), record.clone());
        }
    }

    /// Look up a project by name.
    pub fn get(&self, name: &str) -> Result<&ProjectRecord> {
        self.projects.get(name).ok_or_else(|| {
            anyhow!(
                "Unknown project '{}'. Known projects: {}",
                name,
                self.names().join(", ")
            )
        })
    }

    /// Known project names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.projects.keys().cloned().collect()
    }
}

fn jovibe_portfolio() -> ProjectRecord {
    ProjectRecord {
        theme: "Dark and light, Modern, Minimal".to_string(),
        primary_colors: vec!["#1e1e2f".to_string(), "#ffffff".to_string()],
        accent_colors: vec!["#9b59b6".to_string(), "#ff7f50".to_string()],
        stack: vec![
            "HTML".to_string(),
            "CSS".to_string(),
            "JavaScript".to_string(),
            "TailwindCSS".to_string(),
        ],
        style: "Glassmorphism cards, smooth animations, responsive layout".to_string(),
        design_pattern: "Component-based with reusable UI modules".to_string(),
        branding: Branding {
            logo: "jovibe_logo.png".to_string(),
            font: "Roboto, sans-serif".to_string(),
            icon_set: "Material Icons".to_string(),
        },
        mock_data: BTreeMap::from([
            (
                "portfolio".to_string(),
                "6-8 sample projects with title, image, description, tech stack".to_string(),
            ),
            (
                "blog".to_string(),
                "3-5 sample posts with title, excerpt, date".to_string(),
            ),
            (
                "testimonials".to_string(),
                "3 sample testimonials with name, message, role".to_string(),
            ),
            (
                "contact_form".to_string(),
                "Mock form with name, email, message".to_string(),
            ),
        ]),
        special_effects: "smooth color transitions".to_string(),
    }
}
