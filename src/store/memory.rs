use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use super::Store;
use crate::models::category::Category;
use crate::models::certificate::Certificate;
use crate::models::project::Project;
use crate::models::skill::Skill;

/// Compiled-in copy of the default data file.
const EMBEDDED_DATA: &str = include_str!("../../website/data/portfolio.json");

/// In-memory store backed by a single JSON or TOML data file.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct MemoryStore {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    skills: Vec<Skill>,
    #[serde(default)]
    certificates: Vec<Certificate>,
}

impl MemoryStore {
    pub fn new(
        categories: Vec<Category>,
        projects: Vec<Project>,
        skills: Vec<Skill>,
        certificates: Vec<Certificate>,
    ) -> Result<Self, String> {
        let store = MemoryStore {
            categories,
            projects,
            skills,
            certificates,
        };
        store.validate()?;
        Ok(store)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, String> {
        let store: MemoryStore =
            serde_json::from_str(raw).map_err(|e| format!("invalid data JSON: {}", e))?;
        store.validate()?;
        Ok(store)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, String> {
        let store: MemoryStore =
            toml::from_str(raw).map_err(|e| format!("invalid data TOML: {}", e))?;
        store.validate()?;
        Ok(store)
    }

    /// The data shipped with the binary.
    pub fn embedded() -> Result<Self, String> {
        Self::from_json_str(EMBEDDED_DATA)
    }

    /// Load from `path`, picking the format by extension.
    pub fn load(path: &Path) -> Result<Self, String> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        let store = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&raw)?,
            _ => Self::from_json_str(&raw)?,
        };
        info!(
            "Loaded {} projects, {} skills, {} certificates from {}",
            store.projects.len(),
            store.skills.len(),
            store.certificates.len(),
            path.display()
        );
        Ok(store)
    }

    /// Load from `path` when it exists, otherwise fall back to the embedded data.
    pub fn load_or_embedded(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(
                "Data file {} not found, using embedded portfolio data",
                path.display()
            );
            Self::embedded()
        }
    }

    fn validate(&self) -> Result<(), String> {
        let mut tokens = HashSet::new();
        for cat in &self.categories {
            cat.validate()?;
            if !tokens.insert(cat.token.as_str()) {
                return Err(format!("duplicate category token '{}'", cat.token));
            }
        }

        let mut ids = HashSet::new();
        for project in &self.projects {
            if project.id.trim().is_empty() {
                return Err(format!("project '{}' has an empty id", project.title));
            }
            if !ids.insert(project.id.as_str()) {
                return Err(format!("duplicate project id '{}'", project.id));
            }
            if !tokens.contains(project.category.as_str()) {
                return Err(format!(
                    "project '{}' uses undeclared category '{}'",
                    project.id, project.category
                ));
            }
        }

        let mut cert_ids = HashSet::new();
        for cert in &self.certificates {
            if !cert_ids.insert(cert.id.as_str()) {
                return Err(format!("duplicate certificate id '{}'", cert.id));
            }
        }

        Ok(())
    }
}

impl Store for MemoryStore {
    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn skills(&self) -> &[Skill] {
        &self.skills
    }

    fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }
}
