use std::fs;
use std::path::Path;

use serde::Serialize;
use utoipa::ToSchema;

use super::error::RadiantError;

/// A meteor shower radiant, e.g. `PER` / `Perseids`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Radiant {
    pub code: String,
    pub name: String,
}

/// Radiant codes in the order they appear in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadiantCatalog {
    radiants: Vec<Radiant>,
}

impl RadiantCatalog {
    /// Load a `code:name` file from disk
    pub fn load(path: &Path) -> Result<Self, RadiantError> {
        if !path.exists() {
            return Err(RadiantError::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let catalog = Self::parse(&content);
        log::info!(
            "Loaded {} radiants from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse `code:name` lines. Lines without a colon or with an empty code
    /// are skipped; a repeated code takes the later name at the earlier position.
    pub fn parse(content: &str) -> Self {
        let mut catalog = RadiantCatalog::default();

        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((code, name)) = line.split_once(':') else {
                log::warn!("Skipping radiant line {}: missing ':'", lineno + 1);
                continue;
            };
            let (code, name) = (code.trim(), name.trim());
            if code.is_empty() {
                log::warn!("Skipping radiant line {}: empty code", lineno + 1);
                continue;
            }

            catalog.insert(code, name);
        }

        catalog
    }

    fn insert(&mut self, code: &str, name: &str) {
        match self.radiants.iter_mut().find(|r| r.code == code) {
            Some(existing) => existing.name = name.to_string(),
            None => self.radiants.push(Radiant {
                code: code.to_string(),
                name: name.to_string(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Radiant> {
        self.radiants.iter()
    }

    pub fn len(&self) -> usize {
        self.radiants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radiants.is_empty()
    }
}
