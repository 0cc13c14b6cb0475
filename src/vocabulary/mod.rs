//! Skill vocabulary loading and validation.
//!
//! A vocabulary is the closed set of skills the extractor can recognize. Each entry
//! carries a stable id, a canonical display name, a category, and optional alias
//! surface forms. Vocabularies are immutable once loaded and shared behind an `Arc`.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::VocabularyError;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Skill table compiled into the crate, used when no vocabulary path is configured.
const BUILTIN_SKILLS: &str = include_str!("../data/skills.json");

/// Category of a vocabulary entry.
///
/// Only `hard` and `soft` entries survive extraction. `other` entries stay in the
/// vocabulary for curation purposes but never appear in extractor output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Hard,
    Soft,
    Other,
}

impl SkillCategory {
    /// Whether entries in this category survive extraction.
    pub fn is_extractable(&self) -> bool {
        matches!(self, Self::Hard | Self::Soft)
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hard => write!(f, "hard"),
            Self::Soft => write!(f, "soft"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// One vocabulary entry: a canonical skill plus the surface forms that resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl SkillEntry {
    /// All surface forms that fire for this entry, canonical name first.
    pub fn surface_forms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Immutable, validated skill table.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<SkillEntry>,
}

impl SkillVocabulary {
    /// Validates and assembles a vocabulary.
    ///
    /// Ids must be unique, and every surface form (name or alias, case-folded) must
    /// be unique across the whole table so a hit always resolves to exactly one entry.
    pub fn from_entries(entries: Vec<SkillEntry>) -> Result<Self, VocabularyError> {
        if entries.is_empty() {
            return Err(VocabularyError::Empty);
        }

        let mut seen_ids: HashSet<&str> = HashSet::new();
        let mut seen_surfaces: HashSet<String> = HashSet::new();
        for entry in &entries {
            if !seen_ids.insert(entry.id.as_str()) {
                return Err(VocabularyError::DuplicateId {
                    id: entry.id.clone(),
                });
            }
            for surface in entry.surface_forms() {
                let folded = surface.trim().to_lowercase();
                if folded.is_empty() {
                    return Err(VocabularyError::BlankSurface {
                        id: entry.id.clone(),
                    });
                }
                if !seen_surfaces.insert(folded.clone()) {
                    return Err(VocabularyError::DuplicateSurface {
                        surface: folded,
                        id: entry.id.clone(),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Parses a vocabulary from its JSON representation: an array of entries.
    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        let entries: Vec<SkillEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Loads and validates a vocabulary file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| VocabularyError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let vocabulary = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            entries = vocabulary.len(),
            "Loaded skill vocabulary"
        );
        Ok(vocabulary)
    }

    /// The vocabulary compiled into the crate.
    ///
    /// Only fails if the shipped table is malformed, which `from_entries` would
    /// surface on the first call.
    pub fn builtin() -> Result<Self, VocabularyError> {
        Self::from_json(BUILTIN_SKILLS)
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&SkillEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
