//! Deterministic skill extraction over free text.
//!
//! Extraction scans input with a case-insensitive Aho-Corasick automaton built from
//! every vocabulary surface form, keeps leftmost-longest hits that sit on word
//! boundaries, resolves each hit to its canonical entry, and drops the `other`
//! category. Output order is first occurrence in the input, duplicates removed.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ExtractionError;

use std::collections::HashSet;
use std::sync::Arc;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use serde::{Deserialize, Serialize};

use crate::vocabulary::SkillVocabulary;

/// An ordered, duplicate-free collection of canonical skill names.
///
/// Order is first appearance in the source text. Set operations order their output
/// by the reference side, which keeps downstream reports reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedSkillSet {
    names: Vec<String>,
}

impl ExtractedSkillSet {
    /// Builds a set from canonical names, dropping later duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut ordered = Vec::new();
        for name in names {
            let name = name.into();
            if seen.insert(name.clone()) {
                ordered.push(name);
            }
        }
        Self { names: ordered }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    /// Names present in both sets, ordered by the reference side.
    pub fn intersect(&self, reference: &ExtractedSkillSet) -> Vec<String> {
        let own: HashSet<&str> = self.names.iter().map(String::as_str).collect();
        reference
            .names
            .iter()
            .filter(|name| own.contains(name.as_str()))
            .cloned()
            .collect()
    }

    /// Reference names absent from this set, ordered by the reference side.
    pub fn missing_from(&self, reference: &ExtractedSkillSet) -> Vec<String> {
        let own: HashSet<&str> = self.names.iter().map(String::as_str).collect();
        reference
            .names
            .iter()
            .filter(|name| !own.contains(name.as_str()))
            .cloned()
            .collect()
    }
}

/// Vocabulary-driven extractor. Cheap to share, internally immutable.
pub struct SkillExtractor {
    vocabulary: Arc<SkillVocabulary>,
    automaton: AhoCorasick,
    pattern_entries: Vec<usize>,
}

impl std::fmt::Debug for SkillExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillExtractor")
            .field("vocabulary_entries", &self.vocabulary.len())
            .field("patterns", &self.pattern_entries.len())
            .finish()
    }
}

impl SkillExtractor {
    /// Compiles the automaton over every surface form in the vocabulary.
    pub fn new(vocabulary: Arc<SkillVocabulary>) -> Result<Self, ExtractionError> {
        let mut patterns: Vec<String> = Vec::new();
        let mut pattern_entries: Vec<usize> = Vec::new();
        for (entry_idx, entry) in vocabulary.entries().iter().enumerate() {
            for surface in entry.surface_forms() {
                patterns.push(surface.to_lowercase());
                pattern_entries.push(entry_idx);
            }
        }

        let automaton = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| ExtractionError::AutomatonBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            vocabulary,
            automaton,
            pattern_entries,
        })
    }

    /// Extracts canonical skills from `text`.
    ///
    /// Deterministic for a fixed vocabulary: the same input always yields the same
    /// names in the same order, and re-extracting the joined output is a fixpoint.
    pub fn extract(&self, text: &str) -> ExtractedSkillSet {
        let mut seen: HashSet<usize> = HashSet::new();
        let mut names: Vec<String> = Vec::new();

        for hit in self.automaton.find_iter(text) {
            if !is_word_bounded(text, hit.start(), hit.end()) {
                continue;
            }

            // Pattern ids come from the automaton built above, so the table lookup
            // cannot be out of range.
            let entry_idx = self.pattern_entries[hit.pattern().as_usize()];
            let entry = &self.vocabulary.entries()[entry_idx];
            if !entry.category.is_extractable() {
                continue;
            }
            if seen.insert(entry_idx) {
                names.push(entry.name.clone());
            }
        }

        ExtractedSkillSet { names }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_entries.len()
    }
}

/// A hit only counts when it is not embedded in a larger alphanumeric token, so
/// `java` never fires inside `javascript`.
fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .is_none_or(|c| !c.is_alphanumeric());
    before_ok && after_ok
}
