//! Ordered, immutable store of keyword-triggered responses.

use std::collections::HashSet;
use std::path::Path;

use dgsbot_core::error::{DgsbotError, Result};
use serde::Deserialize;

use crate::builtin;
use crate::entry::KnowledgeEntry;

/// Immutable knowledge base: ordered entries plus the fallback set.
///
/// Entry order is significant — matching is first-entry-first-keyword wins,
/// so earlier entries take priority when several could match the same
/// utterance. Fields are private; once constructed the base never mutates.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    fallbacks: Vec<String>,
}

/// On-disk shape of an operator-authored knowledge table.
#[derive(Debug, Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    entries: Vec<KnowledgeEntry>,
    #[serde(default)]
    fallbacks: Vec<String>,
}

impl KnowledgeBase {
    /// Build a knowledge base from raw entries and fallbacks.
    ///
    /// Keywords are trimmed and lowercased. Fails on authoring mistakes:
    /// an entry without keywords, a blank keyword, a duplicate keyword
    /// within an entry, two entries sharing an identical keyword set, or an
    /// empty fallback list.
    pub fn new(entries: Vec<KnowledgeEntry>, fallbacks: Vec<String>) -> Result<Self> {
        let entries = normalize(entries)?;
        validate(&entries, &fallbacks)?;
        Ok(Self { entries, fallbacks })
    }

    /// Load the builtin DGS-Pay documentation table.
    pub fn load() -> Result<Self> {
        Self::new(builtin::entries(), builtin::fallbacks())
    }

    /// Load an operator-authored table from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let kb = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded knowledge base from {}: {} entries",
            path.display(),
            kb.len()
        );
        Ok(kb)
    }

    /// Parse a TOML knowledge table.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: KnowledgeFile = toml::from_str(content)
            .map_err(|e| DgsbotError::Knowledge(format!("Failed to parse knowledge table: {e}")))?;
        Self::new(file.entries, file.fallbacks)
    }

    /// Entries in authoring (priority) order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Generic responses served when nothing matches.
    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    /// Distinct topic labels in authoring order.
    pub fn topics(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.topic.as_str())
            .filter(|t| seen.insert(*t))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(mut entries: Vec<KnowledgeEntry>) -> Result<Vec<KnowledgeEntry>> {
    for entry in &mut entries {
        for keyword in &mut entry.keywords {
            let folded = keyword.trim().to_lowercase();
            if folded.is_empty() {
                return Err(DgsbotError::Knowledge(format!(
                    "Entry '{}' has a blank keyword",
                    entry.topic
                )));
            }
            *keyword = folded;
        }
    }
    Ok(entries)
}

fn validate(entries: &[KnowledgeEntry], fallbacks: &[String]) -> Result<()> {
    let mut keyword_sets: Vec<&[String]> = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.keywords.is_empty() {
            return Err(DgsbotError::Knowledge(format!(
                "Entry '{}' has no keywords",
                entry.topic
            )));
        }
        let mut seen = HashSet::new();
        for keyword in &entry.keywords {
            if !seen.insert(keyword.as_str()) {
                return Err(DgsbotError::Knowledge(format!(
                    "Entry '{}' repeats keyword '{keyword}'",
                    entry.topic
                )));
            }
        }
        // Identical keyword sets would make the later entry unreachable.
        if keyword_sets.iter().any(|set| *set == entry.keywords) {
            return Err(DgsbotError::Knowledge(format!(
                "Duplicate keyword set on entry '{}'",
                entry.topic
            )));
        }
        keyword_sets.push(&entry.keywords);
    }
    if fallbacks.is_empty() {
        return Err(DgsbotError::Knowledge(
            "Fallback set is empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(keywords: &[&str], topic: &str) -> KnowledgeEntry {
        KnowledgeEntry::new(keywords, "payload", topic)
    }

    fn fallbacks() -> Vec<String> {
        vec!["fallback".to_string()]
    }

    #[test]
    fn test_builtin_loads() {
        let kb = KnowledgeBase::load().unwrap();
        assert!(!kb.is_empty());
        assert!(kb.fallbacks().len() >= 2);
        assert!(kb.topics().contains(&"authentication"));
        assert!(kb.topics().contains(&"webhooks"));
    }

    #[test]
    fn test_keywords_normalized() {
        let kb = KnowledgeBase::new(
            vec![entry(&["  Hello ", "WORLD"], "greetings")],
            fallbacks(),
        )
        .unwrap();
        assert_eq!(kb.entries()[0].keywords, vec!["hello", "world"]);
    }

    #[test]
    fn test_empty_keyword_set_rejected() {
        let err = KnowledgeBase::new(vec![entry(&[], "broken")], fallbacks()).unwrap_err();
        assert!(err.to_string().contains("no keywords"));
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let err = KnowledgeBase::new(vec![entry(&["ok", "   "], "broken")], fallbacks())
            .unwrap_err();
        assert!(err.to_string().contains("blank keyword"));
    }

    #[test]
    fn test_duplicate_keyword_within_entry_rejected() {
        // Duplicates may appear only after case folding.
        let err = KnowledgeBase::new(vec![entry(&["token", "Token"], "auth")], fallbacks())
            .unwrap_err();
        assert!(err.to_string().contains("repeats keyword"));
    }

    #[test]
    fn test_identical_keyword_sets_rejected() {
        let err = KnowledgeBase::new(
            vec![entry(&["fee", "cost"], "fees"), entry(&["fee", "cost"], "pricing")],
            fallbacks(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate keyword set"));
    }

    #[test]
    fn test_empty_fallback_set_rejected() {
        let err = KnowledgeBase::new(vec![entry(&["fee"], "fees")], vec![]).unwrap_err();
        assert!(err.to_string().contains("Fallback set is empty"));
    }

    #[test]
    fn test_topics_deduplicated_in_order() {
        let kb = KnowledgeBase::new(
            vec![
                entry(&["a"], "auth"),
                entry(&["b"], "payments"),
                entry(&["c"], "auth"),
            ],
            fallbacks(),
        )
        .unwrap();
        assert_eq!(kb.topics(), vec!["auth", "payments"]);
    }

    #[test]
    fn test_from_toml_str() {
        let kb = KnowledgeBase::from_toml_str(
            r#"
            fallbacks = ["Out of scope."]

            [[entries]]
            topic = "greetings"
            keywords = ["Hello", "hi"]
            response = "Hello! Ask me about the API."
            "#,
        )
        .unwrap();
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.entries()[0].keywords, vec!["hello", "hi"]);
        assert_eq!(kb.fallbacks(), ["Out of scope.".to_string()]);
    }

    #[test]
    fn test_from_toml_str_invalid() {
        assert!(KnowledgeBase::from_toml_str("entries = 5").is_err());
    }
}
