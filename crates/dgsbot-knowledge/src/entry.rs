//! A single knowledge base record.

use serde::{Deserialize, Serialize};

/// One keyword-triggered documentation snippet.
///
/// `keywords` are ordered lowercase trigger phrases; the first one contained
/// in a user utterance selects this entry. `response` is an opaque formatted
/// payload (code fences, bold markers, line breaks) interpreted only by the
/// rendering layer. `topic` is an informational label and never participates
/// in matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub keywords: Vec<String>,
    pub response: String,
    pub topic: String,
}

impl KnowledgeEntry {
    pub fn new(keywords: &[&str], response: &str, topic: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            response: response.to_string(),
            topic: topic.to_string(),
        }
    }
}
