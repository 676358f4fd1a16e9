//! # dgsbot-matcher
//!
//! Pure keyword matcher over a [`KnowledgeBase`].
//!
//! Matching is case-insensitive substring containment in authoring order:
//! first entry, first keyword wins. No scoring, no longest-match preference,
//! no tokenization. Substring semantics are deliberate — "test" matches
//! "testing" and "contest", "fee" matches "coffee" — trading precision for
//! predictability.

use dgsbot_knowledge::{KnowledgeBase, KnowledgeEntry};
use rand::Rng;

/// Stateless responder: resolves an utterance to a response payload.
///
/// Holds no interior mutability, so a single `Matcher` can serve any number
/// of callers concurrently without locking. Every call is synchronous and
/// total; the only nondeterminism is the fallback pick, drawn from an
/// injected random source.
#[derive(Debug, Clone)]
pub struct Matcher {
    kb: KnowledgeBase,
}

impl Matcher {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb }
    }

    /// The knowledge base backing this matcher.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Returns the first entry whose keywords the utterance contains, if any.
    pub fn find(&self, utterance: &str) -> Option<&KnowledgeEntry> {
        let folded = utterance.to_lowercase();
        self.kb
            .entries()
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| folded.contains(k.trim())))
    }

    /// Resolve a response, drawing any fallback pick from `rng`.
    ///
    /// Total over all inputs: an unmatched utterance (including the empty
    /// string) yields a pseudo-random member of the fallback set, with no
    /// guarantee against immediate repetition.
    pub fn respond_with<R: Rng + ?Sized>(&self, utterance: &str, rng: &mut R) -> &str {
        if let Some(entry) = self.find(utterance) {
            return &entry.response;
        }
        let fallbacks = self.kb.fallbacks();
        &fallbacks[rng.gen_range(0..fallbacks.len())]
    }

    /// Resolve a response using the thread-local RNG for fallback picks.
    pub fn respond(&self, utterance: &str) -> &str {
        self.respond_with(utterance, &mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dgsbot_knowledge::KnowledgeEntry;
    use rand::rngs::mock::StepRng;

    fn builtin() -> Matcher {
        Matcher::new(KnowledgeBase::load().unwrap())
    }

    fn fixture() -> Matcher {
        let kb = KnowledgeBase::new(
            vec![
                KnowledgeEntry::new(&["pay"], "general payments answer", "payments"),
                KnowledgeEntry::new(&["payout"], "payout answer", "payouts"),
            ],
            vec!["fallback one".into(), "fallback two".into()],
        )
        .unwrap();
        Matcher::new(kb)
    }

    #[test]
    fn test_every_builtin_keyword_resolves_to_its_own_entry() {
        // Entry ordering in the builtin table guarantees this; a reordering
        // that shadows a keyword behind an earlier entry fails here.
        let matcher = builtin();
        for entry in matcher.knowledge().entries() {
            for keyword in &entry.keywords {
                assert_eq!(
                    matcher.respond(keyword),
                    entry.response,
                    "keyword '{keyword}' did not resolve to its entry '{}'",
                    entry.topic
                );
            }
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let matcher = builtin();
        assert_eq!(
            matcher.respond("AUTHENTICATION"),
            matcher.respond("authentication")
        );
    }

    #[test]
    fn test_first_entry_wins_on_overlap() {
        // "payout" contains "pay", and the "pay" entry is authored first.
        let matcher = fixture();
        assert_eq!(matcher.respond("payout"), "general payments answer");
    }

    #[test]
    fn test_substring_containment_is_preserved() {
        // Imprecise by design: "coffee" contains the "fee" trigger.
        let matcher = builtin();
        let entry = matcher.find("I spilled coffee on my keyboard").unwrap();
        assert_eq!(entry.topic, "general");
        assert!(entry.response.contains("Transaction Fees"));
    }

    #[test]
    fn test_unmatched_utterance_gets_a_fallback() {
        let matcher = builtin();
        let reply = matcher.respond("what is the weather").to_string();
        assert!(matcher.knowledge().fallbacks().contains(&reply));
    }

    #[test]
    fn test_empty_utterance_gets_a_fallback() {
        let matcher = builtin();
        let reply = matcher.respond("").to_string();
        assert!(matcher.knowledge().fallbacks().contains(&reply));
    }

    #[test]
    fn test_fallback_pick_follows_injected_rng() {
        let matcher = fixture();
        // A constant zero source always selects the first fallback.
        let mut rng = StepRng::new(0, 0);
        assert_eq!(matcher.respond_with("zzz", &mut rng), "fallback one");
        assert_eq!(matcher.respond_with("zzz", &mut rng), "fallback one");
    }

    #[test]
    fn test_matched_responses_are_deterministic() {
        let matcher = builtin();
        let first = matcher.respond("how do I check my token").to_string();
        for _ in 0..5 {
            assert_eq!(matcher.respond("how do I check my token"), first);
        }
    }

    #[test]
    fn test_bearer_token_question_hits_authentication() {
        let matcher = builtin();
        let reply = matcher.respond("How do I get a bearer token?");
        assert!(reply.contains("Authorization: Bearer"));
        assert_eq!(
            matcher.find("How do I get a bearer token?").unwrap().topic,
            "authentication"
        );
    }

    #[test]
    fn test_mobile_money_question_hits_mobile_money() {
        let matcher = builtin();
        let entry = matcher.find("I want to send mobile money to MTN").unwrap();
        assert_eq!(entry.topic, "mobile-money");
        assert!(entry.response.contains("PAYIN_MOBILE"));
    }

    #[test]
    fn test_find_exposes_topic_for_tooling() {
        let matcher = builtin();
        assert_eq!(matcher.find("webhook secret?").unwrap().topic, "webhooks");
        assert!(matcher.find("completely unrelated").is_none());
    }
}
