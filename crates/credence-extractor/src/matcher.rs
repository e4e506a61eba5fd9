//! Multi-phrase matcher over annotated tokens

use crate::lexicon::{PhraseCategory, PhraseLexicon};
use credence_domain::Token;
use std::collections::HashMap;

/// Phrase occurrences per lexicon category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchCounts {
    /// Evidence-phrase occurrences
    pub evidence: usize,
    /// Opinion-phrase occurrences
    pub opinion: usize,
}

/// Case-insensitive phrase matcher aligned to token boundaries
///
/// Phrases are indexed by their first word. Every start position is tried, so
/// repeated and overlapping phrases each count.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    index: HashMap<String, Vec<(Vec<String>, PhraseCategory)>>,
}

impl PhraseMatcher {
    /// Build the matcher from a lexicon
    pub fn new(lexicon: &PhraseLexicon) -> Self {
        let mut index: HashMap<String, Vec<(Vec<String>, PhraseCategory)>> = HashMap::new();

        for category in [PhraseCategory::Evidence, PhraseCategory::Opinion] {
            for phrase in lexicon.phrases(category) {
                if let Some(first) = phrase.first() {
                    index
                        .entry(first.clone())
                        .or_default()
                        .push((phrase.clone(), category));
                }
            }
        }

        Self { index }
    }

    /// Count phrase occurrences in a token stream
    pub fn count(&self, tokens: &[Token]) -> MatchCounts {
        let words: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
        self.count_words(&words)
    }

    /// Count phrase occurrences in lower-cased words
    pub fn count_words(&self, words: &[String]) -> MatchCounts {
        let mut counts = MatchCounts::default();

        for (start, word) in words.iter().enumerate() {
            let Some(candidates) = self.index.get(word) else {
                continue;
            };

            for (phrase, category) in candidates {
                let end = start + phrase.len();
                if end <= words.len() && words[start..end] == phrase[..] {
                    match category {
                        PhraseCategory::Evidence => counts.evidence += 1,
                        PhraseCategory::Opinion => counts.opinion += 1,
                    }
                }
            }
        }

        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LexiconConfig;

    fn matcher_for(evidence: &[&str], opinion: &[&str]) -> PhraseMatcher {
        let config = LexiconConfig {
            evidence_phrases: evidence.iter().map(|s| s.to_string()).collect(),
            opinion_phrases: opinion.iter().map(|s| s.to_string()).collect(),
            accusation_terms: vec![],
        };
        PhraseMatcher::new(&PhraseLexicon::from_config(&config).unwrap())
    }

    fn tokens(text: &str) -> Vec<Token> {
        text.split_whitespace().map(Token::new).collect()
    }

    #[test]
    fn test_repeated_phrase_counts_twice() {
        let matcher = matcher_for(&["text message"], &["maybe"]);
        let counts = matcher.count(&tokens("a text message then another Text Message"));
        assert_eq!(counts.evidence, 2);
        assert_eq!(counts.opinion, 0);
    }

    #[test]
    fn test_no_match_inside_larger_word() {
        let matcher = matcher_for(&["photo"], &["maybe"]);
        let counts = matcher.count(&tokens("photography photos photo"));
        assert_eq!(counts.evidence, 1);
    }

    #[test]
    fn test_overlapping_phrases_count_independently() {
        let matcher = matcher_for(&["police report", "report number"], &["i think"]);
        let counts = matcher.count(&tokens("the police report number is on file"));
        assert_eq!(counts.evidence, 2);
    }

    #[test]
    fn test_both_categories_in_one_text() {
        let matcher = matcher_for(&["receipt"], &["i think", "probably"]);
        let counts = matcher.count(&tokens("I think the receipt is probably lost"));
        assert_eq!(counts, MatchCounts { evidence: 1, opinion: 2 });
    }

    #[test]
    fn test_phrase_at_end_of_stream() {
        let matcher = matcher_for(&["bank statement"], &["maybe"]);
        assert_eq!(matcher.count(&tokens("see my bank")).evidence, 0);
        assert_eq!(matcher.count(&tokens("see my bank statement")).evidence, 1);
    }

    #[test]
    fn test_empty_stream() {
        let matcher = matcher_for(&["receipt"], &["maybe"]);
        assert_eq!(matcher.count(&[]), MatchCounts::default());
    }
}
