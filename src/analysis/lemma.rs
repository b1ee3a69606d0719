//! Lemma derivation conditioned on part of speech.
//!
//! A [`LemmaPolicy`] owns a dispatch table from [`PosCategory`] to a
//! [`LemmaStrategy`]. Each strategy is a fallback chain that always ends in
//! "return the lowercased word", so lemma derivation never fails:
//!
//! ```text
//! PRON        → "pron"
//! NUM         → "num"
//! NOUN        → plural dictionary → known singular → plural suffix rules → word
//! VERB, AUX   → verb dictionary → verb suffix rules → word
//! otherwise   → word
//! ```
//!
//! [`PosCategory`]: crate::analysis::token::PosCategory

use crate::config::SuffixRule;

pub mod policy;
pub mod strategy;

pub use policy::{LemmaPolicy, LemmaPolicyBuilder};
pub use strategy::{ConstantLemma, DictionaryLemma, LemmaStrategy, PassthroughLemma};

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a lowercased word, returning it unchanged when no rule applies.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Stemmer driven by an ordered list of suffix rules.
///
/// Rules are tried in the order given; the first one that matches and leaves
/// a non-empty stem wins.
#[derive(Debug, Clone, Default)]
pub struct SuffixStemmer {
    rules: Vec<SuffixRule>,
}

impl SuffixStemmer {
    pub fn new(rules: Vec<SuffixRule>) -> Self {
        SuffixStemmer { rules }
    }

    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(word))
            .unwrap_or_else(|| word.to_string())
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_stemmer_uses_rule_order() {
        let stemmer = SuffixStemmer::new(vec![SuffixRule::strip("i"), SuffixRule::strip("ai")]);
        assert_eq!(stemmer.stem("malamai"), "malama");

        let stemmer = SuffixStemmer::new(vec![SuffixRule::strip("ai"), SuffixRule::strip("i")]);
        assert_eq!(stemmer.stem("malamai"), "malam");
    }

    #[test]
    fn test_suffix_stemmer_skips_rules_leaving_empty_stem() {
        let stemmer = SuffixStemmer::new(vec![SuffixRule::strip("ai"), SuffixRule::strip("i")]);
        assert_eq!(stemmer.stem("ai"), "a");
    }

    #[test]
    fn test_suffix_stemmer_without_rules() {
        let stemmer = SuffixStemmer::default();
        assert_eq!(stemmer.stem("karatu"), "karatu");
        assert_eq!(stemmer.stem(""), "");
        assert_eq!(stemmer.name(), "suffix");
    }
}
