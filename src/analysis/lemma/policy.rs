//! The part-of-speech dispatch table.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use hausa_lemmatizer::analysis::lemma::LemmaPolicy;
//! use hausa_lemmatizer::dictionary::Dictionary;
//!
//! let policy = LemmaPolicy::builder()
//!     .plural_dictionary(Arc::new(Dictionary::from_entries([("yara", "yaro")])))
//!     .build();
//!
//! assert_eq!(policy.lemma_for("Yara", "NOUN"), "yaro");
//! assert_eq!(policy.lemma_for("yaro", "NOUN"), "yaro");
//! assert_eq!(policy.lemma_for("Shi", "PRON"), "pron");
//! assert_eq!(policy.lemma_for("Biyu", "NUM"), "num");
//! assert_eq!(policy.lemma_for("Kano", "PROPN"), "kano");
//! ```

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::lemma::strategy::{
    ConstantLemma, DictionaryLemma, LemmaStrategy, PassthroughLemma,
};
use crate::analysis::lemma::SuffixStemmer;
use crate::analysis::token::PosCategory;
use crate::config::{DEFAULT_PUNCTUATION_LABEL, LemmatizerConfig, SuffixRule};
use crate::dictionary::Dictionary;

/// Lemma sentinel for pronouns.
pub const PRONOUN_LEMMA: &str = "pron";

/// Lemma sentinel for numerals.
pub const NUMERAL_LEMMA: &str = "num";

/// Maps each part-of-speech category to its lemma strategy.
///
/// Categories without an entry use the fallback strategy, which returns the
/// lowercased word. The policy is read-only once built and can be shared
/// between threads.
#[derive(Clone)]
pub struct LemmaPolicy {
    strategies: AHashMap<PosCategory, Arc<dyn LemmaStrategy>>,
    fallback: Arc<dyn LemmaStrategy>,
    punctuation_label: String,
}

impl std::fmt::Debug for LemmaPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut table: Vec<_> = self
            .strategies
            .iter()
            .map(|(category, strategy)| (*category, strategy.name()))
            .collect();
        table.sort_by_key(|(category, _)| PosCategory::ALL.iter().position(|c| c == category));

        f.debug_struct("LemmaPolicy")
            .field("strategies", &table)
            .field("fallback", &self.fallback.name())
            .field("punctuation_label", &self.punctuation_label)
            .finish()
    }
}

impl Default for LemmaPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl LemmaPolicy {
    /// Policy without dictionaries or suffix rules.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LemmaPolicyBuilder {
        LemmaPolicyBuilder::default()
    }

    /// Build a policy from configuration.
    ///
    /// Dictionary files that cannot be read degrade to empty dictionaries
    /// with a logged warning.
    pub fn from_config(config: &LemmatizerConfig) -> Self {
        let mut builder = Self::builder()
            .punctuation_label(config.punctuation_label.clone())
            .plural_suffixes(config.plural_suffixes.clone())
            .verb_suffixes(config.verb_suffixes.clone());

        if let Some(path) = &config.plural_dictionary {
            builder = builder.plural_dictionary(Arc::new(Dictionary::load(path)));
        }
        if let Some(path) = &config.verb_dictionary {
            builder = builder.verb_dictionary(Arc::new(Dictionary::load(path)));
        }

        builder.build()
    }

    /// Lemma of `word` given its part-of-speech label.
    ///
    /// Only the primary component of a composite label is considered.
    pub fn lemma_for(&self, word: &str, pos: &str) -> String {
        self.strategy_for(self.category_of(pos)).lemma(word)
    }

    /// Category `pos` dispatches to under this policy's punctuation label.
    pub fn category_of(&self, pos: &str) -> PosCategory {
        PosCategory::classify(pos, &self.punctuation_label)
    }

    pub fn punctuation_label(&self) -> &str {
        &self.punctuation_label
    }

    /// Strategy used for `category`.
    pub fn strategy_for(&self, category: PosCategory) -> &Arc<dyn LemmaStrategy> {
        self.strategies.get(&category).unwrap_or(&self.fallback)
    }
}

/// Builder for [`LemmaPolicy`].
pub struct LemmaPolicyBuilder {
    plural_dictionary: Option<Arc<Dictionary>>,
    verb_dictionary: Option<Arc<Dictionary>>,
    plural_suffixes: Vec<SuffixRule>,
    verb_suffixes: Vec<SuffixRule>,
    punctuation_label: String,
    overrides: Vec<(PosCategory, Arc<dyn LemmaStrategy>)>,
}

impl Default for LemmaPolicyBuilder {
    fn default() -> Self {
        LemmaPolicyBuilder {
            plural_dictionary: None,
            verb_dictionary: None,
            plural_suffixes: Vec::new(),
            verb_suffixes: Vec::new(),
            punctuation_label: DEFAULT_PUNCTUATION_LABEL.to_string(),
            overrides: Vec::new(),
        }
    }
}

impl LemmaPolicyBuilder {
    pub fn plural_dictionary(mut self, dictionary: Arc<Dictionary>) -> Self {
        self.plural_dictionary = Some(dictionary);
        self
    }

    pub fn verb_dictionary(mut self, dictionary: Arc<Dictionary>) -> Self {
        self.verb_dictionary = Some(dictionary);
        self
    }

    pub fn plural_suffixes(mut self, rules: Vec<SuffixRule>) -> Self {
        self.plural_suffixes = rules;
        self
    }

    pub fn verb_suffixes(mut self, rules: Vec<SuffixRule>) -> Self {
        self.verb_suffixes = rules;
        self
    }

    /// Set the label that dispatches to [`PosCategory::Punctuation`].
    pub fn punctuation_label<S: Into<String>>(mut self, label: S) -> Self {
        self.punctuation_label = label.into();
        self
    }

    /// Replace the strategy of one category.
    pub fn strategy(mut self, category: PosCategory, strategy: Arc<dyn LemmaStrategy>) -> Self {
        self.overrides.push((category, strategy));
        self
    }

    pub fn build(self) -> LemmaPolicy {
        let noun: Arc<dyn LemmaStrategy> = Arc::new(
            DictionaryLemma::new(
                self.plural_dictionary,
                Arc::new(SuffixStemmer::new(self.plural_suffixes)),
            )
            .accept_known_base_forms(true),
        );
        let verb: Arc<dyn LemmaStrategy> = Arc::new(DictionaryLemma::new(
            self.verb_dictionary,
            Arc::new(SuffixStemmer::new(self.verb_suffixes)),
        ));

        let mut strategies: AHashMap<PosCategory, Arc<dyn LemmaStrategy>> = AHashMap::new();
        strategies.insert(PosCategory::Pronoun, Arc::new(ConstantLemma::new(PRONOUN_LEMMA)));
        strategies.insert(PosCategory::Numeral, Arc::new(ConstantLemma::new(NUMERAL_LEMMA)));
        strategies.insert(PosCategory::Noun, noun);
        strategies.insert(PosCategory::Verb, Arc::clone(&verb));
        strategies.insert(PosCategory::Auxiliary, verb);

        for (category, strategy) in self.overrides {
            strategies.insert(category, strategy);
        }

        LemmaPolicy {
            strategies,
            fallback: Arc::new(PassthroughLemma::new()),
            punctuation_label: self.punctuation_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy_with_dictionary() -> LemmaPolicy {
        LemmaPolicy::builder()
            .plural_dictionary(Arc::new(Dictionary::from_entries([
                ("yara", "yaro"),
                ("mutane", "mutum"),
            ])))
            .build()
    }

    #[test]
    fn test_sentinels() {
        let policy = LemmaPolicy::new();
        assert_eq!(policy.lemma_for("Ni", "PRON"), "pron");
        assert_eq!(policy.lemma_for("Uku", "NUM"), "num");
    }

    #[test]
    fn test_noun_dictionary_round_trip() {
        let policy = policy_with_dictionary();
        assert_eq!(policy.lemma_for("Yara", "NOUN"), "yaro");
        assert_eq!(policy.lemma_for("yaro", "NOUN"), "yaro");
        assert_eq!(policy.lemma_for("MUTANE", "NOUN"), "mutum");
        assert_eq!(policy.lemma_for("mutum", "NOUN"), "mutum");
    }

    #[test]
    fn test_plural_dictionary_is_noun_only() {
        let policy = policy_with_dictionary();
        assert_eq!(policy.lemma_for("Yara", "VERB"), "yara");
        assert_eq!(policy.lemma_for("Yara", "ADJ"), "yara");
    }

    #[test]
    fn test_verb_and_aux_share_rules() {
        let policy = LemmaPolicy::builder()
            .verb_dictionary(Arc::new(Dictionary::from_entries([("suna", "na")])))
            .verb_suffixes(vec![SuffixRule::rewrite("ce", "t")])
            .build();

        assert_eq!(policy.lemma_for("suna", "AUX"), "na");
        assert_eq!(policy.lemma_for("suna", "VERB"), "na");
        assert_eq!(policy.lemma_for("Kace", "VERB"), "kat");
        assert_eq!(policy.lemma_for("Kace", "AUX"), "kat");
        assert_eq!(policy.lemma_for("Kace", "NOUN"), "kace");
    }

    #[test]
    fn test_noun_suffix_rules() {
        let policy = LemmaPolicy::builder()
            .plural_suffixes(vec![SuffixRule::strip("ai")])
            .build();
        assert_eq!(policy.lemma_for("Malamai", "NOUN"), "malam");
        assert_eq!(policy.lemma_for("ai", "NOUN"), "ai");
    }

    #[test]
    fn test_fallback_lowercases() {
        let policy = LemmaPolicy::new();
        assert_eq!(policy.lemma_for("Kano", "PROPN"), "kano");
        assert_eq!(policy.lemma_for("?", "PUNCT"), "?");
        assert_eq!(policy.lemma_for("", ""), "");
        assert_eq!(policy.lemma_for("ƘASA", "X"), "ƙasa");
    }

    #[test]
    fn test_composite_label_uses_primary_component() {
        let policy = policy_with_dictionary();
        assert_eq!(policy.lemma_for("Yara", "NOUN+ADP"), "yaro");
        assert_eq!(policy.lemma_for("Shi", "PRON+NOUN"), "pron");
    }

    #[test]
    fn test_strategy_override() {
        let policy = LemmaPolicy::builder()
            .strategy(PosCategory::Pronoun, Arc::new(PassthroughLemma::new()))
            .strategy(PosCategory::Other, Arc::new(ConstantLemma::new("x")))
            .build();

        assert_eq!(policy.lemma_for("Shi", "PRON"), "shi");
        assert_eq!(policy.lemma_for("Kano", "PROPN"), "x");
        assert_eq!(policy.strategy_for(PosCategory::Punctuation).name(), "passthrough");
    }

    #[test]
    fn test_punctuation_override_follows_configured_label() {
        let policy = LemmaPolicy::builder()
            .punctuation_label("P")
            .strategy(PosCategory::Punctuation, Arc::new(ConstantLemma::new("punct")))
            .build();

        assert_eq!(policy.category_of("P"), PosCategory::Punctuation);
        assert_eq!(policy.lemma_for(".", "P"), "punct");
        assert_eq!(policy.lemma_for("?", "PUNCT"), "?");
    }

    #[test]
    fn test_from_config_carries_punctuation_label() {
        let config = LemmatizerConfig {
            punctuation_label: "P".to_string(),
            ..Default::default()
        };
        let policy = LemmaPolicy::from_config(&config);
        assert_eq!(policy.punctuation_label(), "P");
        assert_eq!(policy.category_of("P+NOUN"), PosCategory::Punctuation);
    }

    #[test]
    fn test_lemma_for_is_total() {
        let policy = policy_with_dictionary();
        let labels = ["PRON", "NUM", "NOUN", "VERB", "AUX", "PUNCT", "ADP", "", "+", "NOUN+"];
        let words = ["", " ", "Yara", "ɗan", "123", "...", "\u{2581}"];

        for label in labels {
            for word in words {
                let _ = policy.lemma_for(word, label);
            }
        }
    }
}
