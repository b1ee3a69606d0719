//! Lemma strategies, one per part-of-speech category.

use std::sync::Arc;

use log::debug;

use crate::analysis::lemma::{Stemmer, SuffixStemmer};
use crate::dictionary::Dictionary;

/// Trait for per-category lemma derivation.
///
/// Implementations must be total: every input yields a lemma.
pub trait LemmaStrategy: Send + Sync {
    /// Derive the lemma of `word`.
    fn lemma(&self, word: &str) -> String;

    /// Get the name of this strategy.
    fn name(&self) -> &'static str;
}

/// Returns the same sentinel for every word.
#[derive(Debug, Clone)]
pub struct ConstantLemma {
    value: String,
}

impl ConstantLemma {
    pub fn new<S: Into<String>>(value: S) -> Self {
        ConstantLemma {
            value: value.into(),
        }
    }
}

impl LemmaStrategy for ConstantLemma {
    fn lemma(&self, _word: &str) -> String {
        self.value.clone()
    }

    fn name(&self) -> &'static str {
        "constant"
    }
}

/// Returns the lowercased word.
#[derive(Debug, Clone, Default)]
pub struct PassthroughLemma;

impl PassthroughLemma {
    pub fn new() -> Self {
        PassthroughLemma
    }
}

impl LemmaStrategy for PassthroughLemma {
    fn lemma(&self, word: &str) -> String {
        word.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "passthrough"
    }
}

/// Dictionary lookup followed by suffix rules.
///
/// Steps, first match wins:
/// 1. the lowercased word is a dictionary key: its mapped form
/// 2. (optional) the lowercased word is a dictionary value: the word itself
/// 3. the stemmer's output, which is the word itself when no rule applies
pub struct DictionaryLemma {
    dictionary: Option<Arc<Dictionary>>,
    accept_known_base_forms: bool,
    stemmer: Arc<dyn Stemmer>,
}

impl std::fmt::Debug for DictionaryLemma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryLemma")
            .field("dictionary_entries", &self.dictionary.as_ref().map(|d| d.len()))
            .field("accept_known_base_forms", &self.accept_known_base_forms)
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl DictionaryLemma {
    pub fn new(dictionary: Option<Arc<Dictionary>>, stemmer: Arc<dyn Stemmer>) -> Self {
        DictionaryLemma {
            dictionary,
            accept_known_base_forms: false,
            stemmer,
        }
    }

    /// Treat words found among the dictionary's values as already lemmatized.
    pub fn accept_known_base_forms(mut self, accept: bool) -> Self {
        self.accept_known_base_forms = accept;
        self
    }

    /// Dictionary lookup only, no suffix rules.
    pub fn dictionary_only(dictionary: Arc<Dictionary>) -> Self {
        Self::new(Some(dictionary), Arc::new(SuffixStemmer::default()))
    }
}

impl LemmaStrategy for DictionaryLemma {
    fn lemma(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        if let Some(dictionary) = &self.dictionary {
            if let Some(base) = dictionary.singular_of(&lower) {
                debug!("dictionary hit: {lower} -> {base}");
                return base.to_string();
            }
            if self.accept_known_base_forms && dictionary.is_singular(&lower) {
                debug!("already a base form: {lower}");
                return lower;
            }
        }

        self.stemmer.stem(&lower)
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
