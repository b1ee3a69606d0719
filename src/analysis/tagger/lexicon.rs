//! Rule-based tagger driven by a word list.
//!
//! Text is split on Unicode word boundaries (UAX #29). Whitespace segments
//! are skipped, segments without any alphanumeric character are labelled as
//! punctuation, and every other segment is looked up (lowercased) in the
//! lexicon, falling back to a default label.
//!
//! # Examples
//!
//! ```
//! use hausa_lemmatizer::analysis::tagger::{LexiconTagger, Tagger};
//!
//! let tagger = LexiconTagger::new("NOUN")
//!     .with_word("suna", "AUX")
//!     .with_word("a", "ADP");
//!
//! let spans = tagger.tag("Yara suna wasa a filin wasa.").unwrap();
//! let labels: Vec<_> = spans.iter().map(|s| s.label.as_str()).collect();
//! assert_eq!(labels, vec!["NOUN", "AUX", "NOUN", "ADP", "NOUN", "NOUN", "PUNCT"]);
//! ```

use ahash::AHashMap;
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::tagger::Tagger;
use crate::analysis::token::TaggedSpan;
use crate::config::DEFAULT_PUNCTUATION_LABEL;
use crate::error::Result;

/// A tagger that labels words from a fixed lexicon.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    /// lowercased word -> label
    lexicon: AHashMap<String, String>,
    default_label: String,
    punctuation_label: String,
}

impl LexiconTagger {
    /// Create a tagger with an empty lexicon.
    pub fn new<S: Into<String>>(default_label: S) -> Self {
        LexiconTagger {
            lexicon: AHashMap::new(),
            default_label: default_label.into(),
            punctuation_label: DEFAULT_PUNCTUATION_LABEL.to_string(),
        }
    }

    /// Add one word to the lexicon.
    pub fn with_word<W: AsRef<str>, L: Into<String>>(mut self, word: W, label: L) -> Self {
        self.lexicon
            .insert(word.as_ref().to_lowercase(), label.into());
        self
    }

    /// Add many words to the lexicon.
    pub fn with_words<I, W, L>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = (W, L)>,
        W: AsRef<str>,
        L: Into<String>,
    {
        for (word, label) in words {
            self = self.with_word(word, label);
        }
        self
    }

    /// Set the label used for punctuation segments.
    pub fn with_punctuation_label<S: Into<String>>(mut self, label: S) -> Self {
        self.punctuation_label = label.into();
        self
    }

    fn label_for(&self, segment: &str) -> &str {
        if !segment.chars().any(char::is_alphanumeric) {
            return &self.punctuation_label;
        }
        self.lexicon
            .get(&segment.to_lowercase())
            .map_or(self.default_label.as_str(), |label| label.as_str())
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedSpan>> {
        let spans = text
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| TaggedSpan::new(segment, self.label_for(segment)))
            .collect();

        Ok(spans)
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}
