//! Configuration for building a sentence analyzer.
//!
//! The configuration carries everything that is language data rather than
//! algorithm: dictionary locations, ordered suffix rules, the label used for
//! punctuation and the continuation marker emitted by the tagger's
//! sub-word tokenizer. It is usually read from a JSON file:
//!
//! ```json
//! {
//!   "plural_dictionary": "plural_nouns.json",
//!   "plural_suffixes": ["ai", { "suffix": "oci", "replacement": "o" }],
//!   "verb_suffixes": []
//! }
//! ```
//!
//! No affixes are built in. Every rule list defaults to empty.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LemmatizerError, Result};

/// Default label the tagger uses for punctuation.
pub const DEFAULT_PUNCTUATION_LABEL: &str = "PUNCT";

/// Default SentencePiece word-boundary marker.
pub const DEFAULT_CONTINUATION_MARKER: char = '\u{2581}';

/// Configuration for the lemmatizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LemmatizerConfig {
    /// JSON file mapping plural nouns to singular nouns.
    pub plural_dictionary: Option<PathBuf>,

    /// JSON file mapping inflected verb forms to base forms.
    pub verb_dictionary: Option<PathBuf>,

    /// Noun suffix rules, tried in order.
    pub plural_suffixes: Vec<SuffixRule>,

    /// Verb suffix rules, tried in order.
    pub verb_suffixes: Vec<SuffixRule>,

    /// Label that marks punctuation tokens.
    pub punctuation_label: String,

    /// Marker the tagger puts on sub-word pieces.
    pub continuation_marker: char,
}

impl Default for LemmatizerConfig {
    fn default() -> Self {
        Self {
            plural_dictionary: None,
            verb_dictionary: None,
            plural_suffixes: Vec::new(),
            verb_suffixes: Vec::new(),
            punctuation_label: DEFAULT_PUNCTUATION_LABEL.to_string(),
            continuation_marker: DEFAULT_CONTINUATION_MARKER,
        }
    }
}

impl LemmatizerConfig {
    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LemmatizerError::config(format!(
                "Failed to read configuration file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: LemmatizerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the analyzer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.punctuation_label.trim().is_empty() {
            return Err(LemmatizerError::config("punctuation_label must not be empty"));
        }
        if self.punctuation_label.contains('+') {
            return Err(LemmatizerError::config(
                "punctuation_label must not contain '+'",
            ));
        }

        for (kind, rules) in [
            ("plural_suffixes", &self.plural_suffixes),
            ("verb_suffixes", &self.verb_suffixes),
        ] {
            if let Some(index) = rules.iter().position(|rule| rule.suffix.is_empty()) {
                return Err(LemmatizerError::config(format!(
                    "{kind}[{index}] has an empty suffix"
                )));
            }
        }

        Ok(())
    }

    pub fn with_plural_dictionary<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.plural_dictionary = Some(path.into());
        self
    }

    pub fn with_verb_dictionary<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.verb_dictionary = Some(path.into());
        self
    }

    pub fn with_plural_suffixes(mut self, rules: Vec<SuffixRule>) -> Self {
        self.plural_suffixes = rules;
        self
    }

    pub fn with_verb_suffixes(mut self, rules: Vec<SuffixRule>) -> Self {
        self.verb_suffixes = rules;
        self
    }
}

/// A single suffix rewrite: strip `suffix`, then append `replacement`.
///
/// In JSON a rule is either a bare string (plain stripping) or an object
/// with `suffix` and an optional `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SuffixRuleRepr")]
pub struct SuffixRule {
    pub suffix: String,
    pub replacement: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SuffixRuleRepr {
    Bare(String),
    Full {
        suffix: String,
        #[serde(default)]
        replacement: String,
    },
}

impl From<SuffixRuleRepr> for SuffixRule {
    fn from(repr: SuffixRuleRepr) -> Self {
        match repr {
            SuffixRuleRepr::Bare(suffix) => SuffixRule::strip(suffix),
            SuffixRuleRepr::Full {
                suffix,
                replacement,
            } => SuffixRule::rewrite(suffix, replacement),
        }
    }
}

impl SuffixRule {
    /// A rule that removes `suffix`.
    pub fn strip<S: Into<String>>(suffix: S) -> Self {
        SuffixRule {
            suffix: suffix.into(),
            replacement: String::new(),
        }
    }

    /// A rule that replaces `suffix` with `replacement`.
    pub fn rewrite<S: Into<String>, R: Into<String>>(suffix: S, replacement: R) -> Self {
        SuffixRule {
            suffix: suffix.into(),
            replacement: replacement.into(),
        }
    }

    /// Apply the rule, returning `None` when it does not match or would
    /// leave an empty stem.
    pub fn apply(&self, word: &str) -> Option<String> {
        let stem = word.strip_suffix(self.suffix.as_str())?;
        if stem.is_empty() {
            return None;
        }
        Some(format!("{stem}{}", self.replacement))
    }
}
