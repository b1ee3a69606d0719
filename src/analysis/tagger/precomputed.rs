//! Tagger that replays tagger output computed elsewhere.
//!
//! Useful when the tagging model runs in another process (or another
//! language runtime) and its output is shipped as JSON:
//!
//! ```json
//! {
//!   "Yara suna wasa.": [
//!     { "text": "▁Yara", "label": "NOUN" },
//!     { "text": "▁suna", "label": "AUX" },
//!     { "text": "▁wasa", "label": "NOUN" },
//!     { "text": ".", "label": "PUNCT" }
//!   ]
//! }
//! ```
//!
//! Tagging a sentence that has no recorded output is an error.

use std::collections::HashMap;
use std::path::Path;

use ahash::AHashMap;

use crate::analysis::tagger::Tagger;
use crate::analysis::token::TaggedSpan;
use crate::error::{LemmatizerError, Result};

/// A tagger backed by a table of sentence -> spans.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedTagger {
    sentences: AHashMap<String, Vec<TaggedSpan>>,
}

impl PrecomputedTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the output for one sentence.
    pub fn with_sentence<S: Into<String>>(mut self, text: S, spans: Vec<TaggedSpan>) -> Self {
        self.insert(text, spans);
        self
    }

    /// Record the output for one sentence, replacing any earlier entry.
    pub fn insert<S: Into<String>>(&mut self, text: S, spans: Vec<TaggedSpan>) {
        self.sentences.insert(text.into(), spans);
    }

    /// Load recorded output from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let sentences: HashMap<String, Vec<TaggedSpan>> = serde_json::from_str(&content)
            .map_err(|e| {
                LemmatizerError::tagger(format!(
                    "Failed to parse precomputed tags from '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        Ok(PrecomputedTagger {
            sentences: sentences.into_iter().collect(),
        })
    }

    /// Number of recorded sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl Tagger for PrecomputedTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedSpan>> {
        self.sentences.get(text).cloned().ok_or_else(|| {
            LemmatizerError::tagger(format!("No precomputed tags for sentence: {text:?}"))
        })
    }

    fn name(&self) -> &'static str {
        "precomputed"
    }
}
