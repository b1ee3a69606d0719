//! Sentence analysis: tagging, normalization, merging and lemmatization.
//!
//! ```text
//! text → Tagger → spans → normalize → [TokenMerger] → LemmaPolicy → tokens
//! ```
//!
//! One analyzer handles both modes of operation. With `combine = false`
//! every normalized sub-token becomes a token; with `combine = true`
//! sub-tokens are first merged against the source text.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use hausa_lemmatizer::analysis::analyzer::SentenceAnalyzer;
//! use hausa_lemmatizer::analysis::tagger::LexiconTagger;
//!
//! let tagger = LexiconTagger::new("NOUN").with_word("suna", "AUX");
//! let analyzer = SentenceAnalyzer::new(Arc::new(tagger));
//!
//! let tokens = analyzer.analyze("Mutane suna karatu.", false).unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].lemma(), "mutane");
//! assert_eq!(tokens[1].pos, "AUX");
//! ```

use std::sync::Arc;

use log::trace;
use rayon::prelude::*;

use crate::analysis::format::{self, OutputFormat};
use crate::analysis::lemma::LemmaPolicy;
use crate::analysis::merger::TokenMerger;
use crate::analysis::tagger::Tagger;
use crate::analysis::token::{RawToken, TaggedSpan, Token};
use crate::config::{DEFAULT_CONTINUATION_MARKER, LemmatizerConfig};
use crate::error::{LemmatizerError, Result};

/// Turns sentences into lemmatized tokens.
///
/// All state is read-only after construction, so one analyzer can be shared
/// between threads.
#[derive(Clone)]
pub struct SentenceAnalyzer {
    tagger: Arc<dyn Tagger>,
    policy: LemmaPolicy,
    merger: TokenMerger,
    continuation_marker: char,
}

impl std::fmt::Debug for SentenceAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceAnalyzer")
            .field("tagger", &self.tagger.name())
            .field("policy", &self.policy)
            .field("merger", &self.merger)
            .field("continuation_marker", &self.continuation_marker)
            .finish()
    }
}

impl SentenceAnalyzer {
    /// Create an analyzer with the default policy: no dictionaries, no
    /// suffix rules.
    pub fn new(tagger: Arc<dyn Tagger>) -> Self {
        SentenceAnalyzer {
            tagger,
            policy: LemmaPolicy::new(),
            merger: TokenMerger::new(),
            continuation_marker: DEFAULT_CONTINUATION_MARKER,
        }
    }

    /// Create an analyzer from configuration.
    ///
    /// Invalid configuration is an error; unreadable dictionaries are not.
    pub fn from_config(tagger: Arc<dyn Tagger>, config: &LemmatizerConfig) -> Result<Self> {
        config.validate()?;

        Ok(SentenceAnalyzer {
            tagger,
            policy: LemmaPolicy::from_config(config),
            merger: TokenMerger::new().with_punctuation_label(config.punctuation_label.clone()),
            continuation_marker: config.continuation_marker,
        })
    }

    pub fn with_policy(mut self, policy: LemmaPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_merger(mut self, merger: TokenMerger) -> Self {
        self.merger = merger;
        self
    }

    pub fn with_continuation_marker(mut self, marker: char) -> Self {
        self.continuation_marker = marker;
        self
    }

    pub fn tagger(&self) -> &Arc<dyn Tagger> {
        &self.tagger
    }

    pub fn policy(&self) -> &LemmaPolicy {
        &self.policy
    }

    /// Strip continuation markers and surrounding whitespace, dropping
    /// pieces that end up empty.
    ///
    /// A remaining piece without a label is rejected with
    /// [`LemmatizerError::InvalidArgument`], whether or not the pieces are
    /// merged afterwards.
    pub fn normalize(&self, spans: Vec<TaggedSpan>) -> Result<Vec<RawToken>> {
        let marker = self.continuation_marker;
        let mut pieces = Vec::with_capacity(spans.len());

        for (index, span) in spans.into_iter().enumerate() {
            let text = span.text.replace(marker, " ");
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            if span.label.is_empty() {
                return Err(LemmatizerError::invalid_argument(format!(
                    "span {index} ({text:?}) has no part-of-speech label"
                )));
            }
            pieces.push(RawToken::new(text, span.label));
        }

        Ok(pieces)
    }

    /// Analyze one sentence.
    ///
    /// Tagger errors are returned unchanged and no partial result is
    /// produced.
    pub fn analyze(&self, text: &str, combine: bool) -> Result<Vec<Token>> {
        let spans = self.tagger.tag(text)?;
        trace!(
            "tagger '{}' produced {} spans for {} bytes",
            self.tagger.name(),
            spans.len(),
            text.len()
        );

        let pieces = self.normalize(spans)?;
        let tokens = if combine {
            self.merger.merge(&pieces, text)?
        } else {
            pieces.into_iter().map(Token::from).collect()
        };

        Ok(tokens
            .into_iter()
            .map(|token| {
                let lemma = self.policy.lemma_for(&token.text, token.primary_pos());
                token.with_lemma(lemma)
            })
            .collect())
    }

    /// Analyze many sentences in parallel.
    ///
    /// Results keep the input order. The first failure fails the whole
    /// batch.
    pub fn analyze_batch<S>(&self, texts: &[S], combine: bool) -> Result<Vec<Vec<Token>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref(), combine))
            .collect()
    }

    /// Analyze a sentence and render it in `mode`.
    pub fn lemma_sentence(&self, text: &str, mode: OutputFormat, combine: bool) -> Result<String> {
        let tokens = self.analyze(text, combine)?;
        Ok(format::format(&tokens, mode))
    }

    /// Analyze a sentence and render it as JSON.
    pub fn analyze_json(&self, text: &str, combine: bool, pretty: bool) -> Result<String> {
        let tokens = self.analyze(text, combine)?;
        format::to_json(&tokens, pretty)
    }
}
