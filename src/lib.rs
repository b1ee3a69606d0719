//! # hausa-lemmatizer
//!
//! Part-of-speech conditioned lemmatization of Hausa text.
//!
//! ## Features
//!
//! - Pluggable part-of-speech taggers
//! - Reconciliation of sub-word pieces into whole words
//! - Dictionary and suffix-rule lemma strategies per part of speech
//! - Several output formats, including JSON
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use hausa_lemmatizer::prelude::*;
//!
//! let tagger = PrecomputedTagger::new().with_sentence(
//!     "Yara suna wasa.",
//!     vec![
//!         TaggedSpan::new("\u{2581}Yara", "NOUN"),
//!         TaggedSpan::new("\u{2581}suna", "AUX"),
//!         TaggedSpan::new("\u{2581}wasa", "NOUN"),
//!         TaggedSpan::new(".", "PUNCT"),
//!     ],
//! );
//! let policy = LemmaPolicy::builder()
//!     .plural_dictionary(Arc::new(Dictionary::from_entries([("yara", "yaro")])))
//!     .build();
//! let analyzer = SentenceAnalyzer::new(Arc::new(tagger)).with_policy(policy);
//!
//! let line = analyzer
//!     .lemma_sentence("Yara suna wasa.", OutputFormat::Underscore, true)
//!     .unwrap();
//! assert_eq!(line, "Yara_NOUN_yaro suna_AUX_suna wasa_NOUN_wasa ._PUNCT_.");
//! ```

pub mod analysis;
pub mod config;
pub mod dictionary;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::SentenceAnalyzer;
    pub use crate::analysis::format::{OutputFormat, format, to_json};
    pub use crate::analysis::lemma::{LemmaPolicy, LemmaStrategy};
    pub use crate::analysis::merger::TokenMerger;
    pub use crate::analysis::tagger::{LexiconTagger, PrecomputedTagger, Tagger, TimeoutTagger};
    pub use crate::analysis::token::{PosCategory, RawToken, TaggedSpan, Token};
    pub use crate::config::{LemmatizerConfig, SuffixRule};
    pub use crate::dictionary::Dictionary;
    pub use crate::error::{LemmatizerError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
