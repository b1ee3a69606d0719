//! Text analysis for Hausa sentences.
//!
//! This module provides tagging, sub-token merging, part-of-speech
//! conditioned lemmatization and output formatting.

pub mod analyzer;
pub mod format;
pub mod lemma;
pub mod merger;
pub mod tagger;
pub mod token;

// Re-export commonly used types
pub use analyzer::SentenceAnalyzer;
pub use format::OutputFormat;
pub use lemma::LemmaPolicy;
pub use merger::TokenMerger;
pub use tagger::Tagger;
pub use token::{PosCategory, RawToken, TaggedSpan, Token};
