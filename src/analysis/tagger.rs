//! Part-of-speech taggers.
//!
//! The tagging model is an external collaborator: anything that turns a
//! sentence into an ordered list of `(sub-token, label)` pairs can drive the
//! analyzer. Sub-tokens may split a natural word and may carry a
//! continuation marker; the analyzer normalizes them.
//!
//! # Available Taggers
//!
//! - [`precomputed::PrecomputedTagger`] - replays output produced elsewhere
//! - [`lexicon::LexiconTagger`] - rule-based word list tagger
//! - [`timeout::TimeoutTagger`] - bounds the running time of another tagger
//!
//! # Examples
//!
//! Implementing a tagger on top of an external model:
//!
//! ```
//! use hausa_lemmatizer::analysis::tagger::Tagger;
//! use hausa_lemmatizer::analysis::token::TaggedSpan;
//! use hausa_lemmatizer::error::Result;
//!
//! struct EverythingIsANoun;
//!
//! impl Tagger for EverythingIsANoun {
//!     fn tag(&self, text: &str) -> Result<Vec<TaggedSpan>> {
//!         Ok(text
//!             .split_whitespace()
//!             .map(|word| TaggedSpan::new(word, "NOUN"))
//!             .collect())
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "everything_is_a_noun"
//!     }
//! }
//! ```

use crate::analysis::token::TaggedSpan;
use crate::error::Result;

/// Trait for part-of-speech taggers.
///
/// Implementations must be `Send + Sync` so one analyzer can serve
/// several threads. Errors are returned to the analyzer's caller as is.
pub trait Tagger: Send + Sync {
    /// Tag `text`, returning sub-tokens in surface order.
    fn tag(&self, text: &str) -> Result<Vec<TaggedSpan>>;

    /// Get the name of this tagger (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod lexicon;
pub mod precomputed;
pub mod timeout;

pub use lexicon::LexiconTagger;
pub use precomputed::PrecomputedTagger;
pub use timeout::TimeoutTagger;
