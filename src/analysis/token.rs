//! Token types that flow through sentence analysis.
//!
//! # Core Types
//!
//! - [`TaggedSpan`] - one piece of tagger output, before normalization
//! - [`RawToken`] - a normalized sub-token with its part-of-speech label
//! - [`Token`] - a word unit of the analysis result, possibly merged from
//!   several sub-tokens, with its lemma
//! - [`PosCategory`] - the part-of-speech categories the lemma policy
//!   dispatches on
//!
//! # Composite labels
//!
//! When the merger joins sub-tokens into one word, the labels of the pieces
//! are kept in order, joined with `+`:
//!
//! ```text
//! ("makaran", NOUN) + ("ta", NOUN)  →  ("makaranta", "NOUN+NOUN")
//! ```
//!
//! Only the first component is used to choose a lemma strategy.
//!
//! # Examples
//!
//! ```
//! use hausa_lemmatizer::analysis::token::{PosCategory, Token};
//!
//! let token = Token::new("makaranta", "NOUN+NOUN").with_lemma("makaranta");
//! assert!(token.is_composite());
//! assert_eq!(token.primary_pos(), "NOUN");
//! assert_eq!(PosCategory::from_label(&token.pos), PosCategory::Noun);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PUNCTUATION_LABEL;

/// Separator between the components of a composite label.
pub const LABEL_SEPARATOR: char = '+';

/// One sub-token as emitted by a tagger.
///
/// The text may still carry continuation markers and surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSpan {
    pub text: String,
    pub label: String,
}

impl TaggedSpan {
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        TaggedSpan {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// A normalized sub-token: clean text plus its part-of-speech label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawToken {
    pub text: String,
    pub pos: String,
}

impl RawToken {
    pub fn new<T: Into<String>, P: Into<String>>(text: T, pos: P) -> Self {
        RawToken {
            text: text.into(),
            pos: pos.into(),
        }
    }
}

/// A word unit of the analysis result.
///
/// Serializes as `{"word": ..., "POS": ..., "lemma": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text of the word
    #[serde(rename = "word")]
    pub text: String,

    /// Part-of-speech label, `+`-joined when merged from several sub-tokens
    #[serde(rename = "POS")]
    pub pos: String,

    /// Base form, attached by the analyzer
    pub lemma: Option<String>,
}

impl Token {
    /// Create a token without a lemma.
    pub fn new<T: Into<String>, P: Into<String>>(text: T, pos: P) -> Self {
        Token {
            text: text.into(),
            pos: pos.into(),
            lemma: None,
        }
    }

    /// Attach a lemma.
    pub fn with_lemma<S: Into<String>>(mut self, lemma: S) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    /// The lemma, or an empty string when none has been attached yet.
    pub fn lemma(&self) -> &str {
        self.lemma.as_deref().unwrap_or_default()
    }

    /// First component of the label.
    pub fn primary_pos(&self) -> &str {
        primary_label(&self.pos)
    }

    /// Whether this token was merged from several sub-tokens.
    pub fn is_composite(&self) -> bool {
        self.pos.contains(LABEL_SEPARATOR)
    }

    /// Labels of the sub-tokens this token was built from, in order.
    pub fn pos_components(&self) -> impl Iterator<Item = &str> {
        self.pos.split(LABEL_SEPARATOR)
    }
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        Token::new(raw.text, raw.pos)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// First component of a possibly composite label.
pub fn primary_label(label: &str) -> &str {
    label
        .split_once(LABEL_SEPARATOR)
        .map_or(label, |(head, _)| head)
}

/// Part-of-speech categories with a dedicated lemma strategy.
///
/// Every label maps to exactly one category; labels without a dedicated
/// strategy map to [`PosCategory::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosCategory {
    /// `PRON`
    Pronoun,
    /// `NUM`
    Numeral,
    /// `NOUN`
    Noun,
    /// `VERB`
    Verb,
    /// `AUX`
    Auxiliary,
    /// `PUNCT`
    Punctuation,
    /// Everything else
    Other,
}

impl PosCategory {
    /// All categories, in dispatch-table order.
    pub const ALL: [PosCategory; 7] = [
        PosCategory::Pronoun,
        PosCategory::Numeral,
        PosCategory::Noun,
        PosCategory::Verb,
        PosCategory::Auxiliary,
        PosCategory::Punctuation,
        PosCategory::Other,
    ];

    /// Category of the primary component of `label`, with `PUNCT` as the
    /// punctuation label.
    pub fn from_label(label: &str) -> Self {
        Self::classify(label, DEFAULT_PUNCTUATION_LABEL)
    }

    /// Category of the primary component of `label`, where
    /// `punctuation_label` marks punctuation.
    pub fn classify(label: &str, punctuation_label: &str) -> Self {
        let primary = primary_label(label);
        if primary == punctuation_label {
            return PosCategory::Punctuation;
        }
        match primary {
            "PRON" => PosCategory::Pronoun,
            "NUM" => PosCategory::Numeral,
            "NOUN" => PosCategory::Noun,
            "VERB" => PosCategory::Verb,
            "AUX" => PosCategory::Auxiliary,
            _ => PosCategory::Other,
        }
    }

    /// Canonical label, `None` for [`PosCategory::Other`].
    ///
    /// For [`PosCategory::Punctuation`] this is the default label; a
    /// configured punctuation label may differ.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            PosCategory::Pronoun => Some("PRON"),
            PosCategory::Numeral => Some("NUM"),
            PosCategory::Noun => Some("NOUN"),
            PosCategory::Verb => Some("VERB"),
            PosCategory::Auxiliary => Some("AUX"),
            PosCategory::Punctuation => Some("PUNCT"),
            PosCategory::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("Yara", "NOUN");
        assert_eq!(token.text, "Yara");
        assert_eq!(token.pos, "NOUN");
        assert!(token.lemma.is_none());
        assert_eq!(token.lemma(), "");

        let token = token.with_lemma("yaro");
        assert_eq!(token.lemma(), "yaro");
        assert!(!token.is_composite());
    }

    #[test]
    fn test_composite_label() {
        let token = Token::new("makaranta", "NOUN+ADP+NOUN");
        assert!(token.is_composite());
        assert_eq!(token.primary_pos(), "NOUN");
        assert_eq!(
            token.pos_components().collect::<Vec<_>>(),
            vec!["NOUN", "ADP", "NOUN"]
        );
    }

    #[test]
    fn test_category_from_label() {
        assert_eq!(PosCategory::from_label("PRON"), PosCategory::Pronoun);
        assert_eq!(PosCategory::from_label("NUM"), PosCategory::Numeral);
        assert_eq!(PosCategory::from_label("VERB+NOUN"), PosCategory::Verb);
        assert_eq!(PosCategory::from_label("AUX"), PosCategory::Auxiliary);
        assert_eq!(PosCategory::from_label("PUNCT"), PosCategory::Punctuation);
        assert_eq!(PosCategory::from_label("ADP"), PosCategory::Other);
        assert_eq!(PosCategory::from_label(""), PosCategory::Other);
        assert_eq!(PosCategory::from_label("noun"), PosCategory::Other);
    }

    #[test]
    fn test_category_with_custom_punctuation_label() {
        assert_eq!(PosCategory::classify("P", "P"), PosCategory::Punctuation);
        assert_eq!(PosCategory::classify("P+NOUN", "P"), PosCategory::Punctuation);
        assert_eq!(PosCategory::classify("PUNCT", "P"), PosCategory::Other);
        assert_eq!(PosCategory::classify("NOUN", "P"), PosCategory::Noun);
        assert_eq!(PosCategory::from_label("P"), PosCategory::Other);
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in PosCategory::ALL {
            if let Some(label) = category.label() {
                assert_eq!(PosCategory::from_label(label), category);
            }
        }
    }

    #[test]
    fn test_token_serialization_keys() {
        let token = Token::new("Abinci", "NOUN").with_lemma("abinci");
        let value = serde_json::to_value(&token).unwrap();
        assert_eq!(value["word"], "Abinci");
        assert_eq!(value["POS"], "NOUN");
        assert_eq!(value["lemma"], "abinci");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("Kano", "PROPN");
        assert_eq!(format!("{token}"), "Kano");
    }
}
