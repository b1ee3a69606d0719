//! Reconciliation of sub-word pieces into whole words.
//!
//! Sub-word tokenizers split words into pieces that are tagged separately.
//! The [`TokenMerger`] glues adjacent pieces back together whenever their
//! concatenation occurs in the source sentence:
//!
//! ```text
//! source:  "Mutane suna karatu a makaranta."
//! pieces:  Mutane/NOUN suna/AUX karatu/NOUN a/ADP makaran/NOUN ta/NOUN ./PUNCT
//! merged:  Mutane/NOUN suna/AUX karatu/NOUN a/ADP makaranta/NOUN+NOUN ./PUNCT
//! ```
//!
//! The scan is greedy, left to right and never backtracks. Punctuation is
//! never merged with anything.
//!
//! # Limitations
//!
//! The containment test is case-insensitive and ignores where in the source
//! the concatenation occurs. Two pieces that stand apart at their own
//! position are still merged if their concatenation appears elsewhere in the
//! sentence:
//!
//! ```
//! use hausa_lemmatizer::analysis::merger::TokenMerger;
//! use hausa_lemmatizer::analysis::token::RawToken;
//!
//! let pieces = vec![
//!     RawToken::new("ka", "PRON"),
//!     RawToken::new("ce", "VERB"),
//!     RawToken::new("kace", "NOUN"),
//! ];
//! let merged = TokenMerger::new().merge(&pieces, "ka ce kace").unwrap();
//!
//! assert_eq!(merged[0].text, "kace");
//! assert_eq!(merged[0].pos, "PRON+VERB");
//! ```

use log::debug;

use crate::analysis::token::{LABEL_SEPARATOR, RawToken, Token};
use crate::config::DEFAULT_PUNCTUATION_LABEL;
use crate::error::{LemmatizerError, Result};

/// Greedy merger of adjacent sub-tokens.
#[derive(Debug, Clone)]
pub struct TokenMerger {
    punctuation_label: String,
}

impl Default for TokenMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenMerger {
    /// Create a merger that treats `PUNCT` as punctuation.
    pub fn new() -> Self {
        TokenMerger {
            punctuation_label: DEFAULT_PUNCTUATION_LABEL.to_string(),
        }
    }

    /// Set the label that marks punctuation.
    pub fn with_punctuation_label<S: Into<String>>(mut self, label: S) -> Self {
        self.punctuation_label = label.into();
        self
    }

    pub fn punctuation_label(&self) -> &str {
        &self.punctuation_label
    }

    fn is_punctuation(&self, token: &RawToken) -> bool {
        token.pos == self.punctuation_label
    }

    /// Merge `tokens` against `original_text`.
    ///
    /// Returns at most `tokens.len()` tokens, in order. Fails with
    /// [`LemmatizerError::InvalidArgument`] if any token has empty text or
    /// an empty label; nothing is merged in that case.
    pub fn merge(&self, tokens: &[RawToken], original_text: &str) -> Result<Vec<Token>> {
        if let Some((index, token)) = tokens
            .iter()
            .enumerate()
            .find(|(_, token)| token.text.is_empty() || token.pos.is_empty())
        {
            return Err(LemmatizerError::invalid_argument(format!(
                "token {index} is malformed: text={:?} pos={:?}",
                token.text, token.pos
            )));
        }

        let source = original_text.to_lowercase();
        let mut merged = Vec::with_capacity(tokens.len());
        let mut start = 0;

        while start < tokens.len() {
            let current = &tokens[start];
            if self.is_punctuation(current) {
                merged.push(Token::from(current.clone()));
                start += 1;
                continue;
            }

            let mut text = current.text.clone();
            let mut pos = current.pos.clone();
            let mut end = start + 1;

            while let Some(next) = tokens.get(end) {
                if self.is_punctuation(next) {
                    break;
                }
                let candidate = format!("{text}{}", next.text);
                if !source.contains(&candidate.to_lowercase()) {
                    break;
                }
                text = candidate;
                pos.push(LABEL_SEPARATOR);
                pos.push_str(&next.pos);
                end += 1;
            }

            if end - start > 1 {
                debug!("merged {} pieces into {text:?} ({pos})", end - start);
            }

            merged.push(Token::new(text, pos));
            start = end;
        }

        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> Vec<RawToken> {
        pairs
            .iter()
            .map(|(text, pos)| RawToken::new(*text, *pos))
            .collect()
    }

    fn summary(tokens: &[Token]) -> Vec<(String, String)> {
        tokens
            .iter()
            .map(|t| (t.text.clone(), t.pos.clone()))
            .collect()
    }

    #[test]
    fn test_merges_split_word() {
        let merger = TokenMerger::new();
        let tokens = raw(&[
            ("Mutane", "NOUN"),
            ("suna", "AUX"),
            ("karatu", "NOUN"),
            ("a", "ADP"),
            ("makaran", "NOUN"),
            ("ta", "NOUN"),
            (".", "PUNCT"),
        ]);

        let merged = merger
            .merge(&tokens, "Mutane suna karatu a makaranta.")
            .unwrap();

        assert_eq!(
            summary(&merged),
            vec![
                ("Mutane".to_string(), "NOUN".to_string()),
                ("suna".to_string(), "AUX".to_string()),
                ("karatu".to_string(), "NOUN".to_string()),
                ("a".to_string(), "ADP".to_string()),
                ("makaranta".to_string(), "NOUN+NOUN".to_string()),
                (".".to_string(), "PUNCT".to_string()),
            ]
        );
        assert!(merged.iter().all(|t| t.lemma.is_none()));
    }

    #[test]
    fn test_merges_more_than_two_pieces() {
        let merger = TokenMerger::new();
        let tokens = raw(&[("hu", "NOUN"), ("kum", "NOUN"), ("omi", "NOUN"), ("ne", "AUX")]);

        let merged = merger.merge(&tokens, "hukumomi ne").unwrap();

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].text, "hukumomi");
        assert_eq!(merged[0].pos, "NOUN+NOUN+NOUN");
        assert_eq!(merged[1].text, "ne");
    }

    #[test]
    fn test_containment_is_case_insensitive() {
        let merger = TokenMerger::new();
        let tokens = raw(&[("KA", "NOUN"), ("no", "NOUN")]);

        let merged = merger.merge(&tokens, "a Kano").unwrap();
        assert_eq!(summary(&merged), vec![("KAno".to_string(), "NOUN+NOUN".to_string())]);
    }

    #[test]
    fn test_never_merges_punctuation() {
        let merger = TokenMerger::new();
        let tokens = raw(&[("Kano", "PROPN"), ("?", "PUNCT"), ("?", "PUNCT"), ("Eh", "INTJ")]);

        let merged = merger.merge(&tokens, "Kano?? Eh").unwrap();
        assert_eq!(merged.len(), 4);
        assert!(merged.iter().all(|t| !t.is_composite()));
    }

    #[test]
    fn test_custom_punctuation_label() {
        let merger = TokenMerger::new().with_punctuation_label("P");
        let tokens = raw(&[("ta", "NOUN"), (".", "P")]);

        let merged = merger.merge(&tokens, "ta.").unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merger.punctuation_label(), "P");
    }

    #[test]
    fn test_position_agnostic_false_positive() {
        let merger = TokenMerger::new();
        let tokens = raw(&[("ka", "PRON"), ("ce", "VERB"), ("kace", "NOUN")]);

        let merged = merger.merge(&tokens, "ka ce kace").unwrap();

        assert_eq!(
            summary(&merged),
            vec![
                ("kace".to_string(), "PRON+VERB".to_string()),
                ("kace".to_string(), "NOUN".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_merges_possible() {
        let merger = TokenMerger::new();
        let tokens = raw(&[("Mutane", "NOUN"), ("suna", "AUX"), ("karatu", "NOUN")]);

        let merged = merger
            .merge(&tokens, "Mutane suna karatu a makaranta.")
            .unwrap();
        let expected: Vec<Token> = tokens.iter().cloned().map(Token::from).collect();
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_empty_input() {
        let merger = TokenMerger::new();
        assert!(merger.merge(&[], "anything").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let merger = TokenMerger::new();

        let tokens = raw(&[("Yara", "NOUN"), ("", "NOUN")]);
        assert!(matches!(
            merger.merge(&tokens, "Yara"),
            Err(LemmatizerError::InvalidArgument(_))
        ));

        let tokens = raw(&[("Yara", "")]);
        assert!(matches!(
            merger.merge(&tokens, "Yara"),
            Err(LemmatizerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_length_never_grows_and_punctuation_stays_terminal() {
        let merger = TokenMerger::new();
        let text = "Shin matsalar dabanci ta gari hukumomi ne a Kano?";
        let tokens = raw(&[
            ("Shin", "PART"),
            ("matsa", "NOUN"),
            ("lar", "NOUN"),
            ("dab", "NOUN"),
            ("anci", "NOUN"),
            ("ta", "ADP"),
            ("gari", "NOUN"),
            ("hukumomi", "NOUN"),
            ("ne", "AUX"),
            ("a", "ADP"),
            ("Kano", "PROPN"),
            ("?", "PUNCT"),
        ]);

        for len in 0..=tokens.len() {
            let merged = merger.merge(&tokens[..len], text).unwrap();
            assert!(merged.len() <= len);
            for token in merged.iter().filter(|t| t.is_composite()) {
                assert!(token.pos_components().all(|c| c != "PUNCT"));
            }
        }

        let merged = merger.merge(&tokens, text).unwrap();
        assert_eq!(merged[1].text, "matsalar");
        assert_eq!(merged[2].text, "dabanci");
        assert_eq!(merged.last().map(|t| t.text.as_str()), Some("?"));
    }
}
