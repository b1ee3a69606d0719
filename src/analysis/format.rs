//! Rendering of analysis results.
//!
//! # Examples
//!
//! ```
//! use hausa_lemmatizer::analysis::format::{OutputFormat, format};
//! use hausa_lemmatizer::analysis::token::Token;
//!
//! let tokens = vec![Token::new("Abinci", "NOUN").with_lemma("abinci")];
//! assert_eq!(format(&tokens, OutputFormat::Underscore), "Abinci_NOUN_abinci");
//! assert_eq!(format(&tokens, OutputFormat::from_name("anything")), "Abinci");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::error::Result;

/// String representations of an analysis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `word_POS_lemma` per token
    Underscore,
    /// Lemmas only
    LemmaOnly,
    /// `word_POS` per token
    Combined,
    /// Surface words only
    #[default]
    Words,
}

impl OutputFormat {
    /// Parse a mode name. Unknown names select [`OutputFormat::Words`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "underscore" => OutputFormat::Underscore,
            "lemma_only" => OutputFormat::LemmaOnly,
            "combined" => OutputFormat::Combined,
            _ => OutputFormat::Words,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Underscore => "underscore",
            OutputFormat::LemmaOnly => "lemma_only",
            OutputFormat::Combined => "combined",
            OutputFormat::Words => "words",
        }
    }
}

impl From<&str> for OutputFormat {
    fn from(name: &str) -> Self {
        OutputFormat::from_name(name)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render `tokens` as one space-separated line.
pub fn format(tokens: &[Token], mode: OutputFormat) -> String {
    let items: Vec<String> = match mode {
        OutputFormat::Underscore => tokens
            .iter()
            .map(|t| format!("{}_{}_{}", t.text, t.pos, t.lemma()))
            .collect(),
        OutputFormat::LemmaOnly => tokens.iter().map(|t| t.lemma().to_string()).collect(),
        OutputFormat::Combined => tokens
            .iter()
            .map(|t| format!("{}_{}", t.text, t.pos))
            .collect(),
        OutputFormat::Words => tokens.iter().map(|t| t.text.clone()).collect(),
    };
    items.join(" ")
}

/// Render `tokens` as a JSON array of `{"word", "POS", "lemma"}` objects.
///
/// Non-ASCII text is written as is.
pub fn to_json(tokens: &[Token], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(tokens)?
    } else {
        serde_json::to_string(tokens)?
    };
    Ok(json)
}
