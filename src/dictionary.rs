//! Plural to singular dictionaries used by the lemma policy.
//!
//! A dictionary file is a UTF-8 JSON object whose keys are inflected
//! (plural) forms and whose values are the base (singular) forms:
//!
//! ```json
//! {
//!   "yara": "yaro",
//!   "mutane": "mutum"
//! }
//! ```
//!
//! Keys and values are lowercased when the dictionary is built, so lookups
//! are case-insensitive for callers that lowercase their input. When two
//! keys collide after lowercasing, a key that was already lowercase wins over
//! its case variants; otherwise the later entry wins. Files are read in key
//! order, so the outcome does not change between loads.
//!
//! # Examples
//!
//! ```
//! use hausa_lemmatizer::dictionary::Dictionary;
//!
//! let dictionary = Dictionary::from_entries([("Yara", "yaro")]);
//! assert_eq!(dictionary.singular_of("yara"), Some("yaro"));
//! assert!(dictionary.is_singular("yaro"));
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use log::warn;

use crate::error::{LemmatizerError, Result};

/// Read-only mapping from plural surface forms to singular surface forms.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// plural -> singular
    entries: AHashMap<String, String>,
    /// Every singular form, for reverse membership checks
    singulars: AHashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from in-memory pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        // lowercased plural -> (singular, key was already lowercase)
        let mut staged: AHashMap<String, (String, bool)> = AHashMap::new();

        for (plural, singular) in entries {
            let (plural, singular) = (plural.as_ref(), singular.as_ref());
            let key = plural.to_lowercase();
            let exact = key == plural;
            let singular = singular.to_lowercase();

            match staged.get(&key) {
                Some((kept, kept_exact)) => {
                    let replace = exact || !kept_exact;
                    warn!(
                        "Dictionary keys collide on '{}': keeping '{}', dropping '{}'",
                        key,
                        if replace { singular.as_str() } else { kept.as_str() },
                        if replace { kept.as_str() } else { singular.as_str() },
                    );
                    if replace {
                        staged.insert(key, (singular, exact));
                    }
                }
                None => {
                    staged.insert(key, (singular, exact));
                }
            }
        }

        let entries: AHashMap<String, String> = staged
            .into_iter()
            .map(|(plural, (singular, _))| (plural, singular))
            .collect();
        let singulars = entries.values().cloned().collect();

        Dictionary { entries, singulars }
    }

    /// Load a dictionary from a JSON file, degrading to an empty dictionary.
    ///
    /// A missing or unreadable file and malformed JSON are logged as warnings
    /// and never reach the caller.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                warn!(
                    "Failed to load dictionary '{}', using an empty one: {}",
                    path.display(),
                    e
                );
                Dictionary::new()
            }
        }
    }

    /// Load a dictionary from a JSON file, reporting any failure.
    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LemmatizerError::dictionary(format!(
                "Failed to read dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let raw: BTreeMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            LemmatizerError::dictionary(format!(
                "Failed to parse dictionary JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::from_entries(raw))
    }

    /// Singular form recorded for `word`, if `word` is a known plural.
    pub fn singular_of(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(|s| s.as_str())
    }

    /// Whether `word` appears as a singular form in this dictionary.
    pub fn is_singular(&self, word: &str) -> bool {
        self.singulars.contains(word)
    }

    /// Number of plural entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
