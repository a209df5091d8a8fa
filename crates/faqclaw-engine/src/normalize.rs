//! Text normalization — lowercase, tokenize, reduce to base forms.

use std::collections::HashMap;

use rust_stemmers::{Algorithm, Stemmer};

/// Irregular forms the suffix stemmer cannot reduce. Checked before
/// stemming so "children" becomes "child", not "children".
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("women", "woman"),
];

/// Reduces free text to a canonical token stream: lowercased,
/// word-segmented, each token in its base form, space-joined.
///
/// The stemmer and the irregular-form table are built once and held
/// read-only for the process lifetime; `normalize` itself is a pure
/// function of its input.
pub struct Normalizer {
    stemmer: Stemmer,
    irregular: HashMap<&'static str, &'static str>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            irregular: IRREGULAR_FORMS.iter().copied().collect(),
        }
    }

    /// Normalize text for comparison. Empty input yields an empty string.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(|token| self.base_form(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn base_form(&self, token: &str) -> String {
        if let Some(&lemma) = self.irregular.get(token) {
            return lemma.to_string();
        }
        self.stemmer.stem(token).into_owned()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
