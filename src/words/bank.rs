//! Word bank: categories of secret words and their hints.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::core::{DataLoadError, GameRng, WordBankError};

/// A secret word and its hints.
///
/// `hints[0]` is the hint regular players are told about; imposters each
/// get a hint drawn from the whole list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// The secret word.
    #[serde(rename = "word")]
    pub text: String,
    /// Hints, never empty once loaded into a bank.
    pub hints: Vec<String>,
}

impl Word {
    /// Create a word with its hints.
    pub fn new<I, S>(text: impl Into<String>, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            hints: hints.into_iter().map(Into::into).collect(),
        }
    }

    /// The hint shown to non-imposters.
    #[must_use]
    pub fn primary_hint(&self) -> &str {
        self.hints.first().map(String::as_str).unwrap_or_default()
    }
}

/// A word drawn for a round, with the category it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedWord {
    pub category: String,
    pub word: Word,
}

/// All words the game can draw from, keyed by category.
///
/// ## Example
///
/// ```
/// use fake_it::core::GameRng;
/// use fake_it::words::{Word, WordBank};
/// use std::collections::BTreeSet;
///
/// let mut bank = WordBank::new();
/// bank.insert("animals", Word::new("Dog", ["Pet"]));
///
/// let categories: BTreeSet<String> = ["animals".to_string()].into();
/// let picked = bank.select_word(&categories, &mut GameRng::new(1)).unwrap();
/// assert_eq!(picked.word.text, "Dog");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordBank {
    categories: BTreeMap<String, Vec<Word>>,
}

impl WordBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word to a category, creating the category if needed.
    pub fn insert(&mut self, category: impl Into<String>, word: Word) {
        self.categories.entry(category.into()).or_default().push(word);
    }

    /// Register a category with no words yet.
    pub fn add_category(&mut self, category: impl Into<String>) {
        self.categories.entry(category.into()).or_default();
    }

    /// Parse a bank from its JSON data format:
    /// `{ "<category>": [ { "word": "...", "hints": ["..."] } ] }`.
    pub fn from_json(json: &str) -> Result<Self, DataLoadError> {
        let categories: BTreeMap<String, Vec<Word>> = serde_json::from_str(json)?;
        let bank = Self { categories };
        bank.check()?;
        Ok(bank)
    }

    /// Built-in bank used whenever the real one cannot be loaded.
    #[must_use]
    pub fn fallback() -> Self {
        let mut bank = Self::new();
        let data: [(&str, [(&str, &str); 2]); 6] = [
            ("animals", [("Dog", "Pet"), ("Cat", "Pet")]),
            ("food", [("Pizza", "Italian food"), ("Burger", "Fast food")]),
            ("places", [("Beach", "Water location"), ("Mountain", "High place")]),
            ("movies", [("Star Wars", "Space franchise"), ("Harry Potter", "Magic series")]),
            ("objects", [("Phone", "Communication device"), ("Lamp", "Light source")]),
            ("sports", [("Soccer", "Ball sport"), ("Basketball", "Hoop game")]),
        ];
        for (category, words) in data {
            for (text, hint) in words {
                bank.insert(category, Word::new(text, [hint]));
            }
        }
        bank
    }

    /// Every word must carry at least one hint, and the bank must not be empty.
    fn check(&self) -> Result<(), DataLoadError> {
        if self.categories.is_empty() {
            return Err(DataLoadError::EmptyBank);
        }
        for (category, words) in &self.categories {
            if let Some(word) = words.iter().find(|w| w.hints.is_empty()) {
                return Err(DataLoadError::InvalidWord {
                    category: category.clone(),
                    word: word.text.clone(),
                });
            }
        }
        Ok(())
    }

    /// Category keys in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Check if a category exists.
    #[must_use]
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Words in a category.
    #[must_use]
    pub fn words(&self, category: &str) -> Option<&[Word]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Total number of words across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Check if the bank holds no words at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pick a category uniformly from `categories`, then a word uniformly
    /// from that category.
    ///
    /// Every requested category is checked before drawing, so a bad
    /// selection fails the same way regardless of the RNG.
    pub fn select_word(
        &self,
        categories: &BTreeSet<String>,
        rng: &mut GameRng,
    ) -> Result<SelectedWord, WordBankError> {
        if categories.is_empty() {
            return Err(WordBankError::NoCategoriesSelected);
        }

        let mut pools = Vec::with_capacity(categories.len());
        for key in categories {
            let words = self
                .categories
                .get(key)
                .ok_or_else(|| WordBankError::UnknownCategory(key.clone()))?;
            if words.is_empty() {
                return Err(WordBankError::EmptyCategory(key.clone()));
            }
            pools.push((key, words));
        }

        let (category, words) = pools[rng.gen_range_usize(0..pools.len())];
        let word = &words[rng.gen_range_usize(0..words.len())];

        Ok(SelectedWord {
            category: category.clone(),
            word: word.clone(),
        })
    }
}
