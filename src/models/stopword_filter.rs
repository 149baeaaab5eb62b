use crate::models::Language;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for recognizing stopwords in a sentence.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    pub fn new(language: Language) -> Self {
        let lang = match language {
            Language::Spanish => LANGUAGE::Spanish,
            Language::English => LANGUAGE::English,
        };

        let mut stopwords: FxHashSet<String> =
            get(lang).iter().map(|s| s.to_lowercase()).collect();

        // Social media noise which is never a meaningful keyword
        stopwords.extend(["http", "https", "rt", "via", "amp"].map(String::from));

        Self { stopwords }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
