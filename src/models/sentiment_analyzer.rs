use crate::config::DEFAULT_SENTIMENT_CONFIG;
use crate::constants::{
    ENGLISH_NEGATIVE_WORDS, ENGLISH_NEGATORS, ENGLISH_POSITIVE_WORDS, SPANISH_NEGATIVE_WORDS,
    SPANISH_NEGATORS, SPANISH_POSITIVE_WORDS,
};
use crate::models::Language;
use crate::types::{Sentence, SentenceRef};
use crate::utils::{split_sentences, tokenize_words};
use crate::Error;
use log::debug;
use rustc_hash::FxHashSet;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Short label code (`POS`, `NEG`, `NEU`)
    pub fn code(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POS",
            SentimentLabel::Negative => "NEG",
            SentimentLabel::Neutral => "NEU",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Number of sentences per sentiment label.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Each distinct sentence with its label, in order of first appearance.
///
/// A sentence seen more than once keeps its first position and its latest label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentDetail {
    entries: Vec<(Sentence, SentimentLabel)>,
}

impl SentimentDetail {
    pub fn insert(&mut self, sentence: &SentenceRef, label: SentimentLabel) {
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing == sentence)
        {
            Some(entry) => entry.1 = label,
            None => self.entries.push((sentence.to_string(), label)),
        }
    }

    pub fn get(&self, sentence: &SentenceRef) -> Option<SentimentLabel> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == sentence)
            .map(|(_, label)| *label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SentimentLabel)> {
        self.entries
            .iter()
            .map(|(sentence, label)| (sentence.as_str(), *label))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Labels a single sentence as positive, negative or neutral.
pub trait SentimentClassifier {
    fn classify(&self, sentence: &SentenceRef) -> Result<SentimentLabel, Error>;
}

impl<T: SentimentClassifier + ?Sized> SentimentClassifier for &T {
    fn classify(&self, sentence: &SentenceRef) -> Result<SentimentLabel, Error> {
        (**self).classify(sentence)
    }
}

impl<T: SentimentClassifier + ?Sized> SentimentClassifier for Box<T> {
    fn classify(&self, sentence: &SentenceRef) -> Result<SentimentLabel, Error> {
        (**self).classify(sentence)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct SentimentConfig {
    /// Number of preceding words in which a negator flips a word's polarity
    pub negation_window: usize,
}

/// Word-list sentiment classifier.
///
/// Every positive word adds one point and every negative word removes one. A
/// negator within `negation_window` words before a polar word flips it.
#[derive(Debug, Clone)]
pub struct LexiconSentimentAnalyzer {
    config: SentimentConfig,
    positive_words: FxHashSet<String>,
    negative_words: FxHashSet<String>,
    negators: FxHashSet<String>,
}

fn to_set(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|word| word.to_lowercase()).collect()
}

impl LexiconSentimentAnalyzer {
    pub fn new(language: Language) -> Self {
        Self::with_custom_config(language, DEFAULT_SENTIMENT_CONFIG)
    }

    pub fn with_custom_config(language: Language, config: SentimentConfig) -> Self {
        let (positive, negative, negators) = match language {
            Language::Spanish => (
                SPANISH_POSITIVE_WORDS,
                SPANISH_NEGATIVE_WORDS,
                SPANISH_NEGATORS,
            ),
            Language::English => (
                ENGLISH_POSITIVE_WORDS,
                ENGLISH_NEGATIVE_WORDS,
                ENGLISH_NEGATORS,
            ),
        };

        Self::from_lexicons(config, positive, negative, negators)
    }

    pub fn from_lexicons(
        config: SentimentConfig,
        positive_words: &[&str],
        negative_words: &[&str],
        negators: &[&str],
    ) -> Self {
        Self {
            config,
            positive_words: to_set(positive_words),
            negative_words: to_set(negative_words),
            negators: to_set(negators),
        }
    }

    /// Net polarity of a sentence; positive above zero, negative below.
    pub fn score(&self, sentence: &SentenceRef) -> i64 {
        let words: Vec<String> = tokenize_words(sentence)
            .iter()
            .map(|token| token.lowercase())
            .collect();

        let mut score = 0;

        for (index, word) in words.iter().enumerate() {
            let polarity = if self.positive_words.contains(word) {
                1
            } else if self.negative_words.contains(word) {
                -1
            } else {
                continue;
            };

            let window_start = index.saturating_sub(self.config.negation_window);
            let is_negated = words[window_start..index]
                .iter()
                .any(|previous| self.negators.contains(previous));

            score += if is_negated { -polarity } else { polarity };
        }

        score
    }
}

impl SentimentClassifier for LexiconSentimentAnalyzer {
    fn classify(&self, sentence: &SentenceRef) -> Result<SentimentLabel, Error> {
        let score = self.score(sentence);

        Ok(match score {
            s if s > 0 => SentimentLabel::Positive,
            s if s < 0 => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        })
    }
}

/// Counts how many sentences of `text` fall under each sentiment label.
pub fn count_sentiments<C: SentimentClassifier>(
    text: &str,
    classifier: &C,
) -> Result<SentimentCounts, Error> {
    let mut counts = SentimentCounts::default();

    for sentence in split_sentences(text) {
        counts.record(classifier.classify(&sentence)?);
    }

    debug!(
        "Sentiment counts: {} positive, {} negative, {} neutral",
        counts.positive, counts.negative, counts.neutral
    );

    Ok(counts)
}

/// Labels every sentence of `text`.
pub fn sentiment_detail<C: SentimentClassifier>(
    text: &str,
    classifier: &C,
) -> Result<SentimentDetail, Error> {
    let mut detail = SentimentDetail::default();

    for sentence in split_sentences(text) {
        let label = classifier.classify(&sentence)?;
        detail.insert(&sentence, label);
    }

    Ok(detail)
}
