use crate::models::Language;
use crate::types::{ReadabilityScores, SentenceRef};
use crate::utils::{count_syllables, split_sentences};

/// Flesch reading ease constants for one language.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReadabilityConfig {
    pub language: Language,
    pub base: f64,
    pub sentence_length_weight: f64,
    pub syllables_per_word_weight: f64,
}

/// Per-sentence Flesch reading ease.
///
/// `base - sentence_length_weight * (words / sentences) - syllables_per_word_weight * (syllables / words)`,
/// rounded to two decimals. Higher scores mean easier text.
#[derive(Debug, Clone)]
pub struct ReadabilityScorer {
    config: ReadabilityConfig,
}

/// Counts of the units the Flesch formula is built from.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TextStatistics {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
}

impl ReadabilityScorer {
    pub fn new(config: ReadabilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReadabilityConfig {
        &self.config
    }

    pub fn statistics(&self, sentence: &SentenceRef) -> TextStatistics {
        let words: Vec<&str> = sentence
            .split_whitespace()
            .filter(|word| word.chars().any(|c| c.is_alphanumeric()))
            .collect();

        let syllables = words
            .iter()
            .map(|word| {
                let letters: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
                count_syllables(&letters, self.config.language)
            })
            .sum::<usize>();

        // A line may still hold several sentences; only those with more than
        // two words count, and there is always at least one.
        let sentences = sentence
            .split(|c: char| matches!(c, '.' | '!' | '?'))
            .filter(|segment| segment.split_whitespace().count() > 2)
            .count()
            .max(1);

        TextStatistics {
            words: words.len(),
            sentences,
            syllables,
        }
    }

    pub fn score(&self, sentence: &SentenceRef) -> f64 {
        let statistics = self.statistics(sentence);

        let (average_sentence_length, average_syllables_per_word) = if statistics.words == 0 {
            (0.0, 0.0)
        } else {
            (
                statistics.words as f64 / statistics.sentences as f64,
                statistics.syllables as f64 / statistics.words as f64,
            )
        };

        let score = self.config.base
            - self.config.sentence_length_weight * average_sentence_length
            - self.config.syllables_per_word_weight * average_syllables_per_word;

        (score * 100.0).round() / 100.0
    }
}

/// Scores every sentence of `text`, in sentence order.
pub fn score_readability(text: &str, scorer: &ReadabilityScorer) -> ReadabilityScores {
    split_sentences(text)
        .iter()
        .map(|sentence| scorer.score(sentence))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ENGLISH_READABILITY_CONFIG, SPANISH_READABILITY_CONFIG};

    #[test]
    fn test_spanish_statistics() {
        let scorer = ReadabilityScorer::new(SPANISH_READABILITY_CONFIG);
        let statistics = scorer.statistics("el gato corre rápido");

        assert_eq!(
            statistics,
            TextStatistics {
                words: 4,
                sentences: 1,
                syllables: 8,
            }
        );
    }

    #[test]
    fn test_spanish_score() {
        let scorer = ReadabilityScorer::new(SPANISH_READABILITY_CONFIG);
        // 206.84 - 1.02 * 4 - 60.0 * 8 / 4 = 82.76
        assert_eq!(scorer.score("el gato corre rápido"), 82.76);
    }

    #[test]
    fn test_shorter_words_read_easier() {
        let scorer = ReadabilityScorer::new(SPANISH_READABILITY_CONFIG);
        let easy = scorer.score("el sol da luz");
        let hard = scorer.score("la administración gubernamental institucionaliza");
        assert!(easy > hard);
    }

    #[test]
    fn test_inner_sentences_are_counted() {
        let scorer = ReadabilityScorer::new(ENGLISH_READABILITY_CONFIG);
        let statistics = scorer.statistics("The cat sat down. The dog ran off. Ok.");
        assert_eq!(statistics.sentences, 2);
        assert_eq!(statistics.words, 9);
    }

    #[test]
    fn test_sentence_without_words_scores_base() {
        let scorer = ReadabilityScorer::new(SPANISH_READABILITY_CONFIG);
        assert_eq!(scorer.score("!!! ..."), 206.84);
    }

    #[test]
    fn test_score_readability_one_score_per_sentence() {
        let scorer = ReadabilityScorer::new(SPANISH_READABILITY_CONFIG);
        let scores = score_readability("uno dos\n\ntres cuatro\ncinco", &scorer);
        assert_eq!(scores.len(), 3);
    }
}
