use crate::config::{DEFAULT_KEYWORD_EXTRACTOR_CONFIG, SPANISH_READABILITY_CONFIG};
use crate::models::{
    count_sentiments, score_readability, sentiment_detail, KeywordExtractor,
    KeywordExtractorConfig, KeywordFrequencyTable, Language, LexiconSentimentAnalyzer,
    PhraseRanker, ReadabilityScorer, SentimentClassifier, SentimentCounts, SentimentDetail,
    TextRankPhraseRanker,
};
use crate::types::ReadabilityScores;
use crate::Error;
use log::info;

/// Everything computed for one text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnalysis {
    pub keyword_frequencies: KeywordFrequencyTable,
    pub sentiment_counts: SentimentCounts,
    pub sentiment_detail: SentimentDetail,
    pub readability_scores: ReadabilityScores,
}

/// Owns the models used for a batch run.
///
/// Models are constructed once and shared by every text analyzed with this
/// instance, rather than being rebuilt per call.
pub struct TextAnalyzer<R: PhraseRanker, S: SentimentClassifier> {
    keyword_extractor_config: KeywordExtractorConfig,
    phrase_ranker: R,
    sentiment_classifier: S,
    readability_scorer: ReadabilityScorer,
}

impl TextAnalyzer<TextRankPhraseRanker, LexiconSentimentAnalyzer> {
    /// Default stack for Spanish posts: TextRank, the Spanish lexicon and
    /// Fernández Huerta readability.
    pub fn spanish() -> Self {
        Self::new(
            *DEFAULT_KEYWORD_EXTRACTOR_CONFIG,
            TextRankPhraseRanker::new(Language::Spanish),
            LexiconSentimentAnalyzer::new(Language::Spanish),
            ReadabilityScorer::new(SPANISH_READABILITY_CONFIG),
        )
    }
}

impl<R: PhraseRanker, S: SentimentClassifier> TextAnalyzer<R, S> {
    pub fn new(
        keyword_extractor_config: KeywordExtractorConfig,
        phrase_ranker: R,
        sentiment_classifier: S,
        readability_scorer: ReadabilityScorer,
    ) -> Self {
        Self {
            keyword_extractor_config,
            phrase_ranker,
            sentiment_classifier,
            readability_scorer,
        }
    }

    pub fn extract_keyword_frequencies(&self, text: &str) -> Result<KeywordFrequencyTable, Error> {
        KeywordExtractor::new(&self.keyword_extractor_config, &self.phrase_ranker).extract(text)
    }

    pub fn count_sentiments(&self, text: &str) -> Result<SentimentCounts, Error> {
        count_sentiments(text, &self.sentiment_classifier)
    }

    pub fn sentiment_detail(&self, text: &str) -> Result<SentimentDetail, Error> {
        sentiment_detail(text, &self.sentiment_classifier)
    }

    pub fn score_readability(&self, text: &str) -> ReadabilityScores {
        score_readability(text, &self.readability_scorer)
    }

    pub fn analyze(&self, text: &str) -> Result<TextAnalysis, Error> {
        let keyword_frequencies = self.extract_keyword_frequencies(text)?;
        let sentiment_counts = self.count_sentiments(text)?;
        let sentiment_detail = self.sentiment_detail(text)?;
        let readability_scores = self.score_readability(text);

        info!(
            "Analyzed {} sentences: {} keywords",
            sentiment_counts.total(),
            keyword_frequencies.len()
        );

        Ok(TextAnalysis {
            keyword_frequencies,
            sentiment_counts,
            sentiment_detail,
            readability_scores,
        })
    }
}
