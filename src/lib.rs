#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::{
    DEFAULT_KEYWORD_EXTRACTOR_CONFIG, DEFAULT_SENTIMENT_CONFIG, DEFAULT_TEXT_RANK_CONFIG,
    ENGLISH_READABILITY_CONFIG, SPANISH_READABILITY_CONFIG,
};
mod constants;
pub use constants::STRIPPED_KEYWORD_CHARS;
pub mod models;
pub use models::{
    count_sentiments, score_readability, sentiment_detail, Error, KeywordExtractor,
    KeywordExtractorConfig, KeywordFrequencyTable, KeywordNormalization, Language,
    LexiconSentimentAnalyzer, MergeTransfer, PhraseRanker, RankedPhrase, ReadabilityConfig,
    ReadabilityScorer, SentimentClassifier, SentimentConfig, SentimentCounts, SentimentDetail,
    SentimentLabel, StopwordFilter, TextAnalysis, TextAnalyzer, TextRankConfig,
    TextRankPhraseRanker,
};
pub mod types;
pub mod utils;
pub use types::{Keyword, KeywordFrequency, ReadabilityScores, Sentence};

/// Extracts keyword frequencies from a text using the default configuration.
///
/// The text is split into lines; the top phrase proposed by `phrase_ranker`
/// for each line becomes a candidate keyword. The returned table is sorted by
/// descending frequency.
pub fn extract_keyword_frequencies<R: PhraseRanker>(
    text: &str,
    phrase_ranker: &R,
) -> Result<KeywordFrequencyTable, Error> {
    let keyword_frequencies = extract_keyword_frequencies_with_custom_config(
        DEFAULT_KEYWORD_EXTRACTOR_CONFIG,
        text,
        phrase_ranker,
    )?;

    Ok(keyword_frequencies)
}

pub fn extract_keyword_frequencies_with_custom_config<R: PhraseRanker>(
    keyword_extractor_config: &KeywordExtractorConfig,
    text: &str,
    phrase_ranker: &R,
) -> Result<KeywordFrequencyTable, Error> {
    let keyword_extractor = KeywordExtractor::new(keyword_extractor_config, phrase_ranker);

    keyword_extractor.extract(text)
}
