pub mod cooccurrence_graph;
pub use cooccurrence_graph::{CooccurrenceGraph, PageRankConfig, PageRankResult};

pub mod error;
pub use error::Error;

pub mod keyword_extractor;
pub use keyword_extractor::{
    count_keywords, merge_similar_keywords, seed_keywords, KeywordExtractor,
    KeywordExtractorConfig, KeywordNormalization, MergeTransfer,
};

pub mod keyword_frequency_table;
pub use keyword_frequency_table::KeywordFrequencyTable;

pub mod language;
pub use language::Language;

pub mod phrase_ranker;
pub use phrase_ranker::{PhraseRanker, RankedPhrase};

pub mod readability_scorer;
pub use readability_scorer::{
    score_readability, ReadabilityConfig, ReadabilityScorer, TextStatistics,
};

pub mod sentiment_analyzer;
pub use sentiment_analyzer::{
    count_sentiments, sentiment_detail, LexiconSentimentAnalyzer, SentimentClassifier,
    SentimentConfig, SentimentCounts, SentimentDetail, SentimentLabel,
};

pub mod stopword_filter;
pub use stopword_filter::StopwordFilter;

pub mod text_analyzer;
pub use text_analyzer::{TextAnalysis, TextAnalyzer};

pub mod text_rank_phrase_ranker;
pub use text_rank_phrase_ranker::{TextRankConfig, TextRankPhraseRanker};
