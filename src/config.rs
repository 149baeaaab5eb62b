use crate::models::{
    KeywordExtractorConfig, KeywordNormalization, Language, MergeTransfer, ReadabilityConfig,
    SentimentConfig, TextRankConfig,
};

pub const DEFAULT_KEYWORD_EXTRACTOR_CONFIG: &KeywordExtractorConfig = &KeywordExtractorConfig {
    similarity_threshold: 0.5,
    min_keyword_chars: 2,
    normalization: KeywordNormalization::Strip,
    merge_transfer: MergeTransfer::FullCount,
};

pub const DEFAULT_TEXT_RANK_CONFIG: TextRankConfig = TextRankConfig {
    window_size: 3,
    max_phrase_tokens: 4,
    min_token_chars: 2,
    damping: 0.85,
    max_iterations: 100,
    convergence_threshold: 1e-6,
};

pub const DEFAULT_SENTIMENT_CONFIG: SentimentConfig = SentimentConfig { negation_window: 3 };

/// Fernández Huerta's adaptation of Flesch reading ease
pub const SPANISH_READABILITY_CONFIG: ReadabilityConfig = ReadabilityConfig {
    language: Language::Spanish,
    base: 206.84,
    sentence_length_weight: 1.02,
    syllables_per_word_weight: 60.0,
};

pub const ENGLISH_READABILITY_CONFIG: ReadabilityConfig = ReadabilityConfig {
    language: Language::English,
    base: 206.835,
    sentence_length_weight: 1.015,
    syllables_per_word_weight: 84.6,
};
