use crate::config::DEFAULT_TEXT_RANK_CONFIG;
use crate::models::{
    CooccurrenceGraph, Language, PageRankConfig, PhraseRanker, RankedPhrase, StopwordFilter,
};
use crate::types::{SentenceRef, TokenIndex};
use crate::utils::{tokenize_words, WordToken};
use crate::Error;
use log::trace;
use rustc_hash::FxHashMap;

#[derive(Debug, Copy, Clone)]
pub struct TextRankConfig {
    /// Number of candidate words spanned by one co-occurrence window
    pub window_size: usize,
    pub max_phrase_tokens: usize,
    pub min_token_chars: usize,
    pub damping: f64,
    pub max_iterations: usize,
    pub convergence_threshold: f64,
}

impl TextRankConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.window_size < 2 {
            return Err(Error::ConfigError(format!(
                "window_size must be at least 2, got {}",
                self.window_size
            )));
        }
        if self.max_phrase_tokens == 0 {
            return Err(Error::ConfigError(
                "max_phrase_tokens must be at least 1".to_string(),
            ));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(Error::ConfigError(format!(
                "damping must be within (0, 1), got {}",
                self.damping
            )));
        }
        Ok(())
    }
}

/// Sentence-level TextRank.
///
/// Content words (non-stopwords) are ranked with PageRank over a co-occurrence
/// graph. Phrases are runs of adjacent content words, scored by the sum of
/// their word ranks, and keep the original casing of the sentence.
#[derive(Debug, Clone)]
pub struct TextRankPhraseRanker {
    config: TextRankConfig,
    stopword_filter: StopwordFilter,
}

struct PhraseCandidate<'a> {
    text: &'a str,
    score: f64,
}

impl TextRankPhraseRanker {
    pub fn new(language: Language) -> Self {
        Self {
            config: DEFAULT_TEXT_RANK_CONFIG,
            stopword_filter: StopwordFilter::new(language),
        }
    }

    pub fn with_custom_config(language: Language, config: TextRankConfig) -> Result<Self, Error> {
        Self::with_stopword_filter(config, StopwordFilter::new(language))
    }

    pub fn with_stopword_filter(
        config: TextRankConfig,
        stopword_filter: StopwordFilter,
    ) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            config,
            stopword_filter,
        })
    }

    pub fn config(&self) -> &TextRankConfig {
        &self.config
    }

    fn is_graph_candidate(&self, token: &WordToken) -> bool {
        token.char_count() >= self.config.min_token_chars
            && !token.is_numeric()
            && !self.stopword_filter.is_stopword(token.text)
    }

    /// Groups candidate tokens into runs of adjacent words, split into chunks of
    /// at most `max_phrase_tokens`. Anything other than whitespace between two
    /// tokens ends a run.
    fn phrase_spans(
        &self,
        sentence: &SentenceRef,
        tokens: &[WordToken],
        is_candidate: &[bool],
    ) -> Vec<(TokenIndex, TokenIndex)> {
        let mut runs: Vec<Vec<TokenIndex>> = Vec::new();
        let mut current: Vec<TokenIndex> = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            if !is_candidate[index] {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
                continue;
            }

            if let Some(&previous) = current.last() {
                let gap = &sentence[tokens[previous].end..token.start];
                if !gap.trim().is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
            current.push(index);
        }
        if !current.is_empty() {
            runs.push(current);
        }

        runs.iter()
            .flat_map(|run| run.chunks(self.config.max_phrase_tokens))
            .map(|chunk| (chunk[0], chunk[chunk.len() - 1]))
            .collect()
    }
}

impl PhraseRanker for TextRankPhraseRanker {
    fn rank_phrases(&self, sentence: &SentenceRef) -> Result<Vec<RankedPhrase>, Error> {
        let tokens = tokenize_words(sentence);
        let is_candidate: Vec<bool> = tokens
            .iter()
            .map(|token| self.is_graph_candidate(token))
            .collect();

        let candidate_words: Vec<String> = tokens
            .iter()
            .zip(&is_candidate)
            .filter(|(_, &candidate)| candidate)
            .map(|(token, _)| token.lowercase())
            .collect();

        if candidate_words.is_empty() {
            return Ok(vec![]);
        }

        let graph = CooccurrenceGraph::from_words(&candidate_words, self.config.window_size);
        let page_rank = graph.page_rank(&PageRankConfig {
            damping: self.config.damping,
            max_iterations: self.config.max_iterations,
            threshold: self.config.convergence_threshold,
        });

        trace!(
            "TextRank graph: {} nodes, {} edges, {} iterations (converged: {})",
            graph.node_count(),
            graph.edge_count(),
            page_rank.iterations,
            page_rank.converged
        );

        let mut candidates: Vec<PhraseCandidate> = Vec::new();
        let mut seen: FxHashMap<String, usize> = FxHashMap::default();

        for (first, last) in self.phrase_spans(sentence, &tokens, &is_candidate) {
            let text = &sentence[tokens[first].start..tokens[last].end];
            let score: f64 = tokens[first..=last]
                .iter()
                .filter_map(|token| graph.node_id(&token.lowercase()))
                .map(|node| page_rank.score(node))
                .sum();

            // The same phrase may appear more than once; keep its best score
            match seen.get(&text.to_lowercase()) {
                Some(&position) => {
                    let existing = &mut candidates[position];
                    existing.score = existing.score.max(score);
                }
                None => {
                    seen.insert(text.to_lowercase(), candidates.len());
                    candidates.push(PhraseCandidate { text, score });
                }
            }
        }

        // Stable sort, so equal scores keep sentence order
        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(candidates
            .into_iter()
            .map(|candidate| RankedPhrase::new(candidate.text, candidate.score))
            .collect())
    }
}
