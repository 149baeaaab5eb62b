use crate::models::{KeywordFrequencyTable, PhraseRanker};
use crate::types::{Keyword, Sentence};
use crate::utils::{levenshtein_similarity, normalize_keyword, sort_results, split_sentences};
use crate::Error;
use log::{debug, warn};

/// How a ranked phrase is turned into a candidate keyword.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeywordNormalization {
    /// Remove the characters listed in `STRIPPED_KEYWORD_CHARS`.
    Strip,
    /// Keep the phrase untouched, reproducing the historical batch tool, whose
    /// stripping step discarded its own result.
    Preserve,
}

/// How much of a merged keyword's frequency moves to its merge target.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MergeTransfer {
    /// The merged keyword's whole frequency.
    FullCount,
    /// Exactly one, regardless of the merged keyword's frequency (historical behavior).
    SingleIncrement,
}

#[derive(Debug, Copy, Clone)]
pub struct KeywordExtractorConfig {
    /// Keywords whose normalized Levenshtein similarity is strictly above this
    /// value are merged.
    pub similarity_threshold: f64,
    /// Normalized keywords shorter than this (in characters) are discarded.
    pub min_keyword_chars: usize,
    pub normalization: KeywordNormalization,
    pub merge_transfer: MergeTransfer,
}

/// Extracts a keyword frequency table from a text.
///
/// The pipeline runs in explicit stages, each consuming the previous stage's
/// output:
///
/// 1. `split_sentences`
/// 2. `extract_candidates`: the top-ranked phrase of every sentence
/// 3. `seed_keywords`: one zero-count entry per distinct candidate
/// 4. `count_keywords`: number of sentences containing each keyword
/// 5. `merge_similar_keywords`: greedy near-duplicate merge
/// 6. `sort_results`: stable sort by descending frequency
pub struct KeywordExtractor<'a, R: PhraseRanker> {
    config: &'a KeywordExtractorConfig,
    phrase_ranker: &'a R,
}

impl<'a, R: PhraseRanker> KeywordExtractor<'a, R> {
    pub fn new(config: &'a KeywordExtractorConfig, phrase_ranker: &'a R) -> Self {
        Self {
            config,
            phrase_ranker,
        }
    }

    pub fn extract(&self, text: &str) -> Result<KeywordFrequencyTable, Error> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            warn!("No sentences found in text; returning an empty keyword table");
            return Ok(KeywordFrequencyTable::new());
        }

        let candidates = self.extract_candidates(&sentences)?;
        let seeded = seed_keywords(&candidates);
        let counted = count_keywords(seeded, &sentences);
        let merged = merge_similar_keywords(
            counted,
            self.config.similarity_threshold,
            self.config.merge_transfer,
        );

        debug!(
            "Extracted {} keywords from {} sentences ({} candidates)",
            merged.len(),
            sentences.len(),
            candidates.len()
        );

        Ok(KeywordFrequencyTable::from(sort_results(merged.into_vec())))
    }

    /// Asks the phrase ranker for each sentence's top phrase and normalizes it.
    ///
    /// Sentences without a phrase, or whose normalized phrase is too short,
    /// contribute nothing. A ranker failure aborts the extraction.
    pub fn extract_candidates(&self, sentences: &[Sentence]) -> Result<Vec<Keyword>, Error> {
        let mut candidates = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            let ranked_phrases = self.phrase_ranker.rank_phrases(sentence)?;

            let top_phrase = match ranked_phrases.first() {
                Some(phrase) => phrase,
                None => continue,
            };

            let keyword = normalize_keyword(&top_phrase.text, self.config.normalization);
            if keyword.chars().count() < self.config.min_keyword_chars {
                debug!("Discarding short keyword {:?}", keyword);
                continue;
            }

            candidates.push(keyword);
        }

        Ok(candidates)
    }
}

/// Creates a table with one zero-count entry per distinct candidate, in
/// first-discovered order.
pub fn seed_keywords(candidates: &[Keyword]) -> KeywordFrequencyTable {
    let mut table = KeywordFrequencyTable::new();

    for candidate in candidates {
        table.insert_if_absent(candidate, 0);
    }

    table
}

/// Adds, for every keyword, the number of sentences that contain it as a
/// substring. A keyword counts at most once per sentence.
pub fn count_keywords(
    mut table: KeywordFrequencyTable,
    sentences: &[Sentence],
) -> KeywordFrequencyTable {
    let keywords: Vec<Keyword> = table.keywords().map(|keyword| keyword.to_string()).collect();

    for sentence in sentences {
        for keyword in &keywords {
            if sentence.contains(keyword.as_str()) {
                table.add(keyword, 1);
            }
        }
    }

    table
}

/// Greedily merges near-duplicate keywords.
///
/// Keywords are visited in table order. For each keyword still present, the
/// first other keyword (in table order) with a similarity above `threshold`
/// receives its transfer and the visited keyword is removed. Removed keywords
/// are never visited again; keywords that received a transfer may themselves
/// merge onward when their turn comes.
pub fn merge_similar_keywords(
    mut table: KeywordFrequencyTable,
    threshold: f64,
    merge_transfer: MergeTransfer,
) -> KeywordFrequencyTable {
    let visit_order: Vec<Keyword> = table.keywords().map(|keyword| keyword.to_string()).collect();

    for keyword in &visit_order {
        let frequency = match table.get(keyword) {
            Some(frequency) => frequency,
            None => continue,
        };

        let target = table
            .keywords()
            .find(|other| {
                *other != keyword.as_str() && levenshtein_similarity(keyword, other) > threshold
            })
            .map(|other| other.to_string());

        if let Some(target) = target {
            let amount = match merge_transfer {
                MergeTransfer::FullCount => frequency,
                MergeTransfer::SingleIncrement => 1,
            };

            debug!("Merging {:?} into {:?} (+{})", keyword, target, amount);

            table.add(&target, amount);
            table.remove(keyword);
        }
    }

    table
}
