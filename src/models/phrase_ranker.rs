use crate::types::SentenceRef;
use crate::Error;

/// A phrase proposed as representative of a sentence, with its salience score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPhrase {
    pub text: String,
    pub score: f64,
}

impl RankedPhrase {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// Scores the phrases of a single sentence by salience.
///
/// Implementations return phrases ordered best-first. An empty vector means
/// the sentence has no candidate phrase, which is not an error. A returned
/// `Err` aborts the whole extraction.
pub trait PhraseRanker {
    fn rank_phrases(&self, sentence: &SentenceRef) -> Result<Vec<RankedPhrase>, Error>;
}

impl<T: PhraseRanker + ?Sized> PhraseRanker for &T {
    fn rank_phrases(&self, sentence: &SentenceRef) -> Result<Vec<RankedPhrase>, Error> {
        (**self).rank_phrases(sentence)
    }
}

impl<T: PhraseRanker + ?Sized> PhraseRanker for Box<T> {
    fn rank_phrases(&self, sentence: &SentenceRef) -> Result<Vec<RankedPhrase>, Error> {
        (**self).rank_phrases(sentence)
    }
}
