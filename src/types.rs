// Types listed here are either shared across multiple files and/or exposed via the library.

/// A single line of the analyzed text, as produced by `split_sentences`.
pub type Sentence = String;

/// Represents a borrowed view of a sentence. This is used when ownership is not required.
pub type SentenceRef = str;

/// A candidate keyword, as proposed by a `PhraseRanker` and normalized afterwards.
pub type Keyword = String;

/// Represents the number of sentences in which a keyword was found, plus any
/// counts transferred to it by the near-duplicate merge.
pub type KeywordFrequency = usize;

/// Flesch reading ease score for each sentence, in sentence order.
pub type ReadabilityScores = Vec<f64>;

/// Index of a token within the token sequence of a single sentence.
pub type TokenIndex = usize;

/// Node identifier within a co-occurrence graph.
pub type NodeId = u32;
