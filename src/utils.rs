pub mod count_syllables;
pub mod levenshtein_similarity;
pub mod normalize_keyword;
pub mod sort_results;
pub mod split_sentences;
pub mod tokenize;

pub use count_syllables::{count_english_syllables, count_spanish_syllables, count_syllables};
pub use levenshtein_similarity::{levenshtein_distance, levenshtein_similarity};
pub use normalize_keyword::{normalize_keyword, strip_keyword_chars};
pub use sort_results::sort_results;
pub use split_sentences::split_sentences;
pub use tokenize::{tokenize_words, WordToken};
