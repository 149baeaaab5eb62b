use crate::constants::STRIPPED_KEYWORD_CHARS;
use crate::models::KeywordNormalization;
use crate::types::Keyword;

/// Removes the characters in `STRIPPED_KEYWORD_CHARS` from a phrase.
///
/// Applying it more than once yields the same result as applying it once.
///
/// # Example
/// ```
/// use keyword_sniffer::utils::strip_keyword_chars;
///
/// assert_eq!(strip_keyword_chars("#Reforma-fiscal!"), "Reformafiscal");
/// ```
pub fn strip_keyword_chars(phrase: &str) -> Keyword {
    phrase
        .chars()
        .filter(|c| !STRIPPED_KEYWORD_CHARS.contains(c))
        .collect()
}

/// Normalizes a ranked phrase into a candidate keyword.
///
/// `KeywordNormalization::Preserve` returns the phrase untouched, which is how
/// the historical batch tool behaved.
pub fn normalize_keyword(phrase: &str, normalization: KeywordNormalization) -> Keyword {
    match normalization {
        KeywordNormalization::Strip => strip_keyword_chars(phrase),
        KeywordNormalization::Preserve => phrase.to_string(),
    }
}
