use crate::types::Sentence;

/// Splits a text into sentences.
///
/// Segmentation is purely line-based: the text is split on `\n` and any
/// segment that is empty or whitespace-only is dropped. The remaining segments
/// are kept as-is (no trimming), preserving their original order.
///
/// # Example
/// ```
/// use keyword_sniffer::utils::split_sentences;
///
/// let sentences = split_sentences("el gato\n\n   \nun perro ");
/// assert_eq!(sentences, vec!["el gato".to_string(), "un perro ".to_string()]);
/// ```
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}
