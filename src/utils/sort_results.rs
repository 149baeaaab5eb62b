use crate::types::{Keyword, KeywordFrequency};

/// Sorts keyword entries by frequency.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** None. The sort is stable, so entries with the same frequency
///   keep their relative order from the input (first-discovered order for the
///   keyword extractor).
///
/// ### Example:
/// ```rust
/// use keyword_sniffer::utils::sort_results;
///
/// let sorted = sort_results(vec![
///     ("perro".to_string(), 1),
///     ("gato".to_string(), 2),
///     ("ratón".to_string(), 1),
/// ]);
/// assert_eq!(sorted, vec![
///     ("gato".to_string(), 2),
///     ("perro".to_string(), 1),
///     ("ratón".to_string(), 1),
/// ]);
/// ```
pub fn sort_results(
    mut results: Vec<(Keyword, KeywordFrequency)>,
) -> Vec<(Keyword, KeywordFrequency)> {
    // `sort_by` is stable; ties are left untouched
    results.sort_by(|a, b| b.1.cmp(&a.1));

    results
}
