/// Computes the Levenshtein edit distance between two strings, by characters.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single-row dynamic programming table
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + if ca == cb { 0 } else { 1 };

            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[b.len()]
}

/// Normalized Levenshtein similarity in `[0, 1]`, where `1.0` means identical.
///
/// The distance is normalized by the character length of the longer string.
///
/// # Example
/// ```
/// use keyword_sniffer::utils::levenshtein_similarity;
///
/// assert_eq!(levenshtein_similarity("gato", "gato"), 1.0);
/// assert!(levenshtein_similarity("gato", "perro") < 0.5);
/// ```
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    // If both strings are equal, take the optimized path
    if a == b {
        return 1.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}
