#[path = "../test_utils/lib.rs"]
mod test_utils;

use keyword_sniffer::{
    extract_keyword_frequencies, extract_keyword_frequencies_with_custom_config, Error,
    KeywordExtractorConfig, KeywordNormalization, MergeTransfer,
    DEFAULT_KEYWORD_EXTRACTOR_CONFIG,
};
use test_utils::{
    load_expected_keywords, read_test_file, FailingPhraseRanker, SubstringPhraseRanker,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(
        normalization: KeywordNormalization,
        merge_transfer: MergeTransfer,
    ) -> KeywordExtractorConfig {
        KeywordExtractorConfig {
            normalization,
            merge_transfer,
            ..*DEFAULT_KEYWORD_EXTRACTOR_CONFIG
        }
    }

    #[test]
    fn test_empty_text_yields_empty_table() {
        let ranker = SubstringPhraseRanker::new(&["gato"]);
        let results = extract_keyword_frequencies("", &ranker).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_blank_lines_yield_empty_table() {
        let ranker = SubstringPhraseRanker::new(&["gato"]);
        let results = extract_keyword_frequencies("\n   \n\t\n", &ranker).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_gato_perro_scenario() {
        let ranker = SubstringPhraseRanker::new(&["gato", "perro"]);
        let text = "el gato corre\nel gato corre rápido\nun perro ladra";

        let results = extract_keyword_frequencies(text, &ranker).unwrap();

        assert_eq!(
            results.into_vec(),
            vec![("gato".to_string(), 2), ("perro".to_string(), 1)]
        );
    }

    #[test]
    fn test_trailing_space_variant_merges() {
        let ranker = SubstringPhraseRanker::new(&["reforma fiscal ", "reforma fiscal"]);
        let text = "sí a la reforma fiscal\nno a la reforma fiscal\nla reforma fiscal ahora";

        let results = extract_keyword_frequencies(text, &ranker).unwrap();

        // "reforma fiscal" (3) merged into "reforma fiscal " (1)
        assert_eq!(results.len(), 1);
        assert_eq!(results.get("reforma fiscal "), Some(4));
        assert_eq!(results.get("reforma fiscal"), None);
    }

    #[test]
    fn test_only_top_phrase_is_used() {
        // Both phrases are found in the sentence, but only the first one is a candidate
        let ranker = SubstringPhraseRanker::new(&["gato", "ratón"]);
        let results = extract_keyword_frequencies("el gato y el ratón", &ranker).unwrap();

        assert_eq!(results.into_vec(), vec![("gato".to_string(), 1)]);
    }

    #[test]
    fn test_count_conservation_without_merges() {
        let ranker = SubstringPhraseRanker::new(&["sol", "lluvia", "nieve"]);
        let text = "sol y lluvia\nsolo sol\nnieve\nnieve y sol\nnada";

        let results = extract_keyword_frequencies(text, &ranker).unwrap();

        // Seeds are "sol" and "nieve"; "sol" is found in lines 1, 2, 4 and
        // "nieve" in lines 3, 4
        assert_eq!(results.total(), 5);
        assert_eq!(results.get("sol"), Some(3));
        assert_eq!(results.get("nieve"), Some(2));
        assert_eq!(results.get("lluvia"), None);
    }

    #[test]
    fn test_results_are_sorted_descending() {
        let ranker = SubstringPhraseRanker::new(&["congreso", "votación", "marcha"]);
        let text = "marcha\nvotación\ncongreso\nvotación hoy\nla votación";

        let results = extract_keyword_frequencies(text, &ranker).unwrap();
        let counts: Vec<usize> = results.iter().map(|(_, count)| count).collect();

        for pair in counts.windows(2) {
            assert!(pair[0] >= pair[1], "Not descending: {:?}", counts);
        }
        assert_eq!(results.keywords().next(), Some("votación"));
    }

    #[test]
    fn test_ties_keep_first_discovered_order() {
        let ranker = SubstringPhraseRanker::new(&["perro", "gato"]);
        let text = "un perro\nun gato";

        let results = extract_keyword_frequencies(text, &ranker).unwrap();

        assert_eq!(
            results.into_vec(),
            vec![("perro".to_string(), 1), ("gato".to_string(), 1)]
        );
    }

    #[test]
    fn test_short_keywords_are_discarded() {
        // "#a" normalizes to "a", and "#" to an empty string
        let ranker = SubstringPhraseRanker::new(&["#a", "#"]);
        let results = extract_keyword_frequencies("#a\n#", &ranker).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_sentences_without_phrases_contribute_nothing() {
        let ranker = SubstringPhraseRanker::new(&["gato"]);
        let results =
            extract_keyword_frequencies("sin nada\nel gato\notra línea", &ranker).unwrap();
        assert_eq!(results.into_vec(), vec![("gato".to_string(), 1)]);
    }

    #[test]
    fn test_ranker_failure_propagates() {
        let ranker = FailingPhraseRanker {
            trigger: "boom".to_string(),
        };

        let result = extract_keyword_frequencies("todo bien\nboom\notra", &ranker);

        assert!(matches!(result, Err(Error::PhraseRankerError(_))));
    }

    #[test]
    fn test_stripped_normalization_fixture() {
        let ranker =
            SubstringPhraseRanker::new(&["#reforma fiscal", "reforma fiscal", "presupuesto", "marcha"]);
        let text = read_test_file("reforma_posts.txt");
        let expected = load_expected_keywords("reforma_posts_expected.csv").unwrap();

        let results = extract_keyword_frequencies(&text, &ranker).unwrap();

        assert_eq!(results.into_vec(), expected);
    }

    #[test]
    fn test_historical_preserve_normalization_fixture() {
        let ranker =
            SubstringPhraseRanker::new(&["#reforma fiscal", "reforma fiscal", "presupuesto", "marcha"]);
        let text = read_test_file("reforma_posts.txt");
        let expected = load_expected_keywords("reforma_posts_expected_preserve.csv").unwrap();
        let config = config_with(KeywordNormalization::Preserve, MergeTransfer::FullCount);

        let results =
            extract_keyword_frequencies_with_custom_config(&config, &text, &ranker).unwrap();

        assert_eq!(results.into_vec(), expected);
    }

    #[test]
    fn test_merge_fixture() {
        let ranker = SubstringPhraseRanker::new(&["marchas", "marcha", "congreso", "votación"]);
        let text = read_test_file("marcha_posts.txt");
        let expected = load_expected_keywords("marcha_posts_expected.csv").unwrap();

        let results = extract_keyword_frequencies(&text, &ranker).unwrap();

        assert_eq!(results.into_vec(), expected);
    }

    #[test]
    fn test_historical_single_increment_transfer() {
        let ranker = SubstringPhraseRanker::new(&["marchas", "marcha", "congreso", "votación"]);
        let text = read_test_file("marcha_posts.txt");
        let config = config_with(KeywordNormalization::Strip, MergeTransfer::SingleIncrement);

        let results =
            extract_keyword_frequencies_with_custom_config(&config, &text, &ranker).unwrap();

        // "marcha" (2) merges into "marchas" (1) with a single increment
        assert_eq!(
            results.into_vec(),
            vec![
                ("marchas".to_string(), 2),
                ("congreso".to_string(), 2),
                ("votación".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_higher_threshold_disables_merge() {
        let ranker = SubstringPhraseRanker::new(&["marchas", "marcha", "congreso", "votación"]);
        let text = read_test_file("marcha_posts.txt");
        let config = KeywordExtractorConfig {
            similarity_threshold: 0.9,
            ..*DEFAULT_KEYWORD_EXTRACTOR_CONFIG
        };

        let results =
            extract_keyword_frequencies_with_custom_config(&config, &text, &ranker).unwrap();

        assert_eq!(results.get("marcha"), Some(2));
        assert_eq!(results.get("marchas"), Some(1));
        assert_eq!(results.len(), 4);
    }
}
