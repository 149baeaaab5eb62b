#[path = "../test_utils/lib.rs"]
mod test_utils;

use keyword_sniffer::{
    count_sentiments, sentiment_detail, Error, Language, LexiconSentimentAnalyzer,
    SentimentConfig, SentimentLabel,
};
use test_utils::{read_test_file, FailingSentimentClassifier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_cover_every_sentence() {
        let analyzer = LexiconSentimentAnalyzer::new(Language::Spanish);
        let text = read_test_file("reforma_posts.txt");

        let counts = count_sentiments(&text, &analyzer).unwrap();

        // Blank and whitespace-only lines are not sentences
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_empty_text_counts_nothing() {
        let analyzer = LexiconSentimentAnalyzer::new(Language::Spanish);
        let counts = count_sentiments("", &analyzer).unwrap();
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_spanish_labels() {
        let analyzer = LexiconSentimentAnalyzer::new(Language::Spanish);
        let text = "el plan es excelente\nla policía es corrupta\nmañana llueve";

        let counts = count_sentiments(text, &analyzer).unwrap();

        assert_eq!(counts.positive, 1);
        assert_eq!(counts.negative, 1);
        assert_eq!(counts.neutral, 1);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let analyzer = LexiconSentimentAnalyzer::new(Language::Spanish);
        let detail = sentiment_detail("no es bueno", &analyzer).unwrap();
        assert_eq!(detail.get("no es bueno"), Some(SentimentLabel::Negative));
    }

    #[test]
    fn test_negation_outside_window_is_ignored() {
        let analyzer = LexiconSentimentAnalyzer::with_custom_config(
            Language::English,
            SentimentConfig { negation_window: 1 },
        );
        let detail = sentiment_detail("not that it was good", &analyzer).unwrap();
        assert_eq!(
            detail.get("not that it was good"),
            Some(SentimentLabel::Positive)
        );
    }

    #[test]
    fn test_detail_keeps_sentence_order_and_collapses_duplicates() {
        let analyzer = LexiconSentimentAnalyzer::new(Language::Spanish);
        let text = "todo bien\nqué terrible\ntodo bien";

        let detail = sentiment_detail(text, &analyzer).unwrap();
        let sentences: Vec<&str> = detail.iter().map(|(sentence, _)| sentence).collect();

        assert_eq!(detail.len(), 2);
        assert_eq!(sentences, vec!["todo bien", "qué terrible"]);
        assert_eq!(detail.get("qué terrible"), Some(SentimentLabel::Negative));
    }

    #[test]
    fn test_labels_use_short_codes() {
        assert_eq!(SentimentLabel::Positive.to_string(), "POS");
        assert_eq!(SentimentLabel::Negative.to_string(), "NEG");
        assert_eq!(SentimentLabel::Neutral.to_string(), "NEU");
    }

    #[test]
    fn test_classifier_failure_propagates() {
        let classifier = FailingSentimentClassifier {
            trigger: "boom".to_string(),
        };

        let counts = count_sentiments("hola\nboom", &classifier);
        let detail = sentiment_detail("hola\nboom", &classifier);

        assert!(matches!(counts, Err(Error::SentimentClassifierError(_))));
        assert!(matches!(detail, Err(Error::SentimentClassifierError(_))));
    }
}
