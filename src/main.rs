use keyword_sniffer::TextAnalyzer;
use log::{error, info};
use std::io::{self, Read};

fn main() {
    // Initialize the logger
    env_logger::init();

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let text_analyzer = TextAnalyzer::spanish();

    match text_analyzer.analyze(&input) {
        Ok(analysis) => {
            info!(
                "Found {} keywords across {} sentences",
                analysis.keyword_frequencies.len(),
                analysis.readability_scores.len()
            );

            println!("Keywords:");
            for (keyword, frequency) in analysis.keyword_frequencies.iter() {
                println!("{}: {}", keyword, frequency);
            }

            println!();
            println!("Sentiment:");
            println!("Positive: {}", analysis.sentiment_counts.positive);
            println!("Negative: {}", analysis.sentiment_counts.negative);
            println!("Neutral: {}", analysis.sentiment_counts.neutral);

            println!();
            println!("Readability:");
            for score in &analysis.readability_scores {
                println!("{:.2}", score);
            }
        }
        Err(e) => {
            error!("Error analyzing text: {}", e);
            std::process::exit(1);
        }
    }
}
