#![allow(dead_code)] // Not every integration test uses every helper

use csv::Reader;
use keyword_sniffer::{
    Error, PhraseRanker, RankedPhrase, SentimentClassifier, SentimentLabel,
};
use std::fs;
use std::path::{Path, PathBuf};

pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub fn test_file_path(file_name: &str) -> PathBuf {
    Path::new(TEST_FILES_DIRECTORY).join(file_name)
}

/// Reads a text fixture, skipping `COMMENT:` lines.
pub fn read_test_file(file_name: &str) -> String {
    let raw_text = fs::read_to_string(test_file_path(file_name)).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| !line.trim_start().starts_with("COMMENT:"))
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Loads an expected keyword table from a `keyword,count` CSV file.
///
/// Keywords are read verbatim, so surrounding spaces are significant.
pub fn load_expected_keywords(
    file_name: &str,
) -> Result<Vec<(String, usize)>, Box<dyn std::error::Error>> {
    let mut expected = Vec::new();
    let mut reader = Reader::from_path(test_file_path(file_name))?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 2 {
            let keyword = record.get(0).unwrap_or_default().to_string();
            let count: usize = record.get(1).unwrap_or_default().trim().parse()?;
            expected.push((keyword, count));
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(expected)
}

/// Returns every listed phrase found in the sentence, in list order.
///
/// Stands in for a real phrase-ranking model so that the extractor's output is
/// fully predictable.
pub struct SubstringPhraseRanker {
    phrases: Vec<String>,
}

impl SubstringPhraseRanker {
    pub fn new(phrases: &[&str]) -> Self {
        Self {
            phrases: phrases.iter().map(|phrase| phrase.to_string()).collect(),
        }
    }
}

impl PhraseRanker for SubstringPhraseRanker {
    fn rank_phrases(&self, sentence: &str) -> Result<Vec<RankedPhrase>, Error> {
        Ok(self
            .phrases
            .iter()
            .filter(|phrase| sentence.contains(phrase.as_str()))
            .enumerate()
            .map(|(rank, phrase)| RankedPhrase::new(phrase.as_str(), 1.0 / (rank + 1) as f64))
            .collect())
    }
}

/// Fails on any sentence containing `trigger`, otherwise ranks the whole sentence.
pub struct FailingPhraseRanker {
    pub trigger: String,
}

impl PhraseRanker for FailingPhraseRanker {
    fn rank_phrases(&self, sentence: &str) -> Result<Vec<RankedPhrase>, Error> {
        if sentence.contains(self.trigger.as_str()) {
            return Err(Error::PhraseRankerError(format!(
                "Model failed on sentence: {}",
                sentence
            )));
        }
        Ok(vec![RankedPhrase::new(sentence, 1.0)])
    }
}

/// Fails on any sentence containing `trigger`, otherwise labels it neutral.
pub struct FailingSentimentClassifier {
    pub trigger: String,
}

impl SentimentClassifier for FailingSentimentClassifier {
    fn classify(&self, sentence: &str) -> Result<SentimentLabel, Error> {
        if sentence.contains(self.trigger.as_str()) {
            return Err(Error::SentimentClassifierError(
                "Model unavailable".to_string(),
            ));
        }
        Ok(SentimentLabel::Neutral)
    }
}
