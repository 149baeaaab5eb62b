use crate::types::{Keyword, KeywordFrequency};

/// An insertion-ordered table of unique keywords and their frequencies.
///
/// While the extractor works on it, entries are kept in first-discovered order;
/// the table handed back to callers is sorted by descending frequency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordFrequencyTable {
    entries: Vec<(Keyword, KeywordFrequency)>,
}

impl KeywordFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the keyword with the given frequency unless it is already present.
    ///
    /// Returns `true` if the keyword was inserted.
    pub fn insert_if_absent(&mut self, keyword: &str, frequency: KeywordFrequency) -> bool {
        if self.contains(keyword) {
            return false;
        }
        self.entries.push((keyword.to_string(), frequency));
        true
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.position(keyword).is_some()
    }

    pub fn get(&self, keyword: &str) -> Option<KeywordFrequency> {
        self.position(keyword).map(|index| self.entries[index].1)
    }

    /// Adds `amount` to a keyword's frequency. Returns `false` if the keyword is absent.
    pub fn add(&mut self, keyword: &str, amount: KeywordFrequency) -> bool {
        match self.position(keyword) {
            Some(index) => {
                self.entries[index].1 += amount;
                true
            }
            None => false,
        }
    }

    /// Removes a keyword, preserving the order of the remaining entries.
    pub fn remove(&mut self, keyword: &str) -> Option<KeywordFrequency> {
        self.position(keyword)
            .map(|index| self.entries.remove(index).1)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(keyword, _)| keyword.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, KeywordFrequency)> {
        self.entries
            .iter()
            .map(|(keyword, frequency)| (keyword.as_str(), *frequency))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all frequencies
    pub fn total(&self) -> KeywordFrequency {
        self.entries.iter().map(|(_, frequency)| frequency).sum()
    }

    pub fn into_vec(self) -> Vec<(Keyword, KeywordFrequency)> {
        self.entries
    }

    fn position(&self, keyword: &str) -> Option<usize> {
        // Tables hold one keyword per sentence at most, so a linear scan is fine
        self.entries.iter().position(|(existing, _)| existing == keyword)
    }
}

impl From<Vec<(Keyword, KeywordFrequency)>> for KeywordFrequencyTable {
    /// Builds a table from entries; later duplicates of a keyword are dropped.
    fn from(entries: Vec<(Keyword, KeywordFrequency)>) -> Self {
        let mut table = Self::new();
        for (keyword, frequency) in entries {
            table.insert_if_absent(&keyword, frequency);
        }
        table
    }
}

impl IntoIterator for KeywordFrequencyTable {
    type Item = (Keyword, KeywordFrequency);
    type IntoIter = std::vec::IntoIter<(Keyword, KeywordFrequency)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
