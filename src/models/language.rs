use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Languages with built-in stopwords, sentiment lexicons and readability constants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    Spanish,
    English,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" | "spanish" | "español" => Ok(Language::Spanish),
            "en" | "english" => Ok(Language::English),
            other => Err(Error::ConfigError(format!(
                "Unsupported language: {}",
                other
            ))),
        }
    }
}
