/// A word token with its byte range within the source text.
///
/// Note: `end` is non-inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct WordToken<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> WordToken<'a> {
    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_numeric(&self) -> bool {
        self.text.chars().all(|c| c.is_numeric())
    }
}

/// Splits text into word tokens: maximal runs of alphanumeric characters.
///
/// An apostrophe is kept when it sits between two alphanumeric characters
/// (`l'estat`, `don't`), otherwise it acts as a separator like any other
/// punctuation or whitespace.
///
/// Note: This explicitly does not modify the case of the text.
pub fn tokenize_words(text: &str) -> Vec<WordToken<'_>> {
    let mut tokens = Vec::new();
    let mut token_start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        let is_inner_apostrophe = (c == '\'' || c == '’')
            && token_start.is_some()
            && chars
                .peek()
                .map_or(false, |&(_, next)| next.is_alphanumeric());

        if c.is_alphanumeric() || is_inner_apostrophe {
            if token_start.is_none() {
                token_start = Some(index);
            }
        } else if let Some(start) = token_start.take() {
            tokens.push(WordToken {
                text: &text[start..index],
                start,
                end: index,
            });
        }
    }

    if let Some(start) = token_start {
        tokens.push(WordToken {
            text: &text[start..],
            start,
            end: text.len(),
        });
    }

    tokens
}
