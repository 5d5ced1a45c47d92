use std::collections::HashSet;

/// Characters stripped from both ends of a token before uniqueness counting.
pub const TRIM_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\''];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMetrics {
    pub word_count: usize,
    pub character_count: usize,
    pub unique_words: usize,
}

impl TextMetrics {
    pub fn compute(script: &str) -> Self {
        let mut word_count = 0;
        let mut seen = HashSet::new();

        for token in tokens(script) {
            word_count += 1;
            seen.insert(normalize_word(token));
        }

        Self {
            word_count,
            character_count: script.chars().count(),
            unique_words: seen.len(),
        }
    }
}

/// Splits text on whitespace, counting the ASCII information separators
/// (U+001C..=U+001F) as whitespace too.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
        .filter(|token| !token.is_empty())
}

/// Lower-cases a token after trimming [`TRIM_PUNCTUATION`] from its edges.
/// A token made only of punctuation normalizes to the empty string.
pub fn normalize_word(token: &str) -> String {
    token.trim_matches(TRIM_PUNCTUATION).to_lowercase()
}
