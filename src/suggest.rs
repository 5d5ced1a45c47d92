use crate::metrics::tokens;

/// Advisory returned for every analyzed script until real generation exists.
pub const ANALYZE_SUGGESTION: &str = "Consider increasing conflict in Act II.";

/// Number of trailing tokens fed into an autocomplete completion.
pub const COMPLETION_WINDOW: usize = 3;

pub fn analyze_suggestions(_script: &str) -> Vec<String> {
    vec![ANALYZE_SUGGESTION.to_string()]
}

/// Takes the last [`COMPLETION_WINDOW`] tokens of `current_text` in reverse
/// order, joined by single spaces. Always yields exactly one completion, which
/// is empty when the text has no tokens.
pub fn autocomplete_completions(current_text: &str) -> Vec<String> {
    let words: Vec<&str> = tokens(current_text).collect();
    let start = words.len().saturating_sub(COMPLETION_WINDOW);
    let completion = words[start..]
        .iter()
        .rev()
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    vec![completion]
}
