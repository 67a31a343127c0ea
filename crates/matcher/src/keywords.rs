use crate::types::KeywordSet;

/// Function words dropped from queries (German, English, Ukrainian, Russian).
pub const STOP_WORDS: &[&str] = &[
    // de
    "der", "die", "das", "ein", "eine", "und", "oder", "für", "mit", "ich", "bin", "suche",
    // en
    "the", "a", "an", "and", "or", "for", "with", "i", "am", "looking", "search",
    // uk / ru
    "я", "ищу", "для", "с", "и", "или", "що", "шукаю",
];

/// Tokens with this many characters or fewer are discarded.
pub const MIN_KEYWORD_CHARS: usize = 3;

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Extract search keywords from a free-text query.
///
/// The query is lowercased, every character that is neither a word character
/// nor whitespace becomes a separator, and the remaining tokens are filtered
/// against [`STOP_WORDS`] and [`MIN_KEYWORD_CHARS`]. Length is counted in
/// characters, so Cyrillic tokens are treated like Latin ones.
///
/// Returns an empty set when nothing survives; callers treat that as "no match
/// possible" rather than an error.
pub fn extract_keywords(query: &str) -> KeywordSet {
    let normalized: String = query
        .to_lowercase()
        .chars()
        .map(|ch| {
            if is_word_char(ch) || ch.is_whitespace() {
                ch
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| !is_stop_word(token))
        .filter(|token| token.chars().count() >= MIN_KEYWORD_CHARS)
        .collect()
}
