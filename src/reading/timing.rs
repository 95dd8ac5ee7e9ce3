use crate::reading::punctuation::PunctuationMultipliers;
use crate::reading::Token;

/// Display duration of `word`: `(60_000 / wpm) × multiplier`, rounded.
///
/// The base interval is not rounded before the multiplier is applied.
pub fn calculate_word_delay(word: &str, wpm: u32, multipliers: &PunctuationMultipliers) -> u64 {
    let base_delay = 60_000.0 / wpm.max(1) as f64;
    (base_delay * multipliers.for_word(word)).round() as u64
}

/// Splits text on runs of whitespace. Punctuation stays on the word before it.
pub fn tokenize_text(text: &str) -> Vec<Token> {
    text.split_whitespace().map(Token::new).collect()
}

/// Whole minutes needed to read `word_count` words, rounded up.
pub fn reading_time_minutes(word_count: usize, wpm: u32) -> u64 {
    (word_count as u64).div_ceil(wpm.max(1) as u64)
}

/// Seconds left for the words after `position`, ignoring punctuation pauses.
pub fn remaining_seconds(position: usize, total: usize, wpm: u32) -> f64 {
    let remaining = total.saturating_sub(position) as f64;
    remaining / wpm.max(1) as f64 * 60.0
}

/// Formats seconds as `m:ss`.
pub fn format_time(seconds: f64) -> String {
    let seconds = seconds.max(0.0) as u64;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
