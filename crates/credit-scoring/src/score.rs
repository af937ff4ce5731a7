//! Text scoring rules.

use crate::{
    BASE_COST, CHARACTER_COST, LENGTH_PENALTY, LENGTH_PENALTY_THRESHOLD, LONG_WORD_COST,
    MEDIUM_WORD_COST, MINIMUM_COST, SHORT_WORD_COST, THIRD_VOWEL_COST, UNIQUE_WORD_BONUS,
};
use std::collections::HashSet;

/// Compute the credit cost of a message from its text.
///
/// Rules are applied in this order:
///
/// 1. base cost
/// 2. a cost per character
/// 3. a cost per word, bucketed by word length
/// 4. a bonus for each vowel at character index 2, 5, 8, ...
/// 5. a flat penalty above [`LENGTH_PENALTY_THRESHOLD`] characters
/// 6. a discount when all words are distinct (case-sensitive), after which
///    the total is clamped to [`MINIMUM_COST`]
/// 7. the total is doubled when the text is a palindrome
///
/// The floor is applied before doubling, so a palindrome never costs less
/// than twice the minimum. The result is not rounded.
pub fn score_text(text: &str) -> f64 {
    let chars: Vec<char> = text.chars().collect();
    let mut total = BASE_COST;

    total += chars.len() as f64 * CHARACTER_COST;

    let words = words(text);
    for word in &words {
        total += word_cost(word);
    }

    for c in chars.iter().skip(2).step_by(3) {
        if is_vowel(*c) {
            total += THIRD_VOWEL_COST;
        }
    }

    if chars.len() > LENGTH_PENALTY_THRESHOLD {
        total += LENGTH_PENALTY;
    }

    let distinct: HashSet<&str> = words.iter().copied().collect();
    if distinct.len() == words.len() {
        total = (total - UNIQUE_WORD_BONUS).max(MINIMUM_COST);
    }

    if is_palindrome(text) {
        total *= 2.0;
    }

    total
}

/// Split text into words: maximal runs of ASCII letters, apostrophes and
/// hyphens. Everything else separates words.
pub fn words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        match (is_word_char(c), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                words.push(&text[s..i]);
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        words.push(&text[s..]);
    }

    words
}

/// Cost of a single word by its length.
pub fn word_cost(word: &str) -> f64 {
    match word.chars().count() {
        0 => 0.0,
        1..=3 => SHORT_WORD_COST,
        4..=7 => MEDIUM_WORD_COST,
        _ => LONG_WORD_COST,
    }
}

/// Whether the ASCII letters and digits of `text`, lowercased, read the same
/// in both directions. Text with no letters or digits is not a palindrome.
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<u8> = text
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|b| b.to_ascii_lowercase())
        .collect();

    !cleaned.is_empty() && cleaned.iter().eq(cleaned.iter().rev())
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\'' || c == '-'
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
