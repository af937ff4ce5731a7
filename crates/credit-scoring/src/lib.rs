//! Credit scoring for message text.
//!
//! Messages that are not backed by a priced report are charged by a fixed
//! formula over their text. See [`score_text`] for the rules.

mod score;

pub use score::{is_palindrome, score_text, word_cost, words};

/// Starting cost of every message.
pub const BASE_COST: f64 = 1.0;

/// Cost added per character of text.
pub const CHARACTER_COST: f64 = 0.05;

/// Cost of a word of 1 to 3 characters.
pub const SHORT_WORD_COST: f64 = 0.1;

/// Cost of a word of 4 to 7 characters.
pub const MEDIUM_WORD_COST: f64 = 0.2;

/// Cost of a word of 8 or more characters.
pub const LONG_WORD_COST: f64 = 0.3;

/// Cost of a vowel found at every third character.
pub const THIRD_VOWEL_COST: f64 = 0.3;

/// Messages longer than this many characters pay [`LENGTH_PENALTY`].
pub const LENGTH_PENALTY_THRESHOLD: usize = 100;

/// Penalty for long messages.
pub const LENGTH_PENALTY: f64 = 5.0;

/// Discount when no word repeats.
pub const UNIQUE_WORD_BONUS: f64 = 2.0;

/// Lowest cost a scored message can reach.
pub const MINIMUM_COST: f64 = 1.0;
