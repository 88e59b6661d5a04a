//! Chain legality rules.
//!
//! `RuleEngine` layers game-context rules on top of the normalizer and the
//! structural validator: does one word legally follow another, is a word
//! inherently disqualifying, is a whole sequence internally consistent.
//! It owns no mutable state; sessions inject it by value.

use serde::{Deserialize, Serialize};

use crate::text::{leading_mora, trailing_mora};
use crate::validate::is_valid_word;

/// The terminal mora. A word whose normalized final character is ん
/// disqualifies the player who submitted it.
pub const TERMINAL_MORA: char = 'ん';

/// Why a word sequence fails chain validation.
///
/// Checked in declaration order; the first matching error wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainError {
    /// A word appears more than once anywhere in the sequence.
    DuplicateWord,
    /// Some adjacent pair does not connect.
    InvalidConnection,
    /// Some word ends on the terminal mora after normalization.
    EndsWithN,
}

impl std::fmt::Display for ChainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainError::DuplicateWord => write!(f, "duplicate word in chain"),
            ChainError::InvalidConnection => write!(f, "adjacent words do not connect"),
            ChainError::EndsWithN => write!(f, "word ends on the terminal mora"),
        }
    }
}

/// Context-aware legality checks over normalized words.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct RuleEngine;

impl RuleEngine {
    /// Create a rule engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Check that a word is both structurally valid and not inherently
    /// disqualifying (its normalized final character is not ん).
    #[must_use]
    pub fn is_word_valid_for_shiritori(&self, word: &str) -> bool {
        is_valid_word(word) && trailing_mora(word) != Some(TERMINAL_MORA)
    }

    /// Check whether `next` may legally follow `previous`.
    ///
    /// Empty input never connects. Otherwise the normalized final character
    /// of `previous` must equal the normalized first character of `next`.
    /// Only the trailing side needs context-dependent resolution; a leading
    /// small form or elongation mark normalizes the same way from the front.
    #[must_use]
    pub fn can_word_follow(&self, previous: &str, next: &str) -> bool {
        let (Some(tail), Some(head)) = (trailing_mora(previous), leading_mora(next)) else {
            return false;
        };
        tail == head
    }

    /// Exact-string occurrences of `word` within `history`.
    ///
    /// Duplicates are disallowed going forward, so in practice this returns
    /// 0 or 1 matches, but the function itself makes no such assumption.
    #[must_use]
    pub fn find_used_words<'a>(
        &self,
        word: &str,
        history: impl IntoIterator<Item = &'a str>,
    ) -> Vec<String> {
        history
            .into_iter()
            .filter(|used| *used == word)
            .map(str::to_string)
            .collect()
    }

    /// Validate an entire ordered sequence of words.
    ///
    /// Error priority: global duplicates first, then adjacent connection,
    /// then terminal endings. Empty and single-element sequences are valid
    /// by definition.
    pub fn validate_chain<S: AsRef<str>>(&self, words: &[S]) -> Result<(), ChainError> {
        if words.len() <= 1 {
            return Ok(());
        }

        for (i, word) in words.iter().enumerate() {
            if words[..i].iter().any(|w| w.as_ref() == word.as_ref()) {
                return Err(ChainError::DuplicateWord);
            }
        }

        for pair in words.windows(2) {
            if !self.can_word_follow(pair[0].as_ref(), pair[1].as_ref()) {
                return Err(ChainError::InvalidConnection);
            }
        }

        for word in words {
            if trailing_mora(word.as_ref()) == Some(TERMINAL_MORA) {
                return Err(ChainError::EndsWithN);
            }
        }

        Ok(())
    }
}
