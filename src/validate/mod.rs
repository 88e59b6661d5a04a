//! Structural word validation.
//!
//! Checks a single word's internal well-formedness, oblivious to any game
//! history: character-set membership, minimum length, and degenerate
//! repetition patterns. Chain-context rules live in `rules`.
//!
//! Both entry points are total: invalidity is a `false` or an empty
//! residue, never an error.

use smallvec::SmallVec;

use crate::text::kana::is_permitted;

/// Minimum word length in characters.
pub const MIN_WORD_LEN: usize = 2;

/// Longest run of one identical character a word may contain.
const MAX_IDENTICAL_RUN: usize = 2;

/// Degenerate repeated-particle patterns that slip past the structural
/// checks but are never legitimate words.
const DEGENERATE_PATTERNS: &[&str] = &["のがのが", "がのがの", "をにをに", "にをにを", "はをはを"];

/// Check a word's structural well-formedness.
///
/// Rejects:
/// - empty input,
/// - any character outside the permitted alphabet (hiragana including
///   small forms, plus the elongation mark),
/// - words shorter than [`MIN_WORD_LEN`] characters,
/// - words whose characters are all identical,
/// - any run of 3 identical characters anywhere in the word,
/// - the fixed denylist of degenerate repeated-particle patterns.
#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    let chars: SmallVec<[char; 16]> = word.chars().collect();

    if chars.len() < MIN_WORD_LEN {
        return false;
    }
    if chars.iter().any(|&c| !is_permitted(c)) {
        return false;
    }
    if chars.iter().all(|&c| c == chars[0]) {
        return false;
    }
    if has_run_over(&chars, MAX_IDENTICAL_RUN) {
        return false;
    }
    if DEGENERATE_PATTERNS.contains(&word) {
        return false;
    }

    true
}

/// Strip every character outside the permitted alphabet, preserving order.
///
/// May return the empty string.
#[must_use]
pub fn sanitize_input(text: &str) -> String {
    text.chars().filter(|&c| is_permitted(c)).collect()
}

fn has_run_over(chars: &[char], max_run: usize) -> bool {
    let mut run = 1;
    for pair in chars.windows(2) {
        if pair[0] == pair[1] {
            run += 1;
            if run > max_run {
                return true;
            }
        } else {
            run = 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_words() {
        assert!(is_valid_word("りんご"));
        assert!(is_valid_word("ごりら"));
        assert!(is_valid_word("らっぱ"));
        assert!(is_valid_word("るびー"));
        assert!(is_valid_word("ばしょ"));
    }

    #[test]
    fn test_rejects_empty_and_short() {
        assert!(!is_valid_word(""));
        assert!(!is_valid_word("り"));
        assert!(!is_valid_word("ー"));
    }

    #[test]
    fn test_rejects_foreign_characters() {
        assert!(!is_valid_word("リンゴ"));
        assert!(!is_valid_word("apple"));
        assert!(!is_valid_word("りん ご"));
        assert!(!is_valid_word("林檎"));
    }

    #[test]
    fn test_rejects_all_identical() {
        assert!(!is_valid_word("るる"));
        assert!(!is_valid_word("るるるる"));
        assert!(!is_valid_word("ののの"));
    }

    #[test]
    fn test_rejects_triple_run() {
        assert!(!is_valid_word("かるるるた"));
        assert!(!is_valid_word("るるるか"));
        // A double is fine.
        assert!(is_valid_word("ここあ"));
    }

    #[test]
    fn test_rejects_denylist() {
        for w in DEGENERATE_PATTERNS {
            assert!(!is_valid_word(w), "denylisted: {w}");
        }
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_input("り ん ご!"), "りんご");
        assert_eq!(sanitize_input("abcリンゴ"), "");
        assert_eq!(sanitize_input("るびー123"), "るびー");
        assert_eq!(sanitize_input(""), "");
    }

    #[test]
    fn test_sanitize_residue_is_permitted() {
        let out = sanitize_input("xりoんzご9ー");
        assert!(out.chars().all(crate::text::kana::is_permitted));
        assert_eq!(out, "りんごー");
    }
}
