//! Phonetic normalization for chain matching.
//!
//! Words enter the game in whatever script the input source produced:
//! hiragana, katakana, the odd kanji token. Chain matching has to be
//! orthography-independent, so everything funnels through two steps:
//!
//! 1. `to_canonical_script`: fold to hiragana (katakana offset fold,
//!    bounded kanji reading lookup, everything else untouched).
//! 2. `normalize_for_chaining`: rewrite small forms to plain forms, then
//!    resolve elongation marks to the vowel implied by the preceding
//!    character's row.
//!
//! Every function here is pure and total. Unmappable input is returned
//! unchanged rather than rejected; judging validity is the validator's job.

use smallvec::SmallVec;

use super::kana::{
    kanji_reading, katakana_to_hiragana, small_to_plain, vowel_row, DEFAULT_ELONGATION_VOWEL,
    ELONGATION_MARK,
};

/// Per-word scratch buffer. Game words are short; 16 chars covers
/// essentially everything without heap allocation.
type CharBuf = SmallVec<[char; 16]>;

/// Map a raw token to the canonical (hiragana) script.
///
/// - Katakana folds to hiragana character by character.
/// - A whole token with a statically known kanji reading resolves to it.
/// - Latin letters and digits pass through untouched (they are simply not
///   eligible for phonetic normalization).
/// - Anything unknown is returned unchanged.
#[must_use]
pub fn to_canonical_script(text: &str) -> String {
    if let Some(reading) = kanji_reading(text) {
        return reading.to_string();
    }
    text.chars().map(katakana_to_hiragana).collect()
}

/// Resolve an elongation mark against the character preceding it.
///
/// The predecessor is expected in plain form (pass (a) of
/// `normalize_for_chaining` has already run, or the caller folds small
/// forms itself). A predecessor with no vowel row leaves the mark as-is.
fn resolve_elongation(prev: Option<char>) -> char {
    match prev {
        None => DEFAULT_ELONGATION_VOWEL,
        Some(p) => {
            let base = small_to_plain(p).unwrap_or(p);
            match vowel_row(base) {
                Some(row) => row.elongation_vowel(),
                None => ELONGATION_MARK,
            }
        }
    }
}

/// Produce the canonical phonetic form of a word for chain matching.
///
/// Two ordered passes:
///
/// 1. Every small-form character is rewritten to its plain counterpart
///    (ょ → よ, っ → つ, ...). Running this first makes a palatalized pair
///    behave as a unit for the next pass: in しょー the mark sees よ, so it
///    resolves on the O row.
/// 2. Every elongation mark is rewritten, left to right, to the vowel of
///    the *rewritten* predecessor's row (O row elongates to う). Consecutive
///    marks each resolve against the updated predecessor, so るびーー
///    becomes るびいい. A leading mark resolves to あ.
///
/// The output is a fixed point: normalizing twice equals normalizing once.
#[must_use]
pub fn normalize_for_chaining(word: &str) -> String {
    let mut buf: CharBuf = word
        .chars()
        .map(|c| small_to_plain(c).unwrap_or(c))
        .collect();

    for i in 0..buf.len() {
        if buf[i] == ELONGATION_MARK {
            let prev = if i == 0 { None } else { Some(buf[i - 1]) };
            buf[i] = resolve_elongation(prev);
        }
    }

    buf.iter().collect()
}

/// Apply the normalization rules to the final character only.
///
/// Used for end-character chain matching against a word that is stored and
/// displayed in its original form: the interior is never rewritten.
///
/// A trailing run of elongation marks anchors on the nearest non-mark
/// character; all marks in such a run resolve to the same vowel, so
/// replacing only the final one matches the full normalization's last
/// character.
#[must_use]
pub fn normalize_last_char(word: &str) -> String {
    let buf: CharBuf = word.chars().collect();
    let Some(&last) = buf.last() else {
        return String::new();
    };

    let replacement = if let Some(plain) = small_to_plain(last) {
        plain
    } else if last == ELONGATION_MARK {
        let anchor = buf[..buf.len() - 1]
            .iter()
            .rev()
            .find(|&&c| c != ELONGATION_MARK)
            .copied();
        resolve_elongation(anchor)
    } else {
        return word.to_string();
    };

    let mut out: String = buf[..buf.len() - 1].iter().collect();
    out.push(replacement);
    out
}

/// The chain-comparable final character of a word, if any.
#[must_use]
pub fn trailing_mora(word: &str) -> Option<char> {
    normalize_last_char(word).chars().last()
}

/// The chain-comparable first character of a word, if any.
///
/// Leading small forms and elongation marks normalize the same way whether
/// viewed from the front or resolved in full, so this only needs the first
/// character of the original word.
#[must_use]
pub fn leading_mora(word: &str) -> Option<char> {
    let first = word.chars().next()?;
    if let Some(plain) = small_to_plain(first) {
        Some(plain)
    } else if first == ELONGATION_MARK {
        Some(DEFAULT_ELONGATION_VOWEL)
    } else {
        Some(first)
    }
}
