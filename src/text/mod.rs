//! Phonetic text handling: kana tables and chain normalization.
//!
//! This module is the normalizer of the engine. It knows nothing about
//! games, turns, or validity; it only maps raw tokens onto a canonical
//! comparable form.

pub mod kana;
pub mod normalize;

pub use kana::{
    is_permitted, is_small_form, katakana_to_hiragana, small_to_plain, vowel_row, VowelRow,
    DEFAULT_ELONGATION_VOWEL, ELONGATION_MARK,
};
pub use normalize::{
    leading_mora, normalize_for_chaining, normalize_last_char, to_canonical_script, trailing_mora,
};
