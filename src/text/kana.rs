//! Kana character tables: vowel rows, small forms, script folding.
//!
//! Everything here is a total lookup over a closed character set.
//! Chain matching never branches on raw code points outside this module;
//! the rest of the crate goes through these functions so exhaustiveness
//! lives in one place.

use serde::{Deserialize, Serialize};

/// The elongation mark (chōonpu), shared by both syllabaries.
pub const ELONGATION_MARK: char = 'ー';

/// Vowel a leading elongation mark resolves to when nothing precedes it.
pub const DEFAULT_ELONGATION_VOWEL: char = 'あ';

/// Vowel row of a plain-form kana character.
///
/// Rows are the five vowel columns of the syllabary grid. The row of a
/// character determines which vowel an elongation mark after it expands to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VowelRow {
    A,
    I,
    U,
    E,
    O,
}

impl VowelRow {
    /// The vowel an elongation mark after this row expands to.
    ///
    /// The O row is special-cased to う: elongated O-row morae are
    /// pronounced with a う glide (こー is こう, not こお).
    #[must_use]
    pub const fn elongation_vowel(self) -> char {
        match self {
            VowelRow::A => 'あ',
            VowelRow::I => 'い',
            VowelRow::U => 'う',
            VowelRow::E => 'え',
            VowelRow::O => 'う',
        }
    }
}

/// Vowel row of a plain-form hiragana character.
///
/// Returns `None` for characters with no row (`ん`, the elongation mark,
/// anything outside the syllabary).
#[must_use]
pub fn vowel_row(c: char) -> Option<VowelRow> {
    match c {
        'あ' | 'か' | 'が' | 'さ' | 'ざ' | 'た' | 'だ' | 'な' | 'は' | 'ば' | 'ぱ' | 'ま'
        | 'や' | 'ら' | 'わ' => Some(VowelRow::A),
        'い' | 'き' | 'ぎ' | 'し' | 'じ' | 'ち' | 'ぢ' | 'に' | 'ひ' | 'び' | 'ぴ' | 'み'
        | 'り' | 'ゐ' => Some(VowelRow::I),
        'う' | 'ゔ' | 'く' | 'ぐ' | 'す' | 'ず' | 'つ' | 'づ' | 'ぬ' | 'ふ' | 'ぶ' | 'ぷ'
        | 'む' | 'ゆ' | 'る' => Some(VowelRow::U),
        'え' | 'け' | 'げ' | 'せ' | 'ぜ' | 'て' | 'で' | 'ね' | 'へ' | 'べ' | 'ぺ' | 'め'
        | 'れ' | 'ゑ' => Some(VowelRow::E),
        'お' | 'こ' | 'ご' | 'そ' | 'ぞ' | 'と' | 'ど' | 'の' | 'ほ' | 'ぼ' | 'ぽ' | 'も'
        | 'よ' | 'ろ' | 'を' => Some(VowelRow::O),
        _ => None,
    }
}

/// Plain-form counterpart of a small-form kana character.
///
/// Returns `None` when the character is not a small form.
#[must_use]
pub fn small_to_plain(c: char) -> Option<char> {
    match c {
        'ぁ' => Some('あ'),
        'ぃ' => Some('い'),
        'ぅ' => Some('う'),
        'ぇ' => Some('え'),
        'ぉ' => Some('お'),
        'っ' => Some('つ'),
        'ゃ' => Some('や'),
        'ゅ' => Some('ゆ'),
        'ょ' => Some('よ'),
        'ゎ' => Some('わ'),
        'ゕ' => Some('か'),
        'ゖ' => Some('け'),
        _ => None,
    }
}

/// Check whether a character is a small-form kana.
#[must_use]
pub fn is_small_form(c: char) -> bool {
    small_to_plain(c).is_some()
}

/// Check membership in the permitted alphabet: hiragana (including small
/// forms and ゔ) plus the elongation mark.
#[must_use]
pub fn is_permitted(c: char) -> bool {
    ('ぁ'..='ゖ').contains(&c) || c == ELONGATION_MARK
}

/// Fold a katakana character to its hiragana counterpart.
///
/// Katakana and hiragana blocks are parallel at a fixed offset of 0x60.
/// The elongation mark and anything outside the katakana block are
/// returned unchanged.
#[must_use]
pub fn katakana_to_hiragana(c: char) -> char {
    if ('ァ'..='ヶ').contains(&c) {
        // Offset within the parallel blocks; always a valid scalar.
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Kanji tokens with statically known kana readings.
///
/// Small and bounded on purpose: this is a best-effort convenience for
/// common game words, not a dictionary. Unknown tokens fall through
/// unchanged at the caller.
pub const KANJI_READINGS: &[(&str, &str)] = &[
    ("林檎", "りんご"),
    ("犬", "いぬ"),
    ("猫", "ねこ"),
    ("山", "やま"),
    ("川", "かわ"),
    ("空", "そら"),
    ("海", "うみ"),
    ("月", "つき"),
    ("花", "はな"),
    ("雨", "あめ"),
    ("雲", "くも"),
    ("森", "もり"),
    ("鳥", "とり"),
    ("魚", "さかな"),
    ("桜", "さくら"),
];

/// Look up the kana reading of a kanji token, if statically known.
#[must_use]
pub fn kanji_reading(token: &str) -> Option<&'static str> {
    KANJI_READINGS
        .iter()
        .find(|(kanji, _)| *kanji == token)
        .map(|(_, reading)| *reading)
}
