//! Dictionary boundary contract.
//!
//! The engine consumes word content only through `WordSource`: for a given
//! leading character and difficulty tier, a finite (possibly empty) list of
//! example words. Content curation lives outside this crate;
//! `StaticDictionary` is an in-memory implementation with a small starter
//! lexicon, enough to drive computer participants and tests.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::session::Difficulty;
use crate::text::{leading_mora, to_canonical_script};

/// Supplier of candidate words by leading character and difficulty tier.
///
/// Implementations may return any finite list, including empty. Words are
/// expected in canonical script.
pub trait WordSource {
    /// Words starting with `leading`, at or below the given tier.
    fn words_for(&self, leading: char, difficulty: Difficulty) -> Vec<String>;

    /// The leading characters this source has any words for.
    fn leading_chars(&self) -> Vec<char>;
}

/// In-memory dictionary indexed by canonical leading mora.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StaticDictionary {
    by_head: FxHashMap<char, Vec<(String, Difficulty)>>,
}

impl StaticDictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary preloaded with the starter lexicon.
    #[must_use]
    pub fn with_starter_words() -> Self {
        let mut dict = Self::new();
        for &(word, tier) in STARTER_WORDS {
            dict.insert(word, tier);
        }
        dict
    }

    /// Add a word under its canonical leading mora.
    ///
    /// Input in any script is folded first; words without a leading mora
    /// (empty input) are ignored.
    pub fn insert(&mut self, word: &str, tier: Difficulty) {
        let canonical = to_canonical_script(word);
        let Some(head) = leading_mora(&canonical) else {
            return;
        };
        self.by_head.entry(head).or_default().push((canonical, tier));
    }

    /// Total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_head.values().map(Vec::len).sum()
    }

    /// Whether the dictionary holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_head.is_empty()
    }
}

impl WordSource for StaticDictionary {
    fn words_for(&self, leading: char, difficulty: Difficulty) -> Vec<String> {
        self.by_head
            .get(&leading)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(_, tier)| *tier <= difficulty)
                    .map(|(word, _)| word.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn leading_chars(&self) -> Vec<char> {
        self.by_head.keys().copied().collect()
    }
}

/// Starter lexicon, tiered by how obscure the word is.
const STARTER_WORDS: &[(&str, Difficulty)] = &[
    ("りんご", Difficulty::Easy),
    ("りす", Difficulty::Easy),
    ("ごりら", Difficulty::Easy),
    ("ごま", Difficulty::Normal),
    ("らっぱ", Difficulty::Easy),
    ("らくだ", Difficulty::Normal),
    ("ぱせり", Difficulty::Normal),
    ("だちょう", Difficulty::Normal),
    ("だるま", Difficulty::Easy),
    ("うさぎ", Difficulty::Easy),
    ("うみ", Difficulty::Easy),
    ("ぎたー", Difficulty::Normal),
    ("あいす", Difficulty::Easy),
    ("あめ", Difficulty::Easy),
    ("すいか", Difficulty::Easy),
    ("すずめ", Difficulty::Normal),
    ("かさ", Difficulty::Easy),
    ("かもめ", Difficulty::Normal),
    ("さくら", Difficulty::Easy),
    ("さかな", Difficulty::Easy),
    ("まど", Difficulty::Easy),
    ("まくら", Difficulty::Normal),
    ("どんぐり", Difficulty::Normal),
    ("めだか", Difficulty::Hard),
    ("めがね", Difficulty::Easy),
    ("ねこ", Difficulty::Easy),
    ("ねずみ", Difficulty::Easy),
    ("こあら", Difficulty::Easy),
    ("こっぷ", Difficulty::Easy),
    ("みかん", Difficulty::Easy),
    ("よる", Difficulty::Easy),
    ("るびー", Difficulty::Hard),
    ("いか", Difficulty::Easy),
    ("いちご", Difficulty::Easy),
    ("ばしょ", Difficulty::Normal),
    ("たぬき", Difficulty::Easy),
    ("きつね", Difficulty::Easy),
];
