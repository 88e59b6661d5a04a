//! Computer participant move selection.
//!
//! A `ComputerPlayer` plays through the same `submit_word` entry point as
//! everyone else; this module only picks the word. Selection is seeded and
//! deterministic so games replay identically.

use crate::dictionary::WordSource;
use crate::rng::EngineRng;
use crate::rules::RuleEngine;
use crate::session::{Difficulty, GameSession};
use crate::text::trailing_mora;
use crate::validate::is_valid_word;

/// Move picker for a computer participant.
#[derive(Clone, Debug)]
pub struct ComputerPlayer {
    difficulty: Difficulty,
    rules: RuleEngine,
    rng: EngineRng,
}

impl ComputerPlayer {
    /// Create a computer player with the given difficulty and RNG seed.
    #[must_use]
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rules: RuleEngine::new(),
            rng: EngineRng::new(seed),
        }
    }

    /// The configured difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Pick a word for the current position, or `None` when the source has
    /// no playable candidate (the caller then forfeits the turn).
    ///
    /// - Easy plays any legal candidate, terminal words included, so it can
    ///   eliminate itself.
    /// - Normal avoids terminal words unless nothing else is playable.
    /// - Hard additionally picks the candidate leaving the opponent the
    ///   fewest continuations, tie-broken randomly.
    pub fn choose_word(&mut self, session: &GameSession, source: &dyn WordSource) -> Option<String> {
        let candidates = self.legal_candidates(session, source);
        if candidates.is_empty() {
            return None;
        }

        match self.difficulty {
            Difficulty::Easy => self.rng.choose(&candidates).cloned(),
            Difficulty::Normal => {
                let pool = self.safe_or_forced(candidates);
                self.rng.choose(&pool).cloned()
            }
            Difficulty::Hard => {
                let pool = self.safe_or_forced(candidates);
                let best = self.min_continuations(&pool, session, source);
                self.rng.choose(&best).cloned()
            }
        }
    }

    /// All dictionary candidates that `submit_word` would not reject.
    fn legal_candidates(&mut self, session: &GameSession, source: &dyn WordSource) -> Vec<String> {
        let prev = session.used_words().back();
        let head = match prev {
            Some(word) => trailing_mora(word),
            None => self.opening_head(source),
        };
        let Some(head) = head else {
            return Vec::new();
        };

        source
            .words_for(head, self.difficulty)
            .into_iter()
            .filter(|w| is_valid_word(w))
            .filter(|w| !session.used_words().contains(w))
            .filter(|w| match prev {
                Some(p) => self.rules.can_word_follow(p, w),
                None => true,
            })
            .collect()
    }

    /// Random leading character for the opening move.
    fn opening_head(&mut self, source: &dyn WordSource) -> Option<char> {
        let mut heads = source.leading_chars();
        // Map iteration order is not part of the source contract.
        heads.sort_unstable();
        self.rng.choose(&heads).copied()
    }

    /// Drop terminal words, unless that would leave nothing to play
    /// (a forced losing move beats an unexplained forfeit).
    fn safe_or_forced(&self, candidates: Vec<String>) -> Vec<String> {
        let safe: Vec<String> = candidates
            .iter()
            .filter(|w| self.rules.is_word_valid_for_shiritori(w))
            .cloned()
            .collect();
        if safe.is_empty() {
            candidates
        } else {
            safe
        }
    }

    /// Candidates minimizing the opponent's unused continuations.
    fn min_continuations(
        &self,
        pool: &[String],
        session: &GameSession,
        source: &dyn WordSource,
    ) -> Vec<String> {
        let continuations = |word: &str| -> usize {
            trailing_mora(word)
                .map(|tail| {
                    source
                        .words_for(tail, Difficulty::Hard)
                        .into_iter()
                        .filter(|w| w != word && !session.used_words().contains(w))
                        .count()
                })
                .unwrap_or(0)
        };

        let Some(min) = pool.iter().map(|w| continuations(w)).min() else {
            return Vec::new();
        };
        pool.iter()
            .filter(|w| continuations(w) == min)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::StaticDictionary;
    use crate::session::{Participant, ParticipantId, SessionConfigBuilder};

    fn two_player_session() -> GameSession {
        GameSession::new(
            SessionConfigBuilder::new()
                .participant(Participant::human("p1", "Alice"))
                .participant(Participant::computer("cpu", "CPU", Difficulty::Normal))
                .build(),
        )
    }

    #[test]
    fn test_opening_move_comes_from_source() {
        let dict = StaticDictionary::with_starter_words();
        let session = two_player_session();
        let mut cpu = ComputerPlayer::new(Difficulty::Normal, 42);

        let word = cpu.choose_word(&session, &dict).unwrap();
        assert!(is_valid_word(&word));
    }

    #[test]
    fn test_choice_chains_off_previous_word() {
        let dict = StaticDictionary::with_starter_words();
        let mut session = two_player_session();
        session.submit_word("りんご", &ParticipantId::new("p1"));

        let mut cpu = ComputerPlayer::new(Difficulty::Normal, 42);
        let word = cpu.choose_word(&session, &dict).unwrap();

        assert!(word.starts_with('ご'), "picked: {word}");
    }

    #[test]
    fn test_deterministic_for_seed() {
        let dict = StaticDictionary::with_starter_words();
        let mut session = two_player_session();
        session.submit_word("りんご", &ParticipantId::new("p1"));

        let a = ComputerPlayer::new(Difficulty::Normal, 7).choose_word(&session, &dict);
        let b = ComputerPlayer::new(Difficulty::Normal, 7).choose_word(&session, &dict);
        assert_eq!(a, b);
    }

    #[test]
    fn test_normal_avoids_terminal_words() {
        let mut dict = StaticDictionary::new();
        dict.insert("みかん", Difficulty::Easy);
        dict.insert("みどり", Difficulty::Easy);

        let mut session = two_player_session();
        session.submit_word("すずみ", &ParticipantId::new("p1"));

        let mut cpu = ComputerPlayer::new(Difficulty::Normal, 1);
        for _ in 0..10 {
            assert_eq!(cpu.choose_word(&session, &dict).as_deref(), Some("みどり"));
        }
    }

    #[test]
    fn test_normal_plays_terminal_when_forced() {
        let mut dict = StaticDictionary::new();
        dict.insert("みかん", Difficulty::Easy);

        let mut session = two_player_session();
        session.submit_word("すずみ", &ParticipantId::new("p1"));

        let mut cpu = ComputerPlayer::new(Difficulty::Normal, 1);
        assert_eq!(cpu.choose_word(&session, &dict).as_deref(), Some("みかん"));
    }

    #[test]
    fn test_no_candidate_returns_none() {
        let dict = StaticDictionary::new();
        let mut session = two_player_session();
        session.submit_word("りんご", &ParticipantId::new("p1"));

        let mut cpu = ComputerPlayer::new(Difficulty::Hard, 3);
        assert_eq!(cpu.choose_word(&session, &dict), None);
    }

    #[test]
    fn test_used_words_are_skipped() {
        let mut dict = StaticDictionary::new();
        dict.insert("ごりら", Difficulty::Easy);

        let mut session = two_player_session();
        session.submit_word("ごりら", &ParticipantId::new("p1"));
        session.submit_word("らっこ", &ParticipantId::new("cpu"));
        session.submit_word("こんご", &ParticipantId::new("p1"));

        // The only ご word is already used.
        let mut cpu = ComputerPlayer::new(Difficulty::Easy, 5);
        assert_eq!(cpu.choose_word(&session, &dict), None);
    }

    #[test]
    fn test_hard_minimizes_opponent_continuations() {
        let mut dict = StaticDictionary::new();
        // Two choices after りんご: ごりら leaves two ら continuations,
        // ごま leaves none.
        dict.insert("ごりら", Difficulty::Easy);
        dict.insert("ごま", Difficulty::Easy);
        dict.insert("らっぱ", Difficulty::Easy);
        dict.insert("らくだ", Difficulty::Easy);

        let mut session = two_player_session();
        session.submit_word("りんご", &ParticipantId::new("p1"));

        let mut cpu = ComputerPlayer::new(Difficulty::Hard, 9);
        assert_eq!(cpu.choose_word(&session, &dict).as_deref(), Some("ごま"));
    }
}
