//! The game session: turn order, history, eliminations, outcome.
//!
//! `GameSession` is the single mutable aggregate of the engine. All
//! gameplay flows through `submit_word`; the only other mutators are
//! `forfeit_current` (the external-timer path) and `end_game`.
//!
//! ## Invariants
//!
//! - While `active`, the turn cursor always points at a non-eliminated
//!   participant.
//! - `used_words` is append-only and never contains a rejected word.
//! - `eliminated` only grows.
//! - Ending the game never touches the turn cursor. Finishing and
//!   advancing are disjoint code paths on purpose: once the game is over
//!   the cursor has no meaning, and any write to it is a spurious
//!   transition for observers.
//! - Once `active` is false, nothing mutates; a new round means a new
//!   `GameSession`.
//!
//! The session is synchronous and single-writer. Callers needing
//! cross-thread access serialize externally (one execution context, or a
//! mutex around the whole session).

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::RuleEngine;
use crate::session::config::SessionConfig;
use crate::session::participant::{Participant, ParticipantId};
use crate::text::to_canonical_script;
use crate::validate::is_valid_word;

/// Why a submission was rejected. Rejections never mutate the session;
/// the current player keeps the turn and may resubmit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The word fails structural validation.
    MalformedWord,
    /// The word does not connect to the previous word.
    BrokenChain,
    /// The word was already played this session.
    DuplicateWord,
}

/// Why a participant was eliminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EliminationCause {
    /// The submitted word ends on the terminal mora.
    TerminalWord,
    /// The participant forfeited the turn (timeout or surrender,
    /// signalled by the caller).
    Forfeit,
}

/// Outcome of a `submit_word` or `forfeit_current` call.
///
/// The taxonomy is closed: every code path maps to exactly one variant.
/// `Rejected` never mutates state; `Eliminated` and `Accepted` always do;
/// `GameNotActive` is a no-op signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// The word was accepted and the turn advanced.
    Accepted,
    /// The word was refused; no state changed.
    Rejected(RejectReason),
    /// The submitting participant was eliminated.
    Eliminated(EliminationCause),
    /// The game has already ended.
    GameNotActive,
}

/// Audit record of one elimination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationRecord {
    pub participant: ParticipantId,
    /// The disqualifying word, when the cause was a submission.
    pub word: Option<String>,
    pub cause: EliminationCause,
}

/// Authoritative per-session mutable state.
///
/// Uses `im` persistent collections so observers can snapshot history and
/// elimination sets in O(1).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    config: SessionConfig,
    rules: RuleEngine,

    /// Cursor into `config.turn_order()`. While the game is active it
    /// always indexes a non-eliminated participant.
    turn_index: usize,

    /// Accepted words, in play order. Disqualifying words are not stored
    /// here (the next player chains off the last accepted word); they live
    /// in `eliminations`.
    used_words: Vector<String>,

    eliminated: ImHashSet<ParticipantId>,
    eliminations: Vec<EliminationRecord>,

    active: bool,
    winner: Option<ParticipantId>,
}

impl GameSession {
    /// Start a session from its configuration. The first participant in
    /// the turn order opens.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            rules: RuleEngine::new(),
            turn_index: 0,
            used_words: Vector::new(),
            eliminated: ImHashSet::new(),
            eliminations: Vec::new(),
            active: true,
            winner: None,
        }
    }

    // === Observations ===

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether the game is still running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The winner, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<&ParticipantId> {
        self.winner.as_ref()
    }

    /// The current turn cursor. Meaningless once the game has ended.
    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// The participant whose turn it is.
    #[must_use]
    pub fn current_participant(&self) -> &Participant {
        let id = &self.config.turn_order()[self.turn_index];
        self.config
            .participant(id)
            .expect("turn order ids are validated at build time")
    }

    /// Accepted words, in play order.
    #[must_use]
    pub fn used_words(&self) -> &Vector<String> {
        &self.used_words
    }

    /// Ids of eliminated participants.
    #[must_use]
    pub fn eliminated(&self) -> &ImHashSet<ParticipantId> {
        &self.eliminated
    }

    /// Audit log of eliminations, in order of occurrence.
    #[must_use]
    pub fn eliminations(&self) -> &[EliminationRecord] {
        &self.eliminations
    }

    /// Participants still in the game, in turn order.
    #[must_use]
    pub fn remaining_participants(&self) -> Vec<&ParticipantId> {
        self.config
            .turn_order()
            .iter()
            .filter(|id| !self.eliminated.contains(id))
            .collect()
    }

    // === Mutations ===

    /// Submit a word for the participant whose turn it is.
    ///
    /// The word is folded to canonical script before evaluation, so
    /// katakana and known kanji renderings chain like their hiragana
    /// equivalents. Matching `by` against the current participant is the
    /// caller's contract; the id is used for elimination bookkeeping.
    pub fn submit_word(&mut self, word: &str, by: &ParticipantId) -> SubmitOutcome {
        if !self.active {
            return SubmitOutcome::GameNotActive;
        }

        let word = to_canonical_script(word);

        if !is_valid_word(&word) {
            debug!(word = %word, "rejected: malformed");
            return SubmitOutcome::Rejected(RejectReason::MalformedWord);
        }
        // Duplicates outrank connectivity, matching the chain validator's
        // error priority: a replayed word is a duplicate even when it also
        // fails to chain.
        if !self
            .rules
            .find_used_words(&word, self.used_words.iter().map(String::as_str))
            .is_empty()
        {
            debug!(word = %word, "rejected: duplicate");
            return SubmitOutcome::Rejected(RejectReason::DuplicateWord);
        }
        if let Some(prev) = self.used_words.back() {
            if !self.rules.can_word_follow(prev, &word) {
                debug!(word = %word, prev = %prev, "rejected: broken chain");
                return SubmitOutcome::Rejected(RejectReason::BrokenChain);
            }
        }

        // Structurally fine but disqualifying: an elimination event, not
        // a rejection.
        if !self.rules.is_word_valid_for_shiritori(&word) {
            debug!(word = %word, participant = %by, "elimination: terminal word");
            return self.eliminate(by.clone(), Some(word), EliminationCause::TerminalWord);
        }

        debug!(word = %word, participant = %by, "accepted");
        self.used_words.push_back(word);
        self.advance_turn();
        SubmitOutcome::Accepted
    }

    /// Eliminate the participant at the cursor without a submission.
    ///
    /// This is the hook for external per-turn timers and surrender: the
    /// core enforces no timeouts itself.
    pub fn forfeit_current(&mut self) -> SubmitOutcome {
        if !self.active {
            return SubmitOutcome::GameNotActive;
        }
        let id = self.config.turn_order()[self.turn_index].clone();
        debug!(participant = %id, "elimination: forfeit");
        self.eliminate(id, None, EliminationCause::Forfeit)
    }

    /// End the game unconditionally (abandon path). Sets no winner.
    /// Idempotent.
    pub fn end_game(&mut self) {
        if self.active {
            debug!("game ended");
            self.active = false;
        }
    }

    // === Internals ===

    fn eliminate(
        &mut self,
        id: ParticipantId,
        word: Option<String>,
        cause: EliminationCause,
    ) -> SubmitOutcome {
        self.eliminated.insert(id.clone());
        self.eliminations.push(EliminationRecord {
            participant: id,
            word,
            cause,
        });

        let remaining: Vec<ParticipantId> = self
            .remaining_participants()
            .into_iter()
            .cloned()
            .collect();
        match remaining.as_slice() {
            [sole] => {
                // Deciding branch: set the outcome and freeze everything
                // else. The turn cursor is deliberately not written.
                let winner = sole.clone();
                debug!(winner = %winner, "game decided");
                self.winner = Some(winner);
                self.active = false;
            }
            [] => {
                // Unreachable through this API (the game ends at one
                // remaining), but a draw is representable.
                self.active = false;
            }
            _ => {
                // Continuing branch: play moves on.
                self.advance_turn();
            }
        }
        SubmitOutcome::Eliminated(cause)
    }

    fn advance_turn(&mut self) {
        let order = self.config.turn_order();
        for step in 1..=order.len() {
            let candidate = (self.turn_index + step) % order.len();
            if !self.eliminated.contains(&order[candidate]) {
                self.turn_index = candidate;
                return;
            }
        }
        unreachable!("advance_turn called with no remaining participants");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::config::SessionConfigBuilder;

    fn session(names: &[&str]) -> GameSession {
        let mut builder = SessionConfigBuilder::new();
        for name in names {
            builder = builder.participant(Participant::human(*name, *name));
        }
        GameSession::new(builder.build())
    }

    fn id(s: &str) -> ParticipantId {
        ParticipantId::new(s)
    }

    #[test]
    fn test_acceptance_advances_turn() {
        let mut game = session(&["p1", "p2"]);

        assert_eq!(game.current_participant().id, id("p1"));
        assert_eq!(game.submit_word("りんご", &id("p1")), SubmitOutcome::Accepted);
        assert_eq!(game.current_participant().id, id("p2"));
        assert_eq!(game.used_words().len(), 1);
    }

    #[test]
    fn test_rejection_mutates_nothing() {
        let mut game = session(&["p1", "p2"]);
        game.submit_word("りんご", &id("p1"));
        let before_index = game.turn_index();
        let before_words = game.used_words().clone();

        // Broken chain, malformed, duplicate: all rejected in place.
        assert_eq!(
            game.submit_word("あひる", &id("p2")),
            SubmitOutcome::Rejected(RejectReason::BrokenChain)
        );
        assert_eq!(
            game.submit_word("ご", &id("p2")),
            SubmitOutcome::Rejected(RejectReason::MalformedWord)
        );
        assert_eq!(
            game.submit_word("りんご", &id("p2")),
            SubmitOutcome::Rejected(RejectReason::DuplicateWord)
        );

        assert_eq!(game.turn_index(), before_index);
        assert_eq!(game.used_words(), &before_words);
        assert!(game.is_active());
        assert!(game.eliminated().is_empty());
    }

    #[test]
    fn test_duplicate_outranks_broken_chain() {
        let mut game = session(&["p1", "p2"]);
        game.submit_word("りんご", &id("p1"));
        game.submit_word("ごりら", &id("p2"));

        // りんご neither chains off ごりら nor is new; the duplicate is
        // what gets reported, mirroring the chain validator's priority.
        assert_eq!(
            game.submit_word("りんご", &id("p1")),
            SubmitOutcome::Rejected(RejectReason::DuplicateWord)
        );
    }

    #[test]
    fn test_duplicate_checked_against_canonical_form() {
        let mut game = session(&["p1", "p2"]);
        game.submit_word("りんご", &id("p1"));
        game.submit_word("ごりら", &id("p2"));

        // Katakana rendering of an already played word is a duplicate.
        assert_eq!(
            game.submit_word("リンゴ", &id("p1")),
            SubmitOutcome::Rejected(RejectReason::DuplicateWord)
        );
    }

    #[test]
    fn test_terminal_word_two_players_ends_game() {
        let mut game = session(&["p1", "p2"]);

        assert_eq!(game.submit_word("あいす", &id("p1")), SubmitOutcome::Accepted);
        let cursor_after_p1 = game.turn_index();

        assert_eq!(
            game.submit_word("すいはん", &id("p2")),
            SubmitOutcome::Eliminated(EliminationCause::TerminalWord)
        );

        assert!(!game.is_active());
        assert_eq!(game.winner(), Some(&id("p1")));
        // Ending the game must never touch the cursor.
        assert_eq!(game.turn_index(), cursor_after_p1);
    }

    #[test]
    fn test_disqualifying_word_kept_out_of_history() {
        let mut game = session(&["p1", "p2"]);
        game.submit_word("あいす", &id("p1"));
        game.submit_word("すいはん", &id("p2"));

        assert_eq!(game.used_words().len(), 1);
        assert_eq!(game.eliminations().len(), 1);
        assert_eq!(game.eliminations()[0].word.as_deref(), Some("すいはん"));
        assert_eq!(game.eliminations()[0].cause, EliminationCause::TerminalWord);
    }

    #[test]
    fn test_elimination_with_three_players_continues() {
        let mut game = session(&["p1", "p2", "p3"]);

        game.submit_word("りんご", &id("p1"));
        // p2 plays a terminal word and is eliminated; p3 plays on, chaining
        // off p1's word.
        assert_eq!(
            game.submit_word("ごばん", &id("p2")),
            SubmitOutcome::Eliminated(EliminationCause::TerminalWord)
        );

        assert!(game.is_active());
        assert_eq!(game.winner(), None);
        assert_eq!(game.current_participant().id, id("p3"));
        assert_eq!(game.submit_word("ごりら", &id("p3")), SubmitOutcome::Accepted);
    }

    #[test]
    fn test_turn_wraps_past_eliminated() {
        let mut game = session(&["p1", "p2", "p3"]);

        game.submit_word("りんご", &id("p1"));
        game.submit_word("ごばん", &id("p2")); // p2 out
        game.submit_word("ごりら", &id("p3"));

        // Wraps from p3 back to p1, skipping the hole at p2.
        assert_eq!(game.current_participant().id, id("p1"));
        game.submit_word("らっぱ", &id("p1"));
        assert_eq!(game.current_participant().id, id("p3"));
    }

    #[test]
    fn test_no_mutation_after_end() {
        let mut game = session(&["p1", "p2"]);
        game.submit_word("あいす", &id("p1"));
        game.submit_word("すいはん", &id("p2"));
        assert!(!game.is_active());

        let cursor = game.turn_index();
        let words = game.used_words().clone();

        assert_eq!(game.submit_word("すずめ", &id("p1")), SubmitOutcome::GameNotActive);
        assert_eq!(game.forfeit_current(), SubmitOutcome::GameNotActive);

        assert_eq!(game.turn_index(), cursor);
        assert_eq!(game.used_words(), &words);
        assert_eq!(game.winner(), Some(&id("p1")));
    }

    #[test]
    fn test_end_game_idempotent() {
        let mut game = session(&["p1", "p2"]);
        game.submit_word("りんご", &id("p1"));

        game.end_game();
        let snapshot = game.clone();
        game.end_game();

        assert!(!game.is_active());
        assert_eq!(game.winner(), None);
        assert_eq!(game.turn_index(), snapshot.turn_index());
        assert_eq!(game.used_words(), snapshot.used_words());
    }

    #[test]
    fn test_forfeit_eliminates_current() {
        let mut game = session(&["p1", "p2", "p3"]);

        assert_eq!(
            game.forfeit_current(),
            SubmitOutcome::Eliminated(EliminationCause::Forfeit)
        );
        assert!(game.eliminated().contains(&id("p1")));
        assert!(game.is_active());
        assert_eq!(game.current_participant().id, id("p2"));

        // Forfeit down to one player decides the game.
        let cursor = game.turn_index();
        assert_eq!(
            game.forfeit_current(),
            SubmitOutcome::Eliminated(EliminationCause::Forfeit)
        );
        assert!(!game.is_active());
        assert_eq!(game.winner(), Some(&id("p3")));
        assert_eq!(game.turn_index(), cursor);
        assert_eq!(game.eliminations()[1].word, None);
    }

    #[test]
    fn test_opening_word_has_no_chain_constraint() {
        let mut game = session(&["p1", "p2"]);
        // Any valid word opens.
        assert_eq!(game.submit_word("ばしょ", &id("p1")), SubmitOutcome::Accepted);
        // Next word must chain off it (ばしょ ends on よ).
        assert_eq!(
            game.submit_word("すいか", &id("p2")),
            SubmitOutcome::Rejected(RejectReason::BrokenChain)
        );
        assert_eq!(game.submit_word("よる", &id("p2")), SubmitOutcome::Accepted);
    }

    #[test]
    fn test_session_serialization() {
        let mut game = session(&["p1", "p2"]);
        game.submit_word("りんご", &id("p1"));

        let json = serde_json::to_string(&game).unwrap();
        let back: GameSession = serde_json::from_str(&json).unwrap();

        assert_eq!(back.used_words(), game.used_words());
        assert_eq!(back.turn_index(), game.turn_index());
        assert_eq!(back.is_active(), game.is_active());
    }
}
