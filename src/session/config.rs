//! Session configuration.
//!
//! Built once at setup via `SessionConfigBuilder`, immutable thereafter,
//! owned by the session. Setup mistakes (duplicate ids, bad turn order)
//! are programmer errors and assert, unlike gameplay outcomes which are
//! always typed results.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::participant::{Participant, ParticipantId};

/// How a session is won.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCondition {
    /// The last non-eliminated participant wins.
    #[default]
    LastStanding,
}

/// Tunable rule settings for a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSettings {
    /// Per-turn time limit. Enforced by an external timer, not this crate;
    /// carried here so callers have one place to read it from.
    pub turn_time_limit: Option<Duration>,

    /// Maximum participant count a session accepts.
    pub max_players: usize,

    /// Win condition policy.
    pub win_condition: WinCondition,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            turn_time_limit: None,
            max_players: 8,
            win_condition: WinCondition::LastStanding,
        }
    }
}

/// Immutable session setup: participants, turn order, rule settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    participants: Vec<Participant>,
    turn_order: Vec<ParticipantId>,
    rules: RuleSettings,
}

impl SessionConfig {
    /// All participants, in registration order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// The play sequence, a permutation of participant ids.
    #[must_use]
    pub fn turn_order(&self) -> &[ParticipantId] {
        &self.turn_order
    }

    /// Rule settings.
    #[must_use]
    pub fn rules(&self) -> &RuleSettings {
        &self.rules
    }

    /// Number of participants.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Look up a participant by id.
    #[must_use]
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }
}

/// Builder for `SessionConfig`.
pub struct SessionConfigBuilder {
    participants: Vec<Participant>,
    turn_order: Option<Vec<ParticipantId>>,
    rules: RuleSettings,
}

impl Default for SessionConfigBuilder {
    fn default() -> Self {
        Self {
            participants: Vec::new(),
            turn_order: None,
            rules: RuleSettings::default(),
        }
    }
}

impl SessionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant. Registration order is the default turn order.
    #[must_use]
    pub fn participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    /// Set an explicit turn order (must be a permutation of participant ids).
    #[must_use]
    pub fn turn_order(mut self, order: Vec<ParticipantId>) -> Self {
        self.turn_order = Some(order);
        self
    }

    /// Set the per-turn time limit.
    #[must_use]
    pub fn turn_time_limit(mut self, limit: Duration) -> Self {
        self.rules.turn_time_limit = Some(limit);
        self
    }

    /// Set the maximum participant count.
    #[must_use]
    pub fn max_players(mut self, max: usize) -> Self {
        self.rules.max_players = max;
        self
    }

    /// Build the configuration, checking setup invariants.
    pub fn build(self) -> SessionConfig {
        assert!(
            self.participants.len() >= 2,
            "A session needs at least 2 participants"
        );
        assert!(
            self.participants.len() <= self.rules.max_players,
            "Participant count exceeds max_players"
        );

        for (i, p) in self.participants.iter().enumerate() {
            assert!(
                !self.participants[..i].iter().any(|q| q.id == p.id),
                "Duplicate participant id: {}",
                p.id
            );
        }

        let turn_order = self
            .turn_order
            .unwrap_or_else(|| self.participants.iter().map(|p| p.id.clone()).collect());

        assert_eq!(
            turn_order.len(),
            self.participants.len(),
            "Turn order must cover every participant exactly once"
        );
        for id in &turn_order {
            assert!(
                self.participants.iter().any(|p| &p.id == id),
                "Turn order references unknown participant: {id}"
            );
        }
        for (i, id) in turn_order.iter().enumerate() {
            assert!(
                !turn_order[..i].contains(id),
                "Turn order repeats participant: {id}"
            );
        }

        SessionConfig {
            participants: self.participants,
            turn_order,
            rules: self.rules,
        }
    }
}
