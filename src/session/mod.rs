//! Game turn state machine: participants, configuration, session state.
//!
//! A `GameSession` is created from a `SessionConfig` when a round begins,
//! mutated exclusively through `submit_word` / `forfeit_current` /
//! `end_game`, and superseded by a fresh session when a new round starts.

pub mod config;
pub mod participant;
pub mod state;

pub use config::{RuleSettings, SessionConfig, SessionConfigBuilder, WinCondition};
pub use participant::{Difficulty, Participant, ParticipantId, ParticipantKind};
pub use state::{EliminationCause, EliminationRecord, GameSession, RejectReason, SubmitOutcome};
