//! # shiritori-engine
//!
//! Rule engine and turn state machine for shiritori, the word-chaining
//! game: each word must begin with the final sound of the previous word,
//! and a word ending on ん loses.
//!
//! ## Design Principles
//!
//! 1. **One direction of data flow**: raw input → normalization →
//!    structural validation → chain rules → session bookkeeping.
//!
//! 2. **Total leaf functions**: normalization and validation never fail;
//!    unmappable input degrades to itself or to "invalid", never to an
//!    error. Availability of play beats strictness.
//!
//! 3. **Closed outcome taxonomy**: every gameplay result is one of
//!    `Accepted`, `Rejected`, `Eliminated`, `GameNotActive`. No exceptions
//!    for control flow, no "unknown error" bucket.
//!
//! 4. **Explicit injection**: no process-wide singletons; rules, sources,
//!    and RNGs are threaded in by value or parameter.
//!
//! ## Modules
//!
//! - `text`: kana tables and phonetic normalization
//! - `validate`: structural word well-formedness
//! - `rules`: chain/connectivity legality and whole-chain validation
//! - `session`: participants, configuration, the turn state machine
//! - `dictionary`: the word-content boundary contract
//! - `players`: computer participant move selection
//! - `rng`: deterministic seeded RNG for computer play

pub mod dictionary;
pub mod players;
pub mod rng;
pub mod rules;
pub mod session;
pub mod text;
pub mod validate;

// Re-export commonly used types
pub use crate::text::{
    leading_mora, normalize_for_chaining, normalize_last_char, to_canonical_script, trailing_mora,
};

pub use crate::validate::{is_valid_word, sanitize_input};

pub use crate::rules::{ChainError, RuleEngine, TERMINAL_MORA};

pub use crate::session::{
    Difficulty, EliminationCause, EliminationRecord, GameSession, Participant, ParticipantId,
    ParticipantKind, RejectReason, RuleSettings, SessionConfig, SessionConfigBuilder,
    SubmitOutcome, WinCondition,
};

pub use crate::dictionary::{StaticDictionary, WordSource};

pub use crate::players::ComputerPlayer;

pub use crate::rng::EngineRng;
