//! Chain and connectivity rule evaluation.
//!
//! Context-aware legality on top of `text` and `validate`:
//! - Does word B legally follow word A
//! - Terminal-mora detection
//! - Duplicate detection and whole-chain validation
//!
//! This layer adds no mutable state; the session owns all of that.

pub mod engine;

pub use engine::{ChainError, RuleEngine, TERMINAL_MORA};
