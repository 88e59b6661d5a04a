//! Participant move selection.
//!
//! Humans submit through the UI; computer participants pick their word
//! here and feed it through the same `submit_word` entry point.

pub mod computer;

pub use computer::ComputerPlayer;
