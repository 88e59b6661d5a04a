//! Participant identity.
//!
//! Participants are immutable for the lifetime of a session once it starts.

use serde::{Deserialize, Serialize};

/// Stable unique participant identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Create a participant ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Computer participant strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

/// What kind of participant this is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantKind {
    Human,
    Computer(Difficulty),
}

/// A player in a session: identity, display name, kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub kind: ParticipantKind,
}

impl Participant {
    /// Create a human participant.
    #[must_use]
    pub fn human(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(id),
            name: name.into(),
            kind: ParticipantKind::Human,
        }
    }

    /// Create a computer participant with the given difficulty.
    #[must_use]
    pub fn computer(id: impl Into<String>, name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            id: ParticipantId::new(id),
            name: name.into(),
            kind: ParticipantKind::Computer(difficulty),
        }
    }

    /// Check whether this participant is computer-controlled.
    #[must_use]
    pub fn is_computer(&self) -> bool {
        matches!(self.kind, ParticipantKind::Computer(_))
    }
}
