//=========================================================================
// Possession Outcomes
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::event_bus::PossessionChange;
use crate::core::world::EntityId;

//=== RejectReason ========================================================

/// Why a possession request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No target was given (or focus found no candidate).
    NoTarget,

    /// The target id is not in the world.
    UnknownEntity(EntityId),

    /// The target already holds possession.
    AlreadyPossessed,

    /// Another transfer is waiting on its visual cue.
    TransitionInProgress,

    /// A focus possession attempt outside focus mode.
    NotFocusing,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTarget => write!(f, "no target"),
            Self::UnknownEntity(id) => write!(f, "entity {} is not in the world", id),
            Self::AlreadyPossessed => write!(f, "target is already possessed"),
            Self::TransitionInProgress => write!(f, "a transition is already in progress"),
            Self::NotFocusing => write!(f, "focus mode is not active"),
        }
    }
}

//=== PossessOutcome ======================================================

/// Result of asking the coordinator to transfer possession.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PossessOutcome {
    /// Ownership swapped and the change was published.
    Completed(PossessionChange),

    /// A visual cue is playing; the swap happens on a later tick.
    Pending,

    Rejected(RejectReason),
}

impl PossessOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

//=== CoordinatorPhase ====================================================

/// Where the coordinator's transfer protocol currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorPhase {
    /// Nothing possessed yet (startup only).
    Idle,

    Possessing(EntityId),

    /// A cue is in flight between `from` and `to`.
    Transitioning { from: EntityId, to: EntityId },
}
