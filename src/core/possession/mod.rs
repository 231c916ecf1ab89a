//=========================================================================
// Possession
//=========================================================================
//
// Exclusive-ownership state machine for player control.
//
// Architecture:
//   input edge ─► PossessionCoordinator ─► World flags + Eye
//                        │
//                        ├─► VisualCue (optional, suspends the swap)
//                        └─► PossessionEvents (current cell, changed, death)
//
//=========================================================================

//=== Module Declarations =================================================

mod coordinator;
mod cue;
mod outcome;

//=== Public API ==========================================================

pub use coordinator::PossessionCoordinator;
pub use cue::{CueCompletion, CueStatus, EyeTrailCue, VisualCue};
pub use outcome::{CoordinatorPhase, PossessOutcome, RejectReason};
