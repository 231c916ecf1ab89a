//=========================================================================
// Game Mode
//=========================================================================
//
// Game state and global time scale.
//
//=========================================================================

//=== Module Declarations =================================================

mod game_state;
mod propagator;

//=== Public API ==========================================================

pub use game_state::GameState;
pub use propagator::ModeScalePropagator;
