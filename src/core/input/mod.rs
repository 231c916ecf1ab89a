//=========================================================================
// Input System
//=========================================================================
//
// Device events in, player intent out.
//
// Architecture:
//   InputEvent → StateTracker → InputBindings → InputProcessor → InputFrame
//
// Owned by `GlobalSystems` and run once per tick before the possession
// coordinator.
//
//=========================================================================

//=== Module Declarations =================================================

mod bindings;
mod event;
mod frame;
mod processor;
mod state_tracker;

//=== Public API ==========================================================

pub use bindings::{InputBindings, InputSource, PlayerAction};
pub use event::{InputEvent, KeyCode, MouseButton};
pub use frame::InputFrame;
pub use processor::InputProcessor;
pub use state_tracker::StateTracker;
