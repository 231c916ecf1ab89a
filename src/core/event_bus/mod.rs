//=========================================================================
// Event Bus
//=========================================================================
//
// Typed, synchronous pub/sub for the possession core.
//
// Architecture:
//   StateCell<T>  ── set() ──► subscribers   (replays current on subscribe)
//   EdgeEvent<T>  ── emit() ─► subscribers   (no replay)
//                                 │
//                     Subscription (dispose / drop)
//
// Pattern: owner writes → subscribers react in subscription order → return
//
// Single-threaded by construction (`Rc`): the whole game lives on the
// core thread.
//
//=========================================================================

//=== Module Declarations =================================================

mod channels;
mod edge_event;
mod state_cell;
mod subscribers;
mod subscription;

//=== Public API ==========================================================

pub use channels::{
    CameraEvents, CameraTransition, EventBus, FocusEvents, GameStateEvents, PossessionChange,
    PossessionEvents, StageEvents,
};
pub use edge_event::EdgeEvent;
pub use state_cell::StateCell;
pub use subscription::{Subscription, SubscriptionBag};
