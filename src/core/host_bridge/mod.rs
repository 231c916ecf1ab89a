//=========================================================================
// Host Bridge
//=========================================================================
//
// Contract between the host (window, physics, renderer) and the core
// thread. Hosts only ever send; the core drains once per tick.
//
// Components:
// - `interface`: the message type
// - `event_collector`: core-side draining and batching
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Public API ==========================================================

pub use interface::HostEvent;
pub(crate) use event_collector::{EventCollector, TickControl};
