//=========================================================================
// Core Systems
//=========================================================================
//
// Everything that runs on the core thread.
//
// Architecture:
//   event_bus    typed channels (state cells, edge events)
//   world        entities, eye marker, fallback template
//   input        raw events → InputFrame
//   focus        candidate detector
//   stage        spawn registry
//   possession   transfer state machine
//   mode         game state / time scale
//   camera       follow camera
//   globals      GlobalSystems + GlobalContext
//   host_bridge  host → core channel contract
//
//=========================================================================

pub mod camera;
pub mod event_bus;
pub mod focus;
pub mod globals;
pub mod host_bridge;
pub mod input;
pub mod mode;
pub mod possession;
pub mod stage;
pub mod world;
