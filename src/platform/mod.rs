//=========================================================================
// Platform Translation
//=========================================================================
//
// Helpers for hosts that drive the engine from a winit event loop.
//
// Architecture:
// ```text
//  Host thread (winit loop)              Core thread
//  ┌────────────────────────┐           ┌──────────────────┐
//  │ WindowEvent            │           │ EventCollector   │
//  │   ↓ translate_*        │           │   ↓              │
//  │ InputBuffer            │           │ GlobalSystems    │
//  │   ↓ drain()            │           │                  │
//  │ EngineHandle ──────────┼──────────►│                  │
//  └────────────────────────┘ HostEvent └──────────────────┘
// ```
//
// The engine does not own a window or event loop; raw polling stays with
// the host.
//
//=========================================================================

//=== Module Declarations =================================================

mod input_buffer;
mod translate;

//=== Public API ==========================================================

pub use input_buffer::InputBuffer;
pub use translate::{translate_key, translate_mouse};
