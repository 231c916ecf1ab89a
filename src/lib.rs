//=========================================================================
// Shade Engine — Library Root
//=========================================================================
//
// Possession-transfer and focus-targeting core for 2D games.
//
// The player controls exactly one body at a time. Holding focus slows
// time and lets the player jump into the nearest body in range; dying
// drops them back into a disposable fallback body at the active spawn.
//
// Typical usage:
// ```no_run
// use glam::Vec2;
// use shade_engine::prelude::*;
//
// let handle = EngineBuilder::new()
//     .build()
//     .init(|systems, _context| {
//         systems.stage.register_all(
//             vec![SpawnDescriptor::new("start", Vec2::ZERO)],
//             None,
//         );
//     })
//     .start();
//
// handle.send_inputs(vec![InputEvent::KeyDown(KeyCode::KeyF)]);
// handle.shutdown();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds every system that runs on the core thread. It is public so
// games can drive `GlobalSystems` themselves (tests, custom loops) instead
// of going through `Engine`.
//
// `platform` holds winit translation helpers for hosts.
//
pub mod core;
pub mod platform;
pub mod prelude;

mod engine;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineHandle};
