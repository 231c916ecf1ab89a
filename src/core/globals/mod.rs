//=========================================================================
// Global Engine State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   GlobalSystems: input, stage, possession, focus, mode, camera
//   GlobalContext: World + EventBus + this tick's input batches
//
//=========================================================================

//=== Module Declarations =================================================

mod config;
mod error;
mod global_context;
mod global_systems;

//=== Public API ==========================================================

pub use config::GameConfig;
pub use error::BootstrapError;
pub use global_context::GlobalContext;
pub use global_systems::GlobalSystems;
