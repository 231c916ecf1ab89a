//=========================================================================
// Stage
//=========================================================================
//
// Spawn points and the currently active one.
//
//=========================================================================

//=== Module Declarations =================================================

mod descriptor;
mod registry;

//=== Public API ==========================================================

pub use descriptor::SpawnDescriptor;
pub use registry::SpawnRegistry;
