//=========================================================================
// Host Bridge Interface
//=========================================================================
//
// Host-to-core message contract.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::world::EntityId;

//=== HostEvent ===========================================================

/// Messages a host sends to the core thread over the bounded channel.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Input events gathered by the host since its last send.
    Inputs(Vec<InputEvent>),

    /// The host's physics/gameplay decided this entity died.
    EntityDied(EntityId),

    /// Stop the core loop.
    Shutdown,
}
