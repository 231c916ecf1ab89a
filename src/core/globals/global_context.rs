//=========================================================================
// Global Context
//=========================================================================
//
// Shared data the systems operate on.
//
// - world: every possessable entity
// - events: the event bus every system was wired to
// - subscriptions: game-code subscriptions that live as long as the context
// - frame_events: input batches received since the last tick
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::event_bus::{EventBus, SubscriptionBag};
use crate::core::input::InputEvent;
use crate::core::world::World;

//=== GlobalContext =======================================================

/// Data shared between the engine, the systems and game code.
pub struct GlobalContext {
    /// Entity store. Game code spawns its world here during init.
    pub world: World,

    /// Event bus. Systems built from this context publish on it; game
    /// code may subscribe freely.
    pub events: EventBus,

    /// Keeps game-code subscriptions alive for the whole run.
    pub subscriptions: SubscriptionBag,

    /// Input batches for the current tick, consumed by the input processor.
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl GlobalContext {
    /// Creates an empty world with a fresh event bus.
    pub fn new() -> Self {
        Self {
            world: World::new(),
            events: EventBus::new(),
            subscriptions: SubscriptionBag::new(),
            frame_events: Vec::new(),
        }
    }

    /// Queues a batch of input events for the next update.
    pub fn push_inputs(&mut self, batch: Vec<InputEvent>) {
        if !batch.is_empty() {
            self.frame_events.push(batch);
        }
    }
}

impl Default for GlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
