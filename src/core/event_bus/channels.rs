//=========================================================================
// Domain Channels
//=========================================================================
//
// The concrete channels the possession core publishes on, grouped by the
// component that owns the writes.
//
//   PossessionEvents  current (cell) · changed (edge) · death (edge)
//   GameStateEvents   state (cell)   · time_scale (cell)
//   StageEvents       active_spawn (cell) · area_changed (edge)
//   FocusEvents       changed (edge)
//   CameraEvents      transition (edge)
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::{EdgeEvent, StateCell};
use crate::core::mode::GameState;
use crate::core::stage::SpawnDescriptor;
use crate::core::world::EntityId;

//=== Payloads ============================================================

/// Emitted once per successful possession transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PossessionChange {
    /// The entity that held possession before the transfer, if any.
    pub old: Option<EntityId>,

    /// The entity that holds possession now.
    pub new: EntityId,
}

/// Camera movement start/end notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransition {
    /// True when a move starts, false when it settles.
    pub active: bool,

    /// Where the camera is heading.
    pub target: Vec2,

    /// Move length in seconds (0 on the settling edge).
    pub duration: f32,
}

//=== Channel Groups ======================================================

/// Possession slot and possession-related notifications.
///
/// Written only by the possession coordinator.
#[derive(Clone, Debug, Default)]
pub struct PossessionEvents {
    pub current: StateCell<Option<EntityId>>,
    pub changed: EdgeEvent<PossessionChange>,
    pub death: EdgeEvent<EntityId>,
}

/// Active game state and global time scale.
///
/// Written by the mode/scale propagator and explicit state changes.
#[derive(Clone, Debug)]
pub struct GameStateEvents {
    pub state: StateCell<GameState>,
    pub time_scale: StateCell<f32>,
}

impl Default for GameStateEvents {
    fn default() -> Self {
        Self {
            state: StateCell::new(GameState::Playing),
            time_scale: StateCell::new(1.0),
        }
    }
}

/// Active spawn descriptor and area changes. Written by the spawn registry.
#[derive(Clone, Debug, Default)]
pub struct StageEvents {
    pub active_spawn: StateCell<Option<SpawnDescriptor>>,
    pub area_changed: EdgeEvent<SpawnDescriptor>,
}

/// Focus mode level changes, published by the input processor.
#[derive(Clone, Debug, Default)]
pub struct FocusEvents {
    pub changed: EdgeEvent<bool>,
}

/// Camera move notifications, published by the camera rig.
#[derive(Clone, Debug, Default)]
pub struct CameraEvents {
    pub transition: EdgeEvent<CameraTransition>,
}

//=== EventBus ============================================================

/// Every channel of the possession core.
///
/// Cheap to clone: all clones share the same underlying channels. Handed
/// to each component at construction time.
#[derive(Clone, Debug, Default)]
pub struct EventBus {
    pub possession: PossessionEvents,
    pub game_state: GameStateEvents,
    pub stage: StageEvents,
    pub focus: FocusEvents,
    pub camera: CameraEvents,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn defaults_start_idle_and_playing() {
        let bus = EventBus::new();
        assert_eq!(bus.possession.current.get(), None);
        assert_eq!(bus.game_state.state.get(), GameState::Playing);
        assert_eq!(bus.game_state.time_scale.get(), 1.0);
        assert_eq!(bus.stage.active_spawn.get(), None);
    }

    #[test]
    fn cloned_bus_shares_channels() {
        let bus = EventBus::new();
        let other = bus.clone();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _sub = bus.focus.changed.subscribe(move |f| s.borrow_mut().push(*f));

        other.focus.changed.emit(true);

        assert_eq!(*seen.borrow(), vec![true]);
    }
}
