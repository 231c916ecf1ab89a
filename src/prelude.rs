//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use shade_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, EngineHandle};

// Global systems and context
pub use crate::core::globals::{BootstrapError, GameConfig, GlobalContext, GlobalSystems};

// Event bus
pub use crate::core::event_bus::{
    CameraTransition, EdgeEvent, EventBus, PossessionChange, StateCell, Subscription,
    SubscriptionBag,
};

// World
pub use crate::core::world::{
    DeathOutcome, EntityId, EntityKind, FallbackTemplate, Possessable, World,
};

// Input
pub use crate::core::input::{InputBindings, InputEvent, InputFrame, KeyCode, MouseButton, PlayerAction};

// Possession, focus, stage, mode
pub use crate::core::focus::FocusCircle;
pub use crate::core::host_bridge::HostEvent;
pub use crate::core::mode::GameState;
pub use crate::core::possession::{PossessOutcome, PossessionCoordinator, RejectReason, VisualCue};
pub use crate::core::stage::{SpawnDescriptor, SpawnRegistry};
