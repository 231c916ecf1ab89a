//=========================================================================
// Global Systems
//=========================================================================
//
// Container for the possession core's logic systems.
//
// Per-tick pipeline (update):
//   1. input      batches → InputFrame (publishes focus changes)
//   2. focus      circle follows the focus level, overlaps refreshed
//   3. possess    possession edge → nearest candidate
//   4. steer      frame → possessed entity
//   5. coordinator cue + respawn timers (unscaled)
//   6. world      entities advance on scaled time
//   7. camera     follow moves (unscaled)
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info};

//=== Internal Dependencies ===============================================

use super::{BootstrapError, GameConfig, GlobalContext};
use crate::core::camera::CameraRig;
use crate::core::focus::FocusCircle;
use crate::core::input::{InputBindings, InputEvent, InputFrame, InputProcessor};
use crate::core::mode::{GameState, ModeScalePropagator};
use crate::core::possession::{EyeTrailCue, PossessionCoordinator};
use crate::core::stage::SpawnRegistry;
use crate::core::world::{DarkTemplate, DeathOutcome, EntityId};

//=== GlobalSystems =======================================================

/// Every logic system of the possession core, wired to one event bus.
///
/// # Available Systems
///
/// - `input`: raw events → player intent
/// - `stage`: spawn descriptors and the active spawn
/// - `possession`: the possession coordinator
/// - `focus`: candidate detector for focus targeting
/// - `mode`: game state and time scale
/// - `camera`: follow camera
pub struct GlobalSystems {
    pub input: InputProcessor,
    pub stage: SpawnRegistry,
    pub possession: PossessionCoordinator,
    pub focus: FocusCircle,
    pub mode: ModeScalePropagator,
    pub camera: CameraRig,

    config: GameConfig,
    focus_anchor: Option<EntityId>,
    initialized: bool,
}

impl GlobalSystems {
    //--- Construction -----------------------------------------------------

    /// Builds every system against `context.events`.
    ///
    /// The coordinator starts with an [`EyeTrailCue`] and the default
    /// [`DarkTemplate`]; both can be replaced before [`Self::initialize`].
    pub fn new(context: &GlobalContext, config: GameConfig) -> Self {
        let bus = &context.events;

        let possession = PossessionCoordinator::new(bus)
            .with_cue(EyeTrailCue::new())
            .with_cue_duration(config.cue_duration().as_secs_f32())
            .with_respawn_delay(config.respawn_delay().as_secs_f32())
            .with_template(DarkTemplate::default());

        Self {
            input: InputProcessor::new(bus, InputBindings::default()),
            stage: SpawnRegistry::new(bus.stage.clone()),
            possession,
            focus: FocusCircle::new(config.focus_radius()),
            mode: ModeScalePropagator::new(
                bus,
                config.default_time_scale(),
                config.focus_time_scale(),
            ),
            camera: CameraRig::new(bus, config.camera_transition().as_secs_f32()),
            config,
            focus_anchor: None,
            initialized: false,
        }
    }

    //--- Bootstrap --------------------------------------------------------

    /// Startup sequence: spawn the fallback at the active spawn, possess
    /// it, snap the camera there and enter `Playing`.
    ///
    /// Returns the fallback's id.
    pub fn initialize(&mut self, context: &mut GlobalContext) -> Result<EntityId, BootstrapError> {
        if self.initialized {
            return Err(BootstrapError::AlreadyInitialized);
        }

        let Some(spawn) = self.stage.active_descriptor() else {
            error!(target: "engine", "No active spawn found, aborting initialization");
            return Err(BootstrapError::NoActiveSpawn);
        };

        let Some(template) = self.possession.template() else {
            error!(target: "engine", "No fallback template assigned, aborting initialization");
            return Err(BootstrapError::MissingFallbackTemplate);
        };
        let fallback = template.instantiate(spawn.position);
        let fallback = context.world.spawn_boxed(fallback);

        self.possession.request_possess(&mut context.world, Some(fallback));

        let anchor = context
            .world
            .get(fallback)
            .and_then(|entity| entity.core_position())
            .unwrap_or(spawn.position);
        self.camera.snap_to(anchor);
        self.mode.change_state(GameState::Playing);

        self.initialized = true;
        info!(target: "engine", "Game initialized at '{}' with fallback {}", spawn.area_id, fallback);
        Ok(fallback)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick of every system. `dt` is unscaled seconds.
    pub fn update(&mut self, context: &mut GlobalContext, dt: f32) -> InputFrame {
        // 1. Input
        let events: Vec<InputEvent> = context.frame_events.drain(..).flatten().collect();
        let frame = self.input.process_frame(&events);

        // 2. Focus region
        self.sync_focus(context, frame.focus_held);
        self.focus.sync_overlaps(&context.world);

        // 3. Possession attempt
        if frame.possess_attempt {
            self.possession.focus_possess_input(&mut context.world, &self.focus);
        }

        // 4. Steer
        if let Some(current) = self.possession.current() {
            if let Some(entity) = context.world.get_mut(current) {
                entity.steer(&frame);
            }
        }

        // 5. Coordinator timers
        self.possession.tick(&mut context.world, dt);

        // 6. World on scaled time
        let scale = context.events.game_state.time_scale.get();
        context.world.update(dt * scale);

        // 7. Camera
        self.camera.update(&context.world, dt);

        frame
    }

    //--- Explicit Control -------------------------------------------------

    /// Reports that `entity` died: possession recovery first, then the
    /// entity's own death handling.
    pub fn report_death(&mut self, context: &mut GlobalContext, entity: EntityId) {
        self.possession.on_death(Some(entity));

        let outcome = context.world.get_mut(entity).map(|e| e.death());
        if outcome == Some(DeathOutcome::Despawn) {
            context.world.despawn(entity);
            debug!(target: "engine", "Despawned {} after death", entity);
        }
    }

    /// Sets the game state directly (pause, menu, game over...).
    pub fn change_state(&self, state: GameState) {
        self.mode.change_state(state);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    //--- Internal Helpers -------------------------------------------------

    /// Keeps the focus circle centered on the possessed core while focus
    /// is held.
    fn sync_focus(&mut self, context: &GlobalContext, held: bool) {
        if !held {
            if self.focus.is_active() {
                self.focus.deactivate();
            }
            self.focus_anchor = None;
            return;
        }

        let current = self.possession.current();
        if self.focus.is_active() && self.focus_anchor == current {
            return;
        }

        let center = current
            .and_then(|id| context.world.get(id))
            .and_then(|entity| entity.core_position());
        if let Some(center) = center {
            self.focus.activate(center);
            self.focus_anchor = current;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
