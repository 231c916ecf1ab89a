//=========================================================================
// Possession Coordinator
//=========================================================================
//
// Sole writer of the "currently possessed" slot.
//
// Architecture:
//
//   request_possess(target)
//        │ validate (target, current, in-flight, world)
//        ├─ cue? ──► Transitioning ──tick: cue done──┐
//        │                                           ▼
//        └──────────────────────────────────► complete_transfer
//                                              1. outgoing off + try_possess
//                                              2. despawn outgoing fallback
//                                              3. target on + try_possess
//                                              4. eye → target
//                                              5. current cell, changed edge
//
//   on_death(id) ── id == current ──► PendingRespawn ──tick: delay──►
//        │                             spawn fallback at active spawn
//        └─ always ──► death edge            └─► request_possess
//
// At most one transfer is in flight; overlapping requests are rejected.
// Timers run on unscaled tick time.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::{debug, error, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::{
    CoordinatorPhase, CueCompletion, CueStatus, PossessOutcome, RejectReason, VisualCue,
};
use crate::core::event_bus::{
    EventBus, GameStateEvents, PossessionChange, PossessionEvents, StageEvents,
};
use crate::core::focus::FocusCircle;
use crate::core::mode::GameState;
use crate::core::world::{EntityId, EntityKind, Eye, FallbackTemplate, World};

//=== Internal State ======================================================

/// A transfer waiting on its visual cue.
struct InFlight {
    from: EntityId,
    to: EntityId,
    completion: CueCompletion,
}

/// A fallback respawn waiting out its delay.
#[derive(Debug, Clone, Copy)]
struct PendingRespawn {
    deceased: EntityId,
    position: Vec2,
    remaining: f32,
}

//=== PossessionCoordinator ===============================================

pub struct PossessionCoordinator {
    events: PossessionEvents,
    stage: StageEvents,
    game_state: GameStateEvents,

    eye: Eye,
    cue: Option<Box<dyn VisualCue>>,
    cue_duration: f32,
    template: Option<Box<dyn FallbackTemplate>>,
    respawn_delay: f32,

    in_flight: Option<InFlight>,
    pending_respawn: Option<PendingRespawn>,
}

impl PossessionCoordinator {
    //--- Construction -----------------------------------------------------

    /// Creates a coordinator with no cue, no template and the stock
    /// timings (0.3 s cue, 0.1 s respawn delay).
    pub fn new(bus: &EventBus) -> Self {
        Self {
            events: bus.possession.clone(),
            stage: bus.stage.clone(),
            game_state: bus.game_state.clone(),
            eye: Eye::new(),
            cue: None,
            cue_duration: 0.3,
            template: None,
            respawn_delay: 0.1,
            in_flight: None,
            pending_respawn: None,
        }
    }

    pub fn with_cue(mut self, cue: impl VisualCue + 'static) -> Self {
        self.cue = Some(Box::new(cue));
        self
    }

    pub fn with_template(mut self, template: impl FallbackTemplate + 'static) -> Self {
        self.template = Some(Box::new(template));
        self
    }

    /// # Panics
    ///
    /// Panics if `seconds` is negative.
    pub fn with_cue_duration(mut self, seconds: f32) -> Self {
        assert!(seconds >= 0.0, "Cue duration must be non-negative, got {}", seconds);
        self.cue_duration = seconds;
        self
    }

    /// # Panics
    ///
    /// Panics if `seconds` is negative.
    pub fn with_respawn_delay(mut self, seconds: f32) -> Self {
        assert!(seconds >= 0.0, "Respawn delay must be non-negative, got {}", seconds);
        self.respawn_delay = seconds;
        self
    }

    pub fn set_cue(&mut self, cue: Option<Box<dyn VisualCue>>) {
        self.cue = cue;
    }

    pub fn set_template(&mut self, template: Option<Box<dyn FallbackTemplate>>) {
        self.template = template;
    }

    //--- Transfer Protocol ------------------------------------------------

    /// Asks to move possession to `target`.
    ///
    /// Never fails outright: rejected requests are logged and leave every
    /// piece of state untouched.
    pub fn request_possess(&mut self, world: &mut World, target: Option<EntityId>) -> PossessOutcome {
        let Some(target) = target else {
            warn!(target: "possession", "Possession requested without a target");
            return PossessOutcome::Rejected(RejectReason::NoTarget);
        };

        let current = self.events.current.get();
        if current == Some(target) {
            debug!(target: "possession", "{} is already possessed", target);
            return PossessOutcome::Rejected(RejectReason::AlreadyPossessed);
        }

        if let Some(flight) = &self.in_flight {
            warn!(
                target: "possession",
                "Rejecting possession of {}: transfer {} → {} still in flight",
                target, flight.from, flight.to
            );
            return PossessOutcome::Rejected(RejectReason::TransitionInProgress);
        }

        let Some(incoming) = world.get(target) else {
            warn!(target: "possession", "Possession target {} is not in the world", target);
            return PossessOutcome::Rejected(RejectReason::UnknownEntity(target));
        };

        if let Some(from) = current {
            if incoming.kind() != EntityKind::Fallback {
                if let Some(completion) = self.start_cue(world, from, target) {
                    self.in_flight = Some(InFlight {
                        from,
                        to: target,
                        completion,
                    });
                    return PossessOutcome::Pending;
                }
            }
        }

        match self.complete_transfer(world, target) {
            Some(change) => PossessOutcome::Completed(change),
            None => PossessOutcome::Rejected(RejectReason::UnknownEntity(target)),
        }
    }

    /// Possession attempt from input: targets the nearest focus candidate.
    ///
    /// Ignored unless the game is in focus mode.
    pub fn focus_possess_input(&mut self, world: &mut World, focus: &FocusCircle) -> PossessOutcome {
        if self.game_state.state.get() != GameState::FocusMode {
            trace!(target: "possession", "Possess input outside focus mode ignored");
            return PossessOutcome::Rejected(RejectReason::NotFocusing);
        }

        let nearest = match self.events.current.get() {
            Some(current) => focus.nearest(world, current),
            None => None,
        };

        match nearest {
            Some(target) => self.request_possess(world, Some(target)),
            None => {
                debug!(target: "possession", "No focus candidate in range");
                PossessOutcome::Rejected(RejectReason::NoTarget)
            }
        }
    }

    //--- Death Handling ---------------------------------------------------

    /// Reports that `entity` died.
    ///
    /// Schedules a fallback respawn if it was the possessed entity, then
    /// broadcasts the death regardless.
    pub fn on_death(&mut self, entity: Option<EntityId>) {
        let Some(entity) = entity else {
            return;
        };

        if self.events.current.get() == Some(entity) {
            self.schedule_respawn(entity);
        }

        self.events.death.emit(entity);
    }

    fn schedule_respawn(&mut self, deceased: EntityId) {
        let Some(spawn) = self.stage.active_spawn.get() else {
            error!(target: "possession", "No active spawn, cannot respawn after {} died", deceased);
            return;
        };

        if self.template.is_none() {
            error!(target: "possession", "No fallback template assigned, cannot respawn");
            return;
        }

        info!(
            target: "possession",
            "Possessed {} died, respawning at '{}' in {}s",
            deceased, spawn.area_id, self.respawn_delay
        );
        self.pending_respawn = Some(PendingRespawn {
            deceased,
            position: spawn.position,
            remaining: self.respawn_delay,
        });
    }

    //--- Tick -------------------------------------------------------------

    /// Advances cue and respawn timers by `dt` seconds of unscaled time.
    pub fn tick(&mut self, world: &mut World, dt: f32) {
        if let Some(cue) = self.cue.as_mut() {
            cue.update(dt);
        }

        self.poll_in_flight(world);
        self.advance_respawn(world, dt);
    }

    fn poll_in_flight(&mut self, world: &mut World) {
        let status = match &self.in_flight {
            Some(flight) => flight.completion.poll(),
            None => return,
        };

        match status {
            CueStatus::Pending => {}
            CueStatus::Finished => {
                if let Some(flight) = self.in_flight.take() {
                    self.complete_transfer(world, flight.to);
                }
            }
            CueStatus::Abandoned => {
                if let Some(flight) = self.in_flight.take() {
                    warn!(target: "possession", "Visual cue abandoned, completing transfer to {}", flight.to);
                    self.complete_transfer(world, flight.to);
                }
            }
        }
    }

    fn advance_respawn(&mut self, world: &mut World, dt: f32) {
        let Some(mut pending) = self.pending_respawn.take() else {
            return;
        };

        if self.events.current.get() != Some(pending.deceased) {
            info!(target: "possession", "Control moved on from {}, respawn cancelled", pending.deceased);
            return;
        }

        if self.in_flight.is_some() {
            self.pending_respawn = Some(pending);
            return;
        }

        pending.remaining -= dt;
        if pending.remaining > 0.0 {
            self.pending_respawn = Some(pending);
            return;
        }

        let Some(template) = self.template.as_ref() else {
            error!(target: "possession", "Fallback template removed before respawn");
            return;
        };

        let fallback = world.spawn_boxed(template.instantiate(pending.position));
        debug!(target: "possession", "Spawned fallback {} at {}", fallback, pending.position);
        self.request_possess(world, Some(fallback));
    }

    //--- Internal Helpers -------------------------------------------------

    fn start_cue(&mut self, world: &World, from: EntityId, to: EntityId) -> Option<CueCompletion> {
        let cue = self.cue.as_mut()?;
        let start = world.get(from)?.eye_position()?;
        let end = world.get(to)?.eye_position()?;

        debug!(target: "possession", "Playing transfer cue {} → {}", from, to);
        Some(cue.play(start, end, self.cue_duration))
    }

    /// Swaps ownership to `target` and publishes the change.
    ///
    /// Returns `None` without touching anything if `target` left the world
    /// while its cue was playing.
    fn complete_transfer(&mut self, world: &mut World, target: EntityId) -> Option<PossessionChange> {
        if !world.contains(target) {
            warn!(target: "possession", "Transfer aborted: {} left the world", target);
            return None;
        }

        let previous = self.events.current.get();

        if let Some(previous_id) = previous {
            if let Some(outgoing) = world.get_mut(previous_id) {
                outgoing.set_possessed(false);
                outgoing.try_possess();

                if outgoing.kind() == EntityKind::Fallback {
                    world.despawn(previous_id);
                    debug!(target: "possession", "Fallback {} released", previous_id);
                }
            }
        }

        let incoming = world.get_mut(target)?;
        incoming.set_possessed(true);
        incoming.try_possess();
        let eye_offset = incoming.eye_offset();
        let name = incoming.name().to_string();

        self.eye.attach_to(target, eye_offset);

        let change = PossessionChange {
            old: previous,
            new: target,
        };
        self.events.current.set(Some(target));
        self.events.changed.emit(change);

        info!(target: "possession", "Possessed {} ({})", name, target);
        Some(change)
    }

    //--- Queries ----------------------------------------------------------

    pub fn current(&self) -> Option<EntityId> {
        self.events.current.get()
    }

    pub fn phase(&self) -> CoordinatorPhase {
        match (&self.in_flight, self.events.current.get()) {
            (Some(flight), _) => CoordinatorPhase::Transitioning {
                from: flight.from,
                to: flight.to,
            },
            (None, Some(current)) => CoordinatorPhase::Possessing(current),
            (None, None) => CoordinatorPhase::Idle,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_pending_respawn(&self) -> bool {
        self.pending_respawn.is_some()
    }

    pub fn has_template(&self) -> bool {
        self.template.is_some()
    }

    pub fn template(&self) -> Option<&dyn FallbackTemplate> {
        self.template.as_deref()
    }

    pub fn eye(&self) -> &Eye {
        &self.eye
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
