//=========================================================================
// Mode / Scale Propagator
//=========================================================================
//
// Derives game state and time scale from focus and camera events.
//
// Architecture:
//   focus.changed(true)        ──► state = FocusMode, scale = focus
//   focus.changed(false)       ──► state = Playing,   scale = default
//   camera.transition(active)  ──► scale = 0
//   camera.transition(settled) ──► scale = default
//
// Delivery is synchronous, so when several of these fire in one tick the
// last one emitted wins.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::GameState;
use crate::core::event_bus::{EventBus, GameStateEvents, SubscriptionBag};

//=== Scales ==============================================================

#[derive(Debug)]
struct Scales {
    default: Cell<f32>,
    focus: Cell<f32>,
}

//=== ModeScalePropagator =================================================

/// Owner of the game-state and time-scale cells.
pub struct ModeScalePropagator {
    events: GameStateEvents,
    scales: Rc<Scales>,
    subscriptions: SubscriptionBag,
}

impl ModeScalePropagator {
    //--- Construction -----------------------------------------------------

    /// Subscribes to `bus` and starts propagating immediately.
    ///
    /// # Panics
    ///
    /// Panics if either scale is negative.
    pub fn new(bus: &EventBus, default_scale: f32, focus_scale: f32) -> Self {
        assert!(default_scale >= 0.0, "Default time scale must be non-negative");
        assert!(focus_scale >= 0.0, "Focus time scale must be non-negative");

        let scales = Rc::new(Scales {
            default: Cell::new(default_scale),
            focus: Cell::new(focus_scale),
        });
        let events = bus.game_state.clone();
        let mut subscriptions = SubscriptionBag::new();

        {
            let events = events.clone();
            let scales = Rc::clone(&scales);
            subscriptions.add(bus.focus.changed.subscribe(move |&focusing| {
                if focusing {
                    events.state.set(GameState::FocusMode);
                    events.time_scale.set(scales.focus.get());
                } else {
                    events.state.set(GameState::Playing);
                    events.time_scale.set(scales.default.get());
                }
                debug!(target: "mode", "Focus {} → scale {}", focusing, events.time_scale.get());
            }));
        }

        {
            let events = events.clone();
            let scales = Rc::clone(&scales);
            subscriptions.add(bus.camera.transition.subscribe(move |transition| {
                let scale = if transition.active { 0.0 } else { scales.default.get() };
                events.time_scale.set(scale);
                debug!(target: "mode", "Camera transition active={} → scale {}", transition.active, scale);
            }));
        }

        Self {
            events,
            scales,
            subscriptions,
        }
    }

    //--- Explicit Control -------------------------------------------------

    /// Sets the game state directly (pause, menu, game over...).
    pub fn change_state(&self, state: GameState) {
        if self.events.state.set(state) {
            info!(target: "mode", "Game state changed to {:?}", state);
        }
    }

    pub fn current_state(&self) -> GameState {
        self.events.state.get()
    }

    pub fn time_scale(&self) -> f32 {
        self.events.time_scale.get()
    }

    /// Overrides the time scale until the next mapped event.
    pub fn set_time_scale(&self, scale: f32) {
        assert!(scale >= 0.0, "Time scale must be non-negative");
        self.events.time_scale.set(scale);
    }

    pub fn set_default_scale(&self, scale: f32) {
        assert!(scale >= 0.0, "Default time scale must be non-negative");
        self.scales.default.set(scale);
    }

    pub fn set_focus_scale(&self, scale: f32) {
        assert!(scale >= 0.0, "Focus time scale must be non-negative");
        self.scales.focus.set(scale);
    }

    pub fn default_scale(&self) -> f32 {
        self.scales.default.get()
    }

    pub fn focus_scale(&self) -> f32 {
        self.scales.focus.get()
    }

    //--- Teardown ---------------------------------------------------------

    /// Stops reacting to bus events. Explicit control keeps working.
    pub fn detach(&mut self) {
        self.subscriptions.dispose_all();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_bus::CameraTransition;
    use glam::Vec2;

    fn camera(active: bool) -> CameraTransition {
        CameraTransition {
            active,
            target: Vec2::ZERO,
            duration: if active { 0.5 } else { 0.0 },
        }
    }

    #[test]
    fn focus_on_then_off_restores_default_scale() {
        let bus = EventBus::new();
        let _mode = ModeScalePropagator::new(&bus, 1.0, 0.3);

        bus.focus.changed.emit(true);
        assert_eq!(bus.game_state.state.get(), GameState::FocusMode);
        assert_eq!(bus.game_state.time_scale.get(), 0.3);

        bus.focus.changed.emit(false);
        assert_eq!(bus.game_state.state.get(), GameState::Playing);
        assert_eq!(bus.game_state.time_scale.get(), 1.0);
    }

    #[test]
    fn camera_transition_pauses_and_resumes() {
        let bus = EventBus::new();
        let _mode = ModeScalePropagator::new(&bus, 1.0, 0.3);

        bus.camera.transition.emit(camera(true));
        assert_eq!(bus.game_state.time_scale.get(), 0.0);

        bus.camera.transition.emit(camera(false));
        assert_eq!(bus.game_state.time_scale.get(), 1.0);
    }

    #[test]
    fn camera_pause_overrides_focus_scale() {
        let bus = EventBus::new();
        let _mode = ModeScalePropagator::new(&bus, 1.0, 0.3);

        bus.focus.changed.emit(true);
        bus.camera.transition.emit(camera(true));

        assert_eq!(bus.game_state.time_scale.get(), 0.0);
        assert_eq!(bus.game_state.state.get(), GameState::FocusMode);
    }

    #[test]
    fn custom_scales_are_used() {
        let bus = EventBus::new();
        let mode = ModeScalePropagator::new(&bus, 1.0, 0.3);
        mode.set_default_scale(0.8);
        mode.set_focus_scale(0.1);

        bus.focus.changed.emit(true);
        assert_eq!(mode.time_scale(), 0.1);
        bus.focus.changed.emit(false);
        assert_eq!(mode.time_scale(), 0.8);
    }

    #[test]
    fn explicit_state_change() {
        let bus = EventBus::new();
        let mode = ModeScalePropagator::new(&bus, 1.0, 0.3);

        mode.change_state(GameState::Paused);
        assert_eq!(mode.current_state(), GameState::Paused);
    }

    #[test]
    fn detached_propagator_ignores_events() {
        let bus = EventBus::new();
        let mut mode = ModeScalePropagator::new(&bus, 1.0, 0.3);
        mode.detach();

        bus.focus.changed.emit(true);
        assert_eq!(bus.game_state.state.get(), GameState::Playing);
        assert_eq!(bus.game_state.time_scale.get(), 1.0);
    }

    #[test]
    #[should_panic(expected = "Focus time scale must be non-negative")]
    fn negative_focus_scale_panics() {
        ModeScalePropagator::new(&EventBus::new(), 1.0, -0.1);
    }
}
