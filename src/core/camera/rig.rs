//=========================================================================
// Camera Rig
//=========================================================================
//
// Moves the camera to whatever the player now controls.
//
// Architecture:
//   possession.current (cell) ─┐
//                              ├─► target queue ─► update(world, dt)
//   stage.area_changed (edge) ─┘                      │
//                                                     ├─ start: transition(active)
//                                                     └─ end:   transition(settled)
//
// One move at a time; targets that arrive mid-move wait their turn.
// Entity targets are resolved to a position when their move starts.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use glam::Vec2;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::event_bus::{CameraEvents, CameraTransition, EventBus, SubscriptionBag};
use crate::core::world::{EntityId, World};

//=== CameraTarget ========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum CameraTarget {
    Entity(EntityId),
    Point(Vec2),
}

//=== Move ================================================================

#[derive(Debug, Clone, Copy)]
struct Move {
    from: Vec2,
    to: Vec2,
    elapsed: f32,
}

//=== CameraRig ===========================================================

pub struct CameraRig {
    position: Vec2,
    transition_duration: f32,
    queue: Rc<RefCell<VecDeque<CameraTarget>>>,
    active: Option<Move>,
    events: CameraEvents,
    subscriptions: SubscriptionBag,
}

impl CameraRig {
    //--- Construction -----------------------------------------------------

    /// # Panics
    ///
    /// Panics if `transition_duration` is negative.
    pub fn new(bus: &EventBus, transition_duration: f32) -> Self {
        assert!(
            transition_duration >= 0.0,
            "Camera transition must be non-negative, got {}",
            transition_duration
        );

        let queue = Rc::new(RefCell::new(VecDeque::new()));
        let mut subscriptions = SubscriptionBag::new();

        let q = Rc::clone(&queue);
        subscriptions.add(bus.possession.current.subscribe(move |current| {
            if let Some(id) = *current {
                q.borrow_mut().push_back(CameraTarget::Entity(id));
            }
        }));

        let q = Rc::clone(&queue);
        subscriptions.add(bus.stage.area_changed.subscribe(move |spawn| {
            q.borrow_mut().push_back(CameraTarget::Point(spawn.position));
        }));

        Self {
            position: Vec2::ZERO,
            transition_duration,
            queue,
            active: None,
            events: bus.camera.clone(),
            subscriptions,
        }
    }

    //--- Tick -------------------------------------------------------------

    /// Advances the current move by `dt` unscaled seconds, starting the
    /// next queued one when idle.
    pub fn update(&mut self, world: &World, dt: f32) {
        if self.active.is_none() {
            self.start_next(world);
        }

        let Some(mut current) = self.active.take() else {
            return;
        };

        current.elapsed += dt;
        let t = if self.transition_duration > 0.0 {
            (current.elapsed / self.transition_duration).min(1.0)
        } else {
            1.0
        };
        self.position = current.from.lerp(current.to, ease_in_out_cubic(t));

        if t >= 1.0 {
            self.position = current.to;
            debug!(target: "camera", "Camera settled at {}", current.to);
            self.events.transition.emit(CameraTransition {
                active: false,
                target: current.to,
                duration: 0.0,
            });
        } else {
            self.active = Some(current);
        }
    }

    /// Places the camera at `position` immediately.
    ///
    /// Drops queued targets; a move in progress is settled on the spot.
    pub fn snap_to(&mut self, position: Vec2) {
        self.queue.borrow_mut().clear();
        self.position = position;

        if self.active.take().is_some() {
            self.events.transition.emit(CameraTransition {
                active: false,
                target: position,
                duration: 0.0,
            });
        }
        trace!(target: "camera", "Camera snapped to {}", position);
    }

    //--- Accessors --------------------------------------------------------

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_moving(&self) -> bool {
        self.active.is_some()
    }

    pub fn queued(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn transition_duration(&self) -> f32 {
        self.transition_duration
    }

    pub fn set_transition_duration(&mut self, seconds: f32) {
        assert!(seconds >= 0.0, "Camera transition must be non-negative, got {}", seconds);
        self.transition_duration = seconds;
    }

    /// Stops following possession and area changes.
    pub fn detach(&mut self) {
        self.subscriptions.dispose_all();
    }

    //--- Internal Helpers -------------------------------------------------

    fn start_next(&mut self, world: &World) {
        loop {
            let Some(target) = self.queue.borrow_mut().pop_front() else {
                return;
            };

            let to = match target {
                CameraTarget::Point(point) => point,
                CameraTarget::Entity(id) => {
                    match world.get(id).and_then(|entity| entity.core_position()) {
                        Some(core) => core,
                        None => {
                            trace!(target: "camera", "Skipping camera target {}: no core", id);
                            continue;
                        }
                    }
                }
            };

            debug!(target: "camera", "Camera moving {} → {}", self.position, to);
            self.active = Some(Move {
                from: self.position,
                to,
                elapsed: 0.0,
            });
            self.events.transition.emit(CameraTransition {
                active: true,
                target: to,
                duration: self.transition_duration,
            });
            return;
        }
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
