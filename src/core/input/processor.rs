//=========================================================================
// Input Processor
//=========================================================================
//
// Turns a tick's raw input events into an `InputFrame`.
//
// Architecture:
//   InputEvent[] → StateTracker → InputBindings → InputFrame
//                                      │
//                                      └─ focus level change → FocusEvents
//
// Gate: input is accepted only while the game state is Playing or
// FocusMode. A closed gate yields a zeroed frame with no edges; held
// state keeps tracking underneath so nothing sticks when it reopens.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{InputBindings, InputEvent, InputFrame, PlayerAction, StateTracker};
use crate::core::event_bus::{EventBus, FocusEvents, Subscription};

//=== InputProcessor ======================================================

/// Per-tick input pipeline for the possession core.
pub struct InputProcessor {
    bindings: InputBindings,
    tracker: StateTracker,
    focus: FocusEvents,
    focus_held: bool,
    enabled: Rc<Cell<bool>>,
    _gate: Subscription,
}

impl InputProcessor {
    /// Creates a processor whose gate follows the bus's game-state cell.
    pub fn new(bus: &EventBus, bindings: InputBindings) -> Self {
        let enabled = Rc::new(Cell::new(true));

        let gate = Rc::clone(&enabled);
        let gate_subscription = bus.game_state.state.subscribe(move |state| {
            let open = state.accepts_input();
            if open != gate.get() {
                debug!(target: "input", "Input {} (state {:?})", if open { "enabled" } else { "disabled" }, state);
                gate.set(open);
            }
        });

        Self {
            bindings,
            tracker: StateTracker::new(),
            focus: bus.focus.clone(),
            focus_held: false,
            enabled,
            _gate: gate_subscription,
        }
    }

    //--- Tick -------------------------------------------------------------

    /// Digests this tick's events and returns the resulting intent.
    ///
    /// Publishes focus-changed when the focus hold level flips.
    pub fn process_frame(&mut self, events: &[InputEvent]) -> InputFrame {
        self.tracker.clear();
        self.tracker.process_events(events);

        if !self.enabled.get() {
            return InputFrame {
                focus_held: self.focus_held,
                ..InputFrame::default()
            };
        }

        let focus_now = self.bindings.is_down(&self.tracker, PlayerAction::Focus);
        if focus_now != self.focus_held {
            self.focus_held = focus_now;
            debug!(target: "input", "Focus {}", if focus_now { "held" } else { "released" });
            self.focus.changed.emit(focus_now);
        }

        let frame = InputFrame {
            move_vector: if self.focus_held { Vec2::ZERO } else { self.move_axis() },
            possess_attempt: self.bindings.was_pressed(&self.tracker, PlayerAction::Possess),
            jump: self.bindings.was_pressed(&self.tracker, PlayerAction::Jump),
            focus_held: self.focus_held,
        };

        if frame.has_edges() {
            trace!(target: "input", "Frame edges: {:?}", frame);
        }
        frame
    }

    //--- Accessors --------------------------------------------------------

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn is_focus_held(&self) -> bool {
        self.focus_held
    }

    pub fn bindings_mut(&mut self) -> &mut InputBindings {
        &mut self.bindings
    }

    pub fn tracker(&self) -> &StateTracker {
        &self.tracker
    }

    //--- Internal Helpers -------------------------------------------------

    fn move_axis(&self) -> Vec2 {
        let axis = |negative: PlayerAction, positive: PlayerAction| -> f32 {
            let mut value = 0.0;
            if self.bindings.is_down(&self.tracker, negative) {
                value -= 1.0;
            }
            if self.bindings.is_down(&self.tracker, positive) {
                value += 1.0;
            }
            value
        };

        Vec2::new(
            axis(PlayerAction::MoveLeft, PlayerAction::MoveRight),
            axis(PlayerAction::MoveDown, PlayerAction::MoveUp),
        )
        .normalize_or_zero()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::mode::GameState;
    use std::cell::RefCell;

    fn processor() -> (EventBus, InputProcessor) {
        let bus = EventBus::new();
        let processor = InputProcessor::new(&bus, InputBindings::default());
        (bus, processor)
    }

    #[test]
    fn movement_is_normalized() {
        let (_bus, mut input) = processor();
        let frame = input.process_frame(&[
            InputEvent::KeyDown(KeyCode::KeyD),
            InputEvent::KeyDown(KeyCode::KeyW),
        ]);

        assert!((frame.move_vector.length() - 1.0).abs() < 1e-5);
        assert!(frame.move_vector.x > 0.0 && frame.move_vector.y > 0.0);
    }

    #[test]
    fn possess_is_an_edge() {
        let (_bus, mut input) = processor();

        let first = input.process_frame(&[InputEvent::KeyDown(KeyCode::KeyE)]);
        let second = input.process_frame(&[]);

        assert!(first.possess_attempt);
        assert!(!second.possess_attempt);
    }

    #[test]
    fn focus_level_change_is_published_once() {
        let (bus, mut input) = processor();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _sub = bus.focus.changed.subscribe(move |f| s.borrow_mut().push(*f));

        input.process_frame(&[InputEvent::KeyDown(KeyCode::KeyF)]);
        input.process_frame(&[]);
        input.process_frame(&[InputEvent::KeyUp(KeyCode::KeyF)]);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn movement_is_zero_while_focus_held() {
        let (_bus, mut input) = processor();
        let frame = input.process_frame(&[
            InputEvent::KeyDown(KeyCode::KeyF),
            InputEvent::KeyDown(KeyCode::KeyD),
        ]);

        assert_eq!(frame.move_vector, Vec2::ZERO);
        assert!(frame.focus_held);
    }

    #[test]
    fn closed_gate_zeroes_input_and_suppresses_edges() {
        let (bus, mut input) = processor();
        bus.game_state.state.set(GameState::Paused);
        assert!(!input.is_enabled());

        let frame = input.process_frame(&[
            InputEvent::KeyDown(KeyCode::KeyD),
            InputEvent::KeyDown(KeyCode::KeyE),
        ]);
        assert_eq!(frame, InputFrame::default());

        bus.game_state.state.set(GameState::Playing);
        let frame = input.process_frame(&[]);
        // D is still held underneath; the press edge was swallowed
        assert!(frame.move_vector.x > 0.0);
        assert!(!frame.possess_attempt);
    }

    #[test]
    fn focus_mode_keeps_gate_open() {
        let (bus, input) = processor();
        bus.game_state.state.set(GameState::FocusMode);
        assert!(input.is_enabled());
    }
}
