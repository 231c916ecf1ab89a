//=========================================================================
// State Tracker
//=========================================================================
//
// Per-tick device state: what is held, and what changed this tick.
//
// Architecture:
//   InputEvent → process_events() → HashSet (held) + HashSet (deltas)
//
// Tick lifecycle: clear() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== StateTracker ========================================================

/// Tracks held keys/buttons and per-tick press/release deltas.
#[derive(Debug, Default)]
pub struct StateTracker {
    //--- Persistent State (survives tick boundary) -----------------------
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,

    //--- Tick Deltas (reset via clear()) ---------------------------------
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Tick Processing --------------------------------------------------

    /// Forgets last tick's press/release deltas.
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Drops all held state, e.g. after the host lost window focus.
    pub fn reset(&mut self) {
        self.clear();
        self.keys_down.clear();
        self.buttons_down.clear();
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                // Auto-repeat arrives as KeyDown while held; not a new press
                if self.keys_down.insert(key) {
                    self.keys_pressed.insert(key);
                }
            }
            InputEvent::KeyUp(key) => {
                if self.keys_down.remove(&key) {
                    self.keys_released.insert(key);
                }
            }
            InputEvent::MouseButtonDown(button) => {
                if self.buttons_down.insert(button) {
                    self.buttons_pressed.insert(button);
                }
            }
            InputEvent::MouseButtonUp(button) => {
                if self.buttons_down.remove(&button) {
                    self.buttons_released.insert(button);
                }
            }
            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// True only on the tick the key went down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// True while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown(key)
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp(key)
    }

    #[test]
    fn key_pressed_only_on_transition_tick() {
        let mut tracker = StateTracker::new();

        tracker.clear();
        tracker.process_events(&[key_down(KeyCode::KeyE)]);
        assert!(tracker.is_key_pressed(KeyCode::KeyE));
        assert!(tracker.is_key_down(KeyCode::KeyE));

        tracker.clear();
        tracker.process_events(&[]);
        assert!(!tracker.is_key_pressed(KeyCode::KeyE));
        assert!(tracker.is_key_down(KeyCode::KeyE));

        tracker.clear();
        tracker.process_events(&[key_up(KeyCode::KeyE)]);
        assert!(!tracker.is_key_down(KeyCode::KeyE));
        assert!(tracker.is_key_released(KeyCode::KeyE));
    }

    #[test]
    fn repeated_key_down_is_not_a_new_press() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::Space)]);

        tracker.clear();
        tracker.process_events(&[key_down(KeyCode::Space)]);

        assert!(!tracker.is_key_pressed(KeyCode::Space));
        assert!(tracker.is_key_down(KeyCode::Space));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_up(KeyCode::KeyA)]);
        assert!(!tracker.is_key_released(KeyCode::KeyA));
    }

    #[test]
    fn mouse_buttons_track_like_keys() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[InputEvent::MouseButtonDown(MouseButton::Right)]);
        assert!(tracker.is_button_pressed(MouseButton::Right));
        assert!(tracker.is_button_down(MouseButton::Right));

        tracker.clear();
        tracker.process_events(&[InputEvent::MouseButtonUp(MouseButton::Right)]);
        assert!(tracker.is_button_released(MouseButton::Right));
        assert!(!tracker.is_button_down(MouseButton::Right));
    }

    #[test]
    fn reset_drops_held_state() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::KeyF)]);
        tracker.reset();
        assert!(!tracker.is_key_down(KeyCode::KeyF));
    }
}
