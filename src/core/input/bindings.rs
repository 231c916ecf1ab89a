//=========================================================================
// Input Bindings
//=========================================================================
//
// Maps physical inputs to player actions.
//
// Architecture:
//   (KeyCode | MouseButton) → HashMap → PlayerAction
//
// Several inputs may drive the same action; an action is "down" if any
// of its inputs is held and "pressed" if any of them went down this tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::event::{KeyCode, MouseButton};
use super::state_tracker::StateTracker;

//=== PlayerAction ========================================================

/// Everything the player can ask the possession core to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    /// Discrete "attempt possession" edge.
    Possess,

    Jump,

    /// Held to stay in focus mode.
    Focus,
}

//=== InputSource =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Key(KeyCode),
    Mouse(MouseButton),
}

//=== InputBindings =======================================================

/// Input → action table.
#[derive(Debug, Clone)]
pub struct InputBindings {
    bindings: HashMap<InputSource, PlayerAction>,
}

impl InputBindings {
    /// Creates an empty table (nothing bound).
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key, replacing whatever it was bound to before.
    pub fn bind_key(&mut self, key: KeyCode, action: PlayerAction) -> &mut Self {
        self.bindings.insert(InputSource::Key(key), action);
        self
    }

    pub fn bind_mouse(&mut self, button: MouseButton, action: PlayerAction) -> &mut Self {
        self.bindings.insert(InputSource::Mouse(button), action);
        self
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        self.bindings.remove(&InputSource::Key(key));
    }

    pub fn unbind_mouse(&mut self, button: MouseButton) {
        self.bindings.remove(&InputSource::Mouse(button));
    }

    /// Removes every input bound to `action`.
    pub fn clear_action(&mut self, action: PlayerAction) {
        self.bindings.retain(|_, bound| *bound != action);
    }

    pub fn action_for(&self, source: InputSource) -> Option<PlayerAction> {
        self.bindings.get(&source).copied()
    }

    //--- Queries ----------------------------------------------------------

    /// True while any input bound to `action` is held.
    pub fn is_down(&self, tracker: &StateTracker, action: PlayerAction) -> bool {
        self.sources(action).any(|source| match source {
            InputSource::Key(key) => tracker.is_key_down(key),
            InputSource::Mouse(button) => tracker.is_button_down(button),
        })
    }

    /// True if any input bound to `action` went down this tick.
    pub fn was_pressed(&self, tracker: &StateTracker, action: PlayerAction) -> bool {
        self.sources(action).any(|source| match source {
            InputSource::Key(key) => tracker.is_key_pressed(key),
            InputSource::Mouse(button) => tracker.is_button_pressed(button),
        })
    }

    fn sources(&self, action: PlayerAction) -> impl Iterator<Item = InputSource> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(source, _)| *source)
    }
}

impl Default for InputBindings {
    /// WASD/arrows move, E or left click possesses, Space jumps,
    /// F or right click holds focus.
    fn default() -> Self {
        use KeyCode::*;
        use PlayerAction::*;

        let mut bindings = Self::empty();
        bindings
            .bind_key(KeyA, MoveLeft)
            .bind_key(ArrowLeft, MoveLeft)
            .bind_key(KeyD, MoveRight)
            .bind_key(ArrowRight, MoveRight)
            .bind_key(KeyW, MoveUp)
            .bind_key(ArrowUp, MoveUp)
            .bind_key(KeyS, MoveDown)
            .bind_key(ArrowDown, MoveDown)
            .bind_key(KeyE, Possess)
            .bind_mouse(MouseButton::Left, Possess)
            .bind_key(Space, Jump)
            .bind_key(KeyF, Focus)
            .bind_mouse(MouseButton::Right, Focus);
        bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::InputEvent;

    #[test]
    fn defaults_cover_every_action() {
        let bindings = InputBindings::default();
        assert_eq!(bindings.action_for(InputSource::Key(KeyCode::KeyE)), Some(PlayerAction::Possess));
        assert_eq!(bindings.action_for(InputSource::Key(KeyCode::Space)), Some(PlayerAction::Jump));
        assert_eq!(bindings.action_for(InputSource::Mouse(MouseButton::Right)), Some(PlayerAction::Focus));
    }

    #[test]
    fn any_bound_input_drives_action() {
        let bindings = InputBindings::default();
        let mut tracker = StateTracker::new();
        tracker.process_events(&[InputEvent::MouseButtonDown(MouseButton::Left)]);

        assert!(bindings.was_pressed(&tracker, PlayerAction::Possess));
        assert!(bindings.is_down(&tracker, PlayerAction::Possess));
        assert!(!bindings.is_down(&tracker, PlayerAction::Jump));
    }

    #[test]
    fn rebinding_replaces_previous_action() {
        let mut bindings = InputBindings::default();
        bindings.bind_key(KeyCode::KeyE, PlayerAction::Jump);
        assert_eq!(bindings.action_for(InputSource::Key(KeyCode::KeyE)), Some(PlayerAction::Jump));
    }

    #[test]
    fn clear_action_removes_all_sources() {
        let mut bindings = InputBindings::default();
        bindings.clear_action(PlayerAction::Focus);

        let mut tracker = StateTracker::new();
        tracker.process_events(&[InputEvent::KeyDown(KeyCode::KeyF)]);
        assert!(!bindings.is_down(&tracker, PlayerAction::Focus));
    }

    #[test]
    fn unbind_key_leaves_other_sources() {
        let mut bindings = InputBindings::default();
        bindings.unbind_key(KeyCode::KeyA);

        let mut tracker = StateTracker::new();
        tracker.process_events(&[InputEvent::KeyDown(KeyCode::ArrowLeft)]);
        assert!(bindings.is_down(&tracker, PlayerAction::MoveLeft));
        assert_eq!(bindings.action_for(InputSource::Key(KeyCode::KeyA)), None);
    }
}
