//=========================================================================
// Input Buffer
//=========================================================================
//
// Host-side collection of translated input between sends.
//
// Architecture:
//   winit event → translate → InputBuffer → drain() → HostEvent::Inputs
//
// Consecutive duplicates (key repeat) are dropped on the way in.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, MouseButton as WinitMouseButton},
    keyboard::PhysicalKey,
};

//=== Internal Dependencies ===============================================

use super::translate::{translate_key, translate_mouse};
use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

/// Per-frame input accumulator for hosts.
#[derive(Debug, Default)]
pub struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(64),
        }
    }

    /// Appends `event` unless it repeats the previous one.
    pub fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    /// Translates and records a key transition. Returns false if the key
    /// is not mapped.
    pub fn push_key(&mut self, key: PhysicalKey, state: ElementState) -> bool {
        match translate_key(key, state) {
            Some(event) => {
                self.push(event);
                true
            }
            None => false,
        }
    }

    pub fn push_mouse(&mut self, button: WinitMouseButton, state: ElementState) {
        self.push(translate_mouse(button, state));
    }

    /// Hands over everything collected since the last drain.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, MouseButton};
    use winit::keyboard::KeyCode as WinitKeyCode;

    #[test]
    fn drops_consecutive_repeats() {
        let mut buffer = InputBuffer::new();
        let key = PhysicalKey::Code(WinitKeyCode::KeyD);

        buffer.push_key(key, ElementState::Pressed);
        buffer.push_key(key, ElementState::Pressed);
        buffer.push_key(key, ElementState::Released);

        assert_eq!(
            buffer.drain(),
            vec![
                InputEvent::KeyDown(KeyCode::KeyD),
                InputEvent::KeyUp(KeyCode::KeyD),
            ]
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn unmapped_keys_are_not_recorded() {
        let mut buffer = InputBuffer::new();
        assert!(!buffer.push_key(PhysicalKey::Code(WinitKeyCode::F13), ElementState::Pressed));
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn records_mouse_buttons() {
        let mut buffer = InputBuffer::new();
        buffer.push_mouse(WinitMouseButton::Left, ElementState::Pressed);

        assert_eq!(buffer.drain(), vec![InputEvent::MouseButtonDown(MouseButton::Left)]);
    }
}
