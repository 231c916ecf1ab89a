//=========================================================================
// Input Event Types
//
// Engine-side representation of the device input the possession core
// consumes. Platform layers (see `crate::platform`) translate their own
// events into these.
//
// Event Flow:
// ```text
// Host (winit, SDL, replay file)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held / pressed this tick)
//         ↓
//    InputProcessor → InputFrame
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,

    /// Side, thumb, and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier (location, not character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    ShiftLeft,
    ShiftRight,

    /// Keys the engine does not map.
    Unidentified,
}

//=== InputEvent ==========================================================

/// A single normalized device event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseButtonDown(MouseButton),
    MouseButtonUp(MouseButton),
    Unidentified,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn down_and_up_are_distinct() {
        assert_ne!(
            InputEvent::KeyDown(KeyCode::KeyE),
            InputEvent::KeyUp(KeyCode::KeyE)
        );
    }

    #[test]
    fn events_hash_by_payload() {
        let mut set = HashSet::new();
        set.insert(InputEvent::KeyDown(KeyCode::KeyA));
        set.insert(InputEvent::KeyDown(KeyCode::KeyD));
        set.insert(InputEvent::KeyDown(KeyCode::KeyA));
        assert_eq!(set.len(), 2);
    }
}
