//=========================================================================
// Winit Translation
//=========================================================================
//
// Converts winit keyboard/mouse types into engine input types.
//
// Unmapped keys (function keys, numpad, exotic layouts) translate to
// `None` so they never reach the core.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, MouseButton};

//=== Event Translation ===================================================

/// Translates a winit physical key transition.
pub fn translate_key(physical_key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
    let key = match physical_key {
        PhysicalKey::Code(code) => KeyCode::from(code),
        PhysicalKey::Unidentified(_) => return None,
    };

    if key == KeyCode::Unidentified {
        return None;
    }

    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}

/// Translates a winit mouse button transition.
pub fn translate_mouse(button: WinitMouseButton, state: ElementState) -> InputEvent {
    let button = MouseButton::from(button);
    match state {
        ElementState::Pressed => InputEvent::MouseButtonDown(button),
        ElementState::Released => InputEvent::MouseButtonUp(button),
    }
}

//=== Winit Conversions ===================================================

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode as W;
        match code {
            //--- Alphabetic -------------------------------------------------
            W::KeyA => Self::KeyA, W::KeyB => Self::KeyB, W::KeyC => Self::KeyC,
            W::KeyD => Self::KeyD, W::KeyE => Self::KeyE, W::KeyF => Self::KeyF,
            W::KeyG => Self::KeyG, W::KeyH => Self::KeyH, W::KeyI => Self::KeyI,
            W::KeyJ => Self::KeyJ, W::KeyK => Self::KeyK, W::KeyL => Self::KeyL,
            W::KeyM => Self::KeyM, W::KeyN => Self::KeyN, W::KeyO => Self::KeyO,
            W::KeyP => Self::KeyP, W::KeyQ => Self::KeyQ, W::KeyR => Self::KeyR,
            W::KeyS => Self::KeyS, W::KeyT => Self::KeyT, W::KeyU => Self::KeyU,
            W::KeyV => Self::KeyV, W::KeyW => Self::KeyW, W::KeyX => Self::KeyX,
            W::KeyY => Self::KeyY, W::KeyZ => Self::KeyZ,

            //--- Arrows -----------------------------------------------------
            W::ArrowDown => Self::ArrowDown,
            W::ArrowLeft => Self::ArrowLeft,
            W::ArrowRight => Self::ArrowRight,
            W::ArrowUp => Self::ArrowUp,

            //--- Special ----------------------------------------------------
            W::Space => Self::Space,
            W::Enter => Self::Enter,
            W::Escape => Self::Escape,
            W::Tab => Self::Tab,
            W::ShiftLeft => Self::ShiftLeft,
            W::ShiftRight => Self::ShiftRight,

            _ => Self::Unidentified,
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => Self::Left,
            WinitMouseButton::Right => Self::Right,
            WinitMouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn keycode_conversion_alphabetic() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyE), KeyCode::KeyE);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyZ), KeyCode::KeyZ);
    }

    #[test]
    fn keycode_conversion_special() {
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Space);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
    }

    #[test]
    fn translate_key_press_and_release() {
        let key = PhysicalKey::Code(WinitKeyCode::KeyF);
        assert_eq!(
            translate_key(key, ElementState::Pressed),
            Some(InputEvent::KeyDown(KeyCode::KeyF))
        );
        assert_eq!(
            translate_key(key, ElementState::Released),
            Some(InputEvent::KeyUp(KeyCode::KeyF))
        );
    }

    #[test]
    fn translate_key_filters_unmapped() {
        assert_eq!(
            translate_key(PhysicalKey::Code(WinitKeyCode::F24), ElementState::Pressed),
            None
        );
        assert_eq!(
            translate_key(
                PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
                ElementState::Pressed
            ),
            None
        );
    }

    #[test]
    fn mouse_button_conversion() {
        assert_eq!(MouseButton::from(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
        assert_eq!(
            translate_mouse(WinitMouseButton::Right, ElementState::Pressed),
            InputEvent::MouseButtonDown(MouseButton::Right)
        );
    }
}
