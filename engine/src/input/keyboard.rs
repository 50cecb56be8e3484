//! Keyboard Key Codes
//!
//! Generic key codes used by the binding layer, decoupled from the windowing
//! system. The host converts its native key events with [`KeyCode::from_winit`].

use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode as WinitKeyCode;

/// Generic key codes, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Q,
    E,
    Space,
    ShiftLeft,
    ShiftRight,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Number row
    Digit1,
    Digit2,
    Digit3,

    // Control keys
    Escape,
    Enter,
    Tab,
    ControlLeft,
    ControlRight,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Convert a winit physical key code into an engine key code.
    ///
    /// Keys the engine has no use for map to [`KeyCode::Unknown`].
    pub fn from_winit(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::KeyW => KeyCode::W,
            WinitKeyCode::KeyA => KeyCode::A,
            WinitKeyCode::KeyS => KeyCode::S,
            WinitKeyCode::KeyD => KeyCode::D,
            WinitKeyCode::KeyQ => KeyCode::Q,
            WinitKeyCode::KeyE => KeyCode::E,
            WinitKeyCode::Space => KeyCode::Space,
            WinitKeyCode::ShiftLeft => KeyCode::ShiftLeft,
            WinitKeyCode::ShiftRight => KeyCode::ShiftRight,
            WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
            WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
            WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
            WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
            WinitKeyCode::Digit1 => KeyCode::Digit1,
            WinitKeyCode::Digit2 => KeyCode::Digit2,
            WinitKeyCode::Digit3 => KeyCode::Digit3,
            WinitKeyCode::Escape => KeyCode::Escape,
            WinitKeyCode::Enter => KeyCode::Enter,
            WinitKeyCode::Tab => KeyCode::Tab,
            WinitKeyCode::ControlLeft => KeyCode::ControlLeft,
            WinitKeyCode::ControlRight => KeyCode::ControlRight,
            _ => KeyCode::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_winit_letters() {
        assert_eq!(KeyCode::from_winit(WinitKeyCode::KeyW), KeyCode::W);
        assert_eq!(KeyCode::from_winit(WinitKeyCode::KeyD), KeyCode::D);
        assert_eq!(KeyCode::from_winit(WinitKeyCode::ShiftLeft), KeyCode::ShiftLeft);
    }

    #[test]
    fn test_from_winit_unhandled_is_unknown() {
        assert_eq!(KeyCode::from_winit(WinitKeyCode::F7), KeyCode::Unknown);
        assert_eq!(KeyCode::from_winit(WinitKeyCode::KeyZ), KeyCode::Unknown);
    }

    #[test]
    fn test_key_code_json_names() {
        let json = serde_json::to_string(&KeyCode::ArrowUp).unwrap();
        assert_eq!(json, "\"ArrowUp\"");
        let key: KeyCode = serde_json::from_str("\"ShiftLeft\"").unwrap();
        assert_eq!(key, KeyCode::ShiftLeft);
    }
}
