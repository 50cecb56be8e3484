//! Input Bindings Module
//!
//! Maps physical keys to logical actions. Bindings are plain data, built once at
//! startup (from defaults or from the JSON config) instead of being generated
//! from an editor asset.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::KeyCode;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move forward (default: W, ArrowUp)
    MoveForward,
    /// Move backward (default: S, ArrowDown)
    MoveBack,
    /// Strafe left (default: A, ArrowLeft)
    MoveLeft,
    /// Strafe right (default: D, ArrowRight)
    MoveRight,
    /// Sprint modifier (default: either Shift)
    Sprint,
    /// Open menu and release look control (default: Escape)
    Pause,
}

impl InputAction {
    /// Every action, in declaration order.
    pub const ALL: [InputAction; 6] = [
        InputAction::MoveForward,
        InputAction::MoveBack,
        InputAction::MoveLeft,
        InputAction::MoveRight,
        InputAction::Sprint,
        InputAction::Pause,
    ];
}

/// One action and the keys that trigger it, as stored in config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    pub action: InputAction,
    pub keys: Vec<KeyCode>,
}

/// Maps physical keys to logical actions.
///
/// A key triggers at most one action; an action may have several keys
/// (WASD and the arrow keys both drive movement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Binding>", into = "Vec<Binding>")]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, InputAction>,
    action_to_keys: HashMap<InputAction, Vec<KeyCode>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a KeyBindings instance with the default key mappings.
    ///
    /// Default bindings:
    /// - W / ArrowUp = MoveForward
    /// - S / ArrowDown = MoveBack
    /// - A / ArrowLeft = MoveLeft
    /// - D / ArrowRight = MoveRight
    /// - ShiftLeft / ShiftRight = Sprint
    /// - Escape = Pause
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);
        bindings.bind(KeyCode::ShiftLeft, InputAction::Sprint);
        bindings.bind(KeyCode::ShiftRight, InputAction::Sprint);
        bindings.bind(KeyCode::Escape, InputAction::Pause);

        bindings
    }

    /// Create a KeyBindings instance with nothing bound.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
            action_to_keys: HashMap::new(),
        }
    }

    /// Bind a physical key to a logical action.
    ///
    /// If the key was previously bound to another action, that binding is removed.
    /// Existing keys of `action` stay bound.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.unbind_key(key);
        self.key_to_action.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.key_to_action.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Remove every key bound to a specific action.
    pub fn unbind_action(&mut self, action: InputAction) {
        if let Some(keys) = self.action_to_keys.remove(&action) {
            for key in keys {
                self.key_to_action.remove(&key);
            }
        }
    }

    /// Get the action bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Get the keys bound to a logical action (empty if unbound).
    pub fn keys_for(&self, action: InputAction) -> &[KeyCode] {
        self.action_to_keys
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check if an action is currently pressed, given a set of pressed keys.
    pub fn is_action_pressed(&self, action: InputAction, pressed_keys: &HashSet<KeyCode>) -> bool {
        self.keys_for(action)
            .iter()
            .any(|key| pressed_keys.contains(key))
    }

}

impl From<Vec<Binding>> for KeyBindings {
    fn from(entries: Vec<Binding>) -> Self {
        let mut bindings = Self::empty();
        for entry in entries {
            for key in entry.keys {
                bindings.bind(key, entry.action);
            }
        }
        bindings
    }
}

impl From<KeyBindings> for Vec<Binding> {
    fn from(bindings: KeyBindings) -> Self {
        InputAction::ALL
            .iter()
            .filter_map(|&action| {
                let keys = bindings.keys_for(action);
                (!keys.is_empty()).then(|| Binding {
                    action,
                    keys: keys.to_vec(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.get_action(KeyCode::W), Some(InputAction::MoveForward));
        assert_eq!(bindings.get_action(KeyCode::ArrowUp), Some(InputAction::MoveForward));
        assert_eq!(bindings.get_action(KeyCode::S), Some(InputAction::MoveBack));
        assert_eq!(bindings.get_action(KeyCode::A), Some(InputAction::MoveLeft));
        assert_eq!(bindings.get_action(KeyCode::D), Some(InputAction::MoveRight));
        assert_eq!(bindings.get_action(KeyCode::ShiftLeft), Some(InputAction::Sprint));
        assert_eq!(bindings.get_action(KeyCode::ShiftRight), Some(InputAction::Sprint));
        assert_eq!(bindings.get_action(KeyCode::Escape), Some(InputAction::Pause));
        assert_eq!(bindings.get_action(KeyCode::Space), None);
    }

    #[test]
    fn test_action_has_two_keys() {
        let bindings = KeyBindings::new();
        assert_eq!(
            bindings.keys_for(InputAction::MoveForward),
            &[KeyCode::W, KeyCode::ArrowUp]
        );
    }

    #[test]
    fn test_rebind_key_moves_it() {
        let mut bindings = KeyBindings::new();

        // Rebind W to sprint
        bindings.bind(KeyCode::W, InputAction::Sprint);

        assert_eq!(bindings.get_action(KeyCode::W), Some(InputAction::Sprint));
        assert_eq!(bindings.keys_for(InputAction::MoveForward), &[KeyCode::ArrowUp]);
        assert_eq!(
            bindings.keys_for(InputAction::Sprint),
            &[KeyCode::ShiftLeft, KeyCode::ShiftRight, KeyCode::W]
        );
    }

    #[test]
    fn test_is_action_pressed() {
        let bindings = KeyBindings::new();

        let mut pressed = HashSet::new();
        pressed.insert(KeyCode::ArrowUp);
        pressed.insert(KeyCode::ShiftLeft);

        assert!(bindings.is_action_pressed(InputAction::MoveForward, &pressed));
        assert!(bindings.is_action_pressed(InputAction::Sprint, &pressed));
        assert!(!bindings.is_action_pressed(InputAction::MoveBack, &pressed));
    }

    #[test]
    fn test_unbind_key() {
        let mut bindings = KeyBindings::new();

        bindings.unbind_key(KeyCode::W);
        bindings.unbind_key(KeyCode::ArrowUp);

        assert_eq!(bindings.get_action(KeyCode::W), None);
        assert!(bindings.keys_for(InputAction::MoveForward).is_empty());
    }

    #[test]
    fn test_unbind_action() {
        let mut bindings = KeyBindings::new();

        bindings.unbind_action(InputAction::MoveLeft);

        assert_eq!(bindings.get_action(KeyCode::A), None);
        assert_eq!(bindings.get_action(KeyCode::ArrowLeft), None);

        let mut pressed = HashSet::new();
        pressed.insert(KeyCode::A);
        assert!(!bindings.is_action_pressed(InputAction::MoveLeft, &pressed));
    }

    #[test]
    fn test_bindings_from_json() {
        let json = r#"[
            { "action": "MoveForward", "keys": ["Q"] },
            { "action": "Sprint", "keys": ["ControlLeft", "ShiftRight"] }
        ]"#;
        let bindings: KeyBindings = serde_json::from_str(json).unwrap();

        assert_eq!(bindings.get_action(KeyCode::Q), Some(InputAction::MoveForward));
        assert_eq!(bindings.get_action(KeyCode::ShiftRight), Some(InputAction::Sprint));
        assert_eq!(bindings.get_action(KeyCode::W), None);
    }

    #[test]
    fn test_bindings_json_keeps_every_key() {
        let json = serde_json::to_string(&KeyBindings::new()).unwrap();
        let restored: KeyBindings = serde_json::from_str(&json).unwrap();

        for action in InputAction::ALL {
            assert_eq!(restored.keys_for(action), KeyBindings::new().keys_for(action));
        }
    }
}
