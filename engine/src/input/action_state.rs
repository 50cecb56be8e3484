//! Action State
//!
//! Polling interface over raw key and pointer events. The host feeds events in
//! as they arrive; gameplay code reads logical actions, movement axes and the
//! accumulated look delta once per frame or physics step.

use std::collections::HashSet;

use glam::Vec2;

use super::{InputAction, KeyBindings, KeyCode};

/// Logical input state for one frame, resolved through [`KeyBindings`].
#[derive(Debug, Clone)]
pub struct ActionState {
    bindings: KeyBindings,
    pressed_keys: HashSet<KeyCode>,
    just_pressed: HashSet<InputAction>,
    /// Accumulated pointer delta since the last `end_frame`, +y = up.
    look_delta: Vec2,
    /// Whether the cursor is captured (hidden and confined).
    cursor_captured: bool,
}

impl Default for ActionState {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl ActionState {
    /// Create an action state using the given bindings. The cursor starts captured.
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pressed_keys: HashSet::new(),
            just_pressed: HashSet::new(),
            look_delta: Vec2::ZERO,
            cursor_captured: true,
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Replace the bindings. Held keys are released.
    pub fn set_bindings(&mut self, bindings: KeyBindings) {
        self.bindings = bindings;
        self.pressed_keys.clear();
        self.just_pressed.clear();
    }

    /// Handle a key press or release event.
    ///
    /// Key repeat (press while already held) does not re-trigger `just_pressed`.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.pressed_keys.insert(key) {
                if let Some(action) = self.bindings.get_action(key) {
                    self.just_pressed.insert(action);
                }
            }
        } else {
            self.pressed_keys.remove(&key);
        }
    }

    /// Accumulate raw pointer motion in screen space (+y = down, as windowing
    /// systems report it). Ignored while the cursor is not captured.
    pub fn handle_mouse_motion(&mut self, dx: f32, dy: f32) {
        if !self.cursor_captured {
            return;
        }
        self.look_delta.x += dx;
        self.look_delta.y -= dy;
    }

    /// Set whether the cursor is captured. Releasing it drops pending motion.
    pub fn set_captured(&mut self, captured: bool) {
        self.cursor_captured = captured;
        if !captured {
            self.look_delta = Vec2::ZERO;
        }
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Whether any key bound to `action` is held.
    pub fn pressed(&self, action: InputAction) -> bool {
        self.bindings.is_action_pressed(action, &self.pressed_keys)
    }

    /// Whether `action` went down during this frame.
    pub fn just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// One-dimensional axis from a negative/positive action pair: -1, 0 or 1.
    /// Both held cancels out.
    pub fn axis(&self, negative: InputAction, positive: InputAction) -> f32 {
        (self.pressed(positive) as i32 - self.pressed(negative) as i32) as f32
    }

    /// Movement axes as `(x, z)`: x = strafe right, z = forward.
    pub fn move_axes(&self) -> Vec2 {
        Vec2::new(
            self.axis(InputAction::MoveLeft, InputAction::MoveRight),
            self.axis(InputAction::MoveBack, InputAction::MoveForward),
        )
    }

    pub fn sprint_held(&self) -> bool {
        self.pressed(InputAction::Sprint)
    }

    /// Accumulated look delta without consuming it (+y = pointer moved up).
    #[inline]
    pub fn look_delta(&self) -> Vec2 {
        self.look_delta
    }

    /// Consume the accumulated look delta.
    pub fn take_look_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.look_delta)
    }

    /// Clear per-frame state: edge-triggered actions and pending look delta.
    /// Held keys persist until released.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.look_delta = Vec2::ZERO;
    }

    /// Release everything, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        self.pressed_keys.clear();
        self.just_pressed.clear();
        self.look_delta = Vec2::ZERO;
    }
}
