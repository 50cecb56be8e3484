//! Input Module
//!
//! Platform-agnostic input handling. Physical keys are mapped to logical
//! [`InputAction`]s through [`KeyBindings`] configured at startup, and gameplay
//! code polls an [`ActionState`] once per frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use bistro_engine::input::{ActionState, KeyBindings, KeyCode};
//!
//! let mut input = ActionState::new(KeyBindings::default());
//!
//! // Event loop
//! input.handle_key(KeyCode::W, true);
//! input.handle_mouse_motion(12.0, -3.0);
//!
//! // Update loop
//! let axes = input.move_axes(); // (x, z)
//! let look = input.take_look_delta();
//! input.end_frame();
//! ```

pub mod action_state;
pub mod bindings;
pub mod keyboard;

pub use action_state::ActionState;
pub use bindings::{Binding, InputAction, KeyBindings};
pub use keyboard::KeyCode;
