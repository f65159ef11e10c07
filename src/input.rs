//! Keyboard and mouse state gathered from window events.
//!
//! [`Input`] separates instantaneous events (key just pressed this frame)
//! from continuous state (the mouse drag). The app feeds it every
//! [`WindowEvent`] and clears the per-frame part with
//! [`Input::begin_frame`] once the frame has been simulated.
//!
//! ```ignore
//! if input.key_pressed(KeyCode::S) {
//!     world.add_spring_at(viewport.to_world(input.mouse_position()));
//! }
//! if input.mouse_down() {
//!     // drag
//! }
//! ```

use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Keys the demo reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    S,
    R,
    Space,
    Escape,
    Other(u32),
}

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::KeyS => KeyCode::S,
            WinitKeyCode::KeyR => KeyCode::R,
            WinitKeyCode::Space => KeyCode::Space,
            WinitKeyCode::Escape => KeyCode::Escape,
            _ => KeyCode::Other(key as u32),
        }
    }
}

/// Input state tracking for keyboard and mouse.
#[derive(Debug, Default)]
pub struct Input {
    keys_held: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,

    /// Set by any button press, cleared by any button release.
    mouse_down: bool,

    /// Cursor position in window pixels.
    mouse_position: Vec2,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key was pressed this frame (just went down, no repeats).
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Whether the last mouse button event was a press.
    ///
    /// Buttons are not told apart: releasing any of them ends the drag,
    /// even if another is still down.
    pub fn mouse_down(&self) -> bool {
        self.mouse_down
    }

    /// Cursor position in window pixels, origin top-left.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Clear per-frame state. Held keys and the mouse drag persist.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    self.set_key(KeyCode::from(keycode), event.state);
                }
            }
            WindowEvent::MouseInput { state, .. } => self.set_button(*state),
            WindowEvent::CursorMoved { position, .. } => {
                self.set_mouse_position(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::Focused(false) => {
                // Release events for buttons let go outside the window never arrive.
                self.keys_held.clear();
                self.mouse_down = false;
            }
            _ => {}
        }
    }

    /// Move the cursor to `position` in window pixels.
    pub fn set_mouse_position(&mut self, position: Vec2) {
        self.mouse_position = position;
    }

    /// Record a key transition.
    pub fn set_key(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
            }
        }
    }

    /// Record a press or release of any mouse button.
    pub fn set_button(&mut self, state: ElementState) {
        self.mouse_down = state == ElementState::Pressed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_state() {
        let mut input = Input::new();
        assert!(!input.key_pressed(KeyCode::S));

        input.set_key(KeyCode::S, ElementState::Pressed);
        assert!(input.key_pressed(KeyCode::S));

        // After begin_frame, pressed is cleared
        input.begin_frame();
        assert!(!input.key_pressed(KeyCode::S));

        // Auto-repeat while held does not fire again
        input.set_key(KeyCode::S, ElementState::Pressed);
        assert!(!input.key_pressed(KeyCode::S));

        // A fresh press after release does
        input.set_key(KeyCode::S, ElementState::Released);
        input.set_key(KeyCode::S, ElementState::Pressed);
        assert!(input.key_pressed(KeyCode::S));
    }

    #[test]
    fn test_mouse_down_persists_across_frames() {
        let mut input = Input::new();
        assert!(!input.mouse_down());

        input.set_button(ElementState::Pressed);
        input.begin_frame();
        assert!(input.mouse_down());

        input.set_button(ElementState::Released);
        assert!(!input.mouse_down());
    }

    #[test]
    fn test_any_release_ends_mouse_down() {
        // Left then right pressed, right let go: the drag is over even
        // though left is still down.
        let mut input = Input::new();
        input.set_button(ElementState::Pressed);
        input.set_button(ElementState::Pressed);
        input.set_button(ElementState::Released);
        assert!(!input.mouse_down());

        // Only a new press starts it again.
        input.begin_frame();
        assert!(!input.mouse_down());
        input.set_button(ElementState::Pressed);
        assert!(input.mouse_down());
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyR), KeyCode::R);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
        let other = KeyCode::from(WinitKeyCode::KeyQ);
        assert!(matches!(other, KeyCode::Other(_)));
    }
}
