/// Held-key table

use rustc_hash::FxHashSet;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Set of keys currently held down
#[derive(Debug, Default, Clone)]
pub struct KeyState {
    pressed: FxHashSet<KeyCode>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Returns true on a fresh press
    /// (not an auto-repeat of a key already held).
    pub fn apply(&mut self, key: KeyCode, state: ElementState) -> bool {
        match state {
            ElementState::Pressed => self.pressed.insert(key),
            ElementState::Released => {
                self.pressed.remove(&key);
                false
            }
        }
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Release every key (focus lost)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

#[cfg(test)]
#[path = "key_state_tests.rs"]
mod tests;
