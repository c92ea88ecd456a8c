//! Input handling: held-key table and key bindings

pub mod input_controller;
pub mod key_state;

pub use input_controller::*;
pub use key_state::*;
