//! Scene module - per-frame state, lighting, rain, and the frame loop

pub mod frame_context;
pub mod frame_loop;
pub mod lighting;
pub mod rain;

pub use frame_context::*;
pub use frame_loop::*;
pub use lighting::*;
pub use rain::*;
