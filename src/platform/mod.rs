//! Platform abstraction layer
//!
//! Handles the outside world for the frame loop:
//! - Input events (keyboard/mouse, or scripted for tests)
//! - Frame timing and the frame-rate cap

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{FrameInput, InputSource, KeyboardInput, ScriptedInput};
