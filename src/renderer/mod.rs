//! Rendering module
//!
//! `shapes` turns the game state into draw primitives, `draw` hands them to macroquad.

pub mod draw;
pub mod shapes;

pub use draw::{draw_frame, draw_scene};
pub use shapes::{Primitive, build_scene};
