//! Input sources
//!
//! The frame loop never polls a window directly; it asks an [`InputSource`]
//! for the commands of the current frame. The keyboard source reads
//! macroquad's event state, the scripted source replays a fixed sequence.

use std::collections::VecDeque;

use macroquad::input::{
    KeyCode, MouseButton, is_key_pressed, is_mouse_button_pressed, is_quit_requested,
};

use crate::sim::TickInput;

/// Everything the player asked for during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Commands for the simulation
    pub tick: TickInput,
    /// Leave the game after this frame
    pub quit: bool,
}

impl FrameInput {
    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }
}

/// Supplies one [`FrameInput`] per frame
pub trait InputSource {
    fn poll(&mut self) -> FrameInput;
}

/// Keyboard and mouse through macroquad.
///
/// Space / left click flap, Enter starts, P pauses, R restarts,
/// Escape or closing the window quits. Call `macroquad::input::prevent_quit`
/// at startup so a window close arrives here instead of killing the process.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> FrameInput {
        FrameInput {
            tick: TickInput {
                flap: is_key_pressed(KeyCode::Space)
                    || is_mouse_button_pressed(MouseButton::Left),
                start: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
                pause: is_key_pressed(KeyCode::P),
                restart: is_key_pressed(KeyCode::R),
            },
            quit: is_key_pressed(KeyCode::Escape) || is_quit_requested(),
        }
    }
}

/// Replays a fixed list of frames, then asks to quit
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> FrameInput {
        self.frames.pop_front().unwrap_or_else(FrameInput::quit)
    }
}
