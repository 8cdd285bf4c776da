//! Bat & Candy - a Flappy-style arcade game
//!
//! Core modules:
//! - `sim`: Simulation (physics, obstacle generation, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Best-score persistence
//! - `settings`: Process configuration
//! - `platform`: Input sources and frame timing
//! - `renderer`: Scene building and macroquad drawing
//! - `app`: Per-frame orchestration of the above

pub mod app;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use app::App;
pub use highscores::{FileHighScores, HighScoreStore};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (fixed resolution)
    pub const SCREEN_WIDTH: f32 = 680.0;
    pub const SCREEN_HEIGHT: f32 = 900.0;

    /// Frame rate the physics constants are tuned against
    pub const BASELINE_FPS: f32 = 60.0;
    /// Milliseconds per frame at the baseline rate
    pub const BASELINE_FRAME_MS: f32 = 1000.0 / BASELINE_FPS;
    /// Largest frame delta fed to the simulation (ms)
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Player sprite size
    pub const BAT_WIDTH: f32 = 56.0;
    pub const BAT_HEIGHT: f32 = 40.0;
    /// Player spawn position as a fraction of the screen
    pub const BAT_START_X_FRAC: f32 = 0.28;
    pub const BAT_START_Y_FRAC: f32 = 0.5;

    /// Obstacles are retired once their right edge is this far past the left edge
    pub const OBSTACLE_OFFSCREEN_MARGIN: f32 = 50.0;
    /// Candies are retired once their right edge is this far past the left edge
    pub const CANDY_OFFSCREEN_MARGIN: f32 = 20.0;
    /// Horizontal offset of the pre-seeded first obstacle
    pub const FIRST_OBSTACLE_OFFSET: f32 = 60.0;
}

/// Convert a frame delta in milliseconds to a multiple of the 60 fps baseline
#[inline]
pub fn time_scale(dt_ms: f32) -> f32 {
    dt_ms.max(0.0) / consts::BASELINE_FRAME_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_scale_baseline() {
        assert!((time_scale(consts::BASELINE_FRAME_MS) - 1.0).abs() < 1e-6);
        assert!((time_scale(2.0 * consts::BASELINE_FRAME_MS) - 2.0).abs() < 1e-6);
        assert_eq!(time_scale(-5.0), 0.0);
    }
}
