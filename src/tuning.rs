//! Data-driven game balance
//!
//! Every gameplay constant lives here so a session can be retuned from
//! `settings.json` without recompiling. Values are expressed per baseline
//! frame (1/60 s) unless noted.

use serde::{Deserialize, Serialize};

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Bat ===
    /// Downward acceleration (px/frame²)
    pub gravity: f32,
    /// Velocity set by a flap (negative = up)
    pub flap_strength: f32,
    /// Tilt limit in degrees (applied symmetrically)
    pub max_tilt_deg: f32,
    /// Degrees of tilt per unit of vertical velocity
    pub tilt_per_velocity: f32,
    /// Fraction of the remaining tilt closed each update
    pub tilt_smoothing: f32,

    // === Obstacles ===
    /// Scroll speed at the start of a session (px/frame)
    pub start_speed: f32,
    /// Vertical opening between the top and bottom column
    pub gap_height: f32,
    /// Horizontal distance between consecutive obstacles
    pub obstacle_spacing: f32,
    /// Column width
    pub obstacle_width: f32,
    /// Minimum number of live obstacles while playing
    pub lookahead: usize,
    /// Gap centers stay this fraction of the gap height away from the screen edges
    pub gap_margin_frac: f32,
    /// Speed gained per elapsed millisecond of play
    pub difficulty_rate: f32,

    // === Candy ===
    /// Chance that an obstacle carries a candy (0-1)
    pub candy_chance: f64,
    /// Candy sprite size (square)
    pub candy_size: f32,
    /// Candy offset from the gap center, as a fraction of the gap height
    pub candy_jitter_frac: f32,
    /// Points for collecting a candy
    pub candy_bonus: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.48,
            flap_strength: -9.5,
            max_tilt_deg: 25.0,
            tilt_per_velocity: 2.0,
            tilt_smoothing: 0.12,

            start_speed: 3.0,
            gap_height: 380.0,
            obstacle_spacing: 230.0,
            obstacle_width: 78.0,
            lookahead: 4,
            gap_margin_frac: 0.6,
            difficulty_rate: 0.000_000_25,

            candy_chance: 0.75,
            candy_size: 20.0,
            candy_jitter_frac: 0.25,
            candy_bonus: 5,
        }
    }
}

impl Tuning {
    /// Smallest and largest gap center that keep the whole gap on screen
    pub fn gap_center_range(&self, screen_height: f32) -> (f32, f32) {
        let margin = self.gap_height * self.gap_margin_frac;
        let lo = margin.min(screen_height / 2.0);
        let hi = (screen_height - margin).max(lo);
        (lo, hi)
    }

    /// Largest vertical offset of a candy from its gap center
    pub fn candy_jitter(&self) -> f32 {
        self.gap_height * self.candy_jitter_frac
    }
}
