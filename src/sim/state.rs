//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::mask::rotated_size;
use super::sdf::{BatOutline, CandyOutline};
use super::spawn;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap
    Idle,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended, waiting for restart
    GameOver,
}

/// The player-controlled bat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bat {
    /// Sprite center
    pub pos: Vec2,
    /// Vertical velocity (px per baseline frame, negative = up)
    pub vel: f32,
    /// Visual tilt in degrees (positive = nose up)
    pub angle: f32,
}

impl Bat {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: 0.0,
            angle: 0.0,
        }
    }

    /// Where a fresh bat is placed on reset
    pub fn start_position() -> Vec2 {
        Vec2::new(
            (SCREEN_WIDTH * BAT_START_X_FRAC).floor(),
            (SCREEN_HEIGHT * BAT_START_Y_FRAC).floor(),
        )
    }

    pub fn outline() -> BatOutline {
        BatOutline::new(BAT_WIDTH, BAT_HEIGHT)
    }

    /// Bounding rectangle of the rotated sprite
    pub fn bounds(&self) -> Rect {
        let (w, h) = rotated_size(BAT_WIDTH, BAT_HEIGHT, self.angle);
        Rect::from_center(self.pos, w as f32, h as f32)
    }
}

impl Default for Bat {
    fn default() -> Self {
        Self::new(Self::start_position())
    }
}

/// A pair of columns with a gap between them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Vertical center of the gap
    pub gap_y: f32,
    pub gap_height: f32,
    /// Scroll speed (px per baseline frame)
    pub speed: f32,
    /// Already counted toward the score
    pub passed: bool,
}

impl Obstacle {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top of the gap (bottom edge of the upper column)
    pub fn gap_top(&self) -> f32 {
        self.gap_y - (self.gap_height / 2.0).floor()
    }

    /// Bottom of the gap (top edge of the lower column)
    pub fn gap_bottom(&self) -> f32 {
        self.gap_y + (self.gap_height / 2.0).floor()
    }

    /// Column above the gap, from the top of the screen
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top().max(0.0))
    }

    /// Column below the gap, down to the bottom of the screen
    pub fn bottom_rect(&self, screen_height: f32) -> Rect {
        let y = self.gap_bottom();
        Rect::new(self.x, y, self.width, (screen_height - y).max(0.0))
    }

    pub fn is_offscreen(&self) -> bool {
        self.right() < -OBSTACLE_OFFSCREEN_MARGIN
    }
}

/// A bonus candy floating inside an obstacle gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candy {
    pub id: u32,
    /// Sprite center
    pub pos: Vec2,
    /// Sprite edge length
    pub size: f32,
    /// Scroll speed (px per baseline frame)
    pub speed: f32,
}

impl Candy {
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size, self.size)
    }

    pub fn outline(&self) -> CandyOutline {
        CandyOutline::new(self.size)
    }

    pub fn is_offscreen(&self) -> bool {
        self.rect().right() < -CANDY_OFFSCREEN_MARGIN
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub bat: Bat,
    /// Live obstacles in spawn order (oldest first)
    pub obstacles: Vec<Obstacle>,
    pub candies: Vec<Candy>,
    pub score: u32,
    /// Best score across sessions
    pub high_score: u32,
    /// Current scroll speed (px per baseline frame)
    pub speed: f32,
    /// Simulation steps taken this session
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed, tuning and stored best score
    pub fn new(seed: u64, tuning: Tuning, high_score: u32) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            speed: tuning.start_speed,
            tuning,
            phase: GamePhase::Idle,
            bat: Bat::default(),
            obstacles: Vec::new(),
            candies: Vec::new(),
            score: 0,
            high_score,
            time_ticks: 0,
            next_id: 1,
        };
        state.reset();
        state
    }

    /// Start over: fresh bat, empty world with one pre-seeded obstacle.
    /// The high score and RNG stream carry over.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.bat = Bat::default();
        self.obstacles.clear();
        self.candies.clear();
        self.score = 0;
        self.speed = self.tuning.start_speed;
        self.time_ticks = 0;
        spawn::seed_first_obstacle(self);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_with_one_obstacle() {
        let state = GameState::new(7, Tuning::default(), 12);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 12);
        assert_eq!(state.speed, 3.0);
        assert_eq!(state.bat.pos, Vec2::new(190.0, 450.0));
    }

    #[test]
    fn test_first_obstacle_is_fixed() {
        let state = GameState::new(1, Tuning::default(), 0);
        let first = &state.obstacles[0];
        assert_eq!(first.x, SCREEN_WIDTH + FIRST_OBSTACLE_OFFSET);
        assert_eq!(first.gap_y, SCREEN_HEIGHT / 2.0);
    }

    #[test]
    fn test_obstacle_regions_frame_the_gap() {
        let obs = Obstacle {
            id: 1,
            x: 100.0,
            width: 78.0,
            gap_y: 450.0,
            gap_height: 380.0,
            speed: 3.0,
            passed: false,
        };
        let top = obs.top_rect();
        let bottom = obs.bottom_rect(SCREEN_HEIGHT);
        assert_eq!(top, Rect::new(100.0, 0.0, 78.0, 260.0));
        assert_eq!(bottom, Rect::new(100.0, 640.0, 78.0, 260.0));
        assert_eq!(bottom.bottom(), SCREEN_HEIGHT);
    }

    #[test]
    fn test_offscreen_margins() {
        let mut obs = Obstacle {
            id: 1,
            x: -100.0,
            width: 78.0,
            gap_y: 450.0,
            gap_height: 380.0,
            speed: 3.0,
            passed: true,
        };
        assert!(!obs.is_offscreen());
        obs.x = -129.0;
        assert!(obs.is_offscreen());

        let mut candy = Candy {
            id: 2,
            pos: Vec2::new(-25.0, 400.0),
            size: 20.0,
            speed: 3.0,
        };
        assert!(!candy.is_offscreen());
        candy.pos.x = -31.0;
        assert!(candy.is_offscreen());
    }

    #[test]
    fn test_bat_bounds_grow_with_tilt() {
        let mut bat = Bat::default();
        let flat = bat.bounds();
        assert_eq!((flat.w, flat.h), (BAT_WIDTH, BAT_HEIGHT));
        bat.angle = 25.0;
        let tilted = bat.bounds();
        assert!(tilted.h > flat.h);
        assert_eq!(tilted.left() + tilted.w / 2.0, bat.pos.x);
        assert_eq!(tilted.top() + tilted.h / 2.0, bat.pos.y);
    }
}
