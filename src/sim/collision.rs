//! Collision detection and scoring
//!
//! Obstacles and screen edges use coarse rectangle overlap. Candies use
//! pixel masks so the bat has to actually touch the sweet, not just its
//! transparent corners.

use super::geom::Rect;
use super::mask::{bat_mask, candy_mask};
use super::state::{Bat, Candy, Obstacle};

/// Mark obstacles whose right edge has slipped behind `player_x` as passed.
/// Returns how many were newly passed.
pub fn score_passed_obstacles(obstacles: &mut [Obstacle], player_x: f32) -> u32 {
    let mut passed = 0;
    for obs in obstacles.iter_mut().filter(|o| !o.passed) {
        if obs.right() < player_x {
            obs.passed = true;
            passed += 1;
        }
    }
    passed
}

/// True if `bounds` overlaps either column of any obstacle
pub fn hits_obstacle(bounds: &Rect, obstacles: &[Obstacle], screen_height: f32) -> bool {
    obstacles
        .iter()
        .any(|o| bounds.overlaps(&o.top_rect()) || bounds.overlaps(&o.bottom_rect(screen_height)))
}

/// True if `bounds` touches or crosses the top or bottom of the screen
pub fn hits_boundary(bounds: &Rect, screen_height: f32) -> bool {
    bounds.top() <= 0.0 || bounds.bottom() >= screen_height
}

/// Pixel-accurate overlap between the bat and a candy
pub fn bat_touches_candy(bat: &Bat, candy: &Candy) -> bool {
    let bounds = bat.bounds();
    let rect = candy.rect();
    if !bounds.overlaps(&rect) {
        return false;
    }
    let offset = (
        (rect.left() - bounds.left()).round() as i32,
        (rect.top() - bounds.top()).round() as i32,
    );
    bat_mask(&Bat::outline(), bat.angle)
        .overlap(&candy_mask(&candy.outline()), offset)
        .is_some()
}

/// Remove every candy the bat touches. Returns how many were collected.
pub fn collect_candies(bat: &Bat, candies: &mut Vec<Candy>) -> usize {
    let before = candies.len();
    candies.retain(|c| !bat_touches_candy(bat, c));
    before - candies.len()
}
