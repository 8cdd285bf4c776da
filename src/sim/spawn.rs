//! Obstacle and candy generation
//!
//! Keeps a lookahead buffer of obstacles queued to the right of the player.
//! Gap placement and candies come from the session RNG, so a fixed seed
//! reproduces the same course.

use glam::Vec2;
use rand::Rng;

use super::state::{Candy, GameState, Obstacle};
use crate::consts::*;

/// Place the opening obstacle: fixed offset, gap centered on screen
pub fn seed_first_obstacle(state: &mut GameState) {
    push_obstacle(
        state,
        SCREEN_WIDTH + FIRST_OBSTACLE_OFFSET,
        SCREEN_HEIGHT / 2.0,
    );
}

/// Spawn obstacles until the lookahead buffer is full.
/// Returns how many were created.
pub fn fill_lookahead(state: &mut GameState) -> usize {
    let mut spawned = 0;
    while state.obstacles.len() < state.tuning.lookahead.max(1) {
        let x = next_spawn_x(state);
        let gap_y = random_gap_center(state);
        push_obstacle(state, x, gap_y);
        spawned += 1;
    }
    spawned
}

/// One spacing to the right of the newest obstacle, never on screen
pub fn next_spawn_x(state: &GameState) -> f32 {
    state
        .obstacles
        .last()
        .map(|o| o.x + state.tuning.obstacle_spacing)
        .unwrap_or(SCREEN_WIDTH + OBSTACLE_OFFSCREEN_MARGIN)
        .max(SCREEN_WIDTH)
}

/// Gap center drawn uniformly from the range that keeps the gap on screen
fn random_gap_center(state: &mut GameState) -> f32 {
    let (lo, hi) = state.tuning.gap_center_range(SCREEN_HEIGHT);
    if hi > lo {
        state.rng.random_range(lo..=hi)
    } else {
        lo
    }
}

/// Add an obstacle at `x` with its gap centered on `gap_y`, and roll for a
/// candy inside the gap
fn push_obstacle(state: &mut GameState, x: f32, gap_y: f32) {
    let id = state.next_entity_id();
    let obstacle = Obstacle {
        id,
        x,
        width: state.tuning.obstacle_width,
        gap_y,
        gap_height: state.tuning.gap_height,
        speed: state.speed,
        passed: false,
    };
    log::trace!("Obstacle {} at x={:.0} gap_y={:.0}", id, x, gap_y);

    let chance = state.tuning.candy_chance.clamp(0.0, 1.0);
    if state.rng.random_bool(chance) {
        let jitter = state.tuning.candy_jitter();
        let offset = if jitter > 0.0 {
            state.rng.random_range(-jitter..=jitter)
        } else {
            0.0
        };
        let candy = Candy {
            id: state.next_entity_id(),
            pos: Vec2::new(x + obstacle.width / 2.0, gap_y + offset),
            size: state.tuning.candy_size,
            speed: state.speed,
        };
        state.candies.push(candy);
    }

    state.obstacles.push(obstacle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn state_with(tuning: Tuning) -> GameState {
        GameState::new(4242, tuning, 0)
    }

    #[test]
    fn test_fill_lookahead_reaches_minimum() {
        let mut state = state_with(Tuning::default());
        assert_eq!(state.obstacles.len(), 1);
        let spawned = fill_lookahead(&mut state);
        assert_eq!(spawned, 3);
        assert_eq!(state.obstacles.len(), 4);
        // Already full: nothing more to do
        assert_eq!(fill_lookahead(&mut state), 0);
    }

    #[test]
    fn test_spawned_obstacles_are_evenly_spaced() {
        let mut state = state_with(Tuning::default());
        fill_lookahead(&mut state);
        for pair in state.obstacles.windows(2) {
            assert!((pair[1].x - pair[0].x - 230.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_gaps_stay_on_screen() {
        let mut state = state_with(Tuning::default());
        for _ in 0..200 {
            state.obstacles.clear();
            fill_lookahead(&mut state);
            for obs in &state.obstacles {
                assert!(obs.gap_top() >= 0.0);
                assert!(obs.gap_bottom() <= SCREEN_HEIGHT);
            }
        }
    }

    #[test]
    fn test_guaranteed_candy_sits_inside_gap() {
        let tuning = Tuning {
            candy_chance: 1.0,
            ..Tuning::default()
        };
        let mut state = state_with(tuning);
        fill_lookahead(&mut state);
        assert_eq!(state.candies.len(), state.obstacles.len());

        let bound = state.tuning.candy_jitter();
        for obs in &state.obstacles {
            let center_x = obs.x + obs.width / 2.0;
            let owned: Vec<_> = state
                .candies
                .iter()
                .filter(|c| (c.pos.x - center_x).abs() < 1e-3)
                .collect();
            assert_eq!(owned.len(), 1);
            assert!((owned[0].pos.y - obs.gap_y).abs() <= bound);
        }
    }

    #[test]
    fn test_no_candy_when_chance_is_zero() {
        let tuning = Tuning {
            candy_chance: 0.0,
            ..Tuning::default()
        };
        let mut state = state_with(tuning);
        fill_lookahead(&mut state);
        assert!(state.candies.is_empty());
    }

    #[test]
    fn test_spawns_inherit_current_speed() {
        let mut state = state_with(Tuning {
            candy_chance: 1.0,
            ..Tuning::default()
        });
        state.speed = 4.5;
        fill_lookahead(&mut state);
        let newest = state.obstacles.last().unwrap();
        assert_eq!(newest.speed, 4.5);
        assert_eq!(state.candies.last().unwrap().speed, 4.5);
    }

    #[test]
    fn test_spawn_x_never_on_screen() {
        let mut state = state_with(Tuning::default());
        state.obstacles[0].x = -100.0;
        assert_eq!(next_spawn_x(&state), SCREEN_WIDTH);
        state.obstacles.clear();
        assert_eq!(next_spawn_x(&state), SCREEN_WIDTH + OBSTACLE_OFFSCREEN_MARGIN);
    }

    #[test]
    fn test_same_seed_same_course() {
        let mut a = state_with(Tuning::default());
        let mut b = state_with(Tuning::default());
        fill_lookahead(&mut a);
        fill_lookahead(&mut b);
        let gaps_a: Vec<f32> = a.obstacles.iter().map(|o| o.gap_y).collect();
        let gaps_b: Vec<f32> = b.obstacles.iter().map(|o| o.gap_y).collect();
        assert_eq!(gaps_a, gaps_b);
        assert_eq!(a.candies.len(), b.candies.len());
    }
}
