//! Per-entity motion
//!
//! All updates take `scale`, the elapsed time as a multiple of one frame at
//! the 60 fps baseline (see [`crate::time_scale`]).

use super::state::{Bat, Candy, Obstacle};
use crate::tuning::Tuning;

/// Tilt the bat wants for a given vertical velocity: nose up while rising,
/// nose down while falling, clamped to the tilt limit
pub fn target_tilt(vel: f32, tuning: &Tuning) -> f32 {
    let limit = tuning.max_tilt_deg.abs();
    (-vel * tuning.tilt_per_velocity).clamp(-limit, limit)
}

impl Bat {
    /// Apply gravity, move, and ease the tilt toward its target
    pub fn update(&mut self, scale: f32, tuning: &Tuning) {
        self.vel += tuning.gravity * scale;
        self.pos.y += self.vel * scale;

        let target = target_tilt(self.vel, tuning);
        self.angle += (target - self.angle) * tuning.tilt_smoothing;
    }

    /// Upward impulse; replaces whatever velocity the bat had
    pub fn flap(&mut self, tuning: &Tuning) {
        self.vel = tuning.flap_strength;
    }
}

impl Obstacle {
    pub fn advance(&mut self, scale: f32) {
        self.x -= self.speed * scale;
    }
}

impl Candy {
    pub fn advance(&mut self, scale: f32) {
        self.pos.x -= self.speed * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_gravity_accelerates_downward() {
        let tuning = Tuning::default();
        let mut bat = Bat::new(Vec2::new(100.0, 100.0));
        bat.update(1.0, &tuning);
        assert!((bat.vel - 0.48).abs() < 1e-6);
        assert!((bat.pos.y - 100.48).abs() < 1e-4);
        bat.update(1.0, &tuning);
        assert!((bat.vel - 0.96).abs() < 1e-6);
        assert!((bat.pos.y - 101.44).abs() < 1e-4);
    }

    #[test]
    fn test_update_scales_with_elapsed_time() {
        let tuning = Tuning::default();
        let mut bat = Bat::new(Vec2::new(100.0, 100.0));
        bat.update(2.0, &tuning);
        assert!((bat.vel - 0.96).abs() < 1e-6);
        assert!((bat.pos.y - 101.92).abs() < 1e-4);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let tuning = Tuning::default();
        let mut bat = Bat::default();
        bat.vel = 42.0;
        bat.flap(&tuning);
        assert_eq!(bat.vel, -9.5);
        bat.flap(&tuning);
        assert_eq!(bat.vel, -9.5);
    }

    #[test]
    fn test_tilt_eases_instead_of_snapping() {
        let tuning = Tuning::default();
        let mut bat = Bat::default();
        bat.flap(&tuning);
        bat.update(1.0, &tuning);
        // vel = -9.02 so the target is 18.04; one step closes 12% of the distance
        assert!((bat.angle - 18.04 * 0.12).abs() < 1e-4);
        assert!(bat.angle < target_tilt(bat.vel, &tuning));
    }

    #[test]
    fn test_target_tilt_direction() {
        let tuning = Tuning::default();
        assert!(target_tilt(-5.0, &tuning) > 0.0);
        assert!(target_tilt(5.0, &tuning) < 0.0);
        assert_eq!(target_tilt(-100.0, &tuning), 25.0);
        assert_eq!(target_tilt(100.0, &tuning), -25.0);
    }

    #[test]
    fn test_scrolling_entities_move_left() {
        let mut obs = Obstacle {
            id: 1,
            x: 500.0,
            width: 78.0,
            gap_y: 450.0,
            gap_height: 380.0,
            speed: 3.0,
            passed: false,
        };
        obs.advance(1.5);
        assert!((obs.x - 495.5).abs() < 1e-4);

        let mut candy = Candy {
            id: 2,
            pos: Vec2::new(539.0, 450.0),
            size: 20.0,
            speed: 3.0,
        };
        candy.advance(1.5);
        assert!((candy.pos.x - 534.5).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_tilt_stays_within_limits(
            dts in proptest::collection::vec(0.0f32..200.0, 1..200),
            flaps in proptest::collection::vec(any::<bool>(), 1..200),
        ) {
            let tuning = Tuning::default();
            let mut bat = Bat::default();
            for (i, dt) in dts.iter().enumerate() {
                if flaps.get(i).copied().unwrap_or(false) {
                    bat.flap(&tuning);
                }
                bat.update(crate::time_scale(*dt), &tuning);
                prop_assert!(bat.angle >= -25.0 && bat.angle <= 25.0);
            }
        }

        #[test]
        fn prop_flap_sets_constant(vel in -1000.0f32..1000.0, angle in -25.0f32..25.0) {
            let tuning = Tuning::default();
            let mut bat = Bat::default();
            bat.vel = vel;
            bat.angle = angle;
            bat.flap(&tuning);
            prop_assert_eq!(bat.vel, tuning.flap_strength);
        }
    }
}
