//! Per-frame simulation step and phase transitions
//!
//! Core game loop that advances the session by one frame of wall-clock time.

use super::collision::{collect_candies, hits_boundary, hits_obstacle, score_passed_obstacles};
use super::spawn::fill_lookahead;
use super::state::{GamePhase, GameState};
use crate::consts::*;
use crate::time_scale;

/// Input commands for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap (space / left click); also starts a session from Idle
    pub flap: bool,
    /// Start key (enter); only meaningful in Idle
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
    /// Restart after game over
    pub restart: bool,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Idle -> Playing
    Started,
    Paused,
    Resumed,
    /// An obstacle was cleared; carries the new score
    ObstaclePassed { score: u32 },
    /// A candy was eaten; carries the new score
    CandyCollected { score: u32 },
    /// Fatal collision. `new_high_score` is set when the final score beat the
    /// previous best, which the caller should persist.
    GameOver { score: u32, new_high_score: bool },
    /// GameOver -> Idle with a fresh world
    Restarted,
}

/// Advance the game by `dt_ms` milliseconds of wall-clock time
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart && state.phase == GamePhase::GameOver {
        state.reset();
        events.push(GameEvent::Restarted);
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                events.push(GameEvent::Paused);
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                events.push(GameEvent::Resumed);
            }
            GamePhase::Idle | GamePhase::GameOver => {}
        }
    }

    match state.phase {
        GamePhase::Idle if input.flap || input.start => {
            state.phase = GamePhase::Playing;
            state.bat.flap(&state.tuning);
            events.push(GameEvent::Started);
        }
        GamePhase::Playing if input.flap => state.bat.flap(&state.tuning),
        _ => {}
    }

    // Don't simulate unless playing
    if state.phase != GamePhase::Playing {
        return events;
    }

    step(state, dt_ms, &mut events);
    events
}

/// One Playing step: difficulty, motion, spawning, scoring and collisions
fn step(state: &mut GameState, dt_ms: f32, events: &mut Vec<GameEvent>) {
    state.time_ticks += 1;

    // Difficulty ramps with raw elapsed milliseconds
    state.speed += state.tuning.difficulty_rate * dt_ms.max(0.0);
    let scale = time_scale(dt_ms);

    state.bat.update(scale, &state.tuning);

    let speed = state.speed;
    for obs in &mut state.obstacles {
        obs.speed = speed;
        obs.advance(scale);
    }
    let passed = score_passed_obstacles(&mut state.obstacles, state.bat.pos.x);
    for _ in 0..passed {
        state.score += 1;
        events.push(GameEvent::ObstaclePassed { score: state.score });
    }
    state.obstacles.retain(|o| !o.is_offscreen());

    for candy in &mut state.candies {
        candy.speed = speed;
        candy.advance(scale);
    }
    state.candies.retain(|c| !c.is_offscreen());

    // Refill after retiring so the buffer is full when the frame is drawn
    fill_lookahead(state);

    let bounds = state.bat.bounds();
    let fatal = hits_obstacle(&bounds, &state.obstacles, SCREEN_HEIGHT)
        || hits_boundary(&bounds, SCREEN_HEIGHT);

    let collected = collect_candies(&state.bat, &mut state.candies);
    for _ in 0..collected {
        state.score += state.tuning.candy_bonus;
        events.push(GameEvent::CandyCollected { score: state.score });
    }

    if fatal {
        state.phase = GamePhase::GameOver;
        let new_high_score = state.score > state.high_score;
        if new_high_score {
            state.high_score = state.score;
        }
        events.push(GameEvent::GameOver {
            score: state.score,
            new_high_score,
        });
    }
}
